//! Implementation of the `modroute-build info` command.
//!
//! Shows the detected platform, the library that would be produced and the
//! resolved configuration.

use std::path::Path;

use anyhow::Result;

use modroute_build_lib::consts::{PACKAGE_LICENSE, PACKAGE_VERSION};
use modroute_build_lib::platform::{BuildStrategy, resolve_library_filename};

use super::{ConfigArgs, PlatformArg, resolve_os};
use crate::output::{display_path, print_json, print_stat};

pub fn cmd_info(project_dir: &Path, platform: Option<PlatformArg>, args: ConfigArgs, json: bool) -> Result<()> {
  let os = resolve_os(platform);
  let config = args.into_config(project_dir);
  let library = resolve_library_filename(os, &config.package);
  let strategy = BuildStrategy::for_os(os);

  if json {
    let json_output = serde_json::json!({
      "platform": os.as_str(),
      "library": library,
      "strategy": strategy.as_str(),
      "package": { "name": config.package, "version": PACKAGE_VERSION, "license": PACKAGE_LICENSE },
      "config": config,
    });
    return print_json(&json_output);
  }

  println!("System:");
  print_stat("Platform", os.as_str());
  print_stat("Library", &library);
  print_stat("Strategy", strategy.as_str());
  println!();
  println!("Package:");
  print_stat("Name", &config.package);
  print_stat("Version", PACKAGE_VERSION);
  print_stat("License", PACKAGE_LICENSE);
  println!();
  println!("Paths:");
  print_stat("Project", &display_path(&config.project_dir));
  print_stat("Staging", &display_path(&config.staging_path()));
  match strategy {
    BuildStrategy::Prebuilt => print_stat("Prebuilt", &display_path(&config.prebuilt_path())),
    BuildStrategy::Native => {
      print_stat("Source", &display_path(&config.resolve(&config.source_dir)));
      print_stat("Build", &display_path(&config.build_path()));
      print_stat("Artifact", &display_path(&config.artifact_path()));
    }
  }
  println!();
  println!("CMake:");
  print_stat("Program", &config.cmake.display().to_string());
  print_stat("Build type", &config.build_type);
  match &config.dependency_path {
    Some(dep) => print_stat("Dependency", &dep.display().to_string()),
    None => print_stat("Dependency", "(default discovery)"),
  }

  Ok(())
}

//! Implementation of the `modroute-build build` command.
//!
//! Produces the shared library for the target platform and stages it for
//! packaging, or with `--dry-run` only prints the steps.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use modroute_build_lib::build::{plan, run_platform_build};
use modroute_build_lib::execute::SystemRunner;

use super::{ConfigArgs, PlatformArg, resolve_os};
use crate::output::{
  display_path, format_bytes, format_duration, print_info, print_stat, print_success, print_warning, symbols,
};

#[derive(Debug, Args)]
pub struct BuildArgs {
  /// Platform to build for (default: detected)
  #[arg(long, value_enum)]
  pub platform: Option<PlatformArg>,

  /// Print the steps without running them
  #[arg(long)]
  pub dry_run: bool,

  #[command(flatten)]
  pub config: ConfigArgs,
}

/// Execute the build command.
///
/// On Windows the prebuilt library is copied into the staging directory; on
/// every other platform the working build directory is recreated and CMake
/// configure and build run with inherited output before the library is staged.
pub fn cmd_build(project_dir: &Path, args: BuildArgs) -> Result<()> {
  let os = resolve_os(args.platform);
  let config = args.config.into_config(project_dir);
  debug!(?config, os = %os, "resolved build configuration");

  if args.dry_run {
    print_info(&format!("Steps for {} ({}):", os, config.package));
    for step in plan(os, &config) {
      println!("  {} {}", symbols::ARROW, step);
    }
    return Ok(());
  }

  let report = run_platform_build(os, &config, &mut SystemRunner)
    .with_context(|| format!("Failed to build {} for {}", config.package, os))?;

  print_success(&format!("Staged {}", display_path(&report.staged)));
  print_stat("Strategy", report.strategy.as_str());
  print_stat("From", &display_path(&report.source));
  print_stat("Size", &format_bytes(report.bytes));
  print_stat("Elapsed", &format_duration(report.elapsed));

  for warning in &report.warnings {
    print_warning(&format!(
      "Could not create {}: {}",
      warning.path.display(),
      warning.error
    ));
  }

  Ok(())
}

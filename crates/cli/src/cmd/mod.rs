mod build;
mod clean;
mod info;

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use modroute_build_lib::config::BuildConfig;
use modroute_build_lib::platform::os::Os;

pub use build::{BuildArgs, cmd_build};
pub use clean::cmd_clean;
pub use info::cmd_info;

/// Platform to build for, overriding detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
  Linux,
  Macos,
  Windows,
  Other,
}

impl From<PlatformArg> for Os {
  fn from(arg: PlatformArg) -> Self {
    match arg {
      PlatformArg::Linux => Os::Linux,
      PlatformArg::Macos => Os::MacOs,
      PlatformArg::Windows => Os::Windows,
      PlatformArg::Other => Os::Other,
    }
  }
}

/// Resolve the target platform: explicit choice, else the running system.
pub fn resolve_os(platform: Option<PlatformArg>) -> Os {
  platform.map(Os::from).unwrap_or_else(Os::current)
}

/// Flags that override the environment-derived build configuration.
#[derive(Debug, Default, Args)]
pub struct ConfigArgs {
  /// Path to the routing library dependency (overrides LNSPDPTW_PATH)
  #[arg(long, value_name = "PATH")]
  pub dependency_path: Option<PathBuf>,

  /// CMake executable (overrides CMAKE)
  #[arg(long, value_name = "PROGRAM")]
  pub cmake: Option<PathBuf>,

  /// CMake source tree [default: ..]
  #[arg(long, value_name = "DIR")]
  pub source_dir: Option<PathBuf>,

  /// Working build directory, recreated on every build [default: native]
  #[arg(long, value_name = "DIR")]
  pub build_dir: Option<PathBuf>,

  /// Directory the native build leaves the library in [default: native/lib]
  #[arg(long, value_name = "DIR")]
  pub artifact_dir: Option<PathBuf>,

  /// Directory holding the prebuilt Windows library [default: ../bin]
  #[arg(long, value_name = "DIR")]
  pub prebuilt_dir: Option<PathBuf>,

  /// Package staging directory [default: mod_route]
  #[arg(long, value_name = "DIR")]
  pub staging_dir: Option<PathBuf>,

  /// CMAKE_BUILD_TYPE passed to configure [default: Release]
  #[arg(long, value_name = "TYPE")]
  pub build_type: Option<String>,

  /// Configure with ENABLE_PYTHON=OFF
  #[arg(long)]
  pub no_python: bool,

  /// Extra cache entry passed to configure as -DKEY=VALUE
  #[arg(short = 'D', value_name = "KEY=VALUE", value_parser = parse_define)]
  pub define: Vec<String>,
}

impl ConfigArgs {
  /// Layer these flags over `BuildConfig::from_env`, rooted at `project_dir`.
  pub fn into_config(self, project_dir: &Path) -> BuildConfig {
    let mut config = BuildConfig::from_env();
    config.project_dir = project_dir.to_path_buf();

    if let Some(dep) = self.dependency_path {
      config.dependency_path = (!dep.as_os_str().is_empty()).then_some(dep);
    }
    if let Some(cmake) = self.cmake {
      config.cmake = cmake;
    }
    if let Some(dir) = self.source_dir {
      config.source_dir = dir;
    }
    if let Some(dir) = self.build_dir {
      config.build_dir = dir;
    }
    if let Some(dir) = self.artifact_dir {
      config.artifact_dir = dir;
    }
    if let Some(dir) = self.prebuilt_dir {
      config.prebuilt_dir = dir;
    }
    if let Some(dir) = self.staging_dir {
      config.staging_dir = dir;
    }
    if let Some(build_type) = self.build_type {
      config.build_type = build_type;
    }
    if self.no_python {
      config.enable_python = false;
    }
    config.defines.extend(self.define);

    config
  }
}

fn parse_define(value: &str) -> Result<String, String> {
  match value.split_once('=') {
    Some((key, _)) if !key.is_empty() => Ok(value.to_string()),
    _ => Err(format!("expected KEY=VALUE, got '{}'", value)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_define_requires_key_and_equals() {
    assert_eq!(parse_define("ENABLE_JAVA=ON"), Ok("ENABLE_JAVA=ON".to_string()));
    assert_eq!(parse_define("EMPTY="), Ok("EMPTY=".to_string()));
    assert!(parse_define("ENABLE_JAVA").is_err());
    assert!(parse_define("=ON").is_err());
  }

  #[test]
  fn flags_override_defaults() {
    let args = ConfigArgs {
      dependency_path: Some(PathBuf::from("/opt/dep")),
      build_dir: Some(PathBuf::from("out")),
      no_python: true,
      define: vec!["FOO=1".to_string()],
      ..ConfigArgs::default()
    };

    let config = args.into_config(Path::new("/work/python"));

    assert_eq!(config.project_dir, PathBuf::from("/work/python"));
    assert_eq!(config.dependency_path, Some(PathBuf::from("/opt/dep")));
    assert_eq!(config.build_dir, PathBuf::from("out"));
    assert!(!config.enable_python);
    assert_eq!(config.defines, vec!["FOO=1"]);
  }

  #[test]
  fn empty_dependency_flag_clears_dependency() {
    let args = ConfigArgs {
      dependency_path: Some(PathBuf::new()),
      ..ConfigArgs::default()
    };

    assert_eq!(args.into_config(Path::new(".")).dependency_path, None);
  }

  #[test]
  fn platform_arg_names_match_os_identifiers() {
    for arg in PlatformArg::value_variants() {
      let name = arg.to_possible_value().unwrap().get_name().to_string();
      assert_eq!(name, Os::from(*arg).as_str());
    }
  }

  #[test]
  fn platform_arg_maps_to_os() {
    assert_eq!(resolve_os(Some(PlatformArg::Windows)), Os::Windows);
    assert_eq!(resolve_os(Some(PlatformArg::Macos)), Os::MacOs);
    assert_eq!(resolve_os(None), Os::current());
  }
}

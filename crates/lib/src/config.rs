//! Build configuration.
//!
//! Every path is stored as given and resolved against `project_dir` when used,
//! so the defaults reproduce the layout expected by the Python package:
//! sources in `..`, a throwaway `native/` build tree, and the staged library
//! under `mod_route/`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::consts::{
  CMAKE_ENV, DEFAULT_ARTIFACT_DIR, DEFAULT_BUILD_DIR, DEFAULT_BUILD_TYPE, DEFAULT_CMAKE, DEFAULT_PREBUILT_DIR,
  DEFAULT_SOURCE_DIR, DEPENDENCY_ENV, PACKAGE_NAME,
};

/// Configuration for a single orchestrator run.
///
/// Read once at startup and never mutated while a build is running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
  /// Library base name, also the name of the staging directory.
  pub package: String,
  /// CMake target compiled in the build phase.
  pub target: String,
  /// Directory relative paths resolve against; commands run here.
  pub project_dir: PathBuf,
  /// CMake source tree.
  pub source_dir: PathBuf,
  /// Working build directory, recreated on every native build.
  pub build_dir: PathBuf,
  /// Where the native build leaves the shared library.
  pub artifact_dir: PathBuf,
  /// Where a prebuilt library is read from on Windows.
  pub prebuilt_dir: PathBuf,
  /// Package staging directory receiving the library.
  pub staging_dir: PathBuf,
  /// Location of the routing library dependency, forwarded to configure.
  pub dependency_path: Option<PathBuf>,
  /// CMake executable.
  pub cmake: PathBuf,
  pub build_type: String,
  pub enable_python: bool,
  /// Extra `KEY=VALUE` cache entries passed to configure as `-DKEY=VALUE`.
  pub defines: Vec<String>,
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self {
      package: PACKAGE_NAME.to_string(),
      target: PACKAGE_NAME.to_string(),
      project_dir: PathBuf::from("."),
      source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
      build_dir: PathBuf::from(DEFAULT_BUILD_DIR),
      artifact_dir: PathBuf::from(DEFAULT_ARTIFACT_DIR),
      prebuilt_dir: PathBuf::from(DEFAULT_PREBUILT_DIR),
      staging_dir: PathBuf::from(PACKAGE_NAME),
      dependency_path: None,
      cmake: PathBuf::from(DEFAULT_CMAKE),
      build_type: DEFAULT_BUILD_TYPE.to_string(),
      enable_python: true,
      defines: Vec::new(),
    }
  }
}

impl BuildConfig {
  /// Default configuration with `LNSPDPTW_PATH` and `CMAKE` applied.
  ///
  /// Empty values are treated the same as unset ones.
  pub fn from_env() -> Self {
    let mut config = Self::default();
    config.dependency_path = env_path(DEPENDENCY_ENV);
    if let Some(cmake) = env_path(CMAKE_ENV) {
      config.cmake = cmake;
    }
    config
  }

  /// Resolve a configured path against the project directory.
  pub fn resolve(&self, path: &Path) -> PathBuf {
    self.project_dir.join(path)
  }

  pub fn build_path(&self) -> PathBuf {
    self.resolve(&self.build_dir)
  }

  pub fn artifact_path(&self) -> PathBuf {
    self.resolve(&self.artifact_dir)
  }

  pub fn prebuilt_path(&self) -> PathBuf {
    self.resolve(&self.prebuilt_dir)
  }

  pub fn staging_path(&self) -> PathBuf {
    self.resolve(&self.staging_dir)
  }
}

fn env_path(var: &str) -> Option<PathBuf> {
  std::env::var_os(var).and_then(non_empty).map(PathBuf::from)
}

fn non_empty(value: OsString) -> Option<OsString> {
  if value.is_empty() { None } else { Some(value) }
}

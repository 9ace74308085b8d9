//! The two-phase CMake build.

use std::path::Path;

use tracing::info;

use crate::config::BuildConfig;
use crate::execute::{BuildError, CommandRunner, build_invocation, configure_invocation};
use crate::util::fs::{DirectoryWarning, ensure_directories};

/// Build the shared library from source.
///
/// Deletes and recreates the working build directory so nothing from a
/// previous run leaks in, then runs configure followed by build. The first
/// non-zero exit aborts: if configure fails, build never runs.
///
/// Two builds must not share a working directory concurrently; the removal
/// step would race with the other build's compile.
pub fn build_native<R>(config: &BuildConfig, runner: &mut R) -> Result<Vec<DirectoryWarning>, BuildError>
where
  R: CommandRunner + ?Sized,
{
  let build_dir = config.build_path();

  remove_build_dir(&build_dir)?;
  let warnings = ensure_directories([&build_dir]);

  info!(source = %config.source_dir.display(), build = %build_dir.display(), "configuring");
  runner.run(&configure_invocation(config))?;

  info!(target = %config.target, "building");
  runner.run(&build_invocation(config))?;

  Ok(warnings)
}

/// Remove the working build directory.
///
/// Returns whether there was anything to remove. The staging directory is
/// never touched.
pub fn clean(config: &BuildConfig) -> Result<bool, BuildError> {
  remove_build_dir(&config.build_path())
}

fn remove_build_dir(path: &Path) -> Result<bool, BuildError> {
  if !path.is_dir() {
    return Ok(false);
  }

  info!(path = %path.display(), "removing previous build directory");
  std::fs::remove_dir_all(path).map_err(|source| BuildError::RemoveDir {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(true)
}

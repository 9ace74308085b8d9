//! Producing and staging the shared library.
//!
//! The platform decides the strategy once per run:
//!
//! - **Prebuilt** (Windows): copy the shipped DLL from the prebuilt directory.
//!   No external command runs.
//! - **Native** (everything else): recreate the working build directory,
//!   run CMake configure and build, then copy the library out of the artifact
//!   directory.
//!
//! Either way the library ends up as `<staging_dir>/<package>.<ext>`.
//!
//! # Submodules
//!
//! - [`native`] - The two-phase CMake build
//! - [`stage`] - Copying the library into the staging directory

pub mod native;
pub mod stage;
mod types;

use std::time::Instant;

use tracing::info;

use crate::config::BuildConfig;
use crate::execute::{BuildError, CommandRunner, build_invocation, configure_invocation};
use crate::platform::os::Os;
use crate::platform::{BuildStrategy, resolve_library_filename};
use crate::util::fs::ensure_directories;

pub use native::{build_native, clean};
pub use stage::stage_library;
pub use types::*;

/// Produce the shared library for `os` and place it in the staging directory.
///
/// Fails fast: the first command failure or a missing library aborts the run
/// and nothing staged by it should be considered valid.
pub fn run_platform_build<R>(os: Os, config: &BuildConfig, runner: &mut R) -> Result<BuildReport, BuildError>
where
  R: CommandRunner + ?Sized,
{
  let started = Instant::now();
  let strategy = BuildStrategy::for_os(os);
  let library = resolve_library_filename(os, &config.package);
  let staging = config.staging_path();

  info!(os = %os, strategy = %strategy, library = %library, "starting platform build");

  let mut warnings = ensure_directories([&staging]);

  let source = match strategy {
    BuildStrategy::Prebuilt => config.prebuilt_path().join(&library),
    BuildStrategy::Native => {
      warnings.extend(build_native(config, runner)?);
      config.artifact_path().join(&library)
    }
  };

  let staged = staging.join(&library);
  let bytes = stage_library(&source, &staged)?;

  Ok(BuildReport {
    os,
    strategy,
    library,
    source,
    staged,
    bytes,
    elapsed: started.elapsed(),
    warnings,
  })
}

/// Describe the steps `run_platform_build` would take, without performing them.
pub fn plan(os: Os, config: &BuildConfig) -> Vec<Step> {
  let library = resolve_library_filename(os, &config.package);
  let staging = config.staging_path();
  let mut steps = vec![Step::CreateDir(staging.clone())];

  let source = match BuildStrategy::for_os(os) {
    BuildStrategy::Prebuilt => config.prebuilt_path().join(&library),
    BuildStrategy::Native => {
      let build_dir = config.build_path();
      if build_dir.is_dir() {
        steps.push(Step::RemoveDir(build_dir.clone()));
      }
      steps.push(Step::CreateDir(build_dir));
      steps.push(Step::Run(configure_invocation(config)));
      steps.push(Step::Run(build_invocation(config)));
      config.artifact_path().join(&library)
    }
  };

  steps.push(Step::Copy {
    from: source,
    to: staging.join(&library),
  });
  steps
}

//! CMake invocations for the two-phase native build.

use std::ffi::{OsStr, OsString};

use crate::config::BuildConfig;
use crate::consts::DEPENDENCY_ENV;

use super::types::Invocation;

/// Render the configure phase: generate build files for the source tree.
///
/// Produces `cmake -S <source> -B <build> -DENABLE_PYTHON=ON
/// -DCMAKE_BUILD_TYPE=<type>`, followed by `-DLNSPDPTW_PATH=<dep>` when a
/// dependency path is configured and then any extra defines.
pub fn configure_invocation(config: &BuildConfig) -> Invocation {
  let python = if config.enable_python { "ON" } else { "OFF" };

  let mut invocation = Invocation::new(&config.cmake, &config.project_dir)
    .arg("-S")
    .arg(&config.source_dir)
    .arg("-B")
    .arg(&config.build_dir)
    .arg(format!("-DENABLE_PYTHON={}", python))
    .arg(format!("-DCMAKE_BUILD_TYPE={}", config.build_type));

  if let Some(dep) = config.dependency_path.as_ref().filter(|p| !p.as_os_str().is_empty()) {
    invocation = invocation.arg(cache_entry(DEPENDENCY_ENV, dep.as_os_str()));
  }

  for define in &config.defines {
    invocation = invocation.arg(format!("-D{}", define));
  }

  invocation
}

/// Render the build phase: compile the configured target.
pub fn build_invocation(config: &BuildConfig) -> Invocation {
  Invocation::new(&config.cmake, &config.project_dir)
    .arg("--build")
    .arg(&config.build_dir)
    .arg("--target")
    .arg(config.target.as_str())
}

/// `-D<key>=<value>` without forcing `value` through UTF-8.
fn cache_entry(key: &str, value: &OsStr) -> OsString {
  let mut entry = OsString::from(format!("-D{}=", key));
  entry.push(value);
  entry
}

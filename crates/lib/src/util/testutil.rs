//! Test utilities for modroute-build-lib.
//!
//! Cross-platform invocations for exercising the real runner, and a
//! recording runner that stands in for CMake.

use std::path::{Path, PathBuf};

use crate::execute::{BuildError, CommandRunner, Invocation};

/// Returns an invocation running a shell script in `cwd`.
#[cfg(unix)]
pub fn shell_invocation(script: &str, cwd: &Path) -> Invocation {
  Invocation::new("/bin/sh", cwd).arg("-c").arg(script)
}

#[cfg(windows)]
pub fn shell_invocation(script: &str, cwd: &Path) -> Invocation {
  Invocation::new("cmd.exe", cwd).arg("/C").arg(script)
}

/// Returns an invocation that creates an empty file named `filename` in `cwd`.
#[cfg(unix)]
pub fn touch_invocation(filename: &str, cwd: &Path) -> Invocation {
  Invocation::new("/usr/bin/touch", cwd).arg(filename)
}

#[cfg(windows)]
pub fn touch_invocation(filename: &str, cwd: &Path) -> Invocation {
  Invocation::new("powershell.exe", cwd)
    .arg("-NoProfile")
    .arg("-Command")
    .arg(format!("New-Item -ItemType File -Path '{}' -Force | Out-Null", filename))
}

/// A runner that records invocations instead of spawning them.
///
/// Optionally fails the n-th call, writes an artifact when the build phase
/// runs, and snapshots the contents of a watched directory at every call.
#[derive(Debug, Default)]
pub struct RecordingRunner {
  pub calls: Vec<Invocation>,
  /// Entry names of the watched directory at each call, `None` if missing.
  pub observed: Vec<Option<Vec<String>>>,
  fail_at: Option<(usize, i32)>,
  artifact: Option<PathBuf>,
  watch: Option<PathBuf>,
}

impl RecordingRunner {
  pub fn new() -> Self {
    Self::default()
  }

  /// Fail the call with zero-based index `index`, exiting with `code`.
  pub fn failing_at(mut self, index: usize, code: i32) -> Self {
    self.fail_at = Some((index, code));
    self
  }

  /// Write a fake shared library to `path` when `cmake --build` runs.
  pub fn producing(mut self, path: impl Into<PathBuf>) -> Self {
    self.artifact = Some(path.into());
    self
  }

  pub fn watching(mut self, dir: impl Into<PathBuf>) -> Self {
    self.watch = Some(dir.into());
    self
  }
}

impl CommandRunner for RecordingRunner {
  fn run(&mut self, invocation: &Invocation) -> Result<(), BuildError> {
    let index = self.calls.len();
    self.calls.push(invocation.clone());

    if let Some(dir) = &self.watch {
      let entries = std::fs::read_dir(dir).ok().map(|rd| {
        let mut names: Vec<String> = rd
          .filter_map(Result::ok)
          .map(|e| e.file_name().to_string_lossy().into_owned())
          .collect();
        names.sort();
        names
      });
      self.observed.push(entries);
    }

    if let Some((fail_index, code)) = self.fail_at
      && fail_index == index
    {
      return Err(BuildError::CommandFailed {
        command: invocation.to_string(),
        code: Some(code),
      });
    }

    if let Some(artifact) = &self.artifact
      && invocation.has_arg("--build")
    {
      if let Some(parent) = artifact.parent() {
        std::fs::create_dir_all(parent).unwrap();
      }
      std::fs::write(artifact, b"\x7fELF fake library").unwrap();
    }

    Ok(())
  }
}

//! Types for external command execution.
//!
//! This module defines the rendered command type passed to a runner and the
//! error type shared by every fallible orchestrator operation.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A fully rendered external command.
///
/// Arguments are kept as OS strings so paths reach the child process byte for
/// byte; only `Display` renders them lossily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  /// Program to execute.
  pub program: PathBuf,
  /// Arguments, in order.
  pub args: Vec<OsString>,
  /// Working directory the program runs in.
  pub cwd: PathBuf,
}

impl Invocation {
  pub fn new(program: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
      cwd: cwd.into(),
    }
  }

  pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
    self.args.push(arg.into());
    self
  }

  /// Returns true if any argument equals `arg`.
  pub fn has_arg(&self, arg: &str) -> bool {
    self.args.iter().any(|a| a.as_os_str() == OsStr::new(arg))
  }

  /// Arguments as UTF-8, with invalid sequences replaced.
  pub fn args_lossy(&self) -> Vec<String> {
    self.args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
  }
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_quoted(f, &self.program.to_string_lossy())?;
    for arg in &self.args {
      f.write_str(" ")?;
      write_quoted(f, &arg.to_string_lossy())?;
    }
    Ok(())
  }
}

/// Single-quote empty words and words containing whitespace or quotes.
fn write_quoted(f: &mut fmt::Formatter<'_>, word: &str) -> fmt::Result {
  if !word.is_empty() && !word.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
    return f.write_str(word);
  }
  write!(f, "'{}'", word.replace('\'', r"'\''"))
}

fn exit_description(code: &Option<i32>) -> String {
  match code {
    Some(code) => format!("exit code {}", code),
    None => "terminated by signal".to_string(),
  }
}

/// Errors that abort a build.
#[derive(Debug, Error)]
pub enum BuildError {
  /// An external command exited with a non-zero status, or was killed
  /// (`code` is `None`).
  #[error("command failed ({}): {command}", exit_description(.code))]
  CommandFailed { command: String, code: Option<i32> },

  /// An external command could not be started at all.
  #[error("failed to start command {command}: {source}")]
  Spawn {
    command: String,
    #[source]
    source: std::io::Error,
  },

  /// The shared library was not where the build or prebuilt layout puts it.
  #[error("shared library not found: {}", path.display())]
  MissingArtifact { path: PathBuf },

  /// The previous working build directory could not be removed.
  #[error("failed to remove directory {}: {source}", path.display())]
  RemoveDir {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// Copying the shared library into the staging directory failed.
  #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
  Copy {
    from: PathBuf,
    to: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

//! Running external commands.

use std::process::Command;

use tracing::{debug, info};

use super::types::{BuildError, Invocation};

/// Executes rendered invocations.
///
/// Every external process the orchestrator starts goes through this trait.
pub trait CommandRunner {
  /// Run `invocation` to completion, failing on a non-zero exit status.
  fn run(&mut self, invocation: &Invocation) -> Result<(), BuildError>;
}

/// Spawns invocations as child processes.
///
/// stdout and stderr are inherited, so the tool's own diagnostics reach the
/// user verbatim. The call blocks until the child exits; there is no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&mut self, invocation: &Invocation) -> Result<(), BuildError> {
    let command = invocation.to_string();
    info!(cmd = %command, "executing command");
    debug!(working_dir = ?invocation.cwd, "spawning process");

    let status = Command::new(&invocation.program)
      .args(&invocation.args)
      .current_dir(&invocation.cwd)
      .status()
      .map_err(|source| BuildError::Spawn {
        command: command.clone(),
        source,
      })?;

    if !status.success() {
      return Err(BuildError::CommandFailed {
        command,
        code: status.code(),
      });
    }

    debug!(cmd = %command, "command succeeded");
    Ok(())
  }
}

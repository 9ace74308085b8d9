use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::execute::Invocation;
use crate::platform::BuildStrategy;
use crate::platform::os::Os;
use crate::util::fs::DirectoryWarning;

/// Outcome of a successful platform build.
#[derive(Debug)]
pub struct BuildReport {
  pub os: Os,
  pub strategy: BuildStrategy,
  /// Library filename, e.g. `mod_route.so`.
  pub library: String,
  /// Where the library was copied from.
  pub source: PathBuf,
  /// Where the library now lives inside the staging directory.
  pub staged: PathBuf,
  /// Size of the staged library in bytes.
  pub bytes: u64,
  pub elapsed: Duration,
  /// Directories that could not be created along the way.
  pub warnings: Vec<DirectoryWarning>,
}

/// One filesystem or process step of a platform build, as shown by a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
  CreateDir(PathBuf),
  RemoveDir(PathBuf),
  Run(Invocation),
  Copy { from: PathBuf, to: PathBuf },
}

impl fmt::Display for Step {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Step::CreateDir(path) => write!(f, "create {}", path.display()),
      Step::RemoveDir(path) => write!(f, "remove {}", path.display()),
      Step::Run(invocation) => write!(f, "run {}", invocation),
      Step::Copy { from, to } => write!(f, "copy {} -> {}", from.display(), to.display()),
    }
  }
}

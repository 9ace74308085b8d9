//! Filesystem helpers.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// A directory that could not be created.
///
/// Reported rather than raised: the step that later writes into the directory
/// fails with a precise error if it is really unusable.
#[derive(Debug)]
pub struct DirectoryWarning {
  pub path: PathBuf,
  pub error: io::Error,
}

/// Create each directory and any missing ancestors.
///
/// A directory that already exists is not an error. Any other failure is
/// logged and returned as a warning; creation continues with the next path.
pub fn ensure_directories<I, P>(paths: I) -> Vec<DirectoryWarning>
where
  I: IntoIterator<Item = P>,
  P: AsRef<Path>,
{
  let mut warnings = Vec::new();

  for path in paths {
    let path = path.as_ref();
    match std::fs::create_dir_all(path) {
      Ok(()) => debug!(path = %path.display(), "directory ready"),
      Err(error) => {
        warn!(path = %path.display(), error = %error, "failed to create directory, continuing");
        warnings.push(DirectoryWarning {
          path: path.to_path_buf(),
          error,
        });
      }
    }
  }

  warnings
}

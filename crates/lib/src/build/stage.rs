//! Copying the shared library into the staging directory.

use std::path::Path;

use tracing::info;

use crate::execute::BuildError;

/// Copy the shared library from where it was produced to `dest`.
///
/// A missing source is fatal: it means the build or the prebuilt layout is
/// misconfigured. Returns the number of bytes copied.
pub fn stage_library(source: &Path, dest: &Path) -> Result<u64, BuildError> {
  if !source.is_file() {
    return Err(BuildError::MissingArtifact {
      path: source.to_path_buf(),
    });
  }

  let bytes = std::fs::copy(source, dest).map_err(|e| BuildError::Copy {
    from: source.to_path_buf(),
    to: dest.to_path_buf(),
    source: e,
  })?;

  info!(from = %source.display(), to = %dest.display(), size = bytes, "staged shared library");
  Ok(bytes)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn copies_and_reports_size() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("mod_route.so");
    let dest = temp_dir.path().join("staged.so");
    std::fs::write(&source, b"0123456789").unwrap();

    let bytes = stage_library(&source, &dest).unwrap();

    assert_eq!(bytes, 10);
    assert_eq!(std::fs::read(&dest).unwrap(), b"0123456789");
  }

  #[test]
  fn overwrites_previous_stage() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("mod_route.so");
    let dest = temp_dir.path().join("staged.so");
    std::fs::write(&source, b"new").unwrap();
    std::fs::write(&dest, b"old library").unwrap();

    stage_library(&source, &dest).unwrap();

    assert_eq!(std::fs::read(&dest).unwrap(), b"new");
  }

  #[test]
  fn missing_source_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("native/lib/mod_route.so");
    let dest = temp_dir.path().join("mod_route.so");

    let result = stage_library(&source, &dest);

    assert!(matches!(result, Err(BuildError::MissingArtifact { path }) if path == source));
    assert!(!dest.exists());
  }

  #[test]
  fn unwritable_destination_is_copy_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("mod_route.so");
    std::fs::write(&source, b"lib").unwrap();
    let dest = temp_dir.path().join("missing-dir").join("mod_route.so");

    let result = stage_library(&source, &dest);

    assert!(matches!(result, Err(BuildError::Copy { .. })));
  }
}

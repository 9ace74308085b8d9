use std::path::Path;

use anyhow::{Context, Result};

use modroute_build_lib::build::clean;

use super::ConfigArgs;
use crate::output::{print_info, print_success};

/// Remove the working build directory, leaving the staged library in place.
pub fn cmd_clean(project_dir: &Path, args: ConfigArgs) -> Result<()> {
  let config = args.into_config(project_dir);
  let build_dir = config.build_path();

  if clean(&config).context("Failed to clean build directory")? {
    print_success(&format!("Removed {}", build_dir.display()));
  } else {
    print_info(&format!("Nothing to clean at {}", build_dir.display()));
  }

  Ok(())
}

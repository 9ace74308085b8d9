//! modroute-build-lib: native build orchestration for the `mod_route` wrapper
//!
//! This crate produces a platform-appropriate shared library inside a package
//! staging directory so a downstream packaging step can bundle it:
//! - `platform`: operating system detection and library filename resolution
//! - `config`: build configuration read from the environment
//! - `execute`: external command invocations and the runner seam
//! - `build`: the native build, artifact staging, and the platform build

pub mod build;
pub mod config;
pub mod consts;
pub mod execute;
pub mod platform;
pub mod util;

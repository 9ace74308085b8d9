//! External command execution.
//!
//! This module renders the two CMake invocations the native build needs and
//! provides the `CommandRunner` seam used to run them:
//! - `cmake`: pure construction of the configure and build invocations
//! - `runner`: the runner trait and the process-spawning implementation
//! - `types`: invocation and error types

pub mod cmake;
pub mod runner;
pub mod types;

pub use cmake::{build_invocation, configure_invocation};
pub use runner::{CommandRunner, SystemRunner};
pub use types::{BuildError, Invocation};

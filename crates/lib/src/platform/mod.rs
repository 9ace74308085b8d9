pub mod os;

use std::fmt;

use os::Os;

/// How the shared library is obtained on a given platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStrategy {
  /// Copy a library shipped prebuilt next to the package
  Prebuilt,
  /// Configure and compile the library with CMake
  Native,
}

impl BuildStrategy {
  pub fn for_os(os: Os) -> Self {
    match os {
      Os::Windows => Self::Prebuilt,
      Os::Linux | Os::MacOs | Os::Other => Self::Native,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Prebuilt => "prebuilt",
      Self::Native => "native",
    }
  }
}

impl fmt::Display for BuildStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Returns the shared library filename for `package` on `os` (e.g., "mod_route.so")
pub fn resolve_library_filename(os: Os, package: &str) -> String {
  format!("{}.{}", package, os.library_extension())
}

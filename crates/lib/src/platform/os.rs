use std::fmt;

/// Operating system variants the orchestrator distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
  Other,
}

impl Os {
  /// Detect the current operating system at runtime
  ///
  /// Anything that is not Linux, macOS or Windows is reported as `Other`.
  pub fn current() -> Self {
    Self::from_name(std::env::consts::OS)
  }

  /// Map an OS name as reported by `std::env::consts::OS`
  pub fn from_name(name: &str) -> Self {
    match name {
      "linux" => Self::Linux,
      "macos" => Self::MacOs,
      "windows" => Self::Windows,
      _ => Self::Other,
    }
  }

  /// Returns the lowercase string identifier for this OS
  ///
  /// Matches `std::env::consts::OS` and the `--platform` values of the CLI.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "macos",
      Self::Windows => "windows",
      Self::Other => "other",
    }
  }

  /// Returns the shared library extension, without the leading dot
  pub fn library_extension(&self) -> &'static str {
    match self {
      Self::Windows => "dll",
      Self::Linux | Self::MacOs | Self::Other => "so",
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

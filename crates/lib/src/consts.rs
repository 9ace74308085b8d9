/// Base name of the shared library, the CMake target and the staging directory.
pub const PACKAGE_NAME: &str = "mod_route";

/// Version of the packaged Python distribution.
pub const PACKAGE_VERSION: &str = "0.9.7.3";

pub const PACKAGE_LICENSE: &str = "MIT";

/// Environment variable pointing at the routing library the wrapper links against.
pub const DEPENDENCY_ENV: &str = "LNSPDPTW_PATH";

/// Environment variable overriding the CMake executable.
pub const CMAKE_ENV: &str = "CMAKE";

pub const DEFAULT_CMAKE: &str = "cmake";
pub const DEFAULT_BUILD_TYPE: &str = "Release";
pub const DEFAULT_SOURCE_DIR: &str = "..";
pub const DEFAULT_BUILD_DIR: &str = "native";
pub const DEFAULT_ARTIFACT_DIR: &str = "native/lib";
pub const DEFAULT_PREBUILT_DIR: &str = "../bin";

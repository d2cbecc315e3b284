//! Internal constants

/// Default configuration filename, looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "rbuild.toml";

/// Introducer token for include directories
pub const INCLUDE_PATH_INTRODUCER: &str = "-I";

/// Introducer token for library search directories
pub const LIBRARY_PATH_INTRODUCER: &str = "-L";

/// Fused prefix for link libraries
pub const LINK_LIBRARY_PREFIX: &str = "-l";

/// Output flag token
pub const OUTPUT_FLAG: &str = "-o";

/// Program used for the clear-screen step of the rebuild sequence
pub const CLEAR_SCREEN_PROGRAM: &str = if cfg!(windows) { "cls" } else { "clear" };

/// Program used for the artifact-removal step of the rebuild sequence
pub const REMOVE_PROGRAM: &str = "rm";

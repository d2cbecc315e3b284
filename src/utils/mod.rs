//! Utility functions

/// Command execution utility functions
mod command_utils;
pub use command_utils::*;

/// Filepath-related utility functions
mod path_utils;
pub use path_utils::*;

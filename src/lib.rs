//! A minimal clean-and-rebuild driver for small C projects

/// Compiler argument composition
pub mod compose;

/// Linear command sequencing
pub mod sequence;

/// Build configuration
pub mod config;

/// Error Type
pub mod error;

/// Diagnostic output helpers
pub mod diagnostics;

/// Utility functions
pub mod utils;

/// Internal constants
pub(crate) mod constants;

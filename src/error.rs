//! rbuild error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid build configuration (empty or missing values)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A path value contains characters that would require shell quoting
    #[error("malformed path `{0}`: contains characters that would require shell quoting")]
    MalformedPath(String),
    /// Io error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Command execution failure (strict mode only)
    #[error("command execution failure: {0}")]
    ExecutionFailure(String),
    /// The configured compiler is not installed or not on PATH
    #[error("toolchain not found: {0}")]
    ToolchainNotFound(String),
    /// Invalid source glob pattern
    #[error("invalid source pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Logger error
    #[error("logger error: {0}")]
    LoggerError(String),
}

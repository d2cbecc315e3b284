//! Command execution utility functions

use std::{
    path::PathBuf,
    process::{Command, ExitStatus},
};

use crate::error::Error;

/// Spawn a command directly from its argument vector and wait for it.
///
/// `argv[0]` is the program, the rest are its arguments. Stdout and stderr
/// are inherited by the child, never captured.
pub fn execute_argv(argv: &[String]) -> Result<ExitStatus, Error> {
    if argv.is_empty() {
        return Err(Error::InvalidConfiguration(
            "the number of arguments cannot be 0".into(),
        ));
    }
    Command::new(&argv[0])
        .args(&argv[1..])
        .status()
        .map_err(Error::Io)
}

/// Locate a program on PATH, for pre-flight toolchain detection
pub fn find_program(name: &str) -> Result<PathBuf, Error> {
    which::which(name).map_err(|_| Error::ToolchainNotFound(name.to_string()))
}

//! CLI-level errors (wraps configuration errors)

use thiserror::Error;

use crate::config::ConfigError;
use crate::PROGRAM_NAME;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(
        "You have provided an invalid option: {}.\nPlease consult <{} --help>.",
        .0,
        PROGRAM_NAME
    )]
    InvalidOption(String),

    #[error(
        "The provided argument {} is currently not supported.\nPlease consult <{} --help>.",
        .0,
        PROGRAM_NAME
    )]
    UnsupportedValue(String),

    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Any parse failure outside the reportable taxonomy; kept intact so the
    /// caller sees the underlying cause instead of a silent exit.
    #[error("{0}")]
    Parse(#[from] clap::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidOption(_)
            | CliError::UnsupportedValue(_)
            | CliError::Config(_)
            | CliError::Parse(_) => crate::exitcode::USAGE,
        }
    }
}

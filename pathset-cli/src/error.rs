//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps every failure to the exit code
//! the `pathset` binary reports.

use pathset::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g. a path is not covered) - exit code 1.
    SemanticFailure(String),

    /// Some candidate paths could not be checked.
    QueryFailures(usize),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (path not covered)
    /// - 5: I/O error
    /// - 6: Library error, including failed candidate checks
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Io(_) => 5,
            CliError::Library(_) | CliError::QueryFailures(_) => 6,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
            CliError::QueryFailures(count) => {
                write!(f, "{count} candidate path(s) could not be checked")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Configuration(_) | LibError::Validation { .. } => {
                CliError::Config(e.to_string())
            }
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] turns
//! the error into a message on stderr and exit code `2`.

use bridgehand_engine::errors::EngineError;
use std::fmt;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (board log files, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Error reported by the deal engine
    Engine(EngineError),

    /// A search gave up without finding what it was asked for
    NotFound(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<EngineError> for CliError {
    fn from(error: EngineError) -> Self {
        CliError::Engine(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_converts_and_keeps_source() {
        let err: CliError = EngineError::InvalidBoardNumber(0).into();
        assert_eq!(
            err.to_string(),
            "Engine error: Invalid board number: 0 (boards start at 1)"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_input_error_display() {
        let err = CliError::InvalidInput("--boards must be >0".into());
        assert_eq!(err.to_string(), "Invalid input: --boards must be >0");
        assert!(std::error::Error::source(&err).is_none());
    }
}

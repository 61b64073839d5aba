//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use navpath::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),

    /// Semantic failure (e.g., an expression has no include path) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (unresolvable expression, invalid include path)
    /// - 4: Invalid arguments (including unparseable expression text)
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                e if e.is_unresolvable() => 1,
                e if e.is_configuration() => 7,
                LibError::Parse { .. } => 4,
                LibError::Io(_) => 5,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
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
            LibError::Io(io) => CliError::Io(io),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let unresolvable = CliError::from(LibError::InvalidPathExpression {
            expression: "o => o.Items.Where(i => i.Live)".into(),
            unresolved: "o.Items.Where(i => i.Live)".into(),
        });
        assert_eq!(unresolvable.exit_code(), 1);

        let parse = CliError::from(LibError::Parse {
            position: 3,
            message: "expected expression".into(),
        });
        assert_eq!(parse.exit_code(), 4);

        let validation = CliError::from(LibError::Validation {
            field: "max_depth".into(),
            message: "Must be greater than 0".into(),
        });
        assert_eq!(validation.exit_code(), 7);

        assert_eq!(CliError::InvalidArguments(String::new()).exit_code(), 4);
        assert_eq!(CliError::Config(String::new()).exit_code(), 7);
        assert_eq!(CliError::SemanticFailure(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_library_io_becomes_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CliError::from(LibError::Io(io));
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 5);
    }
}

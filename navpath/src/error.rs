//! Error types for the navpath library.
//!
//! This module provides the error hierarchy for path resolution, expression
//! parsing and configuration loading, using `thiserror` for ergonomic error
//! handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a navpath error.
///
/// # Examples
///
/// ```
/// use navpath::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("Navigation")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the navpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// No include path can be derived from an expression.
    ///
    /// Raised when a node that cannot contribute a path segment (a filtering
    /// call, arithmetic, a literal) sits where a segment was required.
    #[error("invalid path expression: {expression} (cannot resolve '{unresolved}')")]
    InvalidPathExpression {
        /// Rendering of the whole expression supplied by the caller.
        expression: String,
        /// Rendering of the sub-expression that could not be resolved.
        unresolved: String,
    },

    /// A literal include path is malformed.
    #[error("invalid include path '{path}': {reason}")]
    InvalidIncludePath {
        /// The offending path text.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An expression nests deeper than the resolver allows.
    #[error("expression exceeds maximum depth of {limit}")]
    ExpressionTooDeep {
        /// The configured depth limit.
        limit: usize,
    },

    /// Expression text could not be parsed.
    #[error("parse error at offset {position}: {message}")]
    Parse {
        /// Byte offset into the source text.
        position: usize,
        /// A description of the problem.
        message: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be read or parsed.
    #[error("invalid configuration file {}: {reason}", path.display())]
    InvalidConfigFile {
        /// The configuration file.
        path: PathBuf,
        /// The reason the file was rejected.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error means an expression or literal path could not be
    /// turned into an include path.
    ///
    /// # Examples
    ///
    /// ```
    /// use navpath::Error;
    ///
    /// let err = Error::InvalidPathExpression {
    ///     expression: "o => o.Items.Where(x => x.Ok)".to_string(),
    ///     unresolved: "o.Items.Where(x => x.Ok)".to_string(),
    /// };
    /// assert!(err.is_unresolvable());
    /// ```
    #[must_use]
    pub fn is_unresolvable(&self) -> bool {
        matches!(
            self,
            Self::InvalidPathExpression { .. }
                | Self::InvalidIncludePath { .. }
                | Self::ExpressionTooDeep { .. }
        )
    }

    /// Check if error is a configuration problem.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::InvalidConfigFile { .. } | Self::Configuration(_)
        )
    }
}

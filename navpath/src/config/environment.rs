//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `NAVPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Comma-separated projection method names.
pub const PROJECTION_METHODS_ENV: &str = "NAVPATH_PROJECTION_METHODS";

/// Maximum resolution depth.
pub const MAX_DEPTH_ENV: &str = "NAVPATH_MAX_DEPTH";

/// CLI output format.
pub const OUTPUT_FORMAT_ENV: &str = "NAVPATH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use navpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric depth, unknown output format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(methods) = env::var(PROJECTION_METHODS_ENV) {
            config.projection_methods = Some(Self::parse_methods(&methods)?);
        }

        if let Ok(depth) = env::var(MAX_DEPTH_ENV) {
            config.max_depth = Some(depth.trim().parse().map_err(|_| Error::Validation {
                field: MAX_DEPTH_ENV.into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(format.parse::<OutputFormat>().map_err(|message| {
                Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message,
                }
            })?);
        }

        Ok(())
    }

    /// Parse a comma-separated list of method names.
    ///
    /// Whitespace around names is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the list has no names or contains an empty entry.
    pub fn parse_methods(value: &str) -> Result<Vec<String>> {
        let methods: Vec<String> = value.split(',').map(|m| m.trim().to_string()).collect();
        if methods.iter().any(String::is_empty) {
            return Err(Error::Validation {
                field: PROJECTION_METHODS_ENV.into(),
                message: format!("Empty method name in '{value}'"),
            });
        }
        Ok(methods)
    }
}

//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use navpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { max_depth: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref methods) = config.projection_methods {
            if methods.is_empty() {
                return Err(Error::Validation {
                    field: "projection_methods".into(),
                    message: "At least one projection method is required".into(),
                });
            }
            for method in methods {
                Self::validate_identifier("projection_methods", method)?;
            }
        }

        if config.max_depth == Some(0) {
            return Err(Error::Validation {
                field: "max_depth".into(),
                message: "Depth must be greater than 0".into(),
            });
        }

        Ok(())
    }

    /// Validate a method name: a letter or underscore followed by letters,
    /// digits or underscores.
    ///
    /// # Errors
    ///
    /// Returns an error naming `field` if `value` is not an identifier.
    pub fn validate_identifier(field: &str, value: &str) -> Result<()> {
        let mut chars = value.chars();
        let valid = match chars.next() {
            Some(first) if first.is_alphabetic() || first == '_' => {
                chars.all(|c| c.is_alphanumeric() || c == '_')
            }
            _ => false,
        };
        if valid {
            Ok(())
        } else {
            Err(Error::Validation {
                field: field.into(),
                message: format!("'{value}' is not a valid method name"),
            })
        }
    }
}

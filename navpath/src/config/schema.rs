//! Configuration schema definitions.
//!
//! This module defines the configuration structure for navpath: which calls
//! count as projections, how deep expressions may nest, and how the CLI
//! prints results.

use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// Every field is optional so that configuration can be layered from
/// several sources; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use navpath::config::Config;
///
/// let config: Config = serde_yaml::from_str("projection_methods: [Select, Map]\n").unwrap();
/// assert_eq!(
///     config.projection_methods,
///     Some(vec!["Select".to_string(), "Map".to_string()])
/// );
/// assert_eq!(config.max_depth, None);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Method names recognized as projection calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_methods: Option<Vec<String>>,

    /// Maximum expression nesting depth during resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Output format for CLI results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

/// Output format for resolved paths.
///
/// # Examples
///
/// ```
/// use navpath::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Plain);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One path per line.
    #[default]
    Plain,
    /// JSON array of result objects.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}

//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, resolver setup, and input gathering.

use crate::error::CliError;
use navpath::{Config, ConfigBuilder, OutputFormat, PathResolver};
use std::fs;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // Not every command reads every flag
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Project configuration files
/// 3. User configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a resolver from configuration plus extra projection methods.
pub fn resolver_from(config: &Config, extra_projections: &[String]) -> PathResolver {
    extra_projections
        .iter()
        .fold(PathResolver::from_config(config), |resolver, method| {
            resolver.with_projection_method(method.clone())
        })
}

/// Pick the output format: explicit flag, then configuration, then plain.
pub fn output_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or(config.output_format).unwrap_or_default()
}

/// Read one entry per line from `path`.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn read_entries(path: &Path) -> Result<Vec<String>, CliError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CliError::InvalidArguments(format!("Cannot read {}: {e}", path.display()))
    })?;
    Ok(parse_entries(&contents))
}

fn parse_entries(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Combine positional inputs with entries read from an optional file.
pub fn gather_inputs(positional: Vec<String>, file: Option<&Path>) -> Result<Vec<String>, CliError> {
    let mut inputs = positional;
    if let Some(path) = file {
        inputs.extend(read_entries(path)?);
    }
    if inputs.is_empty() {
        return Err(CliError::InvalidArguments(
            "No input given (pass arguments or --file)".to_string(),
        ));
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries_skips_comments_and_blanks() {
        let entries = parse_entries("# header\no => o.A\n\n  o => o.B  \n");
        assert_eq!(entries, ["o => o.A", "o => o.B"]);
    }

    #[test]
    fn test_gather_inputs_requires_something() {
        let err = gather_inputs(Vec::new(), None).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_gather_inputs_appends_file_entries() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("paths.txt");
        fs::write(&file, "B\nC\n").unwrap();

        let inputs = gather_inputs(vec!["A".to_string()], Some(file.as_path())).unwrap();
        assert_eq!(inputs, ["A", "B", "C"]);
    }

    #[test]
    fn test_missing_file_is_invalid_argument() {
        let err = read_entries(Path::new("/nonexistent/navpath/input.txt")).unwrap_err();
        assert!(matches!(err, CliError::InvalidArguments(_)));
    }

    #[test]
    fn test_resolver_from_adds_projections() {
        let resolver = resolver_from(&Config::default(), &["SelectMany".to_string()]);
        assert!(resolver
            .projection_methods()
            .iter()
            .any(|m| m == "SelectMany"));
        assert!(resolver.projection_methods().iter().any(|m| m == "Select"));
    }

    #[test]
    fn test_output_format_precedence() {
        let config = Config {
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };
        assert_eq!(output_format(None, &config), OutputFormat::Json);
        assert_eq!(
            output_format(Some(OutputFormat::Plain), &config),
            OutputFormat::Plain
        );
        assert_eq!(output_format(None, &Config::default()), OutputFormat::Plain);
    }
}

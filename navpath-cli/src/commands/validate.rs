//! Command to validate a navpath configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use navpath::config::loader::{PROJECT_FILE, PROJECT_LOCAL_FILE, USER_FILE};
use navpath::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a navpath configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        let filename = self
            .config_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("");
        if ![PROJECT_FILE, PROJECT_LOCAL_FILE, USER_FILE].contains(&filename) {
            log::warn!(
                "'{filename}' is not a name navpath discovers ({PROJECT_FILE}, {PROJECT_LOCAL_FILE} or {USER_FILE})"
            );
        }

        let config = match ConfigLoader::load_file(&self.config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        match ConfigValidator::validate(&config) {
            Ok(()) => {
                if !global.quiet {
                    println!("Configuration is valid");
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}

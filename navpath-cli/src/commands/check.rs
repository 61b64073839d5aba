//! Command to check literal include paths.

use crate::error::CliError;
use crate::utils::{gather_inputs, load_configuration, output_format, GlobalOptions};
use clap::Args;
use navpath::{IncludePath, OutputFormat};
use serde::Serialize;
use std::path::PathBuf;

/// Check that literal include paths are well formed.
#[derive(Args)]
pub struct CheckCommand {
    /// Dot-separated include paths such as 'Lines.Product'
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Read additional paths from a file, one per line
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format (plain or json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Outcome for one literal path.
#[derive(Debug, Serialize)]
struct Checked {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    segments: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn check_one(text: &str) -> Checked {
    match IncludePath::parse(text) {
        Ok(path) => Checked {
            path: text.to_string(),
            segments: Some(path.segments().to_vec()),
            error: None,
        },
        Err(e) => Checked {
            path: text.to_string(),
            segments: None,
            error: Some(e.to_string()),
        },
    }
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let format = output_format(self.format, &config);
        let inputs = gather_inputs(self.paths, self.file.as_deref())?;

        let results: Vec<Checked> = inputs.iter().map(|text| check_one(text)).collect();

        match format {
            OutputFormat::Plain => {
                for checked in &results {
                    match (&checked.segments, &checked.error) {
                        (Some(segments), _) => println!("{}: {}", checked.path, segments.join(", ")),
                        (None, Some(error)) => eprintln!("{error}"),
                        (None, None) => {}
                    }
                }
            }
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(&results).map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }

        let invalid = results.iter().filter(|c| c.error.is_some()).count();
        if invalid > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{invalid} of {} path(s) are invalid",
                results.len()
            )));
        }
        Ok(())
    }
}

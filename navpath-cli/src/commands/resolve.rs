//! Command to resolve lambda expressions into include paths.

use crate::error::CliError;
use crate::utils::{gather_inputs, load_configuration, output_format, resolver_from, GlobalOptions};
use clap::Args;
use navpath::config::ConfigValidator;
use navpath::{Error as LibError, Expr, OutputFormat, PathResolver};
use serde::Serialize;
use std::path::PathBuf;

/// Resolve lambda expressions into include paths.
#[derive(Args)]
pub struct ResolveCommand {
    /// Lambda expressions such as 'o => o.Lines.Select(l => l.Product)'
    #[arg(value_name = "EXPR")]
    pub expressions: Vec<String>,

    /// Read additional expressions from a file, one per line
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Output format (plain or json)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Also accept this method name as a projection (repeatable)
    #[arg(long = "projection", value_name = "NAME")]
    pub projections: Vec<String>,
}

/// Plain-output stand-in for the root path, which has no segments to print.
const ROOT_MARKER: &str = "(root)";

/// Outcome for one expression.
#[derive(Debug, Serialize)]
struct Resolution {
    expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip)]
    malformed: bool,
}

fn resolve_one(resolver: &PathResolver, text: &str) -> Resolution {
    let outcome = Expr::parse_lambda(text).and_then(|expr| resolver.resolve(&expr));
    match outcome {
        Ok(path) => {
            if path.is_root() {
                log::info!("'{text}' navigates nowhere; nothing would be included");
            }
            Resolution {
                expression: text.to_string(),
                path: Some(path.to_string()),
                error: None,
                malformed: false,
            }
        }
        Err(e) => Resolution {
            expression: text.to_string(),
            path: None,
            malformed: matches!(e, LibError::Parse { .. }),
            error: Some(e.to_string()),
        },
    }
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        for name in &self.projections {
            ConfigValidator::validate_identifier("projection", name)
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        }

        let resolver = resolver_from(&config, &self.projections);
        let format = output_format(self.format, &config);
        let inputs = gather_inputs(self.expressions, self.file.as_deref())?;

        log::info!(
            "resolving {} expression(s) with projections [{}]",
            inputs.len(),
            resolver.projection_methods().join(", ")
        );

        let resolutions: Vec<Resolution> = inputs
            .iter()
            .map(|text| resolve_one(&resolver, text))
            .collect();

        match format {
            OutputFormat::Plain => {
                for resolution in &resolutions {
                    match (&resolution.path, &resolution.error) {
                        (Some(path), _) if path.is_empty() => println!("{ROOT_MARKER}"),
                        (Some(path), _) => println!("{path}"),
                        (None, Some(error)) => {
                            eprintln!("{}: {error}", resolution.expression);
                        }
                        (None, None) => {}
                    }
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&resolutions)
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }

        let failed = resolutions.iter().filter(|r| r.error.is_some()).count();
        if failed == 0 {
            return Ok(());
        }

        let summary = format!(
            "{failed} of {} expression(s) could not be resolved",
            resolutions.len()
        );
        if resolutions.iter().any(|r| r.malformed) {
            Err(CliError::InvalidArguments(summary))
        } else {
            Err(CliError::SemanticFailure(summary))
        }
    }
}

//! Command to show the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, resolver_from, GlobalOptions};
use clap::Args;
use navpath::Config;

/// Show the configuration in effect after merging every source.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Only show values that were set explicitly, without defaults
    #[arg(long)]
    pub explicit: bool,
}

/// Fill unset fields with the values resolution actually uses.
fn with_defaults(config: Config) -> Config {
    let resolver = resolver_from(&config, &[]);
    Config {
        projection_methods: Some(resolver.projection_methods().to_vec()),
        max_depth: resolver.max_depth(),
        output_format: Some(config.output_format.unwrap_or_default()),
    }
}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let shown = if self.explicit {
            config
        } else {
            with_defaults(config)
        };

        let yaml = serde_yaml::to_string(&shown).map_err(|e| CliError::Config(e.to_string()))?;
        print!("{yaml}");
        Ok(())
    }
}

//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, elvish and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "navpath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Install hint for `shell`, if there is a conventional location.
fn install_hint(shell: Shell) -> Option<String> {
    match shell {
        Shell::Bash => Some(format!(
            "{BIN_NAME} completions bash > ~/.local/share/bash-completion/completions/{BIN_NAME}"
        )),
        Shell::Zsh => Some(format!(
            "{BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME}"
        )),
        Shell::Fish => Some(format!(
            "{BIN_NAME} completions fish > ~/.config/fish/completions/{BIN_NAME}.fish"
        )),
        Shell::PowerShell => Some(format!(
            "{BIN_NAME} completions powershell | Out-String | Invoke-Expression"
        )),
        _ => None,
    }
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# Generating {} completion script", self.shell);
                eprintln!("# To enable completions run:");
                eprintln!("#   {hint}");
                eprintln!();
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

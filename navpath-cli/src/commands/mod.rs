//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve lambda expressions into include paths
//! - `check`: Check literal include paths
//! - `validate`: Validate a configuration file
//! - `show_config`: Show the effective configuration
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod resolve;
pub mod show_config;
pub mod validate;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use resolve::ResolveCommand;
pub use show_config::ShowConfigCommand;
pub use validate::ValidateCommand;

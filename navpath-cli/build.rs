//! Build script for navpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    let format = Arg::new("format")
        .long("format")
        .help("Output format (plain or json)")
        .value_name("FORMAT");
    let file = Arg::new("file")
        .long("file")
        .help("Read additional inputs from a file, one per line")
        .value_name("FILE");

    Command::new("navpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve navigation lambdas into include paths")
        .long_about(
            "Command-line tool for turning navigation lambdas such as \
             'o => o.Lines.Select(l => l.Product)' into eager-loading include paths",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("NAVPATH_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve lambda expressions into include paths")
                .long_about("Parse each lambda expression and print the include path it denotes")
                .arg(Arg::new("expr").value_name("EXPR").num_args(0..))
                .arg(file.clone())
                .arg(format.clone())
                .arg(
                    Arg::new("projection")
                        .long("projection")
                        .help("Also accept this method name as a projection")
                        .value_name("NAME")
                        .action(ArgAction::Append),
                ),
            Command::new("check")
                .about("Check literal include paths")
                .long_about("Validate dot-separated include paths and print their segments")
                .arg(Arg::new("path").value_name("PATH").num_args(0..))
                .arg(file)
                .arg(format),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a navpath configuration file for errors")
                .arg(Arg::new("config-path").value_name("CONFIG_PATH").required(true)),
            Command::new("show-config")
                .about("Show the effective configuration")
                .long_about("Print the configuration merged from files and environment as YAML")
                .arg(
                    Arg::new("explicit")
                        .long("explicit")
                        .help("Only show values that were set explicitly, without defaults")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, elvish or PowerShell")
                .arg(Arg::new("shell").value_name("SHELL").required(true)),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("navpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}

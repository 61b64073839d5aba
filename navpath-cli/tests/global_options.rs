//! Integration tests for global CLI options.
//!
//! These tests verify global flags and environment variables that affect
//! all commands, including:
//! - --verbose and --quiet flags
//! - --config-dir override and NAVPATH_CONFIG_DIR
//! - NAVPATH_LOG_MODE
//! - shell completions

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("navpath"));
}

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("show-config"));
}

#[test]
fn test_verbose_flag_logs_resolution() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "resolve", "o => o.Lines"])
        .assert()
        .success()
        .stdout("Lines\n")
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_normal_run_has_quiet_stderr() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", "o => o.Lines"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_mode_environment_variable() {
    let env = TestEnv::new();

    env.command()
        .env("NAVPATH_LOG_MODE", "verbose")
        .args(["resolve", "o => o.Lines"])
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved"));
}

#[test]
fn test_quiet_flag_overrides_log_mode() {
    let env = TestEnv::new();

    env.command()
        .env("NAVPATH_LOG_MODE", "verbose")
        .args(["--quiet", "resolve", "o => o.Lines"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_config_dir_flag() {
    let env = TestEnv::new();
    env.write_user_config("projection_methods: [Select, SelectMany]\n");

    env.command()
        .args(["resolve", "o => o.Orders.SelectMany(x => x.Lines)"])
        .assert()
        .success()
        .stdout("Orders.Lines\n");
}

#[test]
fn test_config_dir_environment_variable() {
    let env = TestEnv::new();
    env.write_user_config("projection_methods: [Select, SelectMany]\n");

    env.command_bare()
        .env("NAVPATH_CONFIG_DIR", &env.config_dir)
        .args(["resolve", "o => o.Orders.SelectMany(x => x.Lines)"])
        .assert()
        .success()
        .stdout("Orders.Lines\n");
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("navpath"));
}

#[test]
fn test_unknown_command_fails() {
    let env = TestEnv::new();

    env.command_bare().arg("reserve").assert().failure();
}

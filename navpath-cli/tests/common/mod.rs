//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the host configuration

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host settings into a test run.
const NAVPATH_VARS: [&str; 5] = [
    "NAVPATH_CONFIG_DIR",
    "NAVPATH_PROJECTION_METHODS",
    "NAVPATH_MAX_DEPTH",
    "NAVPATH_OUTPUT_FORMAT",
    "NAVPATH_LOG_MODE",
];

/// Test environment with isolated configuration directories.
///
/// This struct provides:
/// - A temporary project directory used as the working directory
/// - A separate, initially empty, user configuration directory
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Project directory the binary runs in
    pub project_dir: PathBuf,
    /// User configuration directory passed via --config-dir
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let project_dir = temp_dir.path().join("project");
        let config_dir = temp_dir.path().join("user-config");
        std::fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            project_dir,
            config_dir,
        }
    }

    /// Get a command builder without --config-dir.
    ///
    /// The command still runs in the project directory with host
    /// `NAVPATH_*` variables removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("navpath").expect("Failed to find navpath binary");
        cmd.current_dir(&self.project_dir);
        for var in NAVPATH_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the user configuration directory set.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Write a project configuration file (navpath.yaml).
    pub fn write_project_config(&self, contents: &str) -> PathBuf {
        self.write_file(&self.project_dir, "navpath.yaml", contents)
    }

    /// Write the user configuration file (config.yaml).
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        self.write_file(&self.config_dir, "config.yaml", contents)
    }

    /// Write an arbitrary file.
    pub fn write_file(&self, dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run `navpath resolve` on one expression and return trimmed stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn resolve(&self, expr: &str) -> String {
        let output = self
            .command()
            .arg("resolve")
            .arg(expr)
            .output()
            .expect("Failed to run resolve command");

        assert!(
            output.status.success(),
            "Resolve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

//! Integration tests for the `check` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_check_valid_paths() {
    let env = TestEnv::new();

    env.command()
        .args(["check", "Navigation", "CollectionNavigation.Navigation"])
        .assert()
        .success()
        .stdout("Navigation: Navigation\nCollectionNavigation.Navigation: CollectionNavigation, Navigation\n");
}

#[test]
fn test_check_invalid_path_exits_with_1() {
    let env = TestEnv::new();

    env.command()
        .args(["check", "Lines..Product"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty segment"));
}

#[test]
fn test_check_json_output() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args(["check", "--format", "json", "A.B", "A."])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["segments"], serde_json::json!(["A", "B"]));
    assert!(json[1]["error"].is_string());
}

#[test]
fn test_check_from_file() {
    let env = TestEnv::new();
    let file = env.write_file(&env.project_dir, "paths.txt", "A\nB.C\n");

    env.command()
        .arg("check")
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("B.C: B, C"));
}

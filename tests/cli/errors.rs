//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("drag"));
}

#[test]
fn test_drag_requires_manifest() {
    let t = Test::new();

    t.cmd().arg("drag").assert().code(1);
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("sashay").assert().code(1);
}

#[test]
fn test_missing_manifest() {
    let t = Test::new();

    let output = t.drag("nope.yaml");
    assert_exit_one(&output);
    assert_stderr_contains(&output, "ERROR: could not read manifest nope.yaml");
    assert!(!t.path("docker-compose.yml").exists());
}

#[test]
fn test_malformed_manifest() {
    let t = Test::with_manifest(BROKEN_MANIFEST);

    let output = t.drag("app.yaml");
    assert_exit_one(&output);
    assert_stderr_contains(&output, "could not parse manifest");
    assert!(!t.path("docker-compose.yml").exists());
}

#[test]
fn test_manifest_without_name() {
    let t = Test::with_manifest("spec:\n  port: 80\n");

    let output = t.drag("app.yaml");
    assert_exit_one(&output);
    assert_stderr_contains(&output, "has no metadata.name");
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rupaul"));
}

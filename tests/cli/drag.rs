//! Tests for `rupaul drag`.
//!
//! These run without a Vault token, so every run fails at the Vault session
//! after the compose file has been generated. Whether it fails at the
//! connectivity check or at token resolution depends on the network.

use crate::support::*;

fn compose(t: &Test) -> serde_yaml::Value {
    serde_yaml::from_str(&t.read("docker-compose.yml")).expect("compose file is valid yaml")
}

#[test]
fn test_drag_writes_compose_before_vault() {
    let t = Test::with_manifest(MANIFEST);

    let output = t.drag("app.yaml");
    assert_stopped_at_vault(&output);
    assert_stdout_contains(&output, "Generated");
    assert_stdout_contains(&output, "Fetching secrets from Vault (https://vault.adeo.no)");

    let doc = compose(&t);
    assert_eq!(doc["version"].as_str(), Some("3"));

    let service = &doc["services"]["myapp"];
    assert_eq!(service["build"].as_str(), Some("."));
    assert_eq!(service["image"].as_str(), Some("myapp"));
    assert_eq!(service["ports"][0].as_str(), Some("8080:8080"));
    assert_eq!(
        service["volumes"][0].as_str(),
        Some("${PWD}/secrets:/secrets")
    );
    assert_eq!(service["environment"]["DB_HOST"].as_str(), Some("localhost"));
    assert_eq!(service["environment"]["LOG_LEVEL"].as_str(), Some("debug"));
}

#[test]
fn test_drag_minimal_manifest() {
    let t = Test::with_manifest(MINIMAL_MANIFEST);

    let output = t.drag("app.yaml");
    assert_stopped_at_vault(&output);

    let doc = compose(&t);
    let service = &doc["services"]["tiny"];
    assert_eq!(service["ports"].as_sequence().map(Vec::len), Some(0));
    assert_eq!(service["volumes"].as_sequence().map(Vec::len), Some(0));
    assert_eq!(service["environment"].as_mapping().map(|m| m.len()), Some(0));
}

#[test]
fn test_drag_vault_failure_writes_no_secrets() {
    let t = Test::with_manifest(MANIFEST);

    let output = t.drag("app.yaml");
    assert_stopped_at_vault(&output);
    assert!(!t.path("var").exists());
    assert!(!t.path("secrets").exists());
}

#[test]
fn test_drag_overwrites_compose() {
    let t = Test::with_manifest(MINIMAL_MANIFEST);
    t.write("docker-compose.yml", "stale: true\n");

    t.drag("app.yaml");
    let contents = t.read("docker-compose.yml");
    assert!(!contents.contains("stale"));
    assert!(contents.contains("tiny"));
}

#[test]
fn test_drag_ignores_extra_args() {
    let t = Test::with_manifest(MINIMAL_MANIFEST);

    let output = t
        .cmd()
        .args(["drag", "app.yaml", "extra", "args"])
        .output()
        .unwrap();
    assert_stopped_at_vault(&output);
    assert!(t.path("docker-compose.yml").exists());
}

#[test]
fn test_drag_prints_quote() {
    let t = Test::with_manifest(MINIMAL_MANIFEST);

    let output = t.drag("app.yaml");
    assert_stdout_contains(&output, "Random RuPaul quote");
}

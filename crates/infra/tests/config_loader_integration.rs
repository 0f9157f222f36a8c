//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;

use ficbridge_domain::constants::{DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT};
use ficbridge_domain::FailurePolicy;
use ficbridge_infra::config;

fn write_config(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create config file");
    file.write_all(contents.as_bytes()).expect("Failed to write config file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "ficbridge.json",
        r#"{
            "api": {
                "base_url": "https://sandbox.example.test",
                "timeout_secs": 15,
                "user_agent": "integration/1.0"
            },
            "logging": { "level": "debug", "json": true },
            "execution": { "failure_policy": "continue", "default_limit": 25 }
        }"#,
    );

    let config = config::load_from_file(Some(path)).expect("Failed to load config from JSON file");

    assert_eq!(config.api.base_url, "https://sandbox.example.test");
    assert_eq!(config.api.timeout_secs, 15);
    assert_eq!(config.api.user_agent, "integration/1.0");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    assert_eq!(config.execution.failure_policy, FailurePolicy::Continue);
    assert_eq!(config.execution.default_limit, 25);
}

#[test]
fn test_load_config_with_minimal_fields() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_config(&dir, "config.toml", "[logging]\nlevel = \"warn\"\n");

    let config = config::load_from_file(Some(path)).expect("Failed to load minimal config");

    assert_eq!(config.logging.level, "warn");
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.api.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(config.execution.failure_policy, FailurePolicy::FailFast);
}

#[test]
fn test_load_config_rejects_zero_timeout() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_config(&dir, "ficbridge.toml", "[api]\ntimeout_secs = 0\n");

    let result = config::load_from_file(Some(path));

    assert!(result.is_err(), "A zero timeout should be rejected");
}

#[test]
fn test_load_config_rejects_unknown_policy() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "ficbridge.json",
        r#"{ "execution": { "failure_policy": "sometimes" } }"#,
    );

    let result = config::load_from_file(Some(path));

    assert!(result.is_err(), "An unknown failure policy should be rejected");
}

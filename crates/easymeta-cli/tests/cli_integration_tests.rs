//! CLI integration tests
//!
//! Drive the built `easymeta` binary against a schema written to a temp dir.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const SCHEMA: &str = r#"
schema_version: 0
entities:
  - code: 1
    name: User
    description: User
    name_field: fullName
    extra_attrs:
      icon: account
    fields:
      - name: userId
        type: primary
      - name: fullName
        type: string
        description: Full Name
  - code: 1001
    name: Account
    description: Account
    fields:
      - name: accountId
        type: primary
      - name: owningUser
        type: reference
        reference: User
        description: Owner
        updatable: false
      - name: clockIn
        type: time
labels:
  User.fullName: Nom complet
"#;

fn setup_schema(temp_dir: &TempDir) -> PathBuf {
    let path = temp_dir.path().join("schema.yaml");
    fs::write(&path, SCHEMA).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_easymeta"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_cli_entity_projection() {
    let temp_dir = TempDir::new().unwrap();
    let schema = setup_schema(&temp_dir);

    let output = run(&["entity", schema.to_str().unwrap(), "User"]);

    assert_eq!(
        stdout_json(&output),
        serde_json::json!({ "name": "User", "label": "User", "icon": "account" })
    );
}

#[test]
fn test_cli_field_projection() {
    let temp_dir = TempDir::new().unwrap();
    let schema = setup_schema(&temp_dir);

    let output = run(&["field", schema.to_str().unwrap(), "Account", "owningUser"]);

    let value = stdout_json(&output);
    assert_eq!(value["type"], "REFERENCE");
    assert_eq!(value["label"], "Owner");
    assert_eq!(value["updatable"], false);
    assert_eq!(value["ref"], serde_json::json!(["User", "TEXT"]));
}

#[test]
fn test_cli_label_path() {
    let temp_dir = TempDir::new().unwrap();
    let schema = setup_schema(&temp_dir);
    let schema = schema.to_str().unwrap();

    let plain = run(&["label", schema, "Account", "owningUser.fullName"]);
    assert!(plain.status.success());
    assert_eq!(String::from_utf8_lossy(&plain.stdout).trim(), "Owner.Full Name");

    let localized = run(&["label", schema, "Account", "owningUser.fullName", "--localized"]);
    assert!(localized.status.success());
    assert_eq!(
        String::from_utf8_lossy(&localized.stdout).trim(),
        "Owner.Nom complet"
    );
}

#[test]
fn test_cli_types_lists_unresolvable_fields() {
    let temp_dir = TempDir::new().unwrap();
    let schema = setup_schema(&temp_dir);

    let output = run(&["types", schema.to_str().unwrap(), "Account"]);

    assert_eq!(
        stdout_json(&output),
        serde_json::json!([
            { "field": "accountId", "type": "ID" },
            { "field": "clockIn", "error": "ERR_UNSUPPORTED_FIELD_TYPE" },
            { "field": "owningUser", "type": "REFERENCE" },
        ])
    );
}

#[test]
fn test_cli_unknown_entity_fails() {
    let temp_dir = TempDir::new().unwrap();
    let schema = setup_schema(&temp_dir);

    let output = run(&["entity", schema.to_str().unwrap(), "Nope"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Entity not found: Nope"));
}

#[test]
fn test_cli_invalid_schema_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.yaml");
    fs::write(&path, "schema_version: 7\nentities: []\n").unwrap();

    let output = run(&["types", path.to_str().unwrap(), "Account"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_INPUT"));
}

#[test]
fn test_cli_log_flag_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let schema = setup_schema(&temp_dir);

    let output = run(&["--log", "test", "entity", schema.to_str().unwrap(), "Account"]);

    assert_eq!(stdout_json(&output)["icon"], "texture");
}

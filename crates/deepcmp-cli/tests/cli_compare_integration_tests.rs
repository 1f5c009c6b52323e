//! CLI compare integration tests
//!
//! These tests run the built binary against JSON documents written to a
//! temporary directory and check its exit codes and output.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_deepcmp-cli");
    Command::new(cli_bin)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

#[test]
fn test_cli_equal_documents_exit_zero() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(&temp_dir, "a.json", r#"{"x": [1, 2], "y": {"$date": "2025-01-01"}}"#);
    let b = write(&temp_dir, "b.json", r#"{"x": [1, 2], "y": {"$date": "2025-01-01T00:00:00Z"}}"#);

    let output = run(&["compare", a.to_str().unwrap(), b.to_str().unwrap()]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("_No discrepancies found._"));
}

#[test]
fn test_cli_differences_exit_one_with_labels() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(&temp_dir, "a.json", r#"{"theme": "dark"}"#);
    let b = write(&temp_dir, "b.json", r#"{"theme": "light"}"#);

    let output = run(&[
        "compare",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--name-a",
        "objA",
        "--name-b",
        "objB",
        "--format",
        "records",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["path"], "theme");
    assert_eq!(records[0]["type"], "value-mismatch");
    assert_eq!(records[0]["objA"], "dark");
    assert_eq!(records[0]["objB"], "light");
}

#[test]
fn test_cli_json_format_has_fixed_shape() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(&temp_dir, "a.json", "[1, 2, 3]");
    let b = write(&temp_dir, "b.json", "[1, 9]");

    let output = run(&[
        "compare",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--format",
        "json",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let found: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0]["kind"], "array-length-mismatch");
    assert_eq!(found[0]["path"], "(root)");
    assert_eq!(found[1]["path"], "[1]");
    assert_eq!(found[1]["label_a"], "expected");
}

#[test]
fn test_cli_config_file_labels_and_flag_override() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(&temp_dir, "a.json", "1");
    let b = write(&temp_dir, "b.json", "2");
    let config = write(
        &temp_dir,
        "deepcmp.toml",
        "[labels]\nname_a = \"left\"\nname_b = \"right\"\n",
    );

    let output = run(&[
        "compare",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--name-b",
        "flagged",
        "--format",
        "records",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[0]["left"], 1);
    assert_eq!(records[0]["flagged"], 2);
}

#[test]
fn test_cli_invalid_json_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    let a = write(&temp_dir, "a.json", "{broken");
    let b = write(&temp_dir, "b.json", "{}");

    let output = run(&["compare", a.to_str().unwrap(), b.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: [ERR_SERIALIZATION]"), "Stderr: {}", stderr);
}

#[test]
fn test_cli_missing_file_exits_two() {
    let temp_dir = TempDir::new().unwrap();
    let b = write(&temp_dir, "b.json", "{}");
    let missing = temp_dir.path().join("absent.json");

    let output = run(&["compare", missing.to_str().unwrap(), b.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: [ERR_IO]"), "Stderr: {}", stderr);
}

#[test]
fn test_cli_demo_summary() {
    let output = run(&["demo"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("## Comparison: objA vs objB"));
    assert!(stdout.contains("**Discrepancies**: 14"));
    assert!(stdout.contains("| invalid-date | 1 |"));
}

//! Integration tests for top-level CLI behavior.

use std::path::{Path, PathBuf};
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn run_smaudit(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_smaudit");
    Command::new(bin)
        .args(args)
        .env_remove("SMAUDIT_CONFIG")
        .env_remove("SMAUDIT_LARGE_SCRIPT_THRESHOLD")
        .env_remove("SMAUDIT_LOG")
        .output()
        .expect("failed to run smaudit binary")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("fixture path is UTF-8")
}

#[test]
fn check_healthy_snapshot_succeeds() {
    let snapshot = fixture("healthy.json");
    let output = run_smaudit(&["check", path_arg(&snapshot)]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("valid-source-maps: Page has valid source maps"));
    assert!(stdout.contains("https://example.com/app.js"));
    assert!(stdout.contains("Score: 1 (PASSED)"));
}

#[test]
fn check_json_output_is_parseable() {
    let snapshot = fixture("mixed.json");
    let output = run_smaudit(&["check", path_arg(&snapshot), "--json"]);
    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["score"], 1);
    assert_eq!(report["notApplicable"], false);
    assert_eq!(report["details"]["items"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["details"]["items"][0]["scriptUrl"], "https://example.com/vendor.js");
}

#[test]
fn check_fails_when_threshold_flags_orphans() {
    let snapshot = fixture("mixed.json");
    let output = run_smaudit(&["check", path_arg(&snapshot), "--threshold", "40"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stdout.contains("Large JavaScript file is missing a source map."));
    assert!(stdout.contains("Score: 0 (FAILED)"));
    assert!(stderr.contains("2 large script(s) missing a source map"));
}

#[test]
fn check_reads_threshold_from_config_file() {
    let snapshot = fixture("mixed.json");
    let config = fixture("audit.yaml");
    let output = run_smaudit(&["check", path_arg(&snapshot), "--config", path_arg(&config)]);
    assert!(!output.status.success());
}

#[test]
fn check_reads_threshold_from_env() {
    let snapshot = fixture("mixed.json");
    let output = Command::new(env!("CARGO_BIN_EXE_smaudit"))
        .args(["check", path_arg(&snapshot)])
        .env_remove("SMAUDIT_CONFIG")
        .env("SMAUDIT_LARGE_SCRIPT_THRESHOLD", "40")
        .output()
        .expect("failed to run smaudit binary");
    assert!(!output.status.success());
}

#[test]
fn check_without_source_maps_is_not_applicable() {
    let snapshot = fixture("no_maps.json");
    let output = run_smaudit(&["check", path_arg(&snapshot), "--threshold", "1"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("NOT APPLICABLE"));
}

#[test]
fn check_large_script_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    let snapshot = serde_json::json!({
        "Scripts": [{"url": "https://example.com/b.js", "content": "x".repeat(600_000)}],
        "SourceMaps": [{"scriptUrl": "https://example.com/b.js", "errorMessage": "404"}]
    });
    std::fs::write(&path, snapshot.to_string()).unwrap();

    let output = run_smaudit(&["check", path_arg(&path), "--json"]);
    assert!(!output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["score"], 0);
    assert_eq!(report["title"], "Missing source maps for large first-party JavaScript");
    assert_eq!(report["details"]["items"].as_array().map(Vec::len), Some(2));
}

#[test]
fn check_missing_file_reports_error() {
    let output = run_smaudit(&["check", "/nonexistent/smaudit/snapshot.json"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to read"));
}

#[test]
fn check_malformed_snapshot_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"SourceMaps": [{"scriptUrl": "a.js"}]}"#).unwrap();

    let output = run_smaudit(&["check", path_arg(&path)]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to parse"));
}

#[test]
fn explain_lists_columns() {
    let output = run_smaudit(&["explain", "--threshold", "1234"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("scriptUrl"));
    assert!(stdout.contains("sourceMapUrl"));
    assert!(stdout.contains("1234 characters"));
}

#[test]
fn check_without_args_shows_error() {
    let output = run_smaudit(&["check"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("SNAPSHOT"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_smaudit(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each test gets
//! its own config directory through `HAVEN_CONFIG_DIR`.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Run a CLI command with `stdin` piped in and return (stdout, stderr, code).
fn run_cli_with_input(config_dir: &Path, args: &[&str], stdin: &str) -> (String, String, i32) {
    let mut child = Command::new("cargo")
        .args(["run", "-q", "-p", "haven-cli", "--"])
        .args(args)
        .env("HAVEN_CONFIG_DIR", config_dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli(config_dir: &Path, args: &[&str]) -> (String, String, i32) {
    run_cli_with_input(config_dir, args, "")
}

#[test]
fn test_help_lists_commands() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["--help"]);
    assert_eq!(code, 0);
    for cmd in ["sos", "helplines", "tips", "score", "report", "config"] {
        assert!(stdout.contains(cmd), "help should mention {cmd}");
    }
}

#[test]
fn test_config_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "sos.emergency_number"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "112");

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "sos.hold_threshold_ms"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "700");
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "sos.emergency_number", "911"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "sos.emergency_number"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "911");
}

#[test]
fn test_config_request_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "api.timeout_ms"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "10000");

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "api.timeout_ms", "0"]);
    assert_ne!(code, 0);
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "api.timeout_ms", "2500"]);
    assert_eq!(code, 0);
    let (stdout, _, _) = run_cli(dir.path(), &["config", "get", "api.timeout_ms"]);
    assert_eq!(stdout.trim(), "2500");
}

#[test]
fn test_config_list_is_json() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "list"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("config list is JSON");
    assert_eq!(parsed["sos"]["location_timeout_ms"], 7000);
}

#[test]
fn test_config_rejects_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "get", "sos.nope"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));

    let (_, _, code) = run_cli(dir.path(), &["config", "set", "sos.hold_threshold_ms", "abc"]);
    assert_ne!(code, 0);
}

#[test]
fn test_declined_quick_sos_sends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    // Unreachable backend: a request would turn into a failure message.
    run_cli(dir.path(), &["config", "set", "api.base_url", "http://127.0.0.1:1"]);

    let (stdout, _, code) = run_cli_with_input(dir.path(), &["sos", "quick"], "n\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("SOS cancelled."));
    assert!(!stdout.contains("Failed to send SOS"));
}

#[test]
fn test_quick_sos_against_unreachable_backend_reports_failure() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["config", "set", "api.base_url", "http://127.0.0.1:1"]);

    let (stdout, _, code) =
        run_cli_with_input(dir.path(), &["sos", "quick", "--json"], "y\nn\n");
    assert_eq!(code, 0);
    assert!(stdout.contains("Failed to send SOS. Try calling a helpline."));
    assert!(stdout.contains(r#""status":"failure""#));
}

#[test]
fn test_report_validation_happens_before_network() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(
        dir.path(),
        &["report", "--place", "", "--description", "Broken light"],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("place must not be empty"));
}

#[test]
fn test_score_with_unreachable_backend_fails() {
    let dir = tempfile::tempdir().unwrap();
    run_cli(dir.path(), &["config", "set", "api.base_url", "http://127.0.0.1:1"]);
    let (_, stderr, code) = run_cli(dir.path(), &["score"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}

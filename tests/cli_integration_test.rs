//! CLI integration tests: run the golens binary against a scratch workspace.
//! Cargo builds the binary and exposes its path as CARGO_BIN_EXE_golens.

use std::path::Path;
use std::process::{Command, Output};

fn bin() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_golens"))
}

fn workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("api.go"),
        "package p\n\ntype Closer interface {\n\tClose() error\n}\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("file.go"),
        "package p\n\nfunc (f *File) Close() error { return nil }\n",
    )
    .unwrap();
    dir
}

fn run(workspace: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .env_remove("GOLENS_ORACLE")
        .env_remove("GOLENS_LOOKAHEAD")
        .env_remove("GOLENS_EXCLUDE_TESTS")
        .arg("--workspace")
        .arg(workspace)
        .args(args)
        .output()
        .expect("run golens")
}

#[test]
fn test_cli_help_succeeds() {
    let out = Command::new(bin()).arg("--help").output().expect("run --help");
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("golens"));
    assert!(stdout.contains("navigate"));
}

#[test]
fn test_cli_hints_lists_receiver_method() {
    let dir = workspace();
    let out = run(dir.path(), &["hints", "file.go"]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("File.Close"));
    assert!(stdout.contains("-> interfaces"));
}

#[test]
fn test_cli_scan_json() {
    let dir = workspace();
    let out = run(dir.path(), &["scan", "api.go", "--json"]);
    assert!(out.status.success());
    let body: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(body["interfaces"][0]["name"], "Closer");
    assert_eq!(body["interfaces"][0]["methods"][0]["name"], "Close");
}

#[test]
fn test_cli_navigate_to_interface() {
    let dir = workspace();
    let out = run(dir.path(), &["navigate", "file.go", "3"]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Closer.Close"));
    assert!(stdout.contains("api.go:4:2"));
}

#[test]
fn test_cli_fails_on_missing_file_or_zero_line() {
    let dir = workspace();
    let out = run(dir.path(), &["hints", "missing_12345.go"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not found"));

    let out = run(dir.path(), &["navigate", "file.go", "0"]);
    assert!(!out.status.success());
}

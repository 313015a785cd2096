#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the textcanvas-server binary.

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn run_server_bin(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_textcanvas-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute textcanvas-server")
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_cli_help_command() {
    let output = run_server_bin(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("textcanvas-server"));
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--mock"));
}

#[test]
fn test_cli_version_command() {
    let output = run_server_bin(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("textcanvas-server"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_server_bin(&["paint"]);

    assert!(!output.status.success(), "Unknown subcommand should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn test_cli_missing_config_file() {
    let output = run_server_bin(&["--config", "/nonexistent/textcanvas.yaml", "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file does not exist"));
}

#[test]
fn test_cli_invalid_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "server: [unclosed\n");

    let output = run_server_bin(&["--config", path.to_str().unwrap(), "check"]);

    assert!(!output.status.success(), "Malformed YAML should be rejected");
}

#[test]
fn test_cli_invalid_module_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r"
modules:
  text_canvas:
    config:
      max_text_length: many
",
    );

    let output = run_server_bin(&["--config", path.to_str().unwrap(), "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("text_canvas"));
}

#[test]
fn test_cli_check_valid_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
server:
  bind_addr: "127.0.0.1:18087"
logging:
  level: warn
modules:
  text_canvas:
    config:
      max_text_length: 500
      render:
        min_font_size: 20
        max_font_size: 30
"#,
    );

    let output = run_server_bin(&[
        "--config",
        path.to_str().unwrap(),
        "--mock",
        "--port",
        "18090",
        "check",
    ]);

    assert!(output.status.success(), "Valid config should pass check");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("127.0.0.1:18090"));
    assert!(stdout.contains("sqlite::memory:"));
    assert!(stdout.contains("\"max_text_length\": 500"));
}

#[test]
fn test_cli_print_config_uses_defaults() {
    let output = run_server_bin(&["--print-config"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Effective configuration"));
    assert!(stdout.contains("127.0.0.1:8087"));
    assert!(stdout.contains("sqlite://data/textcanvas.db?mode=rwc"));
}

#[test]
fn test_cli_shipped_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/textcanvas.yaml");

    let output = run_server_bin(&["--config", path, "check"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RobotoSlab"));
}

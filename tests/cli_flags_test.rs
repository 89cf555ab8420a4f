//! Flags handled before the terminal UI starts.

use std::process::Command;

fn askdata() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_askdata"));
    command.env_remove("ASKDATA_ENDPOINT").env_remove("ASKDATA_LOG_FILE");
    command
}

#[test]
fn test_version_flag() {
    let output = askdata()
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "--version should exit with code 0");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("askdata {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_help_flag_lists_options() {
    let output = askdata()
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--endpoint"));
    assert!(stdout.contains("ASKDATA_ENDPOINT"));
}

#[test]
fn test_unknown_flag_exits_with_usage_error() {
    let output = askdata()
        .arg("--bogus")
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown argument '--bogus'"));
    assert!(stderr.contains("Usage: askdata"));
}

#[test]
fn test_invalid_endpoint_rejected_before_ui() {
    let output = askdata()
        .args(["--endpoint", "ftp://example.com/ask"])
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ftp"));
}

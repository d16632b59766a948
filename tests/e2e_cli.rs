// logbook - tests/e2e_cli.rs
//
// End-to-end tests for the log-stats binary itself: argument handling,
// exit codes and which stream each kind of output goes to.
//
// Each run gets an empty config directory and no RUST_LOG so a developer's
// own settings cannot leak into the results.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn log_stats(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_log-stats"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", config_home)
        .output()
        .expect("failed to launch log-stats")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Usage
// =============================================================================

/// No LOGFILE is a usage error with exit code 1, not clap's default 2.
#[test]
fn test_missing_logfile_argument_exits_1() {
    let home = tempfile::tempdir().unwrap();
    let output = log_stats(home.path(), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("LOGFILE"));
}

/// --help is a successful run that prints usage on stdout.
#[test]
fn test_help_exits_0() {
    let home = tempfile::tempdir().unwrap();
    let output = log_stats(home.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage"));
}

/// --grep with neither LEVEL nor --export is rejected before the file is read.
#[test]
fn test_grep_without_selection_is_a_usage_error() {
    let home = tempfile::tempdir().unwrap();
    let log = fixture("sample.log");
    let output = log_stats(home.path(), &[log.to_str().unwrap(), "--grep", "disk"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("required"));
}

// =============================================================================
// Failures while loading
// =============================================================================

/// A missing file prints the not-found message on stderr and nothing on stdout.
#[test]
fn test_missing_file_exits_1_with_message_on_stderr() {
    let home = tempfile::tempdir().unwrap();
    let missing = home.path().join("missing.log");
    let output = log_stats(home.path(), &[missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains(&format!("File not found {}.", missing.display())));
}

/// A file that exists but cannot be read as text fails the same way.
#[test]
fn test_unreadable_file_exits_1_with_message_on_stderr() {
    let home = tempfile::tempdir().unwrap();
    let bad = home.path().join("binary.log");
    fs::write(&bad, [0x32, 0x30, 0xff, 0xfe, b'\n']).unwrap();
    let output = log_stats(home.path(), &[bad.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Error occurred while reading"));
}

/// A bad regex is reported even when the log file would also fail.
#[test]
fn test_invalid_grep_exits_1() {
    let home = tempfile::tempdir().unwrap();
    let log = fixture("sample.log");
    let output = log_stats(home.path(), &[log.to_str().unwrap(), "ERROR", "--grep", "("]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

// =============================================================================
// Successful runs
// =============================================================================

#[test]
fn test_table_on_stdout_exits_0() {
    let home = tempfile::tempdir().unwrap();
    let log = fixture("sample.log");
    let output = log_stats(home.path(), &[log.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.starts_with("Log Level       | Count\n"));
    assert!(out.contains("ERROR           | 2\n"));
    assert!(!out.contains("Log details"));
}

/// An empty LEVEL argument prints the table and no details block.
#[test]
fn test_empty_level_prints_table_only() {
    let home = tempfile::tempdir().unwrap();
    let log = fixture("sample.log");
    let plain = log_stats(home.path(), &[log.to_str().unwrap()]);
    let output = log_stats(home.path(), &[log.to_str().unwrap(), ""]);
    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout(&output).contains("Log details"));
    assert_eq!(stdout(&output), stdout(&plain));
}

#[test]
fn test_level_with_grep_lists_matching_details() {
    let home = tempfile::tempdir().unwrap();
    let log = fixture("sample.log");
    let output = log_stats(
        home.path(),
        &[log.to_str().unwrap(), "error", "--grep", "MOUNT"],
    );
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Log details for level \"ERROR\":\n"));
    assert!(out.contains("2024-01-01 10:01:10 - Mount failed after 3 attempts\n"));
    assert!(!out.contains("Disk failure"));
}

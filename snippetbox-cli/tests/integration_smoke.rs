//! Smoke tests to verify command wiring
//!
//! None of these reach a database: they stop at --help or at input
//! validation, which runs before any connection is made.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn snippetbox() -> Command {
    let mut cmd = Command::cargo_bin("snippetbox").unwrap();
    // Keep a developer's real settings out of the way
    cmd.env("DATABASE_URL", "postgres://snippetbox@127.0.0.1:1/snippetbox")
        .env_remove("SNIPPETBOX_MAX_CONNECTIONS")
        .env_remove("SNIPPETBOX_ACQUIRE_TIMEOUT_SECS")
        .env_remove("SNIPPETBOX_TIMEOUT_MS")
        .env("HOME", std::env::temp_dir());
    cmd
}

#[test]
fn test_help_lists_commands() {
    snippetbox()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("latest"));
}

#[test]
fn test_create_help() {
    snippetbox()
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Retention in days"));
}

#[test]
fn test_show_help() {
    snippetbox()
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snippet id"));
}

#[test]
fn test_latest_help() {
    snippetbox()
        .args(["latest", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JSON"));
}

#[test]
fn test_create_rejects_unknown_retention() {
    snippetbox()
        .args(["create", "--title", "T", "--content", "C", "--expires", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid retention value: '30'"));
}

#[test]
fn test_create_rejects_blank_title() {
    snippetbox()
        .args(["create", "--title", "  ", "--content", "C", "--expires", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid title"));
}

#[test]
fn test_show_requires_numeric_id() {
    snippetbox()
        .args(["show", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

/// Working directory holding a `.env` with the given contents
fn dir_with_dotenv(contents: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), contents).unwrap();
    dir
}

#[test]
fn test_dotenv_timeout_is_read_by_flag_parser() {
    // An unparseable value only errors if clap saw the .env entry
    let dir = dir_with_dotenv("SNIPPETBOX_TIMEOUT_MS=soon\n");

    snippetbox()
        .current_dir(dir.path())
        .arg("latest")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'soon'"))
        .stderr(predicate::str::contains("--timeout-ms"));
}

#[test]
fn test_process_env_wins_over_dotenv() {
    let dir = dir_with_dotenv("SNIPPETBOX_TIMEOUT_MS=soon\n");

    // The valid exported value is kept, so the run gets as far as connecting
    snippetbox()
        .current_dir(dir.path())
        .env("SNIPPETBOX_TIMEOUT_MS", "5000")
        .env("SNIPPETBOX_ACQUIRE_TIMEOUT_SECS", "1")
        .arg("latest")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to connect to database"))
        .stderr(predicate::str::contains("soon").not());
}

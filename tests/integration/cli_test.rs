//! End-to-end tests for the pedview binary
//!
//! Only failure paths and `--print-config` are exercised here: a valid
//! record file would start the terminal UI.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixtures_dir, temp_file};

/// Binary with an isolated config dir and plain output.
fn pedview(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pedview").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("PEDVIEW_LOG")
        .env_remove("PEDVIEW_LOG_FILE");
    cmd
}

fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

#[test]
fn missing_path_prints_usage_and_exits_1() {
    let home = TempDir::new().unwrap();
    pedview(&home)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_path_wins_over_broken_config() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = temp_file("broken.toml", "[playback\n");
    pedview(&home)
        .arg("--config")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("Failed to parse").not());
}

#[test]
fn errors_use_the_configured_theme() {
    let home = TempDir::new().unwrap();
    pedview(&home)
        .env_remove("NO_COLOR")
        .args(["--theme", "light", "/nonexistent/run.csv"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\x1b[31mError:"));

    pedview(&home)
        .env_remove("NO_COLOR")
        .arg("/nonexistent/run.csv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\x1b[91mError:"));
}

#[test]
fn nonexistent_file_fails_before_ui() {
    let home = TempDir::new().unwrap();
    pedview(&home)
        .arg("/nonexistent/run.csv")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn malformed_file_names_the_line() {
    let home = TempDir::new().unwrap();
    pedview(&home)
        .arg(fixture("malformed.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed record on line 3"));
}

#[test]
fn header_only_file_is_empty() {
    let home = TempDir::new().unwrap();
    pedview(&home)
        .arg(fixture("header_only.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no frames"));
}

#[test]
fn single_frame_file_cannot_derive_step() {
    let home = TempDir::new().unwrap();
    pedview(&home)
        .arg(fixture("single_frame.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("at least two frames"));
}

#[test]
fn zero_and_negative_speed_are_rejected() {
    let home = TempDir::new().unwrap();
    for speed in ["0", "-1"] {
        pedview(&home)
            .arg(fixture("corridor.csv"))
            .arg(speed)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Speed must be a positive number"));
    }
}

#[test]
fn non_numeric_speed_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    pedview(&home)
        .arg(fixture("corridor.csv"))
        .arg("fast")
        .assert()
        .code(2);
}

#[test]
fn print_config_shows_defaults() {
    let home = TempDir::new().unwrap();
    pedview(&home)
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("history_capacity = 512"))
        .stdout(predicate::str::contains("theme = \"dark\""));
}

#[test]
fn print_config_applies_overrides() {
    let home = TempDir::new().unwrap();
    pedview(&home)
        .args(["--print-config", "--history", "64", "--theme", "light"])
        .args(["run.csv", "2.5", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("history_capacity = 64"))
        .stdout(predicate::str::contains("speed = 2.5"))
        .stdout(predicate::str::contains("direction_vectors = true"))
        .stdout(predicate::str::contains("theme = \"light\""));
}

#[test]
fn config_file_is_read() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = temp_file("pedview.toml", "[domain]\nlength = 24.0\n");
    pedview(&home)
        .arg("--config")
        .arg(&path)
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("length = 24.0"));
}

#[test]
fn default_config_location_is_used() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config").join("pedview");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[playback]\nhistory_capacity = 32\n").unwrap();

    pedview(&home)
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("history_capacity = 32"));
}

#[test]
fn invalid_history_is_rejected() {
    let home = TempDir::new().unwrap();
    pedview(&home)
        .args(["--history", "1"])
        .arg(fixture("corridor.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("history_capacity"));
}

#[test]
fn broken_config_file_is_reported() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = temp_file("broken.toml", "[playback\n");
    pedview(&home)
        .arg("--config")
        .arg(&path)
        .arg(fixture("corridor.csv"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn log_file_records_failures() {
    let home = TempDir::new().unwrap();
    let log = home.path().join("pedview.log");
    pedview(&home)
        .arg("--log-file")
        .arg(&log)
        .arg(fixture("malformed.csv"))
        .assert()
        .code(1);

    let content = fs::read_to_string(&log).unwrap();
    assert!(content.contains("aborting record stream"), "log: {content}");
}

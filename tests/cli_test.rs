//! End-to-end checks of the `breathscan` binary that need no backend.
#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;

fn breathscan() -> Command {
    Command::cargo_bin("breathscan").unwrap()
}

#[test]
fn test_help_lists_commands() {
    breathscan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("predict"))
        .stdout(predicate::str::contains("metrics"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("login"));
}

#[test]
fn test_predict_rejects_unknown_model() {
    breathscan()
        .args(["predict", "sample.csv", "--model", "Perceptron"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Perceptron"));
}

#[test]
fn test_predict_missing_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    breathscan()
        .args(["--api-url", "http://127.0.0.1:9"])
        .arg("predict")
        .arg(dir.path().join("absent.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.csv"));
}

#[test]
fn test_bad_config_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("breathscan.yaml");
    std::fs::write(&config, "api_url: not-a-url\n").unwrap();
    breathscan()
        .arg("--config")
        .arg(&config)
        .arg("metrics")
        .assert()
        .failure()
        .stderr(predicate::str::contains("api_url"));
}

#[test]
fn test_api_url_can_come_from_environment() {
    breathscan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("BREATHSCAN_API_URL"));
}

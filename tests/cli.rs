//! End-to-end CLI tests
//!
//! Each test runs the binary against an isolated config directory so
//! nothing leaks between tests or into the developer's real config.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hisabi(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hisabi").unwrap();
    cmd.env("HISABI_CLI_DATA_DIR", config_dir.path());
    cmd.env_remove("HISABI_LOCALE");
    cmd
}

#[test]
fn test_payoff_zero_rate() {
    let dir = TempDir::new().unwrap();
    hisabi(&dir)
        .args(["payoff", "10000", "0", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Months to payoff:  10"))
        .stdout(predicate::str::contains("$10000.00"))
        .stdout(predicate::str::contains("Total interest:    $0.00"));
}

#[test]
fn test_payoff_json_output() {
    let dir = TempDir::new().unwrap();
    let output = hisabi(&dir)
        .args(["payoff", "10000", "12", "1000", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["months"], 11);
    assert_eq!(value["years"], 0);
    assert_eq!(value["remaining_months"], 11);
    assert!(value["total_interest"].as_f64().unwrap() > 0.0);
}

#[test]
fn test_payoff_schedule_table() {
    let dir = TempDir::new().unwrap();
    hisabi(&dir)
        .args(["payoff", "3000", "12", "1000", "--schedule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Month"))
        .stdout(predicate::str::contains("Balance"))
        .stdout(predicate::str::contains("$0.00"));
}

#[test]
fn test_payoff_rejects_payment_below_interest() {
    let dir = TempDir::new().unwrap();
    hisabi(&dir)
        .args(["payoff", "100000", "50", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("never be paid off"));
}

#[test]
fn test_payoff_rejects_non_positive_principal() {
    let dir = TempDir::new().unwrap();
    hisabi(&dir)
        .args(["payoff", "0", "12", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Principal must be greater than zero"));
}

#[test]
fn test_health_strong_position() {
    let dir = TempDir::new().unwrap();
    hisabi(&dir)
        .args([
            "health", "--income", "10000", "--expenses", "7000", "--savings", "50000", "--debts",
            "20000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("100/100"))
        .stdout(predicate::str::contains("strong"));
}

#[test]
fn test_health_arabic_locale() {
    let dir = TempDir::new().unwrap();
    hisabi(&dir)
        .args([
            "health", "--income", "0", "--expenses", "0", "--savings", "0", "--debts", "0",
            "--locale", "ar",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("صندوق طوارئ"));
}

#[test]
fn test_health_json_degenerate() {
    let dir = TempDir::new().unwrap();
    let output = hisabi(&dir)
        .args([
            "health", "--income", "0", "--expenses", "0", "--savings", "0", "--debts", "0",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["health_score"], 40);
    assert_eq!(value["recommendations"].as_array().unwrap().len(), 2);
}

#[test]
fn test_config_command() {
    let dir = TempDir::new().unwrap();
    hisabi(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default locale:  en"))
        .stdout(predicate::str::contains("Currency symbol: $"));
}

#[test]
fn test_no_command_prints_hint() {
    let dir = TempDir::new().unwrap();
    hisabi(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("hisabi --help"));
}

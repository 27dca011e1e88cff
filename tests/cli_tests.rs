use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budu(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("budu").unwrap();
    cmd.env("BUDU_DATA_DIR", home).env_remove("RUST_LOG");
    cmd
}

fn added_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.lines()
        .find_map(|line| line.strip_prefix("Added expense "))
        .map(|id| id.trim().to_string())
        .unwrap()
}

#[test]
fn fresh_install_shows_empty_status() {
    let home = TempDir::new().unwrap();

    budu(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set for this month."));
}

#[test]
fn budget_and_expenses_update_balance() {
    let home = TempDir::new().unwrap();

    budu(home.path())
        .args(["budget", "set", "500000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget set to Rp500.000"));

    budu(home.path())
        .args(["expense", "add", "Coffee", "25000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Available: Rp475.000"));

    budu(home.path())
        .args(["expense", "add", "Lunch", "40.000"])
        .assert()
        .success();

    budu(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rp65.000 (13%)"))
        .stdout(predicate::str::contains("Rp435.000"));

    budu(home.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("Total: Rp65.000"));

    let data = home.path().join("data");
    assert!(data.join("monthly_budget.json").exists());
    assert!(data.join("expenses.json").exists());
}

#[test]
fn invalid_amount_is_rejected() {
    let home = TempDir::new().unwrap();

    budu(home.path())
        .args(["expense", "add", "Coffee", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    budu(home.path())
        .args(["budget", "set", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid number"));

    budu(home.path())
        .args(["expense", "add", " ", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title cannot be empty"));

    assert!(!home.path().join("data").join("expenses.json").exists());
}

#[test]
fn overflowing_expense_is_rejected() {
    let home = TempDir::new().unwrap();
    let half = "50000000000000000000000000000";

    budu(home.path())
        .args(["budget", "set", "1"])
        .assert()
        .success();

    budu(home.path())
        .args(["expense", "add", "A", half])
        .assert()
        .success();

    budu(home.path())
        .args(["expense", "add", "B", half])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount too large"));

    budu(home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expenses:"))
        .stdout(predicate::str::contains("Over budget"));
}

#[test]
fn delete_by_short_id() {
    let home = TempDir::new().unwrap();

    let output = budu(home.path())
        .args(["expense", "add", "Coffee", "25000"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = added_id(&output.stdout);

    budu(home.path())
        .args(["expense", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"))
        .stdout(predicate::str::contains("Coffee"));

    budu(home.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded this month."));

    budu(home.path())
        .args(["expense", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found"));
}

#[test]
fn list_respects_limit() {
    let home = TempDir::new().unwrap();

    for (title, amount) in [("A", "1"), ("B", "2"), ("C", "3")] {
        budu(home.path())
            .args(["expense", "add", title, amount])
            .assert()
            .success();
    }

    budu(home.path())
        .args(["expense", "list", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 2 of 3 expenses"));
}

#[test]
fn reset_requires_confirmation() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");

    budu(home.path())
        .args(["budget", "set", "1000"])
        .assert()
        .success();

    budu(home.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    assert!(data.join("monthly_budget.json").exists());

    budu(home.path())
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been reset"));
    assert!(!data.join("monthly_budget.json").exists());
    assert!(!data.join("expenses.json").exists());
}

#[test]
fn stale_month_is_cleared_on_start() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("monthly_budget.json"),
        r#"{"amount": 500000.0, "month": 1, "year": 2000}"#,
    )
    .unwrap();
    fs::write(
        data.join("expenses.json"),
        r#"[{"id": "550e8400-e29b-41d4-a716-446655440000", "title": "Old", "amount": 100.0, "date": "2000-01-10T08:00:00Z"}]"#,
    )
    .unwrap();

    budu(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("A new month has started"))
        .stdout(predicate::str::contains("No budget set for this month."));

    assert!(!data.join("monthly_budget.json").exists());
    assert!(!data.join("expenses.json").exists());

    budu(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("A new month has started").not());
}

#[test]
fn malformed_data_is_ignored() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("monthly_budget.json"), "{ broken").unwrap();
    fs::write(data.join("expenses.json"), "[1, 2, 3]").unwrap();

    budu(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No budget set for this month."));
}

#[test]
fn config_shows_data_directory() {
    let home = TempDir::new().unwrap();

    budu(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budu Configuration"))
        .stdout(predicate::str::contains("Currency symbol:     Rp"))
        .stdout(predicate::str::contains("OnStartup"));
}

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn financeflow(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("financeflow").unwrap();
    cmd.env("FINANCEFLOW_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn seeded() -> TempDir {
    let dir = TempDir::new().unwrap();
    financeflow(&dir)
        .args(["init", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample transactions have been added."));
    dir
}

#[test]
fn test_init_creates_data_files() {
    let dir = seeded();
    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn test_init_twice_keeps_existing_data() {
    let dir = seeded();
    financeflow(&dir)
        .args(["transaction", "add", "expense", "10", "Food", "--date", "2024-01-06"])
        .assert()
        .success();

    financeflow(&dir)
        .args(["init", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample transactions have been added.").not());

    financeflow(&dir)
        .args(["transaction", "list", "--limit", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("06/01/2024"));
}

#[test]
fn test_dashboard_shows_balance_and_goal_warning() {
    let dir = seeded();
    financeflow(&dir)
        .args(["dashboard", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 2162.00"))
        .stdout(predicate::str::contains("Warning!"))
        .stdout(predicate::str::contains("Your largest expense!"));
}

#[test]
fn test_dashboard_without_overspending_has_no_warning() {
    let dir = seeded();
    financeflow(&dir)
        .args(["dashboard", "--date", "2024-01-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning!").not());
}

#[test]
fn test_summary_totals() {
    let dir = seeded();
    financeflow(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 3500.00"))
        .stdout(predicate::str::contains("R$ 1338.00"))
        .stdout(predicate::str::contains("R$ 2162.00"));
}

#[test]
fn test_breakdown_ranks_housing_first() {
    let dir = seeded();
    let output = financeflow(&dir).arg("breakdown").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let housing = stdout.find("Housing").unwrap();
    let food = stdout.find("Food").unwrap();
    assert!(housing < food);
}

#[test]
fn test_breakdown_top_limits_rows() {
    let dir = seeded();
    financeflow(&dir)
        .args(["breakdown", "--top", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Housing"))
        .stdout(predicate::str::contains("Shopping"))
        .stdout(predicate::str::contains("Food").not())
        .stdout(predicate::str::contains("R$ 1338.00"));
}

#[test]
fn test_breakdown_csv_output() {
    let dir = seeded();
    let path = dir.path().join("breakdown.csv");
    financeflow(&dir)
        .args(["breakdown", "--output"])
        .arg(&path)
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("rank,category,amount,share,transaction_count"));
    assert!(content.contains("1,Housing,850.00,0.6353,1"));
}

#[test]
fn test_today_within_goal() {
    let dir = seeded();
    financeflow(&dir)
        .args(["today", "--date", "2024-01-04", "--goal", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Within the daily goal (R$ 11.00 left)"));
}

#[test]
fn test_today_over_goal() {
    let dir = seeded();
    financeflow(&dir)
        .args(["today", "--date", "2024-01-05", "--goal", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Over the daily goal by R$ 134.00"));
}

#[test]
fn test_add_transaction_updates_summary() {
    let dir = seeded();
    financeflow(&dir)
        .args(["transaction", "add", "income", "500", "Salary", "-m", "Bonus", "--date", "2024-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created transaction txn-"));

    financeflow(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 4000.00"))
        .stdout(predicate::str::contains("R$ 2662.00"));
}

#[test]
fn test_add_negative_amount_fails() {
    let dir = seeded();
    financeflow(&dir)
        .args(["transaction", "add", "expense", "--", "-5", "Food"])
        .assert()
        .failure();
}

#[test]
fn test_add_unknown_kind_fails() {
    let dir = seeded();
    financeflow(&dir)
        .args(["transaction", "add", "transfer", "5", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("transfer"));
}

#[test]
fn test_import_csv() {
    let dir = seeded();
    let csv_path = dir.path().join("import.csv");
    fs::write(
        &csv_path,
        "date,kind,amount,category,description\n\
         2024-02-01,expense,12.50,Food,Lunch\n\
         2024-02-02,expense,oops,Food,Broken\n",
    )
    .unwrap();

    financeflow(&dir)
        .args(["transaction", "import"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 transaction(s)"))
        .stdout(predicate::str::contains("Skipped 1 invalid row(s):"))
        .stdout(predicate::str::contains("Row 2"));
}

#[test]
fn test_export_csv_to_stdout() {
    let dir = seeded();
    financeflow(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("date,kind,amount,category,description,id"))
        .stdout(predicate::str::contains("Housing"));
}

#[test]
fn test_export_json_to_file() {
    let dir = seeded();
    let path = dir.path().join("snapshot.json");
    financeflow(&dir)
        .args(["export", "--format", "json", "--date", "2024-01-05", "--output"])
        .arg(&path)
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["schema_version"], "1.0.0");
    assert_eq!(value["transactions"].as_array().unwrap().len(), 7);
}

#[test]
fn test_config_set_goal_persists() {
    let dir = seeded();
    financeflow(&dir)
        .args(["config", "set-goal", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 250.00"));

    financeflow(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Daily goal:      R$ 250.00"));
}

#[test]
fn test_premium_offer() {
    let dir = TempDir::new().unwrap();
    financeflow(&dir)
        .arg("premium")
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 19.90 per month"));
}

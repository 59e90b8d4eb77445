//! End-to-end shell session tests
//!
//! Drives the `expenses` binary through scripted REPL sessions, with the
//! ledger file redirected into a temp directory via `EXPENSE_SHELL_FILE`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env(
        "EXPENSE_SHELL_FILE",
        temp_dir.path().join("expenses.json"),
    );
    cmd
}

#[test]
fn full_scenario_add_list_summary_delete_update() {
    let temp_dir = TempDir::new().unwrap();

    let script = "\
add --description Coffee --amount 5
add --description Book --amount 20
list
summary
delete --id 1
list
update --id 1 --description Book --amount 15
summary
quit
";

    expenses_cmd(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully: 1"))
        .stdout(predicate::str::contains("Expense added successfully: 2"))
        .stdout(predicate::str::contains("Total expenses: 25€"))
        .stdout(predicate::str::contains("Expense deleted successfully: 1"))
        .stdout(predicate::str::contains("Expense updated successfully: 1"))
        .stdout(predicate::str::contains("Total expenses: 15€"));

    // After the session: one record, renumbered to id 1, counter matching.
    let raw = std::fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["expense-counter"], 1);
    assert_eq!(doc["expenses"][0]["id"], 1);
    assert_eq!(doc["expenses"][0]["description"], "Book");
    assert_eq!(doc["expenses"][0]["amount"], 15);
}

#[test]
fn on_disk_field_names_are_preserved() {
    let temp_dir = TempDir::new().unwrap();

    expenses_cmd(&temp_dir)
        .write_stdin("add --description Coffee --amount 5\nexit\n")
        .assert()
        .success();

    let raw = std::fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
    assert!(raw.contains("\"expense-counter\""));
    assert!(raw.contains("\"Month\""));
    assert!(raw.contains("\"createdAt\""));
    assert!(raw.contains("\"updatedAt\""));
}

#[test]
fn malformed_arguments_do_not_end_the_session() {
    let temp_dir = TempDir::new().unwrap();

    let script = "\
add --amount 5
add --description Coffee --amount five
add --description Coffee --amount 5
summary
quit
";

    expenses_cmd(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully: 1"))
        .stdout(predicate::str::contains("Total expenses: 5€"));
}

#[test]
fn unknown_id_reports_does_not_exist_and_continues() {
    let temp_dir = TempDir::new().unwrap();

    let script = "\
add --description Coffee --amount 5
update --id 99 --description Tea --amount 3
delete --id 42
summary
quit
";

    expenses_cmd(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense 99 does not exist"))
        .stdout(predicate::str::contains("Expense 42 does not exist"))
        .stdout(predicate::str::contains("Total expenses: 5€"));
}

#[test]
fn validation_failure_reports_and_continues() {
    let temp_dir = TempDir::new().unwrap();

    let script = "\
add --description Coffee --amount 0
summary --month 13
summary
quit
";

    expenses_cmd(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Amount 0 must be greater than zero",
        ))
        .stdout(predicate::str::contains("Month 13 must be between 1 and 12"))
        .stdout(predicate::str::contains("Total expenses: 0€"));
}

#[test]
fn monthly_summary_names_the_month() {
    let temp_dir = TempDir::new().unwrap();

    // A record created today always lands in the current month.
    let month = chrono_month_name();
    let script = format!(
        "add --description Coffee --amount 5\nsummary --month {}\nquit\n",
        current_month()
    );

    expenses_cmd(&temp_dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Total expenses in {}: 5€",
            month
        )));
}

#[test]
fn read_only_session_leaves_no_file_behind() {
    let temp_dir = TempDir::new().unwrap();

    expenses_cmd(&temp_dir)
        .write_stdin("list\nsummary\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: 0€"));

    assert!(!temp_dir.path().join("expenses.json").exists());
}

fn current_month() -> u32 {
    use chrono::Datelike;
    chrono::Local::now().date_naive().month()
}

fn chrono_month_name() -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[(current_month() - 1) as usize]
}

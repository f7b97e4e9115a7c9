use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSES_DB", db).env_remove("RUST_LOG");
    cmd
}

fn setup() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("expenses.db");
    (temp_dir, db)
}

#[test]
fn no_verb_prints_help_without_creating_database() {
    let (_temp_dir, db) = setup();

    expenses(&db)
        .assert()
        .success()
        .stdout(predicate::str::contains("An expense recording system"))
        .stdout(predicate::str::contains("add AMOUNT MEMO [DATE]"))
        .stdout(predicate::str::contains("search QUERY"));

    expenses(&db)
        .arg("bogus")
        .assert()
        .success()
        .stdout(predicate::str::contains("delete NUMBER"));

    assert!(!db.exists());
}

#[test]
fn add_list_and_total() {
    let (_temp_dir, db) = setup();

    for (amount, memo, date) in [
        ("10.00", "Groceries", "2025-01-01"),
        ("5.50", "Bus fare", "2025-01-02"),
        ("3.25", "Coffee", "2025-01-03"),
    ] {
        expenses(&db)
            .args(["add", amount, memo, date])
            .assert()
            .success()
            .stdout("");
    }

    expenses(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("There are 3 expenses.\n"))
        .stdout(predicate::str::contains("  1 Wed Jan 01 2025        10.00 Groceries\n"))
        .stdout(predicate::str::contains(format!("Total {:>30}\n", "18.75")));
}

#[test]
fn missing_arguments_print_usage() {
    let (_temp_dir, db) = setup();

    expenses(&db)
        .args(["add", "5.00"])
        .assert()
        .success()
        .stdout("You must provide an amount and memo.\n");

    expenses(&db)
        .arg("search")
        .assert()
        .success()
        .stdout("You must provide a search term.\n");

    assert!(!db.exists());
}

#[test]
fn search_is_case_insensitive() {
    let (_temp_dir, db) = setup();
    for (amount, memo) in [
        ("3.50", "Morning coffee"),
        ("2.75", "Bus fare"),
        ("12.99", "Coffee beans"),
    ] {
        expenses(&db).args(["add", amount, memo]).assert().success();
    }

    expenses(&db)
        .args(["search", "COFFEE"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("There are 2 expenses.\n"))
        .stdout(predicate::str::contains("Bus fare").not());
}

#[test]
fn delete_reports_missing_and_echoes_deleted() {
    let (_temp_dir, db) = setup();
    expenses(&db)
        .args(["add", "4.20", "Snacks", "2026-10-18"])
        .assert()
        .success();

    expenses(&db)
        .args(["delete", "99"])
        .assert()
        .success()
        .stdout("There is no expense with the id '99'.\n");

    expenses(&db)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(concat!(
            "The following expense has been deleted:\n",
            "  1 Sun Oct 18 2026         4.20 Snacks\n",
        ));

    expenses(&db)
        .arg("list")
        .assert()
        .success()
        .stdout("There are no expenses.\n");
}

#[test]
fn clear_needs_exact_y() {
    let (_temp_dir, db) = setup();
    expenses(&db).args(["add", "1.00", "a"]).assert().success();
    expenses(&db).args(["add", "2.00", "b"]).assert().success();

    expenses(&db)
        .arg("clear")
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout("This will remove all expenses. Are you sure? (y/n) ");

    expenses(&db)
        .arg("list")
        .assert()
        .stdout(predicate::str::starts_with("There are 2 expenses."));

    expenses(&db)
        .arg("clear")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("All expenses have been deleted.\n"));

    expenses(&db)
        .arg("list")
        .assert()
        .stdout("There are no expenses.\n");
}

#[test]
fn clear_with_yes_flag_skips_prompt() {
    let (_temp_dir, db) = setup();
    expenses(&db).args(["add", "1.00", "a"]).assert().success();

    expenses(&db)
        .args(["--yes", "clear"])
        .assert()
        .success()
        .stdout("All expenses have been deleted.\n");
}

#[test]
fn malformed_amount_is_fatal() {
    let (_temp_dir, db) = setup();

    expenses(&db)
        .args(["add", "ten", "Lunch"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid money format"));
}

#[test]
fn search_folds_non_ascii_case() {
    let (_temp_dir, db) = setup();
    expenses(&db).args(["add", "4.20", "Café au lait"]).assert().success();
    expenses(&db).args(["add", "1.50", "Cafeteria"]).assert().success();

    expenses(&db)
        .args(["search", "CAFÉ"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("There is 1 expense.\n"))
        .stdout(predicate::str::contains("Café au lait"));
}

#[test]
fn unopenable_database_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Database error"));
}

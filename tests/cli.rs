//! End-to-end tests for the zametki binary.
//!
//! Each test runs against a fresh HOME so the database and config start
//! empty.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn zametki(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("zametki").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn add_then_day_shows_parsed_note() {
    let home = TempDir::new().unwrap();

    zametki(&home)
        .args([
            "add",
            "обед с 13 до 14 цвет зеленый",
            "--date",
            "2026-08-29",
            "-o",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"green\""));

    zametki(&home)
        .args(["day", "2026-08-29", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("обед с 13 до 14 цвет зеленый"))
        .stdout(predicate::str::contains("13:00"))
        .stdout(predicate::str::contains("14:00"));
}

#[test]
fn parse_only_previews_without_persisting() {
    let home = TempDir::new().unwrap();

    zametki(&home)
        .args(["add", "встреча в 15", "--parse-only", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15:00"))
        .stdout(predicate::str::contains("16:00"));

    zametki(&home)
        .args(["list", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn month_marks_days_with_notes() {
    let home = TempDir::new().unwrap();

    zametki(&home)
        .args(["add", "поезд в 9:45", "--date", "2026-08-29"])
        .assert()
        .success();

    zametki(&home)
        .args(["month", "2026-08", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"month\": 8"))
        .stdout(predicate::str::contains("поезд"));

    zametki(&home)
        .args(["month", "2026-09", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn edit_and_show_round_trip() {
    let home = TempDir::new().unwrap();

    zametki(&home)
        .args(["add", "звонок в 8 утра", "--date", "2026-08-29"])
        .assert()
        .success();

    zametki(&home)
        .args(["edit", "1", "--color", "red", "--start-time", "08:30"])
        .assert()
        .success();

    zametki(&home)
        .args(["show", "1", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"red\""))
        .stdout(predicate::str::contains("08:30"));
}

#[test]
fn delete_removes_note() {
    let home = TempDir::new().unwrap();

    zametki(&home)
        .args(["add", "временная заметка", "--date", "2026-08-29"])
        .assert()
        .success();

    zametki(&home)
        .args(["delete", "1", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"deleted\": 1"));

    zametki(&home)
        .args(["show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found"));
}

#[test]
fn invalid_date_argument_fails() {
    let home = TempDir::new().unwrap();

    zametki(&home)
        .args(["add", "встреча в 15", "--date", "завтра"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn config_default_output_applies() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".zametki");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(
        root.join("config.yaml"),
        "general:\n  default_output: json\n  color: never\n",
    )
    .unwrap();

    zametki(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

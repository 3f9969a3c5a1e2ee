use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn rocketplot() -> Command {
    Command::cargo_bin("rocketplot").unwrap()
}

#[test]
fn help_mentions_default_input() {
    rocketplot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rocket_simulation.csv"));
}

#[test]
fn missing_file_fails_before_display() {
    let dir = tempfile::tempdir().unwrap();

    rocketplot()
        .arg(dir.path().join("nope.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open file"));
}

#[test]
fn default_input_is_read_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();

    rocketplot()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("rocket_simulation.csv"));
}

#[test]
fn missing_y_column_fails_before_display() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rocket_simulation.csv");
    fs::write(&path, "Time(s),X(m)\n0.00,   1.00\n").unwrap();

    rocketplot()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Column not found: Y(m)"));
}

#[test]
fn non_numeric_position_fails_before_display() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rocket_simulation.csv");
    fs::write(&path, "X(m),Y(m)\n1,2\nthree,4\n").unwrap();

    rocketplot()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value \"three\" in column X(m) at row 2"));
}

#[test]
fn log_file_records_failure() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("rocketplot.log");

    rocketplot()
        .arg(dir.path().join("nope.csv"))
        .arg("--log")
        .arg(&log)
        .assert()
        .failure();

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting Rocketplot"));
}

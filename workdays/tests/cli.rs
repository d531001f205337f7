//! End-to-end tests: run the `workdays` binary in a scratch directory.

use std::path::Path;
use std::process::{Command, Output};

fn workdays(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_workdays"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("failed to run workdays binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn holiday_lifecycle_and_countdown() {
    let dir = tempfile::tempdir().unwrap();

    let out = workdays(dir.path(), &["holiday", "weekends", "2024-06-01", "2024-06-30"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "10 weekend days marked between 2024-06-01 and 2024-06-30\n");

    let out = workdays(dir.path(), &["--today", "2024-06-01", "until", "2024-06-10"]);
    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "2024-06-10 is 6 working days away, or 1 week, 1 day\n"
    );

    let out = workdays(
        dir.path(),
        &["holiday", "add", "2024-06-10", "--label", "Dragon Boat Festival"],
    );
    assert!(out.status.success());
    let saved = std::fs::read_to_string(dir.path().join("holidays.txt")).unwrap();
    assert!(saved.contains("2024-06-10,Dragon Boat Festival\n"));

    let out = workdays(dir.path(), &["holiday", "list", "--year", "2024"]);
    assert_eq!(stdout(&out).lines().count(), 11);
    assert!(stdout(&out).contains("2024-06-10 Mon Dragon Boat Festival"));

    let out = workdays(dir.path(), &["holiday", "remove", "2024-06-10"]);
    assert!(out.status.success());
    let out = workdays(dir.path(), &["holiday", "remove", "2024-06-10"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2024-06-10 is not a holiday, nothing removed\n");
}

#[test]
fn shift_and_span() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("holidays.txt"),
        "2024-06-08,weekend\n2024-06-09,weekend\n",
    )
    .unwrap();

    let out = workdays(dir.path(), &["shift", "2", "--from", "2024-06-06"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2 working days after 2024-06-06 is 2024-06-10\n");

    let out = workdays(dir.path(), &["--today", "2024-06-10", "shift", "-2"]);
    assert_eq!(stdout(&out), "2 working days before 2024-06-10 is 2024-06-06\n");

    let out = workdays(dir.path(), &["span", "2024-06-06", "2024-06-10"]);
    assert_eq!(
        stdout(&out),
        "2024-06-06 to 2024-06-10 spans 3 working days across 2 ISO weeks\n"
    );
}

#[test]
fn policy_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("holidays.txt"), "2024-06-08,weekend\n").unwrap();
    std::fs::write(
        dir.path().join("workdays.toml"),
        "today = \"2024-06-06\"\n[policy]\nfinal_day = \"unchecked\"\n",
    )
    .unwrap();

    let out = workdays(dir.path(), &["shift", "2"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2 working days after 2024-06-06 is 2024-06-08\n");
}

#[test]
fn invalid_input_fails_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();

    let out = workdays(dir.path(), &["until", "2024-02-30"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid input"));

    let out = workdays(dir.path(), &["shift", "three"]);
    assert!(!out.status.success());

    let out = workdays(dir.path(), &["holiday", "add", "tomorrow"]);
    assert!(!out.status.success());
    assert!(!dir.path().join("holidays.txt").exists());
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = workdays(dir.path(), &["--config", "nope.toml", "holiday", "list"]);
    assert!(!out.status.success());
}

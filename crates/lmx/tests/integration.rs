//! End-to-end tests for the `lmx` binary via `assert_cmd`.

use assert_cmd::Command;
use predicates::prelude::*;

/// Build a `Command` targeting the cargo-built `lmx` binary.
fn lmx() -> Command {
    Command::cargo_bin("lmx").unwrap()
}

#[test]
fn seeded_runs_are_reproducible() {
    let first = lmx().args(["2", "--seed", "7"]).output().unwrap();
    let second = lmx().args(["2", "--seed", "7"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn prints_a_nonempty_formula_by_default() {
    lmx()
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn seeded_single_equation_has_no_empty_output() {
    lmx()
        .args(["0", "--seed", "33"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn rejects_a_negative_count() {
    lmx().arg("-1").assert().failure();
}

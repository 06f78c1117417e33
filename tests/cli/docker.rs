//! Tests for `--dev docker` that need no container engine.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_up_unscaffolded_exits_one_with_hint() {
    let t = Test::new();

    let output = t.cmd().args(["--dev", "docker", "up"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not scaffolded");
    assert_stdout_contains(&output, "devstack --init client");
}

#[test]
fn test_up_unscaffolded_writes_nothing() {
    let t = Test::new();

    t.cmd()
        .args(["--dev", "docker", "up", "--yes"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("admin key").not());
    assert!(!t.exists(".admin-key"));
    assert!(!t.exists("client"));
}

//! Tests for `--init`, `--reset` and `--remove`.

use crate::support::*;

#[test]
fn test_remove_missing_directory_succeeds() {
    let t = Test::new();

    let output = t.cmd().args(["--remove", "client"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "does not exist");
}

#[test]
fn test_reset_missing_directory_succeeds() {
    let t = Test::new();

    let output = t.cmd().args(["--reset", "client"]).output().unwrap();
    assert_success(&output);
    assert!(!t.exists("client"));
}

#[test]
fn test_remove_declined_keeps_directory() {
    let t = Test::scaffolded();

    let output = t
        .cmd()
        .args(["--remove", "client"])
        .write_stdin("n\n")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "cancelled");
    assert!(t.exists("client/package.json"));
}

#[test]
fn test_remove_empty_answer_declines() {
    let t = Test::scaffolded();

    let output = t
        .cmd()
        .args(["--remove", "client"])
        .write_stdin("")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.exists("client/package.json"));
}

#[test]
fn test_remove_confirmed_on_stdin() {
    let t = Test::scaffolded();

    let output = t
        .cmd()
        .args(["--remove", "client"])
        .write_stdin("yes\n")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(!t.exists("client"));
}

#[test]
fn test_remove_with_yes_flag() {
    let t = Test::scaffolded();

    let output = t.cmd().args(["--remove", "client", "--yes"]).output().unwrap();
    assert_success(&output);
    assert!(!t.exists("client"));
    assert!(t.exists("templates/Dockerfile"));
}

#[test]
fn test_init_skips_existing_project() {
    let t = Test::scaffolded();

    let output = t.cmd().args(["--init", "client"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "already exists");
    assert_eq!(t.read("client/package.json"), SAMPLE_PACKAGE_JSON);
}

#[test]
fn test_root_from_environment() {
    let t = Test::scaffolded();
    let elsewhere = tempfile::TempDir::new().unwrap();

    let output = t
        .cmd()
        .current_dir(elsewhere.path())
        .env("DEVSTACK_ROOT", t.root())
        .args(["--remove", "client", "--yes"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(!t.exists("client"));
}

#[test]
fn test_custom_project_dir_from_settings() {
    let t = Test::new();
    t.write("devstack.toml", "[project]\ndir = \"web\"\n");
    t.write("web/package.json", SAMPLE_PACKAGE_JSON);

    let output = t.cmd().args(["--remove", "client", "--yes"]).output().unwrap();
    assert_success(&output);
    assert!(!t.exists("web"));
}

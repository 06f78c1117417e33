//! Tests for argument handling and exit codes.

use crate::support::*;

#[test]
fn test_help_exits_zero() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "--generate-admin-key");
    assert_stdout_contains(&output, "--dev");
}

#[test]
fn test_no_arguments_prints_usage() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_unknown_flag_exits_one() {
    let t = Test::new();

    let output = t.cmd().arg("--frobnicate").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_unknown_target_exits_one() {
    let t = Test::new();

    let output = t.cmd().args(["--init", "server"]).output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_unknown_docker_action_exits_one() {
    let t = Test::new();

    let output = t.cmd().args(["--dev", "docker", "sideways"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "sideways");
    assert_stdout_contains(&output, "devstack --help");
}

#[test]
fn test_unsupported_engine_exits_one() {
    let t = Test::new();

    let output = t.cmd().args(["--dev", "podman", "up"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "podman");
}

#[test]
fn test_two_actions_exit_one() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--generate-admin-key", "--remove", "client"])
        .output()
        .unwrap();
    assert_failure(&output);
}

#[test]
fn test_completions() {
    let t = Test::new();

    let output = t.cmd().args(["--completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "devstack");
}

#[test]
fn test_invalid_settings_file() {
    let t = Test::new();
    t.write("devstack.toml", "[project]\ndir = \"../outside\"\n");

    let output = t.cmd().args(["--remove", "client"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "project.dir");
}

#[test]
fn test_malformed_settings_file_gets_hint() {
    let t = Test::new();
    t.write("devstack.toml", "[project\n");

    let output = t.cmd().args(["--remove", "client"]).output().unwrap();
    assert_failure(&output);
    assert_stdout_contains(&output, "devstack.toml");
}

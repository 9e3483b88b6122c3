use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn countdowns() -> Command {
    let mut cmd = Command::cargo_bin("countdowns").unwrap();
    cmd.env_remove("COUNTDOWNS_ENDPOINT")
        .env_remove("COUNTDOWNS_DEBUG_LOG");
    cmd
}

#[test]
fn test_help_lists_endpoint_flag() {
    countdowns()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version() {
    countdowns()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("countdowns"));
}

#[test]
fn test_bash_completions() {
    countdowns()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("countdowns"));
}

#[test]
fn test_unknown_shell_is_rejected() {
    countdowns()
        .args(["completions", "nushell-classic"])
        .assert()
        .failure();
}

#[test]
fn test_missing_endpoint_fails_before_starting_tui() {
    let home = tempdir().unwrap();

    countdowns()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("APPDATA", home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No endpoint configured"));
}

#[test]
fn test_blank_endpoint_is_rejected() {
    let home = tempdir().unwrap();

    countdowns()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("APPDATA", home.path())
        .args(["--endpoint", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No endpoint configured"));
}

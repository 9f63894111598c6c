//! CLI surface tests

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("prodcat")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn completions_generate_for_bash() {
    Command::cargo_bin("prodcat")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prodcat"));
}

#[test]
fn config_path_prints_a_path() {
    Command::cargo_bin("prodcat")
        .unwrap()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn serve_rejects_malformed_bind() {
    Command::cargo_bin("prodcat")
        .unwrap()
        .args(["serve", "--bind", "not-an-address"])
        .assert()
        .failure();
}

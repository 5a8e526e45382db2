//! Integration tests for the `hello` binary.

mod common;

use predicates::prelude::*;

use common::hello_cmd;

#[test]
fn test_usage() {
    for flag in ["-h", "--help"] {
        hello_cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Usage:"))
            .stdout(predicate::str::contains("--name"));
    }
}

#[test]
fn test_default() {
    hello_cmd()
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[test]
fn test_input() {
    for val in ["Universe", "Multiverse"] {
        for option in ["-n", "--name"] {
            hello_cmd()
                .args([option, val])
                .assert()
                .success()
                .stdout(format!("Hello, {}!\n", val));
        }
    }
}

#[test]
fn test_color_always_keeps_greeting_text() {
    hello_cmd()
        .args(["--color", "always", "-n", "Universe"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hello, "))
        .stdout(predicate::str::contains("Universe"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    hello_cmd()
        .arg("--verbose")
        .assert()
        .success()
        .stdout("Hello, World!\n")
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("Greeting"));
}

#[test]
fn test_verbose_from_env() {
    hello_cmd()
        .env("WORDKIT_VERBOSE", "true")
        .assert()
        .success()
        .stdout("Hello, World!\n")
        .stderr(predicate::str::contains("Greeting"));
}

#[test]
fn test_quiet_by_default() {
    hello_cmd()
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_piped_logs_have_no_ansi_codes() {
    for args in [vec!["--verbose"], vec!["--verbose", "--color", "never"]] {
        hello_cmd()
            .args(&args)
            .assert()
            .success()
            .stderr(predicate::str::contains("Greeting"))
            .stderr(predicate::str::contains("\u{1b}[").not());
    }
}

#[test]
fn test_color_always_styles_logs() {
    hello_cmd()
        .args(["--verbose", "--color", "always"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\u{1b}["));
}

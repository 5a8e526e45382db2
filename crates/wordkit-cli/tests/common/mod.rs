//! Shared test utilities for wordkit-cli integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;

/// Get a Command for one of the workspace binaries.
///
/// Color and verbose env vars are cleared so output is plain and stable.
///
/// # Panics
///
/// Panics if the binary cannot be found. This should not happen
/// in a properly configured test environment.
#[allow(deprecated)]
pub fn bin_cmd(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).expect("binary should exist");
    cmd.env_remove("WORDKIT_VERBOSE").env_remove("WORDKIT_COLOR");
    cmd
}

pub fn hello_cmd() -> Command {
    bin_cmd("hello")
}

pub fn finder_cmd() -> Command {
    bin_cmd("finder")
}

/// Path to a file under `tests/fixtures/`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

//! # hello
//!
//! Prints `Hello, <name>!`. Run `hello --help` for usage information.

use std::process::ExitCode;

fn main() -> ExitCode {
    wordkit_cli::hello_cli::run()
}

//! # finder
//!
//! Lists the words of a given length found in text files.
//! Run `finder --help` for usage information.

use std::process::ExitCode;

fn main() -> ExitCode {
    wordkit_cli::finder_cli::run()
}

//! # wordkit CLI
//!
//! Command-line front ends for `wordkit-core`:
//!
//! - `hello` – prints a greeting ([`hello_cli`])
//! - `finder` – lists words of a given length found in text files ([`finder_cli`])
//!
//! Run either binary with `--help` for usage information.

pub mod finder_cli;
pub mod hello_cli;
pub mod logging;
pub mod ui;

/// Version string including git commit hash
pub(crate) const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Help layout shared by both binaries; the synopsis comes first.
pub(crate) const HELP_TEMPLATE: &str = "\
{usage-heading} {usage}

{about-with-newline}
{all-args}{after-help}";

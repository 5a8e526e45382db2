//! CLI definition and dispatch for `finder`.
//!
//! Argument problems (a negative `--len`, a file that cannot be opened) are
//! reported as clap usage errors before anything is printed. An empty result
//! is a plain message on stderr with a failing exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;

use wordkit_core::constants::DEFAULT_WORD_LENGTH;
use wordkit_core::{find_words_in, open_sources, validate_length, WordkitError};

use crate::ui::Style;
use crate::{logging, HELP_TEMPLATE, VERSION};

/// Find words in a file of given length
#[derive(Parser, Debug)]
#[command(name = "finder")]
#[command(version = VERSION, about, long_about = None)]
#[command(help_template = HELP_TEMPLATE)]
pub struct Cli {
    /// Input file(s)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Length of words to find
    #[arg(
        short = 'l',
        long = "len",
        value_name = "int",
        default_value_t = DEFAULT_WORD_LENGTH,
        allow_negative_numbers = true
    )]
    pub len: i64,

    /// Enable verbose output (debug logging)
    #[arg(short, long, env = "WORDKIT_VERBOSE")]
    pub verbose: bool,

    /// Color output mode: always, never, or auto (default: auto)
    #[arg(long, env = "WORDKIT_COLOR", default_value = "auto")]
    pub color: String,
}

/// Parse arguments, scan the files and print the numbered matches.
///
/// # Returns
///
/// `ExitCode::SUCCESS` when at least one word matched, `ExitCode::FAILURE`
/// otherwise. Usage errors exit through clap with code 2.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let style = Style::from_flag(&cli.color);
    logging::init(cli.verbose, style.color_mode());

    match find(&cli) {
        Ok(words) => {
            for (index, word) in words.iter().enumerate() {
                println!("{}", style.numbered(index + 1, word));
            }
            ExitCode::SUCCESS
        }
        Err(e) if e.is_usage() => usage_error(&e),
        Err(e @ WordkitError::NoMatches(_)) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", style.error(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}

/// Open every file, validate the length, then scan.
///
/// An unopenable file is reported ahead of a bad length.
fn find(cli: &Cli) -> Result<Vec<String>, WordkitError> {
    let sources = open_sources(&cli.files)?;
    let length = validate_length(cli.len)?;
    debug!(files = sources.len(), length, "Scanning");

    let words = find_words_in(length, sources)?;
    if words.is_empty() {
        return Err(WordkitError::NoMatches(length));
    }
    Ok(words)
}

fn usage_error(err: &WordkitError) -> ! {
    let kind = match err {
        WordkitError::Open { .. } => ErrorKind::Io,
        _ => ErrorKind::ValueValidation,
    };
    Cli::command().error(kind, err).exit()
}

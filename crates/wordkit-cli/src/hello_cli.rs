//! CLI definition for `hello`.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use wordkit_core::constants::DEFAULT_NAME;
use wordkit_core::greet;

use crate::ui::Style;
use crate::{logging, HELP_TEMPLATE, VERSION};

/// Say hello
#[derive(Parser, Debug)]
#[command(name = "hello")]
#[command(version = VERSION, about, long_about = None)]
#[command(help_template = HELP_TEMPLATE)]
pub struct Cli {
    /// Name to greet
    #[arg(short, long, value_name = "name", default_value = DEFAULT_NAME)]
    pub name: String,

    /// Enable verbose output (debug logging)
    #[arg(short, long, env = "WORDKIT_VERBOSE")]
    pub verbose: bool,

    /// Color output mode: always, never, or auto (default: auto)
    #[arg(long, env = "WORDKIT_COLOR", default_value = "auto")]
    pub color: String,
}

/// Parse arguments and print the greeting.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let style = Style::from_flag(&cli.color);
    logging::init(cli.verbose, style.color_mode());

    debug!(name = %cli.name, "Greeting");
    println!("{}", greet(&style.emphasis(&cli.name)));

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_name() {
        let cli = Cli::try_parse_from(["hello"]).unwrap();
        assert_eq!(cli.name, "World");
    }

    #[test]
    fn test_short_and_long_name() {
        let cli = Cli::try_parse_from(["hello", "-n", "Universe"]).unwrap();
        assert_eq!(cli.name, "Universe");
        let cli = Cli::try_parse_from(["hello", "--name", "Multiverse"]).unwrap();
        assert_eq!(cli.name, "Multiverse");
    }
}

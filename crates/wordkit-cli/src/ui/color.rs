//! Color mode detection for CLI output.
//!
//! Respects the `NO_COLOR` environment variable and TTY detection.
//! See https://no-color.org/ for the NO_COLOR standard.

use std::io::IsTerminal;

/// Color output mode for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Always use colors, even when output is not a TTY.
    Always,
    /// Never use colors.
    Never,
    /// Automatically detect based on TTY and NO_COLOR env var.
    #[default]
    Auto,
}

impl ColorMode {
    /// Create ColorMode from a `--color` flag value.
    ///
    /// Accepts: "always", "never", "auto" (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }

    /// Check if colors should be used on stdout.
    pub fn is_enabled(&self) -> bool {
        self.is_enabled_for(std::io::stdout())
    }

    /// Check if colors should be used on stderr (log output).
    pub fn is_enabled_for_stderr(&self) -> bool {
        self.is_enabled_for(std::io::stderr())
    }

    fn is_enabled_for(&self, stream: impl IsTerminal) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => Self::should_auto_colorize(stream),
        }
    }

    /// Rules for auto mode:
    /// 1. If `NO_COLOR` env var is set (any value), disable colors
    /// 2. If the stream is not a TTY, disable colors
    /// 3. Otherwise, enable colors
    fn should_auto_colorize(stream: impl IsTerminal) -> bool {
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }

        stream.is_terminal()
    }
}

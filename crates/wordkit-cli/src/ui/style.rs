//! Output styling for CLI messages and listings.
//!
//! Errors carry an `[err]` prefix (red when colors are enabled). Every
//! helper returns the plain text unchanged when colors are disabled.

use owo_colors::OwoColorize;

use super::color::ColorMode;

/// Prefix for error messages.
const ERR_PREFIX: &str = "[err]";

/// Main styling interface for CLI output.
///
/// # Example
///
/// ```
/// use wordkit_cli::ui::{Style, ColorMode};
///
/// let style = Style::new(ColorMode::Never);
/// println!("{}", style.numbered(1, "fox"));
/// ```
#[derive(Debug, Clone)]
pub struct Style {
    color_mode: ColorMode,
}

impl Style {
    /// Create a Style instance with an explicit color mode.
    pub fn new(color_mode: ColorMode) -> Self {
        Self { color_mode }
    }

    /// Create a Style from a `--color` flag value, falling back to auto
    /// detection for unknown values.
    pub fn from_flag(value: &str) -> Self {
        Self::new(ColorMode::from_str(value).unwrap_or_default())
    }

    /// Get the current color mode.
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(&self) -> bool {
        self.color_mode.is_enabled()
    }

    /// Format an error message with the `[err]` prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use wordkit_cli::ui::{Style, ColorMode};
    ///
    /// let style = Style::new(ColorMode::Never);
    /// assert_eq!(
    ///     style.error("failed to read 'a.txt'"),
    ///     "[err] failed to read 'a.txt'"
    /// );
    /// ```
    pub fn error(&self, text: &str) -> String {
        if self.colors_enabled() {
            format!("{} {}", ERR_PREFIX.red(), text)
        } else {
            format!("{} {}", ERR_PREFIX, text)
        }
    }

    /// Format one entry of a 1-based numbered listing (index dimmed).
    ///
    /// # Example
    ///
    /// ```
    /// use wordkit_cli::ui::{Style, ColorMode};
    ///
    /// let style = Style::new(ColorMode::Never);
    /// assert_eq!(style.numbered(1, "The"), "1: The");
    /// ```
    pub fn numbered(&self, index: usize, text: &str) -> String {
        if self.colors_enabled() {
            format!("{} {}", format!("{}:", index).dimmed(), text)
        } else {
            format!("{}: {}", index, text)
        }
    }

    /// Emphasize a value (bold).
    pub fn emphasis(&self, text: &str) -> String {
        if self.colors_enabled() {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

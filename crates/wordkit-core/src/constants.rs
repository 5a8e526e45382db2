//! Common constants used throughout wordkit.
//!
//! Defaults live here so the CLI layer and the library agree on them.

// ============================================================================
// Greeter
// ============================================================================

/// Name greeted when `--name` is not given.
pub const DEFAULT_NAME: &str = "World";

// ============================================================================
// Finder
// ============================================================================

/// Word length searched for when `--len` is not given.
pub const DEFAULT_WORD_LENGTH: i64 = 3;

/// Pattern matching every character that is stripped from a token.
///
/// Only ASCII letters survive cleaning; digits, punctuation and any
/// non-ASCII character are removed.
pub const NON_LETTER_PATTERN: &str = "[^a-zA-Z]";

//! # wordkit-core
//!
//! Domain logic behind the `hello` and `finder` binaries.
//!
//! ## Main Types
//!
//! - [`WordkitError`] – domain-specific error type
//! - [`Source`] – an opened input file paired with its path
//!
//! ## Modules
//!
//! - [`greeter`] – greeting formatting
//! - [`finder`] – fixed-length word finding over line-oriented readers
//! - [`errors`] – error types
//! - [`constants`] – shared defaults
//!
//! ## Example
//!
//! ```
//! use wordkit_core::find_words;
//!
//! let text = "The quick brown fox jumps over the lazy dog.";
//! let words = find_words(4, [text.as_bytes()]).unwrap();
//! assert_eq!(words, vec!["over", "lazy"]);
//! ```

// Modules
pub mod constants;
pub mod errors;
pub mod finder;
pub mod greeter;

// Re-exports for convenience
pub use errors::WordkitError;
pub use finder::{clean_word, find_words, find_words_in, open_sources, validate_length, Source};
pub use greeter::greet;

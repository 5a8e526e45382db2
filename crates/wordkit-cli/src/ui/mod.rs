//! # CLI UI Module
//!
//! Consistent styling for `hello` and `finder` output.
//!
//! Output must stay byte-for-byte plain when it is piped, so every styling
//! helper degrades to the unstyled text when colors are disabled.
//!
//! ## Module Structure
//!
//! - `color`: Color mode detection and terminal capability checks
//! - `style`: Error prefix, numbered listing and emphasis

pub mod color;
pub mod style;

// Re-export main types for convenient access
pub use color::ColorMode;
pub use style::Style;

//! Fixed-length word finding.
//!
//! Scans line-oriented text and collects every whitespace-delimited token
//! whose cleaned form (ASCII letters only) has an exact length.
//!
//! Processing steps for each token:
//! 1. Split the line on whitespace (Unicode whitespace plus the ASCII
//!    file, group, record and unit separators `\x1c`..=`\x1f`)
//! 2. Strip every character that is not an ASCII letter
//! 3. Keep the cleaned token if its length equals the target
//!
//! Matches keep discovery order: source, then line, then token. Nothing is
//! deduplicated.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::constants::NON_LETTER_PATTERN;
use crate::errors::WordkitError;

static NON_LETTER_RE: OnceLock<Regex> = OnceLock::new();

fn non_letter_re() -> &'static Regex {
    NON_LETTER_RE.get_or_init(|| Regex::new(NON_LETTER_PATTERN).expect("Invalid regex"))
}

// ============================================================================
// Sources
// ============================================================================

/// An opened input file, buffered for line reading.
///
/// The file is closed when the `Source` is dropped.
#[derive(Debug)]
pub struct Source {
    path: PathBuf,
    reader: BufReader<File>,
}

impl Source {
    /// Open `path` for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WordkitError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| WordkitError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Opened {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
        })
    }

    /// The path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for Source {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl BufRead for Source {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.reader.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt)
    }
}

/// Open every path in order.
///
/// Stops at the first path that cannot be opened. Sources opened before the
/// failure are dropped (and therefore closed) with the partial result.
pub fn open_sources<I, P>(paths: I) -> Result<Vec<Source>, WordkitError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().map(Source::open).collect()
}

// ============================================================================
// Validation
// ============================================================================

/// Validate a raw `--len` value.
///
/// Negative values are rejected. Zero is accepted and matches tokens made
/// entirely of non-letters.
pub fn validate_length(raw: i64) -> Result<usize, WordkitError> {
    let length = usize::try_from(raw).map_err(|_| WordkitError::NegativeLength(raw))?;
    debug!(length, "Validated word length");
    Ok(length)
}

// ============================================================================
// Finding
// ============================================================================

/// Strip every character that is not an ASCII letter.
///
/// Case and the relative order of the remaining letters are preserved.
///
/// ```
/// assert_eq!(wordkit_core::clean_word("dog."), "dog");
/// assert_eq!(wordkit_core::clean_word("Nature's"), "Natures");
/// assert_eq!(wordkit_core::clean_word("--"), "");
/// ```
pub fn clean_word(token: &str) -> String {
    non_letter_re().replace_all(token, "").into_owned()
}

/// Find every cleaned token of exactly `length` letters across `sources`.
///
/// Readers are consumed in order. Invalid UTF-8 is decoded lossily, so
/// content never causes a failure; only I/O errors from the readers do.
/// Errors are labelled `<input N>`, counting from 1.
pub fn find_words<I, R>(length: usize, sources: I) -> Result<Vec<String>, WordkitError>
where
    I: IntoIterator<Item = R>,
    R: BufRead,
{
    let mut words = Vec::new();
    for (index, reader) in sources.into_iter().enumerate() {
        let label = format!("<input {}>", index + 1);
        scan(length, reader, &label, &mut words)?;
    }
    Ok(words)
}

/// Like [`find_words`], but labels read errors with each source's path.
pub fn find_words_in(length: usize, sources: Vec<Source>) -> Result<Vec<String>, WordkitError> {
    let mut words = Vec::new();
    for source in sources {
        let label = source.path().display().to_string();
        scan(length, source, &label, &mut words)?;
    }
    Ok(words)
}

/// Token separators: Unicode whitespace and the ASCII information separators.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn scan<R: BufRead>(
    length: usize,
    reader: R,
    label: &str,
    words: &mut Vec<String>,
) -> Result<(), WordkitError> {
    let before = words.len();

    for line in reader.split(b'\n') {
        let line = line.map_err(|source| WordkitError::Read {
            path: label.to_string(),
            source,
        })?;
        let line = String::from_utf8_lossy(&line);

        words.extend(
            line.split(is_separator)
                .filter(|token| !token.is_empty())
                .map(clean_word)
                .filter(|word| word.len() == length),
        );
    }

    debug!(source = label, matches = words.len() - before, "Scanned source");
    Ok(())
}

//! Error types for trieregex.
//!
//! Building a pattern never fails: empty words, duplicates and absent words
//! are all handled as no-ops. The only fallible surface is loading a word
//! list from disk, which reports [`TrieRegexError`].
//!
//! # Examples
//!
//! ```no_run
//! use trieregex::error::{Result, TrieRegexError};
//! use trieregex::TrieRegEx;
//!
//! fn load() -> Result<TrieRegEx> {
//!     TrieRegEx::from_file("words.txt")
//! }
//!
//! match load() {
//!     Ok(tre) => println!("{}", tre.regex()),
//!     Err(TrieRegexError::Io(e)) => eprintln!("cannot read word list: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The error type for trieregex operations.
#[derive(Error, Debug)]
pub enum TrieRegexError {
    /// The word list could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for trieregex operations.
pub type Result<T> = std::result::Result<T, TrieRegexError>;

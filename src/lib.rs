//! # trieregex
//!
//! Build a compact regular expression that matches exactly a set of words.
//!
//! Words are kept in a [trie](https://en.wikipedia.org/wiki/Trie), and the
//! pattern is produced by compressing the trie: shared prefixes are written
//! once, sibling single characters become a character class, and a word that
//! is a prefix of another makes the rest of the path optional. The result is
//! usually far shorter than joining every word with `|`.
//!
//! ## Features
//!
//! - **Incremental**: add and remove words at any time
//! - **Exact**: the pattern matches the words in the set and nothing else
//! - **Boundary-less**: no anchors are added, so the fragment can be embedded
//!   in a larger pattern
//! - **Cached**: the pattern is computed on first request and reused until
//!   the next mutation
//!
//! ## Quick Start
//!
//! ```
//! use trieregex::TrieRegEx;
//!
//! let mut tre = TrieRegEx::new(["bake", "baked", "baker", "cake", "lake"]);
//! assert_eq!(tre.regex(), "(?:bake[dr]?|cake|lake)");
//!
//! tre.remove(["baked", "baker"]);
//! assert_eq!(tre.regex(), "(?:bake|cake|lake)");
//!
//! // Anchor or bound the fragment yourself.
//! let re = regex::Regex::new(&format!(r"\b(?:{})\b", tre.regex())).unwrap();
//! assert!(re.is_match("a lake"));
//! assert!(!re.is_match("a baker"));
//! ```
//!
//! ## Inspecting the word set
//!
//! ```
//! use trieregex::TrieRegEx;
//!
//! let tre = TrieRegEx::new(["dog", "cat", "cow"]);
//! assert!(tre.has("cow"));
//! assert!(!tre.has("co"));
//! assert_eq!(tre.initials(), ['c', 'd']);
//! assert_eq!(tre.finals(), ['g', 't', 'w']);
//! assert_eq!(tre.words(), ["cat", "cow", "dog"]);
//! ```

#![warn(missing_docs)]

/// Error types.
pub mod error;
/// Word trie, pattern synthesis and the `TrieRegEx` facade.
pub mod trie;

pub use error::{Result, TrieRegexError};
pub use trie::{IntoWord, TrieRegEx};

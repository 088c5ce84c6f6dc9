use std::path::Path;

use super::memo::{Cached, Memo};
use super::synth;
use super::word::{read_words, IntoWord, Word};
use super::word_trie::WordTrie;
use crate::error::Result;

/// Builds a regular expression from a trie of words.
///
/// Words can be added and removed at any time. [`regex`](TrieRegEx::regex)
/// returns a boundary-less, escaped pattern that matches exactly the words
/// currently held, computed lazily and cached until the next mutation.
///
/// `TrieRegEx` is `Send` but not `Sync`: share it between threads behind a
/// `Mutex`, which also serializes mutation against pattern synthesis.
///
/// # Examples
///
/// ```
/// use trieregex::TrieRegEx;
///
/// let mut tre = TrieRegEx::new(["abc", "abd"]);
/// assert_eq!(tre.regex(), "ab[cd]");
///
/// tre.add(["a"]);
/// assert!(tre.has("a"));
/// assert_eq!(tre.regex(), "a(?:b[cd])?");
///
/// tre.remove(["abc", "abd"]);
/// assert_eq!(tre.regex(), "a");
/// ```
#[derive(Clone, Default)]
pub struct TrieRegEx {
    trie: WordTrie,
    /// Argument lists of `add` calls made since the last `remove`.
    add_calls: Memo<Vec<Word>, ()>,
    pattern: Cached<String>,
}

impl TrieRegEx {
    /// Creates a `TrieRegEx` holding `words`.
    ///
    /// Same as creating an empty instance and calling [`add`](TrieRegEx::add).
    pub fn new<W: IntoWord>(words: impl IntoIterator<Item = W>) -> Self {
        let mut tre = TrieRegEx::default();
        tre.add(words);
        tre
    }

    /// Creates a `TrieRegEx` from a word list file.
    ///
    /// The file holds one word per line; empty lines and lines starting with
    /// '#' are skipped. Words may be in any order.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use trieregex::TrieRegEx;
    ///
    /// let tre = TrieRegEx::from_file("dictionary.txt").unwrap();
    /// println!("{}", tre.regex());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(TrieRegEx::new(read_words(path)?))
    }

    /// Adds words.
    ///
    /// Empty words and words already present are skipped. Repeating the exact
    /// argument list of an earlier call (with no `remove` in between) is
    /// answered from the call cache without touching the trie.
    ///
    /// The call cache keeps a copy of every distinct argument list until the
    /// next [`remove`](TrieRegEx::remove), so a long run of single-word `add`
    /// calls holds each word twice. Prefer passing words in batches.
    ///
    /// # Examples
    ///
    /// ```
    /// use trieregex::TrieRegEx;
    ///
    /// let mut tre = TrieRegEx::default();
    /// tre.add(["cat", "", "cat"]);
    /// assert_eq!(tre.len(), 1);
    /// assert!(!tre.has(""));
    /// ```
    pub fn add<W: IntoWord>(&mut self, words: impl IntoIterator<Item = W>) {
        let words: Vec<Word> = words.into_iter().map(IntoWord::collect_word).collect();
        if self.add_calls.contains(&words) {
            log::trace!("add of {} words answered from call cache", words.len());
            return;
        }
        self.pattern.invalidate();

        let added = words
            .iter()
            .filter(|word| self.trie.add_word(word))
            .count();
        log::debug!("added {added} of {} words", words.len());
        self.add_calls.insert(words, ());
    }

    /// Removes words.
    ///
    /// Words that are not present are ignored. Nodes no longer needed by any
    /// remaining word are pruned.
    ///
    /// # Examples
    ///
    /// ```
    /// use trieregex::TrieRegEx;
    ///
    /// let mut tre = TrieRegEx::new(["ab", "cd"]);
    /// tre.remove(["ab", "xy"]);
    /// assert!(!tre.has("ab"));
    /// assert!(tre.has("cd"));
    /// assert_eq!(tre.node_count(), 3);
    /// ```
    pub fn remove<W: IntoWord>(&mut self, words: impl IntoIterator<Item = W>) {
        self.add_calls.clear();
        self.pattern.invalidate();

        let mut requested = 0;
        let mut removed = 0;
        for word in words {
            requested += 1;
            if self.trie.remove_word(&word.collect_word()) {
                removed += 1;
            }
        }
        log::debug!("removed {removed} of {requested} words");
    }

    /// Returns `true` if `word` is present. Always `false` for the empty word.
    pub fn has(&self, word: impl IntoWord) -> bool {
        self.trie.contains(&word.collect_word())
    }

    /// Distinct first characters of the present words, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use trieregex::TrieRegEx;
    ///
    /// let tre = TrieRegEx::new(["dog", "cat"]);
    /// assert_eq!(tre.initials(), ['c', 'd']);
    /// assert_eq!(tre.finals(), ['g', 't']);
    /// ```
    pub fn initials(&self) -> Vec<char> {
        self.trie.initials()
    }

    /// Distinct last characters of the present words, in ascending order.
    pub fn finals(&self) -> Vec<char> {
        self.trie.finals()
    }

    /// Returns the pattern matching exactly the present words.
    ///
    /// The pattern has no anchors or word boundaries; wrap it, for example as
    /// `^(?:…)$` or `\b(?:…)\b`, when those semantics are needed. An empty
    /// word set gives the empty pattern.
    pub fn regex(&self) -> &str {
        self.pattern.get_or_init(|| synth::regex(self.trie.root()))
    }

    /// Number of words present.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// True if no words are present.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// All present words, in ascending order.
    pub fn words(&self) -> Vec<String> {
        self.trie.words()
    }

    /// Number of trie nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }
}

impl std::fmt::Debug for TrieRegEx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieRegEx")
            .field("len", &self.len())
            .field("node_count", &self.node_count())
            .field("pattern_cached", &self.pattern.is_cached())
            .finish()
    }
}

impl<W: IntoWord> FromIterator<W> for TrieRegEx {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        TrieRegEx::new(iter)
    }
}

impl<W: IntoWord> Extend<W> for TrieRegEx {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        self.add(iter);
    }
}

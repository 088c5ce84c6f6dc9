//! Compression of a word trie into a regular-expression fragment.
//!
//! The fragment is boundary-less: it carries no anchors and no word-boundary
//! assertions, so it can be spliced into a larger pattern as is. Every literal
//! character goes through [`regex::escape`].

use std::cmp::Reverse;

use super::node::{ChildIter, TrieNode};

/// Returns the regex fragment matching exactly the words stored below `node`.
///
/// Linear paths are emitted as plain literals, sibling branches that are all
/// single characters collapse into a character class, anything else becomes
/// a non-capturing alternation, and a word ending part-way down a path makes
/// the remainder optional.
///
/// The trie is walked with an explicit stack, so word length is not limited
/// by the call stack.
///
/// # Examples
///
/// ```
/// use trieregex::trie::{synth, WordTrie};
///
/// let mut trie = WordTrie::new();
/// trie.add_word(&['a', 'b', 'c']);
/// trie.add_word(&['a', 'b', 'd']);
/// assert_eq!(synth::regex(trie.root()), "ab[cd]");
/// ```
pub fn regex(node: &TrieNode) -> String {
    let mut frame = Fork::new(String::new(), node);
    let mut ancestors = Vec::new();
    loop {
        if let Some((ch, child)) = frame.pending.next() {
            ancestors.push(frame);
            frame = Fork::new(escape(ch), child);
            continue;
        }
        let text = frame.finish();
        match ancestors.pop() {
            Some(parent) => {
                frame = parent;
                frame.branches.push((text.chars().count(), text));
            }
            None => return text,
        }
    }
}

/// The first node at or below a branch start where the path forks or a word
/// ends, with the literal text leading to it.
struct Fork<'t> {
    literal: String,
    node: &'t TrieNode,
    pending: ChildIter<'t>,
    branches: Vec<(usize, String)>,
}

impl<'t> Fork<'t> {
    /// Follows single-child, non-terminal nodes from `node`, appending their
    /// letters to `literal`.
    fn new(mut literal: String, mut node: &'t TrieNode) -> Self {
        while !node.is_terminal() {
            let mut children = node.children();
            let (Some((ch, child)), None) = (children.next(), children.next()) else {
                break;
            };
            literal.push_str(&escape(ch));
            node = child;
        }
        Fork {
            literal,
            node,
            pending: node.children(),
            branches: Vec::with_capacity(node.child_count()),
        }
    }

    /// The literal followed by the fragment for the fork's branches.
    fn finish(mut self) -> String {
        if self.branches.is_empty() {
            // An empty trie, or a word ending with nothing after it.
            return self.literal;
        }
        self.branches
            .sort_by(|(len_a, a), (len_b, b)| (Reverse(len_a), a).cmp(&(Reverse(len_b), b)));

        let mut result = self.literal;
        result.push_str(&alternation(&self.branches));
        if self.node.is_terminal() {
            result.push('?');
        }
        result
    }
}

/// Joins sorted branches into a single atom that can take a quantifier.
fn alternation(branches: &[(usize, String)]) -> String {
    match branches {
        [] => String::new(),
        [(len, text)] if *len > 1 => format!("(?:{text})"),
        [(_, text)] => text.clone(),
        _ if branches.iter().all(|&(len, _)| len == 1) => {
            let mut class = String::from("[");
            class.extend(branches.iter().map(|(_, text)| text.as_str()));
            class.push(']');
            class
        }
        _ => {
            let texts: Vec<&str> = branches.iter().map(|(_, text)| text.as_str()).collect();
            format!("(?:{})", texts.join("|"))
        }
    }
}

/// The regex-safe literal text for one character.
pub fn escape(ch: char) -> String {
    regex::escape(ch.encode_utf8(&mut [0; 4]))
}

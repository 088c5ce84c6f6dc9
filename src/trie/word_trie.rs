use hashbrown::HashMap;

use super::node::TrieNode;

/// A prefix tree holding a set of words, plus counts of the characters the
/// words begin and end with.
///
/// # Examples
///
/// ```
/// use trieregex::trie::WordTrie;
///
/// let mut trie = WordTrie::new();
/// assert!(trie.add_word(&['c', 'a', 't']));
/// assert!(!trie.add_word(&['c', 'a', 't'])); // already present
/// assert!(trie.contains(&['c', 'a', 't']));
///
/// assert!(trie.remove_word(&['c', 'a', 't']));
/// assert!(!trie.contains(&['c', 'a', 't']));
/// assert_eq!(trie.node_count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordTrie {
    root: TrieNode,
    initials: HashMap<char, usize>,
    finals: HashMap<char, usize>,
    len: usize,
}

impl WordTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        WordTrie::default()
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Adds a word to the trie.
    ///
    /// Returns `true` if the word was added, `false` if it was empty or
    /// already present.
    pub fn add_word(&mut self, word: &[char]) -> bool {
        let (Some(&first), Some(&last)) = (word.first(), word.last()) else {
            return false;
        };
        if self.contains(word) {
            return false;
        }

        *self.initials.entry(first).or_insert(0) += 1;
        *self.finals.entry(last).or_insert(0) += 1;

        let node = word
            .iter()
            .fold(&mut self.root, |node, &ch| node.child_or_insert(ch));
        node.set_terminal(true);
        self.len += 1;
        true
    }

    /// Removes a word from the trie.
    ///
    /// Returns `true` if the word was removed, `false` if it was not present.
    /// Nodes left with neither children nor a word ending at them are pruned
    /// bottom-up; ancestors still used by other words stay.
    pub fn remove_word(&mut self, word: &[char]) -> bool {
        if !self.contains(word) {
            return false;
        }
        // contains() never holds for the empty word.
        let (Some(&first), Some(&last)) = (word.first(), word.last()) else {
            return false;
        };

        decrement(&mut self.initials, first);
        decrement(&mut self.finals, last);
        prune(&mut self.root, word);
        self.len -= 1;
        true
    }

    /// Returns `true` if the given word is in the trie.
    ///
    /// The empty word is never in the trie.
    pub fn contains(&self, word: &[char]) -> bool {
        !word.is_empty() && self.root.has_suffix(word.iter().copied())
    }

    /// Distinct characters that at least one present word begins with, in
    /// ascending order.
    pub fn initials(&self) -> Vec<char> {
        present_keys(&self.initials)
    }

    /// Distinct characters that at least one present word ends with, in
    /// ascending order.
    pub fn finals(&self) -> Vec<char> {
        present_keys(&self.finals)
    }

    /// Number of words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// All words in the trie, in ascending order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        let mut prefix = String::new();
        // (prefix length in bytes above the node, letter, node), popped in
        // ascending letter order.
        let mut pending: Vec<(usize, char, &TrieNode)> = self
            .root
            .children()
            .rev()
            .map(|(ch, child)| (0, ch, child))
            .collect();
        while let Some((at, ch, node)) = pending.pop() {
            prefix.truncate(at);
            prefix.push(ch);
            if node.is_terminal() {
                words.push(prefix.clone());
            }
            let at = prefix.len();
            pending.extend(node.children().rev().map(|(ch, child)| (at, ch, child)));
        }
        words
    }
}

impl PartialEq for WordTrie {
    /// Two tries are equal if they hold the same words; zeroed counters left
    /// behind by removals are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
            && self.initials() == other.initials()
            && self.finals() == other.finals()
    }
}

impl Eq for WordTrie {}

/// Clears the end-of-word mark at the end of `word` and detaches the run of
/// nodes above it that no other word uses. `word` must be present below `root`.
fn prune(root: &mut TrieNode, word: &[char]) {
    // Depth of the deepest node on the path that outlives the removal.
    let mut keep = 0;
    let mut node = &*root;
    for (depth, &ch) in word.iter().enumerate() {
        if node.is_terminal() || node.child_count() > 1 {
            keep = depth;
        }
        let Some(child) = node.get(ch) else {
            return;
        };
        node = child;
    }

    if node.child_count() > 0 {
        // Another word continues past this one; only the mark goes.
        if let Some(end) = root.descend_mut(word.iter().copied()) {
            end.set_terminal(false);
        }
        return;
    }
    let Some(&letter) = word.get(keep) else {
        return;
    };
    if let Some(anchor) = root.descend_mut(word[..keep].iter().copied()) {
        anchor.remove_child(letter);
    }
}

fn decrement(counts: &mut HashMap<char, usize>, ch: char) {
    if let Some(count) = counts.get_mut(&ch) {
        *count = count.saturating_sub(1);
    }
}

fn present_keys(counts: &HashMap<char, usize>) -> Vec<char> {
    let mut keys: Vec<char> = counts
        .iter()
        .filter(|&(_, &count)| count > 0)
        .map(|(&ch, _)| ch)
        .collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod test {
    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    fn trie_of(words: &[&str]) -> WordTrie {
        let mut trie = WordTrie::new();
        for word in words {
            trie.add_word(&chars(word));
        }
        trie
    }

    fn has(trie: &WordTrie, word: &str) -> bool {
        trie.contains(&chars(word))
    }

    #[test]
    fn contains_basic() {
        let trie = trie_of(&["BAKE", "CAKE", "FAKE"]);
        assert!(has(&trie, "BAKE"));
        assert!(has(&trie, "CAKE"));
        assert!(!has(&trie, "MAKE"));
        assert!(!has(&trie, "BAK"));
        assert!(!has(&trie, "BAKED"));
    }

    #[test]
    fn empty_word_is_never_present() {
        let mut trie = WordTrie::new();
        assert!(!trie.add_word(&[]));
        assert!(!trie.contains(&[]));
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.initials().is_empty());
    }

    #[test]
    fn add_word_returns_false_for_duplicate() {
        let mut trie = trie_of(&["BAKE", "CAKE"]);
        assert!(!trie.add_word(&chars("BAKE")));
        assert!(!trie.add_word(&chars("CAKE")));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn duplicate_add_does_not_double_count() {
        let mut trie = trie_of(&["BAKE"]);
        trie.add_word(&chars("BAKE"));
        trie.remove_word(&chars("BAKE"));
        assert!(trie.initials().is_empty());
        assert!(trie.finals().is_empty());
    }

    #[test]
    fn add_prefix_of_existing() {
        let mut trie = trie_of(&["CART"]);
        assert!(trie.add_word(&chars("CAR")));
        assert!(has(&trie, "CAR"));
        assert!(has(&trie, "CART"));
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn add_extension_of_existing() {
        let mut trie = trie_of(&["CAR"]);
        assert!(trie.add_word(&chars("CART")));
        assert!(has(&trie, "CAR"));
        assert!(has(&trie, "CART"));
    }

    #[test]
    fn initials_and_finals_are_sorted_and_distinct() {
        let trie = trie_of(&["dog", "cat", "cow", "bat"]);
        assert_eq!(trie.initials(), ['b', 'c', 'd']);
        assert_eq!(trie.finals(), ['g', 't', 'w']);
    }

    #[test]
    fn zero_counts_are_filtered() {
        let mut trie = trie_of(&["dog", "cat"]);
        trie.remove_word(&chars("dog"));
        assert_eq!(trie.initials(), ['c']);
        assert_eq!(trie.finals(), ['t']);
        // The zeroed entry is kept, only hidden.
        assert_eq!(trie.initials.get(&'d'), Some(&0));
    }

    #[test]
    fn remove_word_basic() {
        let mut trie = trie_of(&["BAKE", "CAKE", "FAKE"]);
        assert!(trie.remove_word(&chars("BAKE")));
        assert!(!has(&trie, "BAKE"));
        assert!(has(&trie, "CAKE"));
        assert!(has(&trie, "FAKE"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn remove_word_returns_false_for_missing() {
        let mut trie = trie_of(&["BAKE", "CAKE"]);
        let before = trie.clone();
        assert!(!trie.remove_word(&chars("FAKE")));
        assert!(!trie.remove_word(&chars("BAK")));
        assert!(!trie.remove_word(&chars("BAKED")));
        assert!(!trie.remove_word(&[]));
        assert_eq!(trie.root(), before.root());
        assert_eq!(trie.initials(), before.initials());
        assert_eq!(trie.finals(), before.finals());
    }

    #[test]
    fn remove_word_returns_false_for_already_removed() {
        let mut trie = trie_of(&["BAKE", "CAKE"]);
        assert!(trie.remove_word(&chars("BAKE")));
        assert!(!trie.remove_word(&chars("BAKE")));
    }

    #[test]
    fn remove_last_word() {
        let mut trie = trie_of(&["HELLO"]);
        assert!(trie.remove_word(&chars("HELLO")));
        assert!(!has(&trie, "HELLO"));
        assert!(!trie.root().is_terminal());
        assert_eq!(trie.root().child_count(), 0);
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn remove_prefix_keeps_extension() {
        let mut trie = trie_of(&["CAR", "CART"]);
        let nodes = trie.node_count();
        assert!(trie.remove_word(&chars("CAR")));
        assert!(!has(&trie, "CAR"));
        assert!(has(&trie, "CART"));
        // Only the end-of-word mark went away.
        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn remove_extension_keeps_prefix() {
        let mut trie = trie_of(&["CAR", "CART"]);
        assert!(trie.remove_word(&chars("CART")));
        assert!(has(&trie, "CAR"));
        assert!(!has(&trie, "CART"));
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn remove_prunes_only_dead_suffix() {
        let mut trie = trie_of(&["ABCDEF", "ABXY"]);
        assert_eq!(trie.node_count(), 9);
        trie.remove_word(&chars("ABCDEF"));
        assert_eq!(trie, trie_of(&["ABXY"]));
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn disjoint_words_prune_completely() {
        let mut trie = trie_of(&["ab", "cd"]);
        trie.remove_word(&chars("ab"));
        assert!(has(&trie, "cd"));
        assert!(trie.root().get('a').is_none());
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn interleaved_add_remove() {
        let mut trie = trie_of(&["BAKE", "CAKE"]);
        trie.add_word(&chars("FAKE"));
        trie.remove_word(&chars("BAKE"));
        trie.add_word(&chars("LAKE"));
        trie.add_word(&chars("MAKE"));
        trie.remove_word(&chars("CAKE"));

        assert_eq!(trie.words(), ["FAKE", "LAKE", "MAKE"]);
        assert_eq!(trie.initials(), ['F', 'L', 'M']);
        assert_eq!(trie.finals(), ['E']);
    }

    #[test]
    fn add_then_remove_returns_to_empty() {
        let mut trie = trie_of(&["HELLO", "WORLD"]);
        trie.remove_word(&chars("HELLO"));
        trie.remove_word(&chars("WORLD"));
        assert!(trie.is_empty());
        assert_eq!(trie.root(), &TrieNode::new());
    }

    #[test]
    fn remove_long_word_keeps_shared_prefix() {
        let long = chars(&"z".repeat(100_000));
        let mut trie = trie_of(&["zz", "zzy"]);
        assert!(trie.add_word(&long));
        assert_eq!(trie.node_count(), 100_002);

        assert!(trie.remove_word(&long));
        assert_eq!(trie, trie_of(&["zz", "zzy"]));
        assert_eq!(trie.words(), ["zz", "zzy"]);
    }

    #[test]
    fn remove_prunes_below_deepest_fork() {
        let mut trie = trie_of(&["ab", "abcdef", "abx"]);
        trie.remove_word(&chars("abcdef"));
        assert_eq!(trie, trie_of(&["ab", "abx"]));

        let mut trie = trie_of(&["ab", "abcdef"]);
        trie.remove_word(&chars("abcdef"));
        assert_eq!(trie, trie_of(&["ab"]));
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn words_are_listed_in_order() {
        let trie = trie_of(&["b", "ab", "a", "abc", "授人"]);
        assert_eq!(trie.words(), ["a", "ab", "abc", "b", "授人"]);
    }
}

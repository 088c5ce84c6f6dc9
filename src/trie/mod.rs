/// Call-result caches with explicit invalidation.
pub mod memo;
/// Trie node and children types.
pub mod node;
/// Compression of a trie into a regex fragment.
pub mod synth;
/// The `TrieRegEx` facade tying the trie to its cached pattern.
pub mod trie_regex;
/// Word input types and word-list loading.
pub mod word;
/// The word set: prefix tree plus first/last character counts.
pub mod word_trie;

pub use node::TrieNode;
pub use trie_regex::TrieRegEx;
pub use word::IntoWord;
pub use word_trie::WordTrie;

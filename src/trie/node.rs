use std::fmt;
use std::mem;
use std::slice;

/// The children of a [`TrieNode`], kept sorted by letter.
///
/// An empty table does not allocate, so leaf nodes (the majority in any
/// word trie) cost only the size of an empty `Vec`.
#[derive(Default)]
pub struct Children {
    entries: Vec<(char, TrieNode)>,
}

impl Children {
    #[inline]
    fn position(&self, letter: char) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&letter, |&(c, _)| c)
    }

    fn find(&self, letter: char) -> Option<&TrieNode> {
        self.position(letter).ok().map(|i| &self.entries[i].1)
    }

    fn find_mut(&mut self, letter: char) -> Option<&mut TrieNode> {
        self.position(letter).ok().map(|i| &mut self.entries[i].1)
    }

    /// Returns the child under `letter`, inserting an empty node in sorted
    /// position first if there is none.
    fn find_or_insert(&mut self, letter: char) -> &mut TrieNode {
        let index = match self.position(letter) {
            Ok(index) => index,
            Err(index) => {
                self.entries.insert(index, (letter, TrieNode::new()));
                index
            }
        };
        &mut self.entries[index].1
    }

    /// Removes the edge labeled `letter` together with its subtree.
    fn remove(&mut self, letter: char) -> Option<TrieNode> {
        let index = self.position(letter).ok()?;
        let (_, node) = self.entries.remove(index);
        if self.entries.is_empty() {
            // Give the allocation back once a node turns into a leaf again.
            self.entries = Vec::new();
        }
        Some(node)
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// An iterator over the children of a [`TrieNode`], in ascending letter order.
#[derive(Clone)]
pub struct ChildIter<'t> {
    inner: slice::Iter<'t, (char, TrieNode)>,
}

impl<'t> Iterator for ChildIter<'t> {
    type Item = (char, &'t TrieNode);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(c, n)| (*c, n))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for ChildIter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(c, n)| (*c, n))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}

/// A node in the word trie.
///
/// Every node owns its subtree outright; there are no parent links. The
/// terminal flag plays the role of the reserved end-of-word marker: it can
/// never be confused with a real character edge.
///
/// A trie is as deep as its longest word, so nothing here walks it with
/// recursion: dropping, cloning and comparing nodes all keep their work list
/// on the heap.
#[derive(Default)]
pub struct TrieNode {
    children: Children,
    terminal: bool,
}

impl TrieNode {
    /// Creates an empty, non-terminal node.
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: char) -> Option<&TrieNode> {
        self.children.find(letter)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, letter: char) -> Option<&mut TrieNode> {
        self.children.find_mut(letter)
    }

    /// Returns the child under `letter`, creating it if needed.
    pub(crate) fn child_or_insert(&mut self, letter: char) -> &mut TrieNode {
        self.children.find_or_insert(letter)
    }

    /// Detaches the child under `letter`.
    pub(crate) fn remove_child(&mut self, letter: char) -> Option<TrieNode> {
        self.children.remove(letter)
    }

    /// True if a word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    /// Follows `path` from this node, returning the node it lands on.
    pub fn descend<I: IntoIterator<Item = char>>(&self, path: I) -> Option<&TrieNode> {
        path.into_iter().try_fold(self, |node, ch| node.get(ch))
    }

    pub(crate) fn descend_mut<I: IntoIterator<Item = char>>(
        &mut self,
        path: I,
    ) -> Option<&mut TrieNode> {
        path.into_iter().try_fold(self, |node, ch| node.get_mut(ch))
    }

    /// Returns true if this node has the given suffix as the path to a word.
    #[inline]
    pub fn has_suffix<I: IntoIterator<Item = char>>(&self, suffix: I) -> bool {
        self.descend(suffix).is_some_and(TrieNode::is_terminal)
    }

    /// Returns an iterator over all children of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        ChildIter {
            inner: self.children.entries.iter(),
        }
    }

    /// Returns the number of real-character children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Number of entries in this node: its children plus the end-of-word
    /// marker, if set.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.child_count() + usize::from(self.terminal)
    }

    /// A node with no children that ends no word is dead and gets pruned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Number of nodes in this subtree, counting this one.
    pub fn subtree_size(&self) -> usize {
        let mut pending = vec![self];
        let mut size = 0;
        while let Some(node) = pending.pop() {
            size += 1;
            pending.extend(node.children().map(|(_, child)| child));
        }
        size
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach grandchildren before each child goes, so every node is
        // already a leaf when its own drop runs.
        let mut doomed = mem::take(&mut self.children.entries);
        while let Some((_, mut node)) = doomed.pop() {
            doomed.append(&mut node.children.entries);
        }
    }
}

/// A node being copied, waiting for copies of its remaining children.
struct CopyFrame<'t> {
    letter: char,
    terminal: bool,
    pending: ChildIter<'t>,
    entries: Vec<(char, TrieNode)>,
}

impl<'t> CopyFrame<'t> {
    fn new(letter: char, source: &'t TrieNode) -> Self {
        CopyFrame {
            letter,
            terminal: source.terminal,
            pending: source.children(),
            entries: Vec::with_capacity(source.child_count()),
        }
    }

    fn finish(self) -> (char, TrieNode) {
        let node = TrieNode {
            children: Children {
                entries: self.entries,
            },
            terminal: self.terminal,
        };
        (self.letter, node)
    }
}

impl Clone for TrieNode {
    fn clone(&self) -> Self {
        let mut frame = CopyFrame::new('\0', self);
        let mut ancestors = Vec::new();
        loop {
            if let Some((letter, child)) = frame.pending.next() {
                ancestors.push(frame);
                frame = CopyFrame::new(letter, child);
                continue;
            }
            let (letter, copy) = frame.finish();
            match ancestors.pop() {
                Some(parent) => {
                    frame = parent;
                    frame.entries.push((letter, copy));
                }
                None => return copy,
            }
        }
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.terminal != b.terminal || a.child_count() != b.child_count() {
                return false;
            }
            for ((letter_a, child_a), (letter_b, child_b)) in a.children().zip(b.children()) {
                if letter_a != letter_b {
                    return false;
                }
                pending.push((child_a, child_b));
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.children().map(|(c, _)| c).collect();
        f.debug_struct("TrieNode")
            .field("terminal", &self.terminal)
            .field("children", &letters)
            .field("subtree_size", &self.subtree_size())
            .finish()
    }
}

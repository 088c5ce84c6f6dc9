//! Call-result caches with explicit invalidation.
//!
//! Nothing here tracks dependencies: owners call [`Memo::clear`] or
//! [`Cached::invalidate`] themselves whenever the state a cached value was
//! derived from changes.

use std::cell::OnceCell;
use std::hash::Hash;

use hashbrown::HashMap;

/// A cache of call results keyed by the call's arguments.
#[derive(Clone, Debug)]
pub struct Memo<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Hash + Eq, V> Memo<K, V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Memo {
            entries: HashMap::new(),
        }
    }

    /// Returns true if a result is recorded for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Records the result of a call, replacing any earlier one.
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Forgets every recorded result.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            log::trace!("clearing {} memoized calls", self.entries.len());
        }
        self.entries.clear();
    }

    /// True if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Hash + Eq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Memo::new()
    }
}

/// A single memoized value computed on first read.
///
/// Reads only need `&self`; invalidation needs `&mut self`, so a value can
/// never go stale underneath an outstanding borrow.
#[derive(Clone, Debug)]
pub struct Cached<V> {
    slot: OnceCell<V>,
}

impl<V> Cached<V> {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Cached {
            slot: OnceCell::new(),
        }
    }

    /// Returns the cached value, computing it with `f` if the slot is empty.
    pub fn get_or_init<F: FnOnce() -> V>(&self, f: F) -> &V {
        if self.slot.get().is_some() {
            log::trace!("cache hit");
        }
        self.slot.get_or_init(|| {
            log::trace!("cache miss, recomputing");
            f()
        })
    }

    /// Empties the slot so the next read recomputes.
    pub fn invalidate(&mut self) {
        self.slot.take();
    }

    /// True if a value is currently cached.
    pub fn is_cached(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<V> Default for Cached<V> {
    fn default() -> Self {
        Cached::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn memo_records_calls_by_key() {
        let mut memo = Memo::new();
        assert!(memo.is_empty());
        memo.insert(vec!['a', 'b'], ());
        assert!(memo.contains(&vec!['a', 'b']));
        assert!(!memo.contains(&vec!['b', 'a']));
        assert!(!memo.is_empty());
    }

    #[test]
    fn memo_clear_forgets_calls() {
        let mut memo = Memo::new();
        memo.insert(vec!['a'], ());
        assert!(memo.contains(&vec!['a']));

        memo.clear();
        assert!(memo.is_empty());
        assert!(!memo.contains(&vec!['a']));
    }

    #[test]
    fn cached_computes_once() {
        let cached = Cached::new();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            String::from("ab[cd]")
        };

        assert!(!cached.is_cached());
        assert_eq!(cached.get_or_init(compute), "ab[cd]");
        assert_eq!(cached.get_or_init(compute), "ab[cd]");
        assert_eq!(calls.get(), 1);
        assert!(cached.is_cached());
    }

    #[test]
    fn cached_invalidate_forces_recompute() {
        let mut cached = Cached::new();
        assert_eq!(cached.get_or_init(|| 1), &1);
        cached.invalidate();
        assert!(!cached.is_cached());
        assert_eq!(cached.get_or_init(|| 2), &2);
    }
}

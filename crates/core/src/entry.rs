//! Scope building blocks: entries and the per-scope mutation map.

use std::collections::hash_map;
use std::collections::HashMap;

/// A single pending mutation for one key within one scope.
///
/// A scope must be able to record "this key is deleted here" distinctly
/// from "this scope says nothing about this key": an inner deletion has
/// to shadow a value held by an enclosing scope. `Tombstone` is that
/// marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A live value for the key.
    Value(String),
    /// The key is deleted as far as this scope is concerned.
    Tombstone,
}

impl Entry {
    /// The value, if this entry is live.
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Entry::Value(v) => Some(v),
            Entry::Tombstone => None,
        }
    }

    /// Whether this entry records a deletion.
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Entry::Tombstone)
    }
}

/// One transaction's pending mutations, or — at the bottom of the stack —
/// the committed base state.
///
/// Keys are unique within a scope; a later write to the same key replaces
/// the earlier entry (last write wins within the scope). Insertion order
/// carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    entries: HashMap<String, Entry>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up this scope's entry for `key`, if it has one.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Record an entry for `key`, replacing any earlier one.
    pub fn insert(&mut self, key: String, entry: Entry) {
        self.entries.insert(key, entry);
    }

    /// Drop this scope's entry for `key`, if present.
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        self.entries.remove(key)
    }

    /// Number of entries in this scope.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this scope holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over this scope's entries.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }

    /// Consume the scope, yielding its entries (used by commit merges).
    pub fn into_entries(self) -> hash_map::IntoIter<String, Entry> {
        self.entries.into_iter()
    }
}

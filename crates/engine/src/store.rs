//! The transactional store: a stack of mutation scopes.

use std::collections::HashMap;

use tracing::{debug, trace};

use lamina_core::{Entry, Error, Result, Scope};

/// In-memory key-value store with nested, savepoint-style transactions.
///
/// The store owns an ordered stack of [`Scope`]s. Index 0 is the base
/// (non-transactional) state and is always present; every `begin` pushes
/// an empty scope on top. Writes only ever touch the innermost scope.
///
/// # Resolution order
///
/// A point read scans the stack innermost to outermost and stops at the
/// first scope holding an entry for the key: a value answers the read, a
/// tombstone answers "absent". Scopes further down are never consulted
/// once a decision is reached, so an inner write or deletion shadows
/// everything beneath it until the scope is rolled back or committed.
///
/// # Cost model
///
/// - `get` is O(depth) per key.
/// - `counts`/`find` are O(total entries) — they fold the whole stack
///   once into an effective state, then filter.
/// - `commit`/`rollback` are O(size of the closed scope), never O(total
///   state): the merge walks only the entries the transaction wrote.
#[derive(Debug)]
pub struct TransactionalStore {
    scopes: Vec<Scope>,
}

impl TransactionalStore {
    /// Create a store with an empty base scope and no open transaction.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new()],
        }
    }

    /// Number of open nested transactions.
    ///
    /// The base scope does not count: a freshly created store has
    /// depth 0, and `rollback`/`commit` report an error there instead of
    /// touching the base.
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    /// Write `value` for `key` into the innermost scope.
    ///
    /// Lower scopes are untouched until the enclosing transaction
    /// commits.
    pub fn set(&mut self, key: &str, value: &str) {
        trace!(key, value, "set");
        self.top_mut()
            .insert(key.to_string(), Entry::Value(value.to_string()));
    }

    /// Resolve the effective value of `key`.
    ///
    /// Returns `None` when the key is absent everywhere or tombstoned in
    /// the innermost scope that mentions it.
    pub fn get(&self, key: &str) -> Option<&str> {
        for scope in self.scopes.iter().rev() {
            if let Some(entry) = scope.get(key) {
                return entry.as_value();
            }
        }
        None
    }

    /// Record a deletion of `key` in the innermost scope.
    ///
    /// Always succeeds, even if the key was never set: the tombstone
    /// still shadows any value an enclosing scope holds.
    pub fn unset(&mut self, key: &str) {
        trace!(key, "unset");
        self.top_mut().insert(key.to_string(), Entry::Tombstone);
    }

    /// Count keys whose effective value equals `value`.
    ///
    /// A key appearing in several scopes is counted at most once, per its
    /// effective value.
    pub fn counts(&self, value: &str) -> usize {
        self.effective_state()
            .values()
            .filter(|&&v| v == value)
            .count()
    }

    /// All keys whose effective value equals `value`, sorted ascending.
    ///
    /// The result holds no duplicates; an empty result means no key
    /// currently holds the value.
    pub fn find(&self, value: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .effective_state()
            .into_iter()
            .filter(|&(_, v)| v == value)
            .map(|(k, _)| k.to_string())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Open a nested transaction by pushing an empty scope.
    ///
    /// Nesting depth is unbounded.
    pub fn begin(&mut self) {
        self.scopes.push(Scope::new());
        debug!(depth = self.depth(), "transaction begun");
    }

    /// Discard the innermost transaction's pending mutations.
    ///
    /// Fails with [`Error::NoTransaction`] at depth 0; the base scope is
    /// never popped.
    pub fn rollback(&mut self) -> Result<()> {
        if self.depth() == 0 {
            return Err(Error::NoTransaction);
        }
        self.scopes.pop();
        debug!(depth = self.depth(), "transaction rolled back");
        Ok(())
    }

    /// Fold the innermost transaction into its parent scope.
    ///
    /// Each value entry overwrites the parent's entry for that key
    /// (inserting if absent); each tombstone removes the key from the
    /// parent's mapping if present. A tombstone reaching the base scope
    /// simply deletes the key — there is no ancestor left to shadow.
    ///
    /// Fails with [`Error::NoTransaction`] at depth 0.
    pub fn commit(&mut self) -> Result<()> {
        if self.depth() == 0 {
            return Err(Error::NoTransaction);
        }
        let closed = self.scopes.pop().ok_or(Error::NoTransaction)?;
        let parent = self.scopes.last_mut().ok_or(Error::NoTransaction)?;

        let entries = closed.len();
        for (key, entry) in closed.into_entries() {
            match entry {
                Entry::Value(_) => parent.insert(key, entry),
                Entry::Tombstone => {
                    parent.remove(&key);
                }
            }
        }
        debug!(depth = self.depth(), entries, "transaction committed");
        Ok(())
    }

    /// Fold every scope bottom-to-top into one key → value view: values
    /// overwrite, tombstones remove. Only the read-all operations pay
    /// this cost; point reads resolve per key.
    fn effective_state(&self) -> HashMap<&str, &str> {
        let mut state: HashMap<&str, &str> = HashMap::new();
        for scope in &self.scopes {
            for (key, entry) in scope.iter() {
                match entry {
                    Entry::Value(v) => {
                        state.insert(key.as_str(), v.as_str());
                    }
                    Entry::Tombstone => {
                        state.remove(key.as_str());
                    }
                }
            }
        }
        state
    }

    fn top_mut(&mut self) -> &mut Scope {
        self.scopes
            .last_mut()
            .expect("scope stack holds at least the base scope")
    }
}

impl Default for TransactionalStore {
    fn default() -> Self {
        Self::new()
    }
}

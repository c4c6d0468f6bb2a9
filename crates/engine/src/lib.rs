//! Scope-stack transaction engine for Lamina.
//!
//! [`TransactionalStore`] owns a stack of mutation scopes. The bottom
//! scope is the committed base state; each open transaction is one scope
//! above it. Reads resolve innermost-first, deletions are tombstones so
//! they shadow enclosing scopes, and commit folds a scope into its parent
//! in time bounded by that scope's own write set.

mod store;

pub use lamina_core::{Entry, Error, Result, Scope};
pub use store::TransactionalStore;

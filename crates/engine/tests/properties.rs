//! Property tests for the scope-stack algebra.
//!
//! The interesting invariants are relational: FIND stays sorted and
//! duplicate-free under any command sequence, a rolled-back transaction
//! is invisible, and point reads agree with the folded effective state.

use lamina_engine::TransactionalStore;
use proptest::prelude::*;

/// Keys are drawn from a small alphabet so op sequences collide often.
const KEYS: &[&str] = &["a", "b", "c", "d", "e"];
const VALUES: &[&str] = &["10", "20", "30"];

#[derive(Debug, Clone)]
enum Op {
    Set(&'static str, &'static str),
    Unset(&'static str),
    Begin,
    Rollback,
    Commit,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..KEYS.len(), 0..VALUES.len()).prop_map(|(k, v)| Op::Set(KEYS[k], VALUES[v])),
        (0..KEYS.len()).prop_map(|k| Op::Unset(KEYS[k])),
        Just(Op::Begin),
        Just(Op::Rollback),
        Just(Op::Commit),
    ]
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..40)
}

/// Apply an op, ignoring the reported error when closing at depth 0.
fn apply(store: &mut TransactionalStore, op: &Op) {
    match op {
        Op::Set(k, v) => store.set(k, v),
        Op::Unset(k) => store.unset(k),
        Op::Begin => store.begin(),
        Op::Rollback => {
            let _ = store.rollback();
        }
        Op::Commit => {
            let _ = store.commit();
        }
    }
}

/// Snapshot the effective state over the known key alphabet.
fn snapshot(store: &TransactionalStore) -> Vec<(&'static str, Option<String>)> {
    KEYS.iter()
        .map(|&k| (k, store.get(k).map(str::to_string)))
        .collect()
}

proptest! {
    #[test]
    fn find_is_sorted_and_unique(ops in ops_strategy()) {
        let mut store = TransactionalStore::new();
        for op in &ops {
            apply(&mut store, op);
        }

        for &value in VALUES {
            let found = store.find(value);
            let mut sorted = found.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(found, sorted);
        }
    }

    #[test]
    fn get_agrees_with_counts_and_find(ops in ops_strategy()) {
        let mut store = TransactionalStore::new();
        for op in &ops {
            apply(&mut store, op);
        }

        for &value in VALUES {
            let found = store.find(value);
            prop_assert_eq!(found.len(), store.counts(value));
            for &key in KEYS {
                let holds = store.get(key) == Some(value);
                prop_assert_eq!(holds, found.iter().any(|k| k.as_str() == key));
            }
        }
    }

    #[test]
    fn rolled_back_transaction_is_invisible(
        prefix in ops_strategy(),
        inner in ops_strategy(),
    ) {
        let mut store = TransactionalStore::new();
        for op in &prefix {
            apply(&mut store, op);
        }

        let base_depth = store.depth();
        let before = snapshot(&store);

        store.begin();
        for op in &inner {
            // Never close the scope pushed above; everything opened
            // inside it is fair game.
            if matches!(op, Op::Rollback | Op::Commit) && store.depth() == base_depth + 1 {
                continue;
            }
            apply(&mut store, op);
        }
        while store.depth() > base_depth {
            store.rollback().unwrap();
        }

        prop_assert_eq!(snapshot(&store), before);
    }

    #[test]
    fn closing_at_depth_zero_never_mutates(ops in ops_strategy()) {
        let mut store = TransactionalStore::new();
        for op in &ops {
            apply(&mut store, op);
        }
        while store.depth() > 0 {
            store.commit().unwrap();
        }

        let before = snapshot(&store);
        prop_assert!(store.rollback().is_err());
        prop_assert!(store.commit().is_err());
        prop_assert_eq!(store.depth(), 0);
        prop_assert_eq!(snapshot(&store), before);
    }
}

//! Property tests: the red-black invariants hold after every mutation,
//! whatever keys arrive in whatever order.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rbtree_set::RedBlackTree;

#[derive(Debug, Clone)]
enum Op {
    Insert(i64),
    Delete(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // A narrow key range makes duplicates and hits on delete common.
    prop_oneof![
        (-64i64..64).prop_map(Op::Insert),
        (-64i64..64).prop_map(Op::Delete),
    ]
}

fn height_bound(len: usize) -> f64 {
    2.0 * ((len as f64) + 1.0).log2()
}

proptest! {
    /// Every completed insert or delete leaves a valid red-black tree that
    /// agrees with a reference set.
    #[test]
    fn prop_invariants_hold_after_every_operation(
        ops in prop::collection::vec(op_strategy(), 0..300)
    ) {
        let mut tree = RedBlackTree::new();
        let mut reference = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(tree.insert(key).is_ok(), reference.insert(key));
                }
                Op::Delete(key) => {
                    prop_assert_eq!(tree.delete(key).is_ok(), reference.remove(&key));
                }
            }
            prop_assert!(tree.check_invariants().is_ok(), "{:?}", tree.check_invariants());
            prop_assert!((tree.height() as f64) <= height_bound(tree.len()));
        }

        prop_assert_eq!(tree.len(), reference.len());
        prop_assert!(tree.keys().eq(reference.iter().copied()));
    }

    /// Rejected operations leave the shape untouched.
    #[test]
    fn prop_rejections_do_not_mutate(
        keys in prop::collection::btree_set(any::<i64>(), 1..100),
        absent: i64
    ) {
        let mut tree = RedBlackTree::new();
        for &key in &keys {
            tree.insert(key).unwrap();
        }
        let before: Vec<_> = tree.iter().collect();

        let existing = *keys.iter().next().unwrap();
        prop_assert!(tree.insert(existing).is_err());
        if !keys.contains(&absent) {
            prop_assert!(tree.delete(absent).is_err());
        }

        prop_assert_eq!(tree.iter().collect::<Vec<_>>(), before);
    }

    /// Any permutation of the same keys traverses to the same sorted sequence.
    #[test]
    fn prop_order_independence(
        keys in prop::collection::btree_set(-1_000i64..1_000, 0..200)
            .prop_flat_map(|set| {
                let keys: Vec<i64> = set.into_iter().collect();
                Just(keys).prop_shuffle()
            })
    ) {
        let mut tree = RedBlackTree::new();
        for &key in &keys {
            tree.insert(key).unwrap();
        }

        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(tree.keys().collect::<Vec<_>>(), sorted);
    }

    /// Inserting N distinct keys then deleting all of them in another order
    /// returns to the empty tree.
    #[test]
    fn prop_empty_convergence(
        (inserts, deletes) in prop::collection::btree_set(any::<i64>(), 0..150)
            .prop_flat_map(|set| {
                let keys: Vec<i64> = set.into_iter().collect();
                (Just(keys.clone()).prop_shuffle(), Just(keys).prop_shuffle())
            })
    ) {
        let mut tree = RedBlackTree::new();
        for &key in &inserts {
            tree.insert(key).unwrap();
        }
        for &key in &deletes {
            tree.delete(key).unwrap();
            prop_assert!(tree.check_invariants().is_ok());
        }

        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.iter().count(), 0);
    }
}

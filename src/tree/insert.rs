//! Insertion and the insertion repair loop.

use std::cmp::Ordering;

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::tree::error::DuplicateKeyError;
use crate::tree::node::{Color, Key, Node, Side};
use crate::tree::rbtree::RedBlackTree;

impl RedBlackTree {
    /// Inserts `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The key was stored and the tree rebalanced
    /// * `Err(DuplicateKeyError)` - The key was already present; nothing changed
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, key: Key) -> Result<(), DuplicateKeyError> {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;

        while cursor != self.nil {
            let node = &self.arena[cursor];
            parent = Some(cursor);
            (side, cursor) = match key.cmp(&node.key) {
                Ordering::Less => (Side::Left, node.left),
                Ordering::Greater => (Side::Right, node.right),
                Ordering::Equal => {
                    debug!(key, "rejected duplicate key");
                    return Err(DuplicateKeyError { key });
                }
            };
        }

        let created = self.arena.insert(Node::new(key, self.nil, parent));
        match parent {
            None => self.root = created,
            Some(parent) => self.link(parent, side, created),
        }

        self.insert_fixup(created);
        debug!(key, len = self.len(), "inserted key");
        Ok(())
    }

    /// Restores the red-black invariants after `pt` was attached as a red leaf.
    ///
    /// The only possible violation is a red `pt` under a red parent. A red
    /// uncle pushes the violation two levels up; a black uncle is resolved by
    /// at most two rotations.
    fn insert_fixup(&mut self, mut pt: Index) {
        while pt != self.root && self.is_red(pt) {
            let Some(mut parent) = self.parent(pt) else {
                break;
            };
            if self.is_black(parent) {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let (Some(grandparent), Some(parent_side)) = (self.parent(parent), self.side_of(parent))
            else {
                break;
            };

            let uncle = self.child(grandparent, parent_side.opposite());
            if self.is_red(uncle) {
                trace!(key = self.arena[pt].key, "insert fixup: red uncle");
                self.set_color(grandparent, Color::Red);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                pt = grandparent;
                continue;
            }

            if self.child(parent, parent_side.opposite()) == pt {
                trace!(key = self.arena[pt].key, "insert fixup: inner grandchild");
                self.rotate(parent, parent_side);
                // The rotation swapped the parent/child roles of the two nodes.
                std::mem::swap(&mut pt, &mut parent);
            }

            trace!(key = self.arena[pt].key, "insert fixup: outer grandchild");
            self.rotate(grandparent, parent_side.opposite());
            let parent_color = self.color(parent);
            let grandparent_color = self.color(grandparent);
            self.set_color(parent, grandparent_color);
            self.set_color(grandparent, parent_color);
            pt = parent;
        }

        let root = self.root;
        if root != self.nil {
            self.set_color(root, Color::Black);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_of(tree: &RedBlackTree, key: Key) -> Color {
        tree.view(tree.find(key).unwrap()).color
    }

    #[test]
    fn test_first_insert_becomes_black_root() {
        let mut tree = RedBlackTree::new();
        tree.insert(42).unwrap();

        let root = tree.root_view().unwrap();
        assert_eq!(root.key, 42);
        assert_eq!(root.color, Color::Black);
        assert!(root.is_leaf());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_red_uncle_recolors() {
        let mut tree = RedBlackTree::new();
        for key in [20, 10, 30, 5] {
            tree.insert(key).unwrap();
        }

        assert_eq!(tree.root_view().unwrap().key, 20);
        assert_eq!(color_of(&tree, 20), Color::Black);
        assert_eq!(color_of(&tree, 10), Color::Black);
        assert_eq!(color_of(&tree, 30), Color::Black);
        assert_eq!(color_of(&tree, 5), Color::Red);
    }

    #[test]
    fn test_outer_grandchild_single_rotation() {
        let mut tree = RedBlackTree::new();
        for key in [10, 20, 30] {
            tree.insert(key).unwrap();
        }

        let root = tree.root_view().unwrap();
        assert_eq!(root.key, 20);
        assert_eq!(root.color, Color::Black);
        assert_eq!(root.left, Some(10));
        assert_eq!(root.right, Some(30));
        assert_eq!(color_of(&tree, 10), Color::Red);
        assert_eq!(color_of(&tree, 30), Color::Red);
    }

    #[test]
    fn test_inner_grandchild_double_rotation() {
        let mut tree = RedBlackTree::new();
        for key in [30, 10, 20] {
            tree.insert(key).unwrap();
        }

        let root = tree.root_view().unwrap();
        assert_eq!(root.key, 20);
        assert_eq!(root.color, Color::Black);
        assert_eq!(root.left, Some(10));
        assert_eq!(root.right, Some(30));
        assert_eq!(color_of(&tree, 10), Color::Red);
        assert_eq!(color_of(&tree, 30), Color::Red);
    }

    #[test]
    fn test_mirrored_inner_grandchild() {
        let mut tree = RedBlackTree::new();
        for key in [10, 30, 20] {
            tree.insert(key).unwrap();
        }

        let root = tree.root_view().unwrap();
        assert_eq!(root.key, 20);
        assert_eq!(root.left, Some(10));
        assert_eq!(root.right, Some(30));
        assert!(tree.check_invariants().is_ok());
    }

    #[test]
    fn test_duplicate_leaves_tree_untouched() {
        let mut tree = RedBlackTree::new();
        for key in [5, 3, 8] {
            tree.insert(key).unwrap();
        }
        let before: Vec<_> = tree.iter().collect();

        assert_eq!(tree.insert(3), Err(DuplicateKeyError { key: 3 }));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.iter().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_red_uncle_chain_reaches_root() {
        let mut tree = RedBlackTree::new();
        for key in 1..=10 {
            tree.insert(key).unwrap();
            assert!(tree.check_invariants().is_ok(), "after inserting {key}");
        }
        assert_eq!(tree.root_view().unwrap().color, Color::Black);
    }
}

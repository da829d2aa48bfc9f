//! Invariant checking.
//!
//! Verifies the five red-black invariants plus parent-link consistency over
//! the whole tree. Recursion depth is bounded by the tree height.

use generational_arena::Index;

use crate::tree::error::InvariantViolation;
use crate::tree::node::Key;
use crate::tree::rbtree::RedBlackTree;

impl RedBlackTree {
    /// Checks every structural invariant and returns the tree's black-height
    /// (black nodes on any root-to-sentinel path, sentinel excluded).
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        if self.is_red(self.nil) {
            return Err(InvariantViolation::RedSentinel);
        }
        if self.is_empty() {
            return Ok(0);
        }
        if self.is_red(self.root) {
            return Err(InvariantViolation::RedRoot {
                key: self.arena[self.root].key,
            });
        }
        if self.parent(self.root).is_some() {
            return Err(InvariantViolation::BrokenParentLink {
                key: self.arena[self.root].key,
            });
        }
        self.check_subtree(self.root, None, None)
    }

    fn check_subtree(
        &self,
        id: Index,
        low: Option<Key>,
        high: Option<Key>,
    ) -> Result<usize, InvariantViolation> {
        if id == self.nil {
            return Ok(0);
        }

        let node = &self.arena[id];
        let key = node.key;
        if low.is_some_and(|low| key <= low) || high.is_some_and(|high| key >= high) {
            return Err(InvariantViolation::OrderViolation { key, low, high });
        }

        for child in [node.left, node.right] {
            if child == self.nil {
                continue;
            }
            if self.parent(child) != Some(id) {
                return Err(InvariantViolation::BrokenParentLink {
                    key: self.arena[child].key,
                });
            }
            if node.color.is_red() && self.is_red(child) {
                return Err(InvariantViolation::DoubleRed {
                    parent: key,
                    child: self.arena[child].key,
                });
            }
        }

        let left = self.check_subtree(node.left, low, Some(key))?;
        let right = self.check_subtree(node.right, Some(key), high)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { key, left, right });
        }

        Ok(left + usize::from(node.color.is_black()))
    }
}

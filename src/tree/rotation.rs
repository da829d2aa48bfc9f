//! Rotation primitives.
//!
//! A rotation lifts one child of `x` into `x`'s place and hands the child's
//! inner subtree over to `x`. In-order sequence is preserved; colors are not
//! touched, so callers recolor afterwards.

use generational_arena::Index;
use tracing::trace;

use crate::tree::node::Side;
use crate::tree::rbtree::RedBlackTree;

impl RedBlackTree {
    /// Rotates `x` down towards `toward`: the child on the opposite side
    /// rises into `x`'s position. Updates the root link when `x` was the root.
    /// `Side::Left` is a left rotation, `Side::Right` a right rotation.
    ///
    /// The rising child must not be the sentinel.
    pub(crate) fn rotate(&mut self, x: Index, toward: Side) {
        let rising_side = toward.opposite();
        let y = self.child(x, rising_side);
        debug_assert!(y != self.nil, "rotation needs a live child on the rising side");
        trace!(pivot = self.arena[x].key, ?toward, "rotate");

        let inner = self.child(y, toward);
        self.link(x, rising_side, inner);

        let above = self.parent(x);
        self.arena[y].parent = above;
        self.replace_in_parent(above, x, y);

        self.link(y, toward, x);
    }
}

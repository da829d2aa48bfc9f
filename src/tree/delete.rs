//! Deletion, transplant, successor search and the deletion repair loop.

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::tree::error::KeyNotFoundError;
use crate::tree::node::{Color, Key, Side};
use crate::tree::rbtree::RedBlackTree;

impl RedBlackTree {
    /// Removes `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The key was removed and the tree rebalanced
    /// * `Err(KeyNotFoundError)` - The key was absent; nothing changed
    #[instrument(level = "trace", skip(self))]
    pub fn delete(&mut self, key: Key) -> Result<(), KeyNotFoundError> {
        let Some(z) = self.find(key) else {
            debug!(key, "delete of absent key");
            return Err(KeyNotFoundError { key });
        };

        let z_left = self.child(z, Side::Left);
        let z_right = self.child(z, Side::Right);

        // `x` takes the place of the node that physically leaves the tree;
        // `x_parent` is tracked separately because `x` may be the sentinel.
        let (removed_color, x, x_parent) = if z_left == self.nil {
            let parent = self.parent(z);
            self.transplant(z, z_right);
            (self.color(z), z_right, parent)
        } else if z_right == self.nil {
            let parent = self.parent(z);
            self.transplant(z, z_left);
            (self.color(z), z_left, parent)
        } else {
            let successor = self.minimum(z_right);
            let successor_color = self.color(successor);
            let x = self.child(successor, Side::Right);

            let mut x_parent = self.parent(successor);
            if x_parent == Some(z) {
                x_parent = Some(successor);
            } else {
                self.transplant(successor, x);
                self.link(successor, Side::Right, z_right);
            }

            self.transplant(z, successor);
            self.link(successor, Side::Left, z_left);
            self.set_color(successor, self.color(z));
            (successor_color, x, x_parent)
        };

        self.arena.remove(z);

        if removed_color.is_black() {
            self.delete_fixup(x, x_parent);
        }
        debug!(key, len = self.len(), "deleted key");
        Ok(())
    }

    /// Puts the subtree rooted at `v` where the subtree rooted at `u` hangs.
    ///
    /// `u`'s own links are left as they were. `v`'s parent link is updated
    /// unless `v` is the sentinel.
    pub(crate) fn transplant(&mut self, u: Index, v: Index) {
        let above = self.parent(u);
        self.replace_in_parent(above, u, v);
        if v != self.nil {
            self.arena[v].parent = above;
        }
    }

    /// Leftmost node of the subtree rooted at the live node `id`.
    pub(crate) fn minimum(&self, mut id: Index) -> Index {
        while self.child(id, Side::Left) != self.nil {
            id = self.child(id, Side::Left);
        }
        id
    }

    /// Restores the red-black invariants after a black node left the tree.
    ///
    /// `x` sits where the removed node was and carries one extra unit of
    /// black. `parent` is `x`'s parent, or `None` when `x` is the root.
    fn delete_fixup(&mut self, mut x: Index, mut parent: Option<Index>) {
        while x != self.root && self.is_black(x) {
            let Some(p) = parent else {
                break;
            };
            // A black-height deficit means the sibling subtree is never empty,
            // so a sentinel `x` can be placed by comparing against the left slot.
            let side = if self.child(p, Side::Left) == x {
                Side::Left
            } else {
                Side::Right
            };
            let far = side.opposite();
            let mut sibling = self.child(p, far);

            if self.is_red(sibling) {
                trace!(parent = self.arena[p].key, "delete fixup: red sibling");
                self.set_color(sibling, Color::Black);
                self.set_color(p, Color::Red);
                self.rotate(p, side);
                sibling = self.child(p, far);
            }

            let near_child = self.child(sibling, side);
            let far_child = self.child(sibling, far);
            if self.is_black(near_child) && self.is_black(far_child) {
                trace!(parent = self.arena[p].key, "delete fixup: black nephews");
                self.set_color(sibling, Color::Red);
                x = p;
                parent = self.parent(p);
                continue;
            }

            if self.is_black(far_child) {
                trace!(parent = self.arena[p].key, "delete fixup: red near nephew");
                self.set_color(near_child, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                sibling = self.child(p, far);
            }

            trace!(parent = self.arena[p].key, "delete fixup: red far nephew");
            self.set_color(sibling, self.color(p));
            self.set_color(p, Color::Black);
            let far_child = self.child(sibling, far);
            self.set_color(far_child, Color::Black);
            self.rotate(p, side);
            x = self.root;
            parent = None;
        }

        if x != self.nil {
            self.set_color(x, Color::Black);
        }
    }
}

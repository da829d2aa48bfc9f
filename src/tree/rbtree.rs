//! The tree handle.
//!
//! `RedBlackTree` owns the node arena, the sentinel and the root link. The
//! mutating algorithms live in sibling modules (`rotation`, `insert`,
//! `delete`) as further `impl` blocks; this file holds construction, the
//! small link/color accessors they share, and the read-only queries.

use std::cmp::Ordering;

use generational_arena::{Arena, Index};

use crate::tree::node::{Color, Key, Node, NodeView, Side};

/// An ordered set of unique integer keys kept balanced as a red-black tree.
///
/// # Design
///
/// - Nodes live in a generational arena and refer to each other by index
/// - One shared sentinel node stands in for every absent child
/// - Parent links are non-owning indices used only for rebalancing
/// - Height stays within `2 * log2(n + 1)` regardless of insertion order
///
/// The structure is not internally synchronized; wrap it in a lock to share
/// it between threads.
#[derive(Debug, Clone)]
pub struct RedBlackTree {
    pub(crate) arena: Arena<Node>,
    pub(crate) nil: Index,
    pub(crate) root: Index,
}

impl Default for RedBlackTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RedBlackTree {
    /// Creates an empty tree whose root is the sentinel.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let nil = arena.insert_with(Node::sentinel);

        RedBlackTree {
            arena,
            nil,
            root: nil,
        }
    }

    /// Returns `true` when no keys are stored (the root is the sentinel).
    pub fn is_empty(&self) -> bool {
        self.root == self.nil
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        // The sentinel occupies one slot.
        self.arena.len() - 1
    }

    pub fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// Snapshot of the root node, `None` when the tree is empty.
    pub fn root_view(&self) -> Option<NodeView> {
        if self.is_empty() {
            None
        } else {
            Some(self.view(self.root))
        }
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack = Vec::new();
        if !self.is_empty() {
            stack.push((self.root, 1));
        }

        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for side in [Side::Left, Side::Right] {
                let child = self.child(id, side);
                if child != self.nil {
                    stack.push((child, depth + 1));
                }
            }
        }
        deepest
    }

    /// Locates the node holding `key` by ordinary search-tree descent.
    pub(crate) fn find(&self, key: Key) -> Option<Index> {
        let mut cursor = self.root;
        while cursor != self.nil {
            let node = &self.arena[cursor];
            cursor = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(cursor),
            };
        }
        None
    }

    pub(crate) fn view(&self, id: Index) -> NodeView {
        let node = &self.arena[id];
        NodeView {
            key: node.key,
            color: node.color,
            left: self.key_of(node.left),
            right: self.key_of(node.right),
            parent: node.parent.map(|parent| self.arena[parent].key),
        }
    }

    fn key_of(&self, id: Index) -> Option<Key> {
        if id == self.nil {
            None
        } else {
            Some(self.arena[id].key)
        }
    }

    pub(crate) fn color(&self, id: Index) -> Color {
        self.arena[id].color
    }

    pub(crate) fn is_red(&self, id: Index) -> bool {
        self.color(id).is_red()
    }

    pub(crate) fn is_black(&self, id: Index) -> bool {
        self.color(id).is_black()
    }

    /// Recolors a live node. The sentinel is always black and never written.
    pub(crate) fn set_color(&mut self, id: Index, color: Color) {
        debug_assert!(id != self.nil, "attempted to recolor the sentinel");
        self.arena[id].color = color;
    }

    pub(crate) fn parent(&self, id: Index) -> Option<Index> {
        self.arena[id].parent
    }

    pub(crate) fn child(&self, id: Index, side: Side) -> Index {
        self.arena[id].child(side)
    }

    /// Which side of its parent `id` hangs from. `None` for the root.
    pub(crate) fn side_of(&self, id: Index) -> Option<Side> {
        let parent = self.parent(id)?;
        if self.arena[parent].left == id {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Points `parent`'s child slot on `side` at `child` and, unless `child`
    /// is the sentinel, points `child`'s parent link back.
    pub(crate) fn link(&mut self, parent: Index, side: Side, child: Index) {
        *self.arena[parent].child_mut(side) = child;
        if child != self.nil {
            self.arena[child].parent = Some(parent);
        }
    }

    /// Makes whatever referenced `old` from above (a parent's child slot, or
    /// the root link) reference `new` instead. `new`'s own parent link is left
    /// to the caller.
    pub(crate) fn replace_in_parent(&mut self, parent: Option<Index>, old: Index, new: Index) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = &mut self.arena[parent];
                if node.left == old {
                    node.left = new;
                } else {
                    node.right = new;
                }
            }
        }
    }
}

//! Node definition, colors and the read-only node view.
//!
//! This module contains the arena-stored `Node` that the balancing code
//! manipulates, the `Color` tag, and `NodeView`, the owned snapshot handed
//! out by traversal.

use std::fmt;

use generational_arena::Index;
use serde::{Deserialize, Serialize};

/// Keys stored in the tree. Totally ordered and never mutated once stored.
pub type Key = i64;

/// Color tag carried by every node, including the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns `true` if the color is [`Red`](Color::Red).
    #[must_use]
    pub fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    /// Returns `true` if the color is [`Black`](Color::Black).
    #[must_use]
    pub fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("RED"),
            Color::Black => f.write_str("BLACK"),
        }
    }
}

/// Which child slot of a node is meant.
///
/// Every case of the repair machinery has a mirror image; the algorithms
/// are written once against a `Side` and its opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A tree element stored in the arena.
///
/// Absent children point at the tree's sentinel index, never at a separate
/// "none" value. Only the root has `parent == None`. The parent link is a
/// plain index and carries no ownership; a node's storage is released only
/// when deletion removes it from the arena.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) key: Key,
    pub(crate) color: Color,
    pub(crate) left: Index,
    pub(crate) right: Index,
    pub(crate) parent: Option<Index>,
}

impl Node {
    /// Creates a fresh RED node whose children are both the sentinel.
    pub(crate) fn new(key: Key, nil: Index, parent: Option<Index>) -> Self {
        Node {
            key,
            color: Color::Red,
            left: nil,
            right: nil,
            parent,
        }
    }

    /// Creates the sentinel leaf.
    ///
    /// Its children point back at itself and nothing ever writes to it after
    /// construction. Its key is never read.
    pub(crate) fn sentinel(own_index: Index) -> Self {
        Node {
            key: Key::default(),
            color: Color::Black,
            left: own_index,
            right: own_index,
            parent: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Index {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Index {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Read-only snapshot of one live node, as produced by in-order traversal.
///
/// Neighbours are reported by key; `None` means the sentinel (for children)
/// or "this is the root" (for the parent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeView {
    pub key: Key,
    pub color: Color,
    pub left: Option<Key>,
    pub right: Option<Key>,
    pub parent: Option<Key>,
}

impl NodeView {
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// `false` only for the root.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }
}

//! In-order traversal.
//!
//! Iteration uses an explicit stack of pending ancestors, so its depth is
//! never tied to the call stack. Iterators borrow the tree immutably and can
//! be cloned or recreated to restart.

use std::iter::FusedIterator;

use generational_arena::Index;

use crate::tree::node::{Key, NodeView};
use crate::tree::rbtree::RedBlackTree;

/// In-order iterator over [`NodeView`]s, created by [`RedBlackTree::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    tree: &'a RedBlackTree,
    stack: Vec<Index>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(tree: &'a RedBlackTree) -> Self {
        let mut iter = Iter {
            tree,
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.descend_left(tree.root);
        iter
    }

    fn descend_left(&mut self, mut id: Index) {
        while id != self.tree.nil {
            self.stack.push(id);
            id = self.tree.arena[id].left;
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = NodeView;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.descend_left(self.tree.arena[id].right);
        self.remaining -= 1;
        Some(self.tree.view(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// In-order iterator over keys, created by [`RedBlackTree::keys`].
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    inner: Iter<'a>,
}

impl Iterator for Keys<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|view| view.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Keys<'_> {}
impl FusedIterator for Keys<'_> {}

impl RedBlackTree {
    /// Walks the tree in ascending key order, yielding a view of every node.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Walks the keys in ascending order.
    pub fn keys(&self) -> Keys<'_> {
        Keys { inner: self.iter() }
    }
}

impl<'a> IntoIterator for &'a RedBlackTree {
    type Item = NodeView;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

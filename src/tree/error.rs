use thiserror::Error;

use crate::tree::node::Key;

/// Returned by insert when the key is already stored. The tree is untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("key {key} is already present")]
pub struct DuplicateKeyError {
    pub key: Key,
}

/// Returned by delete when the key is absent. The tree is untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("key {key} not found")]
pub struct KeyNotFoundError {
    pub key: Key,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKeyError),

    #[error(transparent)]
    KeyNotFound(#[from] KeyNotFoundError),
}

pub type TreeResult<T> = Result<T, TreeError>;

/// A broken red-black or search-tree invariant found by
/// [`RedBlackTree::check_invariants`](crate::RedBlackTree::check_invariants).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root {key} is red")]
    RedRoot { key: Key },

    #[error("red node {parent} has red child {child}")]
    DoubleRed { parent: Key, child: Key },

    #[error("black height differs below {key}: left {left}, right {right}")]
    BlackHeightMismatch { key: Key, left: usize, right: usize },

    #[error("key {key} is out of order (expected strictly between {low:?} and {high:?})")]
    OrderViolation {
        key: Key,
        low: Option<Key>,
        high: Option<Key>,
    },

    #[error("node {key} has a stale parent link")]
    BrokenParentLink { key: Key },

    #[error("sentinel is not black")]
    RedSentinel,
}

//! Red-black tree implementation module.
//!
//! This module contains the tree handle and the balancing machinery, split
//! by concern: rotations, insertion, deletion, traversal and invariant
//! checking each extend `RedBlackTree` from their own file.

pub mod error;
pub mod node;
pub mod rbtree;
pub mod traversal;

mod delete;
mod insert;
mod rotation;
mod validate;

// Re-export the main public API
pub use error::{DuplicateKeyError, InvariantViolation, KeyNotFoundError, TreeError, TreeResult};
pub use node::{Color, Key, NodeView};
pub use rbtree::RedBlackTree;
pub use traversal::{Iter, Keys};

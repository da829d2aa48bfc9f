//! # rbtree-set - an ordered key set backed by a red-black tree
//!
//! A self-balancing binary search tree over integer keys. Insertion and
//! deletion keep the tree height within `2 * log2(n + 1)` whatever the
//! order of operations.
//!
//! ## Features
//!
//! - **Balanced**: rotations and recoloring restore the red-black invariants after every mutation
//! - **Sentinel leaves**: one shared black sentinel fills every absent child slot
//! - **Arena storage**: nodes live in a generational arena and link by index
//! - **Iterative traversal**: in-order iteration uses an explicit stack
//! - **Unique keys**: duplicates are rejected rather than merged
//!
//! ## Example
//!
//! ```rust
//! use rbtree_set::{Color, RedBlackTree};
//!
//! let mut tree = RedBlackTree::new();
//! for key in [10, 20, 30] {
//!     tree.insert(key).unwrap();
//! }
//!
//! let root = tree.root_view().unwrap();
//! assert_eq!(root.key, 20);
//! assert_eq!(root.color, Color::Black);
//! assert_eq!(tree.keys().collect::<Vec<_>>(), vec![10, 20, 30]);
//!
//! tree.delete(20).unwrap();
//! assert!(tree.insert(10).is_err());
//! ```

pub mod cli;
pub mod tree;

// Re-export the main public API from the tree module
pub use tree::{Color, Key, NodeView, RedBlackTree};
pub use tree::{DuplicateKeyError, InvariantViolation, KeyNotFoundError, TreeError, TreeResult};
pub use tree::{Iter, Keys};

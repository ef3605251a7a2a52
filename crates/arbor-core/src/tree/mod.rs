//! Tree structures backed by a node arena.
//!
//! - [`BinarySearchTree`]: unbalanced BST of `i32` values
//! - [`Tree`]: generic N-ary tree, walked with the functions in [`traversal`]
//!
//! Nodes are addressed by [`NodeId`] handles. A handle is only meaningful for
//! the tree that issued it; once its node is removed every accessor returns
//! `None` for it, even if the slot is reused.
//!
//! # Example
//!
//! ```rust
//! use arbor_core::tree::{traversal, Tree};
//!
//! let mut tree = Tree::new(1);
//! let root = tree.root();
//! tree.add_child(root, 2);
//! tree.add_child(root, 3);
//!
//! let mut order = Vec::new();
//! traversal::post_order(&tree, root, &mut |v| order.push(v));
//! assert_eq!(order, vec![2, 3, 1]);
//! ```

mod arena;
mod bst;
mod nary;
pub mod traversal;

#[cfg(test)]
mod traversal_tests;

use std::fmt;

pub use bst::{BinarySearchTree, Removal};
pub use nary::Tree;

/// Handle to a node inside a tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// Returns the arena slot index.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

//! Unbalanced binary search tree of `i32` values.
//!
//! Values equal to a node go to its left subtree, so for every node
//! `left ≤ value < right`. Every operation is an explicit loop: a degenerate
//! (list-shaped) tree costs O(n) time but never deep recursion.

use std::collections::VecDeque;

use super::arena::NodeArena;
use super::NodeId;

#[derive(Debug, Clone)]
struct BstNode {
    value: i32,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl BstNode {
    fn new(value: i32, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }
}

/// Outcome of a successful [`BinarySearchTree::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The node that now continues the tree where the value was removed: the
    /// removed node's parent, the promoted child when the root was spliced
    /// out, or the node that received the predecessor's value.
    Replaced(NodeId),
    /// The last node was removed.
    Emptied,
}

/// Binary search tree with parent links.
///
/// # Example
///
/// ```rust
/// use arbor_core::tree::{BinarySearchTree, Removal};
///
/// let mut bst: BinarySearchTree = [30, 23, 35, 11, 25].into_iter().collect();
/// assert_eq!(bst.values_in_order(), vec![11, 23, 25, 30, 35]);
///
/// let node = bst.find(23).unwrap();
/// assert_eq!(bst.delete(23), Some(Removal::Replaced(bst.root().unwrap())));
/// assert_eq!(bst.value(node), Some(11));
/// assert_eq!(bst.delete(99), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BinarySearchTree {
    nodes: NodeArena<BstNode>,
    root: Option<NodeId>,
}

impl BinarySearchTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` and returns the new node.
    ///
    /// Duplicates are allowed and descend to the left.
    pub fn insert(&mut self, value: i32) -> NodeId {
        let Some(mut current) = self.root else {
            let id = self.nodes.insert(BstNode::new(value, None));
            self.root = Some(id);
            return id;
        };

        loop {
            let node = &self.nodes[current];
            let next = if value > node.value {
                node.right
            } else {
                node.left
            };
            match next {
                Some(child) => current = child,
                None => break,
            }
        }

        let id = self.nodes.insert(BstNode::new(value, Some(current)));
        let parent = &mut self.nodes[current];
        if value > parent.value {
            parent.right = Some(id);
        } else {
            parent.left = Some(id);
        }
        id
    }

    /// Returns the first node holding `value` on the search path.
    #[must_use]
    pub fn find(&self, value: i32) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match value.cmp(&node.value) {
                std::cmp::Ordering::Greater => node.right,
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Removes one node holding `value`, keeping the tree sorted.
    ///
    /// A node with two children takes the value of its in-order predecessor
    /// (the largest value of its left subtree), and the predecessor node is
    /// removed instead. Returns `None` when `value` is absent.
    pub fn delete(&mut self, value: i32) -> Option<Removal> {
        let id = self.find(value)?;
        let node = &self.nodes[id];

        let (Some(left), Some(_)) = (node.left, node.right) else {
            let removal = self.unlink(id);
            tracing::debug!(value, len = self.len(), "bst delete");
            return Some(removal);
        };

        let mut predecessor = left;
        while let Some(right) = self.nodes[predecessor].right {
            predecessor = right;
        }
        let replacement = self.nodes[predecessor].value;
        self.unlink(predecessor);
        self.nodes[id].value = replacement;

        tracing::debug!(value, replacement, len = self.len(), "bst delete");
        Some(Removal::Replaced(self.nodes[id].parent.unwrap_or(id)))
    }

    /// Detaches a node with at most one child and splices the child into its
    /// place.
    fn unlink(&mut self, id: NodeId) -> Removal {
        let node = &self.nodes[id];
        let (parent, child) = (node.parent, node.left.or(node.right));

        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
        let removal = match parent {
            Some(parent_id) => {
                let parent = &mut self.nodes[parent_id];
                if parent.left == Some(id) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
                Removal::Replaced(parent_id)
            }
            None => {
                self.root = child;
                child.map_or(Removal::Emptied, Removal::Replaced)
            }
        };
        self.nodes.remove(id);
        removal
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns the root node, `None` when empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns the value stored at `id`.
    #[must_use]
    pub fn value(&self, id: NodeId) -> Option<i32> {
        self.nodes.get(id).map(|n| n.value)
    }

    /// Returns the parent of `id`.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.parent
    }

    /// Returns the left child of `id`.
    #[must_use]
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.left
    }

    /// Returns the right child of `id`.
    #[must_use]
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.right
    }

    /// Returns true if `id` is the live root.
    #[must_use]
    pub fn is_root(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.parent.is_none())
    }

    /// Returns true if `id` is live and has no children.
    #[must_use]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|n| n.left.is_none() && n.right.is_none())
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns true if some node holds `value`.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.find(value).is_some()
    }

    /// Number of levels (0 when empty, 1 for a lone root).
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut queue: VecDeque<(NodeId, usize)> =
            self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, level)) = queue.pop_front() {
            height = height.max(level);
            let node = &self.nodes[id];
            for child in [node.left, node.right].into_iter().flatten() {
                queue.push_back((child, level + 1));
            }
        }
        height
    }

    /// Number of edges between `id` and the root.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut depth = 0;
        let mut current = self.nodes.get(id)?;
        while let Some(parent) = current.parent {
            depth += 1;
            current = &self.nodes[parent];
        }
        Some(depth)
    }

    /// Smallest value.
    #[must_use]
    pub fn min(&self) -> Option<i32> {
        let mut node = &self.nodes[self.root?];
        while let Some(left) = node.left {
            node = &self.nodes[left];
        }
        Some(node.value)
    }

    /// Largest value.
    #[must_use]
    pub fn max(&self) -> Option<i32> {
        let mut node = &self.nodes[self.root?];
        while let Some(right) = node.right {
            node = &self.nodes[right];
        }
        Some(node.value)
    }

    /// Visits values in sorted order.
    pub fn in_order<F: FnMut(i32)>(&self, mut visit: F) {
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id].left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            let node = &self.nodes[id];
            visit(node.value);
            current = node.right;
        }
    }

    /// Visits values in pre-order using an explicit stack.
    pub fn depth_first<F: FnMut(i32)>(&self, mut visit: F) {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            visit(node.value);

            // Notice the reverse order.
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }

    /// Visits values level by level, left to right.
    pub fn breadth_first<F: FnMut(i32)>(&self, mut visit: F) {
        let mut queue: VecDeque<NodeId> = self.root.into_iter().collect();
        while let Some(id) = queue.pop_front() {
            let node = &self.nodes[id];
            visit(node.value);
            queue.extend(node.left);
            queue.extend(node.right);
        }
    }

    /// Collects the values in sorted order.
    #[must_use]
    pub fn values_in_order(&self) -> Vec<i32> {
        let mut values = Vec::with_capacity(self.len());
        self.in_order(|v| values.push(v));
        values
    }
}

impl FromIterator<i32> for BinarySearchTree {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<i32> for BinarySearchTree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

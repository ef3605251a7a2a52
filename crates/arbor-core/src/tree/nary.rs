//! Generic N-ary tree of `i32` values.

use super::arena::NodeArena;
use super::NodeId;

#[derive(Debug, Clone)]
struct TreeNode {
    value: i32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Rooted tree whose nodes keep their children in insertion order.
///
/// Nodes are never removed, so every handle the tree issued stays valid for
/// its lifetime.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: NodeArena<TreeNode>,
    root: NodeId,
}

impl Tree {
    /// Creates a tree holding a single root node.
    #[must_use]
    pub fn new(root_value: i32) -> Self {
        let mut nodes = NodeArena::default();
        let root = nodes.insert(TreeNode {
            value: root_value,
            parent: None,
            children: Vec::new(),
        });
        Self { nodes, root }
    }

    /// Appends a child under `parent` and returns it.
    ///
    /// Returns `None` if `parent` was not issued by this tree.
    pub fn add_child(&mut self, parent: NodeId, value: i32) -> Option<NodeId> {
        self.nodes.get(parent)?;
        let child = self.nodes.insert(TreeNode {
            value,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(child);
        Some(child)
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
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

    /// Returns the children of `id` in insertion order (empty for unknown ids).
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// Returns true if `id` is the root.
    #[must_use]
    pub fn is_root(&self, id: NodeId) -> bool {
        id == self.root
    }

    /// Returns true if `id` is live and has no children.
    #[must_use]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.children.is_empty())
    }

    /// Number of nodes, root included.
    // Reason: a tree always holds its root, so there is no empty state
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
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

    /// Number of levels (1 for a lone root).
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.root, 1)];
        while let Some((id, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(self.children(id).iter().map(|&child| (child, level + 1)));
        }
        height
    }
}

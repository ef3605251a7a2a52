//! Traversals of an N-ary [`Tree`], starting from any of its nodes.
//!
//! Each function hands node values to a caller-supplied sink. Trees are
//! acyclic, so no visited set is kept. A handle the tree does not know
//! produces no output.

use std::collections::VecDeque;

use super::{NodeId, Tree};

/// Node first, then each child subtree in order.
pub fn pre_order<F: FnMut(i32)>(tree: &Tree, node: NodeId, visit: &mut F) {
    let Some(value) = tree.value(node) else {
        return;
    };
    visit(value);
    for &child in tree.children(node) {
        pre_order(tree, child, visit);
    }
}

/// First half of the children, the node, then the second half.
///
/// The split point is `children.len() / 2`, so a binary node yields the
/// classic left, node, right order.
pub fn in_order<F: FnMut(i32)>(tree: &Tree, node: NodeId, visit: &mut F) {
    let Some(value) = tree.value(node) else {
        return;
    };
    let children = tree.children(node);
    let (first, second) = children.split_at(children.len() / 2);

    for &child in first {
        in_order(tree, child, visit);
    }
    visit(value);
    for &child in second {
        in_order(tree, child, visit);
    }
}

/// Each child subtree in order, then the node.
pub fn post_order<F: FnMut(i32)>(tree: &Tree, node: NodeId, visit: &mut F) {
    let Some(value) = tree.value(node) else {
        return;
    };
    for &child in tree.children(node) {
        post_order(tree, child, visit);
    }
    visit(value);
}

/// Pre-order with an explicit stack.
pub fn depth_first_iterative<F: FnMut(i32)>(tree: &Tree, node: NodeId, mut visit: F) {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        let Some(value) = tree.value(current) else {
            continue;
        };
        visit(value);

        // Notice the reverse order.
        stack.extend(tree.children(current).iter().rev());
    }
}

/// Level by level, children in insertion order.
pub fn breadth_first<F: FnMut(i32)>(tree: &Tree, node: NodeId, mut visit: F) {
    let mut queue = VecDeque::from([node]);
    while let Some(current) = queue.pop_front() {
        let Some(value) = tree.value(current) else {
            continue;
        };
        visit(value);
        queue.extend(tree.children(current));
    }
}

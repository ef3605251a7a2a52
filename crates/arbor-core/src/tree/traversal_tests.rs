//! Tests for N-ary tree traversals.

use super::nary::Tree;
use super::traversal::{breadth_first, depth_first_iterative, in_order, post_order, pre_order};
use super::NodeId;

/// Build the sample tree:
///
/// ```text
///          1
///       /  |  \
///      2   3   4
///        / | \  | \
///       5  6  7 8  9
/// ```
fn build_sample_tree() -> Tree {
    let mut tree = Tree::new(1);
    let root = tree.root();
    tree.add_child(root, 2);
    let three = tree.add_child(root, 3).unwrap();
    let four = tree.add_child(root, 4).unwrap();
    for value in [5, 6, 7] {
        tree.add_child(three, value);
    }
    for value in [8, 9] {
        tree.add_child(four, value);
    }
    tree
}

fn collect(walk: impl FnOnce(&mut dyn FnMut(i32))) -> Vec<i32> {
    let mut values = Vec::new();
    walk(&mut |v| values.push(v));
    values
}

#[test]
fn test_pre_order() {
    let tree = build_sample_tree();
    let order = collect(|visit| pre_order(&tree, tree.root(), &mut |v| visit(v)));
    assert_eq!(order, vec![1, 2, 3, 5, 6, 7, 4, 8, 9]);
}

#[test]
fn test_in_order_splits_children_at_half() {
    let tree = build_sample_tree();
    let order = collect(|visit| in_order(&tree, tree.root(), &mut |v| visit(v)));
    assert_eq!(order, vec![2, 1, 5, 3, 6, 7, 8, 4, 9]);
}

#[test]
fn test_post_order() {
    let tree = build_sample_tree();
    let order = collect(|visit| post_order(&tree, tree.root(), &mut |v| visit(v)));
    assert_eq!(order, vec![2, 5, 6, 7, 3, 8, 9, 4, 1]);
}

#[test]
fn test_iterative_dfs_matches_pre_order() {
    let tree = build_sample_tree();
    let order = collect(|visit| depth_first_iterative(&tree, tree.root(), visit));
    assert_eq!(order, vec![1, 2, 3, 5, 6, 7, 4, 8, 9]);
}

#[test]
fn test_breadth_first() {
    let tree = build_sample_tree();
    let order = collect(|visit| breadth_first(&tree, tree.root(), visit));
    assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_subtree_start() {
    let tree = build_sample_tree();
    let four = tree.children(tree.root())[2];
    let order = collect(|visit| post_order(&tree, four, &mut |v| visit(v)));
    assert_eq!(order, vec![8, 9, 4]);
}

#[test]
fn test_single_node() {
    let tree = Tree::new(42);
    let order = collect(|visit| in_order(&tree, tree.root(), &mut |v| visit(v)));
    assert_eq!(order, vec![42]);
}

#[test]
fn test_unknown_start_emits_nothing() {
    let tree = build_sample_tree();
    let mut other = Tree::new(0);
    let mut stale: Option<NodeId> = None;
    for value in 0..20 {
        stale = other.add_child(other.root(), value);
    }
    let stale = stale.unwrap();

    assert!(collect(|visit| pre_order(&tree, stale, &mut |v| visit(v))).is_empty());
    assert!(collect(|visit| breadth_first(&tree, stale, visit)).is_empty());
}

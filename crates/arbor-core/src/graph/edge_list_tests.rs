//! Tests for the edge-list representation.

use super::edge_list::EdgeList;
use super::storage::Graph;
use super::types::Edge;

#[test]
fn test_new_is_empty() {
    let graph = EdgeList::new(true);
    assert!(graph.is_directed());
    assert_eq!(graph.vertex_count(), None);
    assert_eq!(graph.vertex_bound(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.contains_vertex(0));
}

#[test]
fn test_directed_edge_is_one_way() {
    let mut graph = EdgeList::new(true);
    graph.set_edge(0, 1, 7.0);

    assert_eq!(graph.edge(0, 1), Some(7.0));
    assert_eq!(graph.edge(1, 0), None);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_undirected_edge_is_mirrored() {
    let mut graph = EdgeList::new(false);
    graph.set_edge(3, 5, 2.0);

    assert_eq!(graph.edge(3, 5), Some(2.0));
    assert_eq!(graph.edge(5, 3), Some(2.0));
    assert_eq!(graph.edges(5), vec![Edge::new(5, 3, 2.0)]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_undirected_self_loop_stored_once() {
    let mut graph = EdgeList::new(false);
    graph.set_edge(4, 4, 1.0);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edges(4).len(), 1);
}

#[test]
fn test_zero_weight_is_an_edge() {
    let mut graph = EdgeList::new(true);
    graph.set_edge(0, 1, 0.0);
    assert_eq!(graph.edge(0, 1), Some(0.0));
}

#[test]
fn test_non_finite_weight_ignored() {
    let mut graph = EdgeList::new(true);
    graph.set_edge(0, 1, f32::NAN);
    graph.set_edge(0, 2, f32::INFINITY);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_duplicate_edges_kept_first_wins_lookup() {
    let mut graph = EdgeList::new(true);
    graph.set_edge(0, 1, 7.0);
    graph.set_edge(0, 1, 9.0);

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge(0, 1), Some(7.0));
    assert_eq!(graph.edges(0).len(), 2);
}

#[test]
fn test_edges_preserve_insertion_order() {
    let mut graph = EdgeList::new(true);
    graph.set_edge(2, 4, 6.0);
    graph.set_edge(0, 1, 7.0);
    graph.set_edge(2, 0, 2.0);
    graph.set_edge(2, 1, 1.0);

    let targets: Vec<usize> = graph.edges(2).iter().map(Edge::target).collect();
    assert_eq!(targets, vec![4, 0, 1]);
}

#[test]
fn test_vertices_are_referenced_endpoints() {
    let mut graph = EdgeList::new(true);
    graph.set_edge(5, 2, 1.0);
    graph.set_edge(2, 9, 1.0);

    assert_eq!(graph.vertices(), vec![2, 5, 9]);
    assert!(graph.contains_vertex(9));
    assert!(!graph.contains_vertex(3));
    assert_eq!(graph.vertex_bound(), 10);
}

#[test]
fn test_clear_removes_everything() {
    let mut graph = EdgeList::with_capacity(false, 4);
    graph.set_edge(0, 1, 1.0);
    graph.clear();
    assert!(graph.all_edges().is_empty());
    assert!(!graph.contains_vertex(0));
}

#[test]
fn test_display() {
    let mut graph = EdgeList::new(true);
    graph.set_edge(0, 1, 7.0);
    graph.set_edge(1, 3, 5.5);

    assert_eq!(
        graph.to_string(),
        "EdgeList (directed)\n  0 -> 1 (7)\n  1 -> 3 (5.5)\n"
    );
}

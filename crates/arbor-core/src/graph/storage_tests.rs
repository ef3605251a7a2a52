//! Tests for the graph factory.

use super::storage::build_graph;
use super::types::Representation;
use crate::error::Error;

#[test]
fn test_build_each_representation() {
    for representation in [
        Representation::EdgeList,
        Representation::AdjacencyMatrix,
        Representation::AdjacencyList,
    ] {
        let mut graph = build_graph(representation, 3, true).unwrap();
        graph.set_edge(0, 1, 7.0);
        assert_eq!(graph.edge(0, 1), Some(7.0), "{representation}");
        assert!(graph.is_directed());
    }
}

#[test]
fn test_all_edges_groups_like_per_vertex_edges() {
    for representation in [
        Representation::EdgeList,
        Representation::AdjacencyMatrix,
        Representation::AdjacencyList,
    ] {
        let mut graph = build_graph(representation, 4, false).unwrap();
        graph.set_edge(2, 0, 1.0);
        graph.set_edge(0, 3, 2.0);
        graph.set_edge(2, 1, 3.0);

        let mut all = graph.all_edges();
        all.sort_by_key(|e| e.source());
        let per_vertex: Vec<_> = (0..graph.vertex_bound())
            .flat_map(|v| graph.edges(v))
            .collect();
        assert_eq!(all, per_vertex, "{representation}");
        assert_eq!(all.len(), graph.edge_count(), "{representation}");
    }
}

#[test]
fn test_edge_list_ignores_vertex_count() {
    let graph = build_graph(Representation::EdgeList, 0, false).unwrap();
    assert_eq!(graph.vertex_count(), None);
}

#[test]
fn test_declared_vertex_count() {
    let graph = build_graph(Representation::AdjacencyList, 6, false).unwrap();
    assert_eq!(graph.vertex_count(), Some(6));
    assert!(!graph.is_directed());
}

#[test]
fn test_negative_vertex_count_rejected() {
    for representation in [
        Representation::EdgeList,
        Representation::AdjacencyMatrix,
        Representation::AdjacencyList,
    ] {
        let result = build_graph(representation, -1, true);
        assert!(matches!(result, Err(Error::InvalidVertexCount(-1))));
    }
}

#[test]
fn test_zero_vertices_is_valid() {
    let mut graph = build_graph(Representation::AdjacencyMatrix, 0, true).unwrap();
    graph.set_edge(0, 0, 1.0);
    assert_eq!(graph.edge_count(), 0);
}

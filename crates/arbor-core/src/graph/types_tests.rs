//! Tests for graph types (Edge, Representation).

use super::types::{Edge, Representation};
use crate::error::Error;

#[test]
fn test_edge_new() {
    let edge = Edge::new(1, 3, 5.0);
    assert_eq!(edge.source(), 1);
    assert_eq!(edge.target(), 3);
    assert_eq!(edge.weight(), 5.0);
    assert!(!edge.is_loop());
}

#[test]
fn test_edge_reversed() {
    let edge = Edge::new(4, 1, 3.0).reversed();
    assert_eq!(edge, Edge::new(1, 4, 3.0));
}

#[test]
fn test_edge_self_loop() {
    assert!(Edge::new(2, 2, 1.0).is_loop());
}

#[test]
fn test_edge_display() {
    assert_eq!(Edge::new(2, 0, 2.5).to_string(), "2->0 (2.5)");
}

#[test]
fn test_edge_parse() {
    let edge: Edge = "0, 1, 7".parse().unwrap();
    assert_eq!(edge, Edge::new(0, 1, 7.0));

    let edge: Edge = "3,5,-1.5".parse().unwrap();
    assert_eq!(edge.weight(), -1.5);
}

#[test]
fn test_edge_parse_rejects_malformed() {
    for input in ["", "0,1", "a,1,2", "0,-1,2", "0,1,x", "0,1,2,3"] {
        let result = input.parse::<Edge>();
        assert!(
            matches!(result, Err(Error::InvalidEdge(_))),
            "expected InvalidEdge for {input:?}"
        );
    }
}

#[test]
fn test_edge_serde_roundtrip_shape() {
    let json = serde_json::to_value(Edge::new(0, 1, 7.0)).unwrap();
    assert_eq!(json["source"], 0);
    assert_eq!(json["target"], 1);
    assert_eq!(json["weight"], 7.0);
}

#[test]
fn test_representation_parse() {
    assert_eq!(
        "edge-list".parse::<Representation>().unwrap(),
        Representation::EdgeList
    );
    assert_eq!(
        "Matrix".parse::<Representation>().unwrap(),
        Representation::AdjacencyMatrix
    );
    assert_eq!(
        "adjacency-list".parse::<Representation>().unwrap(),
        Representation::AdjacencyList
    );
    assert!(matches!(
        "tree".parse::<Representation>(),
        Err(Error::UnknownRepresentation(_))
    ));
}

#[test]
fn test_representation_serde_aliases() {
    let parsed: Representation = serde_json::from_str("\"matrix\"").unwrap();
    assert_eq!(parsed, Representation::AdjacencyMatrix);
    let name = serde_json::to_string(&Representation::AdjacencyList).unwrap();
    assert_eq!(name, "\"adjacency-list\"");
}

//! Property-based tests for graph storage, traversal and shortest paths.
//!
//! Random graphs are checked against a naive reachability closure and against
//! each other across the three representations.

use std::collections::HashSet;

use arbor_core::graph::{
    bellman_ford, build_graph, dijkstra, floyd_warshall, traverse, Graph, Representation,
    TraversalOrder,
};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Just, Strategy},
    proptest,
    test_runner::{Config as ProptestConfig, FileFailurePersistence},
};

const GRAPH_PROP_CASES: u32 = 256;
const GRAPH_PROP_MAX_VERTICES: usize = 12;
const GRAPH_PROP_MAX_EDGES: usize = 40;

const ALL_REPRESENTATIONS: [Representation; 3] = [
    Representation::EdgeList,
    Representation::AdjacencyMatrix,
    Representation::AdjacencyList,
];

const ALL_ORDERS: [TraversalOrder; 3] = [
    TraversalOrder::DepthFirstRecursive,
    TraversalOrder::DepthFirstIterative,
    TraversalOrder::BreadthFirst,
];

type RawEdge = (usize, usize, f32);

/// Vertex count plus edges within range. Weights are small integers so sums
/// stay exact in `f32`.
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<RawEdge>)> {
    (1..=GRAPH_PROP_MAX_VERTICES).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0_u8..20).prop_map(|(a, b, w)| (a, b, f32::from(w)));
        (Just(n), vec(edge, 0..GRAPH_PROP_MAX_EDGES))
    })
}

fn build(
    representation: Representation,
    vertex_count: usize,
    directed: bool,
    edges: &[RawEdge],
) -> Box<dyn Graph> {
    let count = i64::try_from(vertex_count).expect("small vertex count");
    let mut graph = build_graph(representation, count, directed).expect("valid vertex count");
    for &(a, b, w) in edges {
        graph.set_edge(a, b, w);
    }
    graph
}

/// Reference reachability by fixed-point iteration over the raw edges.
fn reachable(start: usize, directed: bool, edges: &[RawEdge]) -> HashSet<usize> {
    let mut seen = HashSet::from([start]);
    loop {
        let before = seen.len();
        for &(a, b, _) in edges {
            if seen.contains(&a) {
                seen.insert(b);
            }
            if !directed && seen.contains(&b) {
                seen.insert(a);
            }
        }
        if seen.len() == before {
            return seen;
        }
    }
}

fn graph_proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: GRAPH_PROP_CASES,
        failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
            "graph-property-regressions",
        ))),
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(graph_proptest_config())]

    #[test]
    fn test_first_inserted_weight_is_visible((n, edges) in graph_strategy(), directed in proptest::bool::ANY) {
        for representation in [Representation::EdgeList, Representation::AdjacencyList] {
            let graph = build(representation, n, directed, &edges);
            for &(a, b, _) in &edges {
                let first = edges
                    .iter()
                    .find(|e| (e.0 == a && e.1 == b) || (!directed && e.0 == b && e.1 == a))
                    .map(|e| e.2);
                prop_assert_eq!(graph.edge(a, b), first);
                if !directed {
                    prop_assert_eq!(graph.edge(b, a), first);
                }
            }
        }
    }

    #[test]
    fn test_matrix_keeps_last_weight((n, edges) in graph_strategy()) {
        let graph = build(Representation::AdjacencyMatrix, n, true, &edges);
        for &(a, b, _) in &edges {
            let last = edges.iter().rev().find(|e| e.0 == a && e.1 == b).map(|e| e.2);
            prop_assert_eq!(graph.edge(a, b), last);
        }
    }

    #[test]
    fn test_traversals_emit_reachable_set_once((n, edges) in graph_strategy(), directed in proptest::bool::ANY) {
        let start = 0;
        let expected = reachable(start, directed, &edges);
        for representation in [Representation::AdjacencyMatrix, Representation::AdjacencyList] {
            let graph = build(representation, n, directed, &edges);
            for order in ALL_ORDERS {
                let visited = traverse(graph.as_ref(), start, order);
                let unique: HashSet<usize> = visited.iter().copied().collect();
                prop_assert_eq!(unique.len(), visited.len(), "{} emitted a vertex twice", order);
                prop_assert_eq!(&unique, &expected);
                prop_assert_eq!(visited.first().copied(), Some(start));
            }
        }
    }

    #[test]
    fn test_recursive_and_iterative_dfs_agree((n, edges) in graph_strategy(), directed in proptest::bool::ANY) {
        for representation in ALL_REPRESENTATIONS {
            let graph = build(representation, n, directed, &edges);
            for start in 0..n {
                prop_assert_eq!(
                    traverse(graph.as_ref(), start, TraversalOrder::DepthFirstRecursive),
                    traverse(graph.as_ref(), start, TraversalOrder::DepthFirstIterative)
                );
            }
        }
    }

    #[test]
    fn test_shortest_path_algorithms_agree((n, edges) in graph_strategy()) {
        for representation in ALL_REPRESENTATIONS {
            let graph = build(representation, n, true, &edges);
            let all_pairs = floyd_warshall(graph.as_ref()).expect("no negative weights");
            for source in 0..n {
                if !graph.contains_vertex(source) {
                    continue;
                }
                let fast = dijkstra(graph.as_ref(), source).expect("no negative weights");
                let general = bellman_ford(graph.as_ref(), source).expect("no negative cycle");
                for target in 0..n {
                    prop_assert_eq!(fast.distance(target), general.distance(target));
                    prop_assert_eq!(fast.distance(target), all_pairs.distance(source, target));
                }
                prop_assert!(fast.distance(source) == Some(0.0));
            }
        }
    }
}

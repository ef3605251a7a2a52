//! Weighted graphs with interchangeable storage.
//!
//! Three representations implement the [`Graph`] trait: [`EdgeList`],
//! [`AdjacencyMatrix`] and [`AdjacencyList`]. Traversals and path algorithms
//! are generic over the trait, so they produce identical results on every
//! representation given the same insertion order.
//!
//! # Example
//!
//! ```rust
//! use arbor_core::graph::{build_graph, traverse, Representation, TraversalOrder};
//!
//! let mut graph = build_graph(Representation::AdjacencyMatrix, 4, true).unwrap();
//! graph.set_edge(0, 1, 1.0);
//! graph.set_edge(0, 2, 1.0);
//! graph.set_edge(1, 3, 1.0);
//!
//! let order = traverse(graph.as_ref(), 0, TraversalOrder::DepthFirstIterative);
//! assert_eq!(order, vec![0, 1, 3, 2]);
//! ```

mod adjacency_list;
mod adjacency_matrix;
mod edge_list;
pub mod paths;
mod storage;
pub mod traversal;
mod types;

#[cfg(test)]
mod edge_list_tests;
#[cfg(test)]
mod storage_tests;
#[cfg(test)]
mod types_tests;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use edge_list::EdgeList;
pub use paths::{
    bellman_ford, dijkstra, find_path, floyd_warshall, has_cycle, DistanceMatrix, ShortestPaths,
};
pub use storage::{build_graph, Graph};
pub use traversal::{
    breadth_first, depth_first_iterative, depth_first_recursive, traverse, TraversalOrder,
};
pub use types::{Edge, Representation};

//! # Arbor Core
//!
//! Graph and tree data structures with their traversal and search algorithms.
//!
//! ## Features
//!
//! - **Pluggable graph storage**: edge list, adjacency matrix and adjacency list
//!   behind the [`Graph`] trait
//! - **Traversals**: recursive and iterative depth-first, iterative breadth-first
//! - **Paths**: BFS path finding, cycle detection, Dijkstra, Bellman-Ford, Floyd-Warshall
//! - **Trees**: an unbalanced [`BinarySearchTree`] and a generic N-ary [`Tree`]
//!
//! ## Quick Start
//!
//! ```rust
//! use arbor_core::graph::{traverse, EdgeList, Graph, TraversalOrder};
//!
//! let mut graph = EdgeList::new(true);
//! graph.set_edge(0, 1, 7.0);
//! graph.set_edge(1, 2, 5.0);
//!
//! assert_eq!(graph.edge(0, 1), Some(7.0));
//! assert_eq!(traverse(&graph, 0, TraversalOrder::BreadthFirst), vec![0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::float_cmp, clippy::unreadable_literal))]

pub mod config;
pub mod error;
pub mod graph;
pub mod tree;

pub use config::{ArborConfig, GraphConfig, LoggingConfig, TraversalDefaults};
pub use error::{Error, Result};
pub use graph::{
    build_graph, AdjacencyList, AdjacencyMatrix, Edge, EdgeList, Graph, Representation,
    TraversalOrder,
};
pub use tree::{BinarySearchTree, NodeId, Removal, Tree};

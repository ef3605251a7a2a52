//! Edge-list graph storage.
//!
//! Keeps every edge in insertion order in a single vector. There is no
//! declared vertex set: a vertex exists as long as some edge references it.
//! Lookups scan the whole list (O(E)); insertion is amortized O(1).

use std::fmt;

use super::storage::{write_header, Graph};
use super::types::{is_storable_weight, Edge};

/// Graph stored as a flat list of edges.
///
/// # Example
///
/// ```rust
/// use arbor_core::graph::{EdgeList, Graph};
///
/// let mut graph = EdgeList::new(false);
/// graph.set_edge(0, 1, 7.0);
///
/// assert_eq!(graph.edge(1, 0), Some(7.0));
/// assert_eq!(graph.vertex_count(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeList {
    directed: bool,
    /// All stored entries, undirected edges appear once per direction.
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Creates an empty edge list.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            edges: Vec::new(),
        }
    }

    /// Creates an edge list with room for `expected_edges` insertions.
    #[must_use]
    pub fn with_capacity(directed: bool, expected_edges: usize) -> Self {
        let slots = if directed {
            expected_edges
        } else {
            expected_edges.saturating_mul(2)
        };
        Self {
            directed,
            edges: Vec::with_capacity(slots),
        }
    }

    /// Returns the referenced vertices in ascending order.
    #[must_use]
    pub fn vertices(&self) -> Vec<usize> {
        let mut vertices: Vec<usize> = self
            .edges
            .iter()
            .flat_map(|e| [e.source(), e.target()])
            .collect();
        vertices.sort_unstable();
        vertices.dedup();
        vertices
    }

    /// Removes all edges.
    pub fn clear(&mut self) {
        self.edges.clear();
    }
}

impl Graph for EdgeList {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> Option<usize> {
        None
    }

    fn contains_vertex(&self, vertex: usize) -> bool {
        self.edges
            .iter()
            .any(|e| e.source() == vertex || e.target() == vertex)
    }

    fn vertex_bound(&self) -> usize {
        self.edges
            .iter()
            .map(|e| e.source().max(e.target()).saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self, vertex: usize) -> Vec<Edge> {
        self.edges
            .iter()
            .filter(|e| e.source() == vertex)
            .copied()
            .collect()
    }

    /// Every stored entry in insertion order.
    fn all_edges(&self) -> Vec<Edge> {
        self.edges.clone()
    }

    fn edge(&self, from: usize, to: usize) -> Option<f32> {
        self.edges
            .iter()
            .find(|e| e.source() == from && e.target() == to)
            .map(Edge::weight)
    }

    fn set_edge(&mut self, from: usize, to: usize, weight: f32) {
        if !is_storable_weight(weight) {
            tracing::debug!(from, to, weight, "edge list: ignoring non-finite weight");
            return;
        }
        let edge = Edge::new(from, to, weight);
        self.edges.push(edge);
        if !self.directed && !edge.is_loop() {
            self.edges.push(edge.reversed());
        }
    }
}

impl fmt::Display for EdgeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, "EdgeList", self.directed, None)?;
        for edge in &self.edges {
            writeln!(
                f,
                "  {} -> {} ({})",
                edge.source(),
                edge.target(),
                edge.weight()
            )?;
        }
        Ok(())
    }
}

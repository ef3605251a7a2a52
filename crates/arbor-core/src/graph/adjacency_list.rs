//! Adjacency-list graph storage.
//!
//! One edge vector per vertex. Neighbor enumeration and edge lookup are
//! O(degree), insertion is O(1). Undirected insertions are duplicated into
//! both endpoints' lists.

use std::fmt;

use crate::error::{Error, Result};

use super::storage::{write_header, Graph};
use super::types::{is_storable_weight, Edge};

/// Graph stored as per-vertex edge lists.
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    directed: bool,
    /// Outgoing edges per vertex, in insertion order.
    adjacency: Vec<Vec<Edge>>,
}

impl AdjacencyList {
    /// Creates an adjacency list for `vertex_count` vertices without edges.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapacityOverflow` if the per-vertex lists cannot be
    /// allocated.
    pub fn new(vertex_count: usize, directed: bool) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| Error::CapacityOverflow(vertex_count))?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            directed,
            adjacency,
        })
    }

    /// Returns the out-degree of a vertex (0 when out of range).
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }
}

impl Graph for AdjacencyList {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> Option<usize> {
        Some(self.adjacency.len())
    }

    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }

    fn vertex_bound(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    fn edges(&self, vertex: usize) -> Vec<Edge> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }

    fn edge(&self, from: usize, to: usize) -> Option<f32> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|e| e.target() == to)
            .map(Edge::weight)
    }

    fn set_edge(&mut self, from: usize, to: usize, weight: f32) {
        if !is_storable_weight(weight) {
            tracing::debug!(from, to, weight, "adjacency list: ignoring non-finite weight");
            return;
        }
        let vertex_count = self.adjacency.len();
        if from >= vertex_count || to >= vertex_count {
            tracing::debug!(
                from,
                to,
                vertex_count,
                "adjacency list: ignoring out-of-range edge"
            );
            return;
        }
        let edge = Edge::new(from, to, weight);
        self.adjacency[from].push(edge);
        if !self.directed && !edge.is_loop() {
            self.adjacency[to].push(edge.reversed());
        }
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, "AdjacencyList", self.directed, Some(self.adjacency.len()))?;
        for (vertex, edges) in self.adjacency.iter().enumerate() {
            let targets: Vec<String> = edges
                .iter()
                .map(|e| format!("{}({})", e.target(), e.weight()))
                .collect();
            writeln!(f, "  {vertex}: {}", targets.join(" "))?;
        }
        Ok(())
    }
}

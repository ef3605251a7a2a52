//! Adjacency-matrix graph storage.
//!
//! A dense row-major `V x V` table of optional weights. O(1) edge lookup,
//! O(V) neighbor enumeration (row scan), O(V²) memory. The vertex count is
//! fixed at construction.

use std::fmt;

use crate::error::{Error, Result};

use super::storage::{write_header, Graph};
use super::types::{is_storable_weight, Edge};

/// Graph stored as a dense weight matrix.
///
/// Setting an existing edge overwrites its weight.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    directed: bool,
    vertex_count: usize,
    /// Row-major cells: `cells[from * vertex_count + to]`.
    cells: Vec<Option<f32>>,
}

impl AdjacencyMatrix {
    /// Creates a matrix for `vertex_count` vertices without edges.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapacityOverflow` if `vertex_count²` cells cannot be
    /// allocated.
    pub fn new(vertex_count: usize, directed: bool) -> Result<Self> {
        let cell_count = vertex_count
            .checked_mul(vertex_count)
            .ok_or(Error::CapacityOverflow(vertex_count))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(cell_count)
            .map_err(|_| Error::CapacityOverflow(vertex_count))?;
        cells.resize(cell_count, None);
        Ok(Self {
            directed,
            vertex_count,
            cells,
        })
    }

    #[inline]
    fn index(&self, from: usize, to: usize) -> Option<usize> {
        (from < self.vertex_count && to < self.vertex_count)
            .then(|| from * self.vertex_count + to)
    }

    /// Returns the row of `vertex`, `None` if out of range.
    #[must_use]
    pub fn row(&self, vertex: usize) -> Option<&[Option<f32>]> {
        let start = self.index(vertex, 0)?;
        Some(&self.cells[start..start + self.vertex_count])
    }
}

impl Graph for AdjacencyMatrix {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_count(&self) -> Option<usize> {
        Some(self.vertex_count)
    }

    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn vertex_bound(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn edges(&self, vertex: usize) -> Vec<Edge> {
        self.row(vertex)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(to, cell)| cell.map(|w| Edge::new(vertex, to, w)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn edge(&self, from: usize, to: usize) -> Option<f32> {
        self.index(from, to).and_then(|i| self.cells[i])
    }

    fn set_edge(&mut self, from: usize, to: usize, weight: f32) {
        if !is_storable_weight(weight) {
            tracing::debug!(from, to, weight, "adjacency matrix: ignoring non-finite weight");
            return;
        }
        let Some(i) = self.index(from, to) else {
            tracing::debug!(
                from,
                to,
                vertex_count = self.vertex_count,
                "adjacency matrix: ignoring out-of-range edge"
            );
            return;
        };
        self.cells[i] = Some(weight);
        if !self.directed {
            let mirror = to * self.vertex_count + from;
            self.cells[mirror] = Some(weight);
        }
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, "AdjacencyMatrix", self.directed, Some(self.vertex_count))?;
        for from in 0..self.vertex_count {
            let start = from * self.vertex_count;
            let row: Vec<String> = self.cells[start..start + self.vertex_count]
                .iter()
                .map(|cell| cell.map_or_else(|| ".".to_string(), |w| w.to_string()))
                .collect();
            writeln!(f, "  {from}: {}", row.join(" "))?;
        }
        Ok(())
    }
}

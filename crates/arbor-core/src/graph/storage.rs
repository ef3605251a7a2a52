//! The storage contract every graph representation implements.

use std::fmt;

use crate::error::{Error, Result};

use super::types::{Edge, Representation};
use super::{AdjacencyList, AdjacencyMatrix, EdgeList};

/// Trait for graph storage: any representation can implement this.
///
/// Vertices are dense `usize` indices. Lookups never fail: an unknown or
/// out-of-range vertex simply has no edges, and a missing edge has no weight.
/// The `Display` supertrait renders a deterministic textual form.
pub trait Graph: fmt::Display {
    /// Returns true if edges have a direction.
    fn is_directed(&self) -> bool;

    /// Declared vertex count, `None` when the vertex set is implicit.
    fn vertex_count(&self) -> Option<usize>;

    /// Returns true if `vertex` belongs to the graph.
    fn contains_vertex(&self, vertex: usize) -> bool;

    /// One past the largest addressable vertex.
    fn vertex_bound(&self) -> usize;

    /// Number of stored directed entries (an undirected edge counts twice
    /// unless it is a self loop).
    fn edge_count(&self) -> usize;

    /// Returns the edges leaving `vertex` (every incident edge when undirected),
    /// oriented so that `edge.source() == vertex`.
    ///
    /// The result is a fresh copy; it does not observe later mutations.
    fn edges(&self, vertex: usize) -> Vec<Edge>;

    /// Returns every stored entry, grouped so that each vertex's edges keep
    /// the order of [`Graph::edges`].
    fn all_edges(&self) -> Vec<Edge> {
        (0..self.vertex_bound()).flat_map(|v| self.edges(v)).collect()
    }

    /// Returns the weight of the edge `from -> to`, `None` if there is none.
    fn edge(&self, from: usize, to: usize) -> Option<f32>;

    /// Inserts the edge `from -> to` (mirrored when undirected).
    ///
    /// Silently ignored when the weight is not finite or a vertex is out of
    /// the declared range.
    fn set_edge(&mut self, from: usize, to: usize, weight: f32);
}

/// Builds a graph from externally supplied parameters.
///
/// `vertex_count` is signed because it usually comes from user input; it is
/// ignored by the edge list.
///
/// # Errors
///
/// Returns `Error::InvalidVertexCount` for a negative count and
/// `Error::CapacityOverflow` when the storage cannot be allocated.
pub fn build_graph(
    representation: Representation,
    vertex_count: i64,
    directed: bool,
) -> Result<Box<dyn Graph>> {
    let count =
        usize::try_from(vertex_count).map_err(|_| Error::InvalidVertexCount(vertex_count))?;
    let graph: Box<dyn Graph> = match representation {
        Representation::EdgeList => Box::new(EdgeList::new(directed)),
        Representation::AdjacencyMatrix => Box::new(AdjacencyMatrix::new(count, directed)?),
        Representation::AdjacencyList => Box::new(AdjacencyList::new(count, directed)?),
    };
    tracing::debug!(%representation, vertex_count = count, directed, "graph built");
    Ok(graph)
}

/// Writes the shared header line used by every representation's `Display`.
pub(crate) fn write_header(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    directed: bool,
    vertex_count: Option<usize>,
) -> fmt::Result {
    let kind = if directed { "directed" } else { "undirected" };
    match vertex_count {
        Some(count) => writeln!(f, "{name} ({kind}, {count} vertices)"),
        None => writeln!(f, "{name} ({kind})"),
    }
}

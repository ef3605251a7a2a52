//! Error types for arbor-core.
//!
//! Out-of-range vertices and missing tree values are not errors: they are
//! reported through empty or `None` results. Errors are reserved for malformed
//! construction, violated algorithm preconditions and configuration problems.

use thiserror::Error;

/// Arbor error types.
#[derive(Error, Debug)]
pub enum Error {
    /// Vertex count that cannot describe a graph (e.g. negative).
    #[error("Invalid vertex count: {0} (must be >= 0)")]
    InvalidVertexCount(i64),

    /// Storage for the requested vertex count would overflow `usize`.
    #[error("Capacity overflow: {0} vertices exceed addressable storage")]
    CapacityOverflow(usize),

    /// Edge specification that could not be parsed.
    #[error("Invalid edge '{0}': expected <source>,<target>,<weight>")]
    InvalidEdge(String),

    /// Unknown graph representation name.
    #[error("Unknown representation '{0}' (expected: edge-list, matrix, list)")]
    UnknownRepresentation(String),

    /// Unknown traversal order name.
    #[error("Unknown traversal order '{0}' (expected: dfs, dfs-iterative, bfs)")]
    UnknownTraversalOrder(String),

    /// Dijkstra reached an edge with a negative weight.
    #[error("Negative weight {weight} on edge {source_vertex} -> {target}")]
    NegativeWeight {
        /// Source vertex of the offending edge.
        source_vertex: usize,
        /// Target vertex of the offending edge.
        target: usize,
        /// The negative weight.
        weight: f32,
    },

    /// A negative cycle makes shortest distances undefined.
    #[error("Negative cycle reachable through vertex {0}")]
    NegativeCycle(usize),

    /// Configuration could not be extracted or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type alias for arbor operations.
pub type Result<T> = std::result::Result<T, Error>;

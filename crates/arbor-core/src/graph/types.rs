//! Graph value types shared by every representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A weighted edge oriented from `source` to `target`.
///
/// Edges returned by [`Graph::edges`](super::Graph::edges) are always oriented
/// away from the queried vertex, including edges of undirected graphs.
///
/// # Example
///
/// ```rust
/// use arbor_core::graph::Edge;
///
/// let edge = Edge::new(2, 4, 6.0);
/// assert_eq!(edge.source(), 2);
/// assert_eq!(edge.target(), 4);
/// assert_eq!(edge.reversed(), Edge::new(4, 2, 6.0));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f32,
}

impl Edge {
    /// Creates a new edge.
    #[must_use]
    pub fn new(source: usize, target: usize, weight: f32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the target vertex.
    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Returns the same edge pointing the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.target, self.source, self.weight)
    }

    /// Returns true if this edge is a self loop.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} ({})", self.source, self.target, self.weight)
    }
}

impl FromStr for Edge {
    type Err = Error;

    /// Parses `"<source>,<target>,<weight>"`, e.g. `"0,1,7"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidEdge(s.to_string());
        let mut parts = s.split(',').map(str::trim);
        let source = parts
            .next()
            .and_then(|p| p.parse::<usize>().ok())
            .ok_or_else(invalid)?;
        let target = parts
            .next()
            .and_then(|p| p.parse::<usize>().ok())
            .ok_or_else(invalid)?;
        let weight = parts
            .next()
            .and_then(|p| p.parse::<f32>().ok())
            .ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(source, target, weight))
    }
}

/// Storage strategy backing a [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Representation {
    /// Flat list of edges, no declared vertex set.
    #[default]
    EdgeList,
    /// Dense `V x V` weight table.
    #[serde(alias = "matrix")]
    AdjacencyMatrix,
    /// One edge list per vertex.
    #[serde(alias = "list")]
    AdjacencyList,
}

impl Representation {
    /// Canonical kebab-case name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::EdgeList => "edge-list",
            Representation::AdjacencyMatrix => "adjacency-matrix",
            Representation::AdjacencyList => "adjacency-list",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "edge-list" | "edges" => Ok(Representation::EdgeList),
            "adjacency-matrix" | "matrix" => Ok(Representation::AdjacencyMatrix),
            "adjacency-list" | "list" => Ok(Representation::AdjacencyList),
            other => Err(Error::UnknownRepresentation(other.to_string())),
        }
    }
}

/// Returns true if `weight` can be stored as an edge weight.
pub(crate) fn is_storable_weight(weight: f32) -> bool {
    weight.is_finite()
}

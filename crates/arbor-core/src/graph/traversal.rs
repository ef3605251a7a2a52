//! Graph traversal algorithms (DFS/BFS) over any [`Graph`].
//!
//! Each algorithm hands visited vertices to a caller-supplied sink, in the
//! order they are reached. Sibling order follows [`Graph::edges`]. A start
//! vertex the graph does not contain produces no output.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::storage::Graph;

/// Which traversal [`traverse`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    /// Recursive depth-first search.
    #[serde(alias = "dfs")]
    DepthFirstRecursive,
    /// Depth-first search with an explicit stack. Same order as the recursive
    /// variant, without a call-stack limit on deep graphs.
    #[default]
    #[serde(alias = "dfs-iterative")]
    DepthFirstIterative,
    /// Breadth-first search with a FIFO queue.
    #[serde(alias = "bfs")]
    BreadthFirst,
}

impl TraversalOrder {
    /// Short CLI name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalOrder::DepthFirstRecursive => "dfs",
            TraversalOrder::DepthFirstIterative => "dfs-iterative",
            TraversalOrder::BreadthFirst => "bfs",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraversalOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dfs" | "depth-first-recursive" => Ok(TraversalOrder::DepthFirstRecursive),
            "dfs-iterative" | "depth-first-iterative" => Ok(TraversalOrder::DepthFirstIterative),
            "bfs" | "breadth-first" => Ok(TraversalOrder::BreadthFirst),
            other => Err(Error::UnknownTraversalOrder(other.to_string())),
        }
    }
}

/// Recursive depth-first traversal from `start`.
///
/// `visited` is the accumulator shared across recursive calls. Vertices already
/// in it are skipped, so a pre-seeded set excludes those vertices (and
/// everything only reachable through them).
///
/// Recursion depth equals the longest simple path explored; prefer
/// [`depth_first_iterative`] for very deep graphs.
pub fn depth_first_recursive<G, F>(
    graph: &G,
    start: usize,
    visited: &mut HashSet<usize>,
    visit: &mut F,
) where
    G: Graph + ?Sized,
    F: FnMut(usize),
{
    if graph.contains_vertex(start) {
        visit_recursive(graph, start, visited, visit);
    }
}

/// Recursive step of [`depth_first_recursive`]; `vertex` is known to exist.
fn visit_recursive<G, F>(graph: &G, vertex: usize, visited: &mut HashSet<usize>, visit: &mut F)
where
    G: Graph + ?Sized,
    F: FnMut(usize),
{
    if !visited.insert(vertex) {
        return;
    }
    tracing::trace!(vertex, "dfs visit");
    visit(vertex);

    for edge in graph.edges(vertex) {
        if !visited.contains(&edge.target()) {
            visit_recursive(graph, edge.target(), visited, visit);
        }
    }
}

/// Iterative depth-first traversal from `start`.
///
/// Neighbors are pushed in reverse so they pop in `edges` order, and a vertex
/// is marked when popped. Together these yield exactly the order of
/// [`depth_first_recursive`].
pub fn depth_first_iterative<G, F>(graph: &G, start: usize, mut visit: F)
where
    G: Graph + ?Sized,
    F: FnMut(usize),
{
    if !graph.contains_vertex(start) {
        return;
    }
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        tracing::trace!(vertex = current, "dfs visit");
        visit(current);

        // Notice the reverse order.
        for edge in graph.edges(current).iter().rev() {
            if !visited.contains(&edge.target()) {
                stack.push(edge.target());
            }
        }
    }
    tracing::debug!(start, visited = visited.len(), "dfs iterative complete");
}

/// Breadth-first traversal from `start`.
///
/// Vertices are marked when enqueued, so each is emitted once.
pub fn breadth_first<G, F>(graph: &G, start: usize, mut visit: F)
where
    G: Graph + ?Sized,
    F: FnMut(usize),
{
    if !graph.contains_vertex(start) {
        return;
    }
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        tracing::trace!(vertex = current, "bfs visit");
        visit(current);

        for edge in graph.edges(current) {
            if visited.insert(edge.target()) {
                queue.push_back(edge.target());
            }
        }
    }
    tracing::debug!(start, visited = visited.len(), "bfs complete");
}

/// Runs the selected traversal and collects the visit order.
///
/// # Example
///
/// ```rust
/// use arbor_core::graph::{traverse, AdjacencyList, Graph, TraversalOrder};
///
/// let mut graph = AdjacencyList::new(3, true).unwrap();
/// graph.set_edge(0, 2, 1.0);
/// graph.set_edge(0, 1, 1.0);
///
/// assert_eq!(traverse(&graph, 0, TraversalOrder::BreadthFirst), vec![0, 2, 1]);
/// assert!(traverse(&graph, 7, TraversalOrder::DepthFirstRecursive).is_empty());
/// ```
#[must_use]
pub fn traverse<G>(graph: &G, start: usize, order: TraversalOrder) -> Vec<usize>
where
    G: Graph + ?Sized,
{
    let mut result = Vec::new();
    match order {
        TraversalOrder::DepthFirstRecursive => {
            let mut visited = HashSet::new();
            depth_first_recursive(graph, start, &mut visited, &mut |v| result.push(v));
            tracing::debug!(start, visited = visited.len(), "dfs recursive complete");
        }
        TraversalOrder::DepthFirstIterative => {
            depth_first_iterative(graph, start, |v| result.push(v));
        }
        TraversalOrder::BreadthFirst => breadth_first(graph, start, |v| result.push(v)),
    }
    result
}

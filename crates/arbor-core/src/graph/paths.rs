//! Path finding and shortest-path algorithms over any [`Graph`].
//!
//! - [`find_path`]: fewest-edges path (BFS)
//! - [`has_cycle`]: cycle detection (DFS)
//! - [`dijkstra`]: single source, non-negative weights
//! - [`bellman_ford`]: single source, negative weights allowed
//! - [`floyd_warshall`]: all pairs
//!
//! Distance tables are sized by [`Graph::vertex_bound`]. A source outside the
//! graph reaches nothing, so every distance is `None`.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, VecDeque};

use crate::error::{Error, Result};

use super::storage::Graph;
use super::types::Edge;

/// Fewest-edges path from `from` to `to`, both endpoints included.
///
/// Returns `None` when `to` is unreachable or either vertex is unknown.
#[must_use]
pub fn find_path<G>(graph: &G, from: usize, to: usize) -> Option<Vec<usize>>
where
    G: Graph + ?Sized,
{
    if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
        return None;
    }
    if from == to {
        return Some(vec![from]);
    }

    let mut came_from: HashMap<usize, usize> = HashMap::new();
    let mut queue = VecDeque::from([from]);
    came_from.insert(from, from);

    while let Some(current) = queue.pop_front() {
        for edge in graph.edges(current) {
            let next = edge.target();
            if came_from.contains_key(&next) {
                continue;
            }
            came_from.insert(next, current);
            if next == to {
                return Some(unwind(&came_from, from, to));
            }
            queue.push_back(next);
        }
    }
    None
}

fn unwind(came_from: &HashMap<usize, usize>, from: usize, to: usize) -> Vec<usize> {
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        current = came_from[&current];
        path.push(current);
    }
    path.reverse();
    path
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// One vertex on the explicit DFS stack of [`has_cycle`].
struct Frame {
    vertex: usize,
    parent: Option<usize>,
    next: usize,
    parent_edge_skipped: bool,
}

impl Frame {
    fn new(vertex: usize, parent: Option<usize>) -> Self {
        Self {
            vertex,
            parent,
            next: 0,
            parent_edge_skipped: false,
        }
    }
}

/// Returns true if the graph contains a cycle.
///
/// Directed graphs look for a back edge to a vertex on the current DFS path.
/// Undirected graphs ignore the single edge leading back to the DFS parent,
/// so only self loops, parallel edges and genuine cycles count.
///
/// Targets are bucketed from one [`Graph::all_edges`] pass, so the walk is
/// O(V + E) whatever the representation. Indices the graph does not contain
/// have no edges and finish immediately.
#[must_use]
pub fn has_cycle<G>(graph: &G) -> bool
where
    G: Graph + ?Sized,
{
    let bound = graph.vertex_bound();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); bound];
    for edge in graph.all_edges() {
        if let Some(targets) = adjacency.get_mut(edge.source()) {
            targets.push(edge.target());
        }
    }
    let mut color = vec![Color::White; bound];

    for root in 0..bound {
        if color[root] != Color::White {
            continue;
        }
        color[root] = Color::Gray;
        let mut stack = vec![Frame::new(root, None)];

        while let Some(frame) = stack.last_mut() {
            let Some(&target) = adjacency[frame.vertex].get(frame.next) else {
                color[frame.vertex] = Color::Black;
                stack.pop();
                continue;
            };
            frame.next += 1;

            if !graph.is_directed() && Some(target) == frame.parent {
                if frame.parent_edge_skipped {
                    return true;
                }
                frame.parent_edge_skipped = true;
                continue;
            }
            match color.get(target).copied() {
                Some(Color::Gray) => return true,
                Some(Color::White) => {
                    color[target] = Color::Gray;
                    let vertex = frame.vertex;
                    stack.push(Frame::new(target, Some(vertex)));
                }
                _ => {}
            }
        }
    }
    false
}

/// Single-source shortest distances and the tree of predecessors.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Option<f32>>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    fn unreached(source: usize, bound: usize) -> Self {
        Self {
            source,
            distances: vec![None; bound],
            predecessors: vec![None; bound],
        }
    }

    /// Returns the source vertex.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Distance from the source to `vertex`, `None` if unreachable.
    #[must_use]
    pub fn distance(&self, vertex: usize) -> Option<f32> {
        self.distances.get(vertex).copied().flatten()
    }

    /// All distances indexed by vertex.
    #[must_use]
    pub fn distances(&self) -> &[Option<f32>] {
        &self.distances
    }

    /// Vertex sequence from the source to `target`, `None` if unreachable.
    #[must_use]
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Min-heap entry ordered by accumulated distance.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    vertex: usize,
    distance: f32,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Dijkstra's algorithm from `source`.
///
/// # Errors
///
/// Returns `Error::NegativeWeight` if an edge with a negative weight is
/// reachable from `source`.
pub fn dijkstra<G>(graph: &G, source: usize) -> Result<ShortestPaths>
where
    G: Graph + ?Sized,
{
    let bound = graph.vertex_bound();
    let mut paths = ShortestPaths::unreached(source, bound);
    if !graph.contains_vertex(source) || source >= bound {
        return Ok(paths);
    }

    let mut settled = vec![false; bound];
    let mut heap = BinaryHeap::new();
    paths.distances[source] = Some(0.0);
    heap.push(Reverse(HeapEntry {
        vertex: source,
        distance: 0.0,
    }));

    while let Some(Reverse(HeapEntry { vertex, distance })) = heap.pop() {
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;

        for edge in graph.edges(vertex) {
            if edge.weight() < 0.0 {
                return Err(Error::NegativeWeight {
                    source_vertex: edge.source(),
                    target: edge.target(),
                    weight: edge.weight(),
                });
            }
            let target = edge.target();
            let candidate = distance + edge.weight();
            if paths.distances[target].is_none_or(|d| candidate < d) {
                paths.distances[target] = Some(candidate);
                paths.predecessors[target] = Some(vertex);
                heap.push(Reverse(HeapEntry {
                    vertex: target,
                    distance: candidate,
                }));
            }
        }
    }

    tracing::debug!(
        source,
        reached = settled.iter().filter(|s| **s).count(),
        "dijkstra complete"
    );
    Ok(paths)
}

/// Bellman-Ford from `source`; tolerates negative weights.
///
/// # Errors
///
/// Returns `Error::NegativeCycle` if a negative cycle is reachable from `source`.
pub fn bellman_ford<G>(graph: &G, source: usize) -> Result<ShortestPaths>
where
    G: Graph + ?Sized,
{
    let bound = graph.vertex_bound();
    let mut paths = ShortestPaths::unreached(source, bound);
    if !graph.contains_vertex(source) || source >= bound {
        return Ok(paths);
    }

    let edges = graph.all_edges();
    paths.distances[source] = Some(0.0);

    for _ in 1..bound {
        if !relax_all(&edges, &mut paths) {
            break;
        }
    }

    for edge in &edges {
        if let Some(d) = paths.distances[edge.source()] {
            if paths.distances[edge.target()].is_none_or(|t| d + edge.weight() < t) {
                return Err(Error::NegativeCycle(edge.target()));
            }
        }
    }

    tracing::debug!(source, edges = edges.len(), "bellman-ford complete");
    Ok(paths)
}

/// One relaxation pass; returns true if any distance improved.
fn relax_all(edges: &[Edge], paths: &mut ShortestPaths) -> bool {
    let mut changed = false;
    for edge in edges {
        let Some(d) = paths.distances[edge.source()] else {
            continue;
        };
        let candidate = d + edge.weight();
        if paths.distances[edge.target()].is_none_or(|t| candidate < t) {
            paths.distances[edge.target()] = Some(candidate);
            paths.predecessors[edge.target()] = Some(edge.source());
            changed = true;
        }
    }
    changed
}

/// All-pairs shortest distances.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Option<f32>>,
}

impl DistanceMatrix {
    /// Number of vertices covered (rows and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shortest distance from `from` to `to`, `None` if unreachable.
    #[must_use]
    pub fn distance(&self, from: usize, to: usize) -> Option<f32> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.cells[from * self.size + to]
    }
}

/// Floyd-Warshall all-pairs shortest paths.
///
/// Every vertex in `0..vertex_bound()` that the graph contains is at distance
/// zero from itself.
///
/// # Errors
///
/// Returns `Error::NegativeCycle` if any vertex can reach itself with a
/// negative total weight.
pub fn floyd_warshall<G>(graph: &G) -> Result<DistanceMatrix>
where
    G: Graph + ?Sized,
{
    let size = graph.vertex_bound();
    let mut cells = vec![None; size * size];

    for from in 0..size {
        if graph.contains_vertex(from) {
            cells[from * size + from] = Some(0.0_f32);
        }
        for edge in graph.edges(from) {
            let cell = &mut cells[from * size + edge.target()];
            if cell.is_none_or(|w| edge.weight() < w) {
                *cell = Some(edge.weight());
            }
        }
    }

    for via in 0..size {
        for from in 0..size {
            let Some(head) = cells[from * size + via] else {
                continue;
            };
            for to in 0..size {
                let Some(tail) = cells[via * size + to] else {
                    continue;
                };
                let candidate = head + tail;
                let cell = &mut cells[from * size + to];
                if cell.is_none_or(|d| candidate < d) {
                    *cell = Some(candidate);
                }
            }
        }
    }

    if let Some(vertex) = (0..size).find(|&v| cells[v * size + v].is_some_and(|d| d < 0.0)) {
        return Err(Error::NegativeCycle(vertex));
    }

    tracing::debug!(size, "floyd-warshall complete");
    Ok(DistanceMatrix { size, cells })
}

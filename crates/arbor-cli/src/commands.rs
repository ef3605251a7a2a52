//! Command execution.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use arbor_core::graph::{bellman_ford, dijkstra, find_path, has_cycle, traverse};
use arbor_core::tree::traversal;
use arbor_core::{build_graph, ArborConfig, BinarySearchTree, Edge, Graph, Tree};

use crate::cli::{
    BstArgs, BstOrder, Command, GraphArgs, GraphCommand, PathAlgorithm, TreeCommand,
};

/// Runs `command`, writing results to `out`.
pub fn run(command: Command, config: &ArborConfig, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Graph { command } => run_graph(command, config, out),
        Command::Bst(args) => run_bst(&args, out),
        Command::Tree {
            command: TreeCommand::Demo,
        } => run_tree_demo(out),
        Command::Config => {
            write!(out, "{}", config.to_toml()?)?;
            Ok(())
        }
    }
}

fn run_graph(command: GraphCommand, config: &ArborConfig, out: &mut impl Write) -> Result<()> {
    match command {
        GraphCommand::Traverse {
            graph,
            start,
            order,
        } => {
            let graph = load_graph(&graph, config)?;
            let order = order.unwrap_or(config.traversal.order);
            let visited = traverse(graph.as_ref(), start, order);
            writeln!(out, "{}", join(&visited))?;
        }
        GraphCommand::Print { graph } => {
            write!(out, "{}", load_graph(&graph, config)?)?;
        }
        GraphCommand::Path {
            graph,
            from,
            to,
            algorithm,
        } => {
            let graph = load_graph(&graph, config)?;
            let found = match algorithm {
                PathAlgorithm::Bfs => find_path(graph.as_ref(), from, to).map(|path| (path, None)),
                PathAlgorithm::Dijkstra => {
                    let paths = dijkstra(graph.as_ref(), from)?;
                    paths.path_to(to).map(|path| (path, paths.distance(to)))
                }
                PathAlgorithm::BellmanFord => {
                    let paths = bellman_ford(graph.as_ref(), from)?;
                    paths.path_to(to).map(|path| (path, paths.distance(to)))
                }
            };
            match found {
                Some((path, Some(distance))) => {
                    writeln!(out, "{} (distance {distance})", join(&path))?;
                }
                Some((path, None)) => writeln!(out, "{}", join(&path))?,
                None => writeln!(out, "no path from {from} to {to}")?,
            }
        }
        GraphCommand::Cycle { graph } => {
            let graph = load_graph(&graph, config)?;
            let verdict = if has_cycle(graph.as_ref()) {
                "cycle"
            } else {
                "acyclic"
            };
            writeln!(out, "{verdict}")?;
        }
    }
    Ok(())
}

/// Builds a graph from `--edge` values and an optional edges file.
fn load_graph(args: &GraphArgs, config: &ArborConfig) -> Result<Box<dyn Graph>> {
    let mut edges = args.edges.clone();
    if let Some(path) = &args.edges_file {
        edges.extend(read_edges_file(path)?);
    }

    let representation = args.representation.unwrap_or(config.graph.representation);
    let directed = config.graph.directed && !args.undirected;
    let vertex_count = match args.vertices.or(config.graph.vertex_count) {
        Some(count) => count,
        None => {
            let bound = edges
                .iter()
                .map(|e| e.source().max(e.target()).saturating_add(1))
                .max()
                .unwrap_or(0);
            i64::try_from(bound).context("vertex count does not fit in i64")?
        }
    };

    let mut graph = build_graph(representation, vertex_count, directed)?;
    for edge in &edges {
        graph.set_edge(edge.source(), edge.target(), edge.weight());
    }
    tracing::info!(
        %representation,
        vertex_count,
        directed,
        edges = edges.len(),
        "graph loaded"
    );
    Ok(graph)
}

fn read_edges_file(path: &Path) -> Result<Vec<Edge>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read edges file {}", path.display()))?;
    let edges = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse edges file {}", path.display()))?;
    Ok(edges)
}

fn run_bst(args: &BstArgs, out: &mut impl Write) -> Result<()> {
    let mut tree: BinarySearchTree = args.insert.iter().copied().collect();
    for &value in &args.delete {
        if tree.delete(value).is_none() {
            tracing::warn!(value, "bst: value not found, nothing deleted");
        }
    }

    let mut values = Vec::with_capacity(tree.len());
    match args.order {
        BstOrder::In => tree.in_order(|v| values.push(v)),
        BstOrder::Pre => tree.depth_first(|v| values.push(v)),
        BstOrder::Bfs => tree.breadth_first(|v| values.push(v)),
    }
    writeln!(out, "{}", join(&values))?;
    Ok(())
}

fn run_tree_demo(out: &mut impl Write) -> Result<()> {
    let tree = sample_tree();
    let root = tree.root();

    let mut pre = Vec::new();
    traversal::pre_order(&tree, root, &mut |v| pre.push(v));
    let mut within = Vec::new();
    traversal::in_order(&tree, root, &mut |v| within.push(v));
    let mut post = Vec::new();
    traversal::post_order(&tree, root, &mut |v| post.push(v));
    let mut iterative = Vec::new();
    traversal::depth_first_iterative(&tree, root, |v| iterative.push(v));
    let mut levels = Vec::new();
    traversal::breadth_first(&tree, root, |v| levels.push(v));

    writeln!(out, "pre-order: {}", join(&pre))?;
    writeln!(out, "in-order: {}", join(&within))?;
    writeln!(out, "post-order: {}", join(&post))?;
    writeln!(out, "depth-first: {}", join(&iterative))?;
    writeln!(out, "breadth-first: {}", join(&levels))?;
    Ok(())
}

/// 1 -> {2, 3 -> {5, 6, 7}, 4 -> {8, 9}}
fn sample_tree() -> Tree {
    let mut tree = Tree::new(1);
    let root = tree.root();
    tree.add_child(root, 2);
    for (value, children) in [(3, &[5, 6, 7][..]), (4, &[8, 9][..])] {
        if let Some(node) = tree.add_child(root, value) {
            for &child in children {
                tree.add_child(node, child);
            }
        }
    }
    tree
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

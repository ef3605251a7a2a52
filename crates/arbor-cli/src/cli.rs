//! Command-line arguments.

use std::path::PathBuf;

use arbor_core::{Edge, Representation, TraversalOrder};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Arbor - build graphs and trees, print their traversals
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "ARBOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter directive (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a weighted graph and run an algorithm on it
    Graph {
        #[command(subcommand)]
        command: GraphCommand,
    },
    /// Build a binary search tree and print it
    Bst(BstArgs),
    /// N-ary tree utilities
    Tree {
        #[command(subcommand)]
        command: TreeCommand,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Subcommand, Debug)]
pub enum GraphCommand {
    /// Print the vertices reached from a start vertex
    Traverse {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start vertex
        #[arg(long)]
        start: usize,

        /// dfs, dfs-iterative or bfs (defaults to the configured order)
        #[arg(long)]
        order: Option<TraversalOrder>,
    },
    /// Print the graph's storage
    Print {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Find a path between two vertices
    Path {
        #[command(flatten)]
        graph: GraphArgs,

        #[arg(long)]
        from: usize,

        #[arg(long)]
        to: usize,

        #[arg(long, value_enum, default_value_t = PathAlgorithm::Bfs)]
        algorithm: PathAlgorithm,
    },
    /// Report whether the graph contains a cycle
    Cycle {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

/// Options shared by every graph command.
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Edge as <source>,<target>,<weight>; repeatable
    #[arg(long = "edge", value_name = "A,B,W", allow_negative_numbers = true)]
    pub edges: Vec<Edge>,

    /// JSON file holding an array of {source, target, weight}
    #[arg(long)]
    pub edges_file: Option<PathBuf>,

    /// edge-list, matrix or list (defaults to the configured representation)
    #[arg(long)]
    pub representation: Option<Representation>,

    /// Vertex count for matrix and list (defaults to one past the largest endpoint)
    #[arg(long, allow_negative_numbers = true)]
    pub vertices: Option<i64>,

    /// Mirror every edge
    #[arg(long)]
    pub undirected: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PathAlgorithm {
    /// Fewest edges
    Bfs,
    /// Lowest total weight, non-negative weights only
    Dijkstra,
    /// Lowest total weight, negative weights allowed
    BellmanFord,
}

#[derive(Args, Debug)]
pub struct BstArgs {
    /// Values to insert, in order
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    pub insert: Vec<i32>,

    /// Values to delete after insertion
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub delete: Vec<i32>,

    #[arg(long, value_enum, default_value_t = BstOrder::In)]
    pub order: BstOrder,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BstOrder {
    /// Sorted
    In,
    /// Pre-order, iterative
    Pre,
    /// Level by level
    Bfs,
}

#[derive(Subcommand, Debug)]
pub enum TreeCommand {
    /// Build the sample tree 1 -> {2, 3 -> {5, 6, 7}, 4 -> {8, 9}} and print every order
    Demo,
}

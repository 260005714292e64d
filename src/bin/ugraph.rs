//! CLI entry point for the `ugraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use undigraph::cli::commands;
use undigraph::graph::Discipline;

#[derive(Parser)]
#[command(
    name = "ugraph",
    about = "undigraph CLI — undirected graph traversal and analysis"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the vertex and edge lists
    Show {
        /// Number of vertices
        #[arg(long)]
        vertices: usize,
        /// Comma-separated edge list, e.g. 0-1,1-2
        #[arg(long, default_value = "")]
        edges: String,
    },
    /// Traverse from a starting vertex and print the visitation order
    Traverse {
        /// Number of vertices
        #[arg(long)]
        vertices: usize,
        /// Comma-separated edge list, e.g. 0-1,1-2
        #[arg(long, default_value = "")]
        edges: String,
        /// Starting vertex index
        #[arg(long)]
        start: usize,
        /// Traversal order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        order: String,
    },
    /// Test whether every vertex is reachable from vertex 0
    Connected {
        /// Number of vertices
        #[arg(long)]
        vertices: usize,
        /// Comma-separated edge list, e.g. 0-1,1-2
        #[arg(long, default_value = "")]
        edges: String,
    },
    /// Extract the spanning tree of vertex 0's component
    SpanningTree {
        /// Number of vertices
        #[arg(long)]
        vertices: usize,
        /// Comma-separated edge list, e.g. 0-1,1-2
        #[arg(long, default_value = "")]
        edges: String,
    },
}

fn parse_edges_or_exit(list: &str) -> Vec<(usize, usize)> {
    match commands::parse_edges(list) {
        Some(edges) => edges,
        None => {
            eprintln!("Invalid edge list: {}", list);
            process::exit(3);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Show { vertices, edges } => {
            let edges = parse_edges_or_exit(&edges);
            commands::cmd_show(vertices, &edges, json)
        }
        Commands::Traverse {
            vertices,
            edges,
            start,
            order,
        } => {
            let edges = parse_edges_or_exit(&edges);
            let discipline = match order.as_str() {
                "bfs" => Discipline::Fifo,
                "dfs" => Discipline::Lifo,
                _ => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(vertices, &edges, start, discipline, json)
        }
        Commands::Connected { vertices, edges } => {
            let edges = parse_edges_or_exit(&edges);
            commands::cmd_connected(vertices, &edges, json)
        }
        Commands::SpanningTree { vertices, edges } => {
            let edges = parse_edges_or_exit(&edges);
            commands::cmd_spanning_tree(vertices, &edges, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            undigraph::GraphError::InvalidVertexIndex { .. } => 4,
        };
        process::exit(code);
    }
}

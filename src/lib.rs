//! undigraph — in-memory undirected graph over a fixed vertex set.
//!
//! Stores undirected connections as symmetric half-edge pairs and provides
//! breadth-first traversal, depth-first traversal, connectivity testing, and
//! spanning-tree extraction, all built on one shared search primitive.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    breadth_first, depth_first, is_connected, spanning_tree, Discipline, GraphBuilder, Traversal,
    UndirectedGraph,
};
pub use types::{GraphError, GraphResult, HalfEdge, Vertex};

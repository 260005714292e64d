//! In-memory graph operations — the core data structure.

pub mod analysis;
pub mod builder;
pub mod traversal;
pub mod undirected;

pub use analysis::{is_connected, spanning_tree};
pub use builder::GraphBuilder;
pub use traversal::{breadth_first, depth_first, search, Discipline, Traversal};
pub use undirected::UndirectedGraph;

//! The vertex type.

use serde::Serialize;

/// A vertex of the graph, identified solely by its index.
///
/// Vertices are created once, at graph construction, in index order; they are
/// never added or removed afterward and carry no data beyond the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Vertex(pub usize);

impl Vertex {
    /// The vertex's index in `[0, vertex_count)`.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

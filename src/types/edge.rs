//! The half-edge type.

use serde::Serialize;

/// One direction of an undirected connection.
///
/// Undirected edges are always stored as two half-edges: whenever `(a, b)` is
/// present in a graph's edge list, `(b, a)` is present as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HalfEdge {
    /// Index of the vertex this half-edge leaves.
    pub from: usize,
    /// Index of the vertex this half-edge enters.
    pub to: usize,
}

impl HalfEdge {
    /// Create a new half-edge.
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// The opposite half of the same undirected connection.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl std::fmt::Display for HalfEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

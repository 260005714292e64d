//! Core graph structure — fixed vertex set + symmetric half-edge list.

use log::debug;

use crate::types::{GraphError, GraphResult, HalfEdge, Vertex};

/// An undirected, simple graph over a fixed set of vertices.
///
/// Every undirected connection is stored as two half-edges, `(a, b)` and
/// `(b, a)`, appended together. The half-edge list keeps insertion order;
/// that order is what traversals scan, so it determines the tie-break among
/// multiple unvisited neighbors and the rendering order.
#[derive(Debug)]
pub struct UndirectedGraph {
    /// Fixed at construction; vertices are the indices `0..vertex_count`.
    vertex_count: usize,
    /// All half-edges, in insertion order.
    edges: Vec<HalfEdge>,
}

impl UndirectedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of stored half-edges (two per undirected connection).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All half-edges, in insertion order.
    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.edges
    }

    /// All vertices, in index order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.vertex_count).map(Vertex)
    }

    /// Whether the half-edge `(from, to)` is stored.
    pub fn contains_half_edge(&self, from: usize, to: usize) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }

    pub(crate) fn check_vertex(&self, index: usize) -> GraphResult<()> {
        if index >= self.vertex_count {
            return Err(GraphError::InvalidVertexIndex {
                index,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    /// Add the undirected connection between `a` and `b`.
    ///
    /// Validates both indices before any mutation. If the `(a, b)` half-edge
    /// is already stored this is a no-op; only that direction is checked,
    /// insertion always appends both halves together.
    pub fn add_edge(&mut self, a: usize, b: usize) -> GraphResult<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;

        if self.contains_half_edge(a, b) {
            return Ok(());
        }

        self.edges.push(HalfEdge::new(a, b));
        self.edges.push(HalfEdge::new(b, a));
        debug!("added edge {} <-> {}", a, b);
        Ok(())
    }

    /// Remove the undirected connection between `a` and `b`.
    ///
    /// Validates both indices, then removes the `(a, b)` half-edge if stored
    /// and the `(b, a)` half-edge if stored, as two independent searches.
    /// Removing an absent edge is a silent no-op. If only one half is stored,
    /// only that half is removed; symmetry is not restored here.
    pub fn remove_edge(&mut self, a: usize, b: usize) -> GraphResult<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;

        if let Some(pos) = self.edges.iter().position(|e| e.from == a && e.to == b) {
            self.edges.remove(pos);
            debug!("removed half-edge {} -> {}", a, b);
        }
        if let Some(pos) = self.edges.iter().position(|e| e.from == b && e.to == a) {
            self.edges.remove(pos);
            debug!("removed half-edge {} -> {}", b, a);
        }
        Ok(())
    }
}

impl std::fmt::Display for UndirectedGraph {
    /// Deterministic listing: vertices in index order, then half-edges in
    /// storage order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Vertices:")?;
        for vertex in self.vertices() {
            writeln!(f, "  {}", vertex)?;
        }
        writeln!(f, "Edges:")?;
        for edge in &self.edges {
            writeln!(f, "  {}", edge)?;
        }
        Ok(())
    }
}

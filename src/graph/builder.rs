//! Fluent API for building UndirectedGraph instances.

use crate::types::GraphResult;

use super::UndirectedGraph;

/// Fluent builder for constructing an UndirectedGraph.
///
/// Edge endpoints are validated at `build` time, when the vertex count is
/// known, through the graph's own `add_edge`.
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

impl GraphBuilder {
    /// Create a new builder with no vertices.
    pub fn new() -> Self {
        Self {
            vertex_count: 0,
            edges: Vec::new(),
        }
    }

    /// Create a new builder with a specific vertex count.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Set the vertex count.
    pub fn vertices(&mut self, vertex_count: usize) -> &mut Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Queue an undirected edge between `a` and `b`.
    pub fn edge(&mut self, a: usize, b: usize) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    /// Build the final UndirectedGraph.
    pub fn build(self) -> GraphResult<UndirectedGraph> {
        let mut graph = UndirectedGraph::new(self.vertex_count);
        for (a, b) in self.edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

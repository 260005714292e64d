//! Connectivity testing and spanning-tree extraction.

use super::traversal::{walk, Discipline};
use super::UndirectedGraph;

/// Whether every vertex is reachable from vertex 0.
///
/// A zero-vertex graph counts as connected: zero vertices were visited and
/// zero exist.
pub fn is_connected(graph: &UndirectedGraph) -> bool {
    if graph.vertex_count() == 0 {
        return true;
    }
    let traversal = walk(graph, 0, Discipline::Fifo);
    traversal.order.len() == graph.vertex_count()
}

/// Extract the spanning tree of the component containing vertex 0.
///
/// Runs a breadth-first search from vertex 0 and adds every discovery edge
/// to a fresh graph with the same vertex count. On a connected source the
/// result is a single spanning tree with `vertex_count - 1` undirected
/// edges. On a disconnected source only vertex 0's component is spanned;
/// vertices of other components stay isolated in the result.
pub fn spanning_tree(graph: &UndirectedGraph) -> UndirectedGraph {
    let mut tree = UndirectedGraph::new(graph.vertex_count());
    if graph.vertex_count() == 0 {
        return tree;
    }

    let traversal = walk(graph, 0, Discipline::Fifo);
    for edge in &traversal.tree_edges {
        tree.add_edge(edge.from, edge.to)
            .expect("discovery edges stay within the shared vertex range");
    }
    tree
}

//! Graph traversal — one search primitive shared by every analysis operation.

use std::collections::VecDeque;

use log::debug;

use crate::types::{GraphResult, HalfEdge};

use super::UndirectedGraph;

/// Order in which pending vertices leave the search agenda.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// First in, first out — breadth-first order.
    Fifo,
    /// Last in, first out — iterative depth-first order.
    Lifo,
}

/// Result of a search from a starting vertex.
#[derive(Debug, Clone)]
pub struct Traversal {
    /// Visited vertex indices, in visitation order.
    pub order: Vec<usize>,
    /// The half-edge through which each vertex after the start was first
    /// discovered, in discovery order.
    pub tree_edges: Vec<HalfEdge>,
}

/// Search the graph from `start` under the given agenda discipline.
///
/// The start vertex is marked visited up front. Each step takes the next
/// pending vertex from the agenda, records it, and scans the half-edge list
/// in stored order; every half-edge leaving the current vertex toward an
/// unvisited neighbor marks that neighbor and pushes it. Marking happens at
/// discovery time, so no vertex enters the agenda twice and the search
/// visits each reachable vertex exactly once.
pub fn search(
    graph: &UndirectedGraph,
    start: usize,
    discipline: Discipline,
) -> GraphResult<Traversal> {
    graph.check_vertex(start)?;
    Ok(walk(graph, start, discipline))
}

/// The search loop proper; callers have already validated `start`.
pub(crate) fn walk(graph: &UndirectedGraph, start: usize, discipline: Discipline) -> Traversal {
    let mut visited = vec![false; graph.vertex_count()];
    let mut order = Vec::new();
    let mut tree_edges = Vec::new();
    let mut agenda: VecDeque<usize> = VecDeque::new();

    visited[start] = true;
    agenda.push_back(start);

    while let Some(current) = match discipline {
        Discipline::Fifo => agenda.pop_front(),
        Discipline::Lifo => agenda.pop_back(),
    } {
        order.push(current);

        for edge in graph.half_edges() {
            if edge.from == current && !visited[edge.to] {
                visited[edge.to] = true;
                tree_edges.push(*edge);
                agenda.push_back(edge.to);
            }
        }
    }

    debug!(
        "{:?} search from {} visited {} of {} vertices",
        discipline,
        start,
        order.len(),
        graph.vertex_count()
    );

    Traversal { order, tree_edges }
}

/// Breadth-first traversal from `start`.
pub fn breadth_first(graph: &UndirectedGraph, start: usize) -> GraphResult<Traversal> {
    search(graph, start, Discipline::Fifo)
}

/// Depth-first traversal from `start`.
///
/// The LIFO agenda is one shared stack for the whole search, not per-branch
/// recursion: neighbors of a popped vertex are pushed in edge-scan order, so
/// the most recently scanned unvisited neighbor is visited next.
pub fn depth_first(graph: &UndirectedGraph, start: usize) -> GraphResult<Traversal> {
    search(graph, start, Discipline::Lifo)
}

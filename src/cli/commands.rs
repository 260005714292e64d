//! CLI command implementations.

use crate::graph::{is_connected, search, spanning_tree, Discipline, UndirectedGraph};
use crate::types::GraphResult;

/// Parse a comma-separated edge list such as `0-1,1-2,2-3`.
///
/// An empty or all-whitespace list is valid and yields no edges. Returns
/// `None` when any pair is malformed.
pub fn parse_edges(list: &str) -> Option<Vec<(usize, usize)>> {
    if list.trim().is_empty() {
        return Some(Vec::new());
    }
    list.split(',')
        .map(|pair| {
            let (a, b) = pair.trim().split_once('-')?;
            Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
        })
        .collect()
}

/// Build the ephemeral graph described on the command line.
pub fn build_graph(vertices: usize, edges: &[(usize, usize)]) -> GraphResult<UndirectedGraph> {
    let mut graph = UndirectedGraph::new(vertices);
    for &(a, b) in edges {
        graph.add_edge(a, b)?;
    }
    Ok(graph)
}

/// Render the vertex and edge lists.
pub fn cmd_show(vertices: usize, edges: &[(usize, usize)], json: bool) -> GraphResult<()> {
    let graph = build_graph(vertices, edges)?;

    if json {
        let info = serde_json::json!({
            "vertices": graph.vertex_count(),
            "half_edges": graph.half_edges(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", graph);
    }
    Ok(())
}

/// Traverse from a starting vertex and print the visitation order.
pub fn cmd_traverse(
    vertices: usize,
    edges: &[(usize, usize)],
    start: usize,
    discipline: Discipline,
    json: bool,
) -> GraphResult<()> {
    let graph = build_graph(vertices, edges)?;
    let traversal = search(&graph, start, discipline)?;

    if json {
        println!(
            "{}",
            serde_json::json!({"start": start, "order": traversal.order})
        );
    } else {
        for vertex in &traversal.order {
            println!("Visited vertex {}", vertex);
        }
    }
    Ok(())
}

/// Report whether every vertex is reachable from vertex 0.
pub fn cmd_connected(vertices: usize, edges: &[(usize, usize)], json: bool) -> GraphResult<()> {
    let graph = build_graph(vertices, edges)?;
    let connected = is_connected(&graph);

    if json {
        println!("{}", serde_json::json!({"connected": connected}));
    } else if connected {
        println!("Connected");
    } else {
        println!("Not connected");
    }
    Ok(())
}

/// Extract and render the spanning tree of vertex 0's component.
pub fn cmd_spanning_tree(vertices: usize, edges: &[(usize, usize)], json: bool) -> GraphResult<()> {
    let graph = build_graph(vertices, edges)?;
    let tree = spanning_tree(&graph);

    if json {
        let info = serde_json::json!({
            "vertices": tree.vertex_count(),
            "half_edges": tree.half_edges(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        print!("{}", tree);
    }
    Ok(())
}

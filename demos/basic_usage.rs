//! Build a small graph and run every analysis operation on it.

use undigraph::*;

fn main() -> GraphResult<()> {
    // Triangle 0-1-2, bridge 2-3, then a tail 3-4-5
    let mut builder = GraphBuilder::with_vertices(6);
    builder.edge(0, 1).edge(1, 2).edge(2, 0);
    builder.edge(2, 3);
    builder.edge(3, 4).edge(4, 5);
    let graph = builder.build()?;

    print!("{}", graph);

    let bfs = breadth_first(&graph, 0)?;
    println!("Breadth-first from 0: {:?}", bfs.order);

    let dfs = depth_first(&graph, 0)?;
    println!("Depth-first from 0:   {:?}", dfs.order);

    println!("Connected: {}", is_connected(&graph));

    let tree = spanning_tree(&graph);
    println!(
        "Spanning tree has {} undirected edges:",
        tree.edge_count() / 2
    );
    print!("{}", tree);

    Ok(())
}

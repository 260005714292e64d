//! Criterion benchmarks for undigraph.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use undigraph::graph::{breadth_first, depth_first, is_connected, spanning_tree, UndirectedGraph};

/// Wire a random graph with a spine so every vertex is reachable from 0.
fn make_random_graph(vertex_count: usize, extra_edges: usize) -> UndirectedGraph {
    let mut rng = rand::thread_rng();
    let mut graph = UndirectedGraph::new(vertex_count);

    for i in 1..vertex_count {
        graph.add_edge(i - 1, i).unwrap();
    }

    for _ in 0..extra_edges {
        let a = rng.gen_range(0..vertex_count);
        let b = rng.gen_range(0..vertex_count);
        if a != b {
            graph.add_edge(a, b).unwrap();
        }
    }

    graph
}

fn bench_traversal(c: &mut Criterion) {
    let graph = make_random_graph(500, 1000);

    c.bench_function("bfs_500_vertices", |b| {
        b.iter(|| breadth_first(black_box(&graph), 0).unwrap())
    });

    c.bench_function("dfs_500_vertices", |b| {
        b.iter(|| depth_first(black_box(&graph), 0).unwrap())
    });
}

fn bench_analysis(c: &mut Criterion) {
    let graph = make_random_graph(500, 1000);

    c.bench_function("is_connected_500_vertices", |b| {
        b.iter(|| is_connected(black_box(&graph)))
    });

    c.bench_function("spanning_tree_500_vertices", |b| {
        b.iter(|| spanning_tree(black_box(&graph)))
    });
}

fn bench_mutation(c: &mut Criterion) {
    c.bench_function("add_remove_edge_200_vertices", |b| {
        let mut graph = make_random_graph(200, 400);
        b.iter(|| {
            graph.add_edge(0, 199).unwrap();
            graph.remove_edge(0, 199).unwrap();
        })
    });
}

criterion_group!(benches, bench_traversal, bench_analysis, bench_mutation);
criterion_main!(benches);

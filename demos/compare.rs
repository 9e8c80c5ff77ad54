//! Build a small graph, run both MST algorithms, and compare their output
//! and running time.

use std::time::Instant;

use rand::prelude::*;
use spanner::{total_weight, Boruvka, Graph, Kruskal, MstAlgorithm};

fn print_mst(algorithm: &dyn MstAlgorithm, graph: &Graph) {
    let mst = algorithm.spanning_tree(graph);
    println!("=== {} ===", algorithm.name());
    for edge in &mst {
        println!("  {} -- {} (weight: {})", edge.u, edge.v, edge.weight);
    }
    println!("  total weight: {}\n", total_weight(&mst));
}

fn time_mst(algorithm: &dyn MstAlgorithm, graph: &Graph, runs: u32) {
    let start = Instant::now();
    for _ in 0..runs {
        algorithm.spanning_tree(graph);
    }
    let average = start.elapsed() / runs;
    println!("  {:8} average over {} runs: {:?}", algorithm.name(), runs, average);
}

fn main() {
    // Six-vertex graph with some edges inserted from both endpoints.
    let graph = Graph::from_edges(
        6,
        [
            (0, 1, 4),
            (0, 2, 4),
            (1, 2, 2),
            (1, 0, 4),
            (2, 0, 4),
            (2, 1, 2),
            (2, 3, 3),
            (2, 5, 2),
            (2, 4, 4),
            (3, 2, 3),
            (3, 4, 3),
            (4, 2, 4),
            (4, 3, 3),
            (5, 2, 2),
            (5, 4, 3),
        ],
    )
    .expect("all endpoints are in range");

    println!("=== Comparing MST construction algorithms ===\n");
    print_mst(&Kruskal::new(), &graph);
    print_mst(&Boruvka::new(), &graph);

    // Timing comparison on a larger random graph: a spanning chain keeps it
    // connected, the rest is uniform noise.
    let vertices = 5_000;
    let mut rng = StdRng::seed_from_u64(7);
    let mut large = Graph::new(vertices);
    for v in 1..vertices {
        large
            .add_edge(v - 1, v, rng.random_range(1..1_000))
            .expect("chain endpoints are in range");
    }
    for _ in 0..40_000 {
        let u = rng.random_range(0..vertices);
        let v = rng.random_range(0..vertices);
        large
            .add_edge(u, v, rng.random_range(1..1_000))
            .expect("random endpoints are in range");
    }

    println!(
        "=== Timing ({} vertices, {} edges) ===",
        large.vertex_count(),
        large.edge_count()
    );
    time_mst(&Kruskal::new(), &large, 10);
    time_mst(&Boruvka::new(), &large, 10);
}

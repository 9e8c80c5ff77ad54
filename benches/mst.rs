use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use spanner::{Boruvka, Graph, Kruskal, MstAlgorithm};

/// Connected random graph: a spanning chain plus `extra_edges` random edges.
fn random_graph(vertices: usize, extra_edges: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(vertices);

    for v in 1..vertices {
        graph
            .add_edge(v - 1, v, rng.random_range(1..1_000))
            .unwrap();
    }
    for _ in 0..extra_edges {
        let u = rng.random_range(0..vertices);
        let v = rng.random_range(0..vertices);
        graph.add_edge(u, v, rng.random_range(1..1_000)).unwrap();
    }

    graph
}

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");

    let graph = random_graph(1_000, 8_000, 42);

    group.bench_function("kruskal_v1000_e9000", |b| {
        b.iter(|| Kruskal::new().spanning_tree(black_box(&graph)))
    });
    group.bench_function("boruvka_v1000_e9000", |b| {
        b.iter(|| Boruvka::new().spanning_tree(black_box(&graph)))
    });

    group.finish();
}

criterion_group!(benches, bench_mst);
criterion_main!(benches);

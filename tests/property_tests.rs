use proptest::prelude::*;
use spanner::{total_weight, Boruvka, Edge, Graph, Kruskal, MstAlgorithm, UnionFind};

fn edges_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, i32)>> {
    prop::collection::vec((0..n, 0..n, -50i32..50), 0..64)
}

fn component_count(graph: &Graph) -> usize {
    let mut uf = UnionFind::new(graph.vertex_count());
    let mut components = graph.vertex_count();
    for edge in graph.edges() {
        if uf.unite(edge.u, edge.v) {
            components -= 1;
        }
    }
    components
}

/// Unioning a forest's edges never hits an already-merged pair.
fn is_forest(vertex_count: usize, edges: &[Edge]) -> bool {
    let mut uf = UnionFind::new(vertex_count);
    edges.iter().all(|edge| uf.unite(edge.u, edge.v))
}

proptest! {
    #[test]
    fn prop_builders_agree_on_total_weight(
        (n, edges) in (1usize..32).prop_flat_map(|n| (Just(n), edges_strategy(n)))
    ) {
        let graph = Graph::from_edges(n, edges).unwrap();
        let kruskal = Kruskal::new().spanning_tree(&graph);
        let boruvka = Boruvka::new().spanning_tree(&graph);

        prop_assert_eq!(total_weight(&kruskal), total_weight(&boruvka));
    }

    #[test]
    fn prop_forest_size_is_vertices_minus_components(
        (n, edges) in (1usize..32).prop_flat_map(|n| (Just(n), edges_strategy(n)))
    ) {
        let graph = Graph::from_edges(n, edges).unwrap();
        let expected = n - component_count(&graph);

        prop_assert_eq!(Kruskal::new().spanning_tree(&graph).len(), expected);
        prop_assert_eq!(Boruvka::new().spanning_tree(&graph).len(), expected);
    }

    #[test]
    fn prop_results_are_acyclic(
        (n, edges) in (1usize..32).prop_flat_map(|n| (Just(n), edges_strategy(n)))
    ) {
        let graph = Graph::from_edges(n, edges).unwrap();

        prop_assert!(is_forest(n, &Kruskal::new().spanning_tree(&graph)));
        prop_assert!(is_forest(n, &Boruvka::new().spanning_tree(&graph)));
    }

    #[test]
    fn prop_builders_are_deterministic(
        (n, edges) in (1usize..32).prop_flat_map(|n| (Just(n), edges_strategy(n)))
    ) {
        let graph = Graph::from_edges(n, edges).unwrap();

        prop_assert_eq!(
            Kruskal::new().spanning_tree(&graph),
            Kruskal::new().spanning_tree(&graph)
        );
        prop_assert_eq!(
            Boruvka::new().spanning_tree(&graph),
            Boruvka::new().spanning_tree(&graph)
        );
    }

    // Permuting the edge list may change which edge wins an equal-weight tie,
    // but never the resulting total weight.
    #[test]
    fn prop_total_weight_invariant_under_edge_permutation(
        (n, edges, shuffled) in (1usize..24).prop_flat_map(|n| {
            edges_strategy(n).prop_flat_map(move |edges| {
                let shuffled = Just(edges.clone()).prop_shuffle();
                (Just(n), Just(edges), shuffled)
            })
        })
    ) {
        let original = Graph::from_edges(n, edges).unwrap();
        let permuted = Graph::from_edges(n, shuffled).unwrap();

        prop_assert_eq!(
            total_weight(&Kruskal::new().spanning_tree(&original)),
            total_weight(&Kruskal::new().spanning_tree(&permuted))
        );
        prop_assert_eq!(
            total_weight(&Boruvka::new().spanning_tree(&original)),
            total_weight(&Boruvka::new().spanning_tree(&permuted))
        );
    }
}

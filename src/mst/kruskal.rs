//! Kruskal's minimum spanning tree algorithm.
//!
//! # The Algorithm (Kruskal, 1956)
//!
//! Sort all edges by weight ascending, then scan them in order, accepting an
//! edge whenever its endpoints lie in different components and discarding it
//! otherwise. A union-find structure answers the component test in near-O(1)
//! amortized time.
//!
//! Correctness rests on the cut property: the lightest edge crossing any cut
//! belongs to some MST, and processing edges in non-decreasing weight order
//! with cycle rejection realizes this inductively.
//!
//! ## Complexity
//!
//! - **Time**: O(E log E) for the sort; the scan is O(E α(V)).
//! - **Space**: O(E) for the sorted copy, O(V) for the union-find.
//!
//! ## Determinism
//!
//! The sort is stable, so equal-weight edges keep their insertion order and
//! repeated runs on the same graph produce identical edge sequences.

use super::graph::{Edge, Graph};
use super::traits::MstAlgorithm;
use super::union_find::UnionFind;

/// Kruskal's algorithm: global edge sort plus union-find cycle rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kruskal;

impl Kruskal {
    /// Create a Kruskal MST builder.
    pub fn new() -> Self {
        Self
    }
}

impl MstAlgorithm for Kruskal {
    fn spanning_tree(&self, graph: &Graph) -> Vec<Edge> {
        let target = graph.vertex_count().saturating_sub(1);

        let mut sorted = graph.edges().to_vec();
        sorted.sort_by_key(|edge| edge.weight);

        let mut dsu = UnionFind::new(graph.vertex_count());
        let mut result = Vec::with_capacity(target);

        for edge in sorted {
            if dsu.same_set(edge.u, edge.v) {
                continue;
            }
            dsu.unite(edge.u, edge.v);
            result.push(edge);

            // A spanning tree has vertex_count - 1 edges; anything after
            // that in the sorted order can only form cycles.
            if result.len() == target {
                break;
            }
        }

        result
    }

    fn name(&self) -> &'static str {
        "kruskal"
    }
}

//! Boruvka's minimum spanning tree algorithm.
//!
//! # The Algorithm (Boruvka, 1926)
//!
//! Boruvka's algorithm proceeds in rounds. Every round:
//!
//! 1. Scan the full edge list once and record, for each live component, the
//!    cheapest edge leaving it (an edge whose endpoints resolve to different
//!    components).
//! 2. Apply the recorded candidates: for each component whose candidate still
//!    crosses two components, accept the edge and merge them. A candidate can
//!    go stale within the round, because an earlier merge in the same pass may
//!    already have joined its endpoints.
//!
//! Each round at least halves the number of components, so there are at most
//! O(log V) rounds. Correctness follows the same cut-property argument as
//! Kruskal's algorithm, applied per component per round instead of through a
//! globally sorted order.
//!
//! ## Complexity
//!
//! - **Time**: O(E log V), an O(E) scan per round over O(log V) rounds.
//! - **Space**: O(V) for the candidate table and the union-find.
//!
//! ## Why keep it next to Kruskal?
//!
//! Boruvka trades Kruskal's global sort for repeated linear scans. The
//! per-component cheapest-edge search inside a round is independent across
//! components, which is what makes the algorithm a natural parallelization
//! candidate; the implementation here is the sequential reference form.
//!
//! ## Determinism
//!
//! Within a round the scan preserves edge-list order and candidates are only
//! replaced by strictly cheaper edges, so among equal-weight ties the first
//! edge encountered wins. Candidates are then applied in component-root
//! order. Repeated runs on the same graph produce identical edge sequences.
//! Note the tie-break differs from Kruskal's (first in scan order per
//! component, not first in the globally sorted order), so the two builders
//! may pick different equal-weight edges while agreeing on total weight.

use super::graph::{Edge, Graph};
use super::traits::MstAlgorithm;
use super::union_find::UnionFind;

/// Boruvka's algorithm: round-based cheapest-edge component merging.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boruvka;

impl Boruvka {
    /// Create a Boruvka MST builder.
    pub fn new() -> Self {
        Self
    }
}

impl MstAlgorithm for Boruvka {
    fn spanning_tree(&self, graph: &Graph) -> Vec<Edge> {
        let n = graph.vertex_count();
        let mut dsu = UnionFind::new(n);
        let mut result = Vec::new();
        let mut live_components = n;

        while live_components > 1 {
            // Cheapest outgoing edge per component root for this round.
            let mut cheapest: Vec<Option<Edge>> = vec![None; n];

            for &edge in graph.edges() {
                let ru = dsu.find(edge.u);
                let rv = dsu.find(edge.v);
                if ru == rv {
                    continue;
                }
                for root in [ru, rv] {
                    // Strict comparison: the first edge encountered keeps
                    // its slot among equal-weight ties.
                    match cheapest[root] {
                        Some(best) if best.weight <= edge.weight => {}
                        _ => cheapest[root] = Some(edge),
                    }
                }
            }

            // Apply candidates in component-root order.
            let mut accepted_any = false;
            for edge in cheapest.into_iter().flatten() {
                // An earlier candidate in this pass may already have merged
                // these two components.
                if dsu.same_set(edge.u, edge.v) {
                    continue;
                }
                dsu.unite(edge.u, edge.v);
                result.push(edge);
                live_components -= 1;
                accepted_any = true;
            }

            // A round with no acceptable edge means the remaining components
            // have no edges between them: the graph is disconnected and the
            // result is a spanning forest.
            if !accepted_any {
                break;
            }
        }

        result
    }

    fn name(&self) -> &'static str {
        "boruvka"
    }
}

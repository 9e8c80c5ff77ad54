use super::graph::{Edge, Graph};

/// Common interface for minimum spanning tree algorithms.
pub trait MstAlgorithm {
    /// Compute a minimum spanning tree of `graph`.
    ///
    /// For a connected graph the result contains exactly `vertex_count - 1`
    /// edges. For a disconnected graph it is a minimum spanning forest, one
    /// tree per connected component, with `vertex_count - components` edges.
    /// Edges are returned in acceptance order.
    ///
    /// Builders never fail: endpoint validation happens when the [`Graph`]
    /// is built, and empty or disconnected inputs are valid.
    fn spanning_tree(&self, graph: &Graph) -> Vec<Edge>;

    /// Short lowercase name, used to label benchmark and demo output.
    fn name(&self) -> &'static str;
}

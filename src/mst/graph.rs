//! Graph model: a vertex count plus a flat edge list.

use crate::error::{Error, Result};

/// A weighted undirected edge.
///
/// `(u, v, w)` and `(v, u, w)` denote the same edge. The graph does not
/// deduplicate, so parallel and duplicate edges may coexist in the edge list;
/// the spanning tree builders tolerate them (once one copy is accepted, the
/// rest are rejected as cycles).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// One endpoint.
    pub u: usize,
    /// The other endpoint.
    pub v: usize,
    /// Edge weight.
    pub weight: i32,
}

/// A weighted undirected graph.
///
/// Vertices are identified by integers in `[0, vertex_count)`. Edge endpoints
/// are validated on insertion, so a successfully built `Graph` never hands an
/// out-of-range index to the spanning tree builders. Builders only read the
/// graph; it is immutable from their point of view.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Build a graph from an edge list given as `(u, v, weight)` tuples.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, i32)>,
    ) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Append an undirected edge.
    ///
    /// Fails with [`Error::VertexOutOfRange`] if either endpoint is not in
    /// `[0, vertex_count)`.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: i32) -> Result<()> {
        for vertex in [u, v] {
            if vertex >= self.vertex_count {
                return Err(Error::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.edges.push(Edge { u, v, weight });
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edge list in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

/// Sum the weights of an edge set.
///
/// Both builders must agree on this value for the same connected graph.
/// The accumulator is an `i64` so that summing any number of `i32` weights
/// that fits in memory cannot wrap.
pub fn total_weight(edges: &[Edge]) -> i64 {
    edges.iter().map(|e| i64::from(e.weight)).sum()
}

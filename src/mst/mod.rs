//! Minimum spanning tree algorithms over weighted undirected graphs.
//!
//! This module provides two independent MST builders plus the pieces they
//! share: the graph model, a union-find structure, and a weight summation
//! helper.
//!
//! ## Algorithms (implemented)
//!
//! ### Kruskal
//!
//! Sort every edge by weight, then greedily accept edges that connect two
//! different components, using union-find to reject cycles. One global
//! O(E log E) sort dominates the running time.
//!
//! ### Boruvka
//!
//! Repeatedly find, for every live component, the cheapest edge leaving it,
//! and merge components along those edges. No sort: O(log V) rounds of O(E)
//! scans, and the per-component search inside a round is independent across
//! components.
//!
//! Both builders are deterministic, tolerate duplicate/parallel edges, and
//! degrade to a minimum spanning forest on disconnected input. They share no
//! state: each call builds its own fresh [`UnionFind`] and discards it.
//!
//! ## Usage
//!
//! ```rust
//! use spanner::{total_weight, Boruvka, Graph, Kruskal, MstAlgorithm};
//!
//! let graph = Graph::from_edges(4, [
//!     (0, 1, 1),
//!     (1, 2, 2),
//!     (2, 3, 1),
//!     (0, 3, 4),
//! ]).unwrap();
//!
//! let kruskal = Kruskal::new().spanning_tree(&graph);
//! let boruvka = Boruvka::new().spanning_tree(&graph);
//!
//! assert_eq!(kruskal.len(), 3); // spanning tree: vertex_count - 1 edges
//! assert_eq!(total_weight(&kruskal), 4);
//! assert_eq!(total_weight(&kruskal), total_weight(&boruvka));
//! ```

mod boruvka;
mod graph;
mod kruskal;
mod traits;
mod union_find;

pub use boruvka::Boruvka;
pub use graph::{total_weight, Edge, Graph};
pub use kruskal::Kruskal;
pub use traits::MstAlgorithm;
pub use union_find::UnionFind;

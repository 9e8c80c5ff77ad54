//! Minimum spanning tree construction.
//!
//! `spanner` is a small library for building minimum spanning trees (and, for
//! disconnected inputs, minimum spanning forests) of weighted undirected graphs.
//!
//! The primary public API is under [`mst`], which provides:
//! - Kruskal's algorithm (global edge sort, union-find cycle rejection)
//! - Boruvka's algorithm (round-based cheapest-edge component merging)

#![forbid(unsafe_code)]

pub mod error;
pub mod mst;

pub use error::{Error, Result};
pub use mst::{total_weight, Boruvka, Edge, Graph, Kruskal, MstAlgorithm, UnionFind};

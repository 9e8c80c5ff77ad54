use thiserror::Error;

/// Errors returned by graph construction in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge endpoint lies outside the graph's vertex range.
    #[error("vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex identifier.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;

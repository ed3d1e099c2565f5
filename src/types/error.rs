//! Error types for the graph-queries library.

use thiserror::Error;

/// All errors that can occur while building, loading or printing graphs.
///
/// The queries themselves are total: an absent start yields a trivial result
/// rather than an error.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex ID not part of the graph.
    #[error("Vertex ID {0} not found")]
    VertexNotFound(usize),

    /// A vertex lists a neighbor index that does not exist.
    #[error("Vertex {vertex} references invalid neighbor index {neighbor}")]
    InvalidNeighbor { vertex: usize, neighbor: usize },

    /// The same airport code was declared twice.
    #[error("Duplicate airport code: {0}")]
    DuplicateAirport(String),

    /// A flight points at an airport code that was never declared.
    #[error("Unknown airport code: {0}")]
    UnknownAirport(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph-queries operations.
pub type GraphResult<T> = Result<T, GraphError>;

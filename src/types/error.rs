//! Error types for the undigraph library.

use thiserror::Error;

/// All errors that can occur in the undigraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex index outside the graph's fixed range was supplied.
    #[error("Invalid vertex index {index} (graph has {vertex_count} vertices)")]
    InvalidVertexIndex { index: usize, vertex_count: usize },
}

/// Convenience result type for undigraph operations.
pub type GraphResult<T> = Result<T, GraphError>;

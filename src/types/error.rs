//! Error types for the graph-walk library.

use thiserror::Error;

/// All errors that can occur when building or reading a walk.
///
/// Vertex and edge values are captured through their `Debug` rendering so
/// the error does not carry the graph's identifier types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalkError {
    /// A constructor was called with arguments that cannot describe a walk.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// No edge joins two consecutive vertices of the walk.
    #[error("No edge connects {from} to {to} (step {position})")]
    NoConnectingEdge {
        position: usize,
        from: String,
        to: String,
    },

    /// An edge is unknown to the graph or does not touch the current vertex.
    #[error("Edge {edge} is not incident to vertex {vertex} (step {position})")]
    NotIncident {
        position: usize,
        edge: String,
        vertex: String,
    },

    /// An edge sequence cannot be walked without knowing where it starts.
    #[error("Edge sequence of length {0} has no start vertex")]
    MissingStartVertex(usize),

    /// Two walks cannot be joined because they do not meet.
    #[error("Walk ending at {end} cannot be extended by a walk starting at {start}")]
    Disconnected { end: String, start: String },

    /// Two walks are defined over different graphs.
    #[error("Walks are defined over different graphs")]
    GraphMismatch,

    /// A stored endpoint disagrees with the walk's sequences.
    #[error("{endpoint} vertex mismatch: expected {expected}, found {found}")]
    EndpointMismatch {
        endpoint: &'static str,
        expected: String,
        found: String,
    },

    /// Stored vertex and edge sequences have incompatible lengths.
    #[error("Sequence length mismatch: {vertices} vertices for {edges} edges")]
    LengthMismatch { vertices: usize, edges: usize },

    /// Stored vertex and edge sequences describe different walks.
    #[error("Vertex sequence diverges from edge sequence at position {0}")]
    SequenceMismatch(usize),

    /// Vertex not present in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(u64),
}

/// Convenience result type for walk operations.
pub type WalkResult<T> = Result<T, WalkError>;

/// Render a vertex or edge for inclusion in an error.
pub(crate) fn describe<T: std::fmt::Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

//! Storage for the vertex and/or edge view of a walk.

use crate::types::{WalkError, WalkResult};

/// The views a walk was constructed with. At least one is always present.
#[derive(Debug, Clone, PartialEq)]
pub enum WalkSequences<V, E> {
    /// Only the vertex sequence `v0..vk`.
    Vertices(Vec<V>),
    /// Only the edge sequence `e0..e(k-1)`.
    Edges(Vec<E>),
    /// Both views of the same walk.
    Both { vertices: Vec<V>, edges: Vec<E> },
}

impl<V, E> WalkSequences<V, E> {
    /// Combine two optional sequences. Fails if both are absent.
    pub fn from_options(vertices: Option<Vec<V>>, edges: Option<Vec<E>>) -> WalkResult<Self> {
        match (vertices, edges) {
            (Some(vertices), Some(edges)) => Ok(Self::Both { vertices, edges }),
            (Some(vertices), None) => Ok(Self::Vertices(vertices)),
            (None, Some(edges)) => Ok(Self::Edges(edges)),
            (None, None) => Err(WalkError::InvalidArgument(
                "vertex sequence and edge sequence cannot both be absent",
            )),
        }
    }

    /// The stored vertex sequence, if any.
    pub fn vertices(&self) -> Option<&[V]> {
        match self {
            Self::Vertices(vertices) | Self::Both { vertices, .. } => Some(vertices.as_slice()),
            Self::Edges(_) => None,
        }
    }

    /// The stored edge sequence, if any.
    pub fn edges(&self) -> Option<&[E]> {
        match self {
            Self::Edges(edges) | Self::Both { edges, .. } => Some(edges.as_slice()),
            Self::Vertices(_) => None,
        }
    }

    /// Number of edges implied by the stored views.
    pub fn edge_count(&self) -> usize {
        match self {
            Self::Edges(edges) | Self::Both { edges, .. } => edges.len(),
            Self::Vertices(vertices) => vertices.len().saturating_sub(1),
        }
    }

    /// Split into the two optional sequences.
    pub fn into_options(self) -> (Option<Vec<V>>, Option<Vec<E>>) {
        match self {
            Self::Vertices(vertices) => (Some(vertices), None),
            Self::Edges(edges) => (None, Some(edges)),
            Self::Both { vertices, edges } => (Some(vertices), Some(edges)),
        }
    }
}

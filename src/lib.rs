//! graph-walk: a light-weight walk type for graph algorithms.
//!
//! A [`Walk`] is the alternating sequence `v0, e0, v1, ..., vk` reported by
//! shortest-path solvers, cycle detectors and tour constructors. It stores
//! the vertex view, the edge view, or both, and derives whichever is missing
//! from the graph it borrows. Graphs take part through the small
//! [`WalkGraph`] trait.

pub mod graph;
pub mod types;
pub mod walk;

// Re-export commonly used types at the crate root
pub use graph::{AdjacencyGraph, EdgeId, EdgeRecord, GraphBuilder, VertexId, WalkGraph};
pub use types::{WalkError, WalkResult};
pub use walk::{CachedWalk, Walk, WalkSequences};

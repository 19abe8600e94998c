//! Minimal read interface a graph must expose for walks to be derived over it.

use std::fmt::Debug;

/// Incidence queries consumed by [`Walk`](crate::walk::Walk).
///
/// Walks never mutate the graph and only ever ask these questions, so any
/// graph representation can back a walk by implementing this trait.
pub trait WalkGraph {
    /// Vertex identifier.
    type Vertex: Clone + PartialEq + Debug;
    /// Edge identifier.
    type Edge: Clone + Debug;

    /// Return some edge from `source` to `target`, if one exists.
    ///
    /// On a multigraph the choice among parallel edges is left to the
    /// implementation. Undirected graphs must accept either orientation.
    fn edge_connecting(&self, source: &Self::Vertex, target: &Self::Vertex) -> Option<Self::Edge>;

    /// Return the endpoint of `edge` opposite `vertex`.
    ///
    /// A self-loop returns `vertex` itself. Returns `None` when the edge is
    /// unknown or `vertex` is not one of its endpoints.
    fn opposite(&self, edge: &Self::Edge, vertex: &Self::Vertex) -> Option<Self::Vertex>;

    /// Whether edges are traversable in one direction only.
    fn is_directed(&self) -> bool;
}

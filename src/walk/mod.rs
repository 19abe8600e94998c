//! Walks: dual vertex/edge views of a traversal through a graph.

pub mod cached;
pub mod derive;
pub mod graph_walk;
pub mod ops;
pub mod sequences;

pub use cached::CachedWalk;
pub use derive::{edges_from_vertices, vertices_from_edges};
pub use graph_walk::Walk;
pub use sequences::WalkSequences;

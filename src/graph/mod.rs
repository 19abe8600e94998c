//! Graph collaborators that walks are defined over.

pub mod adjacency_graph;
pub mod builder;
pub mod incidence;
#[cfg(feature = "petgraph")]
pub mod petgraph_adapter;

pub use adjacency_graph::{AdjacencyGraph, EdgeId, EdgeRecord, VertexId};
pub use builder::GraphBuilder;
pub use incidence::WalkGraph;

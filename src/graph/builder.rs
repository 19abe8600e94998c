//! Fluent API for building AdjacencyGraph instances.

use crate::types::WalkResult;

use super::{AdjacencyGraph, EdgeId, VertexId};

/// Fluent builder for constructing an [`AdjacencyGraph`].
///
/// Edges may name vertices that are added later; endpoints are only checked
/// by [`build`](GraphBuilder::build).
pub struct GraphBuilder {
    directed: bool,
    vertices: Vec<VertexId>,
    edges: Vec<(VertexId, VertexId, f64)>,
}

impl GraphBuilder {
    /// Start a directed graph.
    pub fn directed() -> Self {
        Self {
            directed: true,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Start an undirected graph.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex.
    pub fn add_vertex(&mut self, vertex: VertexId) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Add several vertices.
    pub fn add_vertices<I>(&mut self, vertices: I) -> &mut Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        self.vertices.extend(vertices);
        self
    }

    /// Add an edge and return the id it will have in the built graph.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: f64) -> EdgeId {
        let id = self.edges.len() as EdgeId;
        self.edges.push((source, target, weight));
        id
    }

    /// Add an edge, chaining.
    pub fn link(&mut self, source: VertexId, target: VertexId, weight: f64) -> &mut Self {
        self.add_edge(source, target, weight);
        self
    }

    /// Build the final graph.
    pub fn build(self) -> WalkResult<AdjacencyGraph> {
        AdjacencyGraph::from_parts(self.directed, self.vertices, self.edges)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::undirected()
    }
}

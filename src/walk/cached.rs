//! A walk that remembers the views it derives.

use std::sync::OnceLock;

use crate::graph::WalkGraph;
use crate::types::WalkResult;

use super::derive::{edges_from_vertices, vertices_from_edges};
use super::Walk;

/// Wraps a [`Walk`] and computes each missing view at most once.
///
/// The results are the same as asking the inner walk; only the cost of
/// repeated access changes. Safe to share between threads when the graph is.
pub struct CachedWalk<'g, G: WalkGraph + ?Sized> {
    walk: Walk<'g, G>,
    vertices: OnceLock<Vec<G::Vertex>>,
    edges: OnceLock<Vec<G::Edge>>,
}

impl<'g, G: WalkGraph + ?Sized> CachedWalk<'g, G> {
    pub fn new(walk: Walk<'g, G>) -> Self {
        Self {
            walk,
            vertices: OnceLock::new(),
            edges: OnceLock::new(),
        }
    }

    /// The wrapped walk.
    pub fn walk(&self) -> &Walk<'g, G> {
        &self.walk
    }

    pub fn into_inner(self) -> Walk<'g, G> {
        self.walk
    }

    /// The vertices of the walk, derived on first use if not stored.
    pub fn vertex_list(&self) -> WalkResult<&[G::Vertex]> {
        if let Some(vertices) = self.walk.stored_vertices() {
            return Ok(vertices);
        }
        if let Some(vertices) = self.vertices.get() {
            return Ok(vertices.as_slice());
        }
        let derived = vertices_from_edges(
            self.walk.graph(),
            self.walk.start_vertex(),
            self.walk.end_vertex(),
            self.walk.stored_edges().unwrap_or(&[]),
        )?;
        Ok(self.vertices.get_or_init(|| derived).as_slice())
    }

    /// The edges of the walk, derived on first use if not stored.
    pub fn edge_list(&self) -> WalkResult<&[G::Edge]> {
        if let Some(edges) = self.walk.stored_edges() {
            return Ok(edges);
        }
        if let Some(edges) = self.edges.get() {
            return Ok(edges.as_slice());
        }
        let derived = edges_from_vertices(
            self.walk.graph(),
            self.walk.stored_vertices().unwrap_or(&[]),
        )?;
        Ok(self.edges.get_or_init(|| derived).as_slice())
    }

    pub fn length(&self) -> usize {
        self.walk.length()
    }

    pub fn weight(&self) -> f64 {
        self.walk.weight()
    }
}

impl<'g, G: WalkGraph + ?Sized> From<Walk<'g, G>> for CachedWalk<'g, G> {
    fn from(walk: Walk<'g, G>) -> Self {
        Self::new(walk)
    }
}

impl<'g, G: WalkGraph + ?Sized> Walk<'g, G> {
    /// Wrap this walk so derived views are computed once.
    pub fn cached(self) -> CachedWalk<'g, G> {
        CachedWalk::new(self)
    }
}

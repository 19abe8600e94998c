//! The walk value type.

use std::borrow::Cow;
use std::fmt;

use crate::graph::WalkGraph;
use crate::types::WalkResult;

use super::derive::{edges_from_vertices, vertices_from_edges};
use super::WalkSequences;

/// A walk `v0, e0, v1, e1, ..., e(k-1), vk` in a graph.
///
/// Edges may repeat and the start and end vertex may differ. A walk is a
/// light-weight holder for the output of some algorithm: nothing checks at
/// construction that the sequences actually form a walk in `graph`. Callers
/// that want that guarantee can ask for it with [`Walk::verify`].
///
/// The walk borrows the graph it is defined over and owns its sequences.
/// Whichever view was not supplied is derived from the graph on request.
pub struct Walk<'g, G: WalkGraph + ?Sized> {
    pub(super) graph: &'g G,
    pub(super) sequences: WalkSequences<G::Vertex, G::Edge>,
    pub(super) start_vertex: Option<G::Vertex>,
    pub(super) end_vertex: Option<G::Vertex>,
    pub(super) weight: f64,
}

impl<'g, G: WalkGraph + ?Sized> Walk<'g, G> {
    /// Create a walk from every field.
    ///
    /// Fails with [`WalkError::InvalidArgument`](crate::WalkError::InvalidArgument)
    /// when both sequences are absent. When both are given they must
    /// describe the same walk; this is not checked.
    pub fn new(
        graph: &'g G,
        start_vertex: Option<G::Vertex>,
        end_vertex: Option<G::Vertex>,
        vertices: Option<Vec<G::Vertex>>,
        edges: Option<Vec<G::Edge>>,
        weight: f64,
    ) -> WalkResult<Self> {
        let sequences = WalkSequences::from_options(vertices, edges).inspect_err(|e| {
            log::debug!("rejected walk construction: {}", e);
        })?;
        Ok(Self::from_sequences(
            graph,
            start_vertex,
            end_vertex,
            sequences,
            weight,
        ))
    }

    pub(crate) fn from_sequences(
        graph: &'g G,
        start_vertex: Option<G::Vertex>,
        end_vertex: Option<G::Vertex>,
        sequences: WalkSequences<G::Vertex, G::Edge>,
        weight: f64,
    ) -> Self {
        Self {
            graph,
            sequences,
            start_vertex,
            end_vertex,
            weight,
        }
    }

    /// Create a walk defined by its edges.
    ///
    /// Works on non-simple graphs: edges may repeat, and the endpoints are
    /// taken as given even if the edges happen to close a loop.
    pub fn from_edges(
        graph: &'g G,
        start_vertex: G::Vertex,
        end_vertex: G::Vertex,
        edges: Vec<G::Edge>,
        weight: f64,
    ) -> Self {
        Self::from_sequences(
            graph,
            Some(start_vertex),
            Some(end_vertex),
            WalkSequences::Edges(edges),
            weight,
        )
    }

    /// Create a walk defined by its vertices.
    ///
    /// The endpoints are the first and last vertex. The graph should be
    /// simple, otherwise the vertices do not pin down which parallel edge
    /// was taken.
    pub fn from_vertices(graph: &'g G, vertices: Vec<G::Vertex>, weight: f64) -> Self {
        let start_vertex = vertices.first().cloned();
        let end_vertex = vertices.last().cloned();
        Self::from_sequences(
            graph,
            start_vertex,
            end_vertex,
            WalkSequences::Vertices(vertices),
            weight,
        )
    }

    /// Create a walk from both views at once, so neither has to be derived.
    pub fn from_vertices_and_edges(
        graph: &'g G,
        start_vertex: G::Vertex,
        end_vertex: G::Vertex,
        vertices: Vec<G::Vertex>,
        edges: Vec<G::Edge>,
        weight: f64,
    ) -> Self {
        Self::from_sequences(
            graph,
            Some(start_vertex),
            Some(end_vertex),
            WalkSequences::Both { vertices, edges },
            weight,
        )
    }

    /// The walk with no vertices and no edges.
    pub fn empty(graph: &'g G) -> Self {
        Self::from_sequences(
            graph,
            None,
            None,
            WalkSequences::Both {
                vertices: Vec::new(),
                edges: Vec::new(),
            },
            0.0,
        )
    }

    /// A walk consisting of a single vertex and no edges.
    pub fn singleton(graph: &'g G, vertex: G::Vertex, weight: f64) -> Self {
        Self::from_sequences(
            graph,
            Some(vertex.clone()),
            Some(vertex.clone()),
            WalkSequences::Both {
                vertices: vec![vertex],
                edges: Vec::new(),
            },
            weight,
        )
    }

    /// The graph this walk is defined over.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn start_vertex(&self) -> Option<&G::Vertex> {
        self.start_vertex.as_ref()
    }

    pub fn end_vertex(&self) -> Option<&G::Vertex> {
        self.end_vertex.as_ref()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The views this walk was constructed with.
    pub fn sequences(&self) -> &WalkSequences<G::Vertex, G::Edge> {
        &self.sequences
    }

    /// The stored vertex sequence, without deriving it.
    pub fn stored_vertices(&self) -> Option<&[G::Vertex]> {
        self.sequences.vertices()
    }

    /// The stored edge sequence, without deriving it.
    pub fn stored_edges(&self) -> Option<&[G::Edge]> {
        self.sequences.edges()
    }

    /// The edges of the walk.
    ///
    /// Borrowed when stored; otherwise derived from the vertex sequence on
    /// every call by asking the graph for an edge between each pair of
    /// consecutive vertices.
    pub fn edge_list(&self) -> WalkResult<Cow<'_, [G::Edge]>> {
        match &self.sequences {
            WalkSequences::Edges(edges) | WalkSequences::Both { edges, .. } => {
                Ok(Cow::Borrowed(edges.as_slice()))
            }
            WalkSequences::Vertices(vertices) => {
                edges_from_vertices(self.graph, vertices).map(Cow::Owned)
            }
        }
    }

    /// The vertices of the walk.
    ///
    /// Borrowed when stored; otherwise derived on every call by following
    /// the edge sequence from the start vertex.
    pub fn vertex_list(&self) -> WalkResult<Cow<'_, [G::Vertex]>> {
        match &self.sequences {
            WalkSequences::Vertices(vertices) | WalkSequences::Both { vertices, .. } => {
                Ok(Cow::Borrowed(vertices.as_slice()))
            }
            WalkSequences::Edges(edges) => vertices_from_edges(
                self.graph,
                self.start_vertex.as_ref(),
                self.end_vertex.as_ref(),
                edges,
            )
            .map(Cow::Owned),
        }
    }

    /// Number of edges in the walk.
    pub fn length(&self) -> usize {
        self.sequences.edge_count()
    }

    /// Whether the walk has no vertices at all.
    pub fn is_empty(&self) -> bool {
        match self.sequences.vertices() {
            Some(vertices) => vertices.is_empty(),
            None => self.start_vertex.is_none(),
        }
    }
}

impl<G: WalkGraph + ?Sized> Clone for Walk<'_, G> {
    fn clone(&self) -> Self {
        Self {
            graph: self.graph,
            sequences: self.sequences.clone(),
            start_vertex: self.start_vertex.clone(),
            end_vertex: self.end_vertex.clone(),
            weight: self.weight,
        }
    }
}

impl<G: WalkGraph + ?Sized> fmt::Debug for Walk<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walk")
            .field("sequences", &self.sequences)
            .field("start_vertex", &self.start_vertex)
            .field("end_vertex", &self.end_vertex)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Renders the vertex sequence when stored, else the edge sequence, as `[a, b, c]`.
impl<G: WalkGraph + ?Sized> fmt::Display for Walk<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.sequences.vertices(), self.sequences.edges()) {
            (Some(vertices), _) => write_sequence(f, vertices),
            (None, Some(edges)) => write_sequence(f, edges),
            (None, None) => f.write_str("[]"),
        }
    }
}

fn write_sequence<T: fmt::Debug>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item:?}")?;
    }
    f.write_str("]")
}

//! In-memory multigraph with incidence indexes.

use std::collections::{HashMap, HashSet};

use crate::types::{WalkError, WalkResult};

use super::WalkGraph;

/// Vertex identifier used by [`AdjacencyGraph`].
pub type VertexId = u64;

/// Edge identifier used by [`AdjacencyGraph`]. Ids are dense, assigned in insertion order.
pub type EdgeId = u64;

/// A single edge of an [`AdjacencyGraph`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRecord {
    pub id: EdgeId,
    pub source: VertexId,
    pub target: VertexId,
    pub weight: f64,
}

impl EdgeRecord {
    /// Whether both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Directed or undirected multigraph. Parallel edges and self-loops are allowed.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    directed: bool,
    /// Vertices in insertion order.
    vertices: Vec<VertexId>,
    vertex_set: HashSet<VertexId>,
    /// All edges; `edges[i].id == i`.
    edges: Vec<EdgeRecord>,
    /// Vertex -> ids of edges leaving it (or touching it, when undirected).
    incidence: HashMap<VertexId, Vec<EdgeId>>,
}

impl AdjacencyGraph {
    fn empty(directed: bool) -> Self {
        Self {
            directed,
            vertices: Vec::new(),
            vertex_set: HashSet::new(),
            edges: Vec::new(),
            incidence: HashMap::new(),
        }
    }

    /// Create an empty directed graph.
    pub fn new_directed() -> Self {
        Self::empty(true)
    }

    /// Create an empty undirected graph.
    pub fn new_undirected() -> Self {
        Self::empty(false)
    }

    /// Create from pre-existing data (used by the builder).
    ///
    /// Edge ids are reassigned densely in the given order.
    pub fn from_parts(
        directed: bool,
        vertices: Vec<VertexId>,
        edges: Vec<(VertexId, VertexId, f64)>,
    ) -> WalkResult<Self> {
        let mut graph = Self::empty(directed);
        for v in vertices {
            graph.add_vertex(v);
        }
        for (source, target, weight) in edges {
            graph.add_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Add a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: VertexId) -> bool {
        if !self.vertex_set.insert(vertex) {
            return false;
        }
        self.vertices.push(vertex);
        self.incidence.entry(vertex).or_default();
        true
    }

    /// Add an edge between two existing vertices and return its id.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: f64) -> WalkResult<EdgeId> {
        for v in [source, target] {
            if !self.vertex_set.contains(&v) {
                return Err(WalkError::VertexNotFound(v));
            }
        }

        let id = self.edges.len() as EdgeId;
        self.edges.push(EdgeRecord {
            id,
            source,
            target,
            weight,
        });
        self.incidence.entry(source).or_default().push(id);
        if !self.directed && source != target {
            self.incidence.entry(target).or_default().push(id);
        }
        Ok(id)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// All edges, ordered by id.
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertex_set.contains(&vertex)
    }

    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edge(edge).is_some()
    }

    /// Get an edge by id.
    pub fn edge(&self, edge: EdgeId) -> Option<&EdgeRecord> {
        usize::try_from(edge).ok().and_then(|i| self.edges.get(i))
    }

    /// Iterate over every edge that leads from `source` to `target`, lowest id first.
    pub fn edges_between(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> impl Iterator<Item = &EdgeRecord> + '_ {
        let directed = self.directed;
        self.incidence
            .get(&source)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&id| self.edge(id))
            .filter(move |e| {
                (e.source == source && e.target == target)
                    || (!directed && e.source == target && e.target == source)
            })
    }

    /// Sum the weights of a sequence of edges.
    ///
    /// Returns `None` if any edge is not in the graph. Useful for callers that
    /// want a walk's weight to reflect the graph's edge weights.
    pub fn edge_weight_sum(&self, edges: &[EdgeId]) -> Option<f64> {
        edges
            .iter()
            .try_fold(0.0, |acc, &id| self.edge(id).map(|e| acc + e.weight))
    }
}

impl WalkGraph for AdjacencyGraph {
    type Vertex = VertexId;
    type Edge = EdgeId;

    fn edge_connecting(&self, source: &VertexId, target: &VertexId) -> Option<EdgeId> {
        self.edges_between(*source, *target).next().map(|e| e.id)
    }

    fn opposite(&self, edge: &EdgeId, vertex: &VertexId) -> Option<VertexId> {
        let record = self.edge(*edge)?;
        if record.source == *vertex {
            Some(record.target)
        } else if record.target == *vertex {
            Some(record.source)
        } else {
            None
        }
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}

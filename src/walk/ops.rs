//! Operations producing new walks from existing ones, and consistency checks.

use crate::graph::WalkGraph;
use crate::types::error::describe;
use crate::types::{WalkError, WalkResult};

use super::derive::{edges_from_vertices, vertices_from_edges};
use super::{Walk, WalkSequences};

impl<'g, G: WalkGraph + ?Sized> Walk<'g, G> {
    /// The same walk with a different weight.
    pub fn with_weight(&self, weight: f64) -> Self {
        let mut walk = self.clone();
        walk.weight = weight;
        walk
    }

    /// The walk traversed backwards, keeping its weight.
    ///
    /// See [`reverse_with`](Walk::reverse_with).
    pub fn reverse(&self) -> WalkResult<Self> {
        let weight = self.weight;
        self.reverse_with(|_| weight)
    }

    /// The walk traversed backwards, weighted by `weight_fn`.
    ///
    /// On an undirected graph the stored sequences are reversed as they are.
    /// On a directed graph every step needs an edge in the opposite
    /// direction, which is looked up through the graph; the result stores
    /// both views.
    pub fn reverse_with<F>(&self, weight_fn: F) -> WalkResult<Self>
    where
        F: FnOnce(&Self) -> f64,
    {
        let sequences = if self.graph.is_directed() {
            let mut vertices = self.vertex_list()?.into_owned();
            vertices.reverse();
            let edges = edges_from_vertices(self.graph, &vertices)?;
            WalkSequences::Both { vertices, edges }
        } else {
            let (vertices, edges) = self.sequences.clone().into_options();
            WalkSequences::from_options(
                vertices.map(|mut v| {
                    v.reverse();
                    v
                }),
                edges.map(|mut e| {
                    e.reverse();
                    e
                }),
            )?
        };

        let mut reversed = Self::from_sequences(
            self.graph,
            self.end_vertex.clone(),
            self.start_vertex.clone(),
            sequences,
            0.0,
        );
        reversed.weight = weight_fn(&reversed);
        Ok(reversed)
    }

    /// Append `other` to this walk, summing the weights.
    ///
    /// See [`concat_with`](Walk::concat_with).
    pub fn concat(&self, other: &Self) -> WalkResult<Self> {
        let weight = self.weight + other.weight;
        self.concat_with(other, |_| weight)
    }

    /// Append `other` to this walk, weighted by `weight_fn`.
    ///
    /// Both walks must be defined over the same graph. If either is empty
    /// the result is a copy of the other; otherwise this walk must end where
    /// `other` starts. Every view stored by either walk is kept; the walk
    /// that lacks it derives its part from the graph.
    pub fn concat_with<F>(&self, other: &Self, weight_fn: F) -> WalkResult<Self>
    where
        F: FnOnce(&Self) -> f64,
    {
        if !std::ptr::addr_eq(self.graph, other.graph) {
            return Err(WalkError::GraphMismatch);
        }

        let mut joined = if self.is_empty() {
            other.clone()
        } else if other.is_empty() {
            self.clone()
        } else {
            self.join(other)?
        };
        joined.weight = weight_fn(&joined);
        Ok(joined)
    }

    fn join(&self, other: &Self) -> WalkResult<Self> {
        if self.end_vertex != other.start_vertex {
            return Err(WalkError::Disconnected {
                end: describe(&self.end_vertex),
                start: describe(&other.start_vertex),
            });
        }

        // A view is kept when either side stores it; the side lacking it derives it.
        let keep_vertices = self.stored_vertices().is_some() || other.stored_vertices().is_some();
        let keep_edges = self.stored_edges().is_some() || other.stored_edges().is_some();

        let vertices = if keep_vertices {
            Some(join_vertices(&self.vertex_list()?, &other.vertex_list()?))
        } else {
            None
        };
        let edges = if keep_edges {
            Some([self.edge_list()?, other.edge_list()?].concat())
        } else {
            None
        };
        let sequences = WalkSequences::from_options(vertices, edges)?;

        Ok(Self::from_sequences(
            self.graph,
            self.start_vertex.clone(),
            other.end_vertex.clone(),
            sequences,
            0.0,
        ))
    }

    /// Check that the walk is consistent with its graph.
    ///
    /// Constructors never call this. It verifies that the endpoints agree
    /// with the stored vertices, that every step can be resolved in the
    /// graph, and that stored vertex and edge views describe the same walk.
    pub fn verify(&self) -> WalkResult<()> {
        if let Some(vertices) = self.stored_vertices().filter(|v| !v.is_empty()) {
            check_endpoint("start", vertices.first(), self.start_vertex.as_ref())?;
            check_endpoint("end", vertices.last(), self.end_vertex.as_ref())?;
            if self.stored_edges().is_none() {
                edges_from_vertices(self.graph, vertices)?;
            }
        }

        let Some(edges) = self.stored_edges() else {
            return Ok(());
        };

        if let Some(vertices) = self.stored_vertices() {
            let both_empty = vertices.is_empty() && edges.is_empty();
            if !both_empty && vertices.len() != edges.len() + 1 {
                return Err(WalkError::LengthMismatch {
                    vertices: vertices.len(),
                    edges: edges.len(),
                });
            }
        }

        if edges.is_empty() {
            return check_endpoint(
                "end",
                self.start_vertex.as_ref(),
                self.end_vertex.as_ref(),
            );
        }

        let traversed = vertices_from_edges(
            self.graph,
            self.start_vertex.as_ref(),
            self.end_vertex.as_ref(),
            edges,
        )?;
        check_endpoint("end", traversed.last(), self.end_vertex.as_ref())?;

        if let Some(vertices) = self.stored_vertices() {
            if let Some(position) = vertices
                .iter()
                .zip(&traversed)
                .position(|(stored, walked)| stored != walked)
            {
                return Err(WalkError::SequenceMismatch(position));
            }
        }
        Ok(())
    }
}

fn join_vertices<V: Clone>(head: &[V], tail: &[V]) -> Vec<V> {
    let mut joined = Vec::with_capacity(head.len() + tail.len().saturating_sub(1));
    joined.extend_from_slice(head);
    joined.extend_from_slice(tail.get(1..).unwrap_or(&[]));
    joined
}

fn check_endpoint<V: PartialEq + std::fmt::Debug>(
    endpoint: &'static str,
    expected: Option<&V>,
    found: Option<&V>,
) -> WalkResult<()> {
    if expected == found {
        return Ok(());
    }
    Err(WalkError::EndpointMismatch {
        endpoint,
        expected: describe(&expected),
        found: describe(&found),
    })
}

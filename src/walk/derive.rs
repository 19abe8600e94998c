//! Derivation of one walk view from the other through graph incidence queries.

use crate::graph::WalkGraph;
use crate::types::error::describe;
use crate::types::{WalkError, WalkResult};

/// Resolve one edge per consecutive vertex pair.
///
/// On a multigraph whichever edge the graph reports is used.
pub fn edges_from_vertices<G>(graph: &G, vertices: &[G::Vertex]) -> WalkResult<Vec<G::Edge>>
where
    G: WalkGraph + ?Sized,
{
    log::trace!("deriving edges for a walk of {} vertices", vertices.len());

    let mut edges = Vec::with_capacity(vertices.len().saturating_sub(1));
    for (position, pair) in vertices.windows(2).enumerate() {
        match graph.edge_connecting(&pair[0], &pair[1]) {
            Some(edge) => edges.push(edge),
            None => {
                log::debug!(
                    "no edge between {:?} and {:?} at step {}",
                    pair[0],
                    pair[1],
                    position
                );
                return Err(WalkError::NoConnectingEdge {
                    position,
                    from: describe(&pair[0]),
                    to: describe(&pair[1]),
                });
            }
        }
    }
    Ok(edges)
}

/// Follow `edges` from `start`, collecting every vertex visited.
///
/// An empty edge sequence yields `[start]` when the walk starts and ends at
/// the same vertex, and `[]` otherwise.
pub fn vertices_from_edges<G>(
    graph: &G,
    start: Option<&G::Vertex>,
    end: Option<&G::Vertex>,
    edges: &[G::Edge],
) -> WalkResult<Vec<G::Vertex>>
where
    G: WalkGraph + ?Sized,
{
    log::trace!("deriving vertices for a walk of {} edges", edges.len());

    if edges.is_empty() {
        return Ok(match (start, end) {
            (Some(start), Some(end)) if start == end => vec![start.clone()],
            _ => Vec::new(),
        });
    }

    let Some(start) = start else {
        log::debug!("edge walk of length {} has no start vertex", edges.len());
        return Err(WalkError::MissingStartVertex(edges.len()));
    };

    let mut vertices = Vec::with_capacity(edges.len() + 1);
    let mut current = start.clone();
    for (position, edge) in edges.iter().enumerate() {
        let next = graph.opposite(edge, &current).ok_or_else(|| {
            log::debug!("edge {:?} does not touch {:?} at step {}", edge, current, position);
            WalkError::NotIncident {
                position,
                edge: describe(edge),
                vertex: describe(&current),
            }
        })?;
        vertices.push(std::mem::replace(&mut current, next));
    }
    vertices.push(current);
    Ok(vertices)
}

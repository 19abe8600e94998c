//! [`WalkGraph`] for `petgraph::Graph`.

use petgraph::graph::{EdgeIndex, IndexType, NodeIndex};
use petgraph::EdgeType;

use super::WalkGraph;

impl<N, E, Ty, Ix> WalkGraph for petgraph::Graph<N, E, Ty, Ix>
where
    Ty: EdgeType,
    Ix: IndexType,
{
    type Vertex = NodeIndex<Ix>;
    type Edge = EdgeIndex<Ix>;

    fn edge_connecting(&self, source: &NodeIndex<Ix>, target: &NodeIndex<Ix>) -> Option<EdgeIndex<Ix>> {
        self.find_edge(*source, *target)
    }

    fn opposite(&self, edge: &EdgeIndex<Ix>, vertex: &NodeIndex<Ix>) -> Option<NodeIndex<Ix>> {
        let (a, b) = self.edge_endpoints(*edge)?;
        if a == *vertex {
            Some(b)
        } else if b == *vertex {
            Some(a)
        } else {
            None
        }
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }
}

//! Phase 2 tests: deriving one view of a walk from the other.

use std::borrow::Cow;
use std::cell::Cell;

use graph_walk::graph::{AdjacencyGraph, GraphBuilder, VertexId, EdgeId, WalkGraph};
use graph_walk::types::WalkError;
use graph_walk::walk::{edges_from_vertices, vertices_from_edges, CachedWalk, Walk};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Undirected: e0 = (0, 1), e1 = (1, 2), e2 = (1, 1) self-loop.
fn triangle_free_graph() -> AdjacencyGraph {
    let mut builder = GraphBuilder::undirected();
    builder.add_vertices([0, 1, 2]).link(0, 1, 1.0).link(1, 2, 1.0).link(1, 1, 1.0);
    builder.build().unwrap()
}

/// A collaborator that must never be consulted.
struct UnreachableGraph;

impl WalkGraph for UnreachableGraph {
    type Vertex = VertexId;
    type Edge = EdgeId;

    fn edge_connecting(&self, _: &VertexId, _: &VertexId) -> Option<EdgeId> {
        panic!("edge_connecting called on a walk that stores its edges");
    }

    fn opposite(&self, _: &EdgeId, _: &VertexId) -> Option<VertexId> {
        panic!("opposite called on a walk that stores its vertices");
    }

    fn is_directed(&self) -> bool {
        false
    }
}

/// Counts every incidence query made against the wrapped graph.
struct CountingGraph {
    inner: AdjacencyGraph,
    queries: Cell<usize>,
}

impl CountingGraph {
    fn new(inner: AdjacencyGraph) -> Self {
        Self {
            inner,
            queries: Cell::new(0),
        }
    }
}

impl WalkGraph for CountingGraph {
    type Vertex = VertexId;
    type Edge = EdgeId;

    fn edge_connecting(&self, source: &VertexId, target: &VertexId) -> Option<EdgeId> {
        self.queries.set(self.queries.get() + 1);
        self.inner.edge_connecting(source, target)
    }

    fn opposite(&self, edge: &EdgeId, vertex: &VertexId) -> Option<VertexId> {
        self.queries.set(self.queries.get() + 1);
        self.inner.opposite(edge, vertex)
    }

    fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }
}

// ==================== Vertices -> edges ====================

#[test]
fn test_edges_derived_from_vertices() {
    init_logger();
    let graph = triangle_free_graph();
    let walk = Walk::from_vertices(&graph, vec![0, 1, 2], 2.0);

    let edges = walk.edge_list().unwrap();
    assert!(matches!(edges, Cow::Owned(_)));
    assert_eq!(edges.into_owned(), vec![0, 1]);
}

#[test]
fn test_edges_derived_in_reverse_orientation() {
    let graph = triangle_free_graph();
    let walk = Walk::from_vertices(&graph, vec![2, 1, 0], 2.0);
    assert_eq!(walk.edge_list().unwrap().into_owned(), vec![1, 0]);
}

#[test]
fn test_edges_derived_from_single_vertex() {
    let graph = triangle_free_graph();
    let walk = Walk::from_vertices(&graph, vec![1], 0.0);
    assert!(walk.edge_list().unwrap().is_empty());
}

#[test]
fn test_missing_connecting_edge_fails() {
    init_logger();
    let graph = triangle_free_graph();
    let walk = Walk::from_vertices(&graph, vec![0, 1, 2, 0], 0.0);

    match walk.edge_list() {
        Err(WalkError::NoConnectingEdge { position, from, to }) => {
            assert_eq!(position, 2);
            assert_eq!(from, "2");
            assert_eq!(to, "0");
        }
        other => panic!("expected NoConnectingEdge, got {:?}", other),
    }
}

#[test]
fn test_parallel_edges_pick_some_connecting_edge() {
    let mut graph = AdjacencyGraph::new_undirected();
    graph.add_vertex(0);
    graph.add_vertex(1);
    let a = graph.add_edge(0, 1, 1.0).unwrap();
    let b = graph.add_edge(0, 1, 9.0).unwrap();

    let walk = Walk::from_vertices(&graph, vec![0, 1], 1.0);
    let edges = walk.edge_list().unwrap();
    assert_eq!(edges.len(), 1);
    assert!(edges[0] == a || edges[0] == b);
}

#[test]
fn test_directed_derivation_needs_forward_edges() {
    let mut builder = GraphBuilder::directed();
    builder.add_vertices([0, 1]).link(0, 1, 1.0);
    let graph = builder.build().unwrap();

    let forward = Walk::from_vertices(&graph, vec![0, 1], 1.0);
    assert_eq!(forward.edge_list().unwrap().into_owned(), vec![0]);

    let backward = Walk::from_vertices(&graph, vec![1, 0], 1.0);
    assert!(matches!(
        backward.edge_list(),
        Err(WalkError::NoConnectingEdge { position: 0, .. })
    ));
}

// ==================== Edges -> vertices ====================

#[test]
fn test_vertices_derived_from_edges() {
    init_logger();
    let graph = triangle_free_graph();
    let walk = Walk::from_edges(&graph, 0, 2, vec![0, 1], 2.0);

    let vertices = walk.vertex_list().unwrap();
    assert!(matches!(vertices, Cow::Owned(_)));
    assert_eq!(vertices.into_owned(), vec![0, 1, 2]);
}

#[test]
fn test_self_loop_repeats_vertex() {
    let graph = triangle_free_graph();
    let walk = Walk::from_edges(&graph, 0, 2, vec![0, 2, 1], 3.0);
    assert_eq!(walk.vertex_list().unwrap().into_owned(), vec![0, 1, 1, 2]);
    assert_eq!(walk.length(), 3);
}

#[test]
fn test_back_and_forth_over_one_edge() {
    let graph = triangle_free_graph();
    let walk = Walk::from_edges(&graph, 0, 1, vec![0, 0, 0], 3.0);
    assert_eq!(walk.vertex_list().unwrap().into_owned(), vec![0, 1, 0, 1]);
}

#[test]
fn test_edge_not_incident_fails() {
    let graph = triangle_free_graph();
    // Edge 1 is (1, 2); the walk claims to start at 0.
    let walk = Walk::from_edges(&graph, 0, 2, vec![1], 1.0);
    assert!(matches!(
        walk.vertex_list(),
        Err(WalkError::NotIncident { position: 0, .. })
    ));
}

#[test]
fn test_unknown_edge_fails() {
    let graph = triangle_free_graph();
    let walk = Walk::from_edges(&graph, 0, 1, vec![0, 77], 1.0);
    assert!(matches!(
        walk.vertex_list(),
        Err(WalkError::NotIncident { position: 1, .. })
    ));
}

#[test]
fn test_edges_without_start_vertex_fail() {
    let graph = triangle_free_graph();
    let walk = Walk::new(&graph, None, None, None, Some(vec![0, 1]), 1.0).unwrap();
    assert!(matches!(
        walk.vertex_list(),
        Err(WalkError::MissingStartVertex(2))
    ));
}

#[test]
fn test_empty_edges_closed_walk_yields_start() {
    let graph = triangle_free_graph();
    let walk = Walk::from_edges(&graph, 1, 1, Vec::new(), 0.0);
    assert_eq!(walk.vertex_list().unwrap().into_owned(), vec![1]);
    assert_eq!(walk.length(), 0);
}

#[test]
fn test_empty_edges_open_walk_yields_nothing() {
    let graph = triangle_free_graph();
    let walk = Walk::from_edges(&graph, 0, 2, Vec::new(), 0.0);
    assert!(walk.vertex_list().unwrap().is_empty());
}

// ==================== Stored views ====================

#[test]
fn test_stored_views_never_query_graph() {
    let graph = UnreachableGraph;
    let walk = Walk::from_vertices_and_edges(&graph, 0, 2, vec![0, 1, 2], vec![10, 11], 4.0);

    let vertices = walk.vertex_list().unwrap();
    let edges = walk.edge_list().unwrap();
    assert!(matches!(vertices, Cow::Borrowed(_)));
    assert!(matches!(edges, Cow::Borrowed(_)));
    assert_eq!(vertices.into_owned(), vec![0, 1, 2]);
    assert_eq!(edges.into_owned(), vec![10, 11]);
    assert_eq!(walk.length(), 2);
}

#[test]
fn test_stored_single_view_never_queries_graph() {
    let graph = UnreachableGraph;
    let by_vertices = Walk::from_vertices(&graph, vec![3, 4], 1.0);
    assert_eq!(by_vertices.vertex_list().unwrap().into_owned(), vec![3, 4]);

    let by_edges = Walk::from_edges(&graph, 3, 4, vec![8], 1.0);
    assert_eq!(by_edges.edge_list().unwrap().into_owned(), vec![8]);
}

#[test]
fn test_derivation_is_not_cached_by_walk() {
    let graph = CountingGraph::new(triangle_free_graph());
    let walk = Walk::from_vertices(&graph, vec![0, 1, 2], 2.0);

    walk.edge_list().unwrap();
    walk.edge_list().unwrap();
    assert_eq!(graph.queries.get(), 4);
}

#[test]
fn test_free_functions_match_walk_views() {
    let graph = triangle_free_graph();
    assert_eq!(edges_from_vertices(&graph, &[0, 1, 1, 2]).unwrap(), vec![0, 2, 1]);
    assert_eq!(
        vertices_from_edges(&graph, Some(&2), Some(&0), &[1, 0]).unwrap(),
        vec![2, 1, 0]
    );
}

// ==================== Cached walks ====================

#[test]
fn test_cached_walk_derives_once() {
    let graph = CountingGraph::new(triangle_free_graph());
    let walk = Walk::from_edges(&graph, 0, 2, vec![0, 1], 2.0).cached();

    assert_eq!(walk.vertex_list().unwrap(), &[0, 1, 2]);
    let after_first = graph.queries.get();
    assert_eq!(after_first, 2);

    assert_eq!(walk.vertex_list().unwrap(), &[0, 1, 2]);
    assert_eq!(graph.queries.get(), after_first);
}

#[test]
fn test_cached_walk_edges_once() {
    let graph = CountingGraph::new(triangle_free_graph());
    let walk: CachedWalk<'_, _> = Walk::from_vertices(&graph, vec![0, 1, 1], 2.0).into();

    assert_eq!(walk.edge_list().unwrap(), &[0, 2]);
    assert_eq!(walk.edge_list().unwrap(), &[0, 2]);
    assert_eq!(graph.queries.get(), 2);
    assert_eq!(walk.length(), 2);
}

#[test]
fn test_cached_walk_stored_views_untouched() {
    let graph = UnreachableGraph;
    let walk = Walk::from_vertices_and_edges(&graph, 0, 1, vec![0, 1], vec![5], 1.0).cached();
    assert_eq!(walk.vertex_list().unwrap(), &[0, 1]);
    assert_eq!(walk.edge_list().unwrap(), &[5]);
    assert!((walk.weight() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_cached_walk_does_not_cache_failures() {
    let graph = triangle_free_graph();
    let walk = Walk::from_vertices(&graph, vec![0, 2], 1.0).cached();
    assert!(walk.edge_list().is_err());
    assert!(walk.edge_list().is_err());
    assert_eq!(walk.into_inner().length(), 1);
}

#[test]
fn test_cached_walk_shared_across_threads() {
    let graph = triangle_free_graph();
    let walk = Walk::from_edges(&graph, 0, 2, vec![0, 2, 1], 3.0).cached();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(walk.vertex_list().unwrap(), &[0, 1, 1, 2]);
            });
        }
    });
}

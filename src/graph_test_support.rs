use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use quickcheck::Arbitrary;
use tracing::info_span;

use crate::prelude::*;
use crate::tracing_support::{TimingScope, init_tracing, set_timing_scope};

/// A randomly built graph.  The construction script inserts parallel edges
/// and self-loops and then removes some vertices and edges, so the arenas
/// contain recycled slots.
#[derive(Debug, Clone)]
pub struct ArbGraph<G> {
    pub graph: G,
}

impl<G> Arbitrary for ArbGraph<G>
where
    G: GraphMut + Clone + Debug + 'static,
    G::VertexData: Arbitrary,
    G::EdgeData: Arbitrary,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let num_extra_parallel_edges = usize::arbitrary(g) % 5;
        let num_extra_self_loops = usize::arbitrary(g) % 5;
        let num_removed_vertices = usize::arbitrary(g) % 4;
        let num_removed_edges = usize::arbitrary(g) % 6;

        let mut graph = G::new();
        let mut vertices: Vec<_> = (0..num_vertices)
            .map(|_| graph.insert_vertex(G::VertexData::arbitrary(g)))
            .collect();

        for i in 0..num_edges {
            if vertices.is_empty() {
                break;
            }
            let origin = vertices[usize::arbitrary(g) % vertices.len()];
            let destination = vertices[usize::arbitrary(g) % vertices.len()];
            let _ = graph.insert_edge(origin, destination, G::EdgeData::arbitrary(g));
            if i < num_extra_parallel_edges {
                let _ = graph.insert_edge(destination, origin, G::EdgeData::arbitrary(g));
            }
            if i < num_extra_self_loops {
                let _ = graph.insert_edge(origin, origin, G::EdgeData::arbitrary(g));
            }
        }

        for _ in 0..num_removed_edges {
            let edges = graph.edges();
            if edges.is_empty() {
                break;
            }
            let _ = graph.remove_edge(edges[usize::arbitrary(g) % edges.len()]);
        }
        for _ in 0..num_removed_vertices {
            if vertices.is_empty() {
                break;
            }
            let vertex = vertices.swap_remove(usize::arbitrary(g) % vertices.len());
            graph.remove_vertex(vertex);
        }
        // Reuse some of the vacated slots.
        for _ in 0..num_removed_vertices / 2 {
            let vertex = graph.insert_vertex(G::VertexData::arbitrary(g));
            if let Some(&other) = vertices.first() {
                let _ = graph.insert_edge(vertex, other, G::EdgeData::arbitrary(g));
            }
            vertices.push(vertex);
        }

        ArbGraph { graph }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Drop one vertex at a time, last inserted first.  A clone issues
        // its own handles, so the vertex is looked up by position.
        let graph = self.graph.clone();
        let num_vertices = graph.num_vertices();
        Box::new((0..num_vertices).rev().map(move |position| {
            let mut smaller = graph.clone();
            if let Some(&vertex) = smaller.vertices().get(position) {
                smaller.remove_vertex(vertex);
            }
            ArbGraph { graph: smaller }
        }))
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks the internal consistency of a graph.
pub fn check_graph_consistency<G: Graph>(graph: &G) {
    let _scope = set_timing_scope(TimingScope::Consistency);
    init_tracing();

    let vertices = {
        let _span = info_span!("vertices").entered();
        graph.vertices()
    };
    let edges = {
        let _span = info_span!("edges").entered();
        graph.edges()
    };

    // Verify counts are correct
    assert_eq!(vertices.len(), graph.num_vertices());
    assert_eq!(edges.len(), graph.num_edges());
    assert!(!has_duplicates(vertices.iter().copied()));
    assert!(!has_duplicates(edges.iter().copied()));
    assert_eq!(graph.is_empty(), graph.num_vertices() == 0);

    // Verify all vertices are valid and degrees match their lists
    for &vertex in &vertices {
        assert!(graph.contains_vertex(vertex));
        let outgoing = {
            let _span = info_span!("outgoing_edges").entered();
            graph.outgoing_edges(vertex).unwrap()
        };
        assert_eq!(graph.out_degree(vertex).unwrap(), outgoing.len());
        assert_eq!(graph.in_degree(vertex).unwrap(), outgoing.len());
        assert_eq!(graph.incoming_edges(vertex).unwrap(), outgoing);
        for edge in outgoing {
            assert!(graph.contains_edge(edge), "dangling {edge:?} at {vertex:?}");
        }
    }

    // Verify every edge sits once in each end's list (twice for a loop)
    for &edge in &edges {
        let (origin, destination) = {
            let _span = info_span!("end_vertices").entered();
            graph.end_vertices(edge).unwrap()
        };
        assert!(graph.contains_vertex(origin));
        assert!(graph.contains_vertex(destination));

        let occurrences = |vertex| {
            graph
                .outgoing_edges(vertex)
                .unwrap()
                .into_iter()
                .filter(|&e| e == edge)
                .count()
        };
        if origin == destination {
            assert_eq!(occurrences(origin), 2);
        } else {
            assert_eq!(occurrences(origin), 1);
            assert_eq!(occurrences(destination), 1);
        }

        let _span = info_span!("get_edge").entered();
        assert!(graph.get_edge(origin, destination).unwrap().is_some());
        assert!(graph.get_edge(destination, origin).unwrap().is_some());
    }
}

/// Generates a large graph with an irregular structure using custom closures
/// for vertex and edge elements.
///
/// The graph has dense, medium and sparse clusters, hub vertices with many
/// connections, scattered vertices with few, bridges between the clusters,
/// parallel edges and self-loops.  It has 410 vertices and roughly 2000
/// edges.
pub fn generate_large_graph<G, FV, FE>(graph: &mut G, mut new_vertex: FV, mut new_edge: FE)
where
    G: GraphMut,
    FV: FnMut(usize) -> G::VertexData,
    FE: FnMut(usize) -> G::EdgeData,
{
    let mut vertices: Vec<G::VertexId> = Vec::new();
    let mut edge_counter = 0;
    let mut add_edge = |graph: &mut G, u, v| {
        graph.insert_edge(u, v, new_edge(edge_counter)).unwrap();
        edge_counter += 1;
    };

    // Clusters: (size, numerator, denominator, multipliers) for density.
    let clusters = [
        (50, 6, 10, (7, 11)),
        (80, 3, 10, (13, 17)),
        (150, 8, 100, (19, 23)),
    ];
    let mut starts = Vec::new();
    for (size, numerator, denominator, (mi, mj)) in clusters {
        let start = vertices.len();
        starts.push(start);
        for _ in 0..size {
            vertices.push(graph.insert_vertex(new_vertex(vertices.len())));
        }
        for i in start..vertices.len() {
            for j in (i + 1)..vertices.len() {
                if (i * mi + j * mj) % denominator < numerator {
                    add_edge(graph, vertices[i], vertices[j]);
                }
            }
        }
    }

    // Hubs connected to a share of everything before them
    let hubs_start = vertices.len();
    for h in 0..20 {
        let hub = graph.insert_vertex(new_vertex(vertices.len()));
        for i in 0..vertices.len() {
            if ((hubs_start + h) * 29 + i * 31) % 7 < 4 {
                add_edge(graph, hub, vertices[i]);
            }
        }
        vertices.push(hub);
    }

    // Scattered vertices with 1-3 connections
    for s in 0..100 {
        let vertex = graph.insert_vertex(new_vertex(vertices.len()));
        for c in 0..(s % 3) + 1 {
            let target = (s * 37 + vertices.len() * 41 + c * 43) % vertices.len();
            add_edge(graph, vertex, vertices[target]);
        }
        vertices.push(vertex);
    }

    // Bridges between the clusters
    for i in 0..10 {
        let bridge = graph.insert_vertex(new_vertex(vertices.len()));
        add_edge(graph, bridge, vertices[starts[0] + (i * 47) % (starts[1] - starts[0])]);
        add_edge(graph, bridge, vertices[starts[1] + (i * 53) % (starts[2] - starts[1])]);
        add_edge(graph, bridge, vertices[starts[2] + (i * 59) % (hubs_start - starts[2])]);
        vertices.push(bridge);
    }

    // Long-range and parallel pairs
    for i in 0..200 {
        let (a, b) = ((i * 61) % vertices.len(), (i * 67 + 100) % vertices.len());
        if a != b {
            add_edge(graph, vertices[a], vertices[b]);
        }
    }
    for i in 0..50 {
        let (a, b) = ((i * 73 + 7) % vertices.len(), (i * 79 + 11) % vertices.len());
        if a != b {
            add_edge(graph, vertices[a], vertices[b]);
            add_edge(graph, vertices[b], vertices[a]);
        }
    }

    // Self-loops
    for i in 0..50 {
        let v = vertices[(i * 71) % vertices.len()];
        add_edge(graph, v, v);
    }
}

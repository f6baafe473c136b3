//! Depth-first traversal with tree/back edge classification.
//!
//! Starting from a vertex `u`, every edge `e` in `u`'s outgoing list is
//! examined in order.  With `v` the end of `e` opposite `u`, an unvisited `v`
//! is marked visited, `e` becomes its tree edge, and the traversal descends
//! into `v` before looking at the rest of `u`'s edges.  An already visited `v`
//! gets `e` appended to its back edges.  The edge a vertex was discovered
//! through is not examined again from that vertex, so a tree edge is never
//! also a back edge.  Every other edge is examined once from each reached end.
//!
//! The descent uses an explicit stack of `(vertex, edges, next)` frames rather
//! than recursion, so the depth of the graph is not limited by the call
//! stack.  The order in which vertices are discovered and the resulting
//! classification are those of the recursive formulation.

use std::collections::{HashMap, HashSet};

use derivative::Derivative;
use tracing::debug_span;

use crate::graph::{Graph, GraphResult};

/// The collections produced by one depth-first traversal.
#[derive(Clone, Debug, Derivative)]
#[derivative(
    PartialEq(bound = "V: Eq + std::hash::Hash, E: PartialEq"),
    Eq(bound = "V: Eq + std::hash::Hash, E: Eq")
)]
pub struct DepthFirstTraversal<V, E> {
    /// Every vertex reached, including the start.
    pub visited: HashSet<V>,
    /// For each vertex reached other than the start, the edge it was
    /// discovered through.
    pub tree_edges: HashMap<V, E>,
    /// For each vertex, the edges that led back to it after it was visited.
    pub back_edges: HashMap<V, Vec<E>>,
    /// The reached vertices in discovery order.
    pub discovery_order: Vec<V>,
}

impl<V, E> DepthFirstTraversal<V, E>
where
    V: Copy + Eq + std::hash::Hash,
{
    /// Traverses `graph` from `start`.
    pub fn new<G>(graph: &G, start: V) -> GraphResult<G, Self>
    where
        G: Graph<VertexId = V, EdgeId = E>,
    {
        let mut traversal = Self {
            visited: HashSet::new(),
            tree_edges: HashMap::new(),
            back_edges: HashMap::new(),
            discovery_order: Vec::new(),
        };
        let discovery_order = &mut traversal.discovery_order;
        walk(
            graph,
            start,
            &mut traversal.visited,
            &mut traversal.tree_edges,
            &mut traversal.back_edges,
            |v| discovery_order.push(v),
        )?;
        Ok(traversal)
    }

    /// Total number of back edge entries.
    pub fn num_back_edges(&self) -> usize {
        self.back_edges.values().map(Vec::len).sum()
    }
}

/// Traverses `graph` depth-first from `start` into caller-supplied
/// collections.  Entries already present are kept: vertices in `visited` are
/// treated as reached before the traversal began.
pub fn depth_first_traversal<G: Graph>(
    graph: &G,
    start: G::VertexId,
    visited: &mut HashSet<G::VertexId>,
    tree_edges: &mut HashMap<G::VertexId, G::EdgeId>,
    back_edges: &mut HashMap<G::VertexId, Vec<G::EdgeId>>,
) -> GraphResult<G, ()> {
    walk(graph, start, visited, tree_edges, back_edges, |_| ())
}

struct Frame<V, E> {
    vertex: V,
    /// The tree edge `vertex` was discovered through.
    parent_edge: Option<E>,
    edges: Vec<E>,
    next: usize,
}

fn walk<G, F>(
    graph: &G,
    start: G::VertexId,
    visited: &mut HashSet<G::VertexId>,
    tree_edges: &mut HashMap<G::VertexId, G::EdgeId>,
    back_edges: &mut HashMap<G::VertexId, Vec<G::EdgeId>>,
    mut discover: F,
) -> GraphResult<G, ()>
where
    G: Graph,
    F: FnMut(G::VertexId),
{
    let _span = debug_span!("depth_first_traversal", start = ?start).entered();

    let edges = graph.outgoing_edges(start)?;
    visited.insert(start);
    discover(start);
    let mut stack = vec![Frame {
        vertex: start,
        parent_edge: None,
        edges,
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&edge) = frame.edges.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;
        if frame.parent_edge == Some(edge) {
            continue;
        }
        let u = frame.vertex;

        let v = graph.opposite(u, edge)?;
        if visited.insert(v) {
            discover(v);
            tree_edges.insert(v, edge);
            stack.push(Frame {
                vertex: v,
                parent_edge: Some(edge),
                edges: graph.outgoing_edges(v)?,
                next: 0,
            });
        } else {
            back_edges.entry(v).or_default().push(edge);
        }
    }

    tracing::trace!(
        visited = visited.len(),
        tree_edges = tree_edges.len(),
        "traversal finished"
    );
    Ok(())
}

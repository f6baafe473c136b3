use std::{
    collections::{HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use crate::{
    directedness::{Directedness, Undirected},
    error::GraphError,
    search::{self, DepthFirstTraversal},
};

/// Result type of the [`Graph`] and [`GraphMut`] operations of graph `G`.
pub type GraphResult<G, T> =
    Result<T, GraphError<<G as Graph>::VertexId, <G as Graph>::EdgeId>>;

/// A trait representing a graph whose vertices keep incidence lists.
///
/// Methods that return collections return owned snapshots: mutating them
/// never affects the graph, and later mutations of the graph never change a
/// snapshot already handed out.  Methods taking a handle fail with
/// [`GraphError::InvalidVertex`] or [`GraphError::InvalidEdge`] when the
/// handle is stale or belongs to another graph.
///
/// For an undirected graph the outgoing and incoming views of a vertex
/// coincide; both are kept so that a directed implementation can share the
/// interface.
pub trait Graph: Sized {
    type Directedness: Directedness;
    type VertexData;
    type VertexId: Copy + Eq + Hash + Debug;
    type EdgeData;
    type EdgeId: Copy + Eq + Hash + Debug;
    /// Record type returned when a vertex is removed.
    type Vertex;
    /// Record type returned when an edge is removed.
    type Edge;

    /// Returns true if the graph is directed.
    fn is_directed(&self) -> bool {
        Self::Directedness::is_directed()
    }

    // Vertices

    /// Gets the number of vertices in the graph.
    fn num_vertices(&self) -> usize;

    /// Gets all vertices in insertion order.
    fn vertices(&self) -> Vec<Self::VertexId>;

    /// Gets the vertex record for a handle.
    fn vertex(&self, id: Self::VertexId) -> GraphResult<Self, &Self::Vertex>;

    /// Gets the element stored by a vertex.
    fn vertex_data(&self, id: Self::VertexId) -> GraphResult<Self, &Self::VertexData>;

    /// Returns the first vertex, in insertion order, whose element equals
    /// `element`.
    fn get_vertex(&self, element: &Self::VertexData) -> Option<Self::VertexId>
    where
        Self::VertexData: PartialEq;

    /// Checks whether the handle refers to a vertex of this graph.
    fn contains_vertex(&self, id: Self::VertexId) -> bool {
        self.vertex(id).is_ok()
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    // Edges

    /// Gets the number of edges in the graph.
    fn num_edges(&self) -> usize;

    /// Gets every edge once.  The order is unspecified.
    fn edges(&self) -> Vec<Self::EdgeId>;

    /// Gets the edge record for a handle.
    fn edge(&self, id: Self::EdgeId) -> GraphResult<Self, &Self::Edge>;

    /// Gets the element stored by an edge.
    fn edge_data(&self, id: Self::EdgeId) -> GraphResult<Self, &Self::EdgeData>;

    /// Checks whether the handle refers to an edge of this graph.
    fn contains_edge(&self, id: Self::EdgeId) -> bool {
        self.edge(id).is_ok()
    }

    /// Returns an edge joining `u` and `v`, or `None` if there is none.
    fn get_edge(
        &self,
        u: Self::VertexId,
        v: Self::VertexId,
    ) -> GraphResult<Self, Option<Self::EdgeId>>;

    /// Returns the ends of an edge in (origin, destination) order.
    fn end_vertices(
        &self,
        edge: Self::EdgeId,
    ) -> GraphResult<Self, (Self::VertexId, Self::VertexId)>;

    /// Returns the end of `edge` other than `vertex`.  Fails with
    /// [`GraphError::NotIncident`] if `edge` is not incident to `vertex`.
    fn opposite(
        &self,
        vertex: Self::VertexId,
        edge: Self::EdgeId,
    ) -> GraphResult<Self, Self::VertexId>;

    /// Gets the number of edges leaving a vertex.
    fn out_degree(&self, vertex: Self::VertexId) -> GraphResult<Self, usize>;

    /// Gets the number of edges entering a vertex.
    fn in_degree(&self, vertex: Self::VertexId) -> GraphResult<Self, usize>;

    /// Gets the edges leaving a vertex, in incidence order.
    fn outgoing_edges(&self, vertex: Self::VertexId) -> GraphResult<Self, Vec<Self::EdgeId>>;

    /// Gets the edges entering a vertex, in incidence order.
    fn incoming_edges(&self, vertex: Self::VertexId) -> GraphResult<Self, Vec<Self::EdgeId>>;

    // Searches

    /// Traverses the graph depth-first from `start`, adding every reached
    /// vertex to `visited`, the discovery edge of every newly reached vertex to
    /// `tree_edges`, and every edge leading to an already visited vertex to
    /// that vertex's entry in `back_edges`.  See [`search`] for details.
    fn depth_first_traversal(
        &self,
        start: Self::VertexId,
        visited: &mut HashSet<Self::VertexId>,
        tree_edges: &mut HashMap<Self::VertexId, Self::EdgeId>,
        back_edges: &mut HashMap<Self::VertexId, Vec<Self::EdgeId>>,
    ) -> GraphResult<Self, ()> {
        search::depth_first_traversal(self, start, visited, tree_edges, back_edges)
    }

    /// Performs a depth-first traversal from `start` into fresh collections.
    fn dfs(
        &self,
        start: Self::VertexId,
    ) -> GraphResult<Self, DepthFirstTraversal<Self::VertexId, Self::EdgeId>> {
        DepthFirstTraversal::new(self, start)
    }
}

/// A trait which is automatically implemented for undirected graphs,
/// providing whole-graph predicates built on the traversal.
pub trait GraphUndirected: Graph {
    /// Checks whether every vertex is reachable from every other vertex.  An
    /// empty graph is not considered connected.
    fn is_connected(&self) -> bool {
        let Some(&start) = self.vertices().first() else {
            return false;
        };
        self.dfs(start)
            .is_ok_and(|traversal| traversal.tree_edges.len() == self.num_vertices() - 1)
    }

    /// Checks whether every pair of distinct vertices is joined by an edge.
    /// An empty graph is not considered complete.
    fn is_complete(&self) -> bool {
        let vertices = self.vertices();
        if vertices.is_empty() {
            return false;
        }
        vertices.iter().enumerate().all(|(i, &u)| {
            vertices[i + 1..]
                .iter()
                .all(|&v| matches!(self.get_edge(u, v), Ok(Some(_))))
        })
    }
}

impl<G> GraphUndirected for G where G: Graph<Directedness = Undirected> {}

/// A trait for graphs that support mutation operations.
pub trait GraphMut: Graph {
    /// Creates a new, empty graph.
    fn new() -> Self;

    /// Creates a vertex storing `element` and returns its handle.
    fn insert_vertex(&mut self, element: Self::VertexData) -> Self::VertexId;

    /// Creates an edge storing `element` between `origin` and `destination`
    /// and returns its handle.  An existing edge between the same vertices is
    /// not looked for, so repeated calls create parallel edges.
    fn insert_edge(
        &mut self,
        origin: Self::VertexId,
        destination: Self::VertexId,
        element: Self::EdgeData,
    ) -> GraphResult<Self, Self::EdgeId>;

    /// Removes a vertex together with every edge incident to it.  Returns
    /// `None`, leaving the graph unchanged, if the vertex is not in the graph.
    fn remove_vertex(&mut self, vertex: Self::VertexId) -> Option<Self::Vertex>;

    /// Removes an edge, detaching it from both of its ends.
    fn remove_edge(&mut self, edge: Self::EdgeId) -> GraphResult<Self, Self::Edge>;

    /// Removes all vertices and edges from the graph.
    fn clear(&mut self) {
        for vertex in self.vertices() {
            self.remove_vertex(vertex);
        }
    }
}

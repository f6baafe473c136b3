//! An undirected graph stored as incidence lists.
//!
//! Each vertex keeps the edges touching it, in the order they were attached.
//! Vertex and edge records live in generational arenas, so a handle to a
//! removed record is detected rather than silently aliasing a newer one.

mod ids;

use std::{
    collections::HashSet,
    fmt::{Debug, Formatter},
};

use derivative::Derivative;
use tracing::trace;

pub use ids::{EdgeId, VertexId};

use crate::{
    directedness::Undirected,
    edge::Edge,
    error::{GraphError, Result},
    format_debug::format_debug,
    graph::{Graph, GraphMut},
    graph_id::GraphId,
    id_vec::IdVec,
    vertex::Vertex,
};

/// A mutable undirected graph with incidence lists.
///
/// Parallel edges and self-loops are accepted.  A self-loop appears twice in
/// the incidence list of its vertex and counts twice towards its degree.
///
/// A clone is a separate graph with its own identity.  Handles issued by the
/// original are rejected by the clone; the same vertices and edges appear in
/// the clone's `vertices()` and `edges()` at the same positions.
#[derive(Derivative)]
#[derivative(Default(bound = ""))]
pub struct UndirectedGraph<V, E> {
    vertices: IdVec<Vertex<V>>,
    edges: IdVec<Edge<E>>,
    /// Live vertices in insertion order.
    order: Vec<VertexId>,
    num_vertices: usize,
    num_edges: usize,
    id: GraphId,
}

impl<V, E> UndirectedGraph<V, E> {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn vertex_entry(&self, vertex: VertexId) -> Result<&Vertex<V>> {
        if vertex.graph_id != self.id {
            return Err(GraphError::InvalidVertex {
                vertex,
                reason: "VertexId belongs to another graph",
            });
        }
        self.vertices
            .get(vertex.key)
            .ok_or(GraphError::InvalidVertex {
                vertex,
                reason: "vertex has been removed",
            })
    }

    fn edge_entry(&self, edge: EdgeId) -> Result<&Edge<E>> {
        if edge.graph_id != self.id {
            return Err(GraphError::InvalidEdge {
                edge,
                reason: "EdgeId belongs to another graph",
            });
        }
        self.edges.get(edge.key).ok_or(GraphError::InvalidEdge {
            edge,
            reason: "edge has been removed",
        })
    }

    /// Drops `edge` from the incidence lists of both of its ends and marks
    /// the record detached.
    fn detach(&mut self, edge: EdgeId, record: &mut Edge<E>) {
        let (origin, destination) = record.endpoints();
        for end in [origin, destination] {
            if let Some(vertex) = self.vertices.get_mut(end.key) {
                vertex.remove_edge(edge);
            }
            record.remove_endpoint(end);
        }
        debug_assert!(!record.is_attached());
    }
}

impl<V: Clone, E: Clone> Clone for UndirectedGraph<V, E> {
    fn clone(&self) -> Self {
        let id = GraphId::new();
        Self {
            vertices: self.vertices.map_values(|vertex| vertex.rebound(id)),
            edges: self.edges.map_values(|edge| edge.rebound(id)),
            order: self.order.iter().map(|vertex| vertex.rebind(id)).collect(),
            num_vertices: self.num_vertices,
            num_edges: self.num_edges,
            id,
        }
    }
}

impl<V, E> Graph for UndirectedGraph<V, E> {
    type Directedness = Undirected;
    type VertexData = V;
    type VertexId = VertexId;
    type EdgeData = E;
    type EdgeId = EdgeId;
    type Vertex = Vertex<V>;
    type Edge = Edge<E>;

    fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    fn vertices(&self) -> Vec<VertexId> {
        self.order.clone()
    }

    fn vertex(&self, id: VertexId) -> Result<&Vertex<V>> {
        self.vertex_entry(id)
    }

    fn vertex_data(&self, id: VertexId) -> Result<&V> {
        self.vertex_entry(id).map(Vertex::element)
    }

    fn get_vertex(&self, element: &V) -> Option<VertexId>
    where
        V: PartialEq,
    {
        self.order.iter().copied().find(|&id| {
            self.vertices
                .get(id.key)
                .is_some_and(|vertex| vertex.element() == element)
        })
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn edges(&self) -> Vec<EdgeId> {
        let mut seen = HashSet::new();
        self.order
            .iter()
            .filter_map(|&id| self.vertices.get(id.key))
            .flat_map(|vertex| vertex.incidence().iter().copied())
            .filter(|&edge| seen.insert(edge))
            .collect()
    }

    fn edge(&self, id: EdgeId) -> Result<&Edge<E>> {
        self.edge_entry(id)
    }

    fn edge_data(&self, id: EdgeId) -> Result<&E> {
        self.edge_entry(id).map(Edge::element)
    }

    fn get_edge(&self, u: VertexId, v: VertexId) -> Result<Option<EdgeId>> {
        let u_vertex = self.vertex_entry(u)?;
        let v_vertex = self.vertex_entry(v)?;
        let shorter = if u_vertex.degree() <= v_vertex.degree() {
            u_vertex
        } else {
            v_vertex
        };
        Ok(shorter.incidence().iter().copied().find(|&edge| {
            self.edges
                .get(edge.key)
                .is_some_and(|record| record.ends().has_both(&u, &v))
        }))
    }

    fn end_vertices(&self, edge: EdgeId) -> Result<(VertexId, VertexId)> {
        self.edge_entry(edge).map(Edge::endpoints)
    }

    fn opposite(&self, vertex: VertexId, edge: EdgeId) -> Result<VertexId> {
        let incident = self.vertex_entry(vertex)?.incidence().contains(&edge);
        let record = self.edge_entry(edge)?;
        if !incident {
            return Err(GraphError::NotIncident { vertex, edge });
        }
        record
            .ends()
            .other_value(&vertex)
            .map(|other| *other.into_inner())
            .ok_or(GraphError::NotIncident { vertex, edge })
    }

    fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        self.vertex_entry(vertex).map(Vertex::degree)
    }

    fn in_degree(&self, vertex: VertexId) -> Result<usize> {
        self.out_degree(vertex)
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Result<Vec<EdgeId>> {
        self.vertex_entry(vertex).map(Vertex::incident_edges)
    }

    fn incoming_edges(&self, vertex: VertexId) -> Result<Vec<EdgeId>> {
        self.outgoing_edges(vertex)
    }
}

impl<V, E> GraphMut for UndirectedGraph<V, E> {
    fn new() -> Self {
        Self::default()
    }

    fn insert_vertex(&mut self, element: V) -> VertexId {
        let position = self.num_vertices;
        let id = VertexId::new(self.vertices.insert(Vertex::new(element, position)), self.id);
        self.order.push(id);
        self.num_vertices += 1;
        trace!(vertex = ?id, position, "inserted vertex");
        id
    }

    fn insert_edge(&mut self, origin: VertexId, destination: VertexId, element: E) -> Result<EdgeId> {
        let origin_position = self.vertex_entry(origin)?.degree();
        let destination_position = self.vertex_entry(destination)?.degree();
        let key = self.edges.insert(Edge::new(
            element,
            origin,
            destination,
            origin_position,
            destination_position,
        ));
        let id = EdgeId::new(key, self.id);
        for end in [origin, destination] {
            if let Some(vertex) = self.vertices.get_mut(end.key) {
                vertex.add_edge(id);
            }
        }
        self.num_edges += 1;
        trace!(edge = ?id, ?origin, ?destination, "inserted edge");
        Ok(id)
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Option<Vertex<V>> {
        let incident = self.vertex_entry(vertex).ok()?.incident_edges();
        for edge in incident {
            // A self-loop is listed twice but removed once.
            if let Some(mut record) = self.edges.remove(edge.key) {
                self.detach(edge, &mut record);
                self.num_edges -= 1;
            }
        }
        let record = self.vertices.remove(vertex.key)?;
        self.order.retain(|&id| id != vertex);
        self.num_vertices -= 1;
        trace!(?vertex, "removed vertex");
        Some(record)
    }

    fn remove_edge(&mut self, edge: EdgeId) -> Result<Edge<E>> {
        self.edge_entry(edge)?;
        let mut record = self
            .edges
            .remove(edge.key)
            .ok_or(GraphError::InvalidEdge {
                edge,
                reason: "edge has been removed",
            })?;
        self.detach(edge, &mut record);
        self.num_edges -= 1;
        trace!(?edge, "removed edge");
        Ok(record)
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.order.clear();
        self.num_vertices = 0;
        self.num_edges = 0;
        trace!("cleared graph");
    }
}

impl<V: Debug, E: Debug> Debug for UndirectedGraph<V, E> {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        format_debug(self, fmt, "UndirectedGraph")
    }
}

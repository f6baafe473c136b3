//! The model behind a graph sketch: an [`UndirectedGraph`] of labels whose
//! vertices have a position on a canvas.
//!
//! A sketch is kept a simple graph.  [`GraphSketch::add_edge`] declines to
//! create a self-loop or a second edge between two vertices that are already
//! joined, and every bulk connect operation goes through it.
//!
//! The sketch also remembers the two most recently added vertices, so an
//! editor can join them with [`GraphSketch::connect_last_added`].

mod point;
pub mod text_format;

use std::collections::{HashMap, HashSet};

use tracing::debug;

pub use point::Point;
pub use text_format::FormatError;

use crate::{
    edge::Edge,
    error::{GraphError, Result},
    graph::{Graph, GraphMut, GraphUndirected},
    undirected_graph::{EdgeId, UndirectedGraph, VertexId},
    vertex::Vertex,
};

/// Element stored by edges created without an explicit label.
pub const DEFAULT_EDGE_ELEMENT: &str = "NONE";

/// Errors reported by sketch operations that locate vertices by position.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SketchError {
    /// No vertex sits at the given point.
    #[error("no vertex at {0}")]
    NoVertexAt(Point),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A graph of string labels whose vertices are placed on a plane.
///
/// Vertices are named by the [`VertexId`]s of the underlying graph.  A clone
/// has a graph of its own, so it issues new handles; look vertices up again
/// through [`graph`](Self::graph) or [`vertex_at`](Self::vertex_at).
#[derive(Debug, Default)]
pub struct GraphSketch {
    graph: UndirectedGraph<String, String>,
    positions: HashMap<VertexId, Point>,
    /// The most recently added vertices still present, oldest first.
    last_added: Vec<VertexId>,
}

impl Clone for GraphSketch {
    fn clone(&self) -> Self {
        let graph = self.graph.clone();
        let handles: HashMap<_, _> = self
            .graph
            .vertices()
            .into_iter()
            .zip(graph.vertices())
            .collect();
        let positions = self
            .positions
            .iter()
            .filter_map(|(vertex, &point)| Some((*handles.get(vertex)?, point)))
            .collect();
        let last_added = self
            .last_added
            .iter()
            .filter_map(|vertex| handles.get(vertex).copied())
            .collect();
        Self {
            graph,
            positions,
            last_added,
        }
    }
}

impl GraphSketch {
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying graph.  Mutation goes through the sketch so positions
    /// stay in step with the vertices.
    pub fn graph(&self) -> &UndirectedGraph<String, String> {
        &self.graph
    }

    pub fn position(&self, vertex: VertexId) -> Result<Point> {
        self.graph.vertex(vertex)?;
        self.positions
            .get(&vertex)
            .copied()
            .ok_or(GraphError::InvalidVertex {
                vertex,
                reason: "vertex has no position",
            })
    }

    /// Returns the first vertex, in insertion order, placed exactly at
    /// `point`.
    pub fn vertex_at(&self, point: Point) -> Option<VertexId> {
        self.graph
            .vertices()
            .into_iter()
            .find(|vertex| self.positions.get(vertex) == Some(&point))
    }

    pub fn add_vertex(&mut self, element: impl Into<String>, position: Point) -> VertexId {
        let vertex = self.graph.insert_vertex(element.into());
        self.positions.insert(vertex, position);
        if self.last_added.len() == 2 {
            self.last_added.remove(0);
        }
        self.last_added.push(vertex);
        debug!(?vertex, %position, "new vertex");
        vertex
    }

    /// Joins `origin` and `destination` with an edge storing `element`.
    /// Returns `Ok(None)` without changing anything if the two are the same
    /// vertex or are already joined.
    pub fn add_edge(
        &mut self,
        origin: VertexId,
        destination: VertexId,
        element: impl Into<String>,
    ) -> Result<Option<EdgeId>> {
        if self.graph.get_edge(origin, destination)?.is_some() || origin == destination {
            return Ok(None);
        }
        let edge = self.graph.insert_edge(origin, destination, element.into())?;
        debug!(?edge, ?origin, ?destination, "new edge");
        Ok(Some(edge))
    }

    /// Removes a vertex and every edge touching it.
    pub fn delete_vertex(&mut self, vertex: VertexId) -> Result<Vertex<String>> {
        self.graph.vertex(vertex)?;
        self.positions.remove(&vertex);
        self.last_added.retain(|&added| added != vertex);
        self.graph.remove_vertex(vertex).ok_or(GraphError::InvalidVertex {
            vertex,
            reason: "vertex has been removed",
        })
    }

    /// Removes the vertex found by [`vertex_at`](Self::vertex_at).
    pub fn delete_vertex_at(&mut self, point: Point) -> std::result::Result<Vertex<String>, SketchError> {
        let vertex = self.vertex_at(point).ok_or(SketchError::NoVertexAt(point))?;
        Ok(self.delete_vertex(vertex)?)
    }

    pub fn delete_edge(&mut self, edge: EdgeId) -> Result<Edge<String>> {
        self.graph.remove_edge(edge)
    }

    /// Joins every pair of distinct vertices not already joined, making the
    /// sketch complete.  Returns the number of edges created.
    pub fn connect_all(&mut self) -> usize {
        let vertices = self.graph.vertices();
        let mut added = 0;
        for (i, &u) in vertices.iter().enumerate() {
            for &v in &vertices[i + 1..] {
                if let Ok(Some(_)) = self.add_edge(u, v, DEFAULT_EDGE_ELEMENT) {
                    added += 1;
                }
            }
        }
        added
    }

    /// Joins `vertex` to every other vertex it is not already joined to.
    /// Returns the number of edges created.
    pub fn connect_vertex(&mut self, vertex: VertexId) -> Result<usize> {
        self.graph.vertex(vertex)?;
        let mut added = 0;
        for other in self.graph.vertices() {
            if self.add_edge(vertex, other, DEFAULT_EDGE_ELEMENT)?.is_some() {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Joins every pair of distinct vertices in `vertices` not already joined.
    /// Every handle is checked before any edge is added.  Returns the number
    /// of edges created.
    pub fn connect_vertices(&mut self, vertices: &[VertexId]) -> Result<usize> {
        for &vertex in vertices {
            self.graph.vertex(vertex)?;
        }
        let mut added = 0;
        for (i, &u) in vertices.iter().enumerate() {
            for &v in &vertices[i + 1..] {
                if self.add_edge(u, v, DEFAULT_EDGE_ELEMENT)?.is_some() {
                    added += 1;
                }
            }
        }
        Ok(added)
    }

    /// Joins the two most recently added vertices, if both are still present.
    pub fn connect_last_added(&mut self) -> Result<Option<EdgeId>> {
        let &[older, newer] = self.last_added.as_slice() else {
            return Ok(None);
        };
        self.add_edge(older, newer, DEFAULT_EDGE_ELEMENT)
    }

    /// The most recently added vertex, unless it was deleted or
    /// [`clear_last_added`](Self::clear_last_added) was called since.
    pub fn last_added(&self) -> Option<VertexId> {
        self.last_added.last().copied()
    }

    pub fn clear_last_added(&mut self) {
        self.last_added.clear();
    }

    /// Joins `vertex` to the closest vertex it is not yet joined to.  Ties go
    /// to the vertex added first.  Returns `Ok(None)` if `vertex` is already
    /// joined to every other vertex.
    pub fn connect_to_nearest(&mut self, vertex: VertexId) -> Result<Option<EdgeId>> {
        let origin = self.position(vertex)?;
        let mut candidates = Vec::new();
        for other in self.graph.vertices() {
            if other != vertex && self.graph.get_edge(vertex, other)?.is_none() {
                candidates.push((origin.distance_to(self.position(other)?), other));
            }
        }
        let nearest = candidates
            .into_iter()
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, other)| other);
        match nearest {
            Some(other) => self.add_edge(vertex, other, DEFAULT_EDGE_ELEMENT),
            None => Ok(None),
        }
    }

    /// Removes every edge touching `vertex`.  Returns the removed edges.
    pub fn disconnect_vertex(&mut self, vertex: VertexId) -> Result<Vec<Edge<String>>> {
        let mut removed = Vec::new();
        for edge in self.graph.outgoing_edges(vertex)? {
            // Listed twice if it is a loop.
            if self.graph.contains_edge(edge) {
                removed.push(self.graph.remove_edge(edge)?);
            }
        }
        Ok(removed)
    }

    /// Removes every edge, keeping the vertices in place.
    pub fn remove_all_edges(&mut self) {
        for edge in self.graph.edges() {
            let removed = self.graph.remove_edge(edge);
            debug_assert!(removed.is_ok(), "edges() listed a dead {edge:?}");
        }
    }

    /// Returns the vertices joined to `vertex`, each once, in the order of
    /// `vertex`'s incidence list.
    pub fn neighbors(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        let mut seen = HashSet::new();
        let mut neighbors = Vec::new();
        for edge in self.graph.outgoing_edges(vertex)? {
            let other = self.graph.opposite(vertex, edge)?;
            if seen.insert(other) {
                neighbors.push(other);
            }
        }
        Ok(neighbors)
    }

    /// True if every vertex can be reached from every other.  An empty sketch
    /// is not connected.
    pub fn is_connected(&self) -> bool {
        self.graph.is_connected()
    }

    /// True if every pair of distinct vertices is joined.  An empty sketch is
    /// not complete.
    pub fn is_complete(&self) -> bool {
        self.graph.is_complete()
    }

    /// Deletes all vertices and edges.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.positions.clear();
        self.last_added.clear();
    }
}

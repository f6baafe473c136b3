use crate::{graph_id::GraphId, undirected_graph::EdgeId};

/// A vertex record: the caller's element plus the ordered list of edges
/// incident to it.
///
/// Vertices are passive; only the owning graph mutates their incidence list.
/// The degree is the length of that list, so the two can never disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex<V> {
    element: V,
    incident_edges: Vec<EdgeId>,
    position: usize,
}

impl<V> Vertex<V> {
    pub(crate) fn new(element: V, position: usize) -> Self {
        Self {
            element,
            incident_edges: Vec::new(),
            position,
        }
    }

    /// Gets the element stored by this vertex.
    pub fn element(&self) -> &V {
        &self.element
    }

    /// Consumes the vertex, returning its element.
    pub fn into_element(self) -> V {
        self.element
    }

    /// Returns a copy of the incidence list in insertion order.
    pub fn incident_edges(&self) -> Vec<EdgeId> {
        self.incident_edges.clone()
    }

    /// Number of incident edges.  A self-loop counts twice.
    pub fn degree(&self) -> usize {
        self.incident_edges.len()
    }

    /// Position in the graph's vertex sequence when the vertex was inserted.
    pub fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn incidence(&self) -> &[EdgeId] {
        &self.incident_edges
    }

    /// Appends an edge.  Duplicates are not checked for.
    pub(crate) fn add_edge(&mut self, edge: EdgeId) {
        self.incident_edges.push(edge);
    }

    /// Removes the first occurrence of `edge`, returning whether there was one.
    /// A copy whose incidence list names edges of the graph `graph_id`.
    pub(crate) fn rebound(&self, graph_id: GraphId) -> Self
    where
        V: Clone,
    {
        Self {
            element: self.element.clone(),
            incident_edges: self
                .incident_edges
                .iter()
                .map(|edge| edge.rebind(graph_id))
                .collect(),
            position: self.position,
        }
    }

    pub(crate) fn remove_edge(&mut self, edge: EdgeId) -> bool {
        match self.incident_edges.iter().position(|&e| e == edge) {
            Some(index) => {
                self.incident_edges.remove(index);
                true
            }
            None => false,
        }
    }
}

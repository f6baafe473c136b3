use std::fmt::{Debug, Formatter};

use crate::{graph_id::GraphId, id_vec::IdVecKey};

/// Handle to a vertex of an [`UndirectedGraph`](super::UndirectedGraph).
///
/// Contains the arena key of the vertex and the ID of the graph that issued
/// it.  A handle outlives the vertex it names; every graph operation checks
/// it before use.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    pub(crate) key: IdVecKey,
    pub(crate) graph_id: GraphId,
}

impl VertexId {
    pub(crate) fn new(key: IdVecKey, graph_id: GraphId) -> Self {
        Self { key, graph_id }
    }

    /// The same vertex as seen by the graph identified by `graph_id`.
    pub(crate) fn rebind(self, graph_id: GraphId) -> Self {
        Self::new(self.key, graph_id)
    }
}

impl Debug for VertexId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "VertexId({})", self.key.index())
    }
}

/// Handle to an edge of an [`UndirectedGraph`](super::UndirectedGraph).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId {
    pub(crate) key: IdVecKey,
    pub(crate) graph_id: GraphId,
}

impl EdgeId {
    pub(crate) fn new(key: IdVecKey, graph_id: GraphId) -> Self {
        Self { key, graph_id }
    }

    pub(crate) fn rebind(self, graph_id: GraphId) -> Self {
        Self::new(self.key, graph_id)
    }
}

impl Debug for EdgeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "EdgeId({})", self.key.index())
    }
}

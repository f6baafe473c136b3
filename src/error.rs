//! Errors reported by graph operations.

use crate::undirected_graph::{EdgeId, VertexId};

/// Result type used by [`UndirectedGraph`](crate::UndirectedGraph).
pub type Result<T> = std::result::Result<T, GraphError>;

/// A caller-contract violation detected by a graph operation.
///
/// Lookups that can legitimately come up empty (`get_vertex`, `get_edge`,
/// `remove_vertex`) report absence with `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<V = VertexId, E = EdgeId> {
    /// The vertex handle was removed, cleared, or issued by another graph.
    #[error("invalid vertex {vertex:?}: {reason}")]
    InvalidVertex { vertex: V, reason: &'static str },
    /// The edge handle was removed, cleared, or issued by another graph.
    #[error("invalid edge {edge:?}: {reason}")]
    InvalidEdge { edge: E, reason: &'static str },
    /// The edge does not appear in the vertex's incidence list.
    #[error("vertex {vertex:?} is not incident to edge {edge:?}")]
    NotIncident { vertex: V, edge: E },
}

//! A mutable, undirected graph stored as incidence lists, with a
//! depth-first traversal that classifies edges into tree and back edges.
//!
//! The [`sketch`] module layers the editor model of a graph sketch on top:
//! positioned vertices, simple-graph editing operations and a line-oriented
//! text format.

pub mod directedness;
pub mod edge;
pub mod edge_ends;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod sketch;
pub mod undirected_graph;
pub mod vertex;

mod format_debug;
mod graph_id;
mod id_vec;
mod util;

#[cfg(test)]
mod graph_test_support;
#[cfg(test)]
mod tracing_support;

pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::edge::Edge;
pub use crate::error::GraphError;
pub use crate::graph::{Graph, GraphMut, GraphResult, GraphUndirected};
pub use crate::search::DepthFirstTraversal;
pub use crate::sketch::{GraphSketch, Point, SketchError};
pub use crate::undirected_graph::{EdgeId, UndirectedGraph, VertexId};
pub use crate::util::OtherValue;
pub use crate::vertex::Vertex;

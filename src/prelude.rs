pub use crate::directedness::{Directed, Directedness, Undirected};
pub use crate::error::GraphError;
pub use crate::graph::{Graph, GraphMut, GraphUndirected};
pub use crate::search::DepthFirstTraversal;
pub use crate::undirected_graph::{EdgeId, UndirectedGraph, VertexId};

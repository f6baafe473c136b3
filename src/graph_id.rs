use std::sync::atomic::{AtomicUsize, Ordering};

/// Global counter handing out graph identifiers.  Wrapping around is possible
/// in principle; the only consequence would be that a handle from one graph
/// could be mistaken for a handle of another graph with the same identifier.
static GRAPH_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for a graph instance, carried by every vertex and edge
/// handle so that handles from one graph are rejected by another.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct GraphId(usize);

impl GraphId {
    /// Create a new unique graph identifier.
    pub fn new() -> Self {
        GraphId(GRAPH_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}

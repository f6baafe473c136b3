use crate::{edge_ends::EdgeEnds, graph_id::GraphId, undirected_graph::VertexId};

/// An edge record: the caller's element, its two ends, and the position it
/// took in each end's incidence list when it was inserted.
///
/// The positions are a snapshot.  They go stale as soon as an earlier entry
/// of either incidence list is removed and are never re-synchronized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<E> {
    element: E,
    ends: EdgeEnds<VertexId>,
    positions: (usize, usize),
    /// Whether the origin and destination are still attached.
    attached: [bool; 2],
}

impl<E> Edge<E> {
    pub(crate) fn new(
        element: E,
        origin: VertexId,
        destination: VertexId,
        origin_position: usize,
        destination_position: usize,
    ) -> Self {
        Self {
            element,
            ends: EdgeEnds::new(origin, destination),
            positions: (origin_position, destination_position),
            attached: [true, true],
        }
    }

    /// Gets the element stored by this edge.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Consumes the edge, returning its element.
    pub fn into_element(self) -> E {
        self.element
    }

    /// Returns the (origin, destination) pair as supplied at insertion.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        self.ends.into_values()
    }

    pub fn ends(&self) -> &EdgeEnds<VertexId> {
        &self.ends
    }

    /// Returns the positions this edge took in the origin's and the
    /// destination's incidence lists at insertion time.
    pub fn incident_positions(&self) -> (usize, usize) {
        self.positions
    }

    /// True until the edge has been detached from its endpoints.
    pub fn is_attached(&self) -> bool {
        self.attached == [true, true]
    }

    /// Detaches the first still-attached end equal to `vertex`.  Returns
    /// whether such an end existed.
    pub(crate) fn rebound(&self, graph_id: GraphId) -> Self
    where
        E: Clone,
    {
        let (origin, destination) = self.endpoints();
        Self {
            element: self.element.clone(),
            ends: EdgeEnds::new(origin.rebind(graph_id), destination.rebind(graph_id)),
            positions: self.positions,
            attached: self.attached,
        }
    }

    pub(crate) fn remove_endpoint(&mut self, vertex: VertexId) -> bool {
        let (origin, destination) = self.ends.values();
        let end = if self.attached[0] && *origin == vertex {
            0
        } else if self.attached[1] && *destination == vertex {
            1
        } else {
            return false;
        };
        self.attached[end] = false;
        true
    }
}

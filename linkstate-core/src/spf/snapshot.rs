//! Step Snapshots
//!
//! The engine records the whole distance and predecessor state after every
//! selection round. A [`Snapshot`] is an owned copy of that state; nothing
//! can mutate it once it has been recorded.

use indexmap::IndexMap;

use super::cost::Cost;
use crate::graph::NodeId;

/// Best known cost per non-origin node, in node order.
pub type DistanceMap = IndexMap<NodeId, Cost>;

/// Previous hop on the best known path, for nodes that have one.
pub type PredecessorMap = IndexMap<NodeId, NodeId>;

/// The engine state as of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    distances: DistanceMap,
    predecessors: PredecessorMap,
}

impl Snapshot {
    pub(crate) fn new(distances: DistanceMap, predecessors: PredecessorMap) -> Self {
        Self {
            distances,
            predecessors,
        }
    }

    /// Distances for every non-origin node.
    pub fn distances(&self) -> &DistanceMap {
        &self.distances
    }

    /// Predecessors for nodes with a known path.
    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }

    /// Cost to `node`. `None` for the origin and for foreign ids.
    pub fn distance(&self, node: NodeId) -> Option<Cost> {
        self.distances.get(&node).copied()
    }

    /// Predecessor of `node`, if a path to it is known.
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied()
    }
}

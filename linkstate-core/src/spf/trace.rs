//! Engine Output
//!
//! [`SpfTrace`] is the complete, final result of one engine run: the
//! per-step snapshots and the order in which nodes were finalized. It is
//! read-only; downstream consumers (path reconstruction, forwarding table,
//! formatters) only borrow it.

use super::cost::Cost;
use super::snapshot::{DistanceMap, PredecessorMap, Snapshot};
use crate::graph::NodeId;

/// Result of [`compute_shortest_paths`](super::compute_shortest_paths).
///
/// Invariants established by the engine:
///
/// - there is exactly one snapshot per node, snapshot 0 being the
///   initialization state
/// - `processed()` lists every node exactly once, origin first
/// - the origin never appears as a key of a distance or predecessor map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpfTrace {
    origin: NodeId,
    snapshots: Vec<Snapshot>,
    processed: Vec<NodeId>,
}

impl SpfTrace {
    pub(crate) fn new(origin: NodeId, snapshots: Vec<Snapshot>, processed: Vec<NodeId>) -> Self {
        debug_assert!(!snapshots.is_empty());
        debug_assert_eq!(snapshots.len(), processed.len());
        Self {
            origin,
            snapshots,
            processed,
        }
    }

    /// The node every path starts from.
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// Number of steps (equal to the node count).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: a run covers at least the origin.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots, step 0 first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// The snapshot recorded at `step`.
    pub fn snapshot(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Distance maps in step order.
    pub fn distance_snapshots(&self) -> impl ExactSizeIterator<Item = &DistanceMap> + '_ {
        self.snapshots.iter().map(Snapshot::distances)
    }

    /// Predecessor maps in step order.
    pub fn predecessor_snapshots(&self) -> impl ExactSizeIterator<Item = &PredecessorMap> + '_ {
        self.snapshots.iter().map(Snapshot::predecessors)
    }

    /// Nodes in the order they were finalized, origin first.
    pub fn processed(&self) -> &[NodeId] {
        &self.processed
    }

    /// The finalized set as of `step`: `processed()[0..=step]`.
    ///
    /// Steps past the end return the full sequence.
    pub fn finalized_at(&self, step: usize) -> &[NodeId] {
        let end = (step + 1).min(self.processed.len());
        &self.processed[..end]
    }

    /// The step at which `node` was finalized.
    pub fn step_of(&self, node: NodeId) -> Option<usize> {
        self.processed.iter().position(|&n| n == node)
    }

    /// The last snapshot.
    pub fn final_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Final shortest-path costs.
    pub fn final_distances(&self) -> &DistanceMap {
        self.final_snapshot().distances()
    }

    /// Final shortest-path tree, as predecessor links.
    pub fn final_predecessors(&self) -> &PredecessorMap {
        self.final_snapshot().predecessors()
    }

    /// Final cost to `node`; zero for the origin.
    pub fn distance(&self, node: NodeId) -> Option<Cost> {
        if node == self.origin {
            return Some(Cost::Finite(0));
        }
        self.final_snapshot().distance(node)
    }
}

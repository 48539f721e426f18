//! Path Reconstruction
//!
//! Turns a predecessor map back into explicit paths. The walk is iterative
//! and bounded: a predecessor map can cover at most every non-origin node,
//! so any walk longer than `predecessors.len() + 1` steps must be going in
//! circles.

use smallvec::SmallVec;

use crate::error::PathError;
use crate::graph::{Graph, NodeId};
use crate::spf::PredecessorMap;

/// A path from some destination back to the origin.
///
/// `hops` runs from the destination to the node adjacent to the origin; the
/// origin itself is not stored there. A path to the origin has no hops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    origin: NodeId,
    hops: SmallVec<[NodeId; 8]>,
}

impl Path {
    /// The node the path leads back to.
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// The node the path was reconstructed for.
    pub fn destination(&self) -> NodeId {
        self.hops.first().copied().unwrap_or(self.origin)
    }

    /// Nodes from the destination up to, but excluding, the origin.
    pub fn hops(&self) -> &[NodeId] {
        &self.hops
    }

    /// The origin's neighbor on this path: the first link a packet takes.
    pub fn next_hop(&self) -> Option<NodeId> {
        self.hops.last().copied()
    }

    /// Number of links on the path.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Whether this is the trivial path from the origin to itself.
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Every node on the path, destination first and origin last.
    pub fn iter_to_origin(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.hops.iter().copied().chain(std::iter::once(self.origin))
    }

    /// Total weight of the path's links in `graph`.
    ///
    /// `None` if some consecutive pair is not joined by an edge, or if the
    /// sum does not fit.
    pub fn cost(&self, graph: &Graph) -> Option<u128> {
        let nodes: SmallVec<[NodeId; 9]> = self.iter_to_origin().collect();
        nodes.windows(2).try_fold(0u128, |total, pair| {
            total.checked_add(u128::from(graph.weight(pair[0], pair[1])?))
        })
    }

    /// Labels from the origin out to the destination, for display.
    pub fn labels_from_origin<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        let mut labels: Vec<_> = self.iter_to_origin().map(|n| graph.label(n)).collect();
        labels.reverse();
        labels
    }
}

/// Walk predecessor links from `destination` back to `origin`.
///
/// Holds no state between calls. Fails with [`PathError::NoPathFound`] when
/// a node on the way has no predecessor, and with
/// [`PathError::CycleDetected`] when the walk exceeds the node-count bound.
pub fn reconstruct_path(
    predecessors: &PredecessorMap,
    origin: NodeId,
    destination: NodeId,
) -> Result<Path, PathError> {
    let bound = predecessors.len() + 1;
    let mut hops = SmallVec::new();
    let mut current = destination;

    while current != origin {
        if hops.len() == bound {
            return Err(PathError::CycleDetected {
                destination: destination.index(),
                bound,
            });
        }
        hops.push(current);
        current = *predecessors
            .get(&current)
            .ok_or(PathError::NoPathFound {
                destination: destination.index(),
            })?;
    }

    Ok(Path { origin, hops })
}

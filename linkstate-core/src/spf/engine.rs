//! Dijkstra Engine
//!
//! # Algorithm
//!
//! 1. The origin is finalized up front and kept out of the distance and
//!    predecessor maps. Its direct neighbors start at the link cost with the
//!    origin as predecessor; every other node starts unreachable. This state
//!    is snapshot 0.
//! 2. Each round selects the cheapest tentative node, breaking ties by node
//!    order. When only unreachable nodes remain the first of them is taken,
//!    so a run always takes exactly `node_count - 1` rounds.
//! 3. The selected node relaxes its tentative neighbors. Only a strictly
//!    cheaper path replaces a predecessor, so the first optimal path found
//!    wins.
//! 4. The state is snapshotted, then the node is finalized.
//!
//! Selection is a linear scan rather than a heap: the per-step snapshot
//! already costs O(n), and the scan gives the tie-breaking for free.

use super::cost::Cost;
use super::snapshot::{DistanceMap, PredecessorMap, Snapshot};
use super::trace::SpfTrace;
use crate::error::SpfError;
use crate::graph::{Graph, NodeId};

/// Run the engine from the node labelled `origin`.
///
/// Fails with [`SpfError::EmptyGraph`] or [`SpfError::UnknownOrigin`] before
/// any work is done.
pub fn compute_shortest_paths(graph: &Graph, origin: &str) -> Result<SpfTrace, SpfError> {
    if graph.is_empty() {
        return Err(SpfError::EmptyGraph);
    }
    let origin = graph
        .node_id(origin)
        .ok_or_else(|| SpfError::UnknownOrigin(origin.to_owned()))?;
    compute_shortest_paths_from(graph, origin)
}

/// Run the engine from `origin`.
pub fn compute_shortest_paths_from(graph: &Graph, origin: NodeId) -> Result<SpfTrace, SpfError> {
    if graph.is_empty() {
        return Err(SpfError::EmptyGraph);
    }
    if !graph.contains(origin) {
        return Err(SpfError::UnknownOrigin(origin.to_string()));
    }

    let node_count = graph.node_count();
    tracing::debug!(
        origin = graph.label(origin),
        nodes = node_count,
        edges = graph.edge_count(),
        "computing shortest paths"
    );

    let mut distances = DistanceMap::with_capacity(node_count - 1);
    let mut predecessors = PredecessorMap::with_capacity(node_count - 1);
    for node in graph.nodes().filter(|&n| n != origin) {
        match graph.weight(origin, node) {
            Some(weight) => {
                distances.insert(node, Cost::Finite(u128::from(weight)));
                predecessors.insert(node, origin);
            }
            None => {
                distances.insert(node, Cost::Unreachable);
            }
        }
    }

    let mut snapshots = Vec::with_capacity(node_count);
    snapshots.push(Snapshot::new(distances.clone(), predecessors.clone()));

    // Kept in node order so the first minimum is also the lowest index.
    let mut tentative: Vec<NodeId> = graph.nodes().filter(|&n| n != origin).collect();
    let mut finalized = vec![false; node_count];
    finalized[origin.index()] = true;

    let mut processed = Vec::with_capacity(node_count);
    processed.push(origin);

    while let Some((position, selected)) = select_cheapest(&tentative, &distances) {
        let base = cost_of(&distances, selected);
        tracing::trace!(
            step = processed.len(),
            node = graph.label(selected),
            cost = %base,
            "selected"
        );

        for (neighbor, weight) in graph.neighbors(selected) {
            if finalized[neighbor.index()] {
                continue;
            }
            let candidate = base.extend(weight);
            if candidate < cost_of(&distances, neighbor) {
                tracing::trace!(
                    node = graph.label(neighbor),
                    via = graph.label(selected),
                    cost = %candidate,
                    "relaxed"
                );
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, selected);
            }
        }

        snapshots.push(Snapshot::new(distances.clone(), predecessors.clone()));

        tentative.remove(position);
        finalized[selected.index()] = true;
        processed.push(selected);
    }

    let reachable = distances.values().filter(|c| c.is_finite()).count();
    tracing::debug!(
        steps = snapshots.len(),
        reachable,
        unreachable = distances.len() - reachable,
        "shortest paths computed"
    );

    Ok(SpfTrace::new(origin, snapshots, processed))
}

/// Position and id of the cheapest tentative node, lowest index on ties.
fn select_cheapest(tentative: &[NodeId], distances: &DistanceMap) -> Option<(usize, NodeId)> {
    tentative
        .iter()
        .copied()
        .enumerate()
        .min_by_key(|&(_, node)| (cost_of(distances, node), node))
}

fn cost_of(distances: &DistanceMap, node: NodeId) -> Cost {
    distances.get(&node).copied().unwrap_or(Cost::Unreachable)
}

//! Forwarding Table
//!
//! Maps each destination to the origin's neighbor on the shortest path to
//! it. Built once from the final predecessor map.

use indexmap::IndexMap;

use super::path::reconstruct_path;
use crate::error::PathError;
use crate::graph::{Graph, NodeId};
use crate::spf::{PredecessorMap, SpfTrace};

/// Destination to next-hop mapping for one origin.
///
/// Only reachable destinations have an entry. Entries are in the order the
/// destinations were passed to the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingTable {
    origin: NodeId,
    entries: IndexMap<NodeId, NodeId>,
}

impl ForwardingTable {
    /// Build the table for a finished engine run.
    pub fn from_trace(trace: &SpfTrace, graph: &Graph) -> Result<Self, PathError> {
        build_forwarding_table(trace.final_predecessors(), trace.origin(), graph.nodes())
    }

    /// The router this table belongs to.
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// The neighbor to forward to for `destination`.
    pub fn next_hop(&self, destination: NodeId) -> Option<NodeId> {
        self.entries.get(&destination).copied()
    }

    /// Whether `destination` has a route.
    pub fn contains(&self, destination: NodeId) -> bool {
        self.entries.contains_key(&destination)
    }

    /// `(destination, next_hop)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeId, NodeId)> + '_ {
        self.entries.iter().map(|(&d, &h)| (d, h))
    }

    /// Number of routed destinations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no destination is routed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive the next hop for every non-origin node in `nodes`.
///
/// Unreachable destinations are left out. A predecessor cycle aborts the
/// build: it means the predecessor map is corrupt.
pub fn build_forwarding_table<I>(
    predecessors: &PredecessorMap,
    origin: NodeId,
    nodes: I,
) -> Result<ForwardingTable, PathError>
where
    I: IntoIterator<Item = NodeId>,
{
    let mut entries = IndexMap::new();

    for destination in nodes.into_iter().filter(|&d| d != origin) {
        match reconstruct_path(predecessors, origin, destination) {
            Ok(path) => {
                if let Some(hop) = path.next_hop() {
                    entries.insert(destination, hop);
                }
            }
            Err(PathError::NoPathFound { .. }) => {
                tracing::debug!(%destination, "no route, leaving destination out");
            }
            Err(err) => {
                tracing::error!(%destination, error = %err, "corrupt predecessor map");
                return Err(err);
            }
        }
    }

    Ok(ForwardingTable { origin, entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spf::compute_shortest_paths;

    #[test]
    fn triangle_routes_through_b() {
        let graph =
            Graph::try_from_edges([("A", "B", 1), ("B", "C", 2), ("A", "C", 5)]).unwrap();
        let trace = compute_shortest_paths(&graph, "A").unwrap();
        let table = ForwardingTable::from_trace(&trace, &graph).unwrap();
        let [a, b, c] = ["A", "B", "C"].map(|l| graph.node_id(l).unwrap());

        assert_eq!(table.origin(), a);
        assert_eq!(table.len(), 2);
        assert_eq!(table.next_hop(b), Some(b));
        assert_eq!(table.next_hop(c), Some(b));
        assert_eq!(table.next_hop(a), None);
    }

    #[test]
    fn unreachable_destinations_are_omitted() {
        let mut graph = Graph::try_from_edges([("A", "B", 4)]).unwrap();
        graph.add_edge("C", "D", 1).unwrap();
        let trace = compute_shortest_paths(&graph, "A").unwrap();
        let table = ForwardingTable::from_trace(&trace, &graph).unwrap();

        let routed: Vec<_> = table.iter().map(|(d, _)| graph.label(d)).collect();
        assert_eq!(routed, ["B"]);
        assert!(!table.contains(graph.node_id("C").unwrap()));
    }

    #[test]
    fn isolated_origin_has_empty_table() {
        let mut graph = Graph::new();
        graph.add_node("A");
        graph.add_edge("B", "C", 1).unwrap();
        let trace = compute_shortest_paths(&graph, "A").unwrap();

        assert!(ForwardingTable::from_trace(&trace, &graph).unwrap().is_empty());
    }

    #[test]
    fn cycle_aborts_the_build() {
        let [o, x, y] = [0, 1, 2].map(NodeId::from);
        let predecessors: PredecessorMap = [(x, y), (y, x)].into_iter().collect();

        assert!(matches!(
            build_forwarding_table(&predecessors, o, [o, x, y]),
            Err(PathError::CycleDetected { .. })
        ));
    }
}

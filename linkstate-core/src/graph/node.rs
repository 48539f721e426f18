//! Graph Nodes and Edges
//!
//! This module defines the identifiers and edge records stored in a
//! [`Graph`](super::Graph).

use std::fmt;

/// Identifier for a node in a [`Graph`](super::Graph).
///
/// Ids are dense indices assigned in the order nodes are first seen, so
/// comparing two ids compares their position in `Graph::nodes()`. The engine
/// relies on this for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Get the raw index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An undirected weighted edge.
///
/// Endpoints are stored in insertion order (`a` was given first), but the
/// edge is traversable in both directions at the same cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// First endpoint.
    pub a: NodeId,
    /// Second endpoint.
    pub b: NodeId,
    /// Traversal cost in either direction.
    pub weight: u64,
}

impl Edge {
    /// Whether this edge joins `u` and `v`, in either orientation.
    pub fn joins(&self, u: NodeId, v: NodeId) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }

    /// The endpoint opposite `node`, or `None` if `node` is not an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_order_by_index() {
        let first = NodeId::from(0);
        let second = NodeId::from(1);
        assert!(first < second);
        assert_eq!(second.index(), 1);
        assert_eq!(second.to_string(), "#1");
    }

    #[test]
    fn edge_is_undirected() {
        let edge = Edge {
            a: NodeId::from(0),
            b: NodeId::from(2),
            weight: 7,
        };

        assert!(edge.joins(NodeId::from(0), NodeId::from(2)));
        assert!(edge.joins(NodeId::from(2), NodeId::from(0)));
        assert!(!edge.joins(NodeId::from(0), NodeId::from(1)));

        assert_eq!(edge.other(NodeId::from(2)), Some(NodeId::from(0)));
        assert_eq!(edge.other(NodeId::from(1)), None);
    }
}

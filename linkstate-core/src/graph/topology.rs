//! Graph Topology
//!
//! The [`Graph`] owns the node labels and the adjacency lists. It is built
//! once (usually by the edge-list loader) and then only read: the engine,
//! the renderer and the formatters all take `&Graph`.

use indexmap::{IndexMap, IndexSet};

use super::node::{Edge, NodeId};
use crate::error::GraphError;

/// A weighted undirected graph with string-labelled nodes.
///
/// Node order is the order in which labels were first seen, either through
/// [`Graph::add_node`] or as an endpoint of [`Graph::add_edge`]. That order
/// is stable and defines the engine's tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node labels; a label's position is its `NodeId`.
    labels: IndexSet<String>,

    /// Per-node neighbor weights, indexed by `NodeId`. Neighbor order is
    /// insertion order.
    adjacency: Vec<IndexMap<NodeId, u64>>,

    /// Every edge once, in insertion order.
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(a, b, weight)` triples.
    pub fn try_from_edges<'a, I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (&'a str, &'a str, i64)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Declare a node, returning its id.
    ///
    /// Declaring an existing label returns the id it already has.
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(index) = self.labels.get_index_of(label) {
            return NodeId::from(index);
        }
        let (index, _) = self.labels.insert_full(label.to_owned());
        self.adjacency.push(IndexMap::new());
        NodeId::from(index)
    }

    /// Insert an undirected edge between `a` and `b`.
    ///
    /// Unseen endpoints are declared, `a` before `b`. The graph is left
    /// untouched when the edge is rejected.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: i64) -> Result<(), GraphError> {
        let weight = u64::try_from(weight).map_err(|_| GraphError::InvalidWeight {
            a: a.to_owned(),
            b: b.to_owned(),
            weight,
        })?;

        if a == b {
            return Err(GraphError::SelfLoop(a.to_owned()));
        }

        if let (Some(u), Some(v)) = (self.node_id(a), self.node_id(b)) {
            if self.adjacency[u.index()].contains_key(&v) {
                return Err(GraphError::DuplicateEdge {
                    a: a.to_owned(),
                    b: b.to_owned(),
                });
            }
        }

        let u = self.add_node(a);
        let v = self.add_node(b);
        self.adjacency[u.index()].insert(v, weight);
        self.adjacency[v.index()].insert(u, weight);
        self.edges.push(Edge { a: u, b: v, weight });

        tracing::trace!(a, b, weight, "edge added");
        Ok(())
    }

    /// All nodes, in first-seen order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(NodeId::from)
    }

    /// The conventional origin: the first node ever seen.
    pub fn default_origin(&self) -> Option<NodeId> {
        (!self.labels.is_empty()).then(|| NodeId::from(0))
    }

    /// Neighbors of `node` with the weight of the connecting edge.
    ///
    /// Empty for isolated nodes and for ids that are not in this graph.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, u64)> + '_ {
        self.adjacency
            .get(node.index())
            .into_iter()
            .flat_map(|adjacent| adjacent.iter().map(|(&v, &w)| (v, w)))
    }

    /// Weight of the edge joining `u` and `v`, if there is one.
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<u64> {
        self.adjacency.get(u.index())?.get(&v).copied()
    }

    /// Every edge once, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a node by label.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.labels.get_index_of(label).map(NodeId::from)
    }

    /// The label of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not belong to this graph.
    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node.index()]
    }

    /// Whether `node` belongs to this graph.
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.labels.len()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

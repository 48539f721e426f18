//! Network Graph
//!
//! This module implements the topology the shortest-path engine runs on.
//!
//! # Overview
//!
//! The graph is undirected and weighted:
//!
//! - Nodes are routers, identified by a string label and interned into a
//!   dense [`NodeId`]
//! - Edges are links with a non-negative integer cost, traversable both ways
//!
//! # Design Decisions
//!
//! 1. Node order is first-seen order and never changes. The engine breaks
//!    ties by this order and the formatter lays out its columns by it.
//!
//! 2. Adjacency is stored per node for O(1) neighbor lookup, and the edge
//!    list is kept separately so renderers can emit each link once.
//!
//! 3. A graph is immutable once handed to the engine. It is `Send + Sync`
//!    and can be shared by concurrent runs from different origins.

mod node;
mod topology;

pub use node::{Edge, NodeId};
pub use topology::Graph;

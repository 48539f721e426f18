//! Linkstate Core
//!
//! This crate computes link-state routes: single-source least-cost paths
//! over a weighted undirected graph, and the next-hop forwarding table the
//! origin router derives from them.
//! It implements:
//!
//! - An undirected weighted graph with stable node order
//! - A Dijkstra engine that records a snapshot of its state at every step
//! - Bounded path reconstruction from predecessor maps
//! - Forwarding table derivation
//! - Adapters for loading edge lists, drawing graphs and printing results
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: Topology model
//! - `spf`: Shortest-path engine and its trace
//! - `routing`: Path reconstruction and forwarding tables
//! - `adapters`: Loader, renderer and formatters
//! - `error`: Error types
//!
//! # Example
//!
//! ```rust
//! use linkstate_core::adapters::parse_edge_list;
//! use linkstate_core::compute_routes;
//!
//! let graph = parse_edge_list("source,destination,weight\nA,B,1\nB,C,2\nA,C,5\n".as_bytes())?;
//! let (trace, table) = compute_routes(&graph, None)?;
//!
//! let c = graph.node_id("C").unwrap();
//! assert_eq!(trace.distance(c).and_then(|cost| cost.value()), Some(3));
//! assert_eq!(table.next_hop(c), graph.node_id("B"));
//! # Ok::<(), linkstate_core::LinkStateError>(())
//! ```

pub mod adapters;
pub mod error;
pub mod graph;
pub mod routing;
pub mod spf;

pub use error::LinkStateError;
pub use graph::{Graph, NodeId};
pub use routing::ForwardingTable;
pub use spf::{compute_shortest_paths, SpfTrace};

/// Run the engine and derive the forwarding table in one go.
///
/// `origin` defaults to the first node of the graph.
pub fn compute_routes(
    graph: &Graph,
    origin: Option<&str>,
) -> Result<(SpfTrace, ForwardingTable), LinkStateError> {
    let trace = match origin {
        Some(label) => spf::compute_shortest_paths(graph, label)?,
        None => {
            let first = graph.default_origin().ok_or(error::SpfError::EmptyGraph)?;
            spf::compute_shortest_paths_from(graph, first)?
        }
    };
    let table = ForwardingTable::from_trace(&trace, graph)?;
    Ok((trace, table))
}

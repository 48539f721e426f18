//! Shortest Path First
//!
//! The link-state computation: a Dijkstra run from one origin that records
//! its full state after every step.
//!
//! # Output
//!
//! A run produces an [`SpfTrace`]:
//!
//! - one [`Snapshot`] per node, holding the distance map and predecessor map
//!   as they stood after that step (step 0 is initialization)
//! - the processed sequence, i.e. the order nodes were finalized in
//!
//! The trace is the single source of truth for everything downstream. Path
//! reconstruction and the forwarding table read its final predecessor map;
//! the trace formatter reads every snapshot.
//!
//! # Conventions
//!
//! The origin never appears in a distance or predecessor map. It is
//! finalized before the first snapshot and its cost of zero is implicit.

mod cost;
mod engine;
mod snapshot;
mod trace;

pub use cost::Cost;
pub use engine::{compute_shortest_paths, compute_shortest_paths_from};
pub use snapshot::{DistanceMap, PredecessorMap, Snapshot};
pub use trace::SpfTrace;

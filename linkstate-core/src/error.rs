//! Error Types
//!
//! Each stage of the pipeline has its own error enum, built with `thiserror`:
//!
//! - [`GraphError`]: rejected edges while building a graph
//! - [`SpfError`]: preconditions of the shortest-path engine
//! - [`PathError`]: predecessor walks that cannot reach the origin
//! - [`LoadError`]: edge-list parsing
//!
//! [`LinkStateError`] wraps all of them for callers that drive the whole
//! pipeline and only want one error type.
//!
//! # Severity
//!
//! Structural errors (`InvalidWeight`, `EmptyGraph`, `UnknownOrigin`,
//! `MalformedRecord`) are raised before the engine runs. `NoPathFound` is
//! routine: the forwarding table builder turns it into a missing entry.
//! `CycleDetected` can only come from corrupted predecessor data and is
//! treated as fatal.

use thiserror::Error;

/// Top-level error for the link-state pipeline.
#[derive(Error, Debug)]
pub enum LinkStateError {
    /// Graph construction failure.
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// Engine precondition failure.
    #[error("shortest path error: {0}")]
    Spf(#[from] SpfError),

    /// Path reconstruction failure.
    #[error("path error: {0}")]
    Path(#[from] PathError),

    /// Edge-list loading failure.
    #[error("load error: {0}")]
    Load(#[from] LoadError),
}

/// Errors raised while inserting edges into a [`Graph`](crate::graph::Graph).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Edge weights must be non-negative.
    #[error("invalid weight {weight} on edge {a} -- {b}: weights must be non-negative")]
    InvalidWeight {
        /// First endpoint label.
        a: String,
        /// Second endpoint label.
        b: String,
        /// The rejected weight.
        weight: i64,
    },

    /// An edge may not connect a node to itself.
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(String),

    /// At most one edge may join any pair of nodes.
    #[error("duplicate edge {a} -- {b}")]
    DuplicateEdge {
        /// First endpoint label.
        a: String,
        /// Second endpoint label.
        b: String,
    },
}

/// Precondition failures of the shortest-path engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpfError {
    /// The graph has no nodes.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// The requested origin is not a node of the graph.
    #[error("origin {0:?} is not a node of the graph")]
    UnknownOrigin(String),
}

/// Failures of a predecessor walk.
///
/// Node identifiers are reported by raw index; the predecessor map carries
/// no labels.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The walk hit a node without a predecessor before reaching the origin.
    #[error("no path from origin to node #{destination}")]
    NoPathFound {
        /// Raw index of the unreachable destination.
        destination: usize,
    },

    /// The walk did not reach the origin within the node-count bound.
    #[error("predecessor cycle detected while walking from node #{destination} (bound {bound})")]
    CycleDetected {
        /// Raw index of the destination the walk started from.
        destination: usize,
        /// Maximum number of steps the walk was allowed.
        bound: usize,
    },
}

/// Errors while reading an edge list.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be parsed.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the input.
        line: usize,
        /// What was wrong with the record.
        reason: String,
    },

    /// A well-formed record was rejected by the graph.
    #[error("line {line}: {source}")]
    Graph {
        /// 1-based line number in the input.
        line: usize,
        /// The graph's rejection.
        #[source]
        source: GraphError,
    },
}

impl LoadError {
    /// The 1-based input line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::Io(_) => None,
            LoadError::MalformedRecord { line, .. } | LoadError::Graph { line, .. } => Some(*line),
        }
    }
}

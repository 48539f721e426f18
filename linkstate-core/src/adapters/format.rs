//! Result Formatting
//!
//! Text and JSON views of an engine run:
//!
//! - [`TraceTable`]: the classic step table, one row per step and one
//!   `D(x),P(x)` column per destination
//! - [`ForwardingTableView`]: one `destination -> (origin, next-hop)` line
//!   per destination
//! - [`RoutingReport`]: both of the above as a serializable structure
//!
//! The views borrow the graph for labels and never modify anything.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::graph::{Graph, NodeId};
use crate::routing::ForwardingTable;
use crate::spf::{Cost, SpfTrace};

/// The per-step trace of an engine run, rendered as a text table.
///
/// ```text
/// Step  N'   D(B),P(B)  D(C),P(C)
/// -------------------------------
/// 0     A    1,A        5,A
/// 1     AB              3,B
/// 2     ABC
/// ```
///
/// A destination's cell is blank once it is in the finalized set `N'`,
/// `cost,predecessor` while a path is known and `∞` otherwise.
pub struct TraceTable<'a> {
    graph: &'a Graph,
    trace: &'a SpfTrace,
    ascii: bool,
    rule: char,
}

impl<'a> TraceTable<'a> {
    /// A table for `trace`, labelled from `graph`.
    ///
    /// # Panics
    ///
    /// Formatting panics if `trace` was computed on a different graph.
    pub fn new(graph: &'a Graph, trace: &'a SpfTrace) -> Self {
        debug_assert!(graph.contains(trace.origin()));
        Self {
            graph,
            trace,
            ascii: false,
            rule: '-',
        }
    }

    /// Write `inf` instead of `∞`.
    pub fn ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    /// Character used for the horizontal rules.
    pub fn rule(mut self, rule: char) -> Self {
        self.rule = rule;
        self
    }

    fn destinations(&self) -> Vec<NodeId> {
        let origin = self.trace.origin();
        self.graph.nodes().filter(|&n| n != origin).collect()
    }

    fn rows(&self, destinations: &[NodeId]) -> Vec<Vec<String>> {
        let mut rows = Vec::with_capacity(self.trace.len() + 1);

        let mut header = vec!["Step".to_owned(), "N'".to_owned()];
        header.extend(destinations.iter().map(|&d| {
            let label = self.graph.label(d);
            format!("D({label}),P({label})")
        }));
        rows.push(header);

        for (step, snapshot) in self.trace.snapshots().iter().enumerate() {
            let finalized = self.trace.finalized_at(step);
            let mut row = vec![step.to_string(), join_labels(self.graph, finalized)];

            for &destination in destinations {
                let cell = if finalized.contains(&destination) {
                    String::new()
                } else {
                    match (snapshot.distance(destination), snapshot.predecessor(destination)) {
                        (Some(Cost::Finite(cost)), Some(previous)) => {
                            format!("{cost},{}", self.graph.label(previous))
                        }
                        _ if self.ascii => "inf".to_owned(),
                        _ => Cost::Unreachable.to_string(),
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }

        rows
    }
}

impl fmt::Display for TraceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let destinations = self.destinations();
        let rows = self.rows(&destinations);

        let columns = destinations.len() + 2;
        let mut widths = vec![0; columns];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let total = widths.iter().sum::<usize>() + 2 * (columns - 1);
        let rule: String = std::iter::repeat(self.rule).take(total).collect();

        writeln!(f, "{rule}")?;
        for (index, row) in rows.iter().enumerate() {
            let mut line = String::new();
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    line.push_str("  ");
                }
                line.push_str(cell);
                let padding = widths[column] - cell.chars().count();
                line.extend(std::iter::repeat(' ').take(padding));
            }
            writeln!(f, "{}", line.trim_end())?;
            if index == 0 {
                writeln!(f, "{rule}")?;
            }
        }
        writeln!(f, "{rule}")
    }
}

/// A forwarding table rendered one destination per line.
///
/// ```text
/// Destination -> Link
/// B -> (A, B)
/// C -> (A, B)
/// D -> unreachable
/// ```
pub struct ForwardingTableView<'a> {
    graph: &'a Graph,
    table: &'a ForwardingTable,
}

impl<'a> ForwardingTableView<'a> {
    /// A view of `table`, labelled from `graph`.
    ///
    /// # Panics
    ///
    /// Formatting panics if `table` was built for a different graph.
    pub fn new(graph: &'a Graph, table: &'a ForwardingTable) -> Self {
        debug_assert!(graph.contains(table.origin()));
        Self { graph, table }
    }
}

impl fmt::Display for ForwardingTableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = self.table.origin();
        let origin_label = self.graph.label(origin);

        writeln!(f, "Destination -> Link")?;
        for destination in self.graph.nodes().filter(|&n| n != origin) {
            let label = self.graph.label(destination);
            match self.table.next_hop(destination) {
                Some(hop) => writeln!(f, "{label} -> ({origin_label}, {})", self.graph.label(hop))?,
                None => writeln!(f, "{label} -> unreachable")?,
            }
        }
        Ok(())
    }
}

/// Serializable summary of one run, keyed by node label.
#[derive(Debug, Serialize)]
pub struct RoutingReport<'a> {
    origin: &'a str,
    processed: Vec<&'a str>,
    steps: Vec<StepReport<'a>>,
    forwarding: IndexMap<&'a str, &'a str>,
    unreachable: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct StepReport<'a> {
    step: usize,
    finalized: Vec<&'a str>,
    distances: IndexMap<&'a str, Cost>,
    predecessors: IndexMap<&'a str, &'a str>,
}

impl<'a> RoutingReport<'a> {
    /// Collect the report for a run and its forwarding table.
    ///
    /// # Panics
    ///
    /// Panics if `trace` or `table` belongs to a different graph.
    pub fn new(graph: &'a Graph, trace: &'a SpfTrace, table: &'a ForwardingTable) -> Self {
        let labels = move |nodes: &[NodeId]| -> Vec<&'a str> {
            nodes.iter().map(|&n| graph.label(n)).collect()
        };

        let steps = trace
            .snapshots()
            .iter()
            .enumerate()
            .map(|(step, snapshot)| StepReport {
                step,
                finalized: labels(trace.finalized_at(step)),
                distances: snapshot
                    .distances()
                    .iter()
                    .map(|(&n, &cost)| (graph.label(n), cost))
                    .collect(),
                predecessors: snapshot
                    .predecessors()
                    .iter()
                    .map(|(&n, &p)| (graph.label(n), graph.label(p)))
                    .collect(),
            })
            .collect();

        let origin = trace.origin();
        let unreachable = graph
            .nodes()
            .filter(|&n| n != origin && !table.contains(n))
            .map(|n| graph.label(n))
            .collect();

        Self {
            origin: graph.label(origin),
            processed: labels(trace.processed()),
            steps,
            forwarding: table
                .iter()
                .map(|(d, h)| (graph.label(d), graph.label(h)))
                .collect(),
            unreachable,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Labels of `nodes` concatenated, textbook style, when every label is a
/// single character; comma-separated otherwise.
fn join_labels(graph: &Graph, nodes: &[NodeId]) -> String {
    let labels: Vec<&str> = nodes.iter().map(|&n| graph.label(n)).collect();
    if labels.iter().all(|l| l.chars().count() == 1) {
        labels.concat()
    } else {
        labels.join(",")
    }
}

//! Edge List Loader
//!
//! Reads the comma-separated edge list format:
//!
//! ```text
//! source,destination,weight
//! A,B,4
//! B,C,2
//! ```
//!
//! The first line is a header and is always skipped, whatever it contains.
//! Fields are trimmed and fields past the third are ignored. Every other
//! line must be a record: a blank line is malformed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::LoadError;
use crate::graph::Graph;

/// Parse an edge list from any buffered reader.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<Graph, LoadError> {
    let mut graph = Graph::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        if index == 0 {
            tracing::trace!(header = line.as_str(), "skipping header");
            continue;
        }

        let record = line.trim();
        let (a, b, weight) = parse_record(record).map_err(|reason| LoadError::MalformedRecord {
            line: number,
            reason,
        })?;
        graph
            .add_edge(a, b, weight)
            .map_err(|source| LoadError::Graph {
                line: number,
                source,
            })?;
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "edge list parsed"
    );
    Ok(graph)
}

/// Open and parse the edge list at `path`.
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<Graph, LoadError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading edge list");
    let file = File::open(path)?;
    parse_edge_list(BufReader::new(file))
}

fn parse_record(record: &str) -> Result<(&str, &str, i64), String> {
    let mut fields = record.split(',').map(str::trim);
    let (Some(a), Some(b), Some(weight)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(format!("expected source,destination,weight but got {record:?}"));
    };

    if a.is_empty() || b.is_empty() {
        return Err("empty node label".to_owned());
    }

    let weight = weight
        .parse::<i64>()
        .map_err(|_| format!("weight {weight:?} is not an integer"))?;
    Ok((a, b, weight))
}

//! # Route Command
//!
//! Loads an edge list, runs the link-state computation from one origin and
//! prints the forwarding table followed by the per-step trace table, or a
//! single JSON report. Optionally writes a Graphviz rendering with the
//! shortest-path tree highlighted.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use linkstate_core::adapters::{
    load_edge_list, DotRenderer, ForwardingTableView, GraphRenderer, RoutingReport, TraceTable,
};
use linkstate_core::compute_routes;

use crate::config::{CliConfig, OutputFormat};

/// Arguments for the route computation.
#[derive(Args, Debug, Clone, Default)]
pub struct RouteArgs {
    /// Edge list: a header line, then `source,destination,weight` records.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Origin router label. Defaults to the first node in the input.
    #[arg(long, short)]
    pub origin: Option<String>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write a Graphviz DOT rendering of the topology to this path.
    #[arg(long, value_name = "FILE")]
    pub dot: Option<PathBuf>,

    /// Print `inf` instead of `∞` in the step table.
    #[arg(long)]
    pub ascii: bool,
}

/// Flags merged with the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSettings {
    /// Origin router label; `None` means the first node.
    pub origin: Option<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Print `inf` instead of `∞`.
    pub ascii: bool,
    /// Where to write a Graphviz rendering.
    pub dot: Option<PathBuf>,
}

impl RouteSettings {
    /// Command-line flags take precedence over the config file.
    pub fn resolve(args: &RouteArgs, config: &CliConfig) -> Self {
        Self {
            origin: args.origin.clone().or_else(|| config.origin.clone()),
            format: args.format.or(config.format).unwrap_or_default(),
            ascii: args.ascii || config.ascii.unwrap_or(false),
            dot: args.dot.clone().or_else(|| config.dot.clone()),
        }
    }
}

/// Execute the route command, printing results to `out`.
pub fn run_route(args: &RouteArgs, config: &CliConfig, out: &mut dyn Write) -> Result<()> {
    let settings = RouteSettings::resolve(args, config);

    let graph = load_edge_list(&args.input)
        .with_context(|| format!("failed to load edge list: {}", args.input.display()))?;
    let (trace, table) = compute_routes(&graph, settings.origin.as_deref())?;

    tracing::info!(
        origin = graph.label(trace.origin()),
        routed = table.len(),
        "routes computed"
    );

    if let Some(path) = &settings.dot {
        let file = File::create(path)
            .with_context(|| format!("failed to create DOT file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        DotRenderer::new()
            .named("linkstate")
            .with_tree(trace.final_predecessors())
            .render(&graph, &mut writer)
            .and_then(|()| writer.flush())
            .with_context(|| format!("failed to write DOT file: {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote graph rendering");
    }

    match settings.format {
        OutputFormat::Table => {
            write!(out, "{}", ForwardingTableView::new(&graph, &table))?;
            writeln!(out)?;
            write!(
                out,
                "{}",
                TraceTable::new(&graph, &trace).ascii(settings.ascii)
            )?;
        }
        OutputFormat::Json => {
            let report = RoutingReport::new(&graph, &trace, &table);
            writeln!(out, "{}", report.to_json_pretty()?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_list(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn run(args: &RouteArgs, config: &CliConfig) -> Result<String> {
        let mut out = Vec::new();
        run_route(args, config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_forwarding_then_trace() {
        let input = edge_list("source,destination,weight\nA,B,1\nB,C,2\nA,C,5\n");
        let args = RouteArgs {
            input: input.path().to_path_buf(),
            ..Default::default()
        };

        let text = run(&args, &CliConfig::default()).unwrap();
        let forwarding = text.find("C -> (A, B)").unwrap();
        let trace = text.find("D(C),P(C)").unwrap();
        assert!(forwarding < trace);
    }

    #[test]
    fn json_report_from_config() {
        let input = edge_list("h\nA,B,1\nB,C,2\n");
        let args = RouteArgs {
            input: input.path().to_path_buf(),
            ..Default::default()
        };
        let config = CliConfig {
            origin: Some("C".into()),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };

        let text = run(&args, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["origin"], "C");
        assert_eq!(value["forwarding"]["A"], "B");
    }

    #[test]
    fn flags_override_config() {
        let args = RouteArgs {
            origin: Some("x".into()),
            format: Some(OutputFormat::Table),
            ..Default::default()
        };
        let config = CliConfig {
            origin: Some("y".into()),
            format: Some(OutputFormat::Json),
            ascii: Some(true),
            dot: None,
        };

        let settings = RouteSettings::resolve(&args, &config);
        assert_eq!(settings.origin.as_deref(), Some("x"));
        assert_eq!(settings.format, OutputFormat::Table);
        assert!(settings.ascii);
    }

    #[test]
    fn writes_dot_file() {
        let input = edge_list("h\nA,B,1\n");
        let dir = tempfile::tempdir().unwrap();
        let dot = dir.path().join("graph.dot");
        let args = RouteArgs {
            input: input.path().to_path_buf(),
            dot: Some(dot.clone()),
            ..Default::default()
        };

        run(&args, &CliConfig::default()).unwrap();
        let rendered = std::fs::read_to_string(dot).unwrap();
        assert!(rendered.contains("\"A\" -- \"B\""));
    }

    #[test]
    fn unknown_origin_fails() {
        let input = edge_list("h\nA,B,1\n");
        let args = RouteArgs {
            input: input.path().to_path_buf(),
            origin: Some("Z".into()),
            ..Default::default()
        };

        let err = run(&args, &CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("\"Z\""));
    }

    #[test]
    fn malformed_input_names_the_file() {
        let input = edge_list("h\nA,B\n");
        let args = RouteArgs {
            input: input.path().to_path_buf(),
            ..Default::default()
        };

        let err = run(&args, &CliConfig::default()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("failed to load edge list"));
        assert!(message.contains("line 2"));
    }
}

//! Graph Rendering
//!
//! Renderers turn a [`Graph`] into a picture description. The only built-in
//! one emits Graphviz DOT, which `dot -Tpng` or any DOT viewer can draw.
//! Rendering reads the graph and never feeds anything back into it.

use std::io::{self, Write};

use crate::graph::{Edge, Graph};
use crate::spf::PredecessorMap;

/// Something that can draw a graph.
pub trait GraphRenderer {
    /// Write a rendering of `graph` to `out`.
    fn render(&self, graph: &Graph, out: &mut dyn Write) -> io::Result<()>;
}

/// Graphviz DOT output.
///
/// Every edge is drawn once with its weight as label. When a predecessor
/// map is attached, the shortest-path tree edges are drawn bold.
#[derive(Debug, Clone, Default)]
pub struct DotRenderer<'a> {
    name: Option<String>,
    tree: Option<&'a PredecessorMap>,
}

impl<'a> DotRenderer<'a> {
    /// A renderer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the DOT graph name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Highlight the tree described by `predecessors`.
    pub fn with_tree(mut self, predecessors: &'a PredecessorMap) -> Self {
        self.tree = Some(predecessors);
        self
    }

    fn on_tree(&self, edge: &Edge) -> bool {
        self.tree.is_some_and(|tree| {
            tree.get(&edge.b) == Some(&edge.a) || tree.get(&edge.a) == Some(&edge.b)
        })
    }
}

impl GraphRenderer for DotRenderer<'_> {
    fn render(&self, graph: &Graph, out: &mut dyn Write) -> io::Result<()> {
        match &self.name {
            Some(name) => writeln!(out, "graph {} {{", quote(name))?,
            None => writeln!(out, "graph {{")?,
        }

        for node in graph.nodes() {
            writeln!(out, "    {};", quote(graph.label(node)))?;
        }

        for edge in graph.edges() {
            write!(
                out,
                "    {} -- {} [label=\"{}\"",
                quote(graph.label(edge.a)),
                quote(graph.label(edge.b)),
                edge.weight
            )?;
            if self.on_tree(edge) {
                write!(out, ", penwidth=2.5")?;
            }
            writeln!(out, "];")?;
        }

        writeln!(out, "}}")
    }
}

/// Render `graph` to a `String` with `renderer`.
pub fn render_to_string(renderer: &dyn GraphRenderer, graph: &Graph) -> io::Result<String> {
    let mut buffer = Vec::new();
    renderer.render(graph, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn quote(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}

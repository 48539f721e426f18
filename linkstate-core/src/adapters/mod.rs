//! I/O Adapters
//!
//! The collaborators that sit around the core computation. None of them is
//! called by the engine; callers wire them together explicitly:
//!
//! - [`loader`]: edge-list text to [`Graph`](crate::graph::Graph)
//! - [`render`]: graph to a drawing description (Graphviz DOT)
//! - [`format`]: engine results to text tables and JSON
//!
//! There are no default file paths or global state here. Every function
//! takes the reader, path or writer it works on.

pub mod format;
pub mod loader;
pub mod render;

pub use format::{ForwardingTableView, RoutingReport, TraceTable};
pub use loader::{load_edge_list, parse_edge_list};
pub use render::{render_to_string, DotRenderer, GraphRenderer};

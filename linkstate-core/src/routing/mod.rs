//! Routing
//!
//! Everything derived from a finished engine run's predecessor map:
//! explicit paths and the origin's forwarding table.

mod forwarding;
mod path;

pub use forwarding::{build_forwarding_table, ForwardingTable};
pub use path::{reconstruct_path, Path};

//! # linkstate-cli: Command-Line Front End
//!
//! Provides the `linkstate` binary. The library half holds the argument
//! types, the config file format and the command implementation so they
//! can be tested without spawning a process.
//!
//! ```bash
//! linkstate input.txt
//! linkstate input.txt --origin u --format json
//! linkstate input.txt --dot topology.dot -vv
//! ```

pub mod config;
pub mod route;

//! # Configuration
//!
//! Optional JSON configuration file for the `linkstate` command. Every key
//! is optional and a command-line flag always wins over the file:
//!
//! ```json
//! {
//!   "origin": "u",
//!   "format": "table",
//!   "ascii": true,
//!   "dot": "topology.dot"
//! }
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;

/// How results are printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Forwarding table followed by the step table.
    #[default]
    Table,
    /// One JSON report.
    Json,
}

/// Contents of a `--config` file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Origin router label.
    pub origin: Option<String>,
    /// Output format.
    pub format: Option<OutputFormat>,
    /// Print `inf` instead of `∞`.
    pub ascii: Option<bool>,
    /// Where to write a Graphviz rendering.
    pub dot: Option<PathBuf>,
}

impl CliConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

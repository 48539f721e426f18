//! # linkstate CLI entry point
//!
//! Parses command-line arguments, sets up logging and runs the route
//! command.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use linkstate_cli::config::CliConfig;
use linkstate_cli::route::{run_route, RouteArgs};

/// Link-state routing calculator.
///
/// Computes least-cost paths from one router with Dijkstra's algorithm and
/// prints the resulting forwarding table and the step-by-step trace.
#[derive(Parser, Debug)]
#[command(name = "linkstate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    route: RouteArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("linkstate v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(path) => match CliConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{e:#}");
                return ExitCode::from(1);
            }
        },
        None => CliConfig::default(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run_route(&cli.route, &config, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

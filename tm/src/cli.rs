//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TaskMesh - periodic producer/consumer task harness
#[derive(Parser, Debug)]
#[command(
    name = "tm",
    author,
    version,
    about = "Run periodic tasks that exchange samples through named queues",
    after_help = "Snapshots are printed to stdout; diagnostics go to stderr. Setting RUST_LOG replaces the default level (and --verbose) entirely."
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start every task, poll the store, then stop everything
    Run {
        /// Number of snapshots to take (overrides config)
        #[arg(short, long)]
        ticks: Option<u32>,

        /// Milliseconds between snapshots (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show each task's period and routing table
    Topology,

    /// Print the effective configuration as YAML
    ShowConfig,
}

/// Output format for snapshots
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

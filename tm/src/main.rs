//! TaskMesh - periodic task harness
//!
//! CLI entry point: runs the task set and acts as the store's reader.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{info, warn};

use taskmesh::cli::{Cli, Command, OutputFormat};
use taskmesh::config::Config;
use taskmesh::{Harness, SharedStore};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };

    // RUST_LOG, when set, replaces the flag-derived level entirely
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::default().add_directive(level.into()),
    };

    // Diagnostics on stderr so snapshots on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        Some(Command::Run {
            ticks,
            interval_ms,
            format,
        }) => cmd_run(config, ticks, interval_ms, format),
        Some(Command::Topology) => cmd_topology(&config),
        Some(Command::ShowConfig) => cmd_show_config(&config),
        None => cmd_run(config, None, None, OutputFormat::Text),
    }
}

/// Start every task, poll the store, then stop every task
fn cmd_run(mut config: Config, ticks: Option<u32>, interval_ms: Option<u64>, format: OutputFormat) -> Result<()> {
    if let Some(ticks) = ticks {
        config.reader.ticks = ticks;
    }
    if let Some(interval_ms) = interval_ms {
        config.reader.interval_ms = interval_ms;
    }
    config.validate().context("Invalid configuration")?;

    info!(
        tasks = config.tasks.len(),
        ticks = config.reader.ticks,
        interval_ms = config.reader.interval_ms,
        "Starting task harness"
    );

    let mut harness = Harness::new(config.tasks.clone(), SharedStore::global());
    harness.start_all().context("Failed to start tasks")?;

    harness.poll(config.reader.ticks, config.reader.interval(), |tick, snapshot| match format {
        OutputFormat::Text => println!("{} {}", format!("[{:>4}]", tick).dimmed(), snapshot),
        OutputFormat::Json => match serde_json::to_string(&serde_json::json!({ "tick": tick, "snapshot": snapshot })) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!(error = %e, "Failed to serialize snapshot"),
        },
    });

    harness.stop_all();

    let stats = harness.stats();
    match format {
        OutputFormat::Text => {
            println!();
            println!("{}", "Task stats:".bold());
            for (name, stats) in stats {
                println!(
                    "  {:<8} iterations={} received={} applied={} rejected={} sent={} dropped={} missing_queue={}",
                    name.cyan(),
                    stats.iterations,
                    stats.received,
                    stats.applied,
                    stats.rejected.to_string().yellow(),
                    stats.sent,
                    stats.dropped.to_string().yellow(),
                    stats.missing_queue.to_string().yellow(),
                );
            }
        }
        OutputFormat::Json => {
            let tasks: serde_json::Map<String, serde_json::Value> = stats
                .into_iter()
                .map(|(name, stats)| serde_json::to_value(stats).map(|value| (name, value)))
                .collect::<Result<_, serde_json::Error>>()
                .context("Failed to serialize task stats")?;
            println!("{}", serde_json::json!({ "stats": tasks }));
        }
    }

    Ok(())
}

/// Print each task's period and routes
fn cmd_topology(config: &Config) -> Result<()> {
    for task in &config.tasks {
        println!("{} ({}ms)", task.name.cyan().bold(), task.period_ms);
        for route in &task.coord_routes {
            println!("  coord -> {} as {}", route.to, route.kind.to_string().green());
        }
        for route in &task.angle_routes {
            println!("  angle -> {} as {}", route.to, route.kind.to_string().green());
        }
    }
    Ok(())
}

fn cmd_show_config(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}

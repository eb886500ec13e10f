//! Social Network Simulator
//!
//! Builds a small network of users and groups, lets random activity play
//! out, then prints every user's message log.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use social_core::config::default_config_toml;
use social_core::events::NotificationLogger;
use social_core::output::{self, StatsCollector};
use social_core::setup;
use social_core::{ActivitySimulator, Notification, SimConfig};

/// Command line arguments for the simulator
#[derive(Parser, Debug)]
#[command(name = "social_sim")]
#[command(about = "An in-memory social network activity simulator")]
struct Args {
    /// TOML configuration file (defaults to the demo network)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of random actions to simulate (overrides the config)
    #[arg(long)]
    actions: Option<usize>,

    /// Write every notification as JSONL to this path
    #[arg(long)]
    events: Option<PathBuf>,

    /// Write a JSON snapshot of the final network to this path
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr, stdout carries the notifications
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.dump_config {
        return match default_config_toml() {
            Ok(toml) => {
                print!("{}", toml);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut config = match &args.config {
        Some(path) => match SimConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    if args.seed.is_some() {
        config.simulation.seed = args.seed;
    }
    if let Some(actions) = args.actions {
        config.simulation.num_actions = actions;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: invalid scenario: {}", e);
        return ExitCode::FAILURE;
    }

    let mut logger = match &args.events {
        Some(path) => match NotificationLogger::new(path) {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("Error: could not open {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => NotificationLogger::null(),
    };

    let mut stats = StatsCollector::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Setup
    let (mut network, setup_notes) = setup::build_network(&config.scenario);
    if let Err(e) = emit(&setup_notes, &mut out, &mut logger, &mut stats) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    // Random activity
    let mut simulator = ActivitySimulator::new(config.simulation.seed);
    if let Err(e) = output::write_activity_header(&mut out) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    let activity = simulator.run(&mut network, config.simulation.num_actions);
    if let Err(e) = emit(&activity, &mut out, &mut logger, &mut stats) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    // Final report
    let report = output::write_message_logs(&mut out, &network).and_then(|()| out.flush());
    if let Err(e) = report {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = logger.flush() {
        tracing::warn!("Could not flush notification log: {}", e);
    }

    if let Some(path) = &args.snapshot {
        let snapshot = output::generate_snapshot(&network, simulator.seed(), &stats);
        if let Err(e) = output::write_snapshot(path, &snapshot) {
            eprintln!("Warning: Could not write snapshot: {}", e);
        }
    }

    tracing::info!(
        notifications = stats.total,
        logged = logger.event_count(),
        steps = simulator.steps_run(),
        "simulation complete"
    );

    ExitCode::SUCCESS
}

/// Print a batch of notifications, log them and count them.
fn emit<W: Write>(
    batch: &[Notification],
    out: &mut W,
    logger: &mut NotificationLogger,
    stats: &mut StatsCollector,
) -> io::Result<()> {
    output::write_notifications(out, batch)?;
    logger.log_batch(batch)?;
    stats.record(batch);
    Ok(())
}

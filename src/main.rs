//! Payladder CLI - career progression ledger and salary calculator
//!
//! Usage: payladder [--data-dir <PATH>] [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   join     Add a user to a track at a starting level
//!   upgrade  Move a user to a new level
//!   earn     Record badges at the user's current level
//!   salary   Show a user's salary with its breakdown
//!   history  Show a user's ledger rows
//!   check    Validate the reference tables and the ledger file

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use payladder::config::{Config, Verbosity};
use payladder::presentation::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to resolve the working directory")?;
    let (mut config, warnings) =
        Config::load_or_default(Some(&cwd)).context("failed to load configuration")?;
    if let Some(dir) = &cli.data_dir {
        config.data.dir = dir.clone();
    }
    config.output.json |= cli.json;
    config.output.verbosity = config.output.verbosity.raised_by(cli.verbose);

    init_tracing(config.output.verbosity);
    for warning in &warnings {
        warn!("{warning}");
    }
    debug!(data_dir = %config.data.dir.display(), command = cli.command.name(), "starting");

    commands::run(&cli.command, &config)
}

fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("payladder={}", verbosity.filter_directive())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

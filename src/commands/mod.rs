//! Command handlers for the `payladder` binary
//!
//! Each handler builds its use case from the resolved config, runs it and
//! renders the outcome to stdout.

mod check;
mod progression;
mod query;

use anyhow::{anyhow, Result};

use payladder::config::Config;
use payladder::domain::ports::{CatalogueError, LedgerStoreError};
use payladder::error::PayladderError;
use payladder::presentation::{Commands, OutputFormat, Renderer};

pub fn run(command: &Commands, config: &Config) -> Result<()> {
    let renderer = Renderer::new(
        OutputFormat::from_json_flag(config.output.json),
        command.name(),
    );

    let result = match command {
        Commands::Salary { user } => query::cmd_salary(&user.key(), config, &renderer),
        Commands::History { user } => query::cmd_history(&user.key(), config, &renderer),
        Commands::Check => check::cmd_check(config, &renderer),
        Commands::Join { .. } | Commands::Upgrade { .. } | Commands::Earn { .. } => {
            command
                .action_request()
                .ok_or_else(|| anyhow!("'{}' does not change the ledger", command.name()))
                .and_then(|request| progression::cmd_action(&request, config, &renderer))
        }
    };

    if let Err(err) = &result {
        let message = format!("{err:#}");
        let mut out = std::io::stdout().lock();
        // Best effort: the error still reaches stderr through main.
        let _ = renderer.error(&mut out, error_code(err), &message);
    }
    result
}

fn error_code(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<PayladderError>() {
            return e.kind();
        }
        if cause.downcast_ref::<CatalogueError>().is_some() {
            return "catalogue";
        }
        if cause.downcast_ref::<LedgerStoreError>().is_some() {
            return "ledger_store";
        }
    }
    "internal"
}

use anyhow::{Context, Result};
use tracing::info;

use payladder::config::Config;
use payladder::presentation::factory::create_check_use_case;
use payladder::presentation::Renderer;

pub fn cmd_check(config: &Config, renderer: &Renderer) -> Result<()> {
    let use_case = create_check_use_case(&config.data)
        .context("failed to load the salary grid and badge catalogue")?;
    let report = use_case
        .execute()
        .with_context(|| format!("cannot read ledger in {}", config.data.dir.display()))?;

    info!(issues = report.issues.len(), "check finished");

    let mut out = std::io::stdout().lock();
    renderer.check(&mut out, &report)?;
    Ok(())
}

use anyhow::{Context, Result};

use payladder::config::Config;
use payladder::domain::value_objects::UserKey;
use payladder::presentation::factory::create_query_use_case;
use payladder::presentation::Renderer;

pub fn cmd_salary(user: &UserKey, config: &Config, renderer: &Renderer) -> Result<()> {
    let use_case = create_query_use_case(&config.data)
        .context("failed to load the salary grid and badge catalogue")?;
    let breakdown = use_case
        .salary(user)
        .with_context(|| format!("cannot compute salary for {user}"))?;

    let mut out = std::io::stdout().lock();
    renderer.salary(&mut out, &breakdown)?;
    Ok(())
}

pub fn cmd_history(user: &UserKey, config: &Config, renderer: &Renderer) -> Result<()> {
    let use_case = create_query_use_case(&config.data)
        .context("failed to load the salary grid and badge catalogue")?;
    let history = use_case
        .history(user)
        .with_context(|| format!("cannot read history for {user}"))?;

    let mut out = std::io::stdout().lock();
    renderer.history(&mut out, &history)?;
    Ok(())
}

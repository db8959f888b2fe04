use anyhow::{Context, Result};

use payladder::application::ActionRequest;
use payladder::config::Config;
use payladder::presentation::factory::create_progression_use_case;
use payladder::presentation::Renderer;

pub fn cmd_action(request: &ActionRequest, config: &Config, renderer: &Renderer) -> Result<()> {
    let use_case = create_progression_use_case(&config.data)
        .context("failed to load the salary grid and badge catalogue")?;

    let result = use_case
        .execute(request)
        .with_context(|| format!("{} rejected for {}", request.kind, request.user))?;

    let mut out = std::io::stdout().lock();
    renderer.action(&mut out, &result)?;
    Ok(())
}

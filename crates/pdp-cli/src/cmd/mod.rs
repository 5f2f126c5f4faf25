pub mod assessment;
pub mod config;
pub mod generate;
pub mod init;
pub mod library;
pub mod review;
pub mod rotation;
pub mod show;
pub mod tiers;

use anyhow::Context;
use pdp_core::config::Config;
use pdp_core::generator::PlanGenerator;
use std::path::Path;

/// Build a generator from the project config: its library source and
/// rating strictness.
pub fn load_generator(root: &Path) -> anyhow::Result<(Config, PlanGenerator)> {
    let config = Config::load(root).context("failed to load config")?;
    let source = config.library_source(root);
    let generator = PlanGenerator::from_source(source.as_ref())
        .context("failed to load content library")?
        .require_complete_ratings(config.generation.require_complete_ratings);
    Ok((config, generator))
}

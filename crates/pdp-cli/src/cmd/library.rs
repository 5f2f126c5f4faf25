use crate::output::{format_minutes, print_json, print_table};
use anyhow::Context;
use pdp_core::config::Config;
use pdp_core::library::ContentItem;
use pdp_core::types::{Difficulty, TierId};
use std::path::Path;

pub fn run(
    root: &Path,
    tier: Option<&str>,
    difficulty: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let tier: Option<TierId> = tier.map(str::parse).transpose()?;
    let difficulty: Option<Difficulty> = difficulty.map(str::parse).transpose()?;

    let config = Config::load(root).context("failed to load config")?;
    let library = config
        .library_source(root)
        .load()
        .context("failed to load content library")?;

    let items: Vec<&ContentItem> = library
        .items()
        .iter()
        .filter(|i| tier.map_or(true, |t| i.tier == t))
        .filter(|i| difficulty.map_or(true, |d| i.difficulty == d))
        .collect();

    if json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("No content items match.");
        return Ok(());
    }

    let rows = items
        .iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                i.tier.to_string(),
                i.difficulty.to_string(),
                i.content_type.to_string(),
                format_minutes(i.duration),
                i.skill.clone(),
                i.title.clone(),
            ]
        })
        .collect();
    print_table(
        &["ID", "TIER", "DIFFICULTY", "TYPE", "DURATION", "SKILL", "TITLE"],
        rows,
    );
    println!("\n{} item(s)", items.len());
    Ok(())
}

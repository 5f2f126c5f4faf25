use crate::cmd::{assessment, load_generator};
use crate::output::{format_minutes, print_json, print_table};
use anyhow::Context;
use pdp_core::config::WarnLevel;
use pdp_core::plan::Plan;
use pdp_core::store::{FilePlanStore, PlanStore};
use std::path::Path;
use tracing::warn;

pub fn run(root: &Path, file: &Path, owner: &str, dry_run: bool, json: bool) -> anyhow::Result<()> {
    pdp_core::paths::validate_owner_uid(owner)?;
    let (config, generator) = load_generator(root)?;
    for w in config.validate(root) {
        if w.level == WarnLevel::Warning {
            warn!("{}", w.message);
        }
    }

    let assessment = assessment::load(file)?;
    let plan = generator
        .generate(&assessment, owner)
        .with_context(|| format!("failed to generate plan from {}", file.display()))?;

    if !dry_run {
        FilePlanStore::new(root)
            .save(&plan)
            .with_context(|| format!("failed to store plan for '{owner}'"))?;
    }

    if json {
        return print_json(&plan);
    }

    print_plan(&plan);
    if dry_run {
        println!("\nDry run: plan not stored.");
    } else {
        println!("\nStored plan for '{owner}'.");
    }
    Ok(())
}

/// One row per month: tier, theme, item count and time.
pub fn print_plan(plan: &Plan) {
    let rows = plan
        .plan
        .iter()
        .map(|m| {
            vec![
                m.month.to_string(),
                m.tier.to_string(),
                m.theme.clone(),
                m.required_content.len().to_string(),
                format_minutes(m.total_duration),
                m.status.to_string(),
            ]
        })
        .collect();
    print_table(&["MONTH", "TIER", "THEME", "ITEMS", "TIME", "STATUS"], rows);
    println!(
        "\nTotal: {} item(s), {}",
        plan.items().count(),
        format_minutes(plan.total_duration())
    );
}

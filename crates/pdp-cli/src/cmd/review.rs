use crate::output::{format_minutes, print_json, print_table};
use anyhow::Context;
use pdp_core::config::Config;
use pdp_core::review::{PlanComparison, PlanSummary};
use pdp_core::store::{FilePlanStore, PlanStore};
use pdp_core::tier::tier_name;
use pdp_core::types::Difficulty;
use std::path::Path;

pub fn run(root: &Path, owner: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let plan = FilePlanStore::new(root).load(owner)?;
    let summary = PlanSummary::of(&plan);
    let comparison = PlanComparison::against(&summary, &config.generation.generic_baseline);

    if json {
        return print_json(&serde_json::json!({
            "owner_uid": plan.owner_uid,
            "summary": summary,
            "comparison": comparison,
        }));
    }

    println!("Plan review for {}\n", plan.owner_uid);
    println!(
        "{} months, {} item(s), {}",
        summary.months,
        summary.items,
        format_minutes(summary.total_duration)
    );
    for d in Difficulty::all() {
        println!("  {:<8} {}", d.to_string(), summary.count(*d));
    }
    if summary.empty_months > 0 {
        println!("  {} month(s) with no remaining content", summary.empty_months);
    }

    println!();
    let rows = summary
        .rotation
        .iter()
        .map(|t| {
            vec![
                t.to_string(),
                tier_name(*t).to_string(),
                summary
                    .months_per_tier
                    .get(t)
                    .copied()
                    .unwrap_or(0)
                    .to_string(),
            ]
        })
        .collect();
    print_table(&["TIER", "NAME", "MONTHS"], rows);

    println!("\nCompared with a generic plan:");
    println!("  time saved:          {:+} min", comparison.duration_difference);
    println!("  intro items skipped: {:+}", comparison.intro_difference);
    println!("  extra mastery items: {:+}", comparison.mastery_difference);
    Ok(())
}

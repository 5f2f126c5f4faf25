use crate::cmd::assessment;
use crate::output::print_json;
use anyhow::Context;
use pdp_core::rotation::RotationPlanner;
use pdp_core::tier::tier_name;
use std::path::Path;

pub fn run(file: &Path, json: bool) -> anyhow::Result<()> {
    let assessment = assessment::load(file)?;
    assessment
        .validate(false)
        .with_context(|| format!("{} is not a valid assessment", file.display()))?;
    let rotation = RotationPlanner::default().plan(&assessment);

    if json {
        return print_json(&rotation);
    }

    println!("Rotation:");
    for (slot, tier) in rotation.queue().iter().enumerate() {
        println!("  {}. {tier}  {}", slot + 1, tier_name(*tier));
    }
    if rotation.fired().is_empty() {
        println!("Rules applied: none");
    } else {
        println!("Rules applied: {}", rotation.fired().join(", "));
    }
    Ok(())
}

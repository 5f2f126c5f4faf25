use crate::cmd::generate::print_plan;
use crate::output::{format_minutes, print_json, print_table};
use pdp_core::plan::PlanMonth;
use pdp_core::store::{FilePlanStore, PlanStore};
use std::path::Path;

pub fn run(root: &Path, owner: &str, month: Option<u32>, json: bool) -> anyhow::Result<()> {
    let plan = FilePlanStore::new(root).load(owner)?;

    let Some(n) = month else {
        if json {
            return print_json(&plan);
        }
        println!("Plan for {} (current month {})\n", plan.owner_uid, plan.current_month);
        print_plan(&plan);
        return Ok(());
    };

    let month = plan.month(n)?;
    if json {
        return print_json(month);
    }
    print_month(month);
    Ok(())
}

fn print_month(month: &PlanMonth) {
    println!("Month {}: {} ({})", month.month, month.theme, month.tier);
    println!("Status: {}\n", month.status);

    if month.required_content.is_empty() {
        println!("No content left for this tier.");
        return;
    }

    let rows = month
        .required_content
        .iter()
        .map(|i| {
            vec![
                i.id.to_string(),
                i.difficulty.to_string(),
                i.content_type.to_string(),
                format_minutes(i.duration),
                i.status.to_string(),
                i.title.clone(),
            ]
        })
        .collect();
    print_table(&["ID", "DIFFICULTY", "TYPE", "TIME", "STATUS", "TITLE"], rows);
    println!("\nTotal: {}", format_minutes(month.total_duration));
    if !month.reflection_text.is_empty() {
        println!("Reflection: {}", month.reflection_text);
    }
}

use crate::output::{print_json, print_table};
use pdp_core::tier::catalog;

pub fn run(json: bool) -> anyhow::Result<()> {
    let tiers = catalog();
    if json {
        return print_json(&tiers);
    }

    let rows = tiers
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.name.to_string(),
                t.icon.to_string(),
                t.color.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "ICON", "COLOR"], rows);
    Ok(())
}

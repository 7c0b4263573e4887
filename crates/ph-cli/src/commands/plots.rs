use comfy_table::{ContentArrangement, Table};

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let director = ctx.open()?;
    let plots = director.plots();

    if plots.is_empty() {
        println!("  No plots in the repertoire.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "ID",
        "Title",
        "Min budget",
        "Production",
        "Roles",
        "Demand",
        "Required ranks",
    ]);

    for plot in &plots {
        let ranks = if plot.required_ranks.is_empty() {
            "-".to_string()
        } else {
            plot.required_ranks
                .iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            plot.id.to_string(),
            plot.title.clone(),
            plot.minimum_budget.to_string(),
            plot.production_cost.to_string(),
            plot.roles_count.to_string(),
            plot.demand.to_string(),
            ranks,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} plots", plots.len());

    Ok(())
}

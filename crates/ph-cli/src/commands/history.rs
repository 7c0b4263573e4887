use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ph_core::PerformanceId;

use super::Context;

pub fn list(ctx: &Context) -> Result<(), String> {
    let director = ctx.open()?;
    let history = director.performances().map_err(|e| e.to_string())?;

    if history.is_empty() {
        println!("  No performances yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "ID", "Year", "Title", "Plot", "Budget", "Revenue", "Profit", "Status",
    ]);

    for s in &history {
        let p = s.performance;
        let (revenue, profit, status) = if p.is_completed {
            (p.revenue.to_string(), p.profit().to_string(), "completed")
        } else {
            ("-".to_string(), "-".to_string(), "pending")
        };
        table.add_row(vec![
            p.id.to_string(),
            p.year.to_string(),
            p.title.clone(),
            s.plot_title.to_string(),
            p.budget.to_string(),
            revenue,
            profit,
            status.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} performances", history.len());

    Ok(())
}

pub fn show(ctx: &Context, performance: u32) -> Result<(), String> {
    let director = ctx.open()?;
    let details = director
        .performance_details(PerformanceId(performance))
        .map_err(|e| e.to_string())?;
    let p = details.performance;

    println!("  {} #{} ({})", p.title.bold(), p.id, p.year);
    println!(
        "  Plot: {} (demand {}, production {})",
        details.plot.title, details.plot.demand, details.plot.production_cost
    );
    if p.is_completed {
        println!(
            "  Spent {}, revenue {}, profit {}",
            p.budget,
            p.revenue,
            p.profit()
        );
    } else {
        println!(
            "  Committed budget {}, cast {}/{}",
            p.budget,
            details.cast.len(),
            details.plot.roles_count
        );
    }
    println!();

    if details.cast.is_empty() {
        println!("  {}", "No cast yet.".dimmed());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Role", "Actor", "Rank", "Contract"]);
    for member in &details.cast {
        let (name, rank) = match member.actor {
            Some(a) => (a.name.to_string(), a.rank.to_string()),
            None => (format!("(departed #{})", member.casting.actor_id), "-".to_string()),
        };
        table.add_row(vec![
            member.casting.role.clone(),
            name,
            rank,
            member.casting.contract_cost.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}

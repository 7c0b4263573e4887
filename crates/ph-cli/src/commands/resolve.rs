use colored::Colorize;

use ph_core::PerformanceId;
use ph_engine::FateTier;

use super::Context;

pub fn run(ctx: &Context, performance: u32) -> Result<(), String> {
    let out = ctx.update(|d| {
        d.resolve_performance(PerformanceId(performance))
            .map_err(|e| e.to_string())
    })?;

    let tier = match out.tier {
        FateTier::Flop => out.tier.to_string().red(),
        FateTier::Normal => out.tier.to_string().normal(),
        FateTier::Hit => out.tier.to_string().green(),
    };
    println!("  {} #{performance}: {tier}", "Performance".bold());
    println!("  Revenue             {}", out.revenue);
    println!("  Committed budget    {}", out.original_budget);
    println!("  Unexpected expenses {}", out.unexpected_expenses);
    println!("  Total expenses      {}", out.budget);
    println!("  Saved budget        {}", out.saved_budget);
    let profit = if out.profit >= 0 {
        out.profit.to_string().green()
    } else {
        out.profit.to_string().red()
    };
    println!("  Profit              {profit}");
    println!();

    if out.awarded_actors.is_empty() {
        println!("  {}", "No awards this season.".dimmed());
    }
    for a in &out.awarded_actors {
        match a.promoted_to {
            Some(rank) => println!(
                "  Award: {} (total {}), promoted to {rank}",
                a.name, a.awards_count
            ),
            None => println!("  Award: {} (total {})", a.name, a.awards_count),
        }
    }
    println!();
    println!("  Year {}, capital {}", out.year, out.capital);

    Ok(())
}

pub fn skip(ctx: &Context) -> Result<(), String> {
    let skip = ctx.update(|d| d.skip_year().map_err(|e| e.to_string()))?;
    println!(
        "Sold staging rights for {}. Year {}, capital {}",
        skip.rights_sale, skip.year, skip.capital
    );
    Ok(())
}

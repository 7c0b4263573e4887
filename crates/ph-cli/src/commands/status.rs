use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let director = ctx.open()?;
    let house = director.playhouse();
    let state = director.game_state();

    println!("  {} {}", "Year".bold(), state.current_year);
    println!("  {} {}", "Capital".bold(), state.capital);
    println!(
        "  {} actors, {} plots",
        house.actor_count(),
        house.plots().len()
    );

    let pending: Vec<_> = house
        .performances()
        .into_iter()
        .filter(|p| !p.is_completed)
        .collect();
    if pending.is_empty() {
        println!("  {}", "No performance in preparation.".dimmed());
    }
    for perf in pending {
        let cast = house.cast_of(perf.id).len();
        let roles = house
            .plot(perf.plot_id)
            .map(|p| p.roles_count)
            .unwrap_or_default();
        println!(
            "  Pending: #{} '{}' ({}), budget {}, cast {cast}/{roles}",
            perf.id, perf.title, perf.year, perf.budget
        );
    }

    Ok(())
}

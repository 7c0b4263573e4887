use ph_core::PlayhouseStore;
use ph_engine::Director;

use super::Context;

pub fn run(ctx: &Context, force: bool) -> Result<(), String> {
    if ctx.store().exists() && !force {
        return Err(format!(
            "a game already exists at {}; use --force to start over",
            ctx.state.display()
        ));
    }

    let director = Director::new_game(ctx.config()).map_err(|e| e.to_string())?;
    ctx.save(&director)?;

    let state = director.game_state();
    println!("Created a new game in {}", ctx.state.display());
    println!(
        "  {} actors, {} plots, {} past performances",
        director.actors().len(),
        director.plots().len(),
        director.playhouse().performances().len()
    );
    println!("  Year {}, capital {}", state.current_year, state.capital);
    println!();
    println!("Get started:");
    println!("  ph plots       # Browse the repertoire");
    println!("  ph actors      # Meet the company");
    println!("  ph produce ... # Stage this year's performance");
    println!("  ph skip        # Or sell the rights and sit the year out");

    Ok(())
}

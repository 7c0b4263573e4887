use colored::Colorize;

use ph_core::{ActorId, Money, PerformanceId, PlotId};
use ph_engine::{CastPlan, Director, RankWarning};

use super::Context;

/// A `--role` argument: `NAME=ACTOR` or `NAME=ACTOR:COST`.
#[derive(Debug, PartialEq, Eq)]
struct RoleArg {
    role: String,
    actor: ActorId,
    cost: Option<Money>,
}

fn parse_role(arg: &str) -> Result<RoleArg, String> {
    let (role, rest) = arg
        .split_once('=')
        .ok_or_else(|| format!("invalid role '{arg}' (expected NAME=ACTOR[:COST])"))?;
    let (actor, cost) = match rest.split_once(':') {
        Some((actor, cost)) => (actor, Some(cost)),
        None => (rest, None),
    };
    let actor = actor
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid actor ID in role '{arg}'"))?;
    let cost = cost
        .map(|c| c.trim().parse::<Money>())
        .transpose()
        .map_err(|_| format!("invalid contract cost in role '{arg}'"))?;
    Ok(RoleArg {
        role: role.trim().to_string(),
        actor: ActorId(actor),
        cost,
    })
}

fn contract_or_quote(director: &Director, actor: ActorId, cost: Option<Money>) -> Result<Money, String> {
    match cost {
        Some(cost) => Ok(cost),
        None => director
            .preview_contract_cost(actor)
            .map(|q| q.total)
            .map_err(|e| e.to_string()),
    }
}

fn print_warning(w: &RankWarning) {
    println!(
        "  {} actor #{} ({}) is below the recommended {} for '{}'",
        "warning:".yellow(),
        w.actor,
        w.actor_rank,
        w.required,
        w.role
    );
}

pub fn run(ctx: &Context, title: &str, plot: u32, budget: Money, roles: &[String]) -> Result<(), String> {
    let parsed = roles
        .iter()
        .map(|r| parse_role(r))
        .collect::<Result<Vec<_>, _>>()?;

    let staged = ctx.update(|d| {
        let mut plan = CastPlan::new();
        for r in &parsed {
            let cost = contract_or_quote(d, r.actor, r.cost)?;
            plan.push(r.role.as_str(), r.actor, cost);
        }
        let staged = d
            .stage_performance(title, PlotId(plot), budget, &plan)
            .map_err(|e| e.to_string())?;
        Ok((staged, plan.total_cost(), d.game_state()))
    })?;
    let (staged, cast_cost, state) = staged;

    println!(
        "{} performance #{} '{title}' for {}",
        "Staged".bold(),
        staged.performance,
        state.current_year
    );
    println!("  Budget {budget}, cast contracts {cast_cost}");
    println!("  Capital remaining {}", state.capital);
    for w in &staged.warnings {
        print_warning(w);
    }
    println!();
    println!("  Run `ph resolve {}` to open the season.", staged.performance);

    Ok(())
}

pub fn commit(ctx: &Context, title: &str, plot: u32, budget: Money, year: Option<u32>) -> Result<(), String> {
    let (id, year, capital) = ctx.update(|d| {
        let year = year.unwrap_or(d.game_state().current_year);
        let id = d
            .commit_performance(title, PlotId(plot), year, budget)
            .map_err(|e| e.to_string())?;
        Ok((id, year, d.game_state().capital))
    })?;

    println!("Committed performance #{id} '{title}' for {year} with budget {budget}");
    println!("  Capital remaining {capital}");
    Ok(())
}

pub fn assign(ctx: &Context, performance: u32, actor: u32, role: &str, cost: Option<Money>) -> Result<(), String> {
    let actor = ActorId(actor);
    let (cost, warning) = ctx.update(|d| {
        let cost = contract_or_quote(d, actor, cost)?;
        let warning = d
            .assign_cast(PerformanceId(performance), actor, role, cost)
            .map_err(|e| e.to_string())?;
        Ok((cost, warning))
    })?;

    println!("Cast actor #{actor} as '{role}' in #{performance} for {cost}");
    if let Some(w) = warning {
        print_warning(&w);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_role_with_cost() {
        let r = parse_role("Nina Zarechnaya=3:180000").unwrap();
        assert_eq!(
            r,
            RoleArg {
                role: "Nina Zarechnaya".into(),
                actor: ActorId(3),
                cost: Some(180_000),
            }
        );
    }

    #[test]
    fn parse_role_without_cost() {
        let r = parse_role("Masha=7").unwrap();
        assert_eq!(r.actor, ActorId(7));
        assert_eq!(r.cost, None);
    }

    #[test]
    fn parse_role_rejects_garbage() {
        assert!(parse_role("Masha").is_err());
        assert!(parse_role("Masha=seven").is_err());
        assert!(parse_role("Masha=7:lots").is_err());
    }
}

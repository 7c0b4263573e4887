//! Casting and budget validator.
//!
//! A performance is committed against capital first, then cast one role at a
//! time ([`assign_cast`]) or all at once from a checked [`CastPlan`]
//! ([`stage_performance`]). Rank requirements are advisory: a shortfall comes
//! back as a [`RankWarning`] and is logged, never rejected.

use std::collections::HashSet;

use ph_core::text::require_text;
use ph_core::{
    ActorId, Casting, Money, PerformanceId, Playhouse, PlayhouseError, Plot, PlotId, Rank,
    SeasonEvent,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};

/// One role of a cast plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleAssignment {
    /// Role name.
    pub role: String,
    /// Actor cast in the role.
    pub actor: ActorId,
    /// Agreed fee.
    pub contract_cost: Money,
}

/// A full cast for a plot, in role order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CastPlan {
    roles: Vec<RoleAssignment>,
}

impl CastPlan {
    /// An empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a role.
    pub fn with_role(mut self, role: impl Into<String>, actor: ActorId, contract_cost: Money) -> Self {
        self.push(role, actor, contract_cost);
        self
    }

    /// Append a role.
    pub fn push(&mut self, role: impl Into<String>, actor: ActorId, contract_cost: Money) {
        self.roles.push(RoleAssignment {
            role: role.into(),
            actor,
            contract_cost,
        });
    }

    /// Roles in order.
    pub fn roles(&self) -> &[RoleAssignment] {
        &self.roles
    }

    /// Number of roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the plan has no roles.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Sum of all contract costs.
    pub fn total_cost(&self) -> Money {
        self.roles.iter().map(|r| r.contract_cost).sum()
    }
}

/// An actor cast below the rank the plot asks for in that role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankWarning {
    /// Zero-based role position.
    pub role_index: usize,
    /// Role name.
    pub role: String,
    /// The cast actor.
    pub actor: ActorId,
    /// The actor's rank.
    pub actor_rank: Rank,
    /// Rank the plot asks for.
    pub required: Rank,
}

/// Result of staging a performance in one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Staged {
    /// The committed performance.
    pub performance: PerformanceId,
    /// Advisory rank shortfalls of the cast.
    pub warnings: Vec<RankWarning>,
}

fn rank_warning(plot: &Plot, index: usize, role: &str, actor: ActorId, rank: Rank) -> Option<RankWarning> {
    let required = plot.required_rank(index)?;
    if rank >= required {
        return None;
    }
    warn!(role, %actor, %rank, %required, "actor is below the recommended rank");
    Some(RankWarning {
        role_index: index,
        role: role.to_string(),
        actor,
        actor_rank: rank,
        required,
    })
}

fn check_role(role: &str) -> EngineResult<&str> {
    if role.trim().is_empty() {
        return Err(EngineError::EmptyRoleName);
    }
    Ok(require_text("role", role)?)
}

fn check_cost(cost: Money) -> EngineResult<()> {
    if cost <= 0 {
        return Err(PlayhouseError::Validation("contract cost must be positive".into()).into());
    }
    Ok(())
}

/// Check a whole cast against a plot and budget before anything is written.
///
/// Fails on an empty role name, an unknown actor, an actor used twice, a
/// role count different from the plot's, a non-positive fee, or fees that
/// add up to more than `budget`. Returns the advisory rank warnings.
pub fn validate_plan(
    house: &Playhouse,
    plot: &Plot,
    budget: Money,
    plan: &CastPlan,
) -> EngineResult<Vec<RankWarning>> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();

    for (index, entry) in plan.roles().iter().enumerate() {
        let role = check_role(&entry.role)?;
        let actor = house.require_actor(entry.actor)?;
        if !seen.insert(entry.actor) {
            return Err(EngineError::DuplicateActorInCast(entry.actor));
        }
        check_cost(entry.contract_cost)?;
        warnings.extend(rank_warning(plot, index, role, actor.id, actor.rank));
    }

    if plan.len() != plot.roles_count as usize {
        return Err(EngineError::CastIncomplete {
            expected: plot.roles_count,
            got: plan.len(),
        });
    }

    let total = plan.total_cost();
    if total > budget {
        return Err(EngineError::CastOverBudget { total, budget });
    }

    Ok(warnings)
}

/// Commit a budget to a new performance of `plot_id` in `year`.
///
/// The budget is debited from capital immediately. The current year does not
/// move.
pub fn commit_performance(
    house: &mut Playhouse,
    title: &str,
    plot_id: PlotId,
    year: u32,
    budget: Money,
) -> EngineResult<PerformanceId> {
    house.transact(|draft| -> EngineResult<PerformanceId> {
        let mut state = draft.state();
        if budget > state.capital {
            return Err(EngineError::InsufficientCapital {
                budget,
                capital: state.capital,
            });
        }
        let minimum = draft.require_plot(plot_id)?.minimum_budget;
        if budget < minimum {
            return Err(EngineError::BudgetBelowMinimum { budget, minimum });
        }

        let id = draft.insert_performance(title, plot_id, year, budget)?;
        state.capital -= budget;
        draft.set_state(state)?;

        let title = draft.require_performance(id)?.title.clone();
        info!(performance = %id, %title, year, budget, capital = state.capital, "performance committed");
        draft.record(SeasonEvent::PerformanceCommitted {
            performance: id,
            title,
            year,
            budget,
        });
        Ok(id)
    })
}

/// Cast `actor` as `role` in an uncompleted performance.
///
/// Returns a warning when the actor is below the rank the plot recommends
/// for the next open role.
pub fn assign_cast(
    house: &mut Playhouse,
    performance: PerformanceId,
    actor: ActorId,
    role: &str,
    contract_cost: Money,
) -> EngineResult<Option<RankWarning>> {
    house.transact(|draft| -> EngineResult<Option<RankWarning>> {
        let perf = draft
            .performance(performance)
            .filter(|p| !p.is_completed)
            .ok_or(EngineError::NotFoundOrAlreadyCompleted(performance))?;
        let plot = draft.require_plot(perf.plot_id)?.clone();
        let role = check_role(role)?.to_string();
        let cast_actor = draft.require_actor(actor)?;
        let rank = cast_actor.rank;
        check_cost(contract_cost)?;

        let index = draft.cast_of(performance).len();
        if index >= plot.roles_count as usize {
            return Err(EngineError::CastFull {
                performance,
                roles: plot.roles_count,
            });
        }

        draft.add_casting(Casting {
            actor_id: actor,
            performance_id: performance,
            role: role.clone(),
            contract_cost,
        })?;
        let warning = rank_warning(&plot, index, &role, actor, rank);
        draft.record(SeasonEvent::CastAssigned {
            performance,
            actor,
            role,
            contract_cost,
        });
        Ok(warning)
    })
}

/// Validate a cast plan, commit the performance for the current year and
/// assign the whole cast, as one unit.
pub fn stage_performance(
    house: &mut Playhouse,
    title: &str,
    plot_id: PlotId,
    budget: Money,
    plan: &CastPlan,
) -> EngineResult<Staged> {
    house.transact(|draft| -> EngineResult<Staged> {
        let plot = draft.require_plot(plot_id)?;
        let warnings = validate_plan(draft, plot, budget, plan)?;
        let year = draft.state().current_year;

        let performance = commit_performance(draft, title, plot_id, year, budget)?;
        for entry in plan.roles() {
            assign_cast(draft, performance, entry.actor, &entry.role, entry.contract_cost)?;
        }
        Ok(Staged {
            performance,
            warnings,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ph_core::{ActorProfile, FullName, GameState, PlotSpec};

    fn house() -> (Playhouse, PlotId, Vec<ActorId>) {
        let mut house = Playhouse::new(GameState::new(2025, 1_000_000));
        let plot = house
            .add_plot(PlotSpec {
                title: "The Seagull".into(),
                minimum_budget: 400_000,
                production_cost: 250_000,
                roles_count: 2,
                demand: 7,
                required_ranks: vec![Rank::Lead],
            })
            .unwrap();
        let actors = [("Ivanov", Rank::Lead), ("Morozov", Rank::Beginner), ("Popova", Rank::Master)]
            .iter()
            .map(|(last, rank)| {
                house
                    .add_actor(ActorProfile::new(FullName::new(*last, "A")).with_rank(*rank))
                    .unwrap()
            })
            .collect();
        (house, plot, actors)
    }

    #[test]
    fn commit_debits_capital_and_keeps_year() {
        let (mut house, plot, _) = house();
        let id = commit_performance(&mut house, "Seagull", plot, 2025, 500_000).unwrap();
        assert_eq!(house.state(), GameState::new(2025, 500_000));
        let perf = house.performance(id).unwrap();
        assert!(!perf.is_completed);
        assert_eq!(perf.budget, 500_000);
        assert_eq!(perf.revenue, 0);
        assert_eq!(house.journal().len(), 1);
    }

    #[test]
    fn commit_for_a_later_year_keeps_current_year() {
        let (mut house, plot, _) = house();
        let id = commit_performance(&mut house, "Seagull", plot, 2027, 500_000).unwrap();
        assert_eq!(house.performance(id).unwrap().year, 2027);
        assert_eq!(house.state().current_year, 2025);
        assert!(house.performance_in_year(2025).is_none());
    }

    #[test]
    fn commit_checks_capital_before_minimum() {
        let (mut house, plot, _) = house();
        let before = house.clone();
        let err = commit_performance(&mut house, "Seagull", plot, 2025, 1_000_001).unwrap_err();
        assert!(matches!(err, EngineError::InsufficientCapital { .. }));
        assert_eq!(house, before);
    }

    #[test]
    fn commit_rejects_budget_below_minimum() {
        let (mut house, plot, _) = house();
        let err = commit_performance(&mut house, "Seagull", plot, 2025, 399_999).unwrap_err();
        assert!(matches!(
            err,
            EngineError::BudgetBelowMinimum {
                budget: 399_999,
                minimum: 400_000
            }
        ));
        assert_eq!(house.state().capital, 1_000_000);
    }

    #[test]
    fn commit_rejects_unknown_plot() {
        let (mut house, _, _) = house();
        let err = commit_performance(&mut house, "Ghost", PlotId(42), 2025, 500_000).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Playhouse(PlayhouseError::PlotNotFound(_))
        ));
    }

    #[test]
    fn commit_twice_in_one_year_leaves_capital() {
        let (mut house, plot, _) = house();
        commit_performance(&mut house, "Seagull", plot, 2025, 400_000).unwrap();
        let err = commit_performance(&mut house, "Seagull Again", plot, 2025, 400_000).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Playhouse(PlayhouseError::DuplicateYear(2025))
        ));
        assert_eq!(house.state().capital, 600_000);
    }

    #[test]
    fn assign_warns_below_required_rank() {
        let (mut house, plot, actors) = house();
        let perf = commit_performance(&mut house, "Seagull", plot, 2025, 500_000).unwrap();
        let warning = assign_cast(&mut house, perf, actors[1], "Treplev", 50_000)
            .unwrap()
            .unwrap();
        assert_eq!(warning.role_index, 0);
        assert_eq!(warning.required, Rank::Lead);
        assert_eq!(warning.actor_rank, Rank::Beginner);
        // Role 1 has no requirement.
        assert!(assign_cast(&mut house, perf, actors[0], "Nina", 60_000)
            .unwrap()
            .is_none());
        assert_eq!(house.cast_of(perf).len(), 2);
    }

    #[test]
    fn assign_guards() {
        let (mut house, plot, actors) = house();
        let perf = commit_performance(&mut house, "Seagull", plot, 2025, 500_000).unwrap();

        assert!(matches!(
            assign_cast(&mut house, perf, actors[0], "  ", 1),
            Err(EngineError::EmptyRoleName)
        ));
        assert!(assign_cast(&mut house, perf, actors[0], "Nina", 0).is_err());
        assert!(matches!(
            assign_cast(&mut house, perf, ActorId(99), "Nina", 1),
            Err(EngineError::Playhouse(PlayhouseError::ActorNotFound(_)))
        ));
        assert!(matches!(
            assign_cast(&mut house, PerformanceId(99), actors[0], "Nina", 1),
            Err(EngineError::NotFoundOrAlreadyCompleted(_))
        ));

        assign_cast(&mut house, perf, actors[0], "Nina", 1).unwrap();
        assert!(matches!(
            assign_cast(&mut house, perf, actors[0], "Masha", 1),
            Err(EngineError::Playhouse(PlayhouseError::DuplicateCasting { .. }))
        ));
        assign_cast(&mut house, perf, actors[1], "Masha", 1).unwrap();
        assert!(matches!(
            assign_cast(&mut house, perf, actors[2], "Dorn", 1),
            Err(EngineError::CastFull { roles: 2, .. })
        ));
    }

    #[test]
    fn plan_checks() {
        let (house, plot, actors) = house();
        let plot = house.plot(plot).unwrap();

        let dup = CastPlan::new()
            .with_role("Nina", actors[0], 1)
            .with_role("Masha", actors[0], 1);
        assert!(matches!(
            validate_plan(&house, plot, 500_000, &dup),
            Err(EngineError::DuplicateActorInCast(_))
        ));

        let short = CastPlan::new().with_role("Nina", actors[0], 1);
        assert!(matches!(
            validate_plan(&house, plot, 500_000, &short),
            Err(EngineError::CastIncomplete {
                expected: 2,
                got: 1
            })
        ));

        let pricey = CastPlan::new()
            .with_role("Nina", actors[0], 300_000)
            .with_role("Masha", actors[1], 300_000);
        assert!(matches!(
            validate_plan(&house, plot, 500_000, &pricey),
            Err(EngineError::CastOverBudget {
                total: 600_000,
                budget: 500_000
            })
        ));

        let blank = CastPlan::new()
            .with_role("", actors[0], 1)
            .with_role("Masha", actors[1], 1);
        assert!(matches!(
            validate_plan(&house, plot, 500_000, &blank),
            Err(EngineError::EmptyRoleName)
        ));

        let ok = CastPlan::new()
            .with_role("Nina", actors[2], 90_000)
            .with_role("Masha", actors[1], 50_000);
        assert!(validate_plan(&house, plot, 500_000, &ok).unwrap().is_empty());
    }

    #[test]
    fn stage_is_atomic() {
        let (mut house, plot, actors) = house();
        let before = house.clone();
        let bad = CastPlan::new()
            .with_role("Nina", actors[0], 1)
            .with_role("Masha", ActorId(77), 1);
        assert!(stage_performance(&mut house, "Seagull", plot, 500_000, &bad).is_err());
        assert_eq!(house, before);

        let good = CastPlan::new()
            .with_role("Nina", actors[1], 60_000)
            .with_role("Masha", actors[0], 50_000);
        let staged = stage_performance(&mut house, "Seagull", plot, 500_000, &good).unwrap();
        assert_eq!(staged.warnings.len(), 1);
        assert_eq!(house.cast_of(staged.performance).len(), 2);
        assert_eq!(house.performance(staged.performance).unwrap().year, 2025);
        assert_eq!(house.state().capital, 500_000);
    }
}

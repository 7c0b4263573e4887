//! Outcome engine: stages a committed performance and settles the season.
//!
//! Resolution reads the performance, its plot and its cast, draws the
//! unexpected-expense fraction, the fate roll and the tier factor (in that
//! order), then writes everything back as one unit: final budget and
//! revenue, completion, actor experience, capital and year, awards and the
//! optional promotion.
//!
//! The deterministic part of revenue is kept in integer fixed point
//! (millionths) so that only the random factor is floating point.

use std::fmt;

use ph_core::{Actor, ActorId, Money, PerformanceId, Playhouse, Rank, SeasonEvent};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::random::RandomSource;

/// Fixed-point scale of the revenue arithmetic.
const SCALE: i128 = 1_000_000;

/// Unforeseen costs, as a fraction of the actual budget.
pub const UNEXPECTED_BAND: (f64, f64) = (0.05, 0.15);

/// Number of cast members awarded after a profitable run.
pub const AWARDED_PER_PERFORMANCE: usize = 3;

/// Probability-weighted revenue band of a performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FateTier {
    /// 60% of rolls: revenue factor 0.3-0.6.
    Flop,
    /// 30% of rolls: revenue factor 0.6-0.9.
    Normal,
    /// 10% of rolls: revenue factor 0.9-1.1.
    Hit,
}

impl FateTier {
    /// All tiers, worst first.
    pub fn all() -> &'static [Self] {
        &[Self::Flop, Self::Normal, Self::Hit]
    }

    /// The tier a fate roll in `[0, 1)` lands in.
    pub fn from_roll(roll: f64) -> Self {
        if roll < 0.6 {
            Self::Flop
        } else if roll < 0.9 {
            Self::Normal
        } else {
            Self::Hit
        }
    }

    /// Inclusive bounds of the revenue factor for this tier.
    pub fn band(self) -> (f64, f64) {
        match self {
            Self::Flop => (0.3, 0.6),
            Self::Normal => (0.6, 0.9),
            Self::Hit => (0.9, 1.1),
        }
    }
}

impl fmt::Display for FateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flop => write!(f, "Flop"),
            Self::Normal => write!(f, "Normal"),
            Self::Hit => write!(f, "Hit"),
        }
    }
}

/// A cast member who received an award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwardedActor {
    /// The actor.
    pub actor: ActorId,
    /// Full name.
    pub name: String,
    /// Award total after this award.
    pub awards_count: u32,
    /// New rank, if this award came with a promotion.
    pub promoted_to: Option<Rank>,
}

/// Everything a resolution computed and applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceOutcome {
    /// The resolved performance.
    pub performance: PerformanceId,
    /// Box-office revenue.
    pub revenue: Money,
    /// Total expenses: actual budget plus unexpected expenses.
    pub budget: Money,
    /// Budget committed before staging.
    pub original_budget: Money,
    /// Unspent part of the committed budget, returned to capital.
    pub saved_budget: Money,
    /// Revenue minus total expenses.
    pub profit: Money,
    /// Awarded cast members, best first.
    pub awarded_actors: Vec<AwardedActor>,
    /// Unforeseen costs folded into the expenses.
    pub unexpected_expenses: Money,
    /// Fate tier of the run.
    pub tier: FateTier,
    /// Revenue factor drawn within the tier's band.
    pub tier_factor: f64,
    /// Current year after resolution.
    pub year: u32,
    /// Capital after resolution.
    pub capital: Money,
}

/// Revenue before the tier factor, in millionths.
///
/// `budget * (0.5 + 0.08 * demand)` plus, per cast member,
/// `cost * (1 + 0.08 * rank) * (1 + 0.03 * awards + 0.008 * experience)`.
fn potential_revenue_scaled(actual_budget: Money, demand: u8, cast: &[(Money, &Actor)]) -> i128 {
    let base = i128::from(actual_budget) * (500 + 80 * i128::from(demand)) * 1_000;
    let bonus: i128 = cast
        .iter()
        .map(|(cost, actor)| {
            i128::from(*cost)
                * (1_000 + 80 * i128::from(actor.rank.index()))
                * (1_000 + 30 * i128::from(actor.awards_count) + 8 * i128::from(actor.experience))
        })
        .sum();
    base + bonus
}

fn apply_factor(scaled: i128, factor: f64) -> Money {
    (scaled as f64 * factor / SCALE as f64).floor() as Money
}

/// Cast members in award order: rank, then experience, then awards, all
/// descending. Ties keep cast order.
fn award_order<'a>(cast: &[(Money, &'a Actor)]) -> Vec<&'a Actor> {
    let mut order: Vec<&Actor> = cast.iter().map(|(_, actor)| *actor).collect();
    order.sort_by(|a, b| {
        (b.rank, b.experience, b.awards_count).cmp(&(a.rank, a.experience, a.awards_count))
    });
    order
}

/// Resolve a committed performance. Callable once per performance; a second
/// call fails with [`EngineError::NotFoundOrAlreadyCompleted`] and changes
/// nothing.
pub fn resolve_performance(
    house: &mut Playhouse,
    id: PerformanceId,
    rng: &mut dyn RandomSource,
) -> EngineResult<PerformanceOutcome> {
    house.transact(|draft| -> EngineResult<PerformanceOutcome> {
        let perf = draft
            .performance(id)
            .filter(|p| !p.is_completed)
            .ok_or(EngineError::NotFoundOrAlreadyCompleted(id))?
            .clone();
        let plot = draft.require_plot(perf.plot_id)?.clone();

        let mut members: Vec<(Money, Actor)> = Vec::new();
        for casting in draft.cast_of(id) {
            members.push((casting.contract_cost, draft.require_actor(casting.actor_id)?.clone()));
        }
        if members.len() < plot.roles_count as usize {
            info!(
                performance = %id,
                cast = members.len(),
                roles = plot.roles_count,
                "staging with an incomplete cast"
            );
        }
        let cast: Vec<(Money, &Actor)> = members.iter().map(|(c, a)| (*c, a)).collect();

        let total_spent = plot.production_cost + cast.iter().map(|(c, _)| c).sum::<Money>();
        let actual_budget = perf.budget.min(total_spent);
        let saved_budget = perf.budget - actual_budget;

        let (low, high) = UNEXPECTED_BAND;
        let unexpected_expenses = (actual_budget as f64 * rng.uniform(low, high)).floor() as Money;
        info!(performance = %id, unexpected_expenses, "unexpected expenses");

        let tier = FateTier::from_roll(rng.unit());
        let (low, high) = tier.band();
        let tier_factor = rng.uniform(low, high);
        info!(performance = %id, %tier, tier_factor, "fate decided");

        let potential = potential_revenue_scaled(actual_budget, plot.demand, &cast);
        let revenue = apply_factor(potential, tier_factor);
        let expenses = actual_budget + unexpected_expenses;
        let profit = revenue - expenses;
        debug!(total_spent, actual_budget, saved_budget, revenue, expenses, profit, "settled");

        draft.complete_performance(id, expenses, revenue)?;
        for (_, actor) in &cast {
            draft.actor_mut(actor.id)?.experience += 1;
        }

        let mut state = draft.state();
        let capital = state.capital + profit + saved_budget;
        if capital < 0 {
            warn!(capital, "capital would go negative; clamped to 0");
        }
        state.capital = capital.max(0);
        state.current_year += 1;
        draft.set_state(state)?;

        draft.record(SeasonEvent::PerformanceResolved {
            performance: id,
            title: perf.title.clone(),
            tier: tier.to_string(),
            revenue,
            expenses,
            profit,
        });

        let mut awarded_actors = Vec::new();
        if profit > 0 {
            let promote_top = profit * 10 > expenses * 4;
            for (place, actor) in award_order(&cast)
                .into_iter()
                .take(AWARDED_PER_PERFORMANCE)
                .enumerate()
            {
                let member = draft.actor_mut(actor.id)?;
                let awards_count = member.award();
                let promoted_to = if place == 0 && promote_top {
                    member.promote()
                } else {
                    None
                };
                let name = member.name.to_string();
                match promoted_to {
                    Some(rank) => info!(actor = %actor.id, %name, %rank, "awarded and promoted"),
                    None => info!(actor = %actor.id, %name, "awarded"),
                }
                draft.record(SeasonEvent::ActorAwarded {
                    actor: actor.id,
                    name: name.clone(),
                    awards_count,
                    promoted_to: promoted_to.map(|r| r.to_string()),
                });
                awarded_actors.push(AwardedActor {
                    actor: actor.id,
                    name,
                    awards_count,
                    promoted_to,
                });
            }
        }

        Ok(PerformanceOutcome {
            performance: id,
            revenue,
            budget: expenses,
            original_budget: perf.budget,
            saved_budget,
            profit,
            awarded_actors,
            unexpected_expenses,
            tier,
            tier_factor,
            year: state.current_year,
            capital: state.capital,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casting::{assign_cast, commit_performance};
    use crate::random::ScriptedRandom;
    use ph_core::{ActorProfile, FullName, GameState, PlotId, PlotSpec};
    use proptest::prelude::*;

    struct Fixture {
        house: Playhouse,
        plot: PlotId,
        actors: Vec<ActorId>,
    }

    fn fixture(roles: u32, ranks: &[(Rank, u32, u32)]) -> Fixture {
        let mut house = Playhouse::new(GameState::new(2025, 1_000_000));
        let plot = house
            .add_plot(PlotSpec {
                title: "Test Plot".into(),
                minimum_budget: 100_000,
                production_cost: 200_000,
                roles_count: roles,
                demand: 8,
                required_ranks: vec![],
            })
            .unwrap();
        let names = ["Ivanov", "Petrov", "Sidorova", "Smirnov", "Kozlova"];
        let actors = ranks
            .iter()
            .zip(names)
            .map(|(&(rank, awards, exp), last)| {
                house
                    .add_actor(
                        ActorProfile::new(FullName::new(last, "A"))
                            .with_rank(rank)
                            .with_awards(awards)
                            .with_experience(exp),
                    )
                    .unwrap()
            })
            .collect();
        Fixture {
            house,
            plot,
            actors,
        }
    }

    fn committed_example() -> (Playhouse, PerformanceId, ActorId) {
        let Fixture {
            mut house,
            plot,
            actors,
        } = fixture(1, &[(Rank::Lead, 1, 5)]);
        let perf = commit_performance(&mut house, "Example", plot, 2025, 500_000).unwrap();
        assign_cast(&mut house, perf, actors[0], "Lead", 100_000).unwrap();
        (house, perf, actors[0])
    }

    #[test]
    fn worked_example() {
        let (mut house, perf, actor) = committed_example();
        assert_eq!(house.state().capital, 500_000);

        let mut rng = ScriptedRandom::new([0.10, 0.75, 0.75]);
        let out = resolve_performance(&mut house, perf, &mut rng).unwrap();

        assert_eq!(out.tier, FateTier::Normal);
        assert_eq!(out.revenue, 349_590);
        assert_eq!(out.unexpected_expenses, 30_000);
        assert_eq!(out.budget, 330_000);
        assert_eq!(out.original_budget, 500_000);
        assert_eq!(out.saved_budget, 200_000);
        assert_eq!(out.profit, 19_590);
        assert_eq!(out.capital, 719_590);
        assert_eq!(out.year, 2026);
        assert_eq!(house.state(), GameState::new(2026, 719_590));

        let p = house.performance(perf).unwrap();
        assert!(p.is_completed);
        assert_eq!(p.budget, 330_000);
        assert_eq!(p.revenue, 349_590);

        // Profit 19590 is not above 40% of 330000: award, no promotion.
        let a = house.actor(actor).unwrap();
        assert_eq!(a.experience, 6);
        assert_eq!(a.awards_count, 2);
        assert_eq!(a.rank, Rank::Lead);
        assert_eq!(out.awarded_actors.len(), 1);
        assert_eq!(out.awarded_actors[0].promoted_to, None);
    }

    #[test]
    fn second_resolve_fails_without_change() {
        let (mut house, perf, _) = committed_example();
        let mut rng = ScriptedRandom::new([0.10, 0.75, 0.75]);
        resolve_performance(&mut house, perf, &mut rng).unwrap();
        let before = house.clone();
        let err = resolve_performance(&mut house, perf, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::NotFoundOrAlreadyCompleted(p) if p == perf));
        assert_eq!(house, before);
    }

    #[test]
    fn unknown_performance_fails() {
        let (mut house, _, _) = committed_example();
        let mut rng = ScriptedRandom::new(Vec::new());
        assert!(matches!(
            resolve_performance(&mut house, PerformanceId(404), &mut rng),
            Err(EngineError::NotFoundOrAlreadyCompleted(_))
        ));
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(FateTier::from_roll(0.0), FateTier::Flop);
        assert_eq!(FateTier::from_roll(0.59), FateTier::Flop);
        assert_eq!(FateTier::from_roll(0.6), FateTier::Normal);
        assert_eq!(FateTier::from_roll(0.75), FateTier::Normal);
        assert_eq!(FateTier::from_roll(0.9), FateTier::Hit);
        assert_eq!(FateTier::from_roll(0.95), FateTier::Hit);
    }

    #[test]
    fn forced_roll_draws_factor_from_its_band() {
        for (roll, tier) in [
            (0.59, FateTier::Flop),
            (0.75, FateTier::Normal),
            (0.95, FateTier::Hit),
        ] {
            for seed in 0..20 {
                let (mut house, perf, _) = committed_example();
                let mut rng = ScriptedRandom::new([0.1, roll]).with_fallback(seed);
                let out = resolve_performance(&mut house, perf, &mut rng).unwrap();
                let (low, high) = tier.band();
                assert_eq!(out.tier, tier);
                assert!((low..=high).contains(&out.tier_factor));
            }
        }
    }

    #[test]
    fn hit_promotes_only_top_awardee() {
        let Fixture {
            mut house,
            plot,
            actors,
        } = fixture(
            4,
            &[
                (Rank::Regular, 0, 1),
                (Rank::Master, 2, 9),
                (Rank::Master, 2, 4),
                (Rank::Lead, 5, 20),
            ],
        );
        let perf = commit_performance(&mut house, "Gala", plot, 2025, 400_000).unwrap();
        for (i, actor) in actors.iter().enumerate() {
            assign_cast(&mut house, perf, *actor, &format!("Role {i}"), 40_000).unwrap();
        }

        // Spent 360000, revenue far above 1.4x expenses.
        let mut rng = ScriptedRandom::new([0.05, 0.99, 1.1]);
        let out = resolve_performance(&mut house, perf, &mut rng).unwrap();
        assert_eq!(out.tier, FateTier::Hit);
        assert!(out.profit * 10 > out.budget * 4);

        let order: Vec<ActorId> = out.awarded_actors.iter().map(|a| a.actor).collect();
        assert_eq!(order, vec![actors[1], actors[2], actors[3]]);
        assert_eq!(out.awarded_actors[0].promoted_to, Some(Rank::Honored));
        assert!(out.awarded_actors[1..].iter().all(|a| a.promoted_to.is_none()));

        assert_eq!(house.actor(actors[1]).unwrap().rank, Rank::Honored);
        assert_eq!(house.actor(actors[2]).unwrap().rank, Rank::Master);
        assert_eq!(house.actor(actors[0]).unwrap().awards_count, 0);
        assert_eq!(house.actor(actors[0]).unwrap().experience, 2);
    }

    #[test]
    fn loss_awards_nobody() {
        let (mut house, perf, actor) = committed_example();
        let mut rng = ScriptedRandom::new([0.15, 0.1, 0.3]);
        let out = resolve_performance(&mut house, perf, &mut rng).unwrap();
        assert!(out.profit < 0);
        assert!(out.awarded_actors.is_empty());
        assert_eq!(house.actor(actor).unwrap().awards_count, 1);
        assert_eq!(house.actor(actor).unwrap().experience, 6);
    }

    #[test]
    fn budget_below_spend_saves_nothing() {
        let Fixture {
            mut house,
            plot,
            actors,
        } = fixture(1, &[(Rank::Beginner, 0, 0)]);
        let perf = commit_performance(&mut house, "Lean", plot, 2025, 250_000).unwrap();
        assign_cast(&mut house, perf, actors[0], "Solo", 100_000).unwrap();
        let mut rng = ScriptedRandom::new([0.1, 0.5, 0.5]);
        let out = resolve_performance(&mut house, perf, &mut rng).unwrap();
        assert_eq!(out.saved_budget, 0);
        assert_eq!(out.budget, 250_000 + 25_000);
    }

    #[test]
    fn short_cast_still_resolves() {
        let Fixture {
            mut house, plot, ..
        } = fixture(3, &[]);
        let perf = commit_performance(&mut house, "Empty Stage", plot, 2025, 300_000).unwrap();
        let mut rng = ScriptedRandom::new([0.1, 0.5, 0.5]);
        let out = resolve_performance(&mut house, perf, &mut rng).unwrap();
        // Production cost only: 200000 * 1.14 * 0.5
        assert_eq!(out.revenue, 114_000);
        assert_eq!(out.saved_budget, 100_000);
    }

    #[test]
    fn capital_clamped_at_zero() {
        let Fixture {
            mut house,
            plot,
            actors,
        } = fixture(1, &[(Rank::Beginner, 0, 0)]);
        // Spend the whole capital, then flop hard.
        let perf = commit_performance(&mut house, "All In", plot, 2025, 1_000_000).unwrap();
        assign_cast(&mut house, perf, actors[0], "Everyone", 800_000).unwrap();
        let mut rng = ScriptedRandom::new([0.15, 0.0, 0.3]);
        let out = resolve_performance(&mut house, perf, &mut rng).unwrap();
        // Revenue 1940000 * 0.3, expenses 1150000.
        assert_eq!(out.revenue, 582_000);
        assert_eq!(out.profit, -568_000);
        assert_eq!(out.capital, 0);
        assert_eq!(house.state(), GameState::new(2026, 0));
    }

    #[test]
    fn award_ties_keep_cast_order() {
        let f = fixture(
            3,
            &[(Rank::Lead, 1, 1), (Rank::Lead, 1, 1), (Rank::Lead, 1, 1)],
        );
        let house = f.house;
        let actors: Vec<&Actor> = f.actors.iter().map(|id| house.actor(*id).unwrap()).collect();
        let cast = vec![(90_000, actors[2]), (80_000, actors[0]), (80_000, actors[1])];
        let order: Vec<ActorId> = award_order(&cast).iter().map(|a| a.id).collect();
        assert_eq!(order, vec![f.actors[2], f.actors[0], f.actors[1]]);
    }

    proptest! {
        #[test]
        fn capital_conservation(
            budget in 200_000i64..=1_000_000,
            costs in proptest::collection::vec(1_000i64..150_000, 0..5),
            draws in proptest::collection::vec(0.0f64..1.0, 3),
        ) {
            let ranks: Vec<(Rank, u32, u32)> = costs.iter().map(|_| (Rank::Regular, 1, 2)).collect();
            let Fixture { mut house, plot, actors } = fixture(5, &ranks);
            let perf = commit_performance(&mut house, "Prop", plot, 2025, budget).unwrap();
            for (i, (actor, cost)) in actors.iter().zip(&costs).enumerate() {
                assign_cast(&mut house, perf, *actor, &format!("Role {i}"), *cost).unwrap();
            }
            let before = house.state().capital;

            let mut rng = ScriptedRandom::new([
                0.05 + draws[0] * 0.1,
                draws[1],
            ]).with_fallback(7);
            let out = resolve_performance(&mut house, perf, &mut rng).unwrap();

            let total_spent = 200_000 + costs.iter().sum::<i64>();
            prop_assert_eq!(out.budget - out.unexpected_expenses, budget.min(total_spent));
            prop_assert!(out.saved_budget >= 0);
            prop_assert_eq!(out.saved_budget, budget - budget.min(total_spent));
            prop_assert_eq!(out.profit, out.revenue - out.budget);
            prop_assert_eq!(house.state().capital, (before + out.profit + out.saved_budget).max(0));
            prop_assert_eq!(house.state().current_year, 2026);
            let (low, high) = out.tier.band();
            prop_assert!((low..=high).contains(&out.tier_factor));
        }
    }
}

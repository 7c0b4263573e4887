//! Contract-cost calculator.
//!
//! The fee an actor asks for a production depends only on seniority, years of
//! work and awards. Quotes are pure and may be previewed any number of times.

use ph_core::{Actor, Money, Rank};
use serde::Serialize;

/// Fee every actor asks regardless of standing.
pub const BASE_CONTRACT: Money = 30_000;
/// Added per rank step above `Beginner`.
pub const PER_RANK: Money = 10_000;
/// Added per year of experience.
pub const PER_EXPERIENCE_YEAR: Money = 2_000;
/// Added per award.
pub const PER_AWARD: Money = 5_000;

/// A contract quote for one actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractQuote {
    /// Base fee for the actor's standing.
    pub contract: Money,
    /// A fifth of the contract, rounded half up.
    pub premium: Money,
    /// Contract plus premium.
    pub total: Money,
}

/// Quote the contract for an actor.
pub fn quote(actor: &Actor) -> ContractQuote {
    quote_for(actor.rank, actor.experience, actor.awards_count)
}

/// Quote the contract for the given standing.
pub fn quote_for(rank: Rank, experience: u32, awards_count: u32) -> ContractQuote {
    let contract = BASE_CONTRACT
        + Money::from(rank.index()) * PER_RANK
        + Money::from(experience) * PER_EXPERIENCE_YEAR
        + Money::from(awards_count) * PER_AWARD;
    let premium = premium_of(contract);
    ContractQuote {
        contract,
        premium,
        total: contract + premium,
    }
}

// contract / 5, half up. Contracts are never negative.
fn premium_of(contract: Money) -> Money {
    (contract + 2) / 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use ph_core::{ActorId, ActorProfile, FullName};
    use proptest::prelude::*;

    #[test]
    fn beginner_without_history() {
        let q = quote_for(Rank::Beginner, 0, 0);
        assert_eq!(q.contract, 30_000);
        assert_eq!(q.premium, 6_000);
        assert_eq!(q.total, 36_000);
    }

    #[test]
    fn seasoned_lead() {
        let profile = ActorProfile::new(FullName::new("Ivanov", "Ivan"))
            .with_rank(Rank::Lead)
            .with_experience(5)
            .with_awards(3);
        let actor = Actor::from_profile(ActorId(1), profile);
        let q = quote(&actor);
        // 30000 + 2*10000 + 5*2000 + 3*5000
        assert_eq!(q.contract, 75_000);
        assert_eq!(q.premium, 15_000);
        assert_eq!(q.total, 90_000);
    }

    #[test]
    fn peoples_artist_tops_the_scale() {
        let q = quote_for(Rank::Peoples, 15, 8);
        assert_eq!(q.contract, 30_000 + 50_000 + 30_000 + 40_000);
    }

    #[test]
    fn premium_rounds_half_up() {
        assert_eq!(premium_of(30_002), 6_000);
        assert_eq!(premium_of(30_003), 6_001);
        assert_eq!(premium_of(30_005), 6_001);
    }

    proptest! {
        #[test]
        fn quote_matches_formula(rank_idx in 0usize..6, exp in 0u32..60, awards in 0u32..40) {
            let rank = Rank::all()[rank_idx];
            let q = quote_for(rank, exp, awards);
            let expected = 30_000
                + 10_000 * rank_idx as i64
                + 2_000 * i64::from(exp)
                + 5_000 * i64::from(awards);
            prop_assert_eq!(q.contract, expected);
            prop_assert_eq!(q.total, q.contract + q.premium);
            // Premium is within half a unit of contract / 5.
            prop_assert!((q.premium * 5 - q.contract).abs() <= 2);
        }

        #[test]
        fn quote_grows_with_rank(exp in 0u32..60, awards in 0u32..40) {
            for pair in Rank::all().windows(2) {
                prop_assert!(quote_for(pair[0], exp, awards).total < quote_for(pair[1], exp, awards).total);
            }
        }
    }
}

//! Starter company and repertoire for a new game.

use crate::Money;
use crate::actor::{ActorId, ActorProfile, FullName};
use crate::error::PlayhouseResult;
use crate::performance::Casting;
use crate::playhouse::Playhouse;
use crate::plot::{PlotId, PlotSpec};
use crate::rank::Rank;
use crate::state::GameState;

// (surname, first name, patronymic, rank, awards, experience)
const ACTORS: &[(&str, &str, &str, Rank, u32, u32)] = &[
    ("Ivanov", "Ivan", "Ivanovich", Rank::Lead, 3, 5),
    ("Petrov", "Petr", "Petrovich", Rank::Honored, 5, 10),
    ("Sidorova", "Anna", "Sergeevna", Rank::Peoples, 8, 15),
    ("Smirnov", "Aleksei", "Igorevich", Rank::Master, 4, 8),
    ("Kozlova", "Ekaterina", "Dmitrievna", Rank::Regular, 2, 4),
    ("Morozov", "Dmitry", "Aleksandrovich", Rank::Beginner, 0, 2),
    ("Novikova", "Olga", "Vladimirovna", Rank::Regular, 1, 3),
    ("Sokolov", "Vladimir", "Mikhailovich", Rank::Lead, 3, 7),
    ("Popova", "Maria", "Andreevna", Rank::Master, 5, 9),
    ("Lebedev", "Sergei", "Nikolaevich", Rank::Honored, 6, 12),
];

// (title, minimum budget, production cost, roles, demand, required ranks)
const PLOTS: &[(&str, Money, Money, u32, u8, &[Rank])] = &[
    ("Romeo and Juliet", 500_000, 350_000, 6, 8, &[Rank::Lead, Rank::Master]),
    ("Hamlet", 800_000, 500_000, 8, 9, &[Rank::Master, Rank::Honored]),
    ("The Seagull", 400_000, 250_000, 5, 7, &[Rank::Regular, Rank::Lead]),
    ("The Cherry Orchard", 600_000, 400_000, 7, 8, &[Rank::Lead, Rank::Master]),
    ("Three Sisters", 550_000, 350_000, 6, 7, &[Rank::Regular, Rank::Lead]),
    ("Othello", 700_000, 450_000, 7, 9, &[Rank::Master, Rank::Honored]),
    ("The Government Inspector", 450_000, 300_000, 6, 7, &[Rank::Lead]),
    ("Woe from Wit", 500_000, 350_000, 7, 8, &[Rank::Lead, Rank::Master]),
    ("Uncle Vanya", 400_000, 250_000, 5, 6, &[Rank::Regular]),
    ("Masquerade", 650_000, 400_000, 8, 8, &[Rank::Master]),
];

struct PastSeason {
    title: &'static str,
    plot: u32,
    year: u32,
    budget: Money,
    revenue: Money,
    // (actor, role, contract cost)
    cast: &'static [(u32, &'static str, Money)],
}

const PAST: &[PastSeason] = &[
    PastSeason {
        title: "Romeo and Juliet in the Modern World",
        plot: 1,
        year: 2022,
        budget: 600_000,
        revenue: 950_000,
        cast: &[
            (1, "Romeo", 100_000),
            (5, "Juliet", 90_000),
            (8, "Mercutio", 80_000),
            (4, "Tybalt", 70_000),
            (7, "Nurse", 60_000),
            (6, "Benvolio", 50_000),
        ],
    },
    PastSeason {
        title: "Hamlet Reloaded",
        plot: 2,
        year: 2023,
        budget: 850_000,
        revenue: 1_200_000,
        cast: &[
            (2, "Hamlet", 150_000),
            (9, "Ophelia", 120_000),
            (8, "Claudius", 110_000),
            (7, "Gertrude", 100_000),
            (4, "Polonius", 90_000),
            (6, "Horatio", 80_000),
            (1, "Laertes", 80_000),
            (5, "Rosencrantz", 70_000),
        ],
    },
    PastSeason {
        title: "The Seagull by the Sea",
        plot: 3,
        year: 2024,
        budget: 500_000,
        revenue: 780_000,
        cast: &[
            (3, "Nina Zarechnaya", 130_000),
            (2, "Konstantin Treplev", 120_000),
            (9, "Irina Arkadina", 110_000),
            (4, "Boris Trigorin", 100_000),
            (7, "Masha", 90_000),
        ],
    },
];

impl Playhouse {
    /// A new game: ten actors, ten plots, three completed seasons (2022-2024)
    /// and the default game state.
    pub fn sample() -> PlayhouseResult<Self> {
        let mut house = Playhouse::new(GameState::default());

        for &(last, first, patronymic, rank, awards, experience) in ACTORS {
            house.add_actor(
                ActorProfile::new(FullName::new(last, first).with_patronymic(patronymic))
                    .with_rank(rank)
                    .with_awards(awards)
                    .with_experience(experience),
            )?;
        }

        for &(title, minimum_budget, production_cost, roles_count, demand, ranks) in PLOTS {
            house.add_plot(PlotSpec {
                title: title.to_string(),
                minimum_budget,
                production_cost,
                roles_count,
                demand,
                required_ranks: ranks.to_vec(),
            })?;
        }

        for season in PAST {
            let id = house.insert_performance(
                season.title,
                PlotId(season.plot),
                season.year,
                season.budget,
            )?;
            for &(actor, role, contract_cost) in season.cast {
                house.add_casting(Casting {
                    actor_id: ActorId(actor),
                    performance_id: id,
                    role: role.to_string(),
                    contract_cost,
                })?;
            }
            house.complete_performance(id, season.budget, season.revenue)?;
        }

        Ok(house)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_builds() {
        let house = Playhouse::sample().unwrap();
        assert_eq!(house.actor_count(), 10);
        assert_eq!(house.plots().len(), 10);
        assert_eq!(house.performances().len(), 3);
        assert_eq!(house.state(), GameState::new(2025, 1_000_000));
    }

    #[test]
    fn sample_history_is_completed() {
        let house = Playhouse::sample().unwrap();
        for perf in house.performances() {
            assert!(perf.is_completed);
            assert!(perf.revenue > perf.budget);
        }
        // Newest first.
        assert_eq!(house.performances()[0].year, 2024);
    }

    #[test]
    fn sample_casts_attached() {
        let house = Playhouse::sample().unwrap();
        let hamlet = house.performance_in_year(2023).unwrap();
        let cast = house.cast_of(hamlet.id);
        assert_eq!(cast.len(), 8);
        assert_eq!(cast[0].role, "Hamlet");
        assert_eq!(house.active_castings(ActorId(1)), 0);
    }

    #[test]
    fn sample_free_year_is_current() {
        let house = Playhouse::sample().unwrap();
        assert!(house.performance_in_year(house.state().current_year).is_none());
    }
}

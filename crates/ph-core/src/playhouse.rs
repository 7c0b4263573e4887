use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::Money;
use crate::actor::{Actor, ActorId, ActorProfile, FullName};
use crate::error::{PlayhouseError, PlayhouseResult};
use crate::journal::{Journal, SeasonEvent};
use crate::performance::{Casting, Performance, PerformanceId};
use crate::plot::{Plot, PlotId, PlotSpec};
use crate::state::{GameState, MIN_YEAR};
use crate::text::require_text;

/// The persisted theater: game state, roster, repertoire, performances,
/// castings and the season journal.
///
/// Every uniqueness rule (actor full name, plot title, one performance per
/// year, one role per actor per performance) is enforced here, whichever
/// store the playhouse is saved to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayhouseSnapshot", into = "PlayhouseSnapshot")]
pub struct Playhouse {
    state: GameState,
    actors: BTreeMap<ActorId, Actor>,
    plots: BTreeMap<PlotId, Plot>,
    performances: BTreeMap<PerformanceId, Performance>,
    castings: Vec<Casting>,
    journal: Journal,

    next_actor: u32,
    next_plot: u32,
    next_performance: u32,

    // Indexes
    by_name: HashMap<FullName, ActorId>,
    by_title: HashMap<String, PlotId>,
    by_year: HashMap<u32, PerformanceId>,
}

impl Default for Playhouse {
    fn default() -> Self {
        Self::new(GameState::default())
    }
}

impl Playhouse {
    /// An empty theater with the given game state.
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            actors: BTreeMap::new(),
            plots: BTreeMap::new(),
            performances: BTreeMap::new(),
            castings: Vec::new(),
            journal: Journal::new(),
            next_actor: 1,
            next_plot: 1,
            next_performance: 1,
            by_name: HashMap::new(),
            by_title: HashMap::new(),
            by_year: HashMap::new(),
        }
    }

    /// Run `f` against a draft copy and keep the draft only if `f` succeeds.
    ///
    /// This is the transactional boundary for every multi-record operation:
    /// on error the playhouse is left exactly as it was.
    pub fn transact<T, E>(&mut self, f: impl FnOnce(&mut Playhouse) -> Result<T, E>) -> Result<T, E> {
        let mut draft = self.clone();
        let out = f(&mut draft)?;
        *self = draft;
        Ok(out)
    }

    // -----------------------------------------------------------------------
    // Game state
    // -----------------------------------------------------------------------

    /// Current year and capital.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Replace the game state. Capital may not be negative.
    pub fn set_state(&mut self, state: GameState) -> PlayhouseResult<()> {
        if state.capital < 0 {
            return Err(PlayhouseError::Validation(format!(
                "capital cannot be negative ({})",
                state.capital
            )));
        }
        self.state = state;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Roster
    // -----------------------------------------------------------------------

    /// All actors ordered by surname, then first name.
    pub fn actors(&self) -> Vec<&Actor> {
        let mut list: Vec<&Actor> = self.actors.values().collect();
        list.sort_by(|a, b| {
            (&a.name.last, &a.name.first, a.id).cmp(&(&b.name.last, &b.name.first, b.id))
        });
        list
    }

    /// Number of actors on the roster.
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Get an actor by ID.
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    /// Get an actor by ID, or fail with `ActorNotFound`.
    pub fn require_actor(&self, id: ActorId) -> PlayhouseResult<&Actor> {
        self.actor(id).ok_or(PlayhouseError::ActorNotFound(id))
    }

    /// Get a mutable reference to an actor by ID.
    pub fn actor_mut(&mut self, id: ActorId) -> PlayhouseResult<&mut Actor> {
        self.actors
            .get_mut(&id)
            .ok_or(PlayhouseError::ActorNotFound(id))
    }

    /// Add an actor to the roster. Returns the new ID.
    pub fn add_actor(&mut self, profile: ActorProfile) -> PlayhouseResult<ActorId> {
        let profile = normalize_profile(profile)?;
        if self.by_name.contains_key(&profile.name) {
            return Err(PlayhouseError::DuplicateActor(profile.name.to_string()));
        }

        let id = ActorId(self.next_actor);
        self.next_actor += 1;
        self.by_name.insert(profile.name.clone(), id);
        self.actors.insert(id, Actor::from_profile(id, profile));
        Ok(id)
    }

    /// Replace an actor's profile, keeping the full-name triple unique.
    pub fn update_actor(&mut self, id: ActorId, profile: ActorProfile) -> PlayhouseResult<()> {
        let profile = normalize_profile(profile)?;
        if let Some(other) = self.by_name.get(&profile.name)
            && *other != id
        {
            return Err(PlayhouseError::DuplicateActor(profile.name.to_string()));
        }

        let actor = self
            .actors
            .get_mut(&id)
            .ok_or(PlayhouseError::ActorNotFound(id))?;
        self.by_name.remove(&actor.name);
        self.by_name.insert(profile.name.clone(), id);
        *actor = Actor::from_profile(id, profile);
        Ok(())
    }

    /// Remove an actor from the roster.
    ///
    /// Castings in completed performances are kept as history; callers are
    /// responsible for refusing removal while the actor is in an active cast.
    pub fn remove_actor(&mut self, id: ActorId) -> PlayhouseResult<Actor> {
        let actor = self
            .actors
            .remove(&id)
            .ok_or(PlayhouseError::ActorNotFound(id))?;
        self.by_name.remove(&actor.name);
        Ok(actor)
    }

    /// Number of roles the actor holds in performances not yet completed.
    pub fn active_castings(&self, id: ActorId) -> usize {
        self.castings
            .iter()
            .filter(|c| c.actor_id == id)
            .filter(|c| {
                self.performances
                    .get(&c.performance_id)
                    .is_some_and(|p| !p.is_completed)
            })
            .count()
    }

    // -----------------------------------------------------------------------
    // Repertoire
    // -----------------------------------------------------------------------

    /// All plots ordered by title.
    pub fn plots(&self) -> Vec<&Plot> {
        let mut list: Vec<&Plot> = self.plots.values().collect();
        list.sort_by(|a, b| a.title.cmp(&b.title));
        list
    }

    /// Get a plot by ID.
    pub fn plot(&self, id: PlotId) -> Option<&Plot> {
        self.plots.get(&id)
    }

    /// Get a plot by ID, or fail with `PlotNotFound`.
    pub fn require_plot(&self, id: PlotId) -> PlayhouseResult<&Plot> {
        self.plot(id).ok_or(PlayhouseError::PlotNotFound(id))
    }

    /// Add a plot to the repertoire. Returns the new ID.
    pub fn add_plot(&mut self, mut spec: PlotSpec) -> PlayhouseResult<PlotId> {
        spec.title = require_text("plot title", &spec.title)?.to_string();
        spec.validate()?;
        if self.by_title.contains_key(&spec.title) {
            return Err(PlayhouseError::DuplicatePlot(spec.title));
        }

        let id = PlotId(self.next_plot);
        self.next_plot += 1;
        self.by_title.insert(spec.title.clone(), id);
        self.plots.insert(id, Plot::from_spec(id, spec));
        Ok(id)
    }

    // -----------------------------------------------------------------------
    // Performances
    // -----------------------------------------------------------------------

    /// All performances, newest year first.
    pub fn performances(&self) -> Vec<&Performance> {
        let mut list: Vec<&Performance> = self.performances.values().collect();
        list.sort_by(|a, b| b.year.cmp(&a.year));
        list
    }

    /// Get a performance by ID.
    pub fn performance(&self, id: PerformanceId) -> Option<&Performance> {
        self.performances.get(&id)
    }

    /// Get a performance by ID, or fail with `PerformanceNotFound`.
    pub fn require_performance(&self, id: PerformanceId) -> PlayhouseResult<&Performance> {
        self.performance(id)
            .ok_or(PlayhouseError::PerformanceNotFound(id))
    }

    /// The performance scheduled for `year`, if any.
    pub fn performance_in_year(&self, year: u32) -> Option<&Performance> {
        self.by_year
            .get(&year)
            .and_then(|id| self.performances.get(id))
    }

    /// Record a new, not yet completed performance. Returns the new ID.
    pub fn insert_performance(
        &mut self,
        title: &str,
        plot_id: PlotId,
        year: u32,
        budget: Money,
    ) -> PlayhouseResult<PerformanceId> {
        let title = require_text("performance title", title)?.to_string();
        self.require_plot(plot_id)?;
        check_schedule(year, budget)?;
        if self.by_year.contains_key(&year) {
            return Err(PlayhouseError::DuplicateYear(year));
        }

        let id = PerformanceId(self.next_performance);
        self.next_performance += 1;
        self.by_year.insert(year, id);
        self.performances.insert(
            id,
            Performance {
                id,
                title,
                plot_id,
                year,
                budget,
                revenue: 0,
                is_completed: false,
            },
        );
        Ok(id)
    }

    /// Record the final spend and revenue and mark the performance completed.
    ///
    /// Completion happens exactly once; a second call fails with
    /// `PerformanceCompleted`.
    pub fn complete_performance(
        &mut self,
        id: PerformanceId,
        budget: Money,
        revenue: Money,
    ) -> PlayhouseResult<()> {
        if revenue < 0 {
            return Err(PlayhouseError::Validation(
                "revenue cannot be negative".into(),
            ));
        }
        let perf = self
            .performances
            .get_mut(&id)
            .ok_or(PlayhouseError::PerformanceNotFound(id))?;
        if perf.is_completed {
            return Err(PlayhouseError::PerformanceCompleted(id));
        }
        perf.budget = budget;
        perf.revenue = revenue;
        perf.is_completed = true;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Castings
    // -----------------------------------------------------------------------

    /// Add a casting. The actor and an incomplete performance must exist and
    /// the actor may hold only one role per performance.
    pub fn add_casting(&mut self, mut casting: Casting) -> PlayhouseResult<()> {
        check_casting(&mut casting)?;
        self.require_actor(casting.actor_id)?;
        let perf = self.require_performance(casting.performance_id)?;
        if perf.is_completed {
            return Err(PlayhouseError::PerformanceCompleted(perf.id));
        }
        if self
            .castings
            .iter()
            .any(|c| c.actor_id == casting.actor_id && c.performance_id == casting.performance_id)
        {
            return Err(PlayhouseError::DuplicateCasting {
                actor: casting.actor_id,
                performance: casting.performance_id,
            });
        }
        self.castings.push(casting);
        Ok(())
    }

    /// Castings of a performance, highest contract first (ties by actor ID).
    pub fn cast_of(&self, performance: PerformanceId) -> Vec<&Casting> {
        let mut list: Vec<&Casting> = self
            .castings
            .iter()
            .filter(|c| c.performance_id == performance)
            .collect();
        list.sort_by(|a, b| {
            b.contract_cost
                .cmp(&a.contract_cost)
                .then(a.actor_id.cmp(&b.actor_id))
        });
        list
    }

    // -----------------------------------------------------------------------
    // Journal
    // -----------------------------------------------------------------------

    /// The season journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Append an event to the season journal.
    pub fn record(&mut self, event: SeasonEvent) {
        self.journal.record(event);
    }
}

fn check_schedule(year: u32, budget: Money) -> PlayhouseResult<()> {
    if year < MIN_YEAR {
        return Err(PlayhouseError::Validation(format!(
            "year {year} is before {MIN_YEAR}"
        )));
    }
    if budget <= 0 {
        return Err(PlayhouseError::Validation(
            "budget must be positive".into(),
        ));
    }
    Ok(())
}

fn check_casting(casting: &mut Casting) -> PlayhouseResult<()> {
    casting.role = require_text("role", &casting.role)?.to_string();
    if casting.contract_cost <= 0 {
        return Err(PlayhouseError::Validation(
            "contract cost must be positive".into(),
        ));
    }
    Ok(())
}

fn normalize_profile(mut profile: ActorProfile) -> PlayhouseResult<ActorProfile> {
    profile.name.last = require_text("surname", &profile.name.last)?.to_string();
    profile.name.first = require_text("first name", &profile.name.first)?.to_string();
    profile.name.patronymic = match profile.name.patronymic.as_deref().map(str::trim) {
        Some("") | None => None,
        Some(p) => Some(require_text("patronymic", p)?.to_string()),
    };
    Ok(profile)
}

// ---------------------------------------------------------------------------
// Serialized form
// ---------------------------------------------------------------------------

/// Flat serialized form of a [`Playhouse`]. Loading re-checks every invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayhouseSnapshot {
    /// Game state.
    pub state: GameState,
    /// Roster.
    pub actors: Vec<Actor>,
    /// Repertoire.
    pub plots: Vec<Plot>,
    /// Performances, any order.
    pub performances: Vec<Performance>,
    /// Castings, any order.
    pub castings: Vec<Casting>,
    /// Season journal.
    #[serde(default)]
    pub journal: Journal,
    /// Next actor ID to hand out. IDs of departed actors are never reused.
    #[serde(default)]
    pub next_actor: u32,
    /// Next plot ID to hand out.
    #[serde(default)]
    pub next_plot: u32,
    /// Next performance ID to hand out.
    #[serde(default)]
    pub next_performance: u32,
}

impl From<Playhouse> for PlayhouseSnapshot {
    fn from(p: Playhouse) -> Self {
        Self {
            state: p.state,
            actors: p.actors.into_values().collect(),
            plots: p.plots.into_values().collect(),
            performances: p.performances.into_values().collect(),
            castings: p.castings,
            journal: p.journal,
            next_actor: p.next_actor,
            next_plot: p.next_plot,
            next_performance: p.next_performance,
        }
    }
}

impl TryFrom<PlayhouseSnapshot> for Playhouse {
    type Error = PlayhouseError;

    fn try_from(snap: PlayhouseSnapshot) -> PlayhouseResult<Self> {
        let mut house = Playhouse::new(GameState::default());
        house.set_state(snap.state)?;
        house.journal = snap.journal;
        house.next_actor = snap.next_actor.max(1);
        house.next_plot = snap.next_plot.max(1);
        house.next_performance = snap.next_performance.max(1);

        for actor in snap.actors {
            normalize_profile(actor.profile())?;
            if house.actors.contains_key(&actor.id) || house.by_name.contains_key(&actor.name) {
                return Err(PlayhouseError::DuplicateActor(actor.name.to_string()));
            }
            house.next_actor = house.next_actor.max(actor.id.0 + 1);
            house.by_name.insert(actor.name.clone(), actor.id);
            house.actors.insert(actor.id, actor);
        }

        for plot in snap.plots {
            require_text("plot title", &plot.title)?;
            plot.spec().validate()?;
            if house.plots.contains_key(&plot.id) || house.by_title.contains_key(&plot.title) {
                return Err(PlayhouseError::DuplicatePlot(plot.title));
            }
            house.next_plot = house.next_plot.max(plot.id.0 + 1);
            house.by_title.insert(plot.title.clone(), plot.id);
            house.plots.insert(plot.id, plot);
        }

        for perf in snap.performances {
            require_text("performance title", &perf.title)?;
            house.require_plot(perf.plot_id)?;
            check_schedule(perf.year, perf.budget)?;
            if perf.revenue < 0 {
                return Err(PlayhouseError::Validation(
                    "revenue cannot be negative".into(),
                ));
            }
            if house.performances.contains_key(&perf.id) {
                return Err(PlayhouseError::DuplicatePerformance(perf.id));
            }
            if house.by_year.contains_key(&perf.year) {
                return Err(PlayhouseError::DuplicateYear(perf.year));
            }
            house.next_performance = house.next_performance.max(perf.id.0 + 1);
            house.by_year.insert(perf.year, perf.id);
            house.performances.insert(perf.id, perf);
        }

        for mut casting in snap.castings {
            check_casting(&mut casting)?;
            let perf = house.require_performance(casting.performance_id)?;
            // Departed actors keep their place in completed casts.
            if !perf.is_completed {
                house.require_actor(casting.actor_id)?;
            }
            if house
                .castings
                .iter()
                .any(|c| c.actor_id == casting.actor_id && c.performance_id == casting.performance_id)
            {
                return Err(PlayhouseError::DuplicateCasting {
                    actor: casting.actor_id,
                    performance: casting.performance_id,
                });
            }
            house.next_actor = house.next_actor.max(casting.actor_id.0 + 1);
            house.castings.push(casting);
        }

        Ok(house)
    }
}

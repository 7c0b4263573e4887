//! The `Director` owns a playhouse and the random source and exposes every
//! season operation to the front end.

use ph_core::{
    Actor, ActorId, ActorProfile, GameState, Money, PerformanceId, Playhouse, Plot, PlotId,
};

use crate::casting::{self, CastPlan, RankWarning, Staged};
use crate::config::EngineConfig;
use crate::contract::{self, ContractQuote};
use crate::error::EngineResult;
use crate::history::{self, PerformanceDetails, PerformanceSummary};
use crate::outcome::{self, PerformanceOutcome};
use crate::random::{RandomSource, engine_rng};
use crate::roster;
use crate::year::{self, YearSkip};

/// Runs the theater: the single owner of the game state for a session.
pub struct Director {
    house: Playhouse,
    config: EngineConfig,
    rng: Box<dyn RandomSource>,
}

impl Director {
    /// Take over an existing playhouse.
    pub fn new(house: Playhouse, config: EngineConfig) -> Self {
        let rng = Box::new(engine_rng(config.seed));
        Self { house, config, rng }
    }

    /// Start a new game from the sample company, with the configured
    /// starting year and capital.
    pub fn new_game(config: EngineConfig) -> EngineResult<Self> {
        let mut house = Playhouse::sample()?;
        house.set_state(GameState::new(config.starting_year, config.starting_capital))?;
        Ok(Self::new(house, config))
    }

    /// Replace the random source.
    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// The managed playhouse.
    pub fn playhouse(&self) -> &Playhouse {
        &self.house
    }

    /// Give up the playhouse, e.g. to save it.
    pub fn into_playhouse(self) -> Playhouse {
        self.house
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current year and capital.
    pub fn game_state(&self) -> GameState {
        self.house.state()
    }

    /// The repertoire, by title.
    pub fn plots(&self) -> Vec<&Plot> {
        self.house.plots()
    }

    /// The roster, by surname.
    pub fn actors(&self) -> Vec<&Actor> {
        self.house.actors()
    }

    /// Quote the contract an actor would ask for.
    pub fn preview_contract_cost(&self, actor: ActorId) -> EngineResult<ContractQuote> {
        Ok(contract::quote(self.house.require_actor(actor)?))
    }

    /// Commit a budget to a new performance.
    pub fn commit_performance(
        &mut self,
        title: &str,
        plot: PlotId,
        year: u32,
        budget: Money,
    ) -> EngineResult<PerformanceId> {
        casting::commit_performance(&mut self.house, title, plot, year, budget)
    }

    /// Cast an actor in a committed performance.
    pub fn assign_cast(
        &mut self,
        performance: PerformanceId,
        actor: ActorId,
        role: &str,
        contract_cost: Money,
    ) -> EngineResult<Option<RankWarning>> {
        casting::assign_cast(&mut self.house, performance, actor, role, contract_cost)
    }

    /// Check a cast plan for a plot and budget without committing anything.
    pub fn validate_cast(&self, plot: PlotId, budget: Money, plan: &CastPlan) -> EngineResult<Vec<RankWarning>> {
        let plot = self.house.require_plot(plot)?;
        casting::validate_plan(&self.house, plot, budget, plan)
    }

    /// Commit and cast a performance for the current year in one step.
    pub fn stage_performance(
        &mut self,
        title: &str,
        plot: PlotId,
        budget: Money,
        plan: &CastPlan,
    ) -> EngineResult<Staged> {
        casting::stage_performance(&mut self.house, title, plot, budget, plan)
    }

    /// Resolve a committed performance.
    pub fn resolve_performance(&mut self, performance: PerformanceId) -> EngineResult<PerformanceOutcome> {
        outcome::resolve_performance(&mut self.house, performance, self.rng.as_mut())
    }

    /// Sit out the current year.
    pub fn skip_year(&mut self) -> EngineResult<YearSkip> {
        year::skip_year(&mut self.house, self.rng.as_mut())
    }

    /// Hire an actor.
    pub fn add_actor(&mut self, profile: ActorProfile) -> EngineResult<ActorId> {
        roster::add_actor(&mut self.house, profile)
    }

    /// Edit an actor.
    pub fn update_actor(&mut self, actor: ActorId, profile: ActorProfile) -> EngineResult<()> {
        roster::update_actor(&mut self.house, actor, profile)
    }

    /// Dismiss an actor, keeping the configured roster floor.
    pub fn delete_actor(&mut self, actor: ActorId) -> EngineResult<Actor> {
        roster::delete_actor(&mut self.house, actor, self.config.min_roster)
    }

    /// Performance history, newest first.
    pub fn performances(&self) -> EngineResult<Vec<PerformanceSummary<'_>>> {
        history::performances(&self.house)
    }

    /// A performance with its plot and cast.
    pub fn performance_details(&self, performance: PerformanceId) -> EngineResult<PerformanceDetails<'_>> {
        history::performance_details(&self.house, performance)
    }
}

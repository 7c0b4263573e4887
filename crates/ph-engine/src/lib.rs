//! Season engine for Playhouse.
//!
//! Prices contracts, validates budgets and casts, resolves performances
//! through three weighted fate tiers, rewards the cast and advances the year.
//! All randomness goes through [`RandomSource`], so a season can be replayed
//! from a seed or scripted draw by draw. [`Director`] bundles every operation
//! behind one owner of the game state.

pub mod casting;
pub mod config;
pub mod contract;
pub mod director;
pub mod error;
pub mod history;
pub mod outcome;
pub mod random;
pub mod roster;
pub mod year;

pub use casting::{CastPlan, RankWarning, RoleAssignment, Staged};
pub use config::EngineConfig;
pub use contract::ContractQuote;
pub use director::Director;
pub use error::{EngineError, EngineResult};
pub use history::{CastMember, PerformanceDetails, PerformanceSummary};
pub use outcome::{AwardedActor, FateTier, PerformanceOutcome};
pub use random::{RandomSource, ScriptedRandom};
pub use year::YearSkip;

//! Core types for Playhouse: actors, plots, performances, castings and the
//! persisted theater.
//!
//! This crate owns the data model and its invariants. It knows nothing about
//! randomness or the season economy; those live in `ph-engine`. A
//! [`Playhouse`] can be built programmatically, seeded with
//! [`Playhouse::sample`], or loaded from JSON through a [`PlayhouseStore`].

/// Actors, their names and profiles.
pub mod actor;
/// Error types used throughout the crate.
pub mod error;
/// Season journal of timestamped events.
pub mod journal;
/// Performances and castings.
pub mod performance;
/// The persisted theater aggregate.
pub mod playhouse;
/// Plots in the repertoire.
pub mod plot;
/// Actor ranks, lowest to highest.
pub mod rank;
/// Starter data for a new game.
pub mod sample;
/// Current year and capital.
pub mod state;
/// Loading and saving the playhouse.
pub mod store;
/// Free-text validation.
pub mod text;

/// Whole currency units. All money in the game is integral.
pub type Money = i64;

/// Re-export actor types.
pub use actor::{Actor, ActorId, ActorProfile, FullName};
/// Re-export error types.
pub use error::{PlayhouseError, PlayhouseResult};
/// Re-export journal types.
pub use journal::{Journal, JournalEntry, SeasonEvent};
/// Re-export performance types.
pub use performance::{Casting, Performance, PerformanceId};
/// Re-export the theater aggregate.
pub use playhouse::{Playhouse, PlayhouseSnapshot};
/// Re-export plot types.
pub use plot::{Plot, PlotId, PlotSpec};
/// Re-export rank.
pub use rank::Rank;
/// Re-export game state.
pub use state::{GameState, MIN_YEAR};
/// Re-export stores.
pub use store::{JsonFileStore, MemoryStore, PlayhouseStore};

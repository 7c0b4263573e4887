//! Error types for the season engine.

use ph_core::{ActorId, Money, PerformanceId, PlayhouseError};
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Typed failures of the engine operations. None of them leaves a partial
/// change behind.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The committed budget exceeds the available capital.
    #[error("insufficient capital: budget {budget} exceeds capital {capital}")]
    InsufficientCapital {
        /// Requested budget.
        budget: Money,
        /// Capital on hand.
        capital: Money,
    },

    /// The committed budget is below the plot's minimum.
    #[error("budget {budget} is below the plot minimum of {minimum}")]
    BudgetBelowMinimum {
        /// Requested budget.
        budget: Money,
        /// Minimum budget of the plot.
        minimum: Money,
    },

    /// The performance does not exist or has already been resolved.
    #[error("performance {0} not found or already completed")]
    NotFoundOrAlreadyCompleted(PerformanceId),

    /// The actor holds a role in a performance that is not yet completed.
    #[error("actor {0} is cast in a performance that has not been staged yet")]
    ActorInActiveCast(ActorId),

    /// Removing the actor would shrink the roster below its floor.
    #[error("the roster cannot drop below {minimum} actors")]
    BelowMinimumRoster {
        /// Roster floor.
        minimum: usize,
    },

    /// A cast plan does not fill exactly the plot's roles.
    #[error("cast has {got} roles, the plot needs {expected}")]
    CastIncomplete {
        /// Roles of the plot.
        expected: u32,
        /// Roles in the plan.
        got: usize,
    },

    /// The same actor appears twice in a cast plan.
    #[error("actor {0} is assigned to more than one role")]
    DuplicateActorInCast(ActorId),

    /// A role name is empty.
    #[error("role name is empty")]
    EmptyRoleName,

    /// The cast's contract costs exceed the budget.
    #[error("cast costs {total}, more than the budget of {budget}")]
    CastOverBudget {
        /// Sum of contract costs.
        total: Money,
        /// Budget the cast must fit in.
        budget: Money,
    },

    /// Every role of the performance is already cast.
    #[error("all {roles} roles of performance {performance} are already cast")]
    CastFull {
        /// The performance.
        performance: PerformanceId,
        /// Roles of its plot.
        roles: u32,
    },

    /// Data model error.
    #[error("{0}")]
    Playhouse(#[from] PlayhouseError),
}

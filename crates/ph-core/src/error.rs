use crate::actor::ActorId;
use crate::performance::PerformanceId;
use crate::plot::PlotId;

/// Alias for `Result<T, PlayhouseError>`.
pub type PlayhouseResult<T> = Result<T, PlayhouseError>;

/// Errors raised by the persisted theater model and its stores.
#[derive(Debug, thiserror::Error)]
pub enum PlayhouseError {
    /// The requested actor ID does not exist.
    #[error("actor not found: {0}")]
    ActorNotFound(ActorId),

    /// The requested plot ID does not exist.
    #[error("plot not found: {0}")]
    PlotNotFound(PlotId),

    /// The requested performance ID does not exist.
    #[error("performance not found: {0}")]
    PerformanceNotFound(PerformanceId),

    /// An actor with the same surname, first name and patronymic exists.
    #[error("actor already exists: \"{0}\"")]
    DuplicateActor(String),

    /// A plot with the same title exists.
    #[error("plot already exists: \"{0}\"")]
    DuplicatePlot(String),

    /// Two performances share an identifier.
    #[error("duplicate performance ID: {0}")]
    DuplicatePerformance(PerformanceId),

    /// A performance is already scheduled for this year.
    #[error("a performance is already scheduled for {0}")]
    DuplicateYear(u32),

    /// The actor already holds a role in this performance.
    #[error("actor {actor} is already cast in performance {performance}")]
    DuplicateCasting {
        /// The actor holding the existing role.
        actor: ActorId,
        /// The performance the actor is cast in.
        performance: PerformanceId,
    },

    /// The performance has already been completed and is read-only.
    #[error("performance {0} is already completed")]
    PerformanceCompleted(PerformanceId),

    /// A field failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The state file could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The state file could not be encoded or decoded.
    #[error("storage format error: {0}")]
    Json(#[from] serde_json::Error),
}

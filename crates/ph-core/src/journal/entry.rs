//! Journal entry types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Money;
use crate::actor::ActorId;
use crate::performance::PerformanceId;

/// Something that happened during the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeasonEvent {
    /// An actor joined the company.
    ActorHired {
        /// The new actor.
        actor: ActorId,
        /// Full name at hiring time.
        name: String,
    },
    /// An actor's profile was edited.
    ActorUpdated {
        /// The edited actor.
        actor: ActorId,
        /// Full name after the edit.
        name: String,
    },
    /// An actor left the company.
    ActorDismissed {
        /// The departed actor.
        actor: ActorId,
        /// Full name at departure.
        name: String,
    },
    /// A budget was committed to a new performance.
    PerformanceCommitted {
        /// The new performance.
        performance: PerformanceId,
        /// Billing title.
        title: String,
        /// Season year of the performance.
        year: u32,
        /// Budget debited from capital.
        budget: Money,
    },
    /// An actor was cast in a role.
    CastAssigned {
        /// The performance.
        performance: PerformanceId,
        /// The cast actor.
        actor: ActorId,
        /// Role name.
        role: String,
        /// Agreed fee.
        contract_cost: Money,
    },
    /// A performance was staged and its outcome resolved.
    PerformanceResolved {
        /// The performance.
        performance: PerformanceId,
        /// Billing title.
        title: String,
        /// Fate tier label (Flop, Normal, Hit).
        tier: String,
        /// Box-office revenue.
        revenue: Money,
        /// Total expenses including unforeseen costs.
        expenses: Money,
        /// Revenue minus expenses.
        profit: Money,
    },
    /// An actor received an award, possibly with a promotion.
    ActorAwarded {
        /// The awarded actor.
        actor: ActorId,
        /// Full name.
        name: String,
        /// Award total after this award.
        awards_count: u32,
        /// New rank label, if promoted.
        promoted_to: Option<String>,
    },
    /// The theater sat out a year and sold staging rights.
    YearSkipped {
        /// The new current year.
        year: u32,
        /// Income from the rights sale.
        rights_sale: Money,
    },
}

/// A timestamped journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// What happened.
    #[serde(flatten)]
    pub event: SeasonEvent,
}

impl JournalEntry {
    /// Stamp an event with the current time.
    pub fn now(event: SeasonEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Money;
use crate::actor::ActorId;
use crate::plot::PlotId;

/// Serial identifier of a performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PerformanceId(pub u32);

impl fmt::Display for PerformanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One dated staging of a plot.
///
/// `budget` holds the committed allocation until the performance is completed,
/// then the total amount actually spent. `revenue` stays 0 until completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Performance identifier.
    pub id: PerformanceId,
    /// Billing title of this production.
    pub title: String,
    /// The plot being staged.
    pub plot_id: PlotId,
    /// Season year; at most one performance per year.
    pub year: u32,
    /// Committed budget, later the total spend.
    pub budget: Money,
    /// Box-office revenue, 0 until completion.
    pub revenue: Money,
    /// Whether the outcome has been resolved.
    pub is_completed: bool,
}

impl Performance {
    /// Revenue minus recorded budget. Only meaningful once completed.
    pub fn profit(&self) -> Money {
        self.revenue - self.budget
    }
}

/// An actor's role and fee in one performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Casting {
    /// The cast actor.
    pub actor_id: ActorId,
    /// The performance cast into.
    pub performance_id: PerformanceId,
    /// Free-text role name.
    pub role: String,
    /// Agreed fee for this production.
    pub contract_cost: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profit_is_revenue_minus_budget() {
        let perf = Performance {
            id: PerformanceId(1),
            title: "Hamlet Reloaded".into(),
            plot_id: PlotId(2),
            year: 2023,
            budget: 850_000,
            revenue: 1_200_000,
            is_completed: true,
        };
        assert_eq!(perf.profit(), 350_000);
    }
}

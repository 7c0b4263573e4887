use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Money;
use crate::error::{PlayhouseError, PlayhouseResult};
use crate::rank::Rank;

/// Serial identifier of a plot in the repertoire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlotId(pub u32);

impl fmt::Display for PlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowest and highest audience demand a plot may carry.
pub const DEMAND_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// Definition of a plot before it joins the repertoire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotSpec {
    /// Unique title.
    pub title: String,
    /// Smallest budget a performance of this plot may be committed with.
    pub minimum_budget: Money,
    /// Fixed staging overhead, spent regardless of cast.
    pub production_cost: Money,
    /// Number of roles to cast.
    pub roles_count: u32,
    /// Audience demand, 1 to 10.
    pub demand: u8,
    /// Advisory minimum rank per role index.
    pub required_ranks: Vec<Rank>,
}

impl PlotSpec {
    /// Check the numeric constraints of a plot.
    pub fn validate(&self) -> PlayhouseResult<()> {
        if self.title.trim().is_empty() {
            return Err(PlayhouseError::Validation("plot title is empty".into()));
        }
        if self.minimum_budget <= 0 {
            return Err(PlayhouseError::Validation(
                "minimum budget must be positive".into(),
            ));
        }
        if self.production_cost <= 0 {
            return Err(PlayhouseError::Validation(
                "production cost must be positive".into(),
            ));
        }
        if self.roles_count < 1 {
            return Err(PlayhouseError::Validation(
                "a plot needs at least one role".into(),
            ));
        }
        if !DEMAND_RANGE.contains(&self.demand) {
            return Err(PlayhouseError::Validation(format!(
                "demand {} outside 1-10",
                self.demand
            )));
        }
        if self.required_ranks.len() > self.roles_count as usize {
            return Err(PlayhouseError::Validation(format!(
                "{} rank requirements for {} roles",
                self.required_ranks.len(),
                self.roles_count
            )));
        }
        Ok(())
    }
}

/// A reusable script template. Immutable once in the repertoire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plot {
    /// Repertoire identifier.
    pub id: PlotId,
    /// Unique title.
    pub title: String,
    /// Smallest budget a performance of this plot may be committed with.
    pub minimum_budget: Money,
    /// Fixed staging overhead, spent regardless of cast.
    pub production_cost: Money,
    /// Number of roles to cast.
    pub roles_count: u32,
    /// Audience demand, 1 to 10.
    pub demand: u8,
    /// Advisory minimum rank per role index.
    pub required_ranks: Vec<Rank>,
}

impl Plot {
    /// Combine an identifier with a validated spec.
    pub fn from_spec(id: PlotId, spec: PlotSpec) -> Self {
        Self {
            id,
            title: spec.title,
            minimum_budget: spec.minimum_budget,
            production_cost: spec.production_cost,
            roles_count: spec.roles_count,
            demand: spec.demand,
            required_ranks: spec.required_ranks,
        }
    }

    /// The plot's definition without its identifier.
    pub fn spec(&self) -> PlotSpec {
        PlotSpec {
            title: self.title.clone(),
            minimum_budget: self.minimum_budget,
            production_cost: self.production_cost,
            roles_count: self.roles_count,
            demand: self.demand,
            required_ranks: self.required_ranks.clone(),
        }
    }

    /// Advisory minimum rank for the role at `index`, if any.
    pub fn required_rank(&self, index: usize) -> Option<Rank> {
        self.required_ranks.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hamlet() -> PlotSpec {
        PlotSpec {
            title: "Hamlet".into(),
            minimum_budget: 800_000,
            production_cost: 500_000,
            roles_count: 8,
            demand: 9,
            required_ranks: vec![Rank::Master, Rank::Honored],
        }
    }

    #[test]
    fn valid_spec_passes() {
        assert!(hamlet().validate().is_ok());
    }

    #[test]
    fn demand_bounds() {
        let mut spec = hamlet();
        spec.demand = 0;
        assert!(spec.validate().is_err());
        spec.demand = 11;
        assert!(spec.validate().is_err());
        spec.demand = 10;
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn too_many_rank_requirements_rejected() {
        let mut spec = hamlet();
        spec.roles_count = 1;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn non_positive_costs_rejected() {
        let mut spec = hamlet();
        spec.production_cost = 0;
        assert!(spec.validate().is_err());
        let mut spec = hamlet();
        spec.minimum_budget = -1;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn required_rank_lookup() {
        let plot = Plot::from_spec(PlotId(2), hamlet());
        assert_eq!(plot.required_rank(0), Some(Rank::Master));
        assert_eq!(plot.required_rank(1), Some(Rank::Honored));
        assert_eq!(plot.required_rank(5), None);
    }
}

//! Configuration for the season engine.

use ph_core::Money;
use ph_core::state::{DEFAULT_START_CAPITAL, DEFAULT_START_YEAR};

/// Smallest roster the theater may shrink to.
pub const DEFAULT_MIN_ROSTER: usize = 8;

/// Configuration for a [`Director`](crate::Director).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// RNG seed for reproducible seasons. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Year a fresh game starts in.
    pub starting_year: u32,
    /// Capital a fresh game starts with.
    pub starting_capital: Money,
    /// The roster never drops below this many actors.
    pub min_roster: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_year: DEFAULT_START_YEAR,
            starting_capital: DEFAULT_START_CAPITAL,
            min_roster: DEFAULT_MIN_ROSTER,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting year.
    pub fn with_starting_year(mut self, year: u32) -> Self {
        self.starting_year = year;
        self
    }

    /// Set the starting capital (negative values clamp to 0).
    pub fn with_starting_capital(mut self, capital: Money) -> Self {
        self.starting_capital = capital.max(0);
        self
    }

    /// Set the roster floor.
    pub fn with_min_roster(mut self, min_roster: usize) -> Self {
        self.min_roster = min_roster;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.starting_year, 2025);
        assert_eq!(cfg.starting_capital, 1_000_000);
        assert_eq!(cfg.min_roster, 8);
    }

    #[test]
    fn builder_methods() {
        let cfg = EngineConfig::default()
            .with_seed(7)
            .with_starting_year(2030)
            .with_starting_capital(250_000)
            .with_min_roster(3);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.starting_year, 2030);
        assert_eq!(cfg.starting_capital, 250_000);
        assert_eq!(cfg.min_roster, 3);
    }

    #[test]
    fn negative_capital_clamped() {
        let cfg = EngineConfig::default().with_starting_capital(-5);
        assert_eq!(cfg.starting_capital, 0);
    }
}

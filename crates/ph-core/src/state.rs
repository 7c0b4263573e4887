use serde::{Deserialize, Serialize};

use crate::Money;

/// Earliest season year the theater keeps records for.
pub const MIN_YEAR: u32 = 2022;

/// Year a new game starts in.
pub const DEFAULT_START_YEAR: u32 = 2025;

/// Capital a new game starts with.
pub const DEFAULT_START_CAPITAL: Money = 1_000_000;

/// The single global game state: the season year and the bankable capital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current season year.
    pub current_year: u32,
    /// Bankable currency, never negative.
    pub capital: Money,
}

impl GameState {
    /// Create a state for the given year and capital.
    pub fn new(current_year: u32, capital: Money) -> Self {
        Self {
            current_year,
            capital,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_START_YEAR, DEFAULT_START_CAPITAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let state = GameState::default();
        assert_eq!(state.current_year, 2025);
        assert_eq!(state.capital, 1_000_000);
    }
}

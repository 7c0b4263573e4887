//! Year skip: sit out a season and sell staging rights instead.

use ph_core::{Money, Playhouse, SeasonEvent};
use serde::Serialize;
use tracing::info;

use crate::error::EngineResult;
use crate::random::RandomSource;

/// Rights sale, as a fraction of current capital.
pub const RIGHTS_SALE_BAND: (f64, f64) = (0.1, 0.2);

/// Result of skipping a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearSkip {
    /// The new current year.
    pub year: u32,
    /// Capital after the sale.
    pub capital: Money,
    /// Income from the rights sale.
    pub rights_sale: Money,
}

/// Advance one year, crediting a rights sale of 10-20% of capital.
///
/// Always available, whatever state the performances are in.
pub fn skip_year(house: &mut Playhouse, rng: &mut dyn RandomSource) -> EngineResult<YearSkip> {
    house.transact(|draft| -> EngineResult<YearSkip> {
        let mut state = draft.state();
        let (low, high) = RIGHTS_SALE_BAND;
        let rights_sale = (state.capital as f64 * rng.uniform(low, high)).floor() as Money;

        state.capital += rights_sale;
        state.current_year += 1;
        draft.set_state(state)?;

        info!(year = state.current_year, rights_sale, capital = state.capital, "year skipped");
        draft.record(SeasonEvent::YearSkipped {
            year: state.current_year,
            rights_sale,
        });
        Ok(YearSkip {
            year: state.current_year,
            capital: state.capital,
            rights_sale,
        })
    })
}

//! Read-only views of past and pending performances.

use ph_core::{Actor, Casting, Performance, PerformanceId, Playhouse, Plot};

use crate::error::EngineResult;

/// A performance with the title of its plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary<'a> {
    /// The performance.
    pub performance: &'a Performance,
    /// Title of the staged plot.
    pub plot_title: &'a str,
}

/// A cast member. The actor is `None` if they have since left the company.
#[derive(Debug, Clone, PartialEq)]
pub struct CastMember<'a> {
    /// Role and fee.
    pub casting: &'a Casting,
    /// The actor, if still on the roster.
    pub actor: Option<&'a Actor>,
}

/// A performance with its plot and full cast.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceDetails<'a> {
    /// The performance.
    pub performance: &'a Performance,
    /// The staged plot.
    pub plot: &'a Plot,
    /// Cast ordered by contract cost, highest first.
    pub cast: Vec<CastMember<'a>>,
}

/// All performances, newest year first.
pub fn performances<'a>(house: &'a Playhouse) -> EngineResult<Vec<PerformanceSummary<'a>>> {
    house
        .performances()
        .into_iter()
        .map(|performance| -> EngineResult<PerformanceSummary<'a>> {
            let plot = house.require_plot(performance.plot_id)?;
            Ok(PerformanceSummary {
                performance,
                plot_title: &plot.title,
            })
        })
        .collect()
}

/// A performance, its plot and its cast.
pub fn performance_details(house: &Playhouse, id: PerformanceId) -> EngineResult<PerformanceDetails<'_>> {
    let performance = house.require_performance(id)?;
    let plot = house.require_plot(performance.plot_id)?;
    let cast = house
        .cast_of(id)
        .into_iter()
        .map(|casting| CastMember {
            casting,
            actor: house.actor(casting.actor_id),
        })
        .collect();
    Ok(PerformanceDetails {
        performance,
        plot,
        cast,
    })
}

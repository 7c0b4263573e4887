//! Roster rules: hiring, editing and dismissing actors.

use ph_core::{Actor, ActorId, ActorProfile, Playhouse, SeasonEvent};
use tracing::info;

use crate::error::{EngineError, EngineResult};

/// Hire an actor. Full names are unique.
pub fn add_actor(house: &mut Playhouse, profile: ActorProfile) -> EngineResult<ActorId> {
    house.transact(|draft| -> EngineResult<ActorId> {
        let id = draft.add_actor(profile)?;
        let name = draft.require_actor(id)?.name.to_string();
        info!(actor = %id, %name, "actor hired");
        draft.record(SeasonEvent::ActorHired { actor: id, name });
        Ok(id)
    })
}

/// Replace an actor's profile.
pub fn update_actor(house: &mut Playhouse, id: ActorId, profile: ActorProfile) -> EngineResult<()> {
    house.transact(|draft| -> EngineResult<()> {
        draft.update_actor(id, profile)?;
        let name = draft.require_actor(id)?.name.to_string();
        info!(actor = %id, %name, "actor updated");
        draft.record(SeasonEvent::ActorUpdated { actor: id, name });
        Ok(())
    })
}

/// Dismiss an actor.
///
/// Refused while the actor is cast in a performance that has not been
/// resolved, or when the roster would fall below `min_roster`.
pub fn delete_actor(house: &mut Playhouse, id: ActorId, min_roster: usize) -> EngineResult<Actor> {
    house.transact(|draft| -> EngineResult<Actor> {
        draft.require_actor(id)?;
        if draft.active_castings(id) > 0 {
            return Err(EngineError::ActorInActiveCast(id));
        }
        if draft.actor_count() <= min_roster {
            return Err(EngineError::BelowMinimumRoster {
                minimum: min_roster,
            });
        }

        let actor = draft.remove_actor(id)?;
        let name = actor.name.to_string();
        info!(actor = %id, %name, remaining = draft.actor_count(), "actor dismissed");
        draft.record(SeasonEvent::ActorDismissed { actor: id, name });
        Ok(actor)
    })
}

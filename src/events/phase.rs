//! Phase transition event.
//!
//! [`PhaseChangeEvent`] is triggered whenever an entity's
//! [`Phase`](crate::components::phase::Phase) moves to a new label, after the
//! `on_exit` callback and before `on_enter`.

use bevy_ecs::prelude::*;

#[derive(Event, Debug, Clone)]
pub struct PhaseChangeEvent {
    /// The entity that transitioned to a new phase.
    pub entity: Entity,
}

//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when a new
//! scene starts. Observers and registered scene systems carry it.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
pub struct Persistent;

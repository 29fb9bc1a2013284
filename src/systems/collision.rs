//! Overlap detection.
//!
//! [`collision_detector`] checks every pair of grouped colliders and triggers
//! a [`CollisionEvent`] for each overlapping pair. What an overlap means is
//! decided by [`observe_collision`](crate::events::collision::observe_collision).
use bevy_ecs::prelude::*;

use crate::components::boxcollider::{BoxCollider, Solid};
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionEvent;

pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider), (With<Group>, Without<Solid>)>,
    mut commands: Commands,
) {
    let mut pairs: Vec<(Entity, Entity)> = Vec::new();
    for [(entity_a, position_a, collider_a), (entity_b, position_b, collider_b)] in
        query.iter_combinations()
    {
        if collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            pairs.push((entity_a, entity_b));
        }
    }
    for (a, b) in pairs {
        commands.trigger(CollisionEvent { a, b });
    }
}

//! Kinematic movement.
//!
//! - [`movement_system`] integrates [`RigidBody`] velocities into positions.
//! - [`solid_pushout_system`] pushes moving colliders out of [`Solid`]
//!   obstacles along the shallowest axis.
//! - [`bounds_system`] keeps [`Bounded`] colliders inside their area (world
//!   edges, the boss arena).
//!
//! Run them in that order so bounds win over push-out.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::{Bounded, BoxCollider, Solid};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

pub fn movement_system(mut query: Query<(&mut MapPosition, &RigidBody)>, time: Res<WorldTime>) {
    for (mut position, rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        let delta = rigidbody.velocity.scale_by(time.delta);
        position.pos = position.pos + delta;
    }
}

pub fn solid_pushout_system(
    mut movers: Query<(&mut MapPosition, &BoxCollider), (With<RigidBody>, Without<Solid>)>,
    solids: Query<(&MapPosition, &BoxCollider), With<Solid>>,
) {
    for (mut position, collider) in movers.iter_mut() {
        for (solid_pos, solid_collider) in solids.iter() {
            if let Some(push) = collider.separation(position.pos, solid_collider, solid_pos.pos) {
                position.pos = position.pos + push;
            }
        }
    }
}

pub fn bounds_system(mut query: Query<(&mut MapPosition, &BoxCollider, &Bounded)>) {
    for (mut position, collider, bounds) in query.iter_mut() {
        let fix = bounds.correction(collider, position.pos);
        if fix.x != 0.0 || fix.y != 0.0 {
            position.pos = position.pos + fix;
        }
    }
}

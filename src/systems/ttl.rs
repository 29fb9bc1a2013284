//! TTL (time-to-live) system.
//!
//! [`ttl_system`] decrements [`Ttl`](crate::components::ttl::Ttl) timers and
//! despawns entities when their time runs out. Sword slashes and particles
//! use it. The countdown follows the scaled
//! [`WorldTime::delta`](crate::resources::worldtime::WorldTime).

use bevy_ecs::prelude::*;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

/// Decrements TTL and despawns entities when it reaches zero.
pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut ttl) in query.iter_mut() {
        ttl.remaining -= dt;
        if ttl.remaining <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_entities_are_despawned() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.1,
            ..Default::default()
        });
        let short = world.spawn(Ttl::new(0.15)).id();
        let long = world.spawn(Ttl::new(1.0)).id();
        let mut schedule = Schedule::default();
        schedule.add_systems(ttl_system);
        schedule.run(&mut world);
        assert!(world.get_entity(short).is_ok());
        schedule.run(&mut world);
        assert!(world.get_entity(short).is_err());
        assert!(world.get_entity(long).is_ok());
    }
}

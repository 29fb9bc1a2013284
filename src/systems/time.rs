//! Time systems.
//!
//! - [`update_world_time`] advances the shared
//!   [`WorldTime`](crate::resources::worldtime::WorldTime) once per frame,
//!   applying `time_scale` to the provided delta.
//! - [`update_timers`] ticks [`Timer`] components and triggers a
//!   [`TimerEvent`] when one completes.
use bevy_ecs::prelude::*;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Tick timers. A completed timer fires once; the observer decides whether
/// the entity goes away.
pub fn update_timers(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        if timer.tick(world_time.delta) {
            commands.trigger(TimerEvent {
                entity,
                signal: timer.signal.clone(),
            });
        }
    }
}

//! Boss state machine systems.
//!
//! [`phase_change_detector`] applies the transition requested last frame:
//! `on_exit` of the old label, a [`PhaseChangeEvent`], then `on_enter` of the
//! new one. [`phase_update_system`] runs the `on_update` callback of every
//! current label and stores the label it returns in `phase.next`.
//!
//! Chain them detector first, so a request made this frame takes effect on
//! the next one.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;

use crate::components::boss::Boss;
use crate::components::mapposition::MapPosition;
use crate::components::phase::{Phase, PhaseCallback, PhaseContext};
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::events::phase::PhaseChangeEvent;
use crate::resources::camerafx::CameraFx;
use crate::resources::rng::GameRng;
use crate::resources::worldtime::WorldTime;

/// Everything a [`PhaseContext`] borrows, fetched once per system run.
#[derive(SystemParam)]
pub struct PhaseRunnerContext<'w, 's> {
    pub commands: Commands<'w, 's>,
    pub positions: Query<'w, 's, &'static mut MapPosition>,
    pub rigid_bodies: Query<'w, 's, &'static mut RigidBody>,
    pub scales: Query<'w, 's, &'static mut Scale>,
    pub bosses: Query<'w, 's, &'static mut Boss>,
    pub players: Query<'w, 's, (Entity, &'static Player)>,
    pub camera: ResMut<'w, CameraFx>,
    pub world_time: Res<'w, WorldTime>,
    pub rng: ResMut<'w, GameRng>,
}

impl<'w, 's> PhaseRunnerContext<'w, 's> {
    fn context(&mut self) -> PhaseContext<'_, 'w, 's> {
        PhaseContext {
            commands: &mut self.commands,
            positions: &mut self.positions,
            rigid_bodies: &mut self.rigid_bodies,
            scales: &mut self.scales,
            bosses: &mut self.bosses,
            players: &self.players,
            camera: &mut self.camera,
            world_time: &self.world_time,
            rng: &mut self.rng,
        }
    }
}

/// A label switch collected while the phase query is borrowed.
struct Transition {
    entity: Entity,
    left: String,
    time_in_left: f32,
    on_exit: Option<PhaseCallback>,
    on_enter: Option<PhaseCallback>,
}

pub fn phase_change_detector(
    mut query: Query<(Entity, &mut Phase)>,
    time: Res<WorldTime>,
    mut context: PhaseRunnerContext,
) {
    let mut transitions: Vec<Transition> = Vec::new();
    for (entity, mut phase) in query.iter_mut() {
        let Some(next) = phase.next.take() else {
            phase.time_in_phase += time.delta;
            continue;
        };
        let left = std::mem::replace(&mut phase.current, next);
        let time_in_left = std::mem::take(&mut phase.time_in_phase);
        phase.previous = Some(left.clone());
        transitions.push(Transition {
            entity,
            on_exit: phase.on_exit.get(&left).copied(),
            on_enter: phase.on_enter.get(&phase.current).copied(),
            left,
            time_in_left,
        });
    }

    for t in transitions {
        if let Some(on_exit) = t.on_exit {
            on_exit(t.entity, t.time_in_left, Some(t.left.clone()), &mut context.context());
        }
        context.commands.trigger(PhaseChangeEvent { entity: t.entity });
        if let Some(on_enter) = t.on_enter {
            on_enter(t.entity, 0.0, Some(t.left), &mut context.context());
        }
    }
}

pub fn phase_update_system(mut query: Query<(Entity, &mut Phase)>, mut context: PhaseRunnerContext) {
    let requested: Vec<(Entity, String)> = query
        .iter()
        .filter_map(|(entity, phase)| {
            let on_update = phase.on_update.get(&phase.current)?;
            on_update(entity, phase.time_in_phase, phase.previous.clone(), &mut context.context())
                .map(|next| (entity, next))
        })
        .collect();

    for (entity, next) in requested {
        if let Ok((_, mut phase)) = query.get_mut(entity) {
            phase.next = Some(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wait_then_go(_: Entity, time: f32, _: Option<String>, _: &mut PhaseContext) -> Option<String> {
        (time >= 1.0).then(|| "go".to_string())
    }

    fn shrink_on_enter(entity: Entity, _: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
        if let Ok(mut scale) = ctx.scales.get_mut(entity) {
            scale.scale.x = 0.5;
        }
        None
    }

    fn world(delta: f32) -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta,
            ..Default::default()
        });
        world.init_resource::<CameraFx>();
        world.insert_resource(GameRng::seeded(1));
        world
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems((phase_change_detector, phase_update_system).chain());
        schedule.run(world);
    }

    #[test]
    fn test_update_requests_transition_applied_next_frame() {
        let mut world = world(0.6);
        let e = world
            .spawn((
                Scale::default(),
                Phase::new("wait")
                    .on_update("wait", wait_then_go)
                    .on_enter("go", shrink_on_enter),
            ))
            .id();
        tick(&mut world);
        assert!(world.get::<Phase>(e).unwrap().is("wait"));
        tick(&mut world);
        assert_eq!(world.get::<Phase>(e).unwrap().next.as_deref(), Some("go"));
        tick(&mut world);
        let phase = world.get::<Phase>(e).unwrap();
        assert!(phase.is("go"));
        assert_eq!(phase.previous.as_deref(), Some("wait"));
        assert_eq!(phase.time_in_phase, 0.0);
        assert_eq!(world.get::<Scale>(e).unwrap().scale.x, 0.5);
    }
}

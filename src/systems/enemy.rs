//! Enemy systems.
//!
//! [`enemy_ai_system`] steers every enemy toward (or around) the player;
//! [`enemy_status_system`] plays the hit flash and death animation and
//! removes enemies whose death finished.
use bevy_ecs::prelude::*;

use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::tint::Tint;
use crate::events::combat::EnemyKilledEvent;
use crate::resources::rng::GameRng;
use crate::resources::worldtime::WorldTime;

pub fn enemy_ai_system(
    mut enemies: Query<(&mut Enemy, &mut RigidBody, &MapPosition), Without<Player>>,
    players: Query<(&Player, &MapPosition)>,
    time: Res<WorldTime>,
    mut rng: ResMut<GameRng>,
) {
    let target = players
        .iter()
        .find(|(player, _)| player.alive)
        .map(|(_, position)| position.pos);
    for (mut enemy, mut body, position) in enemies.iter_mut() {
        let velocity = enemy.steer(time.elapsed, position.pos, target, &mut rng.0);
        body.set_velocity(velocity);
    }
}

pub fn enemy_status_system(
    mut commands: Commands,
    mut enemies: Query<(Entity, &mut Enemy, &mut Tint, Option<&mut Scale>, &mut RigidBody)>,
    time: Res<WorldTime>,
) {
    for (entity, mut enemy, mut tint, scale, mut body) in enemies.iter_mut() {
        let finished = enemy.tick(time.delta);
        tint.set_opacity(enemy.alpha());
        if let Some(mut scale) = scale {
            *scale = Scale::uniform(enemy.scale());
        }
        if enemy.dying() {
            body.stop();
        }
        if finished {
            log::debug!("Enemy '{}' removed", enemy.name);
            commands.entity(entity).try_despawn();
            commands.trigger(EnemyKilledEvent {});
        }
    }
}

//! Collision events and the gameplay router.
//!
//! The collision system emits [`CollisionEvent`] whenever two colliders
//! overlap. [`observe_collision`] looks at the [`Group`] of both participants
//! and turns the pair into the matching combat or progression event:
//!
//! | pair               | result                                     |
//! |--------------------|--------------------------------------------|
//! | player + enemy     | [`PlayerHitEvent`] with the enemy damage   |
//! | player + boss      | [`PlayerHitEvent`] with the boss damage    |
//! | sword + enemy      | [`EnemyHitEvent`], every overlapping frame |
//! | sword + boss       | [`BossHitEvent`], once per swing           |
//! | player + trigger   | [`ExitReachedEvent`] / [`MeetingReachedEvent`] when active |
//!
//! Every other pair (obstacles, NPCs, particles) is ignored here.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::boss::Boss;
use crate::components::enemy::Enemy;
use crate::components::group::Group;
use crate::components::hitbox::SwordHitbox;
use crate::components::player::Player;
use crate::components::trigger::{TriggerKind, TriggerZone};
use crate::events::combat::{
    BossHitEvent, EnemyHitEvent, ExitReachedEvent, MeetingReachedEvent, PlayerHitEvent,
};

/// Event fired when two entities with BoxCollider overlap.
///
/// No ordering guarantees are provided between [`CollisionEvent::a`] and
/// [`CollisionEvent::b`].
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Order the pair so that the entity in group `first` comes first.
fn pick(groups: &Query<&Group>, a: Entity, b: Entity, first: &str, second: &str) -> Option<(Entity, Entity)> {
    let is = |e: Entity, name: &str| groups.get(e).is_ok_and(|g| g.is(name));
    if is(a, first) && is(b, second) {
        Some((a, b))
    } else if is(b, first) && is(a, second) {
        Some((b, a))
    } else {
        None
    }
}

pub fn observe_collision(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    groups: Query<&Group>,
    players: Query<&Player>,
    enemies: Query<&Enemy>,
    bosses: Query<&Boss>,
    mut swords: Query<&mut SwordHitbox>,
    zones: Query<&TriggerZone>,
) {
    let CollisionEvent { a, b } = *trigger.event();

    if let Some((player, enemy)) = pick(&groups, a, b, "player", "enemy") {
        if let (Ok(p), Ok(e)) = (players.get(player), enemies.get(enemy)) {
            if p.alive && e.alive {
                commands.trigger(PlayerHitEvent { amount: e.damage });
            }
        }
        return;
    }

    if let Some((player, boss)) = pick(&groups, a, b, "player", "boss") {
        if let (Ok(p), Ok(bs)) = (players.get(player), bosses.get(boss)) {
            if p.alive && bs.alive {
                commands.trigger(PlayerHitEvent { amount: bs.damage });
            }
        }
        return;
    }

    if let Some((sword, enemy)) = pick(&groups, a, b, "sword", "enemy") {
        if let (Ok(hitbox), Ok(e)) = (swords.get(sword), enemies.get(enemy)) {
            if e.alive {
                commands.trigger(EnemyHitEvent {
                    entity: enemy,
                    amount: hitbox.damage,
                });
            }
        }
        return;
    }

    if let Some((sword, boss)) = pick(&groups, a, b, "sword", "boss") {
        if let (Ok(mut hitbox), Ok(bs)) = (swords.get_mut(sword), bosses.get(boss)) {
            if bs.alive && hitbox.register_hit(boss) {
                commands.trigger(BossHitEvent {
                    entity: boss,
                    amount: hitbox.damage,
                });
            }
        }
        return;
    }

    if let Some((player, zone)) = pick(&groups, a, b, "player", "trigger") {
        let alive = players.get(player).is_ok_and(|p| p.alive);
        if let Ok(z) = zones.get(zone) {
            if alive && z.active {
                match z.kind {
                    TriggerKind::Exit => commands.trigger(ExitReachedEvent {}),
                    TriggerKind::Meeting => commands.trigger(MeetingReachedEvent {}),
                }
            }
        }
    }
}

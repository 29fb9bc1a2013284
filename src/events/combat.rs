//! Combat and progression events.
//!
//! The collision router turns overlaps into hit events; the observers here
//! apply damage, spawn the hit feedback and move the scene forward (opening
//! the exit, leaving for the boss arena, the meeting in the meadow, the boss
//! victory).
//!
//! Flow for a player hit:
//!
//! ```text
//! CollisionEvent ─► PlayerHitEvent ─► Player::take_damage
//!                                        ├─ Hurt ─► shake + PlayerDamagedEvent ─► Hud
//!                                        └─ Died ─► PlayerDamagedEvent + death tweens
//! player status tick (0.6 s later) ─► PlayerDiedEvent ─► GameOver request
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::{Color, Vector2};

use crate::components::bob::Bob;
use crate::components::boss::{self, Boss};
use crate::components::boxcollider::BoxCollider;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::phase::Phase;
use crate::components::player::{self, DamageOutcome, Player};
use crate::components::rigidbody::RigidBody;
use crate::components::shape::Shape;
use crate::components::timer::{PendingDialogue, Timer};
use crate::components::tint::{Tint, rgb};
use crate::components::ttl::Ttl;
use crate::components::tween::{
    LoopMode, Track, TweenAlpha, TweenPosition, TweenRotation, TweenScale,
};
use crate::components::trigger::{TriggerKind, TriggerZone};
use crate::components::zindex::ZIndex;
use crate::events::dialogue::DIALOGUE_SIGNAL;
use crate::resources::camerafx::{CameraFx, FadeOut};
use crate::resources::hud::Hud;
use crate::resources::leveldata::LevelCatalog;
use crate::resources::levelprogress::LevelProgress;
use crate::resources::rng::GameRng;
use crate::resources::scene::{SceneId, SceneManager, SceneRequest};
use crate::resources::worldsignals::WorldSignals;

/// Speaker shown above the boss victory lines.
pub const VICTORY_SPEAKER: &str = "*";

/// Something touched the player.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerHitEvent {
    pub amount: i32,
}

/// The sword hit an enemy.
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyHitEvent {
    pub entity: Entity,
    pub amount: i32,
}

/// The sword hit a boss.
#[derive(Event, Debug, Clone, Copy)]
pub struct BossHitEvent {
    pub entity: Entity,
    pub amount: i32,
}

/// The player's health changed.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDamagedEvent {
    pub health: i32,
}

/// The player's death animation finished.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDiedEvent {}

/// An enemy finished dying and was removed.
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyKilledEvent {}

/// The boss finished dying and was removed.
#[derive(Event, Debug, Clone, Copy)]
pub struct BossDefeatedEvent {}

/// The player stepped on the open exit.
#[derive(Event, Debug, Clone, Copy)]
pub struct ExitReachedEvent {}

/// The player reached Jhulian in the meadow.
#[derive(Event, Debug, Clone, Copy)]
pub struct MeetingReachedEvent {}

fn spawn_particle(
    commands: &mut Commands,
    from: Vector2,
    to: Vector2,
    radius: f32,
    color: Color,
    alpha: f32,
    duration: f32,
) {
    commands.spawn((
        MapPosition::from_vec(from),
        Shape::circle(radius, color),
        Tint::alpha(alpha),
        TweenAlpha::new(alpha, 0.0, duration),
        TweenPosition::new(from, to, duration),
        Ttl::new(duration),
        ZIndex(12),
    ));
}

/// Apply contact damage to the player.
pub fn observe_player_hit(
    trigger: On<PlayerHitEvent>,
    mut commands: Commands,
    mut players: Query<(Entity, &mut Player, &mut RigidBody)>,
    mut camera: ResMut<CameraFx>,
) {
    let amount = trigger.event().amount;
    let Some((entity, mut player, mut body)) = players.iter_mut().next() else {
        return;
    };
    match player.take_damage(amount) {
        DamageOutcome::Ignored => {}
        DamageOutcome::Hurt => {
            camera.shake(0.1, 0.01);
            commands.trigger(PlayerDamagedEvent {
                health: player.health,
            });
        }
        DamageOutcome::Died => {
            info!("Player died");
            commands.trigger(PlayerDamagedEvent { health: 0 });
            body.stop();
            commands.entity(entity).try_insert((
                TweenAlpha::new(1.0, 0.0, player::DEATH_DURATION),
                TweenRotation::new(0.0, 180.0, player::DEATH_DURATION),
                TweenScale::uniform(1.0, 0.0, player::DEATH_DURATION),
            ));
        }
    }
}

pub fn observe_player_damaged(trigger: On<PlayerDamagedEvent>, mut hud: ResMut<Hud>) {
    hud.set_health(trigger.event().health);
}

/// Player death ends the scene: game over, with "retry" restarting it.
pub fn observe_player_died(_trigger: On<PlayerDiedEvent>, mut scenes: ResMut<SceneManager>) {
    let restart = scenes
        .current_request()
        .unwrap_or_else(|| SceneRequest::new(SceneId::Level1));
    info!("Game over, retry goes to {:?}", restart.scene);
    scenes.request(SceneRequest::game_over(restart));
}

pub fn observe_enemy_hit(
    trigger: On<EnemyHitEvent>,
    mut commands: Commands,
    mut enemies: Query<(&mut Enemy, &MapPosition)>,
    mut rng: ResMut<GameRng>,
) {
    let EnemyHitEvent { entity, amount } = *trigger.event();
    let Ok((mut enemy, position)) = enemies.get_mut(entity) else {
        return;
    };
    if enemy.take_damage(amount, &mut rng.0) != DamageOutcome::Died {
        return;
    }
    debug!("Enemy '{}' down", enemy.name);
    commands.entity(entity).try_remove::<BoxCollider>();
    let origin = position.pos;
    for _ in 0..6 {
        let from = origin + Vector2::new(rng.range(-10.0, 10.0), rng.range(-10.0, 10.0));
        spawn_particle(&mut commands, from, from, 3.0, rgb(0x6666ff), 0.8, 0.5);
    }
}

pub fn observe_boss_hit(
    trigger: On<BossHitEvent>,
    mut commands: Commands,
    mut bosses: Query<(&mut Boss, &MapPosition, &mut RigidBody, &mut Phase)>,
    mut hud: ResMut<Hud>,
    mut camera: ResMut<CameraFx>,
    mut rng: ResMut<GameRng>,
) {
    let BossHitEvent { entity, amount } = *trigger.event();
    let Ok((mut boss, position, mut body, mut phase)) = bosses.get_mut(entity) else {
        return;
    };
    match boss.take_damage(amount) {
        DamageOutcome::Ignored => {}
        DamageOutcome::Hurt => {
            camera.shake(0.08, 0.008);
            hud.update_boss(boss.health_fraction());
        }
        DamageOutcome::Died => {
            info!("Boss '{}' defeated", boss.name);
            hud.update_boss(0.0);
            body.stop();
            commands
                .entity(entity)
                .try_remove::<(BoxCollider, TweenScale)>();
            if let Some(warning) = boss.warning.take() {
                commands.entity(warning).try_despawn();
            }
            camera.shake(0.3, 0.02);
            camera.flash(0.4, Color::new(200, 100, 255, 255));
            for i in 0..12 {
                let angle = i as f32 / 12.0 * std::f32::consts::TAU;
                let dist = rng.range(60.0, 100.0);
                let to = position.pos + Vector2::new(angle.cos(), angle.sin()) * dist;
                let radius = rng.range(4.0, 8.0);
                let duration = rng.range(0.6, 0.8);
                spawn_particle(&mut commands, position.pos, to, radius, rgb(0xcc66ff), 1.0, duration);
            }
            phase.transition_to("dead");
        }
    }
}

/// Count kills and open the exit once enough enemies are gone.
pub fn observe_enemy_killed(
    _trigger: On<EnemyKilledEvent>,
    mut commands: Commands,
    mut progress: ResMut<LevelProgress>,
    mut zones: Query<(Entity, &mut TriggerZone, &MapPosition)>,
) {
    if !progress.record_kill() {
        debug!("Kills: {}/{}", progress.kills, progress.required_kills());
        return;
    }
    info!("Exit open after {} kills", progress.kills);
    for (entity, mut zone, position) in zones.iter_mut() {
        if zone.kind != TriggerKind::Exit {
            continue;
        }
        zone.active = true;
        commands.entity(entity).try_insert((
            Shape::rect(40.0, 40.0, rgb(0x44ff44)),
            Tint::alpha(0.1),
            TweenAlpha::from_track(
                Track::new(0.1, 0.4, 0.8).with_loop_mode(LoopMode::PingPong),
            ),
            ZIndex(1),
        ));
        commands.spawn((
            MapPosition::new(position.pos.x, position.pos.y - 30.0),
            Shape::Arrow {
                size: 14.0,
                color: rgb(0x44ff44),
            },
            Bob::new(5.0, 0.5),
            ZIndex(20),
        ));
    }
}

/// Leave the field level for the boss arena.
pub fn observe_exit_reached(
    _trigger: On<ExitReachedEvent>,
    mut progress: ResMut<LevelProgress>,
    mut camera: ResMut<CameraFx>,
    scenes: Res<SceneManager>,
    catalog: Option<Res<LevelCatalog>>,
) {
    if progress.exit_taken {
        return;
    }
    progress.exit_taken = true;
    let encounter = scenes
        .current()
        .and_then(|scene| catalog.as_ref()?.field(scene))
        .map(|level| level.encounter.clone())
        .unwrap_or_default();
    info!("Exit reached, next boss: {}", encounter.boss.name);
    camera.fade_out(FadeOut::to_black(0.6, SceneRequest::boss(encounter)));
}

/// Stop the player and, after a short pause, let Jhulian speak.
pub fn observe_meeting_reached(
    _trigger: On<MeetingReachedEvent>,
    mut commands: Commands,
    mut progress: ResMut<LevelProgress>,
    mut players: Query<&mut RigidBody, With<Player>>,
    catalog: Option<Res<LevelCatalog>>,
) {
    if progress.meeting_triggered {
        return;
    }
    progress.meeting_triggered = true;
    info!("Meeting reached");
    for mut body in players.iter_mut() {
        body.stop();
    }
    let lines = catalog
        .map(|c| c.meadow.meeting.clone())
        .unwrap_or_default();
    commands.spawn((
        Timer::new(0.3, DIALOGUE_SIGNAL),
        PendingDialogue::new("Jhulian", lines).then(FadeOut {
            duration: 1.5,
            color: Color::WHITE,
            then: Some(SceneRequest::new(SceneId::Victory)),
        }),
    ));
}

/// Grow the registry's max health and queue the victory lines.
pub fn observe_boss_defeated(
    _trigger: On<BossDefeatedEvent>,
    mut commands: Commands,
    mut progress: ResMut<LevelProgress>,
    mut signals: ResMut<WorldSignals>,
    scenes: Res<SceneManager>,
) {
    if progress.boss_defeated {
        return;
    }
    progress.boss_defeated = true;
    let max = signals.grow_max_health(2);
    info!("Max health is now {}", max);
    let encounter = scenes.encounter();
    commands.spawn((
        Timer::new(1.0, DIALOGUE_SIGNAL),
        PendingDialogue::new(VICTORY_SPEAKER, encounter.win_message)
            .then(FadeOut::to_black(1.0, SceneRequest::new(encounter.next_scene))),
    ));
}

/// `true` once the boss's death animation has played out.
pub fn boss_death_done(time_in_dead: f32) -> bool {
    time_in_dead >= boss::DEATH_DURATION
}

//! Boss behaviour.
//!
//! The fight is a [`Phase`] machine built by [`boss_phase`]:
//!
//! ```text
//! idle ──1.5 s──► next action ─┬─► telegraph ──0.8 s──► charging ──► resting
//!                              └─► area_warning ──0.8 s──► shockwave ──► resting
//! resting ──rest_for──► next action
//! dead ──0.8 s──► despawn + BossDefeatedEvent
//! ```
//!
//! "next action" waits while there is no living player. The hit observer
//! moves the machine to `dead`; [`boss_status_system`] renders the flash and
//! the death fade every frame.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boss::{self, Boss};
use crate::components::mapposition::MapPosition;
use crate::components::phase::{Phase, PhaseContext};
use crate::components::scale::Scale;
use crate::components::shape::Shape;
use crate::components::tint::{Tint, rgb};
use crate::components::ttl::Ttl;
use crate::components::tween::{LoopMode, Track, TweenAlpha, TweenScale};
use crate::components::zindex::ZIndex;
use crate::events::combat::{BossDefeatedEvent, PlayerHitEvent, boss_death_done};

pub const IDLE_TIME: f32 = 1.5;
pub const TELEGRAPH_TIME: f32 = 0.8;
pub const CHARGE_TIMEOUT: f32 = 1.5;
pub const WARNING_TIME: f32 = 0.8;
pub const SHOCKWAVE_TIME: f32 = 0.4;
const ARRIVED: f32 = 10.0;

/// The boss state machine, starting in `idle`.
pub fn boss_phase() -> Phase {
    Phase::new("idle")
        .on_update("idle", idle_update)
        .on_enter("telegraph", telegraph_enter)
        .on_update("telegraph", telegraph_update)
        .on_exit("telegraph", telegraph_exit)
        .on_update("charging", charging_update)
        .on_enter("resting", stop_enter)
        .on_update("resting", resting_update)
        .on_enter("area_warning", warning_enter)
        .on_update("area_warning", warning_update)
        .on_exit("area_warning", warning_exit)
        .on_enter("shockwave", shockwave_enter)
        .on_update("shockwave", shockwave_update)
        .on_enter("dead", stop_enter)
        .on_update("dead", dead_update)
}

fn position_of(entity: Entity, ctx: &PhaseContext) -> Option<Vector2> {
    ctx.positions.get(entity).ok().map(|p| p.pos)
}

fn stop(entity: Entity, ctx: &mut PhaseContext) {
    if let Ok(mut body) = ctx.rigid_bodies.get_mut(entity) {
        body.stop();
    }
}

fn next_action(entity: Entity, ctx: &mut PhaseContext) -> Option<String> {
    ctx.living_player()?;
    let roll = ctx.rng.0.f32();
    let boss = ctx.bosses.get(entity).ok()?;
    Some(boss.next_action(roll).to_string())
}

fn rest(entity: Entity, seconds: f32, ctx: &mut PhaseContext) -> Option<String> {
    if let Ok(mut boss) = ctx.bosses.get_mut(entity) {
        boss.rest_for = seconds;
    }
    Some("resting".into())
}

fn stop_enter(entity: Entity, _: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
    stop(entity, ctx);
    None
}

fn idle_update(entity: Entity, time: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
    if time < IDLE_TIME {
        return None;
    }
    next_action(entity, ctx)
}

fn resting_update(entity: Entity, time: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
    let rest_for = ctx.bosses.get(entity).map(|b| b.rest_for).unwrap_or(1.0);
    if time < rest_for {
        return None;
    }
    next_action(entity, ctx)
}

// ==================== CHARGE ====================

fn telegraph_enter(entity: Entity, _: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
    stop(entity, ctx);
    let squash = Track::new(Vector2::new(1.0, 1.0), Vector2::new(1.2, 0.8), TELEGRAPH_TIME / 2.0)
        .with_loop_mode(LoopMode::Yoyo);
    ctx.commands.entity(entity).try_insert(TweenScale(squash));
    None
}

fn telegraph_update(entity: Entity, time: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
    if time < TELEGRAPH_TIME {
        return None;
    }
    let Some(target) = ctx.living_player() else {
        return rest(entity, 0.8, ctx);
    };
    let from = position_of(entity, ctx)?;
    let (speed, to) = {
        let mut boss = ctx.bosses.get_mut(entity).ok()?;
        boss.charge_target = Some(target);
        (boss.speed * boss::CHARGE_FACTOR, target - from)
    };
    if let Ok(mut body) = ctx.rigid_bodies.get_mut(entity) {
        if to.length() > f32::EPSILON {
            body.set_velocity(to.normalized() * speed);
        } else {
            body.stop();
        }
    }
    Some("charging".into())
}

fn telegraph_exit(entity: Entity, _: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
    ctx.commands.entity(entity).try_remove::<TweenScale>();
    if let Ok(mut scale) = ctx.scales.get_mut(entity) {
        *scale = Scale::default();
    }
    None
}

fn charging_update(entity: Entity, time: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
    let target = ctx.bosses.get(entity).ok().and_then(|b| b.charge_target);
    let arrived = match (target, position_of(entity, ctx)) {
        (Some(target), Some(pos)) => (target - pos).length() < ARRIVED,
        _ => true,
    };
    if arrived {
        stop(entity, ctx);
        return rest(entity, 1.0, ctx);
    }
    if time >= CHARGE_TIMEOUT {
        stop(entity, ctx);
        return rest(entity, 0.8, ctx);
    }
    None
}

// ==================== AREA ====================

fn warning_enter(entity: Entity, _: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
    stop(entity, ctx);
    let at = position_of(entity, ctx)?;
    let warning = ctx
        .commands
        .spawn((
            MapPosition::from_vec(at),
            Shape::circle(boss::AREA_RADIUS, rgb(0xff0000)),
            Tint::alpha(0.15),
            TweenAlpha::new(0.15, 0.5, WARNING_TIME),
            ZIndex(4),
        ))
        .id();
    if let Ok(mut boss) = ctx.bosses.get_mut(entity) {
        boss.warning = Some(warning);
    }
    None
}

fn warning_update(_: Entity, time: f32, _: Option<String>, _: &mut PhaseContext) -> Option<String> {
    (time >= WARNING_TIME).then(|| "shockwave".into())
}

fn warning_exit(entity: Entity, _: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
    let warning = ctx.bosses.get_mut(entity).ok().and_then(|mut b| b.warning.take());
    if let Some(warning) = warning {
        ctx.commands.entity(warning).try_despawn();
    }
    None
}

fn shockwave_enter(entity: Entity, _: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
    let at = position_of(entity, ctx)?;
    ctx.commands.spawn((
        MapPosition::from_vec(at),
        Shape::Ring {
            radius: 10.0,
            thickness: 4.0,
            color: rgb(0xff4444),
        },
        Scale::default(),
        TweenScale::uniform(1.0, 10.0, SHOCKWAVE_TIME),
        Tint::alpha(1.0),
        TweenAlpha::new(1.0, 0.0, SHOCKWAVE_TIME),
        Ttl::new(SHOCKWAVE_TIME),
        ZIndex(11),
    ));
    let damage = ctx.bosses.get(entity).map(|b| b.damage).unwrap_or(0);
    let in_radius = ctx
        .living_player()
        .is_some_and(|player| (player - at).length() < boss::AREA_RADIUS);
    if in_radius {
        ctx.commands.trigger(PlayerHitEvent { amount: damage });
    }
    None
}

fn shockwave_update(entity: Entity, time: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
    if time < SHOCKWAVE_TIME {
        return None;
    }
    rest(entity, 1.2, ctx)
}

// ==================== DEATH ====================

fn dead_update(entity: Entity, time: f32, _: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
    if boss_death_done(time) {
        log::debug!("Boss {:?} removed", entity);
        ctx.commands.entity(entity).try_despawn();
        ctx.commands.trigger(BossDefeatedEvent {});
    }
    None
}

/// Hit flash and death fade for every boss.
pub fn boss_status_system(
    mut bosses: Query<(&mut Boss, &mut Tint, &mut Scale)>,
    time: Res<crate::resources::worldtime::WorldTime>,
) {
    for (mut boss, mut tint, mut scale) in bosses.iter_mut() {
        boss.tick(time.delta);
        tint.set_opacity(boss.alpha());
        if let Some(s) = boss.death_scale() {
            *scale = Scale::uniform(s);
        }
    }
}

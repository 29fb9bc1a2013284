//! Tween animation systems.
//!
//! These systems update entity properties over time based on tween components:
//! - [`tween_mapposition_system`] – animates [`MapPosition`]
//! - [`tween_rotation_system`] – animates [`Rotation`]
//! - [`tween_scale_system`] – animates [`Scale`]
//! - [`tween_alpha_system`] – animates the opacity of [`Tint`]
//! - [`bob_system`] – advances the idle [`Bob`] clocks
//!
//! Each system reads the frame delta from [`WorldTime`], advances the
//! component's [`Track`] and writes the eased value. Finished tweens stay on
//! the entity with `playing == false`; inserting a new tween replaces them.

use crate::components::bob::Bob;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::tint::Tint;
use crate::components::tween::{
    Easing, LoopMode, Track, TweenAlpha, TweenPosition, TweenRotation, TweenScale,
};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use raylib::math::Vector2;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::SineInOut => 0.5 - 0.5 * (std::f32::consts::PI * t).cos(),
    }
}

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Advance tween time and handle looping/completion.
pub(crate) fn advance(
    time: &mut f32,
    duration: f32,
    forward: &mut bool,
    playing: &mut bool,
    mode: LoopMode,
    dt: f32,
) {
    let dir = if *forward { 1.0 } else { -1.0 };
    *time += dt * dir;

    let finished_forward = *forward && *time >= duration;
    let finished_backward = !*forward && *time <= 0.0;

    if finished_forward || finished_backward {
        match mode {
            LoopMode::Once => {
                *playing = false;
                *time = time.clamp(0.0, duration);
            }
            LoopMode::Loop => {
                *time = if finished_forward { 0.0 } else { duration };
            }
            LoopMode::PingPong => {
                *forward = !*forward;
                *time = time.clamp(0.0, duration);
            }
            LoopMode::Yoyo => {
                if finished_forward {
                    *forward = false;
                    *time = duration;
                } else {
                    *playing = false;
                    *time = 0.0;
                }
            }
        }
    }
}

/// Advance a track by `dt` and return the eased progress to apply, or `None`
/// while the track is stopped or still inside its start delay.
pub(crate) fn step<T: Copy>(track: &mut Track<T>, dt: f32) -> Option<f32> {
    if !track.playing {
        return None;
    }
    let mut dt = dt.max(0.0);
    if track.delay > 0.0 {
        track.delay -= dt;
        if track.delay > 0.0 {
            return None;
        }
        dt = -track.delay;
        track.delay = 0.0;
    }
    let (duration, mode) = (track.duration, track.loop_mode);
    advance(
        &mut track.time,
        duration,
        &mut track.forward,
        &mut track.playing,
        mode,
        dt,
    );
    let t = if duration > 0.0 { track.time / duration } else { 1.0 };
    Some(ease(track.easing, t))
}

/// Animate entity positions based on [`TweenPosition`] components.
pub fn tween_mapposition_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut MapPosition, &mut TweenPosition)>,
) {
    for (mut mp, mut tw) in query.iter_mut() {
        if let Some(k) = step(&mut tw.0, world_time.delta) {
            mp.pos = lerp_v2(tw.0.from, tw.0.to, k);
        }
    }
}

/// Animate entity rotations based on [`TweenRotation`] components.
pub fn tween_rotation_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Rotation, &mut TweenRotation)>,
) {
    for (mut rot, mut tw) in query.iter_mut() {
        if let Some(k) = step(&mut tw.0, world_time.delta) {
            rot.degrees = lerp_f32(tw.0.from, tw.0.to, k);
        }
    }
}

/// Animate entity scales based on [`TweenScale`] components.
pub fn tween_scale_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Scale, &mut TweenScale)>,
) {
    for (mut scale, mut tw) in query.iter_mut() {
        if let Some(k) = step(&mut tw.0, world_time.delta) {
            scale.scale = lerp_v2(tw.0.from, tw.0.to, k);
        }
    }
}

/// Animate entity opacity based on [`TweenAlpha`] components, chaining into
/// the follow-up track when one is queued.
pub fn tween_alpha_system(
    world_time: Res<WorldTime>,
    mut query: Query<(&mut Tint, &mut TweenAlpha)>,
) {
    for (mut tint, mut tw) in query.iter_mut() {
        if let Some(k) = step(&mut tw.track, world_time.delta) {
            let alpha = lerp_f32(tw.track.from, tw.track.to, k);
            tint.set_opacity(alpha);
        }
        if !tw.track.playing {
            if let Some(next) = tw.then.take() {
                tw.track = next;
            }
        }
    }
}

pub fn bob_system(world_time: Res<WorldTime>, mut query: Query<&mut Bob>) {
    for mut bob in query.iter_mut() {
        bob.time += world_time.delta;
    }
}

//! Tween components for animated interpolation.
//!
//! This module provides components for smoothly animating entity properties
//! over time:
//! - [`TweenPosition`] – animate [`MapPosition`](super::mapposition::MapPosition)
//! - [`TweenRotation`] – animate [`Rotation`](super::rotation::Rotation)
//! - [`TweenScale`] – animate [`Scale`](super::scale::Scale)
//! - [`TweenAlpha`] – animate the opacity of [`Tint`](super::tint::Tint)
//!
//! All of them wrap a [`Track`], which holds the endpoints and the playback
//! clock (duration, delay, [`Easing`], [`LoopMode`]). See
//! [`crate::systems::tween`] for the update systems.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Determines how a tween behaves when it reaches the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopMode {
    /// Play once and stop.
    Once,
    /// Restart from the beginning when finished.
    Loop,
    /// Reverse direction when reaching either end, forever.
    PingPong,
    /// Play forward, play back once, then stop at the start value.
    Yoyo,
}

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Slow start and end following half a cosine wave.
    SineInOut,
}

/// Interpolation endpoints plus the playback clock.
#[derive(Clone, Debug)]
pub struct Track<T> {
    pub from: T,
    pub to: T,
    /// Duration in seconds of one forward pass.
    pub duration: f32,
    /// Seconds to wait before the first frame is applied.
    pub delay: f32,
    pub easing: Easing,
    pub loop_mode: LoopMode,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the pass.
    pub time: f32,
    /// Direction of playback (true = forward).
    pub forward: bool,
}

impl<T: Copy> Track<T> {
    pub fn new(from: T, to: T, duration: f32) -> Self {
        Track {
            from,
            to,
            duration,
            delay: 0.0,
            easing: Easing::Linear,
            loop_mode: LoopMode::Once,
            playing: true,
            time: 0.0,
            forward: true,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// True while the start delay has not elapsed yet.
    pub fn waiting(&self) -> bool {
        self.delay > 0.0
    }
}

/// Animates an entity's position between two points.
#[derive(Component, Clone, Debug)]
pub struct TweenPosition(pub Track<Vector2>);

/// Animates an entity's rotation between two angles (degrees).
#[derive(Component, Clone, Debug)]
pub struct TweenRotation(pub Track<f32>);

/// Animates an entity's scale between two values.
#[derive(Component, Clone, Debug)]
pub struct TweenScale(pub Track<Vector2>);

/// Animates an entity's opacity.
///
/// When the track finishes and `then` holds another track, playback continues
/// with it (fade in, then pulse forever).
#[derive(Component, Clone, Debug)]
pub struct TweenAlpha {
    pub track: Track<f32>,
    pub then: Option<Track<f32>>,
}

impl TweenPosition {
    pub fn new(from: Vector2, to: Vector2, duration: f32) -> Self {
        TweenPosition(Track::new(from, to, duration))
    }
}

impl TweenRotation {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenRotation(Track::new(from, to, duration))
    }
}

impl TweenScale {
    pub fn new(from: Vector2, to: Vector2, duration: f32) -> Self {
        TweenScale(Track::new(from, to, duration))
    }

    pub fn uniform(from: f32, to: f32, duration: f32) -> Self {
        TweenScale(Track::new(Vector2::new(from, from), Vector2::new(to, to), duration))
    }
}

impl TweenAlpha {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        TweenAlpha {
            track: Track::new(from, to, duration),
            then: None,
        }
    }

    pub fn from_track(track: Track<f32>) -> Self {
        TweenAlpha { track, then: None }
    }

    pub fn then(mut self, next: Track<f32>) -> Self {
        self.then = Some(next);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_track_defaults() {
        let tr = Track::new(0.0_f32, 1.0, 2.0);
        assert!(approx_eq(tr.duration, 2.0));
        assert!(approx_eq(tr.delay, 0.0));
        assert_eq!(tr.easing, Easing::Linear);
        assert_eq!(tr.loop_mode, LoopMode::Once);
        assert!(tr.playing);
        assert!(tr.forward);
        assert!(!tr.waiting());
    }

    #[test]
    fn test_track_builders() {
        let tr = Track::new(0.0_f32, 1.0, 1.0)
            .with_easing(Easing::SineInOut)
            .with_loop_mode(LoopMode::PingPong)
            .with_delay(0.5);
        assert_eq!(tr.easing, Easing::SineInOut);
        assert_eq!(tr.loop_mode, LoopMode::PingPong);
        assert!(tr.waiting());
    }

    #[test]
    fn test_tween_scale_uniform() {
        let tw = TweenScale::uniform(1.0, 2.0, 0.8);
        assert!(approx_eq(tw.0.from.x, 1.0));
        assert!(approx_eq(tw.0.to.y, 2.0));
    }

    #[test]
    fn test_tween_alpha_chain() {
        let tw = TweenAlpha::new(0.0, 1.0, 1.0)
            .then(Track::new(1.0, 0.3, 0.6).with_loop_mode(LoopMode::PingPong));
        assert!(tw.then.is_some());
        assert!(approx_eq(tw.track.to, 1.0));
    }
}

//! Whole-screen camera effects.
//!
//! [`CameraFx`] owns the background colour plus the fade, shake and flash
//! effects scenes use for transitions and hit feedback. A fade-out may carry
//! the [`SceneRequest`] to issue once the screen is fully covered.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Color, Vector2};

use crate::components::tint::with_alpha;
use crate::resources::scene::SceneRequest;

/// A fade to `color` followed by a scene switch.
#[derive(Clone, Debug, PartialEq)]
pub struct FadeOut {
    pub duration: f32,
    pub color: Color,
    pub then: Option<SceneRequest>,
}

impl FadeOut {
    pub fn to_black(duration: f32, then: SceneRequest) -> Self {
        Self {
            duration,
            color: Color::BLACK,
            then: Some(then),
        }
    }
}

#[derive(Clone, Debug)]
struct Fade {
    color: Color,
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    then: Option<SceneRequest>,
}

impl Fade {
    fn alpha(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    fn done(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn is_out(&self) -> bool {
        self.to > self.from
    }
}

#[derive(Clone, Copy, Debug)]
struct Pulse<T> {
    value: T,
    duration: f32,
    remaining: f32,
}

#[derive(Resource, Clone, Debug)]
pub struct CameraFx {
    pub background: Color,
    fade: Option<Fade>,
    shake: Option<Pulse<f32>>,
    flash: Option<Pulse<Color>>,
    shake_offset: Vector2,
    view: Vector2,
}

impl Default for CameraFx {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl CameraFx {
    pub fn new(view_width: f32, view_height: f32) -> Self {
        Self {
            background: Color::BLACK,
            fade: None,
            shake: None,
            flash: None,
            shake_offset: Vector2::zero(),
            view: Vector2::new(view_width, view_height),
        }
    }

    /// Clear running effects; used when a scene starts.
    pub fn reset(&mut self) {
        self.fade = None;
        self.shake = None;
        self.flash = None;
        self.shake_offset = Vector2::zero();
        self.background = Color::BLACK;
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn fade_in(&mut self, duration: f32, color: Color) {
        self.fade = Some(Fade {
            color,
            from: 1.0,
            to: 0.0,
            duration,
            elapsed: 0.0,
            then: None,
        });
    }

    /// Start a fade-out. Returns false (and changes nothing) while another
    /// fade-out is already running or holding.
    pub fn fade_out(&mut self, fade: FadeOut) -> bool {
        if self.is_fading_out() {
            return false;
        }
        self.fade = Some(Fade {
            color: fade.color,
            from: 0.0,
            to: 1.0,
            duration: fade.duration,
            elapsed: 0.0,
            then: fade.then,
        });
        true
    }

    pub fn is_fading_out(&self) -> bool {
        self.fade.as_ref().is_some_and(Fade::is_out)
    }

    /// Shake by up to `intensity × view size` pixels.
    pub fn shake(&mut self, duration: f32, intensity: f32) {
        self.shake = Some(Pulse {
            value: intensity,
            duration,
            remaining: duration,
        });
    }

    pub fn flash(&mut self, duration: f32, color: Color) {
        self.flash = Some(Pulse {
            value: color,
            duration,
            remaining: duration,
        });
    }

    /// Advance the effects. Returns the scene request of a fade-out that
    /// completed this frame.
    pub fn update(&mut self, dt: f32, rng: &mut fastrand::Rng) -> Option<SceneRequest> {
        let mut finished = None;
        let mut clear_fade = false;
        if let Some(fade) = self.fade.as_mut() {
            let was_done = fade.done();
            fade.elapsed += dt;
            if !was_done && fade.done() {
                if fade.is_out() {
                    finished = fade.then.take();
                } else {
                    clear_fade = true;
                }
            }
        }
        if clear_fade {
            self.fade = None;
        }

        self.shake_offset = Vector2::zero();
        if let Some(shake) = self.shake.as_mut() {
            shake.remaining -= dt;
            if shake.remaining <= 0.0 {
                self.shake = None;
            } else {
                let amp = self.view * shake.value;
                self.shake_offset = Vector2::new(
                    (rng.f32() * 2.0 - 1.0) * amp.x,
                    (rng.f32() * 2.0 - 1.0) * amp.y,
                );
            }
        }

        if let Some(flash) = self.flash.as_mut() {
            flash.remaining -= dt;
            if flash.remaining <= 0.0 {
                self.flash = None;
            }
        }
        finished
    }

    pub fn shake_offset(&self) -> Vector2 {
        self.shake_offset
    }

    /// Colour of the fade curtain, if one is showing.
    pub fn fade_overlay(&self) -> Option<Color> {
        let fade = self.fade.as_ref()?;
        let a = fade.alpha();
        if a <= 0.0 {
            return None;
        }
        Some(with_alpha(fade.color, a))
    }

    pub fn flash_overlay(&self) -> Option<Color> {
        let flash = self.flash.as_ref()?;
        let a = if flash.duration > 0.0 {
            (flash.remaining / flash.duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Some(with_alpha(flash.value, a))
    }
}

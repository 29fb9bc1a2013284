//! One-shot countdown timer.
//!
//! A [`Timer`] counts up to `duration` and then fires a
//! [`TimerEvent`](crate::events::timer::TimerEvent) carrying its `signal`.
//! Scenes spawn bare timer entities for delayed actions (intro dialogue,
//! victory messages, the boot splash) and react to the signal in an observer.

use bevy_ecs::prelude::Component;

use crate::resources::camerafx::FadeOut;

#[derive(Component, Clone, Debug)]
pub struct Timer {
    pub duration: f32,
    pub elapsed: f32,
    pub signal: String,
}

impl Timer {
    pub fn new(duration: f32, signal: impl Into<String>) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            signal: signal.into(),
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Advance by `dt`; returns true on the frame the timer completes.
    pub fn tick(&mut self, dt: f32) -> bool {
        let was_running = self.elapsed < self.duration;
        self.elapsed += dt;
        was_running && self.elapsed >= self.duration
    }
}

/// Dialogue shown when the [`Timer`] on the same entity fires with the
/// `"dialogue"` signal.
#[derive(Component, Clone, Debug)]
pub struct PendingDialogue {
    pub speaker: String,
    pub lines: Vec<String>,
    /// Fade started once the dialogue closes.
    pub then: Option<FadeOut>,
}

impl PendingDialogue {
    pub fn new(speaker: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            speaker: speaker.into(),
            lines,
            then: None,
        }
    }

    pub fn then(mut self, fade: FadeOut) -> Self {
        self.then = Some(fade);
        self
    }
}

//! Heads-up display state.
//!
//! [`Hud`] keeps what the HUD layer of the renderer draws: the heart row,
//! the mission title and, during boss fights, the boss health bar. Gameplay
//! code updates it through events (`PlayerDamagedEvent`, boss hits) rather
//! than drawing anything itself.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;
use smallvec::SmallVec;

use crate::components::player::DEFAULT_MAX_HEALTH;
use crate::components::tint::rgb;

pub const HEART_X: f32 = 24.0;
pub const HEART_Y: f32 = 22.0;
pub const HEART_SPACING: f32 = 28.0;
pub const HEART_SIZE: f32 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeartState {
    Full,
    Half,
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BossBar {
    pub name: String,
    pub fraction: f32,
}

#[derive(Resource, Clone, Debug)]
pub struct Hud {
    pub health: i32,
    pub max_health: i32,
    pub mission: Option<String>,
    pub boss_bar: Option<BossBar>,
    /// Hidden on non-gameplay scenes.
    pub visible: bool,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            health: DEFAULT_MAX_HEALTH,
            max_health: DEFAULT_MAX_HEALTH,
            mission: None,
            boss_bar: None,
            visible: false,
        }
    }
}

impl Hud {
    /// Show the HUD for a gameplay scene with a full heart row.
    pub fn show(&mut self, max_health: i32) {
        self.max_health = max_health.max(0);
        self.health = self.max_health;
        self.visible = true;
    }

    pub fn set_health(&mut self, hp: i32) {
        self.health = hp.clamp(0, self.max_health);
    }

    pub fn set_mission(&mut self, text: impl Into<String>) {
        self.mission = Some(text.into());
    }

    pub fn set_boss(&mut self, name: impl Into<String>, fraction: f32) {
        self.boss_bar = Some(BossBar {
            name: name.into(),
            fraction: fraction.max(0.0),
        });
    }

    pub fn update_boss(&mut self, fraction: f32) {
        if let Some(bar) = self.boss_bar.as_mut() {
            bar.fraction = fraction.max(0.0);
        }
    }

    pub fn hearts(&self) -> SmallVec<[HeartState; 8]> {
        heart_states(self.health, self.max_health)
    }
}

/// One heart per 2 HP of `max` (rounded up).
pub fn heart_states(hp: i32, max: i32) -> SmallVec<[HeartState; 8]> {
    let count = (max.max(0) + 1) / 2;
    (0..count)
        .map(|i| {
            let needed = (i + 1) * 2;
            if hp >= needed {
                HeartState::Full
            } else if hp >= needed - 1 {
                HeartState::Half
            } else {
                HeartState::Empty
            }
        })
        .collect()
}

/// Boss bar fill colour for a health fraction.
pub fn boss_bar_color(fraction: f32) -> Color {
    if fraction > 0.5 {
        rgb(0x9944cc)
    } else if fraction > 0.25 {
        rgb(0xcc6644)
    } else {
        rgb(0xcc3333)
    }
}

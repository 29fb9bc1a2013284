//! Roaming enemies ("Sombras de Duda", "Ecos del Silencio").
//!
//! An [`Enemy`] wanders in random cardinal directions and chases the player
//! once they come within its detection range. Sword hits flash it, knock it
//! back a few pixels and eventually kill it. The AI lives in
//! [`Enemy::steer`]; the ECS wiring is in [`crate::systems::enemy`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::player::DamageOutcome;
use crate::components::shape::EnemyLook;

/// Chasing is faster than wandering by this factor.
pub const CHASE_FACTOR: f32 = 1.3;
pub const HIT_FLASH: f32 = 0.1;
pub const HIT_FLASH_ALPHA: f32 = 0.5;
/// Maximum knockback displacement on each axis.
pub const KNOCKBACK: f32 = 15.0;
pub const KNOCKBACK_TIME: f32 = 0.1;
pub const DEATH_DURATION: f32 = 0.3;
pub const DEATH_SCALE: f32 = 1.5;

const WANDER_CHOICES: [Vector2; 5] = [
    Vector2 { x: 1.0, y: 0.0 },
    Vector2 { x: -1.0, y: 0.0 },
    Vector2 { x: 0.0, y: 1.0 },
    Vector2 { x: 0.0, y: -1.0 },
    Vector2 { x: 0.0, y: 0.0 },
];

/// Enemy stats as written in the level catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub look: EnemyLook,
    pub health: i32,
    pub speed: f32,
    pub damage: i32,
    pub detection_range: f32,
    pub size: f32,
    pub color: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            name: "Enemigo".into(),
            look: EnemyLook::Generic,
            health: 3,
            speed: 60.0,
            damage: 1,
            detection_range: 150.0,
            size: 28.0,
            color: 0x4444ff,
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct Enemy {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub speed: f32,
    pub damage: i32,
    pub detection_range: f32,
    pub alive: bool,
    wander_dir: Vector2,
    wander_until: f32,
    knockback: Vector2,
    knockback_left: f32,
    flash_left: f32,
    death_left: Option<f32>,
}

impl Enemy {
    pub fn from_config(config: &EnemyConfig) -> Self {
        Self {
            name: config.name.clone(),
            health: config.health,
            max_health: config.health,
            speed: config.speed,
            damage: config.damage,
            detection_range: config.detection_range,
            alive: true,
            wander_dir: Vector2::zero(),
            wander_until: 0.0,
            knockback: Vector2::zero(),
            knockback_left: 0.0,
            flash_left: 0.0,
            death_left: None,
        }
    }

    /// Velocity for this frame.
    ///
    /// `player` is the player's position, or `None` when there is no living
    /// player (the enemy then stands still). Knockback overrides the AI for
    /// its short duration.
    pub fn steer(
        &mut self,
        now: f32,
        position: Vector2,
        player: Option<Vector2>,
        rng: &mut fastrand::Rng,
    ) -> Vector2 {
        if !self.alive {
            return Vector2::zero();
        }
        if self.knockback_left > 0.0 {
            return self.knockback;
        }
        let Some(target) = player else {
            return Vector2::zero();
        };
        let to_player = target - position;
        let distance = to_player.length();
        if distance < self.detection_range {
            if distance <= f32::EPSILON {
                return Vector2::zero();
            }
            return to_player / distance * (self.speed * CHASE_FACTOR);
        }
        if now > self.wander_until {
            self.wander_dir = WANDER_CHOICES[rng.usize(..WANDER_CHOICES.len())];
            self.wander_until = now + 1.5 + rng.f32() * 2.0;
        }
        self.wander_dir * self.speed
    }

    pub fn take_damage(&mut self, amount: i32, rng: &mut fastrand::Rng) -> DamageOutcome {
        if !self.alive {
            return DamageOutcome::Ignored;
        }
        self.health -= amount;
        self.flash_left = HIT_FLASH;
        let push = Vector2::new(
            (rng.f32() - 0.5) * 2.0 * KNOCKBACK,
            (rng.f32() - 0.5) * 2.0 * KNOCKBACK,
        );
        self.knockback = push / KNOCKBACK_TIME;
        self.knockback_left = KNOCKBACK_TIME;
        if self.health <= 0 {
            self.alive = false;
            self.knockback_left = 0.0;
            self.death_left = Some(DEATH_DURATION);
            DamageOutcome::Died
        } else {
            DamageOutcome::Hurt
        }
    }

    /// Advance the flash, knockback and death clocks. Returns true on the
    /// frame the death animation completes.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.flash_left = (self.flash_left - dt).max(0.0);
        self.knockback_left = (self.knockback_left - dt).max(0.0);
        if let Some(left) = self.death_left.as_mut() {
            *left -= dt;
            if *left <= 0.0 {
                self.death_left = None;
                return true;
            }
        }
        false
    }

    /// Render opacity: fading while dying, dimmed while flashing.
    pub fn alpha(&self) -> f32 {
        if let Some(left) = self.death_left {
            return (left / DEATH_DURATION).clamp(0.0, 1.0);
        }
        if self.flash_left > 0.0 { HIT_FLASH_ALPHA } else { 1.0 }
    }

    /// Render scale: grows while dying.
    pub fn scale(&self) -> f32 {
        match self.death_left {
            Some(left) => {
                let t = 1.0 - (left / DEATH_DURATION).clamp(0.0, 1.0);
                1.0 + (DEATH_SCALE - 1.0) * t
            }
            None => 1.0,
        }
    }

    pub fn dying(&self) -> bool {
        self.death_left.is_some()
    }
}

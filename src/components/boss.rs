//! Boss actors.
//!
//! A [`Boss`] holds the combat stats and the bits of state its phase
//! callbacks share (the captured charge target, how long to rest, the warning
//! circle entity). The behaviour itself is a [`Phase`](super::phase::Phase)
//! state machine built in [`crate::systems::boss`].

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::player::DamageOutcome;
use crate::components::shape::BossLook;

pub const INVULNERABLE_TIME: f32 = 0.25;
pub const HIT_FLASH: f32 = 0.1;
pub const HIT_FLASH_ALPHA: f32 = 0.4;
pub const DEATH_DURATION: f32 = 0.8;
pub const DEATH_SCALE: f32 = 2.0;
pub const CHARGE_FACTOR: f32 = 2.5;
/// Radius of the area attack, both warning and damage.
pub const AREA_RADIUS: f32 = 100.0;

/// Attack repertoire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BossPattern {
    #[default]
    Charge,
    Area,
}

/// Boss stats as written in the level catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossConfig {
    pub name: String,
    pub health: i32,
    pub speed: f32,
    pub damage: i32,
    pub pattern: BossPattern,
    pub color: u32,
    #[serde(rename = "type")]
    pub look: BossLook,
    pub size: f32,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            name: "Jefe".into(),
            health: 50,
            speed: 80.0,
            damage: 2,
            pattern: BossPattern::Charge,
            color: 0x9944cc,
            look: BossLook::Generic,
            size: 64.0,
        }
    }
}

impl BossConfig {
    /// The fight used when the arena is entered without an encounter.
    pub fn arena_default() -> Self {
        Self {
            health: 15,
            speed: 70.0,
            ..Default::default()
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct Boss {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub speed: f32,
    pub damage: i32,
    pub pattern: BossPattern,
    pub alive: bool,
    invulnerable_left: f32,
    flash_left: f32,
    death_elapsed: Option<f32>,
    /// Player position captured when a charge starts.
    pub charge_target: Option<Vector2>,
    /// Length of the next `resting` phase.
    pub rest_for: f32,
    /// Red circle shown during `area_warning`.
    pub warning: Option<Entity>,
}

impl Boss {
    pub fn from_config(config: &BossConfig) -> Self {
        let health = config.health.max(1);
        Self {
            name: config.name.clone(),
            health,
            max_health: health,
            speed: config.speed,
            damage: config.damage,
            pattern: config.pattern,
            alive: true,
            invulnerable_left: 0.0,
            flash_left: 0.0,
            death_elapsed: None,
            charge_target: None,
            rest_for: 1.0,
            warning: None,
        }
    }

    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if !self.alive || self.invulnerable_left > 0.0 {
            return DamageOutcome::Ignored;
        }
        self.health -= amount;
        self.invulnerable_left = INVULNERABLE_TIME;
        self.flash_left = HIT_FLASH;
        if self.health <= 0 {
            self.health = 0;
            self.alive = false;
            self.death_elapsed = Some(0.0);
            DamageOutcome::Died
        } else {
            DamageOutcome::Hurt
        }
    }

    /// Fill ratio of the health bar, never negative.
    pub fn health_fraction(&self) -> f32 {
        (self.health as f32 / self.max_health as f32).max(0.0)
    }

    pub fn tick(&mut self, dt: f32) {
        self.invulnerable_left = (self.invulnerable_left - dt).max(0.0);
        self.flash_left = (self.flash_left - dt).max(0.0);
        if let Some(t) = self.death_elapsed.as_mut() {
            *t += dt;
        }
    }

    pub fn alpha(&self) -> f32 {
        if let Some(t) = self.death_elapsed {
            return (1.0 - t / DEATH_DURATION).clamp(0.0, 1.0);
        }
        if self.flash_left > 0.0 { HIT_FLASH_ALPHA } else { 1.0 }
    }

    /// Extra render scale while the death animation plays.
    pub fn death_scale(&self) -> Option<f32> {
        self.death_elapsed.map(|t| {
            let k = (t / DEATH_DURATION).clamp(0.0, 1.0);
            1.0 + (DEATH_SCALE - 1.0) * k
        })
    }

    /// The phase to enter after idling or resting.
    ///
    /// Area bosses still charge most of the time (60%).
    pub fn next_action(&self, roll: f32) -> &'static str {
        match self.pattern {
            BossPattern::Charge => "telegraph",
            BossPattern::Area if roll > 0.4 => "telegraph",
            BossPattern::Area => "area_warning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn golem() -> Boss {
        Boss::from_config(&BossConfig {
            name: "El Golem de la Tristeza".into(),
            health: 10,
            pattern: BossPattern::Area,
            look: BossLook::Ice,
            ..Default::default()
        })
    }

    #[test]
    fn test_invulnerability_window() {
        let mut b = golem();
        assert_eq!(b.take_damage(2), DamageOutcome::Hurt);
        assert_eq!(b.take_damage(2), DamageOutcome::Ignored);
        assert_eq!(b.health, 8);
        b.tick(INVULNERABLE_TIME);
        assert_eq!(b.take_damage(2), DamageOutcome::Hurt);
        assert_eq!(b.health, 6);
    }

    #[test]
    fn test_health_fraction_and_death() {
        let mut b = golem();
        assert!((b.health_fraction() - 1.0).abs() < 1e-6);
        b.take_damage(12);
        assert!(!b.alive);
        assert_eq!(b.health_fraction(), 0.0);
        b.tick(DEATH_DURATION / 2.0);
        assert!((b.alpha() - 0.5).abs() < 1e-4);
        assert!((b.death_scale().unwrap_or(0.0) - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_next_action_by_pattern() {
        let mut b = golem();
        assert_eq!(b.next_action(0.9), "telegraph");
        assert_eq!(b.next_action(0.2), "area_warning");
        b.pattern = BossPattern::Charge;
        assert_eq!(b.next_action(0.2), "telegraph");
    }

    #[test]
    fn test_config_parses_with_defaults() {
        let cfg: BossConfig =
            serde_json::from_str(r#"{"name":"X","pattern":"area","type":"slime"}"#).unwrap();
        assert_eq!(cfg.pattern, BossPattern::Area);
        assert_eq!(cfg.look, BossLook::Slime);
        assert_eq!(cfg.health, 50);
        assert_eq!(BossConfig::arena_default().health, 15);
    }
}

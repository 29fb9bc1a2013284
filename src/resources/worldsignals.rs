//! Global signal storage resource, used as the game registry.
//!
//! [`WorldSignals`] is the only state that survives a scene change. Scenes
//! read and write the `"max_health"` integer through the helpers below:
//! the title screen resets it, each boss victory raises it and the player
//! reads it when spawning.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::player::DEFAULT_MAX_HEALTH;

/// Registry key of the player's maximum health.
pub const MAX_HEALTH: &str = "max_health";

#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    /// Integer values addressed by string keys. Survive scene changes.
    pub integers: FxHashMap<String, i32>,
}

impl WorldSignals {
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }

    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }

    /// The player's maximum health, 6 when never set.
    pub fn max_health(&self) -> i32 {
        self.get_integer(MAX_HEALTH).unwrap_or(DEFAULT_MAX_HEALTH)
    }

    pub fn set_max_health(&mut self, value: i32) {
        self.set_integer(MAX_HEALTH, value);
    }

    /// Raise the maximum health, returning the new value.
    pub fn grow_max_health(&mut self, amount: i32) -> i32 {
        let value = self.max_health() + amount;
        self.set_max_health(value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_health_defaults_to_six() {
        let signals = WorldSignals::default();
        assert_eq!(signals.max_health(), 6);
    }

    #[test]
    fn test_boss_victories_accumulate() {
        let mut signals = WorldSignals::default();
        signals.set_max_health(6);
        assert_eq!(signals.grow_max_health(2), 8);
        assert_eq!(signals.grow_max_health(2), 10);
    }
}

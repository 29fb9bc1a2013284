//! Kinematic body component.
//!
//! [`RigidBody`] stores the velocity the movement system integrates each
//! frame. There are no forces or friction: every actor in the game sets its
//! velocity directly (arcade physics without gravity).
//!
//! The `frozen` flag stops integration while keeping the stored velocity,
//! which is how dying actors and the meeting cutscene hold still.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in pixels per second.
    pub velocity: Vector2,
    /// When true, the movement system skips this entity.
    pub frozen: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    pub fn new() -> Self {
        Self {
            velocity: Vector2::zero(),
            frozen: false,
        }
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Zero the velocity.
    pub fn stop(&mut self) {
        self.velocity = Vector2::zero();
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    pub fn is_moving(&self) -> bool {
        self.velocity.x != 0.0 || self.velocity.y != 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_still() {
        let rb = RigidBody::new();
        assert!(!rb.is_moving());
        assert!(!rb.frozen);
    }

    #[test]
    fn test_stop_clears_velocity() {
        let mut rb = RigidBody::new();
        rb.set_velocity(Vector2::new(3.0, -2.0));
        assert!(rb.is_moving());
        rb.stop();
        assert!(!rb.is_moving());
    }

    #[test]
    fn test_freeze_keeps_velocity() {
        let mut rb = RigidBody::new();
        rb.set_velocity(Vector2::new(1.0, 0.0));
        rb.freeze();
        assert!(rb.frozen);
        assert_eq!(rb.velocity.x, 1.0);
        rb.unfreeze();
        assert!(!rb.frozen);
    }
}

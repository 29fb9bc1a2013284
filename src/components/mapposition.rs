//! World-space position component.
//!
//! [`MapPosition`] is the pivot of an entity on the 800×600 playfield. Shapes
//! are drawn centered on it, sprites use it as their origin and colliders are
//! offset from it.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Vector2) -> f32 {
        (other - self.pos).length()
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }
}

impl Default for MapPosition {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

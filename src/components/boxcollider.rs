//! Axis-aligned box colliders.
//!
//! - [`BoxCollider`] – AABB relative to an entity's [`MapPosition`](super::mapposition::MapPosition)
//! - [`Solid`] – marks a collider as a static obstacle (trees, rocks)
//! - [`Bounded`] – keeps a moving collider inside a rectangle (world or arena bounds)

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Collider of the given size whose top-left corner sits on the entity position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Collider of the given size centered on the entity position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::new(-width / 2.0, -height / 2.0),
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    pub fn rect(&self, position: Vector2) -> Rectangle {
        let (min, max) = self.aabb(position);
        Rectangle::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// AABB vs AABB overlap test against another collider at a different entity position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vector2, point: Vector2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Smallest translation that moves `self` out of `other`, along one axis.
    ///
    /// Returns `None` when the boxes do not overlap.
    pub fn separation(&self, position: Vector2, other: &Self, other_position: Vector2) -> Option<Vector2> {
        if !self.overlaps(position, other, other_position) {
            return None;
        }
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);

        let push_left = max_a.x - min_b.x;
        let push_right = max_b.x - min_a.x;
        let push_up = max_a.y - min_b.y;
        let push_down = max_b.y - min_a.y;

        let dx = if push_left < push_right { -push_left } else { push_right };
        let dy = if push_up < push_down { -push_up } else { push_down };

        if dx.abs() < dy.abs() {
            Some(Vector2::new(dx, 0.0))
        } else {
            Some(Vector2::new(0.0, dy))
        }
    }
}

/// Static obstacle marker. Moving colliders are pushed out of solids.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Solid;

/// Confines an entity's collider to a rectangle.
#[derive(Component, Clone, Copy, Debug)]
pub struct Bounded {
    pub area: Rectangle,
}

impl Bounded {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            area: Rectangle::new(x, y, width, height),
        }
    }

    /// Position correction that brings `collider` at `position` back inside the area.
    pub fn correction(&self, collider: &BoxCollider, position: Vector2) -> Vector2 {
        let (min, max) = collider.aabb(position);
        let mut fix = Vector2::zero();
        if min.x < self.area.x {
            fix.x = self.area.x - min.x;
        } else if max.x > self.area.x + self.area.width {
            fix.x = self.area.x + self.area.width - max.x;
        }
        if min.y < self.area.y {
            fix.y = self.area.y - min.y;
        } else if max.y > self.area.y + self.area.height {
            fix.y = self.area.y + self.area.height - max.y;
        }
        fix
    }
}

use bevy_ecs::prelude::Component;

/// Rotation in degrees, clockwise, around the entity pivot.
#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }
}

use bevy_ecs::prelude::Component;

/// Time-to-live: the entity is despawned once `remaining` reaches zero.
///
/// Used for sword slashes, particles and one-shot effects.
#[derive(Component, Clone, Copy, Debug)]
pub struct Ttl {
    pub remaining: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }
}

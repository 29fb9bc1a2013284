use bevy_ecs::prelude::Resource;

/// Shared random source. Seed it for reproducible tests.
#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub fastrand::Rng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        GameRng(fastrand::Rng::with_seed(seed))
    }

    /// Uniform value in `[min, max)`.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.0.f32() * (max - min)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        GameRng(fastrand::Rng::new())
    }
}

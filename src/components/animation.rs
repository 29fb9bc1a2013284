use bevy_ecs::prelude::Component;

/// Playback state of a sprite-sheet animation.
///
/// `animation_key` points into
/// [`AnimationStore`](crate::resources::animationstore::AnimationStore).
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
    /// Set when a non-looping animation reaches its last frame.
    pub finished: bool,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            finished: false,
        }
    }

    /// Switch to `key`, restarting playback. Does nothing when `key` is
    /// already playing.
    pub fn play(&mut self, key: &str) {
        if self.animation_key == key {
            return;
        }
        self.animation_key = key.to_string();
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.finished = false;
    }
}

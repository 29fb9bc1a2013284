//! Animation resource registry.
//!
//! Stores sprite-sheet animation definitions keyed by name
//! (`"dani-walk-left"`, `"jhulian-idle-down"`, ...). Definitions are plain
//! data, so the store is populated at setup even when the sheets themselves
//! fail to load; the renderer then falls back to placeholder shapes.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

/// A contiguous frame range on a sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: String,
    /// First frame (inclusive).
    pub first: usize,
    /// Last frame (inclusive).
    pub last: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    pub fn frame_count(&self) -> usize {
        self.last.saturating_sub(self.first) + 1
    }
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, anim: AnimationResource) {
        self.animations.insert(key.into(), anim);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }

    /// The walk / idle / slash / hurt sets for one of the two leads.
    ///
    /// Sheets are 13 columns wide with one row per facing
    /// (up, left, down, right).
    pub fn add_character(&mut self, who: &str) {
        let rows = [("up", 0usize), ("left", 13), ("down", 26), ("right", 39)];
        for (facing, row) in rows {
            self.insert(
                format!("{who}-walk-{facing}"),
                AnimationResource {
                    tex_key: format!("{who}_walk"),
                    first: row + 1,
                    last: row + 8,
                    fps: 10.0,
                    looped: true,
                },
            );
            self.insert(
                format!("{who}-idle-{facing}"),
                AnimationResource {
                    tex_key: format!("{who}_idle"),
                    first: row,
                    last: row + 1,
                    fps: 2.0,
                    looped: true,
                },
            );
            self.insert(
                format!("{who}-attack-{facing}"),
                AnimationResource {
                    tex_key: format!("{who}_slash"),
                    first: row,
                    last: row + 5,
                    fps: 15.0,
                    looped: false,
                },
            );
        }
        self.insert(
            format!("{who}-hurt"),
            AnimationResource {
                tex_key: format!("{who}_hurt"),
                first: 0,
                last: 5,
                fps: 10.0,
                looped: false,
            },
        );
    }
}

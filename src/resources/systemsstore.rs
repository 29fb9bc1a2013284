//! One-shot systems addressable by name.
//!
//! Scene entry points (`"enter_title"`, `"enter_field"`, ...) and lifecycle
//! hooks (`"setup"`, `"enter_play"`) are registered once in
//! [`crate::game`] and later run with `commands.run_system(id)` by the
//! observers that handle state and scene changes.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<SystemId> {
        self.map.get(name.as_ref()).copied()
    }
}

//! Loaded fonts keyed by name.
//!
//! The game uses a single pixel font under the key `"main"`. When it cannot
//! be loaded the store stays empty and text falls back to raylib's built-in
//! font.
//!
//! Non-send resource: raylib fonts must stay on the main thread. Insert with
//! `insert_non_send_resource` and read through `NonSend<FontStore>`.

use raylib::prelude::Font;
use rustc_hash::FxHashMap;

pub const MAIN_FONT: &str = "main";

#[derive(Default)]
pub struct FontStore {
    fonts: FxHashMap<String, Font>,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: impl Into<String>, font: Font) {
        self.fonts.insert(id.into(), font);
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&Font> {
        self.fonts.get(id.as_ref())
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

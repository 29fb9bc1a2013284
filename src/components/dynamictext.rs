use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

/// Text drawn at an entity's [`MapPosition`](super::mapposition::MapPosition).
///
/// `origin` works like a normalized pivot: (0.5, 0.5) centers the text block on
/// the position, (0, 0) puts its top-left corner there. Newlines start new
/// lines, each one aligned by the same horizontal origin.
#[derive(Component, Clone, Debug)]
pub struct DynamicText {
    pub content: String,
    pub font: String,
    pub font_size: f32,
    pub color: Color,
    pub origin: Vector2,
    /// Optional drop shadow: (offset, color).
    pub shadow: Option<(Vector2, Color)>,
}

impl DynamicText {
    pub fn new(content: impl Into<String>, font: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            content: content.into(),
            font: font.into(),
            font_size,
            color,
            origin: Vector2::new(0.5, 0.5),
            shadow: None,
        }
    }

    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = Vector2::new(x, y);
        self
    }

    pub fn with_shadow(mut self, offset: Vector2, color: Color) -> Self {
        self.shadow = Some((offset, color));
        self
    }

    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

use bevy_ecs::prelude::Component;

/// Sprite-sheet frame drawn centered on the entity position.
///
/// `frame` indexes a grid of `frame_width`×`frame_height` cells laid out row
/// by row; `None` frame sizes mean the whole texture is one frame. The sprite
/// is stretched to `display_width`×`display_height` before scaling.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub frame: usize,
    pub frame_width: Option<f32>,
    pub frame_height: Option<f32>,
    pub display_width: f32,
    pub display_height: f32,
}

impl Sprite {
    /// A sheet of square cells, displayed at cell size.
    pub fn sheet(tex_key: impl Into<String>, cell: f32, frame: usize) -> Self {
        Self {
            tex_key: tex_key.into(),
            frame,
            frame_width: Some(cell),
            frame_height: Some(cell),
            display_width: cell,
            display_height: cell,
        }
    }

    /// A single-image texture displayed at the given size.
    pub fn image(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            frame: 0,
            frame_width: None,
            frame_height: None,
            display_width: width,
            display_height: height,
        }
    }

    /// Source rectangle `(x, y, w, h)` inside a texture of the given size.
    pub fn source_rect(&self, tex_width: f32, tex_height: f32) -> (f32, f32, f32, f32) {
        let fw = self.frame_width.unwrap_or(tex_width);
        let fh = self.frame_height.unwrap_or(tex_height);
        let columns = ((tex_width / fw).floor() as usize).max(1);
        let col = self.frame % columns;
        let row = self.frame / columns;
        (col as f32 * fw, row as f32 * fh, fw, fh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_rect_walks_rows() {
        // 832 px wide sheets hold 13 columns of 64 px
        let s = Sprite::sheet("dani_walk", 64.0, 27);
        assert_eq!(s.source_rect(832.0, 256.0), (64.0, 128.0, 64.0, 64.0));
        let s = Sprite::sheet("dani_walk", 64.0, 12);
        assert_eq!(s.source_rect(832.0, 256.0), (768.0, 0.0, 64.0, 64.0));
    }

    #[test]
    fn test_single_image_uses_whole_texture() {
        let s = Sprite::image("enemy_bat", 42.0, 42.0);
        assert_eq!(s.source_rect(32.0, 32.0), (0.0, 0.0, 32.0, 32.0));
    }
}

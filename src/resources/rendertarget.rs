//! Fixed-resolution render target.
//!
//! Everything is drawn into an 800×600 texture which the render system then
//! scales into the window with
//! [`WindowSize::calculate_letterbox`](super::windowsize::WindowSize::calculate_letterbox).
//!
//! This is a NonSend resource: the texture lives on the GPU and must only be
//! touched from the main thread.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub game_width: u32,
    pub game_height: u32,
}

impl RenderTarget {
    pub fn new(rl: &mut RaylibHandle, th: &RaylibThread, width: u32, height: u32) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;
        let target = Self {
            texture,
            game_width: width,
            game_height: height,
        };
        target.apply_filter();
        Ok(target)
    }

    /// Replace the texture with one of a new size.
    pub fn recreate(&mut self, rl: &mut RaylibHandle, th: &RaylibThread, width: u32, height: u32) -> Result<(), String> {
        *self = Self::new(rl, th, width, height)
            .map_err(|e| format!("Failed to recreate render target: {}", e))?;
        Ok(())
    }

    // Shapes and text scale better with bilinear filtering than nearest.
    fn apply_filter(&self) {
        unsafe {
            ffi::SetTextureFilter(
                self.texture.texture,
                TextureFilter::TEXTURE_FILTER_BILINEAR as i32,
            );
        }
    }

    /// Source rectangle with a negative height; render textures are stored
    /// upside down.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.game_width as f32,
            height: -(self.game_height as f32),
        }
    }
}

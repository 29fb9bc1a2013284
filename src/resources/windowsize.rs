//! Window size resource.
//!
//! The OS window can have any size; the game always renders into an 800×600
//! [`RenderTarget`](super::rendertarget::RenderTarget) that is scaled to fit
//! and centred (letterbox or pillarbox). [`WindowSize`] does the maths in
//! both directions: where to draw the view, and where a mouse or touch point
//! lands inside it.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl WindowSize {
    /// Destination rectangle of the view inside the window, keeping the
    /// view's aspect ratio.
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        let window_w = self.w.max(1) as f32;
        let window_h = self.h.max(1) as f32;

        let scale = (window_w / game_w).min(window_h / game_h);
        let width = game_w * scale;
        let height = game_h * scale;
        Rectangle {
            x: (window_w - width) / 2.0,
            y: (window_h - height) / 2.0,
            width,
            height,
        }
    }

    /// Map a window-space point into view space, clamped to the view.
    pub fn window_to_game_pos(&self, window_pos: Vector2, game_width: u32, game_height: u32) -> Vector2 {
        let letterbox = self.calculate_letterbox(game_width, game_height);
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        Vector2 {
            x: ((window_pos.x - letterbox.x) * game_w / letterbox.width).clamp(0.0, game_w),
            y: ((window_pos.y - letterbox.y) * game_h / letterbox.height).clamp(0.0, game_h),
        }
    }
}

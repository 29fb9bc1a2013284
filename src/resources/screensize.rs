use bevy_ecs::prelude::Resource;

/// Size of the game view (the render target), not of the window.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}

impl ScreenSize {
    pub fn width(&self) -> f32 {
        self.w as f32
    }

    pub fn height(&self) -> f32 {
        self.h as f32
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        ScreenSize { w: 800, h: 600 }
    }
}

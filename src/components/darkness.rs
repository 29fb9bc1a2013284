//! Darkness overlay with a vision hole around the player.
//!
//! The cave level spawns one entity carrying [`Darkness`]. The renderer asks
//! [`Darkness::layers`] for the geometry every frame and draws it on top of
//! the world, centred on the player.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};
use smallvec::SmallVec;

#[derive(Component, Clone, Copy, Debug)]
pub struct Darkness {
    /// Opacity of the area outside the vision square.
    pub alpha: f32,
    /// Half side of the clear square and outer radius of the rings.
    pub radius: f32,
}

impl Default for Darkness {
    fn default() -> Self {
        Self {
            alpha: 0.75,
            radius: 120.0,
        }
    }
}

/// Geometry for one frame of the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DarknessLayers {
    /// Dark bands above, below, left and right of the clear square.
    pub bands: [Rectangle; 4],
    /// Filled circles `(radius, alpha)` from the outside in.
    pub rings: SmallVec<[(f32, f32); 8]>,
}

const RING_STEP: f32 = 8.0;

impl Darkness {
    pub fn layers(&self, center: Vector2, view_width: f32, view_height: f32) -> DarknessLayers {
        let r = self.radius;
        let (px, py) = (center.x, center.y);
        let bands = [
            Rectangle::new(0.0, 0.0, view_width, (py - r).max(0.0)),
            Rectangle::new(0.0, py + r, view_width, (view_height - py - r).max(0.0)),
            Rectangle::new(0.0, py - r, (px - r).max(0.0), r * 2.0),
            Rectangle::new(px + r, py - r, (view_width - px - r).max(0.0), r * 2.0),
        ];

        let mut rings = SmallVec::new();
        let inner = r * 0.6;
        let mut ring = r;
        while ring > inner {
            rings.push((ring, 0.3 * ((r - ring) / (r * 0.4))));
            ring -= RING_STEP;
        }
        DarknessLayers { bands, rings }
    }
}

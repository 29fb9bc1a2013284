//! Procedural placeholder graphics.
//!
//! Every actor and decoration carries a [`Shape`] so the game is fully
//! playable without any texture on disk. When a [`Sprite`](super::sprite::Sprite)
//! is also present and its texture is loaded, the renderer prefers the sprite.
//!
//! Geometry is expressed relative to the entity pivot; the render system
//! applies [`Scale`](super::scale::Scale), [`Rotation`](super::rotation::Rotation)
//! and [`Tint`](super::tint::Tint) on top.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

use crate::components::tint::rgb;

/// Visual kind of a boss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BossLook {
    Slime,
    Ice,
    Fire,
    #[default]
    Generic,
}

/// Visual kind of an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyLook {
    Bat,
    #[default]
    Generic,
}

/// Visual kind of an NPC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NpcLook {
    Echo,
    #[default]
    Generic,
}

#[derive(Component, Clone, Debug)]
pub enum Shape {
    Circle { radius: f32, color: Color },
    Ring { radius: f32, thickness: f32, color: Color },
    Rect { width: f32, height: f32, color: Color },
    RoundedRect { width: f32, height: f32, color: Color },
    /// Stroked rectangle whose top-left corner sits on the pivot.
    Outline { width: f32, height: f32, thickness: f32, color: Color },
    /// Segment from the pivot to `pivot + to`.
    Line { to: Vector2, thickness: f32, color: Color },
    Heart { size: f32, filled: bool },
    Tree,
    Rock,
    Flower { petal: Color },
    /// Dani without her sprite sheet.
    Hero,
    /// Jhulian without his sprite sheet.
    Jhulian,
    Enemy { look: EnemyLook, size: f32, color: Color },
    Boss { look: BossLook, size: f32, color: Color },
    Npc { look: NpcLook },
    /// Downward pointing triangle marking an open exit.
    Arrow { size: f32, color: Color },
}

pub const HEART_FILLED: u32 = 0xff2255;
pub const HEART_EMPTY: u32 = 0x333355;

impl Shape {
    pub fn circle(radius: f32, color: Color) -> Self {
        Shape::Circle { radius, color }
    }

    pub fn rect(width: f32, height: f32, color: Color) -> Self {
        Shape::Rect {
            width,
            height,
            color,
        }
    }

    /// Approximate half extents, used for debug drawing and culling.
    pub fn half_extents(&self) -> Vector2 {
        match self {
            Shape::Circle { radius, .. } | Shape::Ring { radius, .. } => {
                Vector2::new(*radius, *radius)
            }
            Shape::Rect { width, height, .. } | Shape::RoundedRect { width, height, .. } => {
                Vector2::new(width / 2.0, height / 2.0)
            }
            Shape::Outline { width, height, .. } => Vector2::new(*width, *height),
            Shape::Line { to, .. } => Vector2::new(to.x.abs(), to.y.abs()),
            Shape::Heart { size, .. } => Vector2::new(size * 0.7, size * 0.6),
            Shape::Tree => Vector2::new(16.0, 22.0),
            Shape::Rock => Vector2::new(12.0, 12.0),
            Shape::Flower { .. } => Vector2::new(9.0, 9.0),
            Shape::Hero | Shape::Jhulian => Vector2::new(16.0, 16.0),
            Shape::Enemy { size, .. } => Vector2::new(size / 2.0, size / 2.0),
            Shape::Boss { size, look, .. } => match look {
                BossLook::Ice => Vector2::new(size / 2.0 + 5.0, size / 2.0 + 10.0),
                BossLook::Fire => Vector2::new(size / 1.5, size / 1.5),
                _ => Vector2::new(size / 2.0, size / 2.0),
            },
            Shape::Npc { .. } => Vector2::new(14.0, 14.0),
            Shape::Arrow { size, .. } => Vector2::new(*size / 2.0, *size / 2.0),
        }
    }
}

/// Geometry of a heart icon: two lobes and a point.
///
/// Returns `(left_lobe, right_lobe, lobe_radius, [triangle])`, with the
/// triangle wound counter-clockwise for raylib.
pub fn heart_geometry(center: Vector2, size: f32) -> (Vector2, Vector2, f32, [Vector2; 3]) {
    let left = Vector2::new(center.x - size * 0.3, center.y - size * 0.2);
    let right = Vector2::new(center.x + size * 0.3, center.y - size * 0.2);
    let tri = [
        Vector2::new(center.x - size * 0.65, center.y),
        Vector2::new(center.x, center.y + size * 0.6),
        Vector2::new(center.x + size * 0.65, center.y),
    ];
    (left, right, size * 0.4, tri)
}

/// Heart color for a filled or empty slot.
pub fn heart_color(filled: bool) -> Color {
    if filled { rgb(HEART_FILLED) } else { rgb(HEART_EMPTY) }
}

/// Petal centers of a five-petal flower.
pub fn flower_petals(center: Vector2, rotation_deg: f32) -> [Vector2; 5] {
    let mut out = [Vector2::zero(); 5];
    for (i, p) in out.iter_mut().enumerate() {
        let angle = (i as f32 / 5.0) * std::f32::consts::TAU + rotation_deg.to_radians();
        *p = Vector2::new(center.x + angle.cos() * 5.0, center.y + angle.sin() * 5.0);
    }
    out
}

//! Color tint component for shapes, sprites and text.
//!
//! The [`Tint`] component modulates an entity's colors during rendering. Most
//! gameplay code only touches its alpha channel (hit flashes, invincibility
//! blinking, fades), which [`TweenAlpha`](super::tween::TweenAlpha) animates.
//!
//! The free functions [`rgb`] and [`rgba`] turn the `0xRRGGBB` literals used
//! throughout the level data into raylib colors.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    /// White tint with the given opacity (0.0 – 1.0).
    pub fn alpha(alpha: f32) -> Self {
        Self::new(255, 255, 255, alpha_byte(alpha))
    }

    pub fn opacity(&self) -> f32 {
        self.color.a as f32 / 255.0
    }

    pub fn set_opacity(&mut self, alpha: f32) {
        self.color.a = alpha_byte(alpha);
    }

    pub fn multiply(&self, other: Color) -> Color {
        Color::new(
            ((self.color.r as u16 * other.r as u16) / 255) as u8,
            ((self.color.g as u16 * other.g as u16) / 255) as u8,
            ((self.color.b as u16 * other.b as u16) / 255) as u8,
            ((self.color.a as u16 * other.a as u16) / 255) as u8,
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

fn alpha_byte(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Opaque color from a `0xRRGGBB` literal.
pub fn rgb(hex: u32) -> Color {
    rgba(hex, 1.0)
}

/// Color from a `0xRRGGBB` literal with an opacity in 0.0 – 1.0.
pub fn rgba(hex: u32, alpha: f32) -> Color {
    Color::new(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
        alpha_byte(alpha),
    )
}

/// `color` with its alpha replaced.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, alpha_byte(alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        let t = Tint::default();
        assert_eq!(t.color.r, 255);
        assert_eq!(t.color.a, 255);
    }

    #[test]
    fn test_multiply_with_white_is_identity() {
        let t = Tint::new(100, 150, 200, 255);
        let result = t.multiply(Color::WHITE);
        assert_eq!(result.r, 100);
        assert_eq!(result.g, 150);
        assert_eq!(result.b, 200);
        assert_eq!(result.a, 255);
    }

    #[test]
    fn test_multiply_halves_alpha() {
        let t = Tint::alpha(0.5);
        let result = t.multiply(Color::new(200, 100, 50, 255));
        assert_eq!(result.r, 200);
        assert_eq!(result.a, 128);
    }

    #[test]
    fn test_opacity_roundtrip_clamps() {
        let mut t = Tint::default();
        t.set_opacity(0.3);
        assert!((t.opacity() - 0.3).abs() < 0.01);
        t.set_opacity(2.0);
        assert_eq!(t.color.a, 255);
        t.set_opacity(-1.0);
        assert_eq!(t.color.a, 0);
    }

    #[test]
    fn test_rgb_hex_literals() {
        let c = rgb(0xff2255);
        assert_eq!((c.r, c.g, c.b, c.a), (0xff, 0x22, 0x55, 255));
        let c = rgba(0x000000, 0.75);
        assert_eq!(c.a, 191);
    }
}

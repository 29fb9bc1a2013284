//! Render-only floating offset.
//!
//! NPCs, Jhulian, the title previews and the exit arrow drift up and down.
//! The offset is applied when drawing, so physics and collisions keep using
//! the real [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct Bob {
    /// Peak displacement in pixels (negative floats upwards).
    pub amplitude: f32,
    /// Seconds for one half cycle (rest to peak).
    pub half_period: f32,
    /// Local clock.
    pub time: f32,
}

impl Bob {
    pub fn new(amplitude: f32, half_period: f32) -> Self {
        Self {
            amplitude,
            half_period,
            time: 0.0,
        }
    }

    /// Vertical offset following a sine ease between 0 and `amplitude`.
    pub fn offset(&self) -> Vector2 {
        if self.half_period <= 0.0 {
            return Vector2::zero();
        }
        let phase = std::f32::consts::PI * self.time / self.half_period;
        Vector2::new(0.0, self.amplitude * (0.5 - 0.5 * phase.cos()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_cycle() {
        let mut b = Bob::new(-5.0, 1.2);
        assert!(b.offset().y.abs() < 1e-6);
        b.time = 1.2;
        assert!((b.offset().y + 5.0).abs() < 1e-5);
        b.time = 2.4;
        assert!(b.offset().y.abs() < 1e-5);
    }

    #[test]
    fn test_zero_period_is_still() {
        let b = Bob::new(10.0, 0.0);
        assert_eq!(b.offset().y, 0.0);
    }
}

//! On-screen touch controls.
//!
//! [`TouchControls`] holds the virtual D-pad and the two action buttons laid
//! out on the 800×600 view. Every frame [`TouchControls::update`] tests the
//! active pointers against each button's square hit zone (side `2.5 × r`).
//! The attack and interact buttons latch: their "just pressed" flags are only
//! set on the frame the button goes from released to held.

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Resource;
use raylib::prelude::{Color, Vector2};
use serde::{Deserialize, Serialize};

use crate::components::player::DirectionInput;
use crate::components::tint::rgb;

/// How the game decides whether to show the controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TouchMode {
    /// Enable once a touch point is seen.
    #[default]
    Auto,
    Always,
    Never,
}

impl TouchMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(TouchMode::Auto),
            "always" | "on" | "true" => Some(TouchMode::Always),
            "never" | "off" | "false" => Some(TouchMode::Never),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TouchMode::Auto => "auto",
            TouchMode::Always => "always",
            TouchMode::Never => "never",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    Left,
    Right,
    Up,
    Down,
    Attack,
    Interact,
}

#[derive(Clone, Copy, Debug)]
pub struct TouchButton {
    pub action: TouchAction,
    pub center: Vector2,
    pub radius: f32,
    pub color: Color,
    pub label: &'static str,
    pub pressed: bool,
}

impl TouchButton {
    fn new(action: TouchAction, x: f32, y: f32, radius: f32, color: Color, label: &'static str) -> Self {
        Self {
            action,
            center: Vector2::new(x, y),
            radius,
            color,
            label,
            pressed: false,
        }
    }

    pub fn hit(&self, point: Vector2) -> bool {
        let half = self.radius * 1.25;
        (point.x - self.center.x).abs() <= half && (point.y - self.center.y).abs() <= half
    }
}

#[derive(Resource, Debug, Clone)]
pub struct TouchControls {
    pub mode: TouchMode,
    pub enabled: bool,
    pub buttons: ArrayVec<TouchButton, 6>,
    pub attack_just_pressed: bool,
    pub interact_just_pressed: bool,
}

impl Default for TouchControls {
    fn default() -> Self {
        Self::new(TouchMode::Auto)
    }
}

impl TouchControls {
    pub fn new(mode: TouchMode) -> Self {
        const DPAD: f32 = 35.0;
        let pad = Color::new(255, 255, 255, 255);
        let mut buttons = ArrayVec::new();
        buttons.push(TouchButton::new(TouchAction::Left, 30.0, 520.0, DPAD, pad, "<"));
        buttons.push(TouchButton::new(TouchAction::Right, 130.0, 520.0, DPAD, pad, ">"));
        buttons.push(TouchButton::new(TouchAction::Up, 80.0, 470.0, DPAD, pad, "^"));
        buttons.push(TouchButton::new(TouchAction::Down, 80.0, 570.0, DPAD, pad, "v"));
        buttons.push(TouchButton::new(
            TouchAction::Attack,
            720.0,
            520.0,
            45.0,
            rgb(0xff4444),
            "ATK",
        ));
        buttons.push(TouchButton::new(
            TouchAction::Interact,
            710.0,
            430.0,
            35.0,
            rgb(0x44ff44),
            "E",
        ));
        Self {
            mode,
            enabled: mode == TouchMode::Always,
            buttons,
            attack_just_pressed: false,
            interact_just_pressed: false,
        }
    }

    /// Turn the controls on when a touch screen shows up in `auto` mode.
    pub fn notice_touch(&mut self) {
        if self.mode == TouchMode::Auto && !self.enabled {
            log::info!("Touch input detected, enabling on-screen controls");
            self.enabled = true;
        }
    }

    pub fn update(&mut self, pointers: &[Vector2]) {
        self.attack_just_pressed = false;
        self.interact_just_pressed = false;
        if !self.enabled {
            for b in self.buttons.iter_mut() {
                b.pressed = false;
            }
            return;
        }
        for b in self.buttons.iter_mut() {
            let now = pointers.iter().any(|p| b.hit(*p));
            let rising = now && !b.pressed;
            b.pressed = now;
            match b.action {
                TouchAction::Attack if rising => self.attack_just_pressed = true,
                TouchAction::Interact if rising => self.interact_just_pressed = true,
                _ => {}
            }
        }
    }

    pub fn is_pressed(&self, action: TouchAction) -> bool {
        self.buttons
            .iter()
            .any(|b| b.action == action && b.pressed)
    }

    pub fn direction(&self) -> DirectionInput {
        DirectionInput {
            left: self.is_pressed(TouchAction::Left),
            right: self.is_pressed(TouchAction::Right),
            up: self.is_pressed(TouchAction::Up),
            down: self.is_pressed(TouchAction::Down),
        }
    }

    /// Whether any pointer is over a button (taps there are not dialogue taps).
    pub fn captures(&self, point: Vector2) -> bool {
        self.enabled && self.buttons.iter().any(|b| b.hit(point))
    }
}

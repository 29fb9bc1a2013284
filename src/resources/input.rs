//! Per-frame input resource.
//!
//! Captures the keys the game cares about plus the active pointers (mouse
//! button or touch points, already mapped into the 800×600 view) and exposes
//! them to systems via the [`InputState`] resource. Movement accepts both the
//! arrow keys and WASD.
use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::player::DirectionInput;

/// Most simultaneous pointers tracked per frame.
pub const MAX_POINTERS: usize = 8;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,
    /// Whether the key went up this frame.
    pub just_released: bool,
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn new(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }

    /// Derive the edges from the previous `active` value.
    pub fn set(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::new(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame input relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    // Arrow keys
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    // WASD
    pub alt_up: BoolState,
    pub alt_down: BoolState,
    pub alt_left: BoolState,
    pub alt_right: BoolState,
    /// SPACE: swing the sword, advance dialogue.
    pub attack: BoolState,
    /// E: talk to NPCs, advance dialogue.
    pub interact: BoolState,
    /// ENTER: menus and dialogue.
    pub confirm: BoolState,
    pub mode_debug: BoolState,
    pub fullscreen_toggle: BoolState,
    /// Pointer positions in view coordinates.
    pub pointers: ArrayVec<Vector2, MAX_POINTERS>,
    /// Whether a pointer went down this frame (click or tap).
    pub pointer_just_pressed: bool,
    /// Whether any of the pointers came from a touch screen.
    pub touch_seen: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            up: BoolState::new(KeyboardKey::KEY_UP),
            down: BoolState::new(KeyboardKey::KEY_DOWN),
            left: BoolState::new(KeyboardKey::KEY_LEFT),
            right: BoolState::new(KeyboardKey::KEY_RIGHT),
            alt_up: BoolState::new(KeyboardKey::KEY_W),
            alt_down: BoolState::new(KeyboardKey::KEY_S),
            alt_left: BoolState::new(KeyboardKey::KEY_A),
            alt_right: BoolState::new(KeyboardKey::KEY_D),
            attack: BoolState::new(KeyboardKey::KEY_SPACE),
            interact: BoolState::new(KeyboardKey::KEY_E),
            confirm: BoolState::new(KeyboardKey::KEY_ENTER),
            mode_debug: BoolState::new(KeyboardKey::KEY_F11),
            fullscreen_toggle: BoolState::new(KeyboardKey::KEY_F10),
            pointers: ArrayVec::new(),
            pointer_just_pressed: false,
            touch_seen: false,
        }
    }
}

impl InputState {
    /// Keyboard directions, arrows and WASD combined.
    pub fn direction(&self) -> DirectionInput {
        DirectionInput {
            left: self.left.active || self.alt_left.active,
            right: self.right.active || self.alt_right.active,
            up: self.up.active || self.alt_up.active,
            down: self.down.active || self.alt_down.active,
        }
    }

    /// Any of the inputs that move a dialogue forward.
    pub fn advance_pressed(&self) -> bool {
        self.confirm.just_pressed
            || self.attack.just_pressed
            || self.interact.just_pressed
            || self.pointer_just_pressed
    }

    /// ENTER or a tap: used by title, victory and game-over screens.
    pub fn start_pressed(&self) -> bool {
        self.confirm.just_pressed || self.pointer_just_pressed
    }

    pub fn set_pointers(&mut self, pointers: impl IntoIterator<Item = Vector2>) {
        let was_empty = self.pointers.is_empty();
        self.pointers.clear();
        for p in pointers.into_iter().take(MAX_POINTERS) {
            self.pointers.push(p);
        }
        self.pointer_just_pressed = was_empty && !self.pointers.is_empty();
    }
}

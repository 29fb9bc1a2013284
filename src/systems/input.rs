//! Input systems.
//!
//! - [`update_input_state`] reads the keyboard, mouse and touch points from
//!   Raylib each frame and writes the results into
//!   [`InputState`](crate::resources::input::InputState).
//! - [`update_touch_controls`] feeds the pointers to the on-screen pad.
//! - F11 toggles debug mode and F10 toggles fullscreen through their events.
use arrayvec::ArrayVec;
use bevy_ecs::prelude::*;
use raylib::ffi::{self, KeyboardKey, MouseButton};
use raylib::prelude::Vector2;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::input::{InputState, MAX_POINTERS};
use crate::resources::screensize::ScreenSize;
use crate::resources::touch::TouchControls;
use crate::resources::windowsize::WindowSize;

/// Update every key binding of `input` from `is_down`.
pub(crate) fn poll_keys(input: &mut InputState, is_down: impl Fn(KeyboardKey) -> bool) {
    for state in [
        &mut input.up,
        &mut input.down,
        &mut input.left,
        &mut input.right,
        &mut input.alt_up,
        &mut input.alt_down,
        &mut input.alt_left,
        &mut input.alt_right,
        &mut input.attack,
        &mut input.interact,
        &mut input.confirm,
        &mut input.mode_debug,
        &mut input.fullscreen_toggle,
    ] {
        state.set(is_down(state.key_binding));
    }
}

/// Poll Raylib for keyboard and pointer input and update the `InputState`
/// resource. Pointer positions are mapped from window to view coordinates.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    window_size: Res<WindowSize>,
    screen_size: Res<ScreenSize>,
    mut commands: Commands,
) {
    poll_keys(&mut input, |key| rl.is_key_down(key));

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.fullscreen_toggle.just_pressed {
        commands.trigger(SwitchFullScreenEvent {});
    }

    let (gw, gh) = (screen_size.w as u32, screen_size.h as u32);
    let to_game = |p: Vector2| window_size.window_to_game_pos(p, gw, gh);

    let touch_count = unsafe { ffi::GetTouchPointCount() }.clamp(0, MAX_POINTERS as i32);
    let mut pointers: ArrayVec<Vector2, MAX_POINTERS> = ArrayVec::new();
    if touch_count > 0 {
        for i in 0..touch_count {
            let p: Vector2 = unsafe { ffi::GetTouchPosition(i) }.into();
            pointers.push(to_game(p));
        }
    } else if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
        pointers.push(to_game(rl.get_mouse_position()));
    }
    input.touch_seen = touch_count > 0;
    input.set_pointers(pointers);
}

/// Drive the on-screen pad from this frame's pointers.
pub fn update_touch_controls(input: Res<InputState>, mut touch: ResMut<TouchControls>) {
    if input.touch_seen {
        touch.notice_touch();
    }
    touch.update(&input.pointers);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_keys_sets_edges() {
        let mut input = InputState::default();
        poll_keys(&mut input, |k| k == KeyboardKey::KEY_SPACE);
        assert!(input.attack.active && input.attack.just_pressed);
        assert!(!input.confirm.active);
        poll_keys(&mut input, |k| k == KeyboardKey::KEY_SPACE);
        assert!(input.attack.active && !input.attack.just_pressed);
        poll_keys(&mut input, |_| false);
        assert!(input.attack.just_released);
    }

    #[test]
    fn test_wasd_and_arrows_both_steer() {
        let mut input = InputState::default();
        poll_keys(&mut input, |k| k == KeyboardKey::KEY_A);
        assert!(input.direction().left);
        poll_keys(&mut input, |k| k == KeyboardKey::KEY_DOWN);
        let dir = input.direction();
        assert!(dir.down && !dir.left);
    }

    #[test]
    fn test_touch_pad_enables_on_first_touch() {
        let mut world = World::new();
        let mut input = InputState::default();
        input.touch_seen = true;
        input.set_pointers([Vector2::new(720.0, 520.0)]);
        world.insert_resource(input);
        world.insert_resource(TouchControls::default());
        let mut schedule = Schedule::default();
        schedule.add_systems(update_touch_controls);
        schedule.run(&mut world);
        let touch = world.resource::<TouchControls>();
        assert!(touch.enabled);
        assert!(touch.attack_just_pressed);
    }
}

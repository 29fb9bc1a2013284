//! F10 fullscreen toggle.
//!
//! [`switch_fullscreen_observer`] flips the window between fullscreen at the
//! monitor resolution and the configured window size. The [`FullScreen`]
//! marker resource and `GameConfig::fullscreen` follow the window, so
//! `apply_gameconfig_changes` does not flip it back.

use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::ffi;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchFullScreenEvent {}

fn monitor_size() -> (i32, i32) {
    // SAFETY: plain queries on the window raylib already opened.
    unsafe {
        let monitor = ffi::GetCurrentMonitor();
        (ffi::GetMonitorWidth(monitor), ffi::GetMonitorHeight(monitor))
    }
}

fn enter_fullscreen(rl: &mut raylib::RaylibHandle) {
    if rl.is_window_fullscreen() {
        return;
    }
    let (w, h) = monitor_size();
    rl.set_window_size(w, h);
    rl.toggle_fullscreen();
    if rl.is_window_fullscreen() {
        info!("Fullscreen on ({}x{})", w, h);
    } else {
        error!("Could not enter fullscreen");
    }
}

fn leave_fullscreen(rl: &mut raylib::RaylibHandle, window: (u32, u32)) {
    if !rl.is_window_fullscreen() {
        return;
    }
    rl.toggle_fullscreen();
    rl.set_window_size(window.0 as i32, window.1 as i32);
    rl.restore_window();
    if rl.is_window_fullscreen() {
        error!("Could not leave fullscreen");
    } else {
        info!("Fullscreen off ({}x{})", window.0, window.1);
    }
}

pub fn switch_fullscreen_observer(
    _trigger: On<SwitchFullScreenEvent>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
    fullscreen: Option<Res<FullScreen>>,
    mut config: ResMut<GameConfig>,
) {
    let on = fullscreen.is_none();
    if on {
        commands.insert_resource(FullScreen);
        enter_fullscreen(&mut rl);
    } else {
        commands.remove_resource::<FullScreen>();
        leave_fullscreen(&mut rl, config.window_size());
    }
    if config.fullscreen != on {
        config.fullscreen = on;
    }
}

//! Applies [`GameConfig`] to the running window.
//!
//! Runs every frame but only does work when the resource was added or
//! changed: it resizes the render target, syncs fullscreen with the window,
//! and sets vsync and the frame cap.

use crate::events::switchfullscreen::SwitchFullScreenEvent;
use crate::resources::fullscreen::FullScreen;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use raylib::ffi;

pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut render_target: NonSendMut<RenderTarget>,
    mut screen_size: ResMut<ScreenSize>,
    fullscreen: Option<Res<FullScreen>>,
    mut commands: Commands,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !(config.is_changed() || config.is_added()) {
        return;
    }

    if render_target.game_width != config.render_width
        || render_target.game_height != config.render_height
    {
        info!(
            "Resizing render target: {}x{} -> {}x{}",
            render_target.game_width,
            render_target.game_height,
            config.render_width,
            config.render_height
        );
        match render_target.recreate(&mut rl, &th, config.render_width, config.render_height) {
            Ok(()) => {
                screen_size.w = config.render_width as i32;
                screen_size.h = config.render_height as i32;
            }
            Err(e) => warn!("Failed to resize render target: {}", e),
        }
    }

    let is_fullscreen = fullscreen.is_some();
    if config.fullscreen != is_fullscreen {
        debug!(
            "Fullscreen mismatch: config={}, window={}",
            config.fullscreen, is_fullscreen
        );
        commands.trigger(SwitchFullScreenEvent {});
    }

    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }
    rl.set_target_fps(config.target_fps);
    debug!(
        "GameConfig applied (vsync={}, fps={})",
        config.vsync, config.target_fps
    );
}

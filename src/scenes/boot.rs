//! Loading splash shown while the game starts.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::timer::Timer;
use crate::components::tint::{rgb, Tint};
use crate::components::tween::{LoopMode, Track, TweenAlpha};
use crate::components::zindex::ZIndex;
use crate::events::dialogue::BOOT_DONE_SIGNAL;
use crate::resources::camerafx::CameraFx;
use crate::resources::screensize::ScreenSize;

use super::text;

pub const BOOT_TIME: f32 = 2.0;

pub fn enter_boot(mut commands: Commands, mut camera: ResMut<CameraFx>, screen: Res<ScreenSize>) {
    camera.set_background(rgb(0x000000));
    // Two fades down and back, then the text settles.
    let pulse = Track::new(0.3, 1.0, 0.5).with_loop_mode(LoopMode::Yoyo);
    commands.spawn((
        MapPosition::new(screen.width() / 2.0, screen.height() / 2.0),
        text("Cargando...", 14.0, 0x7744aa),
        Tint::alpha(1.0),
        TweenAlpha::from_track(pulse.clone()).then(pulse),
        ZIndex(0),
    ));
    commands.spawn(Timer::new(BOOT_TIME, BOOT_DONE_SIGNAL));
}

//! Retry screen shown after Dani falls.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::components::mapposition::MapPosition;
use crate::components::shape::Shape;
use crate::components::tint::{rgb, Tint};
use crate::components::tween::{LoopMode, Track, TweenAlpha, TweenPosition};
use crate::components::zindex::ZIndex;
use crate::resources::camerafx::{CameraFx, FadeOut};
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::scene::SceneManager;
use crate::resources::screensize::ScreenSize;

use super::{shadowed, text};

pub const RETRY_FADE: f32 = 0.5;

pub fn enter_gameover(
    mut commands: Commands,
    mut camera: ResMut<CameraFx>,
    mut rng: ResMut<GameRng>,
    screen: Res<ScreenSize>,
) {
    let (w, h) = (screen.width(), screen.height());
    let (cx, cy) = (w / 2.0, h / 2.0);
    info!("Game over");
    camera.set_background(rgb(0x0a0008));

    commands.spawn((
        MapPosition::new(cx, cy),
        Shape::rect(w, h, rgb(0x220011)),
        Tint::alpha(0.5),
        ZIndex(0),
    ));

    for _ in 0..15 {
        let x = rng.range(0.0, w);
        let fall = Track::new(Vector2::new(x, -10.0), Vector2::new(x, h + 10.0), rng.range(3.0, 6.0))
            .with_loop_mode(LoopMode::Loop)
            .with_delay(rng.range(0.0, 2.0));
        commands.spawn((
            MapPosition::new(x, -10.0),
            Shape::circle(rng.range(1.5, 3.5), rgb(0x5533aa)),
            Tint::alpha(0.4),
            TweenPosition(fall),
            ZIndex(1),
        ));
    }

    let pulse = Track::new(0.7, 1.0, 1.2).with_loop_mode(LoopMode::PingPong);
    commands.spawn((
        MapPosition::new(cx, cy - 80.0),
        shadowed("Game Over", 28.0, 0xcc3355, 0x220011),
        Tint::alpha(0.7),
        TweenAlpha::from_track(pulse),
        ZIndex(10),
    ));

    commands.spawn((
        MapPosition::new(cx, cy - 10.0),
        text("No te rindas, Dani.\nCada caída te hace más fuerte.", 9.0, 0x8866aa),
        Tint::alpha(0.0),
        TweenAlpha::from_track(Track::new(0.0, 1.0, 1.5).with_delay(0.8)),
        ZIndex(10),
    ));

    let blink = Track::new(0.5, 1.0, 0.6).with_loop_mode(LoopMode::PingPong);
    commands.spawn((
        MapPosition::new(cx, cy + 80.0),
        text("Presiona ENTER para\nintentar de nuevo", 10.0, 0xcc88ff),
        Tint::alpha(0.0),
        TweenAlpha::from_track(Track::new(0.0, 1.0, 1.0).with_delay(2.0)).then(blink),
        ZIndex(10),
    ));
}

/// ENTER or a tap restarts whatever Dani lost: the level or the same fight.
pub fn gameover_input_system(
    input: Res<InputState>,
    scenes: Res<SceneManager>,
    mut camera: ResMut<CameraFx>,
) {
    if !input.start_pressed() || camera.is_fading_out() {
        return;
    }
    let retry = scenes.restart_request();
    info!("Retrying {:?}", retry.scene);
    camera.fade_out(FadeOut::to_black(RETRY_FADE, retry));
}

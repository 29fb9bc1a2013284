//! Ending: Dani and Jhulian together under a starfield while the closing
//! lines fade in one after another.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::{Color, Vector2};

use crate::components::animation::Animation;
use crate::components::bob::Bob;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::shape::Shape;
use crate::components::sprite::Sprite;
use crate::components::tint::{rgb, Tint};
use crate::components::tween::{Easing, LoopMode, Track, TweenAlpha, TweenPosition, TweenScale};
use crate::components::zindex::ZIndex;
use crate::resources::camerafx::{CameraFx, FadeOut};
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::scene::{SceneId, SceneRequest};
use crate::resources::screensize::ScreenSize;
use crate::resources::touch::TouchControls;

use super::text;

pub const VICTORY_FADE_IN: f32 = 2.0;
pub const RESTART_FADE: f32 = 1.0;
const LINE_FADE: f32 = 1.5;

pub fn restart_prompt(touch: bool) -> &'static str {
    if touch {
        "Toca para jugar de nuevo"
    } else {
        "Presiona ENTER para jugar de nuevo"
    }
}

fn stroked(content: &str, size: f32, color: u32, stroke: u32) -> DynamicText {
    text(content, size, color).with_shadow(Vector2::new(2.0, 2.0), rgb(stroke))
}

/// Invisible text that fades to `to` after `delay` seconds.
fn delayed(commands: &mut Commands, at: Vector2, body: DynamicText, delay: f32, to: f32) -> Entity {
    commands
        .spawn((
            MapPosition::from_vec(at),
            body,
            Tint::alpha(0.0),
            TweenAlpha::from_track(Track::new(0.0, to, LINE_FADE).with_delay(delay)),
            ZIndex(20),
        ))
        .id()
}

pub fn enter_victory(
    mut commands: Commands,
    mut camera: ResMut<CameraFx>,
    mut rng: ResMut<GameRng>,
    screen: Res<ScreenSize>,
    touch: Res<TouchControls>,
) {
    let (w, h) = (screen.width(), screen.height());
    let cx = w / 2.0;
    info!("Victory");
    camera.set_background(rgb(0x0a0a1a));
    camera.fade_in(VICTORY_FADE_IN, Color::WHITE);

    for _ in 0..80 {
        let twinkle = Track::new(0.2, 0.9, rng.range(0.8, 2.8)).with_loop_mode(LoopMode::PingPong);
        commands.spawn((
            MapPosition::new(rng.range(0.0, w), rng.range(0.0, h)),
            Shape::circle(rng.range(0.5, 2.5), rgb(0xccccee)),
            Tint::alpha(0.2),
            TweenAlpha::from_track(twinkle),
            ZIndex(0),
        ));
    }

    for _ in 0..20 {
        let x = rng.range(0.0, w);
        let from = Vector2::new(x, h + 50.0);
        let to = Vector2::new(x + rng.range(-40.0, 40.0), -50.0);
        let rise = Track::new(from, to, rng.range(5.0, 10.0))
            .with_loop_mode(LoopMode::Loop)
            .with_delay(rng.range(0.0, 4.0));
        commands.spawn((
            MapPosition::from_vec(from),
            Shape::Heart {
                size: rng.range(4.0, 10.0),
                filled: true,
            },
            Tint::alpha(rng.range(0.4, 0.8)),
            TweenPosition(rise),
            ZIndex(2),
        ));
    }

    for (who, dx) in [("dani", -40.0), ("jhulian", 40.0)] {
        let shape = if who == "dani" { Shape::Hero } else { Shape::Jhulian };
        commands.spawn((
            MapPosition::new(cx + dx, 220.0),
            Sprite::sheet(format!("{who}_walk"), 64.0, 26),
            Animation::new(format!("{who}-walk-down")),
            shape,
            Scale::uniform(3.0),
            Bob::new(-5.0, 1.5),
            Tint::default(),
            ZIndex(10),
        ));
    }

    let beat = Track::new(Vector2::new(1.0, 1.0), Vector2::new(1.2, 1.2), 0.6)
        .with_easing(Easing::SineInOut)
        .with_loop_mode(LoopMode::PingPong);
    commands.spawn((
        MapPosition::new(cx, 195.0),
        Shape::Heart {
            size: 10.0,
            filled: true,
        },
        Scale::default(),
        TweenScale(beat),
        ZIndex(11),
    ));

    delayed(
        &mut commands,
        Vector2::new(cx, 300.0),
        stroked("Juntos, cualquier carga", 12.0, 0xcc88ff, 0x220044),
        1.5,
        1.0,
    );
    delayed(
        &mut commands,
        Vector2::new(cx, 325.0),
        stroked("es más ligera.", 12.0, 0xcc88ff, 0x220044),
        2.5,
        1.0,
    );
    let love = delayed(
        &mut commands,
        Vector2::new(cx, 370.0),
        stroked("Te amo.", 14.0, 0xff6688, 0x330022),
        4.0,
        1.0,
    );
    let pulse = Track::new(Vector2::new(1.0, 1.0), Vector2::new(1.05, 1.05), 0.8)
        .with_easing(Easing::SineInOut)
        .with_loop_mode(LoopMode::PingPong)
        .with_delay(5.5);
    commands.entity(love).insert((Scale::default(), TweenScale(pulse)));
    delayed(
        &mut commands,
        Vector2::new(cx, 405.0),
        stroked("Feliz Aniversario", 11.0, 0xffcc88, 0x332200),
        5.5,
        1.0,
    );
    delayed(
        &mut commands,
        Vector2::new(cx, 490.0),
        text("Gracias por jugar", 8.0, 0x667788),
        7.0,
        0.7,
    );
    let prompt = delayed(
        &mut commands,
        Vector2::new(cx, 550.0),
        text(restart_prompt(touch.enabled), 8.0, 0x556677),
        8.0,
        0.5,
    );
    let blink = Track::new(0.3, 0.6, 0.8).with_loop_mode(LoopMode::PingPong);
    commands.entity(prompt).insert(
        TweenAlpha::from_track(Track::new(0.0, 0.5, LINE_FADE).with_delay(8.0)).then(blink),
    );
}

/// ENTER or a tap goes back to the title, once.
pub fn victory_input_system(input: Res<InputState>, mut camera: ResMut<CameraFx>) {
    if !input.start_pressed() || camera.is_fading_out() {
        return;
    }
    camera.fade_out(FadeOut::to_black(RESTART_FADE, SceneRequest::new(SceneId::Title)));
}

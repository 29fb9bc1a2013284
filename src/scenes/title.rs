//! Title screen.
//!
//! A starfield with rising particles behind the title, the two leads walking
//! in place, the controls and a blinking start prompt. ENTER or a tap resets
//! Dani's maximum health and fades into the first level.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::bob::Bob;
use crate::components::mapposition::MapPosition;
use crate::components::player::DEFAULT_MAX_HEALTH;
use crate::components::scale::Scale;
use crate::components::shape::Shape;
use crate::components::sprite::Sprite;
use crate::components::tint::{rgb, rgba, Tint};
use crate::components::tween::{Easing, LoopMode, Track, TweenAlpha, TweenPosition};
use crate::components::zindex::ZIndex;
use crate::resources::camerafx::{CameraFx, FadeOut};
use crate::resources::input::InputState;
use crate::resources::rng::GameRng;
use crate::resources::scene::{SceneId, SceneRequest};
use crate::resources::screensize::ScreenSize;
use crate::resources::worldsignals::WorldSignals;

use super::{line, shadowed, text};

pub const START_FADE: f32 = 0.8;

pub fn enter_title(
    mut commands: Commands,
    mut camera: ResMut<CameraFx>,
    mut rng: ResMut<GameRng>,
    screen: Res<ScreenSize>,
) {
    let (w, h) = (screen.width(), screen.height());
    let cx = w / 2.0;
    camera.set_background(rgb(0x0a0a1a));

    for _ in 0..60 {
        let size = rng.range(1.0, 3.0);
        let twinkle = Track::new(0.2, 0.8, rng.range(1.0, 3.0)).with_loop_mode(LoopMode::PingPong);
        commands.spawn((
            MapPosition::new(rng.range(0.0, w), rng.range(0.0, h)),
            Shape::circle(size, rgb(0xaaaacc)),
            Tint::alpha(0.2),
            TweenAlpha::from_track(twinkle),
            ZIndex(0),
        ));
    }

    for _ in 0..15 {
        let x = rng.range(0.0, w);
        let drift = rng.range(-50.0, 50.0);
        let rise = Track::new(Vector2::new(x, h + 20.0), Vector2::new(x + drift, -20.0), rng.range(4.0, 8.0))
            .with_loop_mode(LoopMode::Loop)
            .with_delay(rng.range(0.0, 3.0));
        commands.spawn((
            MapPosition::new(x, h + 20.0),
            Shape::circle(rng.range(2.0, 5.0), rgb(0x7744aa)),
            Tint::alpha(0.4),
            TweenPosition(rise),
            ZIndex(1),
        ));
    }

    let glow = Track::new(0.85, 1.0, 1.5)
        .with_easing(Easing::SineInOut)
        .with_loop_mode(LoopMode::PingPong);
    commands.spawn((
        MapPosition::new(cx, 140.0),
        shadowed("La Leyenda de\nJhulian", 24.0, 0xcc88ff, 0x220044),
        Tint::alpha(1.0),
        TweenAlpha::from_track(glow),
        ZIndex(10),
    ));
    commands.spawn((
        MapPosition::new(cx, 220.0),
        text("Una historia de amor y superación", 9.0, 0x88aacc),
        Tint::alpha(0.0),
        TweenAlpha::from_track(Track::new(0.0, 1.0, 2.0).with_delay(0.5)),
        ZIndex(10),
    ));
    commands.spawn((
        line(Vector2::new(cx - 120.0, 250.0), Vector2::new(cx + 120.0, 250.0), 1.0, rgba(0x7744aa, 0.5)),
        ZIndex(5),
    ));

    for (who, dx, color) in [("dani", -40.0, 0xff6644), ("jhulian", 40.0, 0x44aa44)] {
        let shape = if who == "dani" { Shape::Hero } else { Shape::Jhulian };
        commands.spawn((
            MapPosition::new(cx + dx, 310.0),
            Sprite::sheet(format!("{who}_walk"), 64.0, 0),
            Animation::new(format!("{who}-walk-down")),
            shape,
            Scale::uniform(2.0),
            Bob::new(-5.0, 1.0),
            Tint::default(),
            ZIndex(10),
        ));
        let name = if who == "dani" { "Dani" } else { "Jhulian" };
        commands.spawn((MapPosition::new(cx + dx, 345.0), text(name, 10.0, color), ZIndex(10)));
    }

    commands.spawn((
        MapPosition::new(cx, 420.0),
        text("FLECHAS / WASD  Mover", 8.0, 0x667788),
        ZIndex(10),
    ));
    commands.spawn((
        MapPosition::new(cx, 445.0),
        text("ESPACIO  Atacar    E  Hablar", 8.0, 0x667788),
        ZIndex(10),
    ));

    let blink = Track::new(0.3, 1.0, 0.8).with_loop_mode(LoopMode::PingPong);
    commands.spawn((
        MapPosition::new(cx, 520.0),
        text("Presiona ENTER para comenzar", 10.0, 0xcc88ff),
        Tint::alpha(0.3),
        TweenAlpha::from_track(blink),
        ZIndex(10),
    ));
}

/// ENTER or a tap starts a new run.
pub fn title_input_system(
    input: Res<InputState>,
    mut camera: ResMut<CameraFx>,
    mut signals: ResMut<WorldSignals>,
) {
    if !input.start_pressed() || camera.is_fading_out() {
        return;
    }
    info!("New game");
    signals.set_max_health(DEFAULT_MAX_HEALTH);
    camera.fade_out(FadeOut::to_black(START_FADE, SceneRequest::new(SceneId::Level1)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::scene::SceneManager;
    use crate::resources::worldtime::WorldTime;
    use crate::systems::camerafx::camera_fx_system;

    fn world() -> World {
        let mut world = World::new();
        world.init_resource::<InputState>();
        world.init_resource::<CameraFx>();
        world.init_resource::<WorldSignals>();
        world.init_resource::<SceneManager>();
        world.insert_resource(GameRng::seeded(1));
        world.insert_resource(WorldTime {
            delta: 0.5,
            ..Default::default()
        });
        world
    }

    #[test]
    fn test_enter_resets_health_and_fades_to_level1() {
        let mut world = world();
        world.resource_mut::<WorldSignals>().set_max_health(10);
        world.resource_mut::<InputState>().confirm.set(true);
        let mut schedule = Schedule::default();
        schedule.add_systems((title_input_system, camera_fx_system).chain());
        schedule.run(&mut world);
        assert_eq!(world.resource::<WorldSignals>().max_health(), DEFAULT_MAX_HEALTH);
        assert!(world.resource::<CameraFx>().is_fading_out());
        schedule.run(&mut world);
        let pending = world.resource_mut::<SceneManager>().take_pending();
        assert_eq!(pending.map(|r| r.scene), Some(SceneId::Level1));
    }

    #[test]
    fn test_no_input_no_fade() {
        let mut world = world();
        let mut schedule = Schedule::default();
        schedule.add_systems(title_input_system);
        schedule.run(&mut world);
        assert!(!world.resource::<CameraFx>().is_fading_out());
    }
}

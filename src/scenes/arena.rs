//! Boss arena. The encounter comes from the scene parameters; without one the
//! default fight is staged.
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::boxcollider::Bounded;
use crate::components::mapposition::MapPosition;
use crate::components::shape::Shape;
use crate::components::tint::{rgb, rgba};
use crate::components::zindex::ZIndex;
use crate::resources::camerafx::CameraFx;
use crate::resources::hud::Hud;
use crate::resources::scene::{BossEncounter, SceneManager};
use crate::resources::screensize::ScreenSize;
use crate::resources::worldsignals::WorldSignals;

use super::{queue_dialogue, spawn_boss, spawn_player, INTRO_DELAY};

pub const ARENA_FADE_IN: f32 = 0.6;
const ACCENT: f32 = 12.0;

/// Walled area of the arena for a view of the given size.
pub fn arena_rect(view: Vector2) -> Rectangle {
    Rectangle::new(40.0, 40.0, view.x - 80.0, view.y - 120.0)
}

/// Where the player may walk: the arena minus a 5 px margin.
pub fn arena_bounds(view: Vector2) -> Bounded {
    Bounded::new(45.0, 45.0, view.x - 90.0, view.y - 130.0)
}

pub fn entrance_lines(name: &str) -> Vec<String> {
    vec![format!("¡{name} aparece!"), "¡Prepárate para la batalla!".to_string()]
}

pub fn build_arena(commands: &mut Commands, encounter: &BossEncounter, max_health: i32, view: Vector2) {
    let area = arena_rect(view);
    commands.spawn((
        MapPosition::new(area.x + area.width / 2.0, area.y + area.height / 2.0),
        Shape::rect(area.width, area.height, rgba(encounter.arena_color, 0.5)),
        ZIndex(0),
    ));
    commands.spawn((
        MapPosition::new(area.x, area.y),
        Shape::Outline {
            width: area.width,
            height: area.height,
            thickness: 3.0,
            color: rgba(0x7744aa, 0.6),
        },
        ZIndex(1),
    ));
    let right = area.x + area.width;
    let bottom = view.y - 80.0;
    for (x, y) in [(area.x, area.y), (right, area.y), (area.x, bottom), (right, bottom)] {
        commands.spawn((
            MapPosition::new(x, y),
            Shape::rect(ACCENT, ACCENT, rgba(0x9944cc, 0.4)),
            ZIndex(1),
        ));
    }

    let bounds = arena_bounds(view);
    spawn_player(commands, Vector2::new(100.0, view.y / 2.0 - 30.0), max_health, bounds);
    spawn_boss(
        commands,
        &encounter.boss,
        Vector2::new(view.x - 150.0, view.y / 2.0 - 30.0),
        bounds,
    );
    queue_dialogue(commands, INTRO_DELAY, "", entrance_lines(&encounter.boss.name));
}

pub fn enter_arena(
    mut commands: Commands,
    scenes: Res<SceneManager>,
    signals: Res<WorldSignals>,
    screen: Res<ScreenSize>,
    mut camera: ResMut<CameraFx>,
    mut hud: ResMut<Hud>,
) {
    let encounter = scenes.encounter();
    info!("Boss fight: '{}'", encounter.boss.name);

    camera.set_background(rgb(encounter.bg_color));
    camera.fade_in(ARENA_FADE_IN, rgb(0x000000));
    hud.show(signals.max_health());
    hud.set_mission(format!("- {} -", encounter.boss.name));
    hud.set_boss(encounter.boss.name.clone(), 1.0);

    let view = Vector2::new(screen.width(), screen.height());
    build_arena(&mut commands, &encounter, signals.max_health(), view);
}

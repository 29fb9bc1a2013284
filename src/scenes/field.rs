//! Combat levels built from a [`FieldLevel`] entry: the forest (Level1) and
//! the cave (Level2, with the darkness overlay).
use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::prelude::Vector2;

use crate::components::boxcollider::{BoxCollider, Bounded, Solid};
use crate::components::darkness::Darkness;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::shape::Shape;
use crate::components::tint::rgb;
use crate::components::trigger::TriggerZone;
use crate::components::zindex::ZIndex;
use crate::resources::camerafx::CameraFx;
use crate::resources::hud::Hud;
use crate::resources::leveldata::{FieldLevel, LevelCatalog, ObstacleKind};
use crate::resources::levelprogress::LevelProgress;
use crate::resources::rng::GameRng;
use crate::resources::scene::SceneManager;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldsignals::WorldSignals;

use super::{queue_dialogue, spawn_enemy, spawn_npc, spawn_patches, spawn_player, INTRO_DELAY};

pub const PLAYER_START: Vector2 = Vector2 { x: 100.0, y: 300.0 };
pub const EXIT_AT: Vector2 = Vector2 { x: 750.0, y: 300.0 };
pub const EXIT_SIZE: f32 = 40.0;

fn obstacle(kind: ObstacleKind) -> (Shape, BoxCollider) {
    match kind {
        ObstacleKind::Tree => (
            Shape::Tree,
            BoxCollider::new(16.0, 16.0).with_offset(Vector2::new(-8.0, -4.0)),
        ),
        ObstacleKind::Rock => (Shape::Rock, BoxCollider::centered(20.0, 20.0)),
    }
}

/// Spawns everything a field level needs and resets its progress.
pub fn build_field(
    commands: &mut Commands,
    level: &FieldLevel,
    max_health: i32,
    view: Vector2,
    rng: &mut GameRng,
) -> LevelProgress {
    spawn_patches(commands, rng, &level.ground, view.x, view.y);

    for [x, y] in &level.obstacles {
        let (shape, collider) = obstacle(level.obstacle);
        commands.spawn((
            MapPosition::new(*x, *y),
            shape,
            collider,
            Solid,
            Group::new("obstacle"),
            ZIndex(5),
        ));
    }

    let world_bounds = Bounded::new(0.0, 0.0, view.x, view.y);
    spawn_player(commands, PLAYER_START, max_health, world_bounds);
    spawn_npc(commands, &level.npc);
    for [x, y] in &level.enemies {
        spawn_enemy(commands, &level.enemy, Vector2::new(*x, *y), world_bounds);
    }

    commands.spawn((
        MapPosition::from_vec(EXIT_AT),
        BoxCollider::centered(EXIT_SIZE, EXIT_SIZE),
        TriggerZone::exit(),
        Group::new("trigger"),
    ));

    if level.darkness {
        commands.spawn(Darkness::default());
    }

    queue_dialogue(commands, INTRO_DELAY, "", level.intro.clone());
    LevelProgress::with_enemies(level.enemies.len())
}

/// Enter system shared by Level1 and Level2; the current scene picks the
/// catalogue entry.
#[allow(clippy::too_many_arguments)]
pub fn enter_field(
    mut commands: Commands,
    scenes: Res<SceneManager>,
    catalog: Option<Res<LevelCatalog>>,
    signals: Res<WorldSignals>,
    screen: Res<ScreenSize>,
    mut camera: ResMut<CameraFx>,
    mut hud: ResMut<Hud>,
    mut progress: ResMut<LevelProgress>,
    mut rng: ResMut<GameRng>,
) {
    let Some(scene) = scenes.current() else {
        return;
    };
    let Some(level) = catalog.as_ref().and_then(|c| c.field(scene)) else {
        error!("No level data for {:?}", scene);
        return;
    };
    info!("Entering '{}'", level.mission);

    camera.set_background(rgb(level.background));
    camera.fade_in(level.fade_in, rgb(0x000000));
    hud.show(signals.max_health());
    hud.set_mission(level.mission.clone());

    let view = Vector2::new(screen.width(), screen.height());
    *progress = build_field(&mut commands, level, signals.max_health(), view, &mut rng);
}

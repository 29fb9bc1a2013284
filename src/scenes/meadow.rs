//! The meadow (Level3). No enemies: Dani walks the path, may talk to the
//! NPCs, and the level ends when she reaches Jhulian.
use bevy_ecs::prelude::*;
use log::{error, info};
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::bob::Bob;
use crate::components::boxcollider::{BoxCollider, Bounded};
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::shape::Shape;
use crate::components::sprite::Sprite;
use crate::components::tint::{rgb, rgba, Tint};
use crate::components::trigger::TriggerZone;
use crate::components::tween::{Easing, LoopMode, Track, TweenAlpha, TweenPosition, TweenRotation};
use crate::components::zindex::ZIndex;
use crate::resources::camerafx::CameraFx;
use crate::resources::hud::Hud;
use crate::resources::leveldata::{LevelCatalog, MeadowLevel};
use crate::resources::rng::GameRng;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldsignals::WorldSignals;

use super::{line, queue_dialogue, spawn_npc, spawn_patches, spawn_player, text, INTRO_DELAY};

/// Vertical extent of the dirt path.
pub const PATH_TOP: f32 = 260.0;
pub const PATH_BOTTOM: f32 = 340.0;
/// Flowers are never placed in this band around the path.
const FLOWER_GAP: (f32, f32) = (250.0, 350.0);
pub const MEETING_SIZE: f32 = 50.0;

fn spawn_path(commands: &mut Commands, width: f32) {
    let height = PATH_BOTTOM - PATH_TOP;
    commands.spawn((
        MapPosition::new(width / 2.0, PATH_TOP + height / 2.0),
        Shape::rect(width, height, rgba(0xccaa77, 0.3)),
        ZIndex(0),
    ));
    for y in [PATH_TOP, PATH_BOTTOM] {
        commands.spawn((
            line(Vector2::new(0.0, y), Vector2::new(width, y), 1.0, rgba(0xbb9966, 0.2)),
            ZIndex(0),
        ));
    }
}

fn spawn_flowers(commands: &mut Commands, rng: &mut GameRng, level: &MeadowLevel, view: Vector2) {
    if level.petals.is_empty() {
        return;
    }
    for _ in 0..level.flowers {
        let x = 50.0 + rng.range(0.0, view.x - 100.0);
        let y = rng.range(0.0, view.y);
        if y > FLOWER_GAP.0 && y < FLOWER_GAP.1 {
            continue;
        }
        let petal = level.petals[rng.0.usize(..level.petals.len())];
        let sway = Track::new(-5.0, 5.0, rng.range(1.5, 2.5))
            .with_easing(Easing::SineInOut)
            .with_loop_mode(LoopMode::PingPong);
        commands.spawn((
            MapPosition::new(x, y),
            Shape::Flower { petal: rgb(petal) },
            Rotation::new(-5.0),
            TweenRotation(sway),
            ZIndex(1),
        ));
    }
}

fn spawn_jhulian(commands: &mut Commands, rng: &mut GameRng, at: Vector2) {
    commands.spawn((
        MapPosition::from_vec(at),
        Sprite::sheet("jhulian_walk", 64.0, 26),
        Animation::new("jhulian-idle-down"),
        Shape::Jhulian,
        Scale::uniform(2.5),
        Tint::default(),
        Bob::new(-3.0, 1.2),
        ZIndex(10),
    ));
    commands.spawn((
        MapPosition::new(at.x, at.y - 45.0),
        text("Jhulian", 8.0, 0x44cc44),
        Bob::new(-3.0, 1.2),
        ZIndex(20),
    ));

    for _ in 0..5 {
        let from = Vector2::new(at.x + rng.range(-30.0, 30.0), at.y + rng.range(-30.0, 30.0));
        let duration = rng.range(2.0, 3.5);
        let delay = rng.range(0.0, 2.0);
        let rise = Track::new(from, from - Vector2::new(0.0, 30.0), duration)
            .with_loop_mode(LoopMode::Loop)
            .with_delay(delay);
        let fade = Track::new(0.5, 0.0, duration)
            .with_loop_mode(LoopMode::Loop)
            .with_delay(delay);
        commands.spawn((
            MapPosition::from_vec(from),
            Shape::Heart {
                size: 6.0,
                filled: true,
            },
            Tint::alpha(0.5),
            TweenPosition(rise),
            TweenAlpha::from_track(fade),
            ZIndex(2),
        ));
    }

    commands.spawn((
        MapPosition::from_vec(at),
        BoxCollider::centered(MEETING_SIZE, MEETING_SIZE),
        TriggerZone::meeting(),
        Group::new("trigger"),
    ));
}

pub fn build_meadow(
    commands: &mut Commands,
    level: &MeadowLevel,
    max_health: i32,
    view: Vector2,
    rng: &mut GameRng,
) {
    spawn_patches(commands, rng, &level.grass, view.x, view.y);
    spawn_path(commands, view.x);
    spawn_flowers(commands, rng, level, view);

    let [px, py] = level.player;
    spawn_player(
        commands,
        Vector2::new(px, py),
        max_health,
        Bounded::new(0.0, 0.0, view.x, view.y),
    );
    for npc in &level.npcs {
        spawn_npc(commands, npc);
    }
    let [jx, jy] = level.jhulian;
    spawn_jhulian(commands, rng, Vector2::new(jx, jy));

    queue_dialogue(commands, INTRO_DELAY, "", level.intro.clone());
}

pub fn enter_meadow(
    mut commands: Commands,
    catalog: Option<Res<LevelCatalog>>,
    signals: Res<WorldSignals>,
    screen: Res<ScreenSize>,
    mut camera: ResMut<CameraFx>,
    mut hud: ResMut<Hud>,
    mut rng: ResMut<GameRng>,
) {
    let Some(catalog) = catalog else {
        error!("No level data for the meadow");
        return;
    };
    let level = &catalog.meadow;
    info!("Entering '{}'", level.mission);

    camera.set_background(rgb(level.background));
    camera.fade_in(level.fade_in, rgb(0x000000));
    hud.show(signals.max_health());
    hud.set_mission(level.mission.clone());

    let view = Vector2::new(screen.width(), screen.height());
    build_meadow(&mut commands, level, signals.max_health(), view, &mut rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::enemy::Enemy;
    use crate::components::npc::Npc;
    use crate::components::player::Player;

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(LevelCatalog::embedded().unwrap());
        world.init_resource::<WorldSignals>();
        world.init_resource::<ScreenSize>();
        world.init_resource::<CameraFx>();
        world.init_resource::<Hud>();
        world.insert_resource(GameRng::seeded(21));
        let id = world.register_system(enter_meadow);
        world.run_system(id).unwrap();
        world
    }

    #[test]
    fn test_meadow_has_no_enemies_and_an_open_meeting() {
        let mut world = world();
        let mut enemies = world.query::<&Enemy>();
        assert_eq!(enemies.iter(&world).count(), 0);
        let mut npcs = world.query::<&Npc>();
        assert_eq!(npcs.iter(&world).count(), 2);
        let mut zones = world.query::<(&TriggerZone, &MapPosition)>();
        let (zone, position) = zones.single(&world).unwrap();
        assert!(zone.active);
        assert_eq!(position.pos, Vector2::new(720.0, 300.0));
        let mut players = world.query::<(&Player, &MapPosition)>();
        assert_eq!(players.single(&world).unwrap().1.pos, Vector2::new(60.0, 300.0));
    }

    #[test]
    fn test_flowers_stay_off_the_path() {
        let mut world = world();
        let mut flowers = world.query::<(&Shape, &MapPosition)>();
        let mut count = 0;
        for (shape, position) in flowers.iter(&world) {
            if matches!(shape, Shape::Flower { .. }) {
                count += 1;
                assert!(position.pos.y <= FLOWER_GAP.0 || position.pos.y >= FLOWER_GAP.1);
                assert!(position.pos.x >= 50.0 && position.pos.x <= 750.0);
            }
        }
        assert!(count <= 30);
    }
}

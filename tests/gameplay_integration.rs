//! Gameplay integration tests: sword swings, contact damage, the kill quota
//! that opens the exit, NPC talk and solid obstacles.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use leyenda::components::boss::Boss;
use leyenda::components::boxcollider::{Bounded, BoxCollider, Solid};
use leyenda::components::enemy::{Enemy, EnemyConfig};
use leyenda::components::group::Group;
use leyenda::components::hitbox::SwordHitbox;
use leyenda::components::mapposition::MapPosition;
use leyenda::components::player::Player;
use leyenda::components::rigidbody::RigidBody;
use leyenda::components::timer::PendingDialogue;
use leyenda::components::trigger::TriggerZone;
use leyenda::events::combat::EnemyHitEvent;
use leyenda::game;
use leyenda::resources::camerafx::CameraFx;
use leyenda::resources::dialogue::DialogueManager;
use leyenda::resources::hud::Hud;
use leyenda::resources::input::InputState;
use leyenda::resources::leveldata::LevelCatalog;
use leyenda::resources::levelprogress::LevelProgress;
use leyenda::resources::rng::GameRng;
use leyenda::resources::scene::{SceneId, SceneManager, SceneRequest};
use leyenda::resources::screensize::ScreenSize;
use leyenda::resources::systemsstore::SystemsStore;
use leyenda::resources::touch::{TouchControls, TouchMode};
use leyenda::resources::worldsignals::WorldSignals;
use leyenda::resources::worldtime::WorldTime;
use leyenda::scenes::field::EXIT_AT;
use leyenda::scenes::{spawn_enemy, spawn_player};
use leyenda::systems::camerafx::camera_fx_system;
use leyenda::systems::collision::collision_detector;
use leyenda::systems::dialogue::{dialogue_inactive, dialogue_system};
use leyenda::systems::enemy::{enemy_ai_system, enemy_status_system};
use leyenda::systems::movement::{bounds_system, movement_system, solid_pushout_system};
use leyenda::systems::npc::npc_interact_system;
use leyenda::systems::player::{player_control_system, player_status_system};
use leyenda::systems::scene::{check_pending_scene, in_gameplay};
use leyenda::systems::time::{update_timers, update_world_time};
use leyenda::systems::ttl::ttl_system;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 10.0,
        delta: 0.0,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(WorldSignals::default());
    world.insert_resource(ScreenSize { w: 800, h: 600 });
    world.insert_resource(InputState::default());
    world.insert_resource(TouchControls::new(TouchMode::Never));
    world.insert_resource(CameraFx::new(800.0, 600.0));
    world.insert_resource(Hud::default());
    world.insert_resource(DialogueManager::default());
    world.insert_resource(SceneManager::default());
    world.insert_resource(LevelProgress::default());
    world.insert_resource(GameRng::seeded(11));
    world.insert_resource(LevelCatalog::embedded().unwrap());

    let mut store = SystemsStore::new();
    game::register_scene_systems(&mut world, &mut store);
    world.insert_resource(store);
    game::spawn_game_observers(&mut world);
    world.flush();
    world
}

fn bat() -> EnemyConfig {
    let catalog = LevelCatalog::embedded().unwrap();
    catalog.field(SceneId::Level1).unwrap().enemy.clone()
}

fn open_field() -> Bounded {
    Bounded::new(0.0, 0.0, 800.0, 600.0)
}

/// Swing, hit detection and the status clocks; no AI or movement.
fn combat_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            player_control_system,
            collision_detector,
            player_status_system,
            enemy_status_system,
            ttl_system,
        )
            .chain(),
    );
    schedule
}

fn level_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            check_pending_scene,
            (
                player_control_system,
                enemy_ai_system,
                npc_interact_system,
                movement_system,
                solid_pushout_system,
                bounds_system,
                collision_detector,
            )
                .chain()
                .run_if(in_gameplay)
                .run_if(dialogue_inactive),
            player_status_system,
            enemy_status_system,
            update_timers,
            dialogue_system,
            camera_fx_system,
        )
            .chain(),
    );
    schedule
}

fn frame(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
}

fn spawn_pair(world: &mut World, player_at: Vector2, enemy_at: Vector2) -> (Entity, Entity) {
    let config = bat();
    let mut commands = world.commands();
    let player = spawn_player(&mut commands, player_at, 6, open_field());
    let enemy = spawn_enemy(&mut commands, &config, enemy_at, open_field());
    world.flush();
    (player, enemy)
}

fn enter_level(world: &mut World, schedule: &mut Schedule, scene: SceneId) {
    world
        .resource_mut::<SceneManager>()
        .request(SceneRequest::new(scene));
    frame(world, schedule, 0.016);
    let mut q = world.query_filtered::<Entity, With<PendingDialogue>>();
    let intro: Vec<Entity> = q.iter(world).collect();
    for entity in intro {
        world.despawn(entity);
    }
}

// ==================== SWORD ====================

#[test]
fn one_swing_kills_a_default_enemy() {
    let mut world = make_world();
    let mut schedule = combat_schedule();
    // Facing down: the slash lands 20 px below the player, the bat just past
    // the player's own collider.
    let (_, enemy) = spawn_pair(&mut world, Vector2::new(200.0, 300.0), Vector2::new(200.0, 345.0));

    world.resource_mut::<InputState>().attack.set(true);
    frame(&mut world, &mut schedule, 0.016);
    assert_eq!(world.get::<Enemy>(enemy).unwrap().health, 1);

    // The slash is still out on the next frame and cuts again.
    world.resource_mut::<InputState>().attack.set(false);
    frame(&mut world, &mut schedule, 0.016);
    let bat = world.get::<Enemy>(enemy).unwrap();
    assert!(!bat.alive);
    // The dying bat no longer collides.
    assert!(world.get::<BoxCollider>(enemy).is_none());

    frame(&mut world, &mut schedule, 0.5);
    assert!(world.get_entity(enemy).is_err());
    assert_eq!(world.resource::<LevelProgress>().kills, 1);
}

#[test]
fn slash_stops_cutting_once_it_expires() {
    let mut world = make_world();
    let mut schedule = combat_schedule();
    let tough = EnemyConfig {
        health: 40,
        ..bat()
    };
    let enemy = {
        let mut commands = world.commands();
        spawn_player(&mut commands, Vector2::new(200.0, 300.0), 6, open_field());
        let enemy = spawn_enemy(&mut commands, &tough, Vector2::new(200.0, 345.0), open_field());
        world.flush();
        enemy
    };

    world.resource_mut::<InputState>().attack.set(true);
    frame(&mut world, &mut schedule, 0.016);
    world.resource_mut::<InputState>().attack.set(false);
    frame(&mut world, &mut schedule, 0.016);
    assert_eq!(world.get::<Enemy>(enemy).unwrap().health, 36);

    frame(&mut world, &mut schedule, 0.3);
    let mut slashes = world.query::<&SwordHitbox>();
    assert_eq!(slashes.iter(&world).count(), 0);

    let health = world.get::<Enemy>(enemy).unwrap().health;
    frame(&mut world, &mut schedule, 0.016);
    assert_eq!(world.get::<Enemy>(enemy).unwrap().health, health);
    assert!(world.get::<Enemy>(enemy).unwrap().alive);
}

// ==================== CONTACT DAMAGE ====================

#[test]
fn contact_damage_respects_invincibility() {
    let mut world = make_world();
    let mut schedule = combat_schedule();
    let (player, _) = spawn_pair(&mut world, Vector2::new(200.0, 300.0), Vector2::new(200.0, 320.0));

    frame(&mut world, &mut schedule, 0.016);
    assert_eq!(world.get::<Player>(player).unwrap().health, 5);
    assert_eq!(world.resource::<Hud>().health, 5);

    frame(&mut world, &mut schedule, 0.3);
    assert_eq!(world.get::<Player>(player).unwrap().health, 5);

    frame(&mut world, &mut schedule, 0.6);
    frame(&mut world, &mut schedule, 0.016);
    assert_eq!(world.get::<Player>(player).unwrap().health, 4);
}

// ==================== EXIT ====================

#[test]
fn kill_quota_opens_exit_and_leads_to_the_boss() {
    let mut world = make_world();
    let mut schedule = level_schedule();
    enter_level(&mut world, &mut schedule, SceneId::Level1);

    let enemies: Vec<Entity> = world
        .query_filtered::<Entity, With<Enemy>>()
        .iter(&world)
        .collect();
    assert_eq!(enemies.len(), 6);
    assert_eq!(world.resource::<LevelProgress>().required_kills(), 4);

    for enemy in enemies.iter().take(3) {
        world.trigger(EnemyHitEvent {
            entity: *enemy,
            amount: 10,
        });
    }
    world.flush();
    frame(&mut world, &mut schedule, 0.4);
    assert_eq!(world.resource::<LevelProgress>().kills, 3);
    assert!(!world.query::<&TriggerZone>().single(&world).unwrap().active);

    world.trigger(EnemyHitEvent {
        entity: enemies[3],
        amount: 10,
    });
    world.flush();
    frame(&mut world, &mut schedule, 0.4);
    assert!(world.resource::<LevelProgress>().exit_open);
    assert!(world.query::<&TriggerZone>().single(&world).unwrap().active);

    {
        let mut q = world.query_filtered::<&mut MapPosition, With<Player>>();
        q.single_mut(&mut world).unwrap().pos = EXIT_AT - Vector2::new(0.0, 10.0);
    }
    frame(&mut world, &mut schedule, 0.016);
    assert!(world.resource::<LevelProgress>().exit_taken);
    assert!(world.resource::<CameraFx>().is_fading_out());

    for _ in 0..3 {
        frame(&mut world, &mut schedule, 0.3);
    }
    let scenes = world.resource::<SceneManager>();
    assert_eq!(scenes.current(), Some(SceneId::Boss));
    assert_eq!(scenes.encounter().boss.name, "El Guardián del Miedo");
    assert_eq!(scenes.encounter().next_scene, SceneId::Level2);
    let mut bosses = world.query::<&Boss>();
    assert_eq!(bosses.iter(&world).count(), 1);
}

#[test]
fn closed_exit_does_nothing() {
    let mut world = make_world();
    let mut schedule = level_schedule();
    enter_level(&mut world, &mut schedule, SceneId::Level1);
    {
        let mut q = world.query_filtered::<&mut MapPosition, With<Player>>();
        q.single_mut(&mut world).unwrap().pos = EXIT_AT - Vector2::new(0.0, 10.0);
    }
    frame(&mut world, &mut schedule, 0.016);
    assert!(!world.resource::<LevelProgress>().exit_taken);
    assert!(!world.resource::<CameraFx>().is_fading_out());
}

// ==================== NPC / OBSTACLES ====================

#[test]
fn talking_to_npc_pauses_gameplay() {
    let mut world = make_world();
    let mut schedule = level_schedule();
    enter_level(&mut world, &mut schedule, SceneId::Level1);
    let npc_at = {
        let catalog = world.resource::<LevelCatalog>();
        let npc = &catalog.field(SceneId::Level1).unwrap().npc;
        Vector2::new(npc.x, npc.y)
    };
    {
        let mut q = world.query_filtered::<&mut MapPosition, With<Player>>();
        q.single_mut(&mut world).unwrap().pos = npc_at + Vector2::new(30.0, 0.0);
    }
    world.resource_mut::<InputState>().interact.set(true);
    frame(&mut world, &mut schedule, 0.016);
    world.resource_mut::<InputState>().interact.set(false);
    assert!(world.resource::<DialogueManager>().active);

    // Held movement keys are ignored while the box is up.
    world.resource_mut::<InputState>().right.set(true);
    let before = world
        .query_filtered::<&MapPosition, With<Player>>()
        .single(&world)
        .unwrap()
        .pos;
    frame(&mut world, &mut schedule, 0.1);
    let after = world
        .query_filtered::<&MapPosition, With<Player>>()
        .single(&world)
        .unwrap()
        .pos;
    assert_eq!(before, after);
}

#[test]
fn solid_obstacle_pushes_the_player_out() {
    let mut world = make_world();
    let mut schedule = Schedule::default();
    schedule.add_systems((movement_system, solid_pushout_system, bounds_system).chain());
    let player = {
        let mut commands = world.commands();
        let player = spawn_player(&mut commands, Vector2::new(100.0, 100.0), 6, open_field());
        commands.spawn((
            MapPosition::new(130.0, 112.0),
            BoxCollider::centered(20.0, 20.0),
            Solid,
            Group::new("obstacle"),
        ));
        player
    };
    world.flush();
    world
        .get_mut::<RigidBody>(player)
        .unwrap()
        .set_velocity(Vector2::new(160.0, 0.0));

    for _ in 0..10 {
        frame(&mut world, &mut schedule, 0.05);
    }
    let position = world.get::<MapPosition>(player).unwrap().pos;
    // The player's feet box ends 10 px right of its position; the rock
    // starts at x = 120.
    assert!(position.x <= 110.0 + 1e-3);
}

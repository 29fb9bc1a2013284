//! Scene flow integration tests: boot, title, levels, boss, game over and
//! the ending, driven through the real enter systems and observers on a
//! headless world.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use leyenda::components::boss::Boss;
use leyenda::components::mapposition::MapPosition;
use leyenda::components::player::{DEFAULT_MAX_HEALTH, Player};
use leyenda::components::timer::PendingDialogue;
use leyenda::events::combat::{BossHitEvent, PlayerHitEvent, VICTORY_SPEAKER};
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
use leyenda::scenes::gameover::gameover_input_system;
use leyenda::scenes::title::title_input_system;
use leyenda::scenes::victory::victory_input_system;
use leyenda::systems::boss::boss_status_system;
use leyenda::systems::camerafx::camera_fx_system;
use leyenda::systems::collision::collision_detector;
use leyenda::systems::dialogue::{dialogue_inactive, dialogue_system};
use leyenda::systems::enemy::{enemy_ai_system, enemy_status_system};
use leyenda::systems::movement::{bounds_system, movement_system, solid_pushout_system};
use leyenda::systems::phase::{phase_change_detector, phase_update_system};
use leyenda::systems::player::{player_control_system, player_status_system};
use leyenda::systems::scene::{check_pending_scene, in_gameover, in_gameplay, in_title, in_victory};
use leyenda::systems::time::{update_timers, update_world_time};

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
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
    world.insert_resource(GameRng::seeded(42));
    world.insert_resource(LevelCatalog::embedded().unwrap());

    let mut store = SystemsStore::new();
    game::register_scene_systems(&mut world, &mut store);
    world.insert_resource(store);
    game::spawn_game_observers(&mut world);
    world.flush();
    world
}

/// The update schedule minus raylib input and rendering.
fn make_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            check_pending_scene,
            (
                player_control_system,
                enemy_ai_system,
                phase_change_detector,
                phase_update_system,
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
            boss_status_system,
            update_timers,
            dialogue_system,
            title_input_system.run_if(in_title),
            victory_input_system.run_if(in_victory),
            gameover_input_system.run_if(in_gameover),
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

fn frames(world: &mut World, schedule: &mut Schedule, count: usize, dt: f32) {
    for _ in 0..count {
        frame(world, schedule, dt);
    }
}

/// ENTER down for one frame, then released.
fn press_confirm(world: &mut World, schedule: &mut Schedule) {
    world.resource_mut::<InputState>().confirm.set(true);
    frame(world, schedule, 0.016);
    world.resource_mut::<InputState>().confirm.set(false);
}

fn start(world: &mut World, schedule: &mut Schedule, request: SceneRequest) {
    world.resource_mut::<SceneManager>().request(request);
    frame(world, schedule, 0.016);
}

fn current(world: &World) -> Option<SceneId> {
    world.resource::<SceneManager>().current()
}

/// Drop the scene's opening dialogue so gameplay runs unpaused.
fn skip_intro(world: &mut World) {
    let mut q = world.query_filtered::<Entity, With<PendingDialogue>>();
    let pending: Vec<Entity> = q.iter(world).collect();
    for entity in pending {
        world.despawn(entity);
    }
}

fn player(world: &mut World) -> Player {
    let mut q = world.query::<&Player>();
    q.single(world).unwrap().clone()
}

// ==================== BOOT / TITLE ====================

#[test]
fn boot_hands_over_to_title() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    start(&mut world, &mut schedule, SceneRequest::new(SceneId::Boot));
    assert_eq!(current(&world), Some(SceneId::Boot));

    frames(&mut world, &mut schedule, 3, 0.5);
    assert_eq!(current(&world), Some(SceneId::Boot));
    frames(&mut world, &mut schedule, 3, 0.5);
    assert_eq!(current(&world), Some(SceneId::Title));
}

#[test]
fn title_start_resets_health_and_enters_level1() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    world.resource_mut::<WorldSignals>().set_max_health(10);
    start(&mut world, &mut schedule, SceneRequest::new(SceneId::Title));

    press_confirm(&mut world, &mut schedule);
    assert!(world.resource::<CameraFx>().is_fading_out());
    assert_eq!(current(&world), Some(SceneId::Title));

    frames(&mut world, &mut schedule, 3, 0.5);
    assert_eq!(current(&world), Some(SceneId::Level1));
    assert_eq!(player(&mut world).max_health, DEFAULT_MAX_HEALTH);
    let hud = world.resource::<Hud>();
    assert!(hud.visible);
    assert_eq!(hud.mission.as_deref(), Some("Misión 1: El Bosque de la Incertidumbre"));
}

#[test]
fn scene_switch_clears_previous_entities() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    start(&mut world, &mut schedule, SceneRequest::new(SceneId::Level1));
    let mut q = world.query::<&Player>();
    assert_eq!(q.iter(&world).count(), 1);

    start(&mut world, &mut schedule, SceneRequest::new(SceneId::Title));
    assert_eq!(q.iter(&world).count(), 0);
    assert!(!world.resource::<Hud>().visible);
}

// ==================== GAME OVER ====================

#[test]
fn death_in_level2_retries_level2() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    start(&mut world, &mut schedule, SceneRequest::new(SceneId::Level2));

    world.trigger(PlayerHitEvent { amount: 99 });
    world.flush();
    assert!(!player(&mut world).alive);
    assert_eq!(world.resource::<Hud>().health, 0);

    frames(&mut world, &mut schedule, 4, 0.3);
    assert_eq!(current(&world), Some(SceneId::GameOver));
    assert_eq!(
        world.resource::<SceneManager>().restart_request(),
        SceneRequest::new(SceneId::Level2)
    );

    press_confirm(&mut world, &mut schedule);
    frames(&mut world, &mut schedule, 3, 0.3);
    assert_eq!(current(&world), Some(SceneId::Level2));
    let dani = player(&mut world);
    assert!(dani.alive);
    assert_eq!(dani.health, dani.max_health);
}

#[test]
fn death_in_boss_fight_retries_the_same_fight() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let encounter = world
        .resource::<LevelCatalog>()
        .field(SceneId::Level1)
        .map(|level| level.encounter.clone())
        .unwrap();
    let fight = SceneRequest::boss(encounter);
    start(&mut world, &mut schedule, fight.clone());

    world.trigger(PlayerHitEvent { amount: 99 });
    world.flush();
    frames(&mut world, &mut schedule, 4, 0.3);
    assert_eq!(current(&world), Some(SceneId::GameOver));

    press_confirm(&mut world, &mut schedule);
    frames(&mut world, &mut schedule, 3, 0.3);
    assert_eq!(world.resource::<SceneManager>().current_request(), Some(fight));
    let mut bosses = world.query::<&Boss>();
    assert_eq!(bosses.single(&world).unwrap().name, "El Guardián del Miedo");
}

// ==================== BOSS VICTORY ====================

#[test]
fn boss_victory_grows_health_and_moves_on() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    let encounter = world
        .resource::<LevelCatalog>()
        .field(SceneId::Level1)
        .map(|level| level.encounter.clone())
        .unwrap();
    let win_lines = encounter.win_message.clone();
    start(&mut world, &mut schedule, SceneRequest::boss(encounter));
    skip_intro(&mut world);

    let boss = {
        let mut q = world.query_filtered::<Entity, With<Boss>>();
        q.single(&world).unwrap()
    };
    world.trigger(BossHitEvent {
        entity: boss,
        amount: 999,
    });
    world.flush();

    for _ in 0..20 {
        frame(&mut world, &mut schedule, 0.2);
        if world.resource::<DialogueManager>().active {
            break;
        }
    }
    assert!(world.get_entity(boss).is_err());
    assert_eq!(world.resource::<WorldSignals>().max_health(), DEFAULT_MAX_HEALTH + 2);
    let dialogue = world.resource::<DialogueManager>();
    assert!(dialogue.active);
    assert_eq!(dialogue.speaker, VICTORY_SPEAKER);
    assert_eq!(dialogue.messages, win_lines);

    world.resource_mut::<DialogueManager>().close();
    frame(&mut world, &mut schedule, 0.016);
    assert!(world.resource::<CameraFx>().is_fading_out());
    frames(&mut world, &mut schedule, 5, 0.3);
    assert_eq!(current(&world), Some(SceneId::Level2));
    assert_eq!(player(&mut world).max_health, DEFAULT_MAX_HEALTH + 2);
}

// ==================== MEADOW / ENDING ====================

#[test]
fn meeting_jhulian_ends_in_victory_and_back_to_title() {
    let mut world = make_world();
    let mut schedule = make_schedule();
    start(&mut world, &mut schedule, SceneRequest::new(SceneId::Level3));
    skip_intro(&mut world);

    {
        let mut q = world.query_filtered::<&mut MapPosition, With<Player>>();
        q.single_mut(&mut world).unwrap().pos = Vector2::new(720.0, 290.0);
    }
    frame(&mut world, &mut schedule, 0.016);
    assert!(world.resource::<LevelProgress>().meeting_triggered);

    frames(&mut world, &mut schedule, 2, 0.2);
    {
        let dialogue = world.resource::<DialogueManager>();
        assert!(dialogue.active);
        assert_eq!(dialogue.speaker, "Jhulian");
    }
    world.resource_mut::<DialogueManager>().close();
    frames(&mut world, &mut schedule, 5, 0.4);
    assert_eq!(current(&world), Some(SceneId::Victory));

    press_confirm(&mut world, &mut schedule);
    frames(&mut world, &mut schedule, 4, 0.4);
    assert_eq!(current(&world), Some(SceneId::Title));
}

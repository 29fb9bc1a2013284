//! La Leyenda de Jhulian.
//!
//! A small top-down action adventure built on:
//! - **raylib** for the window, drawing and input
//! - **bevy_ecs** for the entity-component-system architecture
//!
//! Dani crosses a forest and a cave, beats a boss after each, and finds
//! Jhulian waiting in the meadow.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (actors, colliders, tweens, phases, ...)
//! - [`events`] – Events and the observers that apply the game rules
//! - [`game`] – Asset setup and system registration
//! - [`resources`] – ECS resources (scenes, HUD, dialogue, camera effects, ...)
//! - [`scenes`] – One enter system per scene
//! - [`systems`] – ECS systems (input, movement, AI, collision, rendering, ...)
//!
//! # Main Loop
//!
//! 1. Read `config.ini` and the command line, open the window
//! 2. Insert resources, register observers and systems
//! 3. Enter the Setup state, which loads assets and switches to Playing
//! 4. Every frame: input, gameplay (paused while a dialogue is open),
//!    effects, scene switching and rendering
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --scene title
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod scenes;
mod systems;

use crate::components::persistent::Persistent;
use crate::events::gamestate::GameStateChangedEvent;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::switchdebug::switch_debug_observer;
use crate::events::switchfullscreen::switch_fullscreen_observer;
use crate::resources::camerafx::CameraFx;
use crate::resources::debugmode::DebugMode;
use crate::resources::dialogue::DialogueManager;
use crate::resources::fontstore::FontStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::hud::Hud;
use crate::resources::input::InputState;
use crate::resources::leveldata::LevelCatalog;
use crate::resources::levelprogress::LevelProgress;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::rng::GameRng;
use crate::resources::scene::{SceneId, SceneManager};
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::touch::{TouchControls, TouchMode};
use crate::resources::windowsize::WindowSize;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::scenes::gameover::gameover_input_system;
use crate::scenes::title::title_input_system;
use crate::scenes::victory::victory_input_system;
use crate::systems::animation::animation;
use crate::systems::boss::boss_status_system;
use crate::systems::camerafx::camera_fx_system;
use crate::systems::collision::collision_detector;
use crate::systems::dialogue::{dialogue_inactive, dialogue_system};
use crate::systems::enemy::{enemy_ai_system, enemy_status_system};
use crate::systems::gameconfig::apply_gameconfig_changes;
use crate::systems::gamestate::{check_pending_state, state_is_playing};
use crate::systems::input::{update_input_state, update_touch_controls};
use crate::systems::movement::{bounds_system, movement_system, solid_pushout_system};
use crate::systems::npc::{npc_interact_system, npc_prompt_system};
use crate::systems::phase::{phase_change_detector, phase_update_system};
use crate::systems::player::{player_control_system, player_status_system};
use crate::systems::render::render_system;
use crate::systems::scene::{check_pending_scene, in_gameover, in_gameplay, in_title, in_victory};
use crate::systems::time::{update_timers, update_world_time};
use crate::systems::ttl::ttl_system;
use crate::systems::tween::{
    bob_system, tween_alpha_system, tween_mapposition_system, tween_rotation_system,
    tween_scale_system,
};
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// La Leyenda de Jhulian
#[derive(Parser)]
#[command(version, about = "La Leyenda de Jhulian: a small top-down action adventure")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Scene to start in, skipping the loading screen.
    #[arg(long, value_enum)]
    scene: Option<SceneId>,

    /// Always show the on-screen touch controls.
    #[arg(long)]
    touch: bool,

    /// Start with the debug overlay on.
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }
    if let Some(scene) = cli.scene {
        config.start_scene = scene;
    }
    if cli.touch {
        config.touch_mode = TouchMode::Always;
    }
    config.debug |= cli.debug;

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("La Leyenda de Jhulian")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    // --------------- Render target for fixed-resolution rendering ---------------
    let render_width = config.render_width;
    let render_height = config.render_height;
    let render_target = match RenderTarget::new(&mut rl, &thread, render_width, render_height) {
        Ok(target) => target,
        Err(e) => {
            log::error!("Failed to create render target: {}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(WorldSignals::default());
    // ScreenSize is the game's internal render resolution (updated by apply_gameconfig_changes)
    world.insert_resource(ScreenSize {
        w: render_width as i32,
        h: render_height as i32,
    });
    // WindowSize is the actual window dimensions (updated each frame)
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(InputState::default());
    world.insert_resource(TouchControls::new(config.touch_mode));
    world.insert_resource(CameraFx::new(render_width as f32, render_height as f32));
    world.insert_resource(Hud::default());
    world.insert_resource(DialogueManager::default());
    world.insert_resource(SceneManager::default());
    world.insert_resource(LevelProgress::default());
    world.insert_resource(GameRng::default());
    world.insert_resource(TextureStore::default());
    if config.debug {
        world.insert_resource(DebugMode);
    }
    world.insert_resource(config);
    world.insert_non_send_resource(render_target);

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_non_send_resource(FontStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.spawn((Observer::new(observe_gamestate_change_event), Persistent));

    // NOTE: registered systems are stored as entities and must be Persistent
    // to survive scene changes.
    game::register_systems(&mut world);
    world.flush();

    // Set next GameState to Setup
    {
        let mut next_state = world.resource_mut::<NextGameState>();
        next_state.set(GameStates::Setup);
    }
    world.trigger(GameStateChangedEvent {}); // Call inmediatly to enter Setup state

    game::spawn_game_observers(&mut world);
    world.spawn((Observer::new(switch_debug_observer), Persistent));
    world.spawn((Observer::new(switch_fullscreen_observer), Persistent));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    if !world.contains_resource::<LevelCatalog>() {
        log::error!("No level catalogue after setup, exiting");
        std::process::exit(1);
    }

    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes.run_if(state_is_playing)); // Must run early to apply config before other systems
    update.add_systems((update_input_state, update_touch_controls).chain());
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(check_pending_scene.after(check_pending_state));

    // Gameplay freezes while a dialogue box is open
    update.add_systems(
        (
            player_control_system,
            enemy_ai_system,
            (phase_change_detector, phase_update_system).chain(),
            npc_interact_system,
        )
            .run_if(in_gameplay)
            .run_if(dialogue_inactive)
            .after(update_touch_controls)
            .before(movement_system),
    );
    update.add_systems(
        (movement_system, solid_pushout_system, bounds_system, collision_detector)
            .chain()
            .run_if(in_gameplay)
            .run_if(dialogue_inactive),
    );
    update.add_systems(
        (
            player_status_system,
            enemy_status_system,
            boss_status_system,
            npc_prompt_system,
        )
            .after(collision_detector),
    );
    update.add_systems(dialogue_system.after(npc_interact_system));

    update.add_systems((
        tween_mapposition_system,
        tween_rotation_system,
        tween_scale_system,
        tween_alpha_system,
        bob_system,
    ));
    update.add_systems(ttl_system.after(movement_system));
    update.add_systems(update_timers);
    update.add_systems(animation.after(player_status_system));

    update.add_systems(title_input_system.run_if(in_title).after(update_touch_controls));
    update.add_systems(victory_input_system.run_if(in_victory).after(update_touch_controls));
    update.add_systems(gameover_input_system.run_if(in_gameover).after(update_touch_controls));
    update.add_systems(
        camera_fx_system
            .after(title_input_system)
            .after(victory_input_system)
            .after(gameover_input_system)
            .after(dialogue_system),
    );

    update.add_systems(
        render_system
            .after(camera_fx_system)
            .after(animation)
            .after(npc_prompt_system),
    );

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }
    log::info!("Bye");
}

//! Game state hooks and system registration.
//!
//! `setup` loads the assets and the level catalogue and `enter_play` starts
//! the configured first scene. [`register_systems`] puts these hooks and every scene enter
//! system into the [`SystemsStore`]; [`spawn_game_observers`] hooks up the
//! observers that carry the game rules.

use std::path::Path;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{error, info, warn};

use crate::components::persistent::Persistent;
use crate::events::collision::observe_collision;
use crate::events::combat::{
    observe_boss_defeated, observe_boss_hit, observe_enemy_hit, observe_enemy_killed,
    observe_exit_reached, observe_meeting_reached, observe_player_damaged, observe_player_died,
    observe_player_hit,
};
use crate::events::dialogue::{observe_dialogue_closed, observe_timer_event};
use crate::events::scene::observe_scene_change_event;
use crate::resources::animationstore::AnimationStore;
use crate::resources::fontstore::{FontStore, MAIN_FONT};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::leveldata::LevelCatalog;
use crate::resources::scene::{SceneManager, SceneRequest};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::scenes::arena::enter_arena;
use crate::scenes::boot::enter_boot;
use crate::scenes::field::enter_field;
use crate::scenes::gameover::enter_gameover;
use crate::scenes::meadow::enter_meadow;
use crate::scenes::title::enter_title;
use crate::scenes::victory::enter_victory;

const FONT_PATH: &str = "./assets/fonts/PressStart2P-Regular.ttf";

/// Texture key and path of every sprite sheet the game draws.
const TEXTURES: &[(&str, &str)] = &[
    ("dani_walk", "./assets/characters/Dani/walk.png"),
    ("dani_idle", "./assets/characters/Dani/idle.png"),
    ("dani_slash", "./assets/characters/Dani/slash.png"),
    ("dani_hurt", "./assets/characters/Dani/hurt.png"),
    ("jhulian_walk", "./assets/characters/Jhulian/walk.png"),
    ("jhulian_idle", "./assets/characters/Jhulian/idle.png"),
    ("jhulian_slash", "./assets/characters/Jhulian/slash.png"),
    ("jhulian_hurt", "./assets/characters/Jhulian/hurt.png"),
    ("enemy_bat", "./assets/characters/Enemies/bat.png"),
    ("npc_echo", "./assets/characters/NPCs/friendly_echo.png"),
    ("boss_slime", "./assets/characters/Bosses/slime_king.png"),
];

pub fn setup(
    mut commands: Commands,
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut fonts: NonSendMut<FontStore>,
) {
    // raylib silently swaps a missing font file for its default font
    if Path::new(FONT_PATH).exists() {
        match rl.load_font(&th, FONT_PATH) {
            Ok(font) => fonts.add(MAIN_FONT, font),
            Err(e) => warn!("Failed to load font '{}': {}", FONT_PATH, e),
        }
    } else {
        warn!("Font '{}' not found, using the default font", FONT_PATH);
    }

    let mut textures = TextureStore::default();
    for (key, path) in TEXTURES {
        match rl.load_texture(&th, path) {
            Ok(texture) => textures.insert(*key, texture),
            Err(e) => warn!("Texture '{}' unavailable ({}), drawing placeholders", key, e),
        }
    }
    info!("Loaded {}/{} textures", textures.map.len(), TEXTURES.len());
    commands.insert_resource(textures);

    let mut animations = AnimationStore::new();
    animations.add_character("dani");
    animations.add_character("jhulian");
    commands.insert_resource(animations);

    if install_level_catalogue(LevelCatalog::embedded(), &mut commands, &mut next_state) {
        info!("Setup done, next state set to Playing");
    }
}

/// Insert the level catalogue and move on to Playing. A catalogue that does
/// not parse leaves the state at Setup and nothing to play.
pub fn install_level_catalogue(
    loaded: Result<LevelCatalog, String>,
    commands: &mut Commands,
    next_state: &mut NextGameState,
) -> bool {
    match loaded {
        Ok(catalog) => {
            commands.insert_resource(catalog);
            next_state.set(GameStates::Playing);
            true
        }
        Err(e) => {
            error!("Invalid level catalogue: {}", e);
            false
        }
    }
}

pub fn enter_play(config: Res<GameConfig>, mut scenes: ResMut<SceneManager>) {
    info!("Starting at {:?}", config.start_scene);
    scenes.request(SceneRequest::new(config.start_scene));
}

/// Register `system` under `name`. Registered systems live on entities, so
/// they are marked [`Persistent`] to survive scene changes.
fn register<M>(
    world: &mut World,
    store: &mut SystemsStore,
    name: &str,
    system: impl IntoSystem<(), (), M> + 'static,
) {
    let id = world.register_system(system);
    world.entity_mut(id.entity()).insert(Persistent);
    store.insert(name, id);
}

/// Scene enter systems, keyed by
/// [`SceneId::enter_system`](crate::resources::scene::SceneId::enter_system).
pub fn register_scene_systems(world: &mut World, store: &mut SystemsStore) {
    register(world, store, "enter_boot", enter_boot);
    register(world, store, "enter_title", enter_title);
    register(world, store, "enter_field", enter_field);
    register(world, store, "enter_meadow", enter_meadow);
    register(world, store, "enter_arena", enter_arena);
    register(world, store, "enter_victory", enter_victory);
    register(world, store, "enter_gameover", enter_gameover);
}

/// State hooks plus scene enter systems. Needs the raylib handle for
/// `setup`, so headless worlds use [`register_scene_systems`] instead.
pub fn register_systems(world: &mut World) {
    let mut store = SystemsStore::new();
    register(world, &mut store, "setup", setup);
    register(world, &mut store, "enter_play", enter_play);
    register_scene_systems(world, &mut store);
    world.insert_resource(store);
}

/// Observers that carry the game rules: scene switches, delayed dialogue,
/// collisions and their combat consequences.
pub fn spawn_game_observers(world: &mut World) {
    world.spawn((Observer::new(observe_scene_change_event), Persistent));
    world.spawn((Observer::new(observe_timer_event), Persistent));
    world.spawn((Observer::new(observe_dialogue_closed), Persistent));
    world.spawn((Observer::new(observe_collision), Persistent));
    world.spawn((Observer::new(observe_player_hit), Persistent));
    world.spawn((Observer::new(observe_player_damaged), Persistent));
    world.spawn((Observer::new(observe_player_died), Persistent));
    world.spawn((Observer::new(observe_enemy_hit), Persistent));
    world.spawn((Observer::new(observe_boss_hit), Persistent));
    world.spawn((Observer::new(observe_enemy_killed), Persistent));
    world.spawn((Observer::new(observe_exit_reached), Persistent));
    world.spawn((Observer::new(observe_meeting_reached), Persistent));
    world.spawn((Observer::new(observe_boss_defeated), Persistent));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::gamestate::{GameState, NextGameStates};
    use crate::resources::scene::SceneId;

    #[test]
    fn test_every_scene_has_an_enter_system() {
        let mut world = World::new();
        let mut store = SystemsStore::new();
        register_scene_systems(&mut world, &mut store);
        for scene in [
            SceneId::Boot,
            SceneId::Title,
            SceneId::Level1,
            SceneId::Level2,
            SceneId::Level3,
            SceneId::Boss,
            SceneId::Victory,
            SceneId::GameOver,
        ] {
            let id = store.get(scene.enter_system());
            assert!(id.is_some(), "{:?} has no enter system", scene);
            assert!(world.get::<Persistent>(id.unwrap().entity()).is_some());
        }
    }

    #[test]
    fn test_enter_play_requests_start_scene() {
        let mut world = World::new();
        let mut config = GameConfig::new();
        config.start_scene = SceneId::Level2;
        world.insert_resource(config);
        world.init_resource::<SceneManager>();
        let id = world.register_system(enter_play);
        world.run_system(id).unwrap();
        let pending = world.resource_mut::<SceneManager>().take_pending();
        assert_eq!(pending.map(|r| r.scene), Some(SceneId::Level2));
    }

    fn install(world: &mut World, loaded: Result<LevelCatalog, String>) -> bool {
        let id = world.register_system(
            move |mut commands: Commands, mut next: ResMut<NextGameState>| {
                install_level_catalogue(loaded.clone(), &mut commands, &mut next)
            },
        );
        world.run_system(id).unwrap()
    }

    fn setup_world() -> World {
        let mut world = World::new();
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.resource_mut::<GameState>().set(GameStates::Setup);
        world
    }

    #[test]
    fn test_valid_catalogue_moves_on_to_playing() {
        let mut world = setup_world();
        assert!(install(&mut world, LevelCatalog::embedded()));
        assert!(world.contains_resource::<LevelCatalog>());
        assert_eq!(
            world.resource::<NextGameState>().get(),
            NextGameStates::Pending(GameStates::Playing)
        );
    }

    #[test]
    fn test_broken_catalogue_stays_in_setup() {
        let mut world = setup_world();
        assert!(!install(&mut world, LevelCatalog::from_json("{\"fields\": [")));
        assert!(!world.contains_resource::<LevelCatalog>());
        assert_eq!(world.resource::<NextGameState>().get(), NextGameStates::Unchanged);
        assert_eq!(world.resource::<GameState>().get(), GameStates::Setup);
    }
}

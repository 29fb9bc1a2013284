//! Scene switching.
//!
//! Systems ask for a new scene through
//! [`SceneManager::request`](crate::resources::scene::SceneManager::request).
//! [`check_pending_scene`](crate::systems::scene::check_pending_scene) notices
//! the request and triggers [`SceneChangeEvent`]; the observer here tears the
//! old scene down and runs the enter system of the new one.
//!
//! Teardown despawns every entity without
//! [`Persistent`](crate::components::persistent::Persistent) and resets the
//! per-scene resources. The registry's `max_health` survives.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::{info, warn};

use crate::components::persistent::Persistent;
use crate::resources::camerafx::CameraFx;
use crate::resources::dialogue::DialogueManager;
use crate::resources::hud::Hud;
use crate::resources::levelprogress::LevelProgress;
use crate::resources::scene::SceneManager;
use crate::resources::systemsstore::SystemsStore;

#[derive(Event, Debug, Clone, Copy)]
pub struct SceneChangeEvent {}

/// Per-scene state cleared on every switch.
#[derive(SystemParam)]
pub struct SceneState<'w> {
    pub dialogue: ResMut<'w, DialogueManager>,
    pub hud: ResMut<'w, Hud>,
    pub progress: ResMut<'w, LevelProgress>,
    pub camera: ResMut<'w, CameraFx>,
}

impl SceneState<'_> {
    fn reset(&mut self) {
        self.dialogue.reset();
        *self.hud = Hud::default();
        *self.progress = LevelProgress::default();
        self.camera.reset();
    }
}

pub fn observe_scene_change_event(
    _trigger: On<SceneChangeEvent>,
    mut commands: Commands,
    mut scenes: ResMut<SceneManager>,
    mut state: SceneState,
    systems_store: Res<SystemsStore>,
    transient: Query<Entity, Without<Persistent>>,
) {
    let Some(request) = scenes.take_pending() else {
        return;
    };
    info!("Scene {:?} -> {:?}", scenes.current(), request.scene);

    let mut despawned = 0usize;
    for entity in transient.iter() {
        commands.entity(entity).try_despawn();
        despawned += 1;
    }
    log::debug!("Despawned {} scene entities", despawned);

    state.reset();
    let system = request.scene.enter_system();
    scenes.enter(request);
    match systems_store.get(system) {
        Some(id) => commands.run_system(id),
        None => warn!("Scene system '{}' not found in SystemsStore", system),
    }
}

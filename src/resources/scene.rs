//! Scene bookkeeping.
//!
//! Scenes are identified by [`SceneId`] and started through a
//! [`SceneRequest`]. Systems never switch scenes directly: they call
//! [`SceneManager::request`], and
//! [`check_pending_scene`](crate::systems::scene::check_pending_scene) turns
//! the pending request into a
//! [`SceneChangeEvent`](crate::events::scene::SceneChangeEvent) whose observer
//! tears the old scene down and runs the new scene's enter system.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::components::boss::BossConfig;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum SceneId {
    Boot,
    Title,
    Level1,
    Level2,
    Level3,
    Boss,
    Victory,
    GameOver,
}

impl SceneId {
    /// Key of the scene's enter system in
    /// [`SystemsStore`](super::systemsstore::SystemsStore).
    pub fn enter_system(&self) -> &'static str {
        match self {
            SceneId::Boot => "enter_boot",
            SceneId::Title => "enter_title",
            SceneId::Level1 | SceneId::Level2 => "enter_field",
            SceneId::Level3 => "enter_meadow",
            SceneId::Boss => "enter_arena",
            SceneId::Victory => "enter_victory",
            SceneId::GameOver => "enter_gameover",
        }
    }

    /// Scenes where the player walks around and the touch pad is drawn.
    pub fn is_gameplay(&self) -> bool {
        matches!(
            self,
            SceneId::Level1 | SceneId::Level2 | SceneId::Level3 | SceneId::Boss
        )
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boot" => Some(SceneId::Boot),
            "title" => Some(SceneId::Title),
            "level1" => Some(SceneId::Level1),
            "level2" => Some(SceneId::Level2),
            "level3" => Some(SceneId::Level3),
            "boss" => Some(SceneId::Boss),
            "victory" => Some(SceneId::Victory),
            "gameover" | "game-over" => Some(SceneId::GameOver),
            _ => None,
        }
    }
}

/// Everything the arena needs to stage a fight and what follows it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BossEncounter {
    pub boss: BossConfig,
    pub win_message: Vec<String>,
    pub next_scene: SceneId,
    pub bg_color: u32,
    pub arena_color: u32,
}

impl Default for BossEncounter {
    fn default() -> Self {
        Self {
            boss: BossConfig::arena_default(),
            win_message: vec!["¡Victoria!".into()],
            next_scene: SceneId::Title,
            bg_color: 0x1a1a2a,
            arena_color: 0x1a1a2a,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SceneParams {
    #[default]
    None,
    Boss(BossEncounter),
    GameOver { restart: Box<SceneRequest> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneRequest {
    pub scene: SceneId,
    pub params: SceneParams,
}

impl SceneRequest {
    pub fn new(scene: SceneId) -> Self {
        Self {
            scene,
            params: SceneParams::None,
        }
    }

    pub fn boss(encounter: BossEncounter) -> Self {
        Self {
            scene: SceneId::Boss,
            params: SceneParams::Boss(encounter),
        }
    }

    pub fn game_over(restart: SceneRequest) -> Self {
        Self {
            scene: SceneId::GameOver,
            params: SceneParams::GameOver {
                restart: Box::new(restart),
            },
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct SceneManager {
    current: Option<SceneId>,
    params: SceneParams,
    pending: Option<SceneRequest>,
}

impl SceneManager {
    pub fn current(&self) -> Option<SceneId> {
        self.current
    }

    /// The request that would start the current scene again.
    pub fn current_request(&self) -> Option<SceneRequest> {
        self.current.map(|scene| SceneRequest {
            scene,
            params: self.params.clone(),
        })
    }

    /// Ask for a scene switch on the next frame. A later request replaces an
    /// earlier one.
    pub fn request(&mut self, request: SceneRequest) {
        log::debug!("Scene {:?} requested", request.scene);
        self.pending = Some(request);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn take_pending(&mut self) -> Option<SceneRequest> {
        self.pending.take()
    }

    /// Record `request` as the running scene.
    pub fn enter(&mut self, request: SceneRequest) {
        self.current = Some(request.scene);
        self.params = request.params;
    }

    /// The encounter of the running boss fight, or the default fight.
    pub fn encounter(&self) -> BossEncounter {
        match &self.params {
            SceneParams::Boss(encounter) => encounter.clone(),
            _ => BossEncounter::default(),
        }
    }

    /// What "retry" on the game-over screen should start.
    pub fn restart_request(&self) -> SceneRequest {
        match &self.params {
            SceneParams::GameOver { restart } => (**restart).clone(),
            _ => SceneRequest::new(SceneId::Level1),
        }
    }
}

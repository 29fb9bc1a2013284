//! Friendly characters that talk.
//!
//! An [`Npc`] shows an "[ E ]" prompt while the player stands within its
//! interaction range and hands its lines to the
//! [`DialogueManager`](crate::resources::dialogue::DialogueManager) when the
//! player interacts.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::shape::NpcLook;

/// Vertical offset of the interaction prompt.
pub const PROMPT_OFFSET: f32 = -28.0;

/// NPC entry in the level catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NpcConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub look: NpcLook,
    pub x: f32,
    pub y: f32,
    pub dialogues: Vec<String>,
    pub interaction_range: f32,
    /// Drawing scale of the placeholder figure.
    pub scale: f32,
}

impl Default for NpcConfig {
    fn default() -> Self {
        Self {
            name: "NPC".into(),
            look: NpcLook::Generic,
            x: 0.0,
            y: 0.0,
            dialogues: vec!["...".into()],
            interaction_range: 50.0,
            scale: 1.0,
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct Npc {
    pub name: String,
    pub dialogues: Vec<String>,
    pub interaction_range: f32,
    pub has_interacted: bool,
    pub prompt_visible: bool,
}

impl Npc {
    pub fn from_config(config: &NpcConfig) -> Self {
        let dialogues = if config.dialogues.is_empty() {
            vec!["...".to_string()]
        } else {
            config.dialogues.clone()
        };
        Self {
            name: config.name.clone(),
            dialogues,
            interaction_range: config.interaction_range,
            has_interacted: false,
            prompt_visible: false,
        }
    }

    pub fn in_range(&self, position: Vector2, player: Vector2) -> bool {
        (player - position).length() < self.interaction_range
    }

    /// Prompt opacity at world time `t`.
    pub fn prompt_alpha(t: f32) -> f32 {
        (0.7 + (t * 5.0).sin() * 0.3).clamp(0.0, 1.0)
    }
}

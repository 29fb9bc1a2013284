//! Level content catalogue.
//!
//! Positions, stats and lines of the three missions live in
//! `assets/data/levels.json`, compiled into the binary with `include_str!`
//! and parsed once at startup into a [`LevelCatalog`] resource.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::components::enemy::EnemyConfig;
use crate::components::npc::NpcConfig;
use crate::resources::scene::{BossEncounter, SceneId};

const EMBEDDED: &str = include_str!("../../assets/data/levels.json");

/// Randomly scattered ground circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchSpec {
    pub count: usize,
    pub colors: Vec<u32>,
    /// Opacity range (min, max).
    pub alpha: [f32; 2],
    /// Radius range (min, max).
    pub radius: [f32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Tree,
    Rock,
}

/// A combat level: obstacles, one NPC, an enemy pack and an exit to the boss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldLevel {
    pub scene: SceneId,
    pub mission: String,
    pub background: u32,
    pub fade_in: f32,
    pub ground: PatchSpec,
    pub obstacle: ObstacleKind,
    pub obstacles: Vec<[f32; 2]>,
    pub npc: NpcConfig,
    pub enemy: EnemyConfig,
    pub enemies: Vec<[f32; 2]>,
    pub intro: Vec<String>,
    #[serde(default)]
    pub darkness: bool,
    pub encounter: BossEncounter,
}

/// The final, peaceful level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeadowLevel {
    pub mission: String,
    pub background: u32,
    pub fade_in: f32,
    pub grass: PatchSpec,
    pub flowers: usize,
    pub petals: Vec<u32>,
    pub player: [f32; 2],
    pub jhulian: [f32; 2],
    pub npcs: Vec<NpcConfig>,
    pub intro: Vec<String>,
    pub meeting: Vec<String>,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelCatalog {
    pub fields: Vec<FieldLevel>,
    pub meadow: MeadowLevel,
}

impl LevelCatalog {
    pub fn from_json(text: &str) -> Result<Self, String> {
        let catalog: LevelCatalog = serde_json::from_str(text)
            .map_err(|e| format!("Failed to parse level catalogue: {}", e))?;
        for level in &catalog.fields {
            if level.ground.colors.is_empty() {
                return Err(format!("Level {:?} has no ground colours", level.scene));
            }
        }
        if catalog.meadow.grass.colors.is_empty() || catalog.meadow.petals.is_empty() {
            return Err("Meadow needs grass and petal colours".to_string());
        }
        Ok(catalog)
    }

    /// The catalogue compiled into the binary.
    pub fn embedded() -> Result<Self, String> {
        Self::from_json(EMBEDDED)
    }

    pub fn field(&self, scene: SceneId) -> Option<&FieldLevel> {
        self.fields.iter().find(|l| l.scene == scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::boss::BossPattern;
    use crate::components::shape::{BossLook, EnemyLook};

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = LevelCatalog::embedded().unwrap();
        assert_eq!(catalog.fields.len(), 2);
        let l1 = catalog.field(SceneId::Level1).unwrap();
        assert_eq!(l1.obstacle, ObstacleKind::Tree);
        assert_eq!(l1.obstacles.len(), 15);
        assert_eq!(l1.enemies.len(), 6);
        assert_eq!(l1.enemy.look, EnemyLook::Bat);
        // Unlisted stats keep their defaults
        assert_eq!(l1.enemy.size, 28.0);
        assert_eq!(l1.encounter.boss.look, BossLook::Slime);
        assert_eq!(l1.encounter.next_scene, SceneId::Level2);
        assert!(!l1.darkness);
    }

    #[test]
    fn test_second_level_leads_to_meadow() {
        let catalog = LevelCatalog::embedded().unwrap();
        let l2 = catalog.field(SceneId::Level2).unwrap();
        assert!(l2.darkness);
        assert_eq!(l2.enemies.len(), 8);
        assert_eq!(l2.encounter.boss.pattern, BossPattern::Area);
        assert_eq!(l2.encounter.next_scene, SceneId::Level3);
        assert!(catalog.field(SceneId::Level3).is_none());
    }

    #[test]
    fn test_meadow_content() {
        let catalog = LevelCatalog::embedded().unwrap();
        assert_eq!(catalog.meadow.npcs.len(), 2);
        assert_eq!(catalog.meadow.meeting.len(), 5);
        assert_eq!(catalog.meadow.jhulian, [720.0, 300.0]);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = LevelCatalog::from_json("{ nope").unwrap_err();
        assert!(err.starts_with("Failed to parse level catalogue"));
    }
}

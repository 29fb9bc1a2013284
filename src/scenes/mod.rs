//! Scene enter systems and the per-scene input handlers.
//!
//! Every scene has one enter system, registered by name in
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! the scene change observer after the previous scene was torn down. The
//! helpers in this module spawn the actors shared by several scenes.
//!
//! - [`boot`] – loading screen
//! - [`title`] – title screen and its start input
//! - [`field`] – the forest and cave combat levels
//! - [`meadow`] – the last level, where Jhulian waits
//! - [`arena`] – boss fights
//! - [`victory`] – ending sequence
//! - [`gameover`] – retry screen

pub mod arena;
pub mod boot;
pub mod field;
pub mod gameover;
pub mod meadow;
pub mod title;
pub mod victory;

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use crate::components::animation::Animation;
use crate::components::bob::Bob;
use crate::components::boss::{Boss, BossConfig};
use crate::components::boxcollider::{BoxCollider, Bounded};
use crate::components::dynamictext::DynamicText;
use crate::components::enemy::{Enemy, EnemyConfig};
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::npc::{self, Npc, NpcConfig};
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::shape::{BossLook, EnemyLook, NpcLook, Shape};
use crate::components::sprite::Sprite;
use crate::components::timer::{PendingDialogue, Timer};
use crate::components::tint::{rgb, Tint};
use crate::components::zindex::ZIndex;
use crate::events::dialogue::DIALOGUE_SIGNAL;
use crate::resources::fontstore::MAIN_FONT;
use crate::resources::leveldata::PatchSpec;
use crate::resources::rng::GameRng;
use crate::systems::boss::boss_phase;
use crate::systems::npc::NpcPrompt;

/// Delay before a level's opening dialogue.
pub const INTRO_DELAY: f32 = 0.5;

/// Text in the game font.
pub fn text(content: impl Into<String>, size: f32, color: u32) -> DynamicText {
    DynamicText::new(content, MAIN_FONT, size, rgb(color))
}

/// Black drop shadow used by titles and labels.
pub fn shadowed(content: impl Into<String>, size: f32, color: u32, shadow: u32) -> DynamicText {
    text(content, size, color).with_shadow(Vector2::new(3.0, 3.0), rgb(shadow))
}

/// Dialogue opened after `delay` seconds by a timer entity.
pub fn queue_dialogue(commands: &mut Commands, delay: f32, speaker: impl Into<String>, lines: Vec<String>) -> Entity {
    commands
        .spawn((Timer::new(delay, DIALOGUE_SIGNAL), PendingDialogue::new(speaker, lines)))
        .id()
}

/// Ground decoration: random translucent circles over the whole view.
pub fn spawn_patches(commands: &mut Commands, rng: &mut GameRng, spec: &PatchSpec, width: f32, height: f32) {
    if spec.colors.is_empty() {
        return;
    }
    for _ in 0..spec.count {
        let color = spec.colors[rng.0.usize(..spec.colors.len())];
        let alpha = rng.range(spec.alpha[0], spec.alpha[1]);
        let radius = rng.range(spec.radius[0], spec.radius[1]);
        commands.spawn((
            MapPosition::new(rng.range(0.0, width), rng.range(0.0, height)),
            Shape::circle(radius, rgb(color)),
            Tint::alpha(alpha),
            ZIndex(0),
        ));
    }
}

/// Dani, with her full health taken from the registry.
pub fn spawn_player(commands: &mut Commands, at: Vector2, max_health: i32, bounds: Bounded) -> Entity {
    commands
        .spawn((
            Player::new(max_health),
            MapPosition::from_vec(at),
            RigidBody::new(),
            BoxCollider::new(20.0, 16.0).with_offset(Vector2::new(-10.0, 12.0)),
            bounds,
            Group::new("player"),
            Sprite::sheet("dani_idle", 64.0, 26),
            Animation::new("dani-idle-down"),
            Shape::Hero,
            Tint::default(),
            Scale::default(),
            Rotation::default(),
            ZIndex(10),
        ))
        .id()
}

/// A friendly character and the "[ E ]" prompt floating above it.
pub fn spawn_npc(commands: &mut Commands, config: &NpcConfig) -> Entity {
    let at = Vector2::new(config.x, config.y);
    let mut entity = commands.spawn((
        Npc::from_config(config),
        MapPosition::from_vec(at),
        Shape::Npc { look: config.look },
        Scale::uniform(config.scale),
        Tint::default(),
        Bob::new(-5.0, 1.2),
        ZIndex(8),
    ));
    if config.look == NpcLook::Echo {
        entity.insert(Sprite::image("npc_echo", 32.0, 32.0));
    }
    let npc = entity.id();
    commands.spawn((
        MapPosition::new(at.x, at.y + npc::PROMPT_OFFSET),
        text("[ E ]", 7.0, 0xffcc44).with_origin(0.5, 1.0),
        Tint::alpha(0.0),
        NpcPrompt { npc },
        ZIndex(20),
    ));
    npc
}

pub fn spawn_enemy(commands: &mut Commands, config: &EnemyConfig, at: Vector2, bounds: Bounded) -> Entity {
    let mut entity = commands.spawn((
        Enemy::from_config(config),
        MapPosition::from_vec(at),
        RigidBody::new(),
        BoxCollider::centered(config.size, config.size),
        bounds,
        Group::new("enemy"),
        Shape::Enemy {
            look: config.look,
            size: config.size,
            color: rgb(config.color),
        },
        Tint::default(),
        Scale::default(),
        ZIndex(8),
    ));
    if config.look == EnemyLook::Bat {
        let display = config.size * 1.5;
        entity.insert((Sprite::image("enemy_bat", display, display), Bob::new(-5.0, 0.6)));
    }
    entity.id()
}

pub fn spawn_boss(commands: &mut Commands, config: &BossConfig, at: Vector2, bounds: Bounded) -> Entity {
    let mut entity = commands.spawn((
        Boss::from_config(config),
        boss_phase(),
        MapPosition::from_vec(at),
        RigidBody::new(),
        BoxCollider::centered(config.size, config.size),
        bounds,
        Group::new("boss"),
        Shape::Boss {
            look: config.look,
            size: config.size,
            color: rgb(config.color),
        },
        Tint::default(),
        Scale::default(),
        ZIndex(9),
    ));
    if config.look == BossLook::Slime {
        let display = config.size * 1.2;
        entity.insert(Sprite::image("boss_slime", display, display));
    }
    entity.id()
}

/// Straight segment between two points.
pub fn line(from: Vector2, to: Vector2, thickness: f32, color: Color) -> (MapPosition, Shape) {
    (
        MapPosition::from_vec(from),
        Shape::Line {
            to: to - from,
            thickness,
            color,
        },
    )
}

//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance sprite-sheet animations
//! - [`boss`] – the boss phase machine and its hit/death feedback
//! - [`camerafx`] – advance fades, flashes and shake; finish fade-outs
//! - [`collision`] – simple overlap checks and event emission
//! - [`dialogue`] – typewriter, advancing and closing the dialogue box
//! - [`enemy`] – enemy wandering, chasing and hit/death feedback
//! - [`gameconfig`] – apply `config.ini` changes to the window
//! - [`gamestate`] – check for pending state transitions and trigger events
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – integrate velocities, push out of solids, clamp to bounds
//! - [`npc`] – interaction prompts and conversations
//! - [`phase`] – run [`crate::components::phase::Phase`] callbacks
//! - [`player`] – Dani's movement, sword and hurt/death feedback
//! - [`render`] – draw the world, HUD and overlays using Raylib
//! - [`scene`] – pending scene switches and per-scene run conditions
//! - [`time`] – update simulation time and delta, process timers
//! - [`ttl`] – despawn short-lived entities
//! - [`tween`] – animate position, rotation, scale and opacity over time

pub mod animation;
pub mod boss;
pub mod camerafx;
pub mod collision;
pub mod dialogue;
pub mod enemy;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod npc;
pub mod phase;
pub mod player;
pub mod render;
pub mod scene;
pub mod time;
pub mod ttl;
pub mod tween;

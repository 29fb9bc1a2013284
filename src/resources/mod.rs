//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – sprite-sheet animation definitions
//! - `camerafx` – background color, fades, flashes and screen shake
//! - `debugmode` – presence toggles the debug overlay
//! - `dialogue` – the dialogue box and its typewriter state
//! - `fontstore` / `texturestore` – loaded raylib assets
//! - `fullscreen` – presence marks fullscreen mode
//! - `gameconfig` – settings read from `config.ini`
//! - `gamestate` – engine lifecycle state and pending transition
//! - `hud` – hearts, mission line and boss health bar
//! - `input` – per-frame keyboard and pointer state
//! - `leveldata` – data-driven level catalogue
//! - `levelprogress` – kill count and exit/meeting/boss flags for a scene
//! - `rendertarget` / `windowsize` / `screensize` – fixed view and letterboxing
//! - `rng` – seedable random source
//! - `scene` – current scene, pending scene request and its parameters
//! - `systemsstore` – one-shot systems by name
//! - `touch` – on-screen touch buttons
//! - `worldsignals` – cross-scene values (max health, ...) and entity lookups
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod camerafx;
pub mod debugmode;
pub mod dialogue;
pub mod fontstore;
pub mod fullscreen;
pub mod gameconfig;
pub mod gamestate;
pub mod hud;
pub mod input;
pub mod leveldata;
pub mod levelprogress;
pub mod rendertarget;
pub mod rng;
pub mod scene;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod touch;
pub mod windowsize;
pub mod worldsignals;
pub mod worldtime;

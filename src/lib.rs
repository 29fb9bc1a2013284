//! La Leyenda de Jhulian library.
//!
//! Exposes the game's ECS components, resources, systems, events and scenes
//! for the integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod scenes;
pub mod systems;

//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world: placement and motion, collision, drawing, animation and
//! the gameplay actors themselves.
//!
//! Submodules overview:
//! - [`animation`] – playback state for sprite-sheet animations
//! - [`bob`] – render-only floating offset
//! - [`boss`] – boss stats and shared phase state
//! - [`boxcollider`] – axis-aligned colliders, static solids and bounds
//! - [`darkness`] – cave overlay with a vision hole
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`enemy`] – roaming enemies that wander and chase
//! - [`group`] – tag component for grouping entities by name
//! - [`hitbox`] – the sword slash
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`npc`] – friendly characters with dialogue
//! - [`persistent`] – marker for entities that survive scene changes
//! - [`phase`] – string-labelled state machine with callbacks
//! - [`player`] – Dani, the player character
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – 2D scale factor for drawing
//! - [`shape`] – procedural placeholder graphics
//! - [`sprite`] – sprite-sheet frame
//! - [`timer`] – countdown timer that emits events when finished
//! - [`tint`] – color modulation and opacity
//! - [`trigger`] – exit and meeting zones
//! - [`ttl`] – time-to-live for short-lived entities
//! - [`tween`] – animated interpolation of position, rotation, scale and alpha
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod bob;
pub mod boss;
pub mod boxcollider;
pub mod darkness;
pub mod dynamictext;
pub mod enemy;
pub mod group;
pub mod hitbox;
pub mod mapposition;
pub mod npc;
pub mod persistent;
pub mod phase;
pub mod player;
pub mod rigidbody;
pub mod rotation;
pub mod scale;
pub mod shape;
pub mod sprite;
pub mod timer;
pub mod tint;
pub mod trigger;
pub mod ttl;
pub mod tween;
pub mod zindex;

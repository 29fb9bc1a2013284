//! Z-index component for render ordering.
//!
//! Higher values draw on top. The layers used by the scenes:
//! ground decoration 0, exit/path 1, ambient particles 2, actors 5..10,
//! sword 11, combat particles 12, floating labels 20, darkness 50.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ZIndex(pub i32);

//! Group tag component.
//!
//! The collision router dispatches on these names: `"player"`, `"enemy"`,
//! `"boss"`, `"hitbox"`, `"npc"`, `"exit"` and `"meeting"`.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(pub &'static str);

impl Group {
    pub fn new(name: &'static str) -> Self {
        Group(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }

    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}

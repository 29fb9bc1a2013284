use bevy_ecs::prelude::Component;

/// What happens when the player enters a [`TriggerZone`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerKind {
    /// Level exit, closed until enough enemies are defeated.
    Exit,
    /// Jhulian's meeting spot in the meadow.
    Meeting,
}

/// Invisible area the player can walk into. Inactive zones are ignored.
#[derive(Component, Clone, Copy, Debug)]
pub struct TriggerZone {
    pub kind: TriggerKind,
    pub active: bool,
}

impl TriggerZone {
    pub fn exit() -> Self {
        Self {
            kind: TriggerKind::Exit,
            active: false,
        }
    }

    pub fn meeting() -> Self {
        Self {
            kind: TriggerKind::Meeting,
            active: true,
        }
    }
}

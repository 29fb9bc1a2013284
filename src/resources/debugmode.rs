use bevy_ecs::prelude::Resource;

/// Present while the debug overlay is on (collider boxes, positions, FPS).
/// Toggled with F11 through
/// [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;

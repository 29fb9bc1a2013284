use bevy_ecs::prelude::Resource;

/// Present while the window is fullscreen. Toggled with F10 through
/// [`SwitchFullScreenEvent`](crate::events::switchfullscreen::SwitchFullScreenEvent).
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct FullScreen;

//! Timer expiration events.
//!
//! When a [`Timer`](crate::components::timer::Timer) reaches its duration,
//! [`update_timers`](crate::systems::time::update_timers) triggers a
//! [`TimerEvent`] carrying the timer's signal. Scenes use timers for delayed
//! dialogue and the boot screen hand-off; see
//! [`observe_timer_event`](crate::events::dialogue::observe_timer_event).

use bevy_ecs::prelude::*;

/// Event emitted when a timer expires.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity whose timer expired.
    pub entity: Entity,
    /// The signal name configured on the timer.
    pub signal: String,
}

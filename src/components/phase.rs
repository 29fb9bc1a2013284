//! State machine component for scripted behaviour.
//!
//! The [`Phase`] component is a finite state machine whose states are string
//! labels (`"idle"`, `"telegraph"`, `"charging"`, ...). Each label can carry
//! three callbacks:
//!
//! - `on_enter` – called once when entering a phase
//! - `on_update` – called every frame while in the phase
//! - `on_exit` – called once when leaving a phase
//!
//! A transition is requested by setting `next` (or returning a label from
//! `on_update`) and is applied on the following frame by
//! [`phase_change_detector`](crate::systems::phase::phase_change_detector).
//!
//! # Example
//!
//! ```ignore
//! fn idle_update(entity: Entity, time: f32, prev: Option<String>, ctx: &mut PhaseContext) -> Option<String> {
//!     (time >= 1.5).then(|| "telegraph".into())
//! }
//!
//! commands.spawn((Boss::from_config(&cfg), Phase::new("idle").on_update("idle", idle_update)));
//! ```

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;
use std::fmt;

use crate::components::boss::Boss;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::resources::camerafx::CameraFx;
use crate::resources::rng::GameRng;
use crate::resources::worldtime::WorldTime;

/// Context passed to phase callbacks.
///
/// Bundles the queries and resources a callback may read or change so that
/// callbacks never need direct world access.
pub struct PhaseContext<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub positions: &'a mut Query<'w, 's, &'static mut MapPosition>,
    pub rigid_bodies: &'a mut Query<'w, 's, &'static mut RigidBody>,
    pub scales: &'a mut Query<'w, 's, &'static mut Scale>,
    pub bosses: &'a mut Query<'w, 's, &'static mut Boss>,
    pub players: &'a Query<'w, 's, (Entity, &'static Player)>,
    pub camera: &'a mut ResMut<'w, CameraFx>,
    pub world_time: &'a Res<'w, WorldTime>,
    pub rng: &'a mut ResMut<'w, GameRng>,
}

impl PhaseContext<'_, '_, '_> {
    /// Position of the living player, if any.
    pub fn living_player(&self) -> Option<Vector2> {
        let (entity, player) = self.players.iter().next()?;
        if !player.alive {
            return None;
        }
        self.positions.get(entity).ok().map(|p| p.pos)
    }
}

/// Function pointer type for phase callbacks.
///
/// Receives the entity, the seconds spent in the current phase (0.0 for
/// `on_enter`), the previous phase and the [`PhaseContext`]. Returning
/// `Some(label)` from `on_update` requests a transition; the return value of
/// `on_enter` and `on_exit` is ignored.
pub type PhaseCallback = for<'a, 'w, 's> fn(
    Entity,
    time: f32,
    previous: Option<String>,
    ctx: &mut PhaseContext<'a, 'w, 's>,
) -> Option<String>;

#[derive(Component, Clone)]
pub struct Phase {
    /// The current phase label.
    pub current: String,
    /// The phase before the last transition, if any.
    pub previous: Option<String>,
    /// Set to request a transition. Cleared after processing.
    pub next: Option<String>,
    /// Seconds elapsed since entering the current phase.
    pub time_in_phase: f32,
    pub on_enter: FxHashMap<String, PhaseCallback>,
    pub on_update: FxHashMap<String, PhaseCallback>,
    pub on_exit: FxHashMap<String, PhaseCallback>,
}

impl Phase {
    pub fn new(initial_phase: impl Into<String>) -> Self {
        Self {
            current: initial_phase.into(),
            previous: None,
            next: None,
            time_in_phase: 0.0,
            on_enter: FxHashMap::default(),
            on_update: FxHashMap::default(),
            on_exit: FxHashMap::default(),
        }
    }

    /// Request a transition on the next frame.
    pub fn transition_to(&mut self, next_phase: impl Into<String>) {
        self.next = Some(next_phase.into());
    }

    pub fn on_enter(mut self, phase: impl Into<String>, callback: PhaseCallback) -> Self {
        self.on_enter.insert(phase.into(), callback);
        self
    }

    pub fn on_update(mut self, phase: impl Into<String>, callback: PhaseCallback) -> Self {
        self.on_update.insert(phase.into(), callback);
        self
    }

    pub fn on_exit(mut self, phase: impl Into<String>, callback: PhaseCallback) -> Self {
        self.on_exit.insert(phase.into(), callback);
        self
    }

    pub fn is(&self, label: &str) -> bool {
        self.current == label
    }
}

impl fmt::Debug for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Phase")
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("next", &self.next)
            .field("time_in_phase", &self.time_in_phase)
            .field("on_enter", &self.on_enter.keys().collect::<Vec<_>>())
            .field("on_update", &self.on_update.keys().collect::<Vec<_>>())
            .field("on_exit", &self.on_exit.keys().collect::<Vec<_>>())
            .finish()
    }
}

//! Game state transition event and observer.
//!
//! Systems request a change to the high-level [`GameStates`] by updating
//! [`NextGameState`]. Emitting a [`GameStateChangedEvent`] then triggers
//! [`observe_gamestate_change_event`], which applies the transition to
//! [`GameState`] and runs the hook registered for the new state in
//! [`SystemsStore`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], clears the pending
///   value and runs the hook named by [`GameStates::hook`].
/// - A hook missing from [`SystemsStore`] is logged and skipped.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: ResMut<NextGameState>,
    mut game_state: ResMut<GameState>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");
    match next_game_state.get() {
        Pending(new_state) => {
            let old_state = game_state.get();
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state);
            next_game_state.reset();
            on_state_enter(new_state, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

fn on_state_enter(state: GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(hook) = state.hook() else {
        debug!("Entered {:?} state", state);
        return;
    };
    match systems_store.get(hook) {
        Some(id) => commands.run_system(id),
        None => warn!("System '{}' for state {:?} not found in SystemsStore", hook, state),
    }
}

//! Engine lifecycle state.
//!
//! [`GameState`] is coarse: it only says whether the window and stores are
//! being set up or the game is running. What
//! the player sees (title, levels, boss fight...) is tracked separately by
//! [`SceneManager`](super::scene::SceneManager).
//!
//! Transitions go through [`NextGameState`]; `check_pending_state` notices
//! a pending value and triggers the observer in
//! `crate::events::gamestate`, which runs the registered hook for the new
//! state.

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    Setup,
    Playing,
}

impl GameStates {
    /// Name of the hook in [`SystemsStore`](super::systemsstore::SystemsStore)
    /// that runs when this state is entered.
    pub fn hook(&self) -> Option<&'static str> {
        match self {
            GameStates::None => None,
            GameStates::Setup => Some("setup"),
            GameStates::Playing => Some("enter_play"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

#[derive(Resource, Debug, Clone, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> GameStates {
        self.current
    }

    /// Set the state without running hooks. Use [`NextGameState`] instead
    /// when the hook for the new state must run.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> NextGameStates {
        self.next
    }

    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}

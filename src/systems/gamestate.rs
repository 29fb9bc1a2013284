//! Engine lifecycle checks.
//!
//! [`check_pending_state`] fires a [`GameStateChangedEvent`] whenever a new
//! [`GameStates`] value is queued; the observer then runs the state's hook
//! from the [`SystemsStore`](crate::resources::systemsstore::SystemsStore).
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use bevy_ecs::prelude::*;

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(new_state) = next_state.get() {
        log::debug!("Pending game state {:?}", new_state);
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct Fired(usize);

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.init_resource::<Fired>();
        world.add_observer(|_t: On<GameStateChangedEvent>, mut f: ResMut<Fired>| f.0 += 1);
        world
    }

    #[test]
    fn test_event_only_when_pending() {
        let mut world = world();
        let mut schedule = Schedule::default();
        schedule.add_systems(check_pending_state);
        schedule.run(&mut world);
        assert_eq!(world.resource::<Fired>().0, 0);
        world.resource_mut::<NextGameState>().set(GameStates::Playing);
        schedule.run(&mut world);
        assert_eq!(world.resource::<Fired>().0, 1);
    }

    #[test]
    fn test_playing_condition() {
        let mut world = world();
        let mut schedule = Schedule::default();
        schedule.add_systems(
            (|mut f: ResMut<Fired>| f.0 += 10).run_if(state_is_playing),
        );
        schedule.run(&mut world);
        assert_eq!(world.resource::<Fired>().0, 0);
        world.resource_mut::<GameState>().set(GameStates::Playing);
        schedule.run(&mut world);
        assert_eq!(world.resource::<Fired>().0, 10);
    }
}

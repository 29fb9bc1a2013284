//! Scene switching and scene-scoped run conditions.
//!
//! [`check_pending_scene`] triggers
//! [`SceneChangeEvent`](crate::events::scene::SceneChangeEvent) when a scene
//! was requested during the frame. The `in_*` functions are run conditions
//! used to gate the per-scene systems in the update schedule.
use bevy_ecs::prelude::*;

use crate::events::scene::SceneChangeEvent;
use crate::resources::scene::{SceneId, SceneManager};

pub fn check_pending_scene(mut commands: Commands, scenes: Res<SceneManager>) {
    if scenes.has_pending() {
        commands.trigger(SceneChangeEvent {});
    }
}

/// A level or the boss arena is running.
pub fn in_gameplay(scenes: Res<SceneManager>) -> bool {
    scenes.current().is_some_and(|scene| scene.is_gameplay())
}

pub fn in_title(scenes: Res<SceneManager>) -> bool {
    scenes.current() == Some(SceneId::Title)
}

pub fn in_victory(scenes: Res<SceneManager>) -> bool {
    scenes.current() == Some(SceneId::Victory)
}

pub fn in_gameover(scenes: Res<SceneManager>) -> bool {
    scenes.current() == Some(SceneId::GameOver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::scene::SceneRequest;

    #[derive(Resource, Default)]
    struct Count(usize);

    #[test]
    fn test_change_event_only_with_request() {
        let mut world = World::new();
        world.init_resource::<SceneManager>();
        world.init_resource::<Count>();
        world.add_observer(|_t: On<SceneChangeEvent>, mut c: ResMut<Count>| c.0 += 1);
        let mut schedule = Schedule::default();
        schedule.add_systems(check_pending_scene);
        schedule.run(&mut world);
        assert_eq!(world.resource::<Count>().0, 0);
        world
            .resource_mut::<SceneManager>()
            .request(SceneRequest::new(SceneId::Title));
        schedule.run(&mut world);
        assert_eq!(world.resource::<Count>().0, 1);
    }

    #[test]
    fn test_gameplay_condition_follows_scene() {
        let mut world = World::new();
        world.init_resource::<SceneManager>();
        world.init_resource::<Count>();
        let mut schedule = Schedule::default();
        schedule.add_systems((|mut c: ResMut<Count>| c.0 += 1).run_if(in_gameplay));
        schedule.run(&mut world);
        world
            .resource_mut::<SceneManager>()
            .enter(SceneRequest::new(SceneId::Title));
        schedule.run(&mut world);
        assert_eq!(world.resource::<Count>().0, 0);
        world
            .resource_mut::<SceneManager>()
            .enter(SceneRequest::new(SceneId::Boss));
        schedule.run(&mut world);
        assert_eq!(world.resource::<Count>().0, 1);
    }
}

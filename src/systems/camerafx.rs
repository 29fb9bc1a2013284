//! Advances [`CameraFx`] and issues the scene request of a finished fade-out.
use bevy_ecs::prelude::*;

use crate::resources::camerafx::CameraFx;
use crate::resources::rng::GameRng;
use crate::resources::scene::SceneManager;
use crate::resources::worldtime::WorldTime;

pub fn camera_fx_system(
    mut camera: ResMut<CameraFx>,
    mut scenes: ResMut<SceneManager>,
    mut rng: ResMut<GameRng>,
    time: Res<WorldTime>,
) {
    if let Some(request) = camera.update(time.delta, &mut rng.0) {
        scenes.request(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::camerafx::FadeOut;
    use crate::resources::scene::{SceneId, SceneRequest};

    #[test]
    fn test_finished_fade_requests_scene() {
        let mut world = World::new();
        world.init_resource::<CameraFx>();
        world.init_resource::<SceneManager>();
        world.insert_resource(GameRng::seeded(1));
        world.insert_resource(WorldTime {
            delta: 0.5,
            ..Default::default()
        });
        world
            .resource_mut::<CameraFx>()
            .fade_out(FadeOut::to_black(0.8, SceneRequest::new(SceneId::Level1)));
        let mut schedule = Schedule::default();
        schedule.add_systems(camera_fx_system);
        schedule.run(&mut world);
        assert!(!world.resource::<SceneManager>().has_pending());
        schedule.run(&mut world);
        let pending = world.resource_mut::<SceneManager>().take_pending();
        assert_eq!(pending.map(|r| r.scene), Some(SceneId::Level1));
    }
}

//! Dialogue box driver.
//!
//! [`dialogue_system`] types the current message, advances it on ENTER,
//! SPACE, E, a click or a tap, and reports the close through
//! [`DialogueClosedEvent`]. [`dialogue_inactive`] is the run condition that
//! pauses gameplay while the box is up.
use bevy_ecs::prelude::*;

use crate::events::dialogue::DialogueClosedEvent;
use crate::resources::dialogue::DialogueManager;
use crate::resources::input::InputState;
use crate::resources::touch::TouchControls;
use crate::resources::worldtime::WorldTime;

pub fn dialogue_inactive(dialogue: Res<DialogueManager>) -> bool {
    !dialogue.active
}

fn advance_requested(input: &InputState, touch: &TouchControls) -> bool {
    let keys = input.confirm.just_pressed || input.attack.just_pressed || input.interact.just_pressed;
    let buttons = touch.attack_just_pressed || touch.interact_just_pressed;
    let tap = input.pointer_just_pressed && !input.pointers.iter().any(|p| touch.captures(*p));
    keys || buttons || tap
}

pub fn dialogue_system(
    mut commands: Commands,
    mut dialogue: ResMut<DialogueManager>,
    input: Res<InputState>,
    touch: Res<TouchControls>,
    time: Res<WorldTime>,
) {
    if dialogue.active {
        dialogue.update(time.delta);
        let opened_now = dialogue.take_just_opened();
        if !opened_now && advance_requested(&input, &touch) {
            dialogue.advance();
        }
    }
    if let Some(action) = dialogue.take_closed() {
        commands.trigger(DialogueClosedEvent { action });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::camerafx::FadeOut;
    use crate::resources::scene::{SceneId, SceneRequest};
    use crate::resources::touch::TouchMode;
    use raylib::prelude::Vector2;

    #[derive(Resource, Default)]
    struct Closed(Vec<Option<FadeOut>>);

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.016,
            ..Default::default()
        });
        world.init_resource::<DialogueManager>();
        world.init_resource::<InputState>();
        world.insert_resource(TouchControls::new(TouchMode::Always));
        world.init_resource::<Closed>();
        world.add_observer(|t: On<DialogueClosedEvent>, mut c: ResMut<Closed>| {
            c.0.push(t.event().action.clone())
        });
        world
    }

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(dialogue_system);
        schedule.run(world);
    }

    fn press_enter(world: &mut World) {
        world.resource_mut::<InputState>().confirm.set(true);
        run(world);
        world.resource_mut::<InputState>().confirm.set(false);
        run(world);
    }

    #[test]
    fn test_opening_press_does_not_advance() {
        let mut world = world();
        world.resource_mut::<InputState>().interact.set(true);
        world
            .resource_mut::<DialogueManager>()
            .show("Eco", vec!["Hola".into()], None);
        run(&mut world);
        let d = world.resource::<DialogueManager>();
        assert!(d.active);
        assert!(d.is_typing());
    }

    #[test]
    fn test_skip_then_close_fires_event() {
        let mut world = world();
        let fade = FadeOut::to_black(1.0, SceneRequest::new(SceneId::Title));
        world
            .resource_mut::<DialogueManager>()
            .show("*", vec!["Ganaste".into()], Some(fade.clone()));
        run(&mut world);
        press_enter(&mut world);
        assert!(!world.resource::<DialogueManager>().is_typing());
        assert!(world.resource::<DialogueManager>().active);
        press_enter(&mut world);
        world.flush();
        assert!(!world.resource::<DialogueManager>().active);
        assert_eq!(world.resource::<Closed>().0, vec![Some(fade)]);
    }

    #[test]
    fn test_tap_on_pad_is_not_a_dialogue_tap() {
        let mut world = world();
        world
            .resource_mut::<DialogueManager>()
            .show("", vec!["...".into()], None);
        run(&mut world);
        world.resource_mut::<InputState>().set_pointers([Vector2::new(30.0, 520.0)]);
        run(&mut world);
        assert!(world.resource::<DialogueManager>().is_typing());
        world.resource_mut::<InputState>().set_pointers([]);
        run(&mut world);
        world.resource_mut::<InputState>().set_pointers([Vector2::new(400.0, 200.0)]);
        run(&mut world);
        assert!(!world.resource::<DialogueManager>().is_typing());
    }

    #[test]
    fn test_empty_dialogue_reports_close() {
        let mut world = world();
        world.resource_mut::<DialogueManager>().show("", vec![], None);
        run(&mut world);
        world.flush();
        assert_eq!(world.resource::<Closed>().0, vec![None]);
    }
}

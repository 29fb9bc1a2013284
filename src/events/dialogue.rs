//! Dialogue completion and delayed dialogue.
//!
//! [`DialogueClosedEvent`] is triggered by the dialogue system the frame the
//! box closes; its observer starts the fade the dialogue was opened with.
//! [`observe_timer_event`] opens dialogues queued with a
//! [`PendingDialogue`] and handles the boot splash hand-off.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::timer::PendingDialogue;
use crate::events::timer::TimerEvent;
use crate::resources::camerafx::{CameraFx, FadeOut};
use crate::resources::dialogue::DialogueManager;
use crate::resources::scene::{SceneId, SceneManager, SceneRequest};

/// Timer signal that opens the entity's [`PendingDialogue`].
pub const DIALOGUE_SIGNAL: &str = "dialogue";
/// Timer signal that ends the boot splash.
pub const BOOT_DONE_SIGNAL: &str = "boot_done";

#[derive(Event, Debug, Clone)]
pub struct DialogueClosedEvent {
    pub action: Option<FadeOut>,
}

pub fn observe_dialogue_closed(trigger: On<DialogueClosedEvent>, mut camera: ResMut<CameraFx>) {
    let Some(fade) = trigger.event().action.clone() else {
        return;
    };
    if !camera.fade_out(fade) {
        debug!("Fade already running, completion fade ignored");
    }
}

pub fn observe_timer_event(
    trigger: On<TimerEvent>,
    mut commands: Commands,
    pending: Query<&PendingDialogue>,
    mut dialogue: ResMut<DialogueManager>,
    mut scenes: ResMut<SceneManager>,
) {
    let event = trigger.event();
    match event.signal.as_str() {
        DIALOGUE_SIGNAL => {
            let Ok(p) = pending.get(event.entity) else {
                warn!("Dialogue timer {:?} has nothing to say", event.entity);
                return;
            };
            if !dialogue.show(p.speaker.clone(), p.lines.clone(), p.then.clone()) {
                debug!("Dialogue busy, '{}' dropped", p.speaker);
            }
            commands.entity(event.entity).try_despawn();
        }
        BOOT_DONE_SIGNAL => {
            scenes.request(SceneRequest::new(SceneId::Title));
            commands.entity(event.entity).try_despawn();
        }
        other => debug!("Unhandled timer signal '{}'", other),
    }
}

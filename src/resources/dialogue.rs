//! Typewriter dialogue box.
//!
//! [`DialogueManager`] shows a speaker name and a list of messages, revealing
//! one character every [`TYPING_SPEED`] seconds. While it is active the
//! gameplay systems are paused (see
//! [`dialogue_inactive`](crate::systems::dialogue::dialogue_inactive)).
//!
//! Closing is reported through [`DialogueManager::take_closed`] so the
//! dialogue system can fire a
//! [`DialogueClosedEvent`](crate::events::dialogue::DialogueClosedEvent)
//! carrying the completion action.

use bevy_ecs::prelude::Resource;

use crate::resources::camerafx::FadeOut;

/// Seconds per revealed character.
pub const TYPING_SPEED: f32 = 0.03;

#[derive(Resource, Debug, Default)]
pub struct DialogueManager {
    pub active: bool,
    pub speaker: String,
    pub messages: Vec<String>,
    pub index: usize,
    /// Characters (not bytes) of the current message shown so far.
    pub visible_chars: usize,
    char_timer: f32,
    on_complete: Option<FadeOut>,
    just_opened: bool,
    closed: Option<Option<FadeOut>>,
}

impl DialogueManager {
    /// Open the box. Ignored while another dialogue is showing; returns
    /// whether the dialogue was accepted.
    pub fn show(
        &mut self,
        speaker: impl Into<String>,
        messages: Vec<String>,
        on_complete: Option<FadeOut>,
    ) -> bool {
        if self.active {
            return false;
        }
        self.speaker = speaker.into();
        self.messages = messages;
        self.index = 0;
        self.visible_chars = 0;
        self.char_timer = 0.0;
        self.on_complete = on_complete;
        if self.messages.is_empty() {
            self.closed = Some(self.on_complete.take());
            return true;
        }
        self.active = true;
        self.just_opened = true;
        log::debug!("Dialogue opened: '{}' ({} lines)", self.speaker, self.messages.len());
        true
    }

    pub fn current_message(&self) -> &str {
        self.messages.get(self.index).map(String::as_str).unwrap_or("")
    }

    fn current_len(&self) -> usize {
        self.current_message().chars().count()
    }

    /// The revealed part of the current message.
    pub fn visible_text(&self) -> &str {
        let msg = self.current_message();
        match msg.char_indices().nth(self.visible_chars) {
            Some((byte, _)) => &msg[..byte],
            None => msg,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.active && self.visible_chars < self.current_len()
    }

    pub fn update(&mut self, dt: f32) {
        if !self.active || !self.is_typing() {
            return;
        }
        self.char_timer += dt;
        while self.char_timer >= TYPING_SPEED && self.visible_chars < self.current_len() {
            self.char_timer -= TYPING_SPEED;
            self.visible_chars += 1;
        }
    }

    /// Consume the "opened this frame" flag. The input that opened the box
    /// must not also advance it.
    pub fn take_just_opened(&mut self) -> bool {
        std::mem::take(&mut self.just_opened)
    }

    /// Skip the typing, or move on to the next message, or close.
    pub fn advance(&mut self) {
        if !self.active {
            return;
        }
        if self.is_typing() {
            self.visible_chars = self.current_len();
            return;
        }
        self.index += 1;
        self.visible_chars = 0;
        self.char_timer = 0.0;
        if self.index >= self.messages.len() {
            self.close();
        }
    }

    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.just_opened = false;
        self.closed = Some(self.on_complete.take());
        log::debug!("Dialogue closed: '{}'", self.speaker);
    }

    /// `Some(action)` once after the dialogue closed.
    pub fn take_closed(&mut self) -> Option<Option<FadeOut>> {
        self.closed.take()
    }

    /// Drop everything without running the completion action.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Greedy word wrap. `measure` returns the drawn width of a string.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{line} {word}");
        if measure(&candidate) > max_width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

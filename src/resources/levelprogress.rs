use bevy_ecs::prelude::Resource;

/// Per-scene progress: kills toward the exit and the one-shot triggers.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelProgress {
    pub kills: usize,
    pub total_enemies: usize,
    pub exit_open: bool,
    pub exit_taken: bool,
    pub meeting_triggered: bool,
    pub boss_defeated: bool,
}

impl LevelProgress {
    pub fn with_enemies(total: usize) -> Self {
        Self {
            total_enemies: total,
            ..Default::default()
        }
    }

    /// Kills needed to open the exit: 60% of the pack, rounded up.
    pub fn required_kills(&self) -> usize {
        (self.total_enemies * 6).div_ceil(10)
    }

    /// Count a kill. Returns true on the kill that opens the exit.
    pub fn record_kill(&mut self) -> bool {
        self.kills += 1;
        if !self.exit_open && self.kills >= self.required_kills() {
            self.exit_open = true;
            return true;
        }
        false
    }
}

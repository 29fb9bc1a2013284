//! The player character (Dani).
//!
//! [`Player`] owns the rules of the hero: eight-way movement with the arrow
//! keys or the on-screen pad, a sword swing on a cooldown, invincibility
//! frames after a hit and a short death animation. The systems in
//! [`crate::systems::player`] feed it input and time, then act on what these
//! methods report.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

pub const PLAYER_SPEED: f32 = 160.0;
pub const DEFAULT_MAX_HEALTH: i32 = 6;
/// Seconds between two sword swings; also the length of a swing.
pub const ATTACK_COOLDOWN: f32 = 0.4;
pub const INVINCIBLE_DURATION: f32 = 0.8;
pub const DEATH_DURATION: f32 = 0.6;
/// Damage dealt by one sword swing.
pub const SWORD_DAMAGE: i32 = 2;
/// How long the slash hitbox stays alive.
pub const SWORD_LIFETIME: f32 = 0.15;
/// Alpha toggles while invincible (on, off, on, ...).
const FLASH_TOGGLES: f32 = 6.0;
const FLASH_ALPHA: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    pub fn name(&self) -> &'static str {
        match self {
            Facing::Up => "up",
            Facing::Down => "down",
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }

    pub fn unit(&self) -> Vector2 {
        match self {
            Facing::Up => Vector2::new(0.0, -1.0),
            Facing::Down => Vector2::new(0.0, 1.0),
            Facing::Left => Vector2::new(-1.0, 0.0),
            Facing::Right => Vector2::new(1.0, 0.0),
        }
    }
}

/// Directional intent for one frame, merged from keyboard and touch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// What happened when damage was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    Ignored,
    Hurt,
    Died,
}

/// Things that finished during [`Player::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerTick {
    pub attack_ended: bool,
    pub death_finished: bool,
}

#[derive(Component, Clone, Debug)]
pub struct Player {
    pub health: i32,
    pub max_health: i32,
    pub speed: f32,
    pub facing: Facing,
    pub alive: bool,
    pub attacking: bool,
    attack_elapsed: f32,
    last_attack: Option<f32>,
    pub invincible: bool,
    invincible_elapsed: f32,
    death_remaining: Option<f32>,
}

impl Player {
    pub fn new(max_health: i32) -> Self {
        let max_health = max_health.max(1);
        Self {
            health: max_health,
            max_health,
            speed: PLAYER_SPEED,
            facing: Facing::Down,
            alive: true,
            attacking: false,
            attack_elapsed: 0.0,
            last_attack: None,
            invincible: false,
            invincible_elapsed: 0.0,
            death_remaining: None,
        }
    }

    /// Velocity for this frame.
    ///
    /// Left wins over right and up over down. The facing follows the last
    /// axis that moved, so vertical input overrides horizontal. Diagonals are
    /// normalized to `speed`. Dead or swinging players stand still.
    pub fn steer(&mut self, input: DirectionInput) -> Vector2 {
        if !self.alive || self.attacking {
            return Vector2::zero();
        }
        let mut v = Vector2::zero();
        if input.left {
            v.x = -self.speed;
            self.facing = Facing::Left;
        } else if input.right {
            v.x = self.speed;
            self.facing = Facing::Right;
        }
        if input.up {
            v.y = -self.speed;
            self.facing = Facing::Up;
        } else if input.down {
            v.y = self.speed;
            self.facing = Facing::Down;
        }
        if v.x != 0.0 && v.y != 0.0 {
            v = v.normalized() * self.speed;
        }
        v
    }

    pub fn can_attack(&self, now: f32) -> bool {
        self.alive
            && !self.attacking
            && self
                .last_attack
                .is_none_or(|last| now - last >= ATTACK_COOLDOWN)
    }

    /// Start a swing if allowed. Returns false when the cooldown blocks it.
    pub fn begin_attack(&mut self, now: f32) -> bool {
        if !self.can_attack(now) {
            return false;
        }
        self.attacking = true;
        self.attack_elapsed = 0.0;
        self.last_attack = Some(now);
        true
    }

    pub fn end_attack(&mut self) {
        self.attacking = false;
    }

    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.invincible || !self.alive {
            return DamageOutcome::Ignored;
        }
        self.health -= amount;
        self.invincible = true;
        self.invincible_elapsed = 0.0;
        if self.health <= 0 {
            self.health = 0;
            self.alive = false;
            self.attacking = false;
            self.death_remaining = Some(DEATH_DURATION);
            DamageOutcome::Died
        } else {
            DamageOutcome::Hurt
        }
    }

    /// Advance the swing, invincibility and death clocks.
    pub fn tick(&mut self, dt: f32) -> PlayerTick {
        let mut out = PlayerTick::default();
        if self.attacking {
            self.attack_elapsed += dt;
            if self.attack_elapsed >= ATTACK_COOLDOWN {
                self.attacking = false;
                out.attack_ended = true;
            }
        }
        if self.invincible {
            self.invincible_elapsed += dt;
            if self.invincible_elapsed >= INVINCIBLE_DURATION {
                self.invincible = false;
            }
        }
        if let Some(remaining) = self.death_remaining.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.death_remaining = None;
                out.death_finished = true;
            }
        }
        out
    }

    /// Blink while invincible: six alternations between 1.0 and 0.3.
    pub fn flash_alpha(&self) -> f32 {
        if !self.invincible || !self.alive {
            return 1.0;
        }
        let step = INVINCIBLE_DURATION / FLASH_TOGGLES;
        let toggles = (self.invincible_elapsed / step).floor() as i32;
        if toggles % 2 == 1 { FLASH_ALPHA } else { 1.0 }
    }

    /// Name of the animation matching the current state.
    pub fn animation_key(&self, moving: bool) -> String {
        let action = if self.attacking {
            "attack"
        } else if moving {
            "walk"
        } else {
            "idle"
        };
        format!("dani-{}-{}", action, self.facing.name())
    }
}

/// Where the slash appears relative to the player, and its size.
///
/// Returns `(offset, width, height)`; the box is turned upright for up/down.
pub fn sword_placement(facing: Facing) -> (Vector2, f32, f32) {
    const LONG: f32 = 38.0;
    const SHORT: f32 = 14.0;
    const REACH: f32 = 20.0;
    let offset = facing.unit() * REACH;
    match facing {
        Facing::Left | Facing::Right => (offset, LONG, SHORT),
        Facing::Up | Facing::Down => (offset, SHORT, LONG),
    }
}

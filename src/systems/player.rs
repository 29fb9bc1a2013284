//! Player systems.
//!
//! - [`player_control_system`] turns keyboard and touch input into movement,
//!   animations and sword swings. It only runs while gameplay is live.
//! - [`player_status_system`] advances the swing, invincibility and death
//!   clocks every frame and reports the finished death.
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Color;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::hitbox::SwordHitbox;
use crate::components::mapposition::MapPosition;
use crate::components::player::{self, DirectionInput, Player, sword_placement};
use crate::components::rigidbody::RigidBody;
use crate::components::shape::Shape;
use crate::components::tint::Tint;
use crate::components::ttl::Ttl;
use crate::components::tween::TweenAlpha;
use crate::components::zindex::ZIndex;
use crate::events::combat::PlayerDiedEvent;
use crate::resources::input::InputState;
use crate::resources::touch::TouchControls;
use crate::resources::worldtime::WorldTime;

const SWORD_ALPHA: f32 = 0.9;

fn merge(a: DirectionInput, b: DirectionInput) -> DirectionInput {
    DirectionInput {
        left: a.left || b.left,
        right: a.right || b.right,
        up: a.up || b.up,
        down: a.down || b.down,
    }
}

/// Spawn the slash in front of the player.
pub fn spawn_sword(commands: &mut Commands, player: &Player, position: &MapPosition) -> Entity {
    let (offset, width, height) = sword_placement(player.facing);
    commands
        .spawn((
            MapPosition::from_vec(position.pos + offset),
            BoxCollider::centered(width, height),
            Group::new("sword"),
            SwordHitbox::new(player::SWORD_DAMAGE),
            Shape::RoundedRect {
                width,
                height,
                color: Color::new(255, 255, 255, 178),
            },
            Tint::alpha(SWORD_ALPHA),
            TweenAlpha::new(SWORD_ALPHA, 0.0, player::SWORD_LIFETIME),
            Ttl::new(player::SWORD_LIFETIME),
            ZIndex(11),
        ))
        .id()
}

pub fn player_control_system(
    mut commands: Commands,
    mut players: Query<(&mut Player, &mut RigidBody, &MapPosition, Option<&mut Animation>)>,
    input: Res<InputState>,
    touch: Res<TouchControls>,
    time: Res<WorldTime>,
) {
    for (mut player, mut body, position, mut animation) in players.iter_mut() {
        if !player.alive || player.attacking {
            continue;
        }
        if (input.attack.just_pressed || touch.attack_just_pressed)
            && player.begin_attack(time.elapsed)
        {
            body.stop();
            if let Some(animation) = animation.as_mut() {
                animation.play(&player.animation_key(false));
            }
            let sword = spawn_sword(&mut commands, &player, position);
            debug!("Sword swing {:?} facing {}", sword, player.facing.name());
            continue;
        }
        let velocity = player.steer(merge(input.direction(), touch.direction()));
        body.set_velocity(velocity);
        if let Some(animation) = animation.as_mut() {
            animation.play(&player.animation_key(body.is_moving()));
        }
    }
}

pub fn player_status_system(
    mut commands: Commands,
    mut players: Query<(&mut Player, &mut Tint, Option<&Animation>)>,
    time: Res<WorldTime>,
) {
    for (mut player, mut tint, animation) in players.iter_mut() {
        let tick = player.tick(time.delta);
        if tick.death_finished {
            commands.trigger(PlayerDiedEvent {});
        }
        if !player.alive {
            continue;
        }
        tint.set_opacity(player.flash_alpha());
        // A swing also ends when its animation does.
        let swing_done = animation
            .is_some_and(|a| a.finished && a.animation_key.starts_with("dani-attack"));
        if player.attacking && swing_done {
            player.end_attack();
        }
    }
}

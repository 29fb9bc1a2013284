//! Sprite-sheet animation playback.
//!
//! [`animation`] advances every [`Animation`] by the frame delta and writes
//! the resulting sheet and frame into the entity's [`Sprite`]. Non looping
//! animations stop on their last frame and set `finished`.
//!
//! Keys missing from the [`AnimationStore`] are skipped; such entities keep
//! whatever their sprite shows (usually nothing, so the placeholder shape is
//! drawn instead).

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim_comp, mut sprite) in query.iter_mut() {
        let Some(animation) = animation_store.get(&anim_comp.animation_key) else {
            continue;
        };
        if sprite.tex_key != animation.tex_key {
            sprite.tex_key = animation.tex_key.clone();
        }

        if !anim_comp.finished && animation.fps > 0.0 {
            anim_comp.elapsed_time += time.delta;
            let frame_duration = 1.0 / animation.fps;
            let frame_count = animation.frame_count();
            while anim_comp.elapsed_time >= frame_duration {
                anim_comp.elapsed_time -= frame_duration;
                if anim_comp.frame_index + 1 < frame_count {
                    anim_comp.frame_index += 1;
                } else if animation.looped {
                    anim_comp.frame_index = 0;
                } else {
                    anim_comp.finished = true;
                    break;
                }
            }
        }

        sprite.frame = animation.first + anim_comp.frame_index;
    }
}

//! NPC prompts and conversations.
//!
//! Each NPC owns a "[ E ]" prompt entity (see [`NpcPrompt`]) that
//! [`npc_prompt_system`] shows and pulses while the player stands close.
//! [`npc_interact_system`] opens the dialogue of the first NPC in range when
//! E or the touch interact button is pressed.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::npc::Npc;
use crate::components::player::Player;
use crate::components::tint::Tint;
use crate::resources::dialogue::DialogueManager;
use crate::resources::input::InputState;
use crate::resources::touch::TouchControls;
use crate::resources::worldtime::WorldTime;

/// Marks the prompt text floating above an NPC.
#[derive(Component, Clone, Copy, Debug)]
pub struct NpcPrompt {
    pub npc: Entity,
}

fn living_player(players: &Query<(&Player, &MapPosition), Without<Npc>>) -> Option<raylib::prelude::Vector2> {
    players
        .iter()
        .find(|(player, _)| player.alive)
        .map(|(_, position)| position.pos)
}

pub fn npc_prompt_system(
    mut npcs: Query<(&mut Npc, &MapPosition)>,
    players: Query<(&Player, &MapPosition), Without<Npc>>,
    mut prompts: Query<(&NpcPrompt, &mut Tint)>,
    time: Res<WorldTime>,
) {
    let player = living_player(&players);
    for (mut npc, position) in npcs.iter_mut() {
        npc.prompt_visible = player.is_some_and(|p| npc.in_range(position.pos, p));
    }
    for (prompt, mut tint) in prompts.iter_mut() {
        let visible = npcs.get(prompt.npc).is_ok_and(|(npc, _)| npc.prompt_visible);
        let alpha = if visible {
            Npc::prompt_alpha(time.elapsed)
        } else {
            0.0
        };
        tint.set_opacity(alpha);
    }
}

pub fn npc_interact_system(
    mut npcs: Query<(&mut Npc, &MapPosition)>,
    players: Query<(&Player, &MapPosition), Without<Npc>>,
    input: Res<InputState>,
    touch: Res<TouchControls>,
    mut dialogue: ResMut<DialogueManager>,
) {
    if !(input.interact.just_pressed || touch.interact_just_pressed) || dialogue.active {
        return;
    }
    let Some(player) = living_player(&players) else {
        return;
    };
    let Some((mut npc, _)) = npcs
        .iter_mut()
        .find(|(npc, position)| npc.in_range(position.pos, player))
    else {
        return;
    };
    npc.has_interacted = true;
    debug!("Talking to '{}'", npc.name);
    dialogue.show(npc.name.clone(), npc.dialogues.clone(), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::npc::NpcConfig;
    use crate::resources::touch::TouchMode;

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            elapsed: 0.0,
            delta: 0.016,
            ..Default::default()
        });
        world.init_resource::<InputState>();
        world.insert_resource(TouchControls::new(TouchMode::Never));
        world.init_resource::<DialogueManager>();
        world
    }

    fn spawn_npc(world: &mut World, name: &str, x: f32) -> Entity {
        let npc = Npc::from_config(&NpcConfig {
            name: name.into(),
            dialogues: vec![format!("Soy {name}")],
            ..Default::default()
        });
        let e = world.spawn((npc, MapPosition::new(x, 200.0))).id();
        world.spawn((NpcPrompt { npc: e }, Tint::alpha(0.0)));
        e
    }

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems((npc_prompt_system, npc_interact_system).chain());
        schedule.run(world);
    }

    #[test]
    fn test_prompt_shows_in_range() {
        let mut world = world();
        let near = spawn_npc(&mut world, "Eco", 120.0);
        let far = spawn_npc(&mut world, "Otro", 600.0);
        world.spawn((Player::new(6), MapPosition::new(100.0, 200.0)));
        run(&mut world);
        assert!(world.get::<Npc>(near).unwrap().prompt_visible);
        assert!(!world.get::<Npc>(far).unwrap().prompt_visible);
        let mut q = world.query::<(&NpcPrompt, &Tint)>();
        for (prompt, tint) in q.iter(&world) {
            if prompt.npc == near {
                assert!((tint.opacity() - 0.7).abs() < 0.01);
            } else {
                assert_eq!(tint.opacity(), 0.0);
            }
        }
    }

    #[test]
    fn test_interact_opens_first_npc_in_range() {
        let mut world = world();
        let eco = spawn_npc(&mut world, "Eco", 120.0);
        world.spawn((Player::new(6), MapPosition::new(100.0, 200.0)));
        world.resource_mut::<InputState>().interact.set(true);
        run(&mut world);
        assert!(world.get::<Npc>(eco).unwrap().has_interacted);
        let d = world.resource::<DialogueManager>();
        assert!(d.active);
        assert_eq!(d.speaker, "Eco");
        assert_eq!(d.messages, vec!["Soy Eco".to_string()]);
    }

    #[test]
    fn test_no_interaction_while_talking() {
        let mut world = world();
        let eco = spawn_npc(&mut world, "Eco", 120.0);
        world.spawn((Player::new(6), MapPosition::new(100.0, 200.0)));
        world
            .resource_mut::<DialogueManager>()
            .show("Jhulian", vec!["...".into()], None);
        world.resource_mut::<InputState>().interact.set(true);
        run(&mut world);
        assert!(!world.get::<Npc>(eco).unwrap().has_interacted);
        assert_eq!(world.resource::<DialogueManager>().speaker, "Jhulian");
    }
}

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

/// Short-lived sword slash. Enemies take its damage on every overlapping
/// frame; a boss is struck at most once per swing.
#[derive(Component, Clone, Debug)]
pub struct SwordHitbox {
    pub damage: i32,
    pub hits: SmallVec<[Entity; 4]>,
}

impl SwordHitbox {
    pub fn new(damage: i32) -> Self {
        Self {
            damage,
            hits: SmallVec::new(),
        }
    }

    /// Record a hit on `target`. Returns false if it was already struck.
    pub fn register_hit(&mut self, target: Entity) -> bool {
        if self.hits.contains(&target) {
            return false;
        }
        self.hits.push(target);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_each_target_once() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut hb = SwordHitbox::new(2);
        assert!(hb.register_hit(a));
        assert!(!hb.register_hit(a));
        assert!(hb.register_hit(b));
        assert_eq!(hb.hits.len(), 2);
    }
}

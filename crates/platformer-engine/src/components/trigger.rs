//! Trigger capability: static entities that react when the avatar overlaps them.

use crate::components::avatar::Avatar;

/// Score granted by a collectible when it is first touched.
pub const COLLECTIBLE_BONUS: i32 = 5;

/// Implemented by interactive static entities. Called once per tick for every
/// trigger the avatar overlaps after its move has settled.
pub trait Trigger {
    fn on_collide(&mut self, avatar: &mut Avatar);
}

/// A row of spikes. Lethal on contact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spikes;

impl Trigger for Spikes {
    fn on_collide(&mut self, avatar: &mut Avatar) {
        avatar.kill();
    }
}

/// End-of-level flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VictoryFlag;

impl Trigger for VictoryFlag {
    fn on_collide(&mut self, avatar: &mut Avatar) {
        avatar.activate_flag();
    }
}

/// One-shot score pickup. Stays in the scene after collection but goes inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collectible {
    bonus: i32,
    collected: bool,
}

impl Collectible {
    pub fn new() -> Self {
        Self {
            bonus: COLLECTIBLE_BONUS,
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }
}

impl Default for Collectible {
    fn default() -> Self {
        Self::new()
    }
}

impl Trigger for Collectible {
    fn on_collide(&mut self, avatar: &mut Avatar) {
        if self.collected {
            return;
        }
        avatar.add_score(self.bonus);
        self.collected = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use glam::IVec2;

    fn avatar() -> Avatar {
        Avatar::new(EntityId(1), IVec2::new(0, 0))
    }

    #[test]
    fn collectible_scores_once() {
        let mut avatar = avatar();
        let mut coin = Collectible::new();
        coin.on_collide(&mut avatar);
        assert_eq!(avatar.score(), COLLECTIBLE_BONUS);
        assert!(coin.is_collected());

        coin.on_collide(&mut avatar);
        coin.on_collide(&mut avatar);
        assert_eq!(avatar.score(), COLLECTIBLE_BONUS);
    }

    #[test]
    fn spikes_kill_idempotently() {
        let mut avatar = avatar();
        let mut spikes = Spikes;
        spikes.on_collide(&mut avatar);
        assert!(avatar.is_dead());
        spikes.on_collide(&mut avatar);
        assert!(avatar.is_dead());
        assert_eq!(avatar.score(), 0);
    }

    #[test]
    fn flag_marks_level_complete() {
        let mut avatar = avatar();
        let mut flag = VictoryFlag;
        assert!(!avatar.has_reached_flag());
        flag.on_collide(&mut avatar);
        flag.on_collide(&mut avatar);
        assert!(avatar.has_reached_flag());
        assert!(!avatar.is_dead());
    }
}

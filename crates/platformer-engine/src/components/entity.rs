use glam::IVec2;

use crate::api::types::EntityId;
use crate::components::trigger::{Collectible, Spikes, Trigger, VictoryFlag};
use crate::core::collision::Aabb;

/// Intrinsic size of a collectible.
pub const COLLECTIBLE_SIZE: IVec2 = IVec2::new(40, 40);
/// Intrinsic size of the victory flag.
pub const VICTORY_FLAG_SIZE: IVec2 = IVec2::new(60, 50);

/// The closed set of static entity kinds.
/// Interactive kinds carry their trigger state inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Block,
    /// Same physics as `Block`; differs only in how it is drawn.
    GrassBlock,
    Spikes(Spikes),
    Collectible(Collectible),
    VictoryFlag(VictoryFlag),
}

impl EntityKind {
    pub fn spikes() -> Self {
        EntityKind::Spikes(Spikes)
    }

    pub fn collectible() -> Self {
        EntityKind::Collectible(Collectible::new())
    }

    pub fn victory_flag() -> Self {
        EntityKind::VictoryFlag(VictoryFlag)
    }

    /// Whether the avatar can stand on this kind.
    pub fn is_ground(&self) -> bool {
        matches!(self, EntityKind::Block | EntityKind::GrassBlock)
    }

    /// Whether the avatar may occupy the same space without being blocked.
    pub fn can_enter(&self) -> bool {
        !matches!(self, EntityKind::Block | EntityKind::GrassBlock)
    }

    /// Short name matching the level descriptor keyword.
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Block => "Block",
            EntityKind::GrassBlock => "GrassBlock",
            EntityKind::Spikes(_) => "Spikes",
            EntityKind::Collectible(_) => "Collectible",
            EntityKind::VictoryFlag(_) => "VictoryFlag",
        }
    }
}

/// A static level entity. Geometry and physical flags are fixed once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    pos: IVec2,
    size: IVec2,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, pos: IVec2, size: IVec2) -> Self {
        debug_assert!(size.x > 0 && size.y > 0, "entity size must be positive: {:?}", size);
        Self { id, kind, pos, size }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    pub fn size(&self) -> IVec2 {
        self.size
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    pub fn is_ground(&self) -> bool {
        self.kind.is_ground()
    }

    pub fn can_enter(&self) -> bool {
        self.kind.can_enter()
    }

    /// Collected pickups stay in the scene but are no longer drawn.
    pub fn is_visible(&self) -> bool {
        !matches!(self.kind, EntityKind::Collectible(c) if c.is_collected())
    }

    /// The trigger capability, for kinds that have one.
    pub fn trigger_mut(&mut self) -> Option<&mut dyn Trigger> {
        let trigger: &mut dyn Trigger = match &mut self.kind {
            EntityKind::Spikes(t) => t,
            EntityKind::Collectible(t) => t,
            EntityKind::VictoryFlag(t) => t,
            EntityKind::Block | EntityKind::GrassBlock => return None,
        };
        Some(trigger)
    }
}

/// Something to place in a scene. The scene assigns the id on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spawn {
    Static { kind: EntityKind, pos: IVec2, size: IVec2 },
    Avatar { pos: IVec2 },
}

impl Spawn {
    pub fn block(x: i32, y: i32, w: i32, h: i32) -> Self {
        Spawn::Static {
            kind: EntityKind::Block,
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn grass_block(x: i32, y: i32, w: i32, h: i32) -> Self {
        Spawn::Static {
            kind: EntityKind::GrassBlock,
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn spikes(x: i32, y: i32, w: i32, h: i32) -> Self {
        Spawn::Static {
            kind: EntityKind::spikes(),
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn collectible(x: i32, y: i32) -> Self {
        Spawn::Static {
            kind: EntityKind::collectible(),
            pos: IVec2::new(x, y),
            size: COLLECTIBLE_SIZE,
        }
    }

    pub fn victory_flag(x: i32, y: i32) -> Self {
        Spawn::Static {
            kind: EntityKind::victory_flag(),
            pos: IVec2::new(x, y),
            size: VICTORY_FLAG_SIZE,
        }
    }

    pub fn avatar(x: i32, y: i32) -> Self {
        Spawn::Avatar {
            pos: IVec2::new(x, y),
        }
    }

    pub fn is_avatar(&self) -> bool {
        matches!(self, Spawn::Avatar { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_flags_per_kind() {
        assert!(EntityKind::Block.is_ground() && !EntityKind::Block.can_enter());
        assert!(EntityKind::GrassBlock.is_ground() && !EntityKind::GrassBlock.can_enter());
        for kind in [EntityKind::spikes(), EntityKind::collectible(), EntityKind::victory_flag()] {
            assert!(!kind.is_ground(), "{} should not be ground", kind.name());
            assert!(kind.can_enter(), "{} should be enterable", kind.name());
        }
    }

    #[test]
    fn only_interactive_kinds_have_triggers() {
        let mut block = Entity::new(EntityId(1), EntityKind::Block, IVec2::ZERO, IVec2::ONE);
        let mut grass = Entity::new(EntityId(2), EntityKind::GrassBlock, IVec2::ZERO, IVec2::ONE);
        let mut spikes = Entity::new(EntityId(3), EntityKind::spikes(), IVec2::ZERO, IVec2::ONE);
        assert!(block.trigger_mut().is_none());
        assert!(grass.trigger_mut().is_none());
        assert!(spikes.trigger_mut().is_some());
    }

    #[test]
    fn fixed_size_spawns_use_intrinsic_sizes() {
        match Spawn::collectible(1, 2) {
            Spawn::Static { size, .. } => assert_eq!(size, COLLECTIBLE_SIZE),
            other => panic!("Expected static spawn, got {:?}", other),
        }
        match Spawn::victory_flag(1, 2) {
            Spawn::Static { size, .. } => assert_eq!(size, VICTORY_FLAG_SIZE),
            other => panic!("Expected static spawn, got {:?}", other),
        }
        assert!(Spawn::avatar(0, 0).is_avatar());
    }
}

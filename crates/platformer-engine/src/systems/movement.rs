//! Per-tick avatar motion: gravity, jump arbitration, horizontal moves with
//! collision rollback, then grounding/snap/trigger resolution.

use glam::IVec2;

use crate::api::game::GameConfig;
use crate::components::avatar::Avatar;
use crate::components::entity::Entity;
use crate::core::collision::overlapping_indices;

/// Advance the avatar by one tick of `dt_ms` milliseconds against the static
/// entities of the level. Trigger entities hit at the settled position act on
/// the avatar (and may update their own state).
pub fn step_avatar(avatar: &mut Avatar, entities: &mut [Entity], config: &GameConfig, dt_ms: f32) {
    let dt = dt_ms / 1000.0;

    // Standing still does not accumulate fall speed
    if avatar.grounded {
        avatar.velocity_y = 0.0;
    } else {
        avatar.velocity_y += config.gravity * dt;
    }

    if avatar.jump_pending {
        avatar.jump_pending = false;
        if avatar.grounded || !avatar.double_jump_used {
            avatar.velocity_y += config.jump_force;
            avatar.double_jump_used = !avatar.grounded;
        }
    }

    let max = IVec2::new(config.level_width.saturating_sub(avatar.size.x), config.level_height);
    if avatar.left_held {
        move_within_bounds(avatar, entities, IVec2::new(-config.move_rate, 0), max);
    }
    if avatar.right_held {
        move_within_bounds(avatar, entities, IVec2::new(config.move_rate, 0), max);
    }

    // Truncates toward zero, so slow falls take several ticks to move a pixel
    avatar.pos.y = (avatar.pos.y as f32 + avatar.velocity_y * dt) as i32;

    resolve_contacts(avatar, entities);
}

/// Translate by `delta`, clamped to `[0, max]` on both axes. The move is
/// undone if it newly enters any entity the avatar cannot enter. Entities
/// already overlapped before the move never block it.
fn move_within_bounds(avatar: &mut Avatar, entities: &[Entity], delta: IVec2, max: IVec2) {
    let before = overlapping_indices(entities, &avatar.aabb());
    let original = avatar.pos;

    avatar.pos = avatar.pos.saturating_add(delta).clamp(IVec2::ZERO, max.max(IVec2::ZERO));

    let blocked = overlapping_indices(entities, &avatar.aabb())
        .into_iter()
        .filter(|i| !before.contains(i))
        .any(|i| !entities[i].can_enter());
    if blocked {
        avatar.pos = original;
    }
}

/// Fire triggers and settle grounding for everything overlapped at the
/// avatar's current position. Ground detection compares raw y coordinates:
/// an overlapped entity counts as underfoot when its top is below the
/// avatar's top.
fn resolve_contacts(avatar: &mut Avatar, entities: &mut [Entity]) {
    avatar.grounded = false;
    for i in overlapping_indices(entities, &avatar.aabb()) {
        let entity = &mut entities[i];
        if let Some(trigger) = entity.trigger_mut() {
            trigger.on_collide(avatar);
        }
        let top = entity.pos().y;
        if entity.is_ground() && top > avatar.pos.y {
            avatar.grounded = true;
        }
        if !entity.can_enter() && top > avatar.pos.y {
            avatar.pos.y = top.saturating_sub(avatar.size.y);
        }
    }
    if avatar.grounded {
        avatar.double_jump_used = false;
    }
}

//! The player-controlled avatar.

use glam::IVec2;

use crate::api::types::EntityId;
use crate::core::collision::Aabb;
use crate::input::queue::Command;

/// Intrinsic size of the avatar.
pub const AVATAR_SIZE: IVec2 = IVec2::new(30, 50);

/// The single controllable entity. Its per-tick motion lives in
/// `systems::movement`; this struct is the state that motion reads and writes.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    pub(crate) id: EntityId,
    pub(crate) pos: IVec2,
    pub(crate) size: IVec2,
    /// Vertical velocity in px/s. Negative is up.
    pub(crate) velocity_y: f32,
    pub(crate) grounded: bool,
    pub(crate) double_jump_used: bool,
    pub(crate) jump_pending: bool,
    pub(crate) left_held: bool,
    pub(crate) right_held: bool,
    pub(crate) dead: bool,
    pub(crate) reached_flag: bool,
    pub(crate) score: i32,
}

impl Avatar {
    pub fn new(id: EntityId, pos: IVec2) -> Self {
        Self {
            id,
            pos,
            size: AVATAR_SIZE,
            velocity_y: 0.0,
            grounded: false,
            double_jump_used: false,
            jump_pending: false,
            left_held: false,
            right_held: false,
            dead: false,
            reached_flag: false,
            score: 0,
        }
    }

    /// Left/right set the held state; jump is edge-triggered and only
    /// registers on press. The request is consumed by the next update.
    pub fn handle_input(&mut self, command: Command, pressed: bool) {
        match command {
            Command::MoveLeft => self.left_held = pressed,
            Command::MoveRight => self.right_held = pressed,
            Command::Jump => {
                if pressed {
                    self.jump_pending = true;
                }
            }
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
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

    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn double_jump_used(&self) -> bool {
        self.double_jump_used
    }

    pub fn is_moving_left(&self) -> bool {
        self.left_held
    }

    pub fn is_moving_right(&self) -> bool {
        self.right_held
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn has_reached_flag(&self) -> bool {
        self.reached_flag
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn add_score(&mut self, amount: i32) {
        self.score += amount;
    }

    pub fn kill(&mut self) {
        self.dead = true;
    }

    pub fn activate_flag(&mut self) {
        self.reached_flag = true;
    }
}

//! Axis-aligned bounding box overlap tests.
//!
//! Every entity collides as a single integer rectangle. Rectangles that only
//! share an edge are not considered overlapping.

use glam::IVec2;

use crate::components::entity::Entity;

/// Integer axis-aligned rectangle: top-left corner plus size.
/// Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Aabb {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    pub fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self::new(IVec2::new(x, y), IVec2::new(w, h))
    }

    /// Exclusive bottom-right corner, saturated at the edge of the `i32` range.
    pub fn max(&self) -> IVec2 {
        self.pos.saturating_add(self.size)
    }

    /// Strict overlap test. Symmetric; touching edges return false.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.pos.x < b_max.x
            && other.pos.x < a_max.x
            && self.pos.y < b_max.y
            && other.pos.y < a_max.y
    }
}

/// Indices of every entity in `entities` whose box overlaps `probe`, in collection order.
pub fn overlapping_indices(entities: &[Entity], probe: &Aabb) -> Vec<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, e)| e.aabb().overlaps(probe))
        .map(|(i, _)| i)
        .collect()
}

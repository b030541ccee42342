//! Axis-aligned bounding boxes
//!
//! Every collidable entity reduces to a `Rect` in playfield coordinates
//! (y grows downward, origin at the top-left of the field).

use glam::Vec2;

/// An axis-aligned rectangle given by its four edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Rect {
    /// Build from a top-left position and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            top: pos.y,
            left: pos.x,
            bottom: pos.y + size.y,
            right: pos.x + size.x,
        }
    }
}

/// Strict overlap test between two rectangles.
///
/// Touching edges do not count as an overlap, so entities spawned flush
/// against each other (the wave grid, a laser leaving its muzzle) never
/// register spurious hits.
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left < b.right && a.right > b.left && a.top < b.bottom && a.bottom > b.top
}

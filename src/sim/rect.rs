//! Axis-aligned rectangle geometry
//!
//! Every entity in the game collides as an axis-aligned rectangle. Entities
//! adapt themselves to this one value type via a `rect()` accessor instead of
//! exposing ad-hoc width/height/size fields at collision time.

use glam::Vec2;

/// An axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A square cell with uniform side length
    pub const fn square(x: f32, y: f32, size: f32) -> Self {
        Self {
            x,
            y,
            w: size,
            h: size,
        }
    }

    /// Center point of the rectangle
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// True if the rectangle has no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Half-open AABB overlap test. Degenerate (zero-size) rectangles never
    /// overlap anything.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

//! 2D vector type for screen positions and drag deltas

use serde::{Deserialize, Serialize};

/// 2D vector for screen positions, click offsets, and drag deltas
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset by separate x/y amounts without building a second vector
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Component-wise clamp with lower-bound priority
    ///
    /// `min` wins when the range is inverted (e.g. a window wider than the
    /// screen), so this never panics the way `f32::clamp` would.
    #[inline]
    pub fn clamp_axes(self, min: Vec2, max: Vec2) -> Self {
        Self::new(self.x.min(max.x).max(min.x), self.y.min(max.y).max(min.y))
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

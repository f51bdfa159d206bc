//! Pre-drag snapshot state

use crate::math::{Size, Vec2};

/// Geometry snapshot captured while the pointer is not dragging
///
/// Refreshed on every non-drag mouse move, click, and release; frozen for the
/// whole of a drag so move/resize deltas are computed against the last stable
/// state rather than against intermediate frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragSnapshot {
    /// Last pointer position relative to the window's top-left
    pub mouse: Vec2,
    /// Window position at snapshot time
    pub position: Vec2,
    /// Window size at snapshot time
    pub size: Size,
}

impl DragSnapshot {
    /// Refresh geometry, optionally updating the relative pointer position
    pub fn capture(&mut self, mouse: Option<Vec2>, position: Vec2, size: Size) {
        if let Some(mouse) = mouse {
            self.mouse = mouse;
        }
        self.position = position;
        self.size = size;
    }

    /// Right edge of the snapshot box
    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.size.width
    }

    /// Bottom edge of the snapshot box
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.height
    }
}

//! Drag dispatch result type

use serde::Serialize;

/// Outcome of one drag-update call on a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DragEffect {
    /// One or both axes resized
    Resized,
    /// Window repositioned
    Moved,
    /// Drag landed outside every zone, or on unimplemented content drag
    Ignored,
}

impl DragEffect {
    /// Check if the drag changed window geometry
    #[inline]
    pub fn is_handled(self) -> bool {
        !matches!(self, DragEffect::Ignored)
    }
}

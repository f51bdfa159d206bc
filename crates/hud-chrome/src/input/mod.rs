//! Input state module
//!
//! Provides the mouse-state machine pieces shared by window chrome and the
//! overlay dispatcher.

mod mouse;
mod drag;
mod result;

pub use mouse::{MouseButton, MouseState};
pub use drag::DragSnapshot;
pub use result::DragEffect;

//! Window chrome module
//!
//! Provides the interactive chrome for one overlay window: zone
//! classification, per-axis resizing, move handling, minimize animation, and
//! hit testing.

mod chrome;
mod config;
mod resize;
mod zone;

pub use chrome::WindowChrome;
pub use config::WindowChromeConfig;
pub use resize::{resize_horizontal, resize_vertical, AxisFit};
pub use zone::{classify, drag_intent, DragIntent, HZone, VZone, ZonePair, EDGE_TOLERANCE};

/// Unique window identifier within one overlay screen
pub type WindowId = u64;

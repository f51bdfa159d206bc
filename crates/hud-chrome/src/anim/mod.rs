//! Animation module
//!
//! Provides named easing curves and the minimize/restore height animation.

mod easing;
mod minimize;

pub use easing::{to_delta, Curve};
pub use minimize::MinimizeAnimation;

/// Duration of the minimize/restore animation in milliseconds
pub const MINIMIZE_DURATION_MS: f32 = 300.0;

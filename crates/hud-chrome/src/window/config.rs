//! Window chrome configuration

use crate::math::{Size, Vec2};

/// Configuration for creating a window's chrome
#[derive(Clone, Debug)]
pub struct WindowChromeConfig {
    /// Window title
    pub title: String,
    /// Initial top-left position
    pub position: Vec2,
    /// Initial size
    pub size: Size,
    /// Minimum size constraint
    pub min_size: Size,
    /// Maximum size constraint (None = unbounded)
    pub max_size: Option<Size>,
    /// Height of the always-visible draggable header
    /// (None = the whole window is the draggable region)
    pub header_height: Option<f32>,
    /// Whether edge/corner drags resize the window
    pub resizable: bool,
    /// Whether right-clicking the header toggles minimize
    pub minimizable: bool,
}

impl Default for WindowChromeConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            position: Vec2::ZERO,
            size: Size::ZERO,
            min_size: Size::new(40.0, 20.0),
            max_size: None,
            header_height: None,
            resizable: true,
            minimizable: false,
        }
    }
}

//! Snapshot serialization for overlay layout

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};
use crate::overlay::OverlayGui;

/// Persisted geometry for one window, keyed by title
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WindowLayout {
    pub title: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub minimized: bool,
}

/// Snapshot of overlay layout for persistence
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Version for migration support
    pub version: u32,
    /// Persisted window data, back-to-front stacking order
    pub windows: Vec<WindowLayout>,
}

impl LayoutSnapshot {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Capture the current layout of an overlay
    pub fn capture(gui: &OverlayGui) -> Self {
        let windows = gui
            .stack()
            .iter()
            .filter_map(|&id| gui.get(id))
            .map(|window| WindowLayout {
                title: window.title().to_string(),
                x: window.position().x,
                y: window.position().y,
                width: window.size().width,
                height: window.size().height,
                minimized: window.minimized(),
            })
            .collect();

        Self {
            version: Self::CURRENT_VERSION,
            windows,
        }
    }

    /// Apply this layout to an overlay, matching windows by title
    ///
    /// Unknown titles are skipped; geometry goes through the regular clamped
    /// setters and minimize flags through the guarded setter, so a restored
    /// minimize plays its collapse starting at `now_ms`.
    pub fn apply(&self, gui: &mut OverlayGui, now_ms: f64) {
        for layout in &self.windows {
            let id = match gui
                .stack()
                .iter()
                .copied()
                .find(|&id| gui.get(id).map(|w| w.title()) == Some(layout.title.as_str()))
            {
                Some(id) => id,
                None => continue,
            };

            if let Some(window) = gui.get_mut(id) {
                window.set_position(Vec2::new(layout.x, layout.y));
                window.set_size(Size::new(layout.width, layout.height));
                window.set_minimized(layout.minimized, now_ms);
            }
            gui.bring_to_front(id);
        }
    }

    /// Check if the snapshot predates the current version
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate the snapshot to the current version
    pub fn migrate(&mut self) {
        // Add migration logic as versions increase
        self.version = Self::CURRENT_VERSION;
    }
}

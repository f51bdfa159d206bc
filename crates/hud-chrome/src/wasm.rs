//! WASM exports for the overlay chrome
//!
//! This module provides wasm-bindgen exports for [`OverlayGui`], letting a
//! browser host drive the chrome directly. Timestamps come from `Date.now()`
//! at this boundary only; the core stays clock-free.

use wasm_bindgen::prelude::*;

use crate::math::{Size, Vec2};
use crate::overlay::OverlayGui;
use crate::persistence::LayoutSnapshot;
use crate::window::{WindowChromeConfig, WindowId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;
}

/// Overlay controller for WASM - wraps OverlayGui with a JS-friendly API
#[wasm_bindgen]
pub struct OverlayController {
    gui: OverlayGui,
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl OverlayController {
    /// Create a new overlay controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            gui: OverlayGui::new(),
        }
    }

    /// Initialize with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.gui.init(width, height);
    }

    /// Update screen dimensions after a display resize
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.gui.resize_screen(width, height);
    }

    /// Run the open sequence for all windows
    #[wasm_bindgen]
    pub fn open(&mut self) {
        self.gui.on_gui_open(date_now());
    }

    /// Advance to the next render frame
    #[wasm_bindgen]
    pub fn begin_frame(&mut self) {
        self.gui.begin_frame(date_now());
    }

    /// Create a window; header_height <= 0 means no separate header
    #[wasm_bindgen]
    pub fn create_window(
        &mut self,
        title: &str,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        header_height: f32,
        minimizable: bool,
    ) -> WindowId {
        let config = WindowChromeConfig {
            title: title.to_string(),
            position: Vec2::new(x, y),
            size: Size::new(w, h),
            header_height: (header_height > 0.0).then_some(header_height),
            minimizable,
            ..Default::default()
        };
        self.gui.add_window(config)
    }

    /// Remove a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: WindowId) {
        self.gui.remove_window(id);
    }

    /// Pointer press; returns true when a window captured it
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8) -> bool {
        self.gui.handle_pointer_down(x, y, button)
    }

    /// Pointer move; returns true when a drag changed geometry
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.gui.handle_pointer_move(x, y).is_handled()
    }

    /// Pointer release; returns true when a capture ended
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.gui.handle_pointer_up(x, y)
    }

    /// Toggle a window's minimize flag
    #[wasm_bindgen]
    pub fn toggle_minimized(&mut self, id: WindowId) -> bool {
        let now_ms = date_now();
        self.gui
            .get_mut(id)
            .map(|w| w.toggle_minimized(now_ms))
            .unwrap_or(false)
    }

    /// Check a window's minimize flag
    #[wasm_bindgen]
    pub fn is_minimized(&self, id: WindowId) -> bool {
        self.gui.get(id).map(|w| w.minimized()).unwrap_or(false)
    }

    /// Get a window's animated rectangle as JSON
    #[wasm_bindgen]
    pub fn get_window_rect_json(&self, id: WindowId) -> String {
        self.gui
            .render_rect(id)
            .and_then(|rect| serde_json::to_string(&rect).ok())
            .unwrap_or_else(|| "{}".to_string())
    }

    /// Get the current layout snapshot as JSON
    #[wasm_bindgen]
    pub fn get_layout_json(&self) -> String {
        serde_json::to_string(&LayoutSnapshot::capture(&self.gui))
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Apply a layout snapshot from JSON; returns false on parse failure
    #[wasm_bindgen]
    pub fn apply_layout_json(&mut self, json: &str) -> bool {
        let mut snapshot: LayoutSnapshot = match serde_json::from_str(json) {
            Ok(s) => s,
            Err(_) => return false,
        };
        if snapshot.needs_migration() {
            snapshot.migrate();
        }
        snapshot.apply(&mut self.gui, date_now());
        true
    }
}

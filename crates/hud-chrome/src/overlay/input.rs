//! Pointer event dispatch for the overlay
//!
//! Implements the drag lifecycle the chrome relies on: a press over a window
//! takes pointer capture, any movement while captured is a drag update
//! against the captured window, and release ends the drag. Windows that are
//! not captured keep receiving plain mouse moves so their pre-drag snapshots
//! stay fresh.

use crate::input::{DragEffect, MouseButton};
use crate::math::Vec2;
use super::{OverlayGui, PointerCapture};

impl OverlayGui {
    /// Whether a press is currently captured by a window
    #[inline]
    pub fn is_pointer_captured(&self) -> bool {
        self.capture.is_some()
    }

    /// The window holding pointer capture, if any
    pub fn captured_window(&self) -> Option<crate::window::WindowId> {
        self.capture.map(|c| c.window)
    }

    /// Handle a button press; returns true when a window captured it
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, button: u8) -> bool {
        let button = match MouseButton::from_index(button) {
            Some(b) => b,
            None => return false,
        };
        let mouse = Vec2::new(x, y);

        let id = match self.window_at(mouse) {
            Some(id) => id,
            None => return false,
        };

        self.bring_to_front(id);
        let clock = self.clock;
        if let Some(window) = self.get_mut(id) {
            window.on_click(mouse, button, clock);
        }
        self.capture = Some(PointerCapture {
            window: id,
            button,
            click: mouse,
        });
        true
    }

    /// Handle pointer movement
    ///
    /// With a capture held this is a drag update on the captured window and
    /// the returned effect says what it did; without one it only refreshes
    /// hover state and snapshots.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> DragEffect {
        let mouse = Vec2::new(x, y);
        let clock = self.clock;
        let screen = self.screen;
        let capture = self.capture;

        // Uncaptured windows keep tracking the pointer
        let ids: Vec<_> = self.stack.to_vec();
        for id in ids {
            if capture.map(|c| c.window) == Some(id) {
                continue;
            }
            if let Some(window) = self.get_mut(id) {
                window.on_mouse_move(mouse, clock);
            }
        }

        let capture = match capture {
            Some(c) => c,
            None => return DragEffect::Ignored,
        };

        let effect = match self.get_mut(capture.window) {
            Some(window) => window.on_drag(mouse, capture.click, screen),
            None => return DragEffect::Ignored,
        };

        match effect {
            DragEffect::Resized => {
                if let Some(hooks) = self.hooks.as_mut() {
                    hooks.on_resize(capture.window);
                }
            }
            DragEffect::Moved => {
                if let Some(hooks) = self.hooks.as_mut() {
                    hooks.on_reposition(capture.window);
                }
            }
            DragEffect::Ignored => {}
        }
        effect
    }

    /// Handle a button release; ends any capture
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> bool {
        let capture = match self.capture.take() {
            Some(c) => c,
            None => return false,
        };

        let clock = self.clock;
        if let Some(window) = self.get_mut(capture.window) {
            window.on_release(Vec2::new(x, y), capture.button, clock);
        }
        true
    }
}

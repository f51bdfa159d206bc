//! Overlay GUI screen coordinating window chrome instances
//!
//! This module is split into focused submodules:
//! - `input`: pointer event dispatch and the drag lifecycle

mod input;

use std::collections::HashMap;

use crate::frame::FrameClock;
use crate::input::MouseButton;
use crate::math::{Rect, Size, Vec2};
use crate::window::{WindowChrome, WindowChromeConfig, WindowId};

/// Capability hooks a concrete widget or host can override
///
/// All methods default to no-ops; implement only what you observe.
pub trait WindowHooks {
    /// A drag update resized the window
    fn on_resize(&mut self, _id: WindowId) {}
    /// A drag update repositioned the window
    fn on_reposition(&mut self, _id: WindowId) {}
}

/// Pointer capture taken on press and held until release
#[derive(Clone, Copy, Debug)]
struct PointerCapture {
    window: WindowId,
    button: MouseButton,
    click: Vec2,
}

/// The owning GUI screen: window registry, z-stack, and input dispatch
///
/// Mutation is synchronous and single-threaded, driven by the host's input
/// and render callbacks. The host advances time through [`Self::begin_frame`];
/// the overlay never reads a clock of its own.
pub struct OverlayGui {
    /// Screen extent used for move/resize bounds
    screen: Size,
    /// All windows by ID
    windows: HashMap<WindowId, WindowChrome>,
    /// Stacking order, back to front
    stack: Vec<WindowId>,
    /// Next window ID
    next_id: WindowId,
    /// Frame counter + timestamp for this render tick
    clock: FrameClock,
    /// Active pointer capture, if any
    capture: Option<PointerCapture>,
    /// Hook sink for drag effects
    hooks: Option<Box<dyn WindowHooks>>,
}

impl Default for OverlayGui {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayGui {
    /// Create an empty overlay
    pub fn new() -> Self {
        Self {
            screen: Size::new(1920.0, 1080.0),
            windows: HashMap::new(),
            stack: Vec::new(),
            next_id: 1,
            clock: FrameClock::new(),
            capture: None,
            hooks: None,
        }
    }

    /// Initialize with the host screen dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        self.screen = Size::new(width, height);
    }

    /// Update the screen dimensions after a display resize
    pub fn resize_screen(&mut self, width: f32, height: f32) {
        self.screen = Size::new(width, height);
    }

    #[inline]
    pub fn screen(&self) -> Size {
        self.screen
    }

    /// The clock for the current frame
    #[inline]
    pub fn frame_clock(&self) -> FrameClock {
        self.clock
    }

    /// Advance to the next render frame at the given timestamp
    pub fn begin_frame(&mut self, now_ms: f64) {
        self.clock.tick(now_ms);
    }

    /// Install the hook sink drag effects are relayed to
    pub fn set_hooks(&mut self, hooks: Box<dyn WindowHooks>) {
        self.hooks = Some(hooks);
    }

    /// Run per-window setup when the GUI screen opens
    ///
    /// Snapshots are initialized first, then each expanded window arms its
    /// expand animation via the display toggle.
    pub fn on_gui_open(&mut self, now_ms: f64) {
        for window in self.windows.values_mut() {
            window.on_gui_init();
            window.on_displayed(now_ms);
        }
    }

    // =========================================================================
    // Window registry
    // =========================================================================

    /// Add a window; it lands on top of the stack
    pub fn add_window(&mut self, config: WindowChromeConfig) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        self.windows.insert(id, WindowChrome::new(config));
        self.stack.push(id);
        id
    }

    /// Remove a window, dropping any capture it held
    pub fn remove_window(&mut self, id: WindowId) {
        self.windows.remove(&id);
        self.stack.retain(|&wid| wid != id);
        if self.capture.map(|c| c.window) == Some(id) {
            self.capture = None;
        }
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&WindowChrome> {
        self.windows.get(&id)
    }

    /// Get a mutable window by ID
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowChrome> {
        self.windows.get_mut(&id)
    }

    /// Number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Stacking order, back to front
    pub fn stack(&self) -> &[WindowId] {
        &self.stack
    }

    /// The frontmost window
    pub fn topmost(&self) -> Option<WindowId> {
        self.stack.last().copied()
    }

    /// Raise a window to the front of the stack
    pub fn bring_to_front(&mut self, id: WindowId) {
        if !self.windows.contains_key(&id) {
            return;
        }
        self.stack.retain(|&wid| wid != id);
        self.stack.push(id);
    }

    /// Find the frontmost window whose hit box contains the point
    pub fn window_at(&self, point: Vec2) -> Option<WindowId> {
        let clock = self.clock;
        self.stack
            .iter()
            .rev()
            .copied()
            .find(|id| {
                self.windows
                    .get(id)
                    .map(|w| w.is_in_window(point, clock))
                    .unwrap_or(false)
            })
    }

    /// Animated bounding box of a window for the host renderer
    pub fn render_rect(&self, id: WindowId) -> Option<Rect> {
        self.windows.get(&id).map(|w| w.render_rect(self.clock))
    }
}

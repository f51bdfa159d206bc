//! Window chrome: drag, resize, minimize, and hit-test state for one window

use crate::anim::MinimizeAnimation;
use crate::frame::{FrameClock, FrameValue};
use crate::input::{DragEffect, DragSnapshot, MouseButton, MouseState};
use crate::math::{Rect, Size, Vec2};
use crate::setting::Setting;
use super::config::WindowChromeConfig;
use super::resize::{resize_horizontal, resize_vertical};
use super::zone::{self, DragIntent, EDGE_TOLERANCE};

/// Interactive chrome state for a single overlay window
///
/// Owns the geometry, the pre-drag snapshot, the minimize flag/animation, and
/// the per-frame progress cache. All mutation happens through the input
/// handlers, which the overlay dispatcher calls on the host's main loop.
#[derive(Debug)]
pub struct WindowChrome {
    title: String,
    position: Vec2,
    size: Size,
    min_size: Size,
    max_size: Option<Size>,
    header_height: Option<f32>,
    visible: bool,
    resizable: bool,
    minimizable: bool,

    minimized: Setting<bool>,
    minimize_anim: MinimizeAnimation,
    progress: FrameValue<f32>,

    last_active_ms: f64,
    mouse_state: MouseState,
    pre_drag: DragSnapshot,
}

impl WindowChrome {
    /// Create chrome from a config
    pub fn new(config: WindowChromeConfig) -> Self {
        let mut pre_drag = DragSnapshot::default();
        pre_drag.capture(None, config.position, config.size);

        Self {
            title: config.title,
            position: config.position,
            size: config.size,
            min_size: config.min_size,
            max_size: config.max_size,
            header_height: config.header_height,
            visible: true,
            resizable: config.resizable,
            minimizable: config.minimizable,
            minimized: Setting::new(false),
            minimize_anim: MinimizeAnimation::new(),
            progress: FrameValue::new(),
            last_active_ms: 0.0,
            mouse_state: MouseState::None,
            pre_drag,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn resizable(&self) -> bool {
        self.resizable
    }

    #[inline]
    pub fn minimizable(&self) -> bool {
        self.minimizable
    }

    #[inline]
    pub fn header_height(&self) -> Option<f32> {
        self.header_height
    }

    /// Height of the region that stays visible and draggable when collapsed
    ///
    /// Without a separate header this tracks the full height, so such windows
    /// move as one block and never visually collapse.
    #[inline]
    pub fn draggable_height(&self) -> f32 {
        self.header_height.unwrap_or(self.size.height)
    }

    /// Timestamp of the last click or release on this window
    #[inline]
    pub fn last_active_ms(&self) -> f64 {
        self.last_active_ms
    }

    #[inline]
    pub fn mouse_state(&self) -> MouseState {
        self.mouse_state
    }

    /// The frozen reference geometry for the current or next drag
    #[inline]
    pub fn pre_drag(&self) -> DragSnapshot {
        self.pre_drag
    }

    /// Move the window directly (host/persistence path, not a drag)
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.refresh_snapshot_if_idle();
    }

    /// Resize the window directly, clamped to the min/max constraints
    pub fn set_size(&mut self, size: Size) {
        let mut size = size.at_least(self.min_size);
        if let Some(max) = self.max_size {
            size.width = size.width.min(max.width);
            size.height = size.height.min(max.height);
        }
        self.size = size;
        self.refresh_snapshot_if_idle();
    }

    fn refresh_snapshot_if_idle(&mut self) {
        if !self.mouse_state.is_drag() {
            self.update_pre_drag(None);
        }
    }

    // =========================================================================
    // Minimize state
    // =========================================================================

    #[inline]
    pub fn minimized(&self) -> bool {
        *self.minimized.get()
    }

    /// The observable minimize flag, for subscriptions by the host
    pub fn minimized_setting_mut(&mut self) -> &mut Setting<bool> {
        &mut self.minimized
    }

    /// Request a minimize-flag change
    ///
    /// A minimize request inside the 300 ms animation window is rejected;
    /// restore always applies. Returns true when the flag actually changed,
    /// which also restarts the animation and drops the per-frame cache.
    pub fn set_minimized(&mut self, minimized: bool, now_ms: f64) -> bool {
        let value = minimized && self.minimize_anim.accepts_minimize(now_ms);
        if self.minimized.set(value) {
            self.minimize_anim.restart(now_ms);
            self.progress.invalidate();
            true
        } else {
            false
        }
    }

    /// Toggle the minimize flag
    pub fn toggle_minimized(&mut self, now_ms: f64) -> bool {
        let target = !self.minimized();
        self.set_minimized(target, now_ms)
    }

    /// Visual height multiplier in [0, 1], memoized per frame
    pub fn minimize_progress(&self, clock: FrameClock) -> f32 {
        self.progress.get(clock.frame, || {
            self.minimize_anim.progress(self.minimized(), clock.now_ms)
        })
    }

    /// Height to render this frame: the header plus the animated body
    pub fn render_height(&self, clock: FrameClock) -> f32 {
        let draggable = self.draggable_height();
        (self.size.height - draggable) * self.minimize_progress(clock) + draggable
    }

    /// Animated bounding box for the host renderer
    pub fn render_rect(&self, clock: FrameClock) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            self.render_height(clock),
        )
    }

    // =========================================================================
    // Hit testing
    // =========================================================================

    /// Check whether a point lands on this window
    ///
    /// Uses the pre-drag snapshot and the animated height, with the same 2 px
    /// grab tolerance the zone classifier grants. The draggable height floors
    /// the box so a collapsed header remains clickable at progress 0.
    pub fn is_in_window(&self, point: Vec2, clock: FrameClock) -> bool {
        if !self.visible {
            return false;
        }
        let visual_height = (self.pre_drag.size.height * self.minimize_progress(clock))
            .max(self.draggable_height());
        let hit_box = Rect::from_pos_size(
            self.pre_drag.position,
            Size::new(self.pre_drag.size.width, visual_height),
        );
        hit_box.expand(EDGE_TOLERANCE).contains(point)
    }

    // =========================================================================
    // Input handlers
    // =========================================================================

    /// One-time setup when the owning GUI screen initializes
    pub fn on_gui_init(&mut self) {
        self.update_pre_drag(None);
    }

    /// Called when the owning GUI screen becomes visible
    ///
    /// An expanded window gets its flag pulsed true-then-false: the round trip
    /// stamps the animation timestamp, so the body visibly expands from the
    /// header on first display. Required initialization, not a no-op.
    pub fn on_displayed(&mut self, now_ms: f64) {
        if !self.minimized() {
            self.set_minimized(true, now_ms);
            self.set_minimized(false, now_ms);
        }
    }

    /// Pointer moved without this window being dragged
    pub fn on_mouse_move(&mut self, mouse: Vec2, clock: FrameClock) {
        if self.mouse_state.is_drag() {
            return;
        }
        self.update_pre_drag(Some(mouse - self.position));
        self.mouse_state = if self.is_in_window(mouse, clock) {
            MouseState::Hover
        } else {
            MouseState::None
        };
    }

    /// Button pressed on this window
    pub fn on_click(&mut self, mouse: Vec2, _button: MouseButton, clock: FrameClock) {
        self.last_active_ms = clock.now_ms;
        self.update_pre_drag(Some(mouse - self.position));
        self.mouse_state = MouseState::Click;
    }

    /// Button released over this window; ends any drag
    pub fn on_release(&mut self, mouse: Vec2, button: MouseButton, clock: FrameClock) {
        self.last_active_ms = clock.now_ms;

        if self.minimizable
            && button == MouseButton::Right
            && mouse.y - self.position.y < self.draggable_height()
        {
            self.toggle_minimized(clock.now_ms);
        }

        self.mouse_state = MouseState::Hover;
        self.update_pre_drag(Some(mouse - self.position));
    }

    /// Drag update: classify the click point and apply resize or move
    ///
    /// `click` is the position where the drag started, `mouse` the current
    /// pointer position; both in screen coordinates. `screen` bounds the
    /// result. Deltas are measured against the frozen pre-drag snapshot, so
    /// calling this every frame of a drag is stable.
    pub fn on_drag(&mut self, mouse: Vec2, click: Vec2, screen: Size) -> DragEffect {
        self.mouse_state = MouseState::Drag;

        let rel_click = click - self.pre_drag.position;
        let zones = zone::classify(rel_click, self.pre_drag.size, self.header_height);
        let intent = zone::drag_intent(
            zones,
            self.resizable,
            self.minimized(),
            self.header_height,
            rel_click.y,
        );
        let delta = mouse - click;

        match intent {
            DragIntent::Resize { horizontal, vertical } => {
                if let Some(fit) = resize_horizontal(
                    horizontal,
                    delta.x,
                    &self.pre_drag,
                    self.min_size.width,
                    self.max_size.map(|s| s.width),
                    screen.width,
                ) {
                    self.position.x = fit.pos;
                    self.size.width = fit.extent;
                }
                if let Some(fit) = resize_vertical(
                    vertical,
                    delta.y,
                    &self.pre_drag,
                    self.min_size.height,
                    self.max_size.map(|s| s.height),
                    screen.height,
                ) {
                    self.position.y = fit.pos;
                    self.size.height = fit.extent;
                }
                DragEffect::Resized
            }
            DragIntent::Move => {
                let target = self.pre_drag.position + delta;
                let max = screen.as_vec2() - self.size.as_vec2() - Vec2::new(1.0, 1.0);
                self.position = target.clamp_axes(Vec2::ZERO, max);
                DragEffect::Moved
            }
            DragIntent::None => DragEffect::Ignored,
        }
    }

    fn update_pre_drag(&mut self, mouse: Option<Vec2>) {
        self.pre_drag.capture(mouse, self.position, self.size);
    }
}

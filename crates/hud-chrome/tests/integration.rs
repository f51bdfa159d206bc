//! Integration tests for the overlay window chrome
//!
//! These tests verify the full interaction workflow:
//! - Edge/corner resize clamping and edge preservation across drag deltas
//! - Move clamping against the screen bounds
//! - Hit testing with grab tolerance and collapsed headers
//! - Minimize/restore animation timing
//! - Pointer dispatch, focus, and drag lifecycle through the overlay
//! - Layout snapshot persistence

use hud_chrome::{
    DragEffect, FrameClock, LayoutSnapshot, OverlayGui, Size, Vec2, WindowChrome,
    WindowChromeConfig, WindowHooks, WindowId,
};
use std::cell::RefCell;
use std::rc::Rc;

const SCREEN: Size = Size::new(1920.0, 1080.0);
const DELTAS: [f32; 8] = [-5000.0, -500.0, -100.0, -10.0, 0.0, 10.0, 500.0, 5000.0];

fn clock(frame: u64, now_ms: f64) -> FrameClock {
    FrameClock { frame, now_ms }
}

fn chrome() -> WindowChrome {
    WindowChrome::new(WindowChromeConfig {
        title: "Radar".to_string(),
        position: Vec2::new(100.0, 100.0),
        size: Size::new(200.0, 150.0),
        min_size: Size::new(50.0, 40.0),
        max_size: Some(Size::new(400.0, 300.0)),
        header_height: Some(20.0),
        minimizable: true,
        ..Default::default()
    })
}

// =============================================================================
// Resize Properties
// =============================================================================

#[test]
fn left_resize_clamps_width_and_preserves_right_edge() {
    for delta in DELTAS {
        let mut window = chrome();
        let click = Vec2::new(105.0, 175.0);

        let effect = window.on_drag(click.offset(delta, 0.0), click, SCREEN);

        assert_eq!(effect, DragEffect::Resized, "delta {delta}");
        let width = window.size().width;
        assert!(width >= 50.0 && width <= 400.0, "delta {delta}: width {width}");
        assert!(
            (window.position().x + width - 300.0).abs() < 0.01,
            "delta {delta}: right edge moved"
        );
    }
}

#[test]
fn right_resize_clamps_width_and_keeps_position() {
    for delta in DELTAS {
        let mut window = chrome();
        let click = Vec2::new(295.0, 175.0);

        let effect = window.on_drag(click.offset(delta, 0.0), click, SCREEN);

        assert_eq!(effect, DragEffect::Resized, "delta {delta}");
        let width = window.size().width;
        assert!(width >= 50.0 && width <= 400.0, "delta {delta}: width {width}");
        assert!((window.position().x - 100.0).abs() < 0.001, "delta {delta}");
    }
}

#[test]
fn top_resize_clamps_height_and_preserves_bottom_edge() {
    for delta in DELTAS {
        let mut window = chrome();
        // header narrows the top band in the center column to 2.5px
        let click = Vec2::new(200.0, 101.0);

        let effect = window.on_drag(click.offset(0.0, delta), click, SCREEN);

        assert_eq!(effect, DragEffect::Resized, "delta {delta}");
        let height = window.size().height;
        assert!(height >= 40.0 && height <= 300.0, "delta {delta}: height {height}");
        assert!(
            (window.position().y + height - 250.0).abs() < 0.01,
            "delta {delta}: bottom edge moved"
        );
    }
}

#[test]
fn bottom_resize_clamps_height_and_keeps_position() {
    for delta in DELTAS {
        let mut window = chrome();
        let click = Vec2::new(200.0, 245.0);

        let effect = window.on_drag(click.offset(0.0, delta), click, SCREEN);

        assert_eq!(effect, DragEffect::Resized, "delta {delta}");
        let height = window.size().height;
        assert!(height >= 40.0 && height <= 300.0, "delta {delta}: height {height}");
        assert!((window.position().y - 100.0).abs() < 0.001, "delta {delta}");
    }
}

#[test]
fn corner_drag_resizes_both_axes() {
    let mut window = chrome();
    // click at relative (5, 5): LEFT/TOP despite the 20px header
    let click = Vec2::new(105.0, 105.0);

    let effect = window.on_drag(click.offset(30.0, 25.0), click, SCREEN);

    assert_eq!(effect, DragEffect::Resized);
    assert!((window.size().width - 170.0).abs() < 0.001);
    assert!((window.size().height - 125.0).abs() < 0.001);
    assert!((window.position().x - 130.0).abs() < 0.001);
    assert!((window.position().y - 125.0).abs() < 0.001);
}

#[test]
fn left_shrink_example_clamps_to_min_width() {
    // window at (100,100) size (200,150), min width 50, drag LEFT edge +300
    let mut window = chrome();
    let click = Vec2::new(105.0, 175.0);

    window.on_drag(click.offset(300.0, 0.0), click, SCREEN);

    assert!((window.size().width - 50.0).abs() < 0.001);
    assert!((window.position().x - 250.0).abs() < 0.001);
}

#[test]
fn minimized_window_moves_instead_of_resizing() {
    let mut window = chrome();
    window.set_minimized(true, 1000.0);

    let click = Vec2::new(105.0, 105.0);
    let effect = window.on_drag(click.offset(30.0, 0.0), click, SCREEN);

    assert_eq!(effect, DragEffect::Moved);
    assert!((window.size().width - 200.0).abs() < 0.001);
    assert!((window.position().x - 130.0).abs() < 0.001);
}

// =============================================================================
// Move Properties
// =============================================================================

#[test]
fn move_never_leaves_screen() {
    for dx in DELTAS {
        for dy in DELTAS {
            let mut window = chrome();
            let click = Vec2::new(200.0, 110.0);

            let effect = window.on_drag(click.offset(dx, dy), click, SCREEN);

            assert_eq!(effect, DragEffect::Moved, "delta ({dx}, {dy})");
            let pos = window.position();
            let size = window.size();
            assert!(pos.x >= 0.0 && pos.y >= 0.0, "delta ({dx}, {dy}): {pos:?}");
            assert!(pos.x + size.width <= SCREEN.width + 1.0, "delta ({dx}, {dy})");
            assert!(pos.y + size.height <= SCREEN.height + 1.0, "delta ({dx}, {dy})");
        }
    }
}

// =============================================================================
// Hit Testing
// =============================================================================

#[test]
fn hit_test_tolerance_bounds() {
    let window = chrome();
    let clk = clock(1, 1000.0);

    assert!(window.is_in_window(Vec2::new(100.0, 100.0), clk));
    assert!(!window.is_in_window(Vec2::new(97.0, 97.0), clk));
}

#[test]
fn hit_test_keeps_collapsed_header_clickable() {
    let mut window = chrome();
    window.set_minimized(true, 1000.0);

    let clk = clock(1, 2000.0);
    assert!(window.is_in_window(Vec2::new(150.0, 118.0), clk));
    assert!(!window.is_in_window(Vec2::new(150.0, 200.0), clk));
}

// =============================================================================
// Minimize Animation Timing
// =============================================================================

#[test]
fn minimize_progress_timing() {
    let mut window = chrome();

    window.set_minimized(true, 1000.0);
    let mid = window.minimize_progress(clock(1, 1150.0));
    assert!(mid > 0.0 && mid < 1.0, "mid-collapse progress {mid}");
    assert!((window.minimize_progress(clock(2, 1400.0)) - 0.0).abs() < 0.001);

    window.set_minimized(false, 2000.0);
    let mid = window.minimize_progress(clock(3, 2150.0));
    assert!(mid > 0.0 && mid < 1.0, "mid-expand progress {mid}");
    assert!((window.minimize_progress(clock(4, 2400.0)) - 1.0).abs() < 0.001);
}

#[test]
fn render_height_collapses_body_only() {
    let mut window = chrome();
    window.set_minimized(true, 1000.0);

    // settled: only the 20px header remains
    assert!((window.render_height(clock(1, 1400.0)) - 20.0).abs() < 0.001);

    // halfway sample sits strictly between header and full height
    let mid = window.render_height(clock(2, 1150.0));
    assert!(mid > 20.0 && mid < 150.0, "mid render height {mid}");
}

// =============================================================================
// Overlay Dispatch
// =============================================================================

#[derive(Default)]
struct CountingHooks {
    resizes: Rc<RefCell<u32>>,
    moves: Rc<RefCell<u32>>,
}

impl WindowHooks for CountingHooks {
    fn on_resize(&mut self, _id: WindowId) {
        *self.resizes.borrow_mut() += 1;
    }
    fn on_reposition(&mut self, _id: WindowId) {
        *self.moves.borrow_mut() += 1;
    }
}

fn overlay_with_window() -> (OverlayGui, WindowId) {
    let mut gui = OverlayGui::new();
    gui.init(1920.0, 1080.0);
    let id = gui.add_window(WindowChromeConfig {
        title: "Radar".to_string(),
        position: Vec2::new(100.0, 100.0),
        size: Size::new(200.0, 150.0),
        min_size: Size::new(50.0, 40.0),
        header_height: Some(20.0),
        minimizable: true,
        ..Default::default()
    });
    gui.on_gui_open(0.0);
    gui.begin_frame(1000.0);
    (gui, id)
}

#[test]
fn full_drag_lifecycle_through_dispatcher() {
    let (mut gui, id) = overlay_with_window();
    let moves = Rc::new(RefCell::new(0));
    let resizes = Rc::new(RefCell::new(0));
    gui.set_hooks(Box::new(CountingHooks {
        moves: Rc::clone(&moves),
        resizes: Rc::clone(&resizes),
    }));

    // drag the header across two updates
    assert!(gui.handle_pointer_down(200.0, 110.0, 0));
    assert_eq!(gui.handle_pointer_move(230.0, 130.0), DragEffect::Moved);
    assert_eq!(gui.handle_pointer_move(260.0, 150.0), DragEffect::Moved);
    assert!(gui.handle_pointer_up(260.0, 150.0));

    // deltas accumulate against the frozen snapshot, not against each other
    let window = gui.get(id).unwrap();
    assert!((window.position().x - 160.0).abs() < 0.001);
    assert!((window.position().y - 140.0).abs() < 0.001);
    assert_eq!(*moves.borrow(), 2);

    // a second drag starts from the refreshed snapshot
    gui.begin_frame(2000.0);
    assert!(gui.handle_pointer_down(355.0, 215.0, 0)); // right edge of moved window
    assert_eq!(gui.handle_pointer_move(395.0, 215.0), DragEffect::Resized);
    gui.handle_pointer_up(395.0, 215.0);

    let window = gui.get(id).unwrap();
    assert!((window.size().width - 240.0).abs() < 0.001);
    assert_eq!(*resizes.borrow(), 1);
}

#[test]
fn press_focuses_topmost_window() {
    let (mut gui, first) = overlay_with_window();
    let second = gui.add_window(WindowChromeConfig {
        title: "Chat".to_string(),
        position: Vec2::new(150.0, 150.0),
        size: Size::new(200.0, 150.0),
        header_height: Some(20.0),
        ..Default::default()
    });
    gui.begin_frame(1100.0);

    // overlap region goes to the window on top
    assert!(gui.handle_pointer_down(200.0, 200.0, 0));
    assert_eq!(gui.captured_window(), Some(second));
    gui.handle_pointer_up(200.0, 200.0);

    // the lower window still owns its exclusive area
    gui.begin_frame(1200.0);
    assert!(gui.handle_pointer_down(110.0, 110.0, 0));
    assert_eq!(gui.captured_window(), Some(first));
    assert_eq!(gui.topmost(), Some(first));
}

#[test]
fn right_release_in_header_minimizes_and_animates() {
    let (mut gui, id) = overlay_with_window();

    gui.handle_pointer_down(150.0, 110.0, 1);
    gui.handle_pointer_up(150.0, 110.0);
    assert!(gui.get(id).unwrap().minimized());

    // mid-collapse frame
    gui.begin_frame(1150.0);
    let rect = gui.render_rect(id).unwrap();
    assert!(rect.height > 20.0 && rect.height < 150.0);

    // settled frame
    gui.begin_frame(1400.0);
    let rect = gui.render_rect(id).unwrap();
    assert!((rect.height - 20.0).abs() < 0.001);
}

#[test]
fn open_plays_expand_animation() {
    let mut gui = OverlayGui::new();
    gui.init(1920.0, 1080.0);
    let id = gui.add_window(WindowChromeConfig {
        title: "Radar".to_string(),
        position: Vec2::new(100.0, 100.0),
        size: Size::new(200.0, 150.0),
        header_height: Some(20.0),
        ..Default::default()
    });

    gui.on_gui_open(1000.0);

    gui.begin_frame(1000.0);
    assert!((gui.render_rect(id).unwrap().height - 20.0).abs() < 0.001);

    gui.begin_frame(1150.0);
    let mid = gui.render_rect(id).unwrap().height;
    assert!(mid > 20.0 && mid < 150.0);

    gui.begin_frame(1400.0);
    assert!((gui.render_rect(id).unwrap().height - 150.0).abs() < 0.001);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn layout_round_trip_through_json() {
    let (mut gui, id) = overlay_with_window();

    // rearrange, then capture
    gui.get_mut(id).unwrap().set_position(Vec2::new(500.0, 400.0));
    gui.get_mut(id).unwrap().set_minimized(true, 1000.0);
    let json = serde_json::to_string(&LayoutSnapshot::capture(&gui)).unwrap();

    // a fresh overlay with the same window picks the layout back up
    let (mut fresh, fresh_id) = overlay_with_window();
    let snapshot: LayoutSnapshot = serde_json::from_str(&json).unwrap();
    assert!(!snapshot.needs_migration());
    snapshot.apply(&mut fresh, 5000.0);

    let window = fresh.get(fresh_id).unwrap();
    assert!((window.position().x - 500.0).abs() < 0.001);
    assert!((window.position().y - 400.0).abs() < 0.001);
    assert!(window.minimized());
}

// =============================================================================
// Drag State Machine
// =============================================================================

#[test]
fn snapshot_frozen_during_drag_refreshed_after() {
    let (mut gui, id) = overlay_with_window();

    let before = gui.get(id).unwrap().pre_drag();
    gui.handle_pointer_down(200.0, 110.0, 0);
    gui.handle_pointer_move(260.0, 140.0);

    // frozen mid-drag
    assert_eq!(gui.get(id).unwrap().pre_drag().position, before.position);

    gui.handle_pointer_up(260.0, 140.0);

    // refreshed to the dragged-to geometry
    let after = gui.get(id).unwrap().pre_drag();
    assert!((after.position.x - 160.0).abs() < 0.001);
    assert!((after.position.y - 130.0).abs() < 0.001);
}

#[test]
fn click_and_release_stamp_activity() {
    let (mut gui, id) = overlay_with_window();

    gui.handle_pointer_down(150.0, 110.0, 0);
    assert!((gui.get(id).unwrap().last_active_ms() - 1000.0).abs() < 0.001);

    gui.begin_frame(1500.0);
    gui.handle_pointer_up(150.0, 110.0);
    assert!((gui.get(id).unwrap().last_active_ms() - 1500.0).abs() < 0.001);
}

#[test]
fn drag_outside_all_zones_is_ignored() {
    let mut window = chrome();
    // click well outside the window box
    let click = Vec2::new(500.0, 500.0);

    let effect = window.on_drag(click.offset(50.0, 50.0), click, SCREEN);

    assert_eq!(effect, DragEffect::Ignored);
    assert!((window.position().x - 100.0).abs() < 0.001);
    assert!((window.size().width - 200.0).abs() < 0.001);
}

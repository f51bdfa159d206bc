//! Window chrome for the in-game overlay GUI
//!
//! This crate provides the interactive state machine behind the overlay's
//! draggable windows:
//!
//! - Drag-to-move and edge/corner drag-to-resize with screen clamping
//! - Minimize/restore with an ease-out-quartic height animation
//! - Hit testing against the pre-drag snapshot and animated height
//! - Pointer dispatch, z-ordering, and focus across windows
//! - Layout serialization for the host settings system
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`anim`]: Named easing curves and the minimize animation
//! - [`setting`]: Observable value cells with change listeners
//! - [`input`]: Mouse state, pre-drag snapshots, drag results
//! - [`window`]: Zone classification, resize solvers, and `WindowChrome`
//! - [`overlay`]: The owning GUI screen and pointer dispatch
//! - [`persistence`]: Layout snapshots for storage
//!
//! ## Example
//!
//! ```rust
//! use hud_chrome::{OverlayGui, WindowChromeConfig, Size, Vec2};
//!
//! let mut gui = OverlayGui::new();
//! gui.init(1920.0, 1080.0);
//!
//! let id = gui.add_window(WindowChromeConfig {
//!     title: "Radar".to_string(),
//!     position: Vec2::new(100.0, 100.0),
//!     size: Size::new(200.0, 150.0),
//!     header_height: Some(20.0),
//!     ..Default::default()
//! });
//!
//! gui.on_gui_open(0.0);
//! gui.begin_frame(16.0);
//! let rect = gui.render_rect(id).unwrap();
//! assert!(rect.height > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: all state is plain data, testable without the host
//! 2. **Time Abstraction**: timestamps are injected, never read from a clock
//! 3. **Single-Threaded**: mutation happens on the host's main loop only

pub mod anim;
pub mod input;
pub mod math;
pub mod overlay;
pub mod persistence;
pub mod setting;
pub mod window;

mod frame;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use anim::{Curve, MinimizeAnimation, MINIMIZE_DURATION_MS};
pub use frame::{FrameClock, FrameValue};
pub use input::{DragEffect, DragSnapshot, MouseButton, MouseState};
pub use math::{Rect, Size, Vec2};
pub use overlay::{OverlayGui, WindowHooks};
pub use persistence::{LayoutSnapshot, WindowLayout};
pub use setting::{Setting, SubscriptionId};
pub use window::{
    DragIntent, HZone, VZone, WindowChrome, WindowChromeConfig, WindowId, EDGE_TOLERANCE,
};

//! Layout persistence module
//!
//! Serializable snapshots of window geometry and minimize state. The storage
//! backend lives in the host settings system; this crate only defines the
//! capture/apply surface.

mod snapshot;

pub use snapshot::{LayoutSnapshot, WindowLayout};

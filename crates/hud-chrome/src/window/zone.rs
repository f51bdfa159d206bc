//! Edge-zone classification for drag starts

use crate::math::{Size, Vec2};

/// Grab tolerance outside the nominal window box, in pixels
pub const EDGE_TOLERANCE: f32 = 2.0;

/// Widest an edge splitter band gets on large windows
const MAX_SPLITTER: f32 = 10.0;

/// Narrow top band used when a separate header must move instead of resize
const HEADER_SPLITTER: f32 = 2.5;

/// Horizontal zone of a click relative to the window edges
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HZone {
    Left,
    Center,
    Right,
}

/// Vertical zone of a click relative to the window edges
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VZone {
    Top,
    Center,
    Bottom,
}

/// Classified zone pair; `None` on an axis means the click fell outside it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZonePair {
    pub horizontal: Option<HZone>,
    pub vertical: Option<VZone>,
}

/// What a drag that started at a classified point should do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragIntent {
    /// Resize along one or both axes
    Resize { horizontal: HZone, vertical: VZone },
    /// Reposition the whole window
    Move,
    /// Drag is ignored
    None,
}

/// Classify a click offset against the pre-drag window box
///
/// `rel_click` is the click position relative to the pre-drag top-left.
/// Splitter bands are `min(10, extent / 3)` wide; boundaries resolve to the
/// earlier zone (left/top win ties). When the window has a separate draggable
/// header and the horizontal zone is CENTER, the top band narrows to 2.5 px
/// so header clicks move the window instead of resizing it.
pub fn classify(rel_click: Vec2, size: Size, header_height: Option<f32>) -> ZonePair {
    let h_splitter = MAX_SPLITTER.min(size.width / 3.0);
    let horizontal = if rel_click.x < -EDGE_TOLERANCE || rel_click.x > size.width + EDGE_TOLERANCE {
        None
    } else if rel_click.x <= h_splitter {
        Some(HZone::Left)
    } else if rel_click.x <= size.width - h_splitter {
        Some(HZone::Center)
    } else {
        Some(HZone::Right)
    };

    let v_splitter = MAX_SPLITTER.min(size.height / 3.0);
    let top_splitter = if header_height.is_some() && horizontal == Some(HZone::Center) {
        HEADER_SPLITTER
    } else {
        v_splitter
    };
    let vertical = if rel_click.y < -EDGE_TOLERANCE || rel_click.y > size.height + EDGE_TOLERANCE {
        None
    } else if rel_click.y <= top_splitter {
        Some(VZone::Top)
    } else if rel_click.y <= size.height - v_splitter {
        Some(VZone::Center)
    } else {
        Some(VZone::Bottom)
    };

    ZonePair { horizontal, vertical }
}

/// Decide what a drag starting at this zone pair does
pub fn drag_intent(
    zones: ZonePair,
    resizable: bool,
    minimized: bool,
    header_height: Option<f32>,
    rel_click_y: f32,
) -> DragIntent {
    let (horizontal, vertical) = match (zones.horizontal, zones.vertical) {
        (Some(h), Some(v)) => (h, v),
        _ => return DragIntent::None,
    };

    let is_center = horizontal == HZone::Center && vertical == VZone::Center;
    if resizable && !minimized && !is_center {
        DragIntent::Resize { horizontal, vertical }
    } else if header_height.map_or(true, |h| rel_click_y <= h) {
        DragIntent::Move
    } else {
        // TODO: forward these drags to the window's content region
        DragIntent::None
    }
}

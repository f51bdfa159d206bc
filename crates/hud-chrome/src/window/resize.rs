//! Edge-drag resize solvers, one axis at a time
//!
//! Horizontal and vertical resizing are fully independent: a corner drag is
//! just both solvers applied to the same drag delta. Each solver works from
//! the pre-drag snapshot, so repeated calls during one drag stay stable.

use super::zone::{HZone, VZone};
use crate::input::DragSnapshot;

/// Resolved position/extent for one axis after a resize step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisFit {
    pub pos: f32,
    pub extent: f32,
}

/// Solve a leading-edge (left/top) drag
///
/// The delta is clamped so the dragged edge stays at coordinate 1 or beyond,
/// then the extent bottoms out at `min_extent` and is capped by `max_extent`
/// and the screen. The opposite edge stays fixed: the position absorbs
/// whatever the extent gave up.
fn solve_leading(
    delta: f32,
    pre_pos: f32,
    pre_extent: f32,
    min_extent: f32,
    max_extent: Option<f32>,
    screen_extent: f32,
) -> AxisFit {
    let dragged = delta.max(1.0 - pre_pos);
    let mut extent = (pre_extent - dragged).max(min_extent);
    if let Some(max) = max_extent {
        extent = extent.min(max);
    }
    extent = extent.min(screen_extent - 2.0);

    AxisFit {
        pos: pre_pos + (pre_extent - extent),
        extent,
    }
}

/// Solve a trailing-edge (right/bottom) drag
///
/// The delta is clamped so the far edge cannot collapse past the leading
/// edge; position is untouched and only the extent grows or shrinks, capped
/// by `max_extent` and the remaining screen space.
fn solve_trailing(
    delta: f32,
    pre_pos: f32,
    pre_extent: f32,
    min_extent: f32,
    max_extent: Option<f32>,
    screen_extent: f32,
) -> AxisFit {
    let dragged = delta.min(pre_pos + pre_extent - 1.0);
    let mut extent = (pre_extent + dragged).max(min_extent);
    if let Some(max) = max_extent {
        extent = extent.min(max);
    }
    extent = extent.min(screen_extent - pre_pos - 2.0);

    AxisFit {
        pos: pre_pos,
        extent,
    }
}

/// Apply a horizontal resize for the given zone; CENTER leaves the axis alone
pub fn resize_horizontal(
    zone: HZone,
    delta_x: f32,
    snapshot: &DragSnapshot,
    min_width: f32,
    max_width: Option<f32>,
    screen_width: f32,
) -> Option<AxisFit> {
    match zone {
        HZone::Left => Some(solve_leading(
            delta_x,
            snapshot.position.x,
            snapshot.size.width,
            min_width,
            max_width,
            screen_width,
        )),
        HZone::Right => Some(solve_trailing(
            delta_x,
            snapshot.position.x,
            snapshot.size.width,
            min_width,
            max_width,
            screen_width,
        )),
        HZone::Center => None,
    }
}

/// Apply a vertical resize for the given zone; CENTER leaves the axis alone
pub fn resize_vertical(
    zone: VZone,
    delta_y: f32,
    snapshot: &DragSnapshot,
    min_height: f32,
    max_height: Option<f32>,
    screen_height: f32,
) -> Option<AxisFit> {
    match zone {
        VZone::Top => Some(solve_leading(
            delta_y,
            snapshot.position.y,
            snapshot.size.height,
            min_height,
            max_height,
            screen_height,
        )),
        VZone::Bottom => Some(solve_trailing(
            delta_y,
            snapshot.position.y,
            snapshot.size.height,
            min_height,
            max_height,
            screen_height,
        )),
        VZone::Center => None,
    }
}

#![forbid(unsafe_code)]

//! Pure geometry transforms applied on every pointer move.
//!
//! Both transforms take the rectangle captured when the session started and
//! the pointer displacement from the session's start sample. They never look
//! at the previous frame, so re-applying the same inputs yields the same
//! rectangle and dropped intermediate moves cannot corrupt state.
//!
//! The resize table is expressed per axis. [`ResizeDirection::horizontal_edge`]
//! and [`ResizeDirection::vertical_edge`] say which edge of each axis a handle
//! moves; the axis rule is then:
//!
//! | edge   | new size                 | new offset                      |
//! |--------|--------------------------|---------------------------------|
//! | none   | `size`                   | `offset`                        |
//! | end    | `max(min, size + delta)` | `offset`                        |
//! | start  | `max(min, size - delta)` | `offset + delta` (see [`AnchorPolicy`]) |

use serde::{Deserialize, Serialize};

use crate::direction::{AxisEdge, ResizeDirection};
use crate::geometry::{MinConstraints, PointerDelta, Rect};

/// How the moving edge behaves once its dimension is clamped at the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorPolicy {
    /// The offset always advances by the full pointer delta. After the size
    /// hits its minimum the opposite (anchor) edge drifts with the pointer.
    #[default]
    Drift,
    /// The offset is derived from the clamped size, so the anchor edge stays
    /// put once the minimum is reached.
    Pinned,
}

/// Resize `start` by dragging the `direction` handle by `delta`.
#[must_use]
pub fn resize_rect(
    start: Rect,
    direction: ResizeDirection,
    delta: PointerDelta,
    min: MinConstraints,
    policy: AnchorPolicy,
) -> Rect {
    let (width, left) = resize_axis(
        start.width,
        start.left,
        delta.dx,
        min.min_width,
        direction.horizontal_edge(),
        policy,
    );
    let (height, top) = resize_axis(
        start.height,
        start.top,
        delta.dy,
        min.min_height,
        direction.vertical_edge(),
        policy,
    );
    Rect {
        width,
        height,
        top,
        left,
    }
}

/// Move `start` by `delta`. Size is untouched and no bounds are applied.
#[must_use]
pub const fn translate_rect(start: Rect, delta: PointerDelta) -> Rect {
    start.offset(delta)
}

fn resize_axis(
    size: i32,
    offset: i32,
    delta: i32,
    min: i32,
    edge: Option<AxisEdge>,
    policy: AnchorPolicy,
) -> (i32, i32) {
    match edge {
        None => (size, offset),
        Some(AxisEdge::End) => (size.saturating_add(delta).max(min), offset),
        Some(AxisEdge::Start) => {
            let new_size = size.saturating_sub(delta).max(min);
            let new_offset = match policy {
                AnchorPolicy::Drift => offset.saturating_add(delta),
                AnchorPolicy::Pinned => offset.saturating_add(size.saturating_sub(new_size)),
            };
            (new_size, new_offset)
        }
    }
}

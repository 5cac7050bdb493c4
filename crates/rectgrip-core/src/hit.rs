#![forbid(unsafe_code)]

//! Optional handle hit-testing for hosts without their own hit regions.
//!
//! Handles sit inside the rectangle: edge strips run along each side and
//! square corner regions overlap the strip ends. Precedence is
//! corner > edge > body, so a press on a handle never also reads as a body
//! press.

use serde::{Deserialize, Serialize};

use crate::direction::ResizeDirection;
use crate::geometry::{Point, Rect};

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "target", content = "direction", rename_all = "snake_case")]
pub enum PointerTarget {
    Body,
    Handle(ResizeDirection),
}

impl PointerTarget {
    /// Direction to resize, or `None` for a body drag.
    #[must_use]
    pub const fn direction(self) -> Option<ResizeDirection> {
        match self {
            Self::Body => None,
            Self::Handle(direction) => Some(direction),
        }
    }
}

impl From<Option<ResizeDirection>> for PointerTarget {
    fn from(handle: Option<ResizeDirection>) -> Self {
        handle.map_or(Self::Body, Self::Handle)
    }
}

/// Thickness of the edge strips and size of the corner squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleHitRegions {
    pub edge_thickness: i32,
    pub corner_size: i32,
}

impl Default for HandleHitRegions {
    fn default() -> Self {
        Self {
            edge_thickness: 8,
            corner_size: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Start,
    End,
}

impl HandleHitRegions {
    /// Classify `point` against `rect`. Returns `None` outside the rect.
    #[must_use]
    pub fn classify(&self, rect: Rect, point: Point) -> Option<PointerTarget> {
        if !rect.contains(point) {
            return None;
        }
        let corner = self.corner_size.max(0);
        let edge = self.edge_thickness.max(0);

        let horizontal = nearest_side(point.x, rect.left, rect.right(), corner);
        let vertical = nearest_side(point.y, rect.top, rect.bottom(), corner);
        if let (Some(h), Some(v)) = (horizontal, vertical) {
            let direction = match (v, h) {
                (Side::Start, Side::Start) => ResizeDirection::TopLeft,
                (Side::Start, Side::End) => ResizeDirection::TopRight,
                (Side::End, Side::Start) => ResizeDirection::BottomLeft,
                (Side::End, Side::End) => ResizeDirection::BottomRight,
            };
            return Some(PointerTarget::Handle(direction));
        }

        let horizontal = nearest_side(point.x, rect.left, rect.right(), edge);
        let vertical = nearest_side(point.y, rect.top, rect.bottom(), edge);
        let direction = match (vertical, horizontal) {
            (Some(Side::Start), _) => Some(ResizeDirection::Top),
            (Some(Side::End), _) => Some(ResizeDirection::Bottom),
            (None, Some(Side::Start)) => Some(ResizeDirection::Left),
            (None, Some(Side::End)) => Some(ResizeDirection::Right),
            (None, None) => None,
        };
        Some(PointerTarget::from(direction))
    }
}

/// Which side of `[start, end)` `value` is within `band` of, preferring the
/// closer side when both qualify.
fn nearest_side(value: i32, start: i32, end: i32, band: i32) -> Option<Side> {
    let from_start = value.saturating_sub(start);
    let from_end = end.saturating_sub(1).saturating_sub(value);
    let near_start = from_start < band;
    let near_end = from_end < band;
    match (near_start, near_end) {
        (true, true) if from_end < from_start => Some(Side::End),
        (true, _) => Some(Side::Start),
        (false, true) => Some(Side::End),
        (false, false) => None,
    }
}

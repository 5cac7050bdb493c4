#![forbid(unsafe_code)]

//! Transient gesture records.
//!
//! A [`Session`] is created on pointer-down, read on every move, and dropped
//! on pointer-up or cancellation. Drag and resize bookkeeping are variants of
//! one enum, so at most one of them can be live.

use rectgrip_core::{GeometryStore, Point, PointerDelta, Rect, ResizeDirection};
use serde::{Deserialize, Serialize};

/// Kind of gesture a session tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "direction", rename_all = "snake_case")]
pub enum SessionKind {
    Drag,
    Resize(ResizeDirection),
}

/// Start snapshot for a body drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub start_pointer: Point,
    pub start_rect: Rect,
}

/// Start snapshot for a handle resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeSession {
    pub direction: ResizeDirection,
    pub start_pointer: Point,
    pub start_rect: Rect,
}

/// A live gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "session", rename_all = "snake_case")]
pub enum Session {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl Session {
    /// Capture a snapshot of `start_rect` at `start_pointer`.
    #[must_use]
    pub const fn begin(kind: SessionKind, start_pointer: Point, start_rect: Rect) -> Self {
        match kind {
            SessionKind::Drag => Self::Drag(DragSession {
                start_pointer,
                start_rect,
            }),
            SessionKind::Resize(direction) => Self::Resize(ResizeSession {
                direction,
                start_pointer,
                start_rect,
            }),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        match self {
            Self::Drag(_) => SessionKind::Drag,
            Self::Resize(resize) => SessionKind::Resize(resize.direction),
        }
    }

    #[must_use]
    pub const fn start_pointer(&self) -> Point {
        match self {
            Self::Drag(drag) => drag.start_pointer,
            Self::Resize(resize) => resize.start_pointer,
        }
    }

    #[must_use]
    pub const fn start_rect(&self) -> Rect {
        match self {
            Self::Drag(drag) => drag.start_rect,
            Self::Resize(resize) => resize.start_rect,
        }
    }

    /// Displacement of `pointer` from this session's start sample.
    #[must_use]
    pub const fn delta(&self, pointer: Point) -> PointerDelta {
        pointer.delta_from(self.start_pointer())
    }

    /// Transform the start snapshot for `pointer` and commit it to `store`.
    pub fn apply(&self, store: &mut GeometryStore, pointer: Point) -> Rect {
        let PointerDelta { dx, dy } = self.delta(pointer);
        match self {
            Self::Drag(drag) => store.apply_drag(dx, dy, drag.start_rect),
            Self::Resize(resize) => {
                store.apply_resize(resize.direction, dx, dy, resize.start_rect)
            }
        }
    }
}

#![forbid(unsafe_code)]

//! Geometric primitives shared by the store and the interaction layer.
//!
//! All coordinates are signed and live in the same space as the pointer
//! samples fed to the controller. Nothing here knows about pixels or
//! viewports: a rectangle may sit at negative offsets or entirely off
//! screen.

use serde::{Deserialize, Serialize};

/// A pointer sample position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to `self`.
    #[must_use]
    pub const fn delta_from(self, origin: Point) -> PointerDelta {
        PointerDelta {
            dx: self.x.saturating_sub(origin.x),
            dy: self.y.saturating_sub(origin.y),
        }
    }
}

/// Pointer displacement relative to a session's start sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PointerDelta {
    pub dx: i32,
    pub dy: i32,
}

impl PointerDelta {
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// On-screen region reported to the presentation layer.
///
/// Field order follows the `{ width, height, top, left }` shape hosts read
/// after every commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub width: i32,
    pub height: i32,
    pub top: i32,
    pub left: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(width: i32, height: i32, top: i32, left: i32) -> Self {
        Self {
            width,
            height,
            top,
            left,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x < self.right()
            && point.y >= self.top
            && point.y < self.bottom()
    }

    /// Translate the rectangle without touching its size.
    #[inline]
    #[must_use]
    pub const fn offset(&self, delta: PointerDelta) -> Self {
        Self {
            width: self.width,
            height: self.height,
            top: self.top.saturating_add(delta.dy),
            left: self.left.saturating_add(delta.dx),
        }
    }

    /// Whether both dimensions satisfy `min`.
    #[inline]
    #[must_use]
    pub const fn satisfies(&self, min: MinConstraints) -> bool {
        self.width >= min.min_width && self.height >= min.min_height
    }
}

/// Minimum dimensions enforced on every geometry mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinConstraints {
    pub min_width: i32,
    pub min_height: i32,
}

impl MinConstraints {
    /// Default minimum edge length on both axes.
    pub const DEFAULT_MIN_SIZE: i32 = 50;

    #[must_use]
    pub const fn new(min_width: i32, min_height: i32) -> Self {
        Self {
            min_width,
            min_height,
        }
    }

    /// Same minimum on both axes.
    #[must_use]
    pub const fn square(min_size: i32) -> Self {
        Self::new(min_size, min_size)
    }
}

impl Default for MinConstraints {
    fn default() -> Self {
        Self::square(Self::DEFAULT_MIN_SIZE)
    }
}

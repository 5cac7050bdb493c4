#![forbid(unsafe_code)]

//! Resize directions and the edges each one moves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which edge of an axis a resize direction moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisEdge {
    /// Leading edge (`left` or `top`): the offset follows the pointer and
    /// the size shrinks as the pointer advances.
    Start,
    /// Trailing edge (`right` or `bottom`): the offset is fixed and the
    /// size grows as the pointer advances.
    End,
}

/// One of the eight edge/corner handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeDirection {
    Top,
    Right,
    Bottom,
    Left,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeDirection {
    /// Every direction, edges first then corners.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::Right,
        Self::Bottom,
        Self::Left,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Edge moved on the horizontal axis, if any.
    #[must_use]
    pub const fn horizontal_edge(self) -> Option<AxisEdge> {
        match self {
            Self::Left | Self::TopLeft | Self::BottomLeft => Some(AxisEdge::Start),
            Self::Right | Self::TopRight | Self::BottomRight => Some(AxisEdge::End),
            Self::Top | Self::Bottom => None,
        }
    }

    /// Edge moved on the vertical axis, if any.
    #[must_use]
    pub const fn vertical_edge(self) -> Option<AxisEdge> {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Some(AxisEdge::Start),
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Some(AxisEdge::End),
            Self::Left | Self::Right => None,
        }
    }

    #[must_use]
    pub const fn is_corner(self) -> bool {
        self.horizontal_edge().is_some() && self.vertical_edge().is_some()
    }

    /// CSS cursor keyword for hovering this handle.
    #[must_use]
    pub const fn cursor_hint(self) -> &'static str {
        match self {
            Self::Top => "n-resize",
            Self::Right => "e-resize",
            Self::Bottom => "s-resize",
            Self::Left => "w-resize",
            Self::TopLeft => "nw-resize",
            Self::TopRight => "ne-resize",
            Self::BottomLeft => "sw-resize",
            Self::BottomRight => "se-resize",
        }
    }

    /// Kebab-case name, as used by hosts that tag handles with strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| ParseDirectionError {
                input: s.to_owned(),
            })
    }
}

/// A handle name outside the eight known directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown resize direction {:?}", self.input)
    }
}

impl std::error::Error for ParseDirectionError {}

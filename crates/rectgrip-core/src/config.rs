#![forbid(unsafe_code)]

//! Construction-time configuration for a resizable region.
//!
//! Configuration is fixed for the lifetime of a store. Missing fields in a
//! serialized config fall back to [`GeometryConfig::default`], which mirrors
//! the stock box: 300x200 at (100, 100) with a 50x50 floor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{MinConstraints, Rect};
use crate::transform::AnchorPolicy;

/// Initial rectangle, minimum size, and clamp behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub initial: Rect,
    pub min: MinConstraints,
    pub anchor_policy: AnchorPolicy,
}

impl GeometryConfig {
    pub const DEFAULT_INITIAL: Rect = Rect::new(300, 200, 100, 100);

    /// Reject configurations that would break the size invariant from the
    /// first frame.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min.min_width < 0 || self.min.min_height < 0 {
            return Err(ConfigError::NegativeMinimum { min: self.min });
        }
        if !self.initial.satisfies(self.min) {
            return Err(ConfigError::InitialBelowMinimum {
                initial: self.initial,
                min: self.min,
            });
        }
        Ok(())
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            initial: Self::DEFAULT_INITIAL,
            min: MinConstraints::default(),
            anchor_policy: AnchorPolicy::Drift,
        }
    }
}

/// Invalid geometry configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NegativeMinimum { min: MinConstraints },
    InitialBelowMinimum { initial: Rect, min: MinConstraints },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeMinimum { min } => write!(
                f,
                "minimum size must be >= 0 (got min_width={} min_height={})",
                min.min_width, min.min_height
            ),
            Self::InitialBelowMinimum { initial, min } => write!(
                f,
                "initial size {}x{} is below minimum {}x{}",
                initial.width, initial.height, min.min_width, min.min_height
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#![forbid(unsafe_code)]

//! Core: rectangle geometry for drag/resize interactions.
//!
//! # Role in RectGrip
//! `rectgrip-core` is the pure half of the engine. It owns the rectangle a
//! host renders ([`GeometryStore`]), the per-direction resize table
//! ([`resize_rect`]), translation ([`translate_rect`]), and minimum-size
//! clamping. Nothing here tracks pointer state; that lives in
//! `rectgrip-interaction`, which feeds session snapshots and deltas into the
//! store.
//!
//! # Invariants
//! 1. After any commit, `width >= min_width` and `height >= min_height`.
//! 2. `top`/`left` are never bounded.
//! 3. Transforms depend only on the start snapshot and the delta from the
//!    session's start pointer, never on the previous frame.

pub mod config;
pub mod direction;
pub mod geometry;
pub mod hit;
pub mod store;
pub mod transform;

pub use config::{ConfigError, GeometryConfig};
pub use direction::{AxisEdge, ParseDirectionError, ResizeDirection};
pub use geometry::{MinConstraints, Point, PointerDelta, Rect};
pub use hit::{HandleHitRegions, PointerTarget};
pub use store::GeometryStore;
pub use transform::{AnchorPolicy, resize_rect, translate_rect};

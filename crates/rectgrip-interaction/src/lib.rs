#![forbid(unsafe_code)]

//! Interaction: the drag/resize state machine over a [`GeometryStore`].
//!
//! Hosts forward three inbound signals, `pointer_down(point, handle?)`,
//! `pointer_move(point)` and `pointer_up()`, plus the interruption signals
//! `blur()` and `pointer_lost()`. After every step they read
//! [`InteractionController::rect`] (or [`InteractionTransition::rect`]) and
//! redraw. The controller is single-threaded and synchronous: each call runs
//! to completion and there is nothing to await.
//!
//! # Feature flags
//! - `tracing`: structured session lifecycle logs via the `tracing` crate.
//!
//! [`GeometryStore`]: rectgrip_core::GeometryStore

pub mod capture;
pub mod controller;
pub mod session;

pub use capture::{CaptureHandle, DetachedHost, PointerCaptureHost};
pub use controller::{
    CancelReason, EndReason, InteractionConfig, InteractionController, InteractionEffect,
    InteractionState, InteractionTransition, NoopReason,
};
pub use session::{DragSession, ResizeSession, Session, SessionKind};

pub use rectgrip_core::{
    AnchorPolicy, ConfigError, GeometryConfig, GeometryStore, HandleHitRegions, MinConstraints,
    Point, PointerDelta, PointerTarget, Rect, ResizeDirection,
};

#![forbid(unsafe_code)]

//! Pointer-driven drag/resize lifecycle.
//!
//! ```text
//! Idle --down(handle)--> Resizing(direction) --move--> Resizing(direction)
//! Idle --down(body)----> Dragging            --move--> Dragging
//! Resizing | Dragging --up / blur / lost / cancel--> Idle
//! ```
//!
//! # Invariants
//!
//! 1. At most one session is live. A pointer-down while a session is live is
//!    a no-op, so a body press bubbling after a handle press cannot start a
//!    second gesture.
//! 2. Every move is computed from the session start snapshot.
//! 3. A capture handle is acquired exactly when a session starts and is
//!    released exactly once when it ends. All endings, including drop of the
//!    controller, go through [`InteractionController::end_session`].
//! 4. Moves and ups while idle never touch geometry.

use rectgrip_core::{
    ConfigError, GeometryConfig, GeometryStore, HandleHitRegions, Point, PointerDelta,
    PointerTarget, Rect, ResizeDirection,
};
use serde::{Deserialize, Serialize};

use crate::capture::{CaptureHandle, DetachedHost, PointerCaptureHost};
use crate::session::{Session, SessionKind};

/// Controller configuration, fixed for the controller's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub geometry: GeometryConfig,
    /// Hit regions used by [`InteractionController::pointer_down_at`].
    pub hit_regions: HandleHitRegions,
    /// Restore the session's start rectangle when a session is cancelled
    /// rather than finished with a pointer-up.
    pub revert_on_cancel: bool,
}

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "direction", rename_all = "snake_case")]
pub enum InteractionState {
    Idle,
    Dragging,
    Resizing(ResizeDirection),
}

impl InteractionState {
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl From<SessionKind> for InteractionState {
    fn from(kind: SessionKind) -> Self {
        match kind {
            SessionKind::Drag => Self::Dragging,
            SessionKind::Resize(direction) => Self::Resizing(direction),
        }
    }
}

/// Why a live session ended without a pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// The window or document lost focus.
    Blur,
    /// The host lost its pointer subscription (`lostpointercapture`, grab
    /// broken, device unplugged).
    PointerLost,
    /// The embedding application ended the session, or the controller was
    /// dropped mid-gesture.
    Programmatic,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "end", content = "reason", rename_all = "snake_case")]
pub enum EndReason {
    PointerUp,
    Cancelled(CancelReason),
}

/// Explicit diagnostics for inputs that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoopReason {
    /// Move, up, or cancel with no live session.
    IdleWithoutSession,
    /// Pointer-down while a session is live.
    SessionAlreadyActive,
    /// Hit-tested pointer-down outside the rectangle.
    OutsideRect,
}

/// Effect of one input on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum InteractionEffect {
    SessionStarted {
        kind: SessionKind,
        origin: Point,
        start_rect: Rect,
        capture: CaptureHandle,
    },
    GeometryCommitted {
        rect: Rect,
        delta: PointerDelta,
    },
    SessionEnded {
        kind: SessionKind,
        reason: EndReason,
        rect: Rect,
        released: CaptureHandle,
    },
    Noop {
        reason: NoopReason,
    },
}

/// One controller step with deterministic telemetry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionTransition {
    pub sequence: u64,
    pub from: InteractionState,
    pub to: InteractionState,
    pub effect: InteractionEffect,
}

impl InteractionTransition {
    /// Rectangle the host should render after this step, if it changed or a
    /// session finished.
    #[must_use]
    pub const fn rect(&self) -> Option<Rect> {
        match self.effect {
            InteractionEffect::GeometryCommitted { rect, .. }
            | InteractionEffect::SessionEnded { rect, .. } => Some(rect),
            InteractionEffect::SessionStarted { .. } | InteractionEffect::Noop { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self.effect, InteractionEffect::Noop { .. })
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveSession {
    session: Session,
    capture: CaptureHandle,
}

/// Interprets pointer samples as drags or anchored resizes of one rectangle.
#[derive(Debug)]
pub struct InteractionController<H: PointerCaptureHost = DetachedHost> {
    store: GeometryStore,
    hit_regions: HandleHitRegions,
    revert_on_cancel: bool,
    active: Option<ActiveSession>,
    host: H,
    next_sequence: u64,
}

impl InteractionController<DetachedHost> {
    /// Controller for hosts that route every pointer event explicitly.
    pub fn new(config: InteractionConfig) -> Result<Self, ConfigError> {
        Self::with_host(config, DetachedHost::default())
    }
}

impl<H: PointerCaptureHost> InteractionController<H> {
    /// Controller that acquires pointer subscriptions from `host`.
    pub fn with_host(config: InteractionConfig, host: H) -> Result<Self, ConfigError> {
        let store = GeometryStore::new(config.geometry)?;
        Ok(Self {
            store,
            hit_regions: config.hit_regions,
            revert_on_cancel: config.revert_on_cancel,
            active: None,
            host,
            next_sequence: 1,
        })
    }

    /// Rectangle to render.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.store.current()
    }

    #[must_use]
    pub const fn store(&self) -> &GeometryStore {
        &self.store
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.active
            .map_or(InteractionState::Idle, |active| active.session.kind().into())
    }

    /// Live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.active.as_ref().map(|active| &active.session)
    }

    /// Capture handle held by the live session, if any.
    #[must_use]
    pub fn capture(&self) -> Option<CaptureHandle> {
        self.active.map(|active| active.capture)
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Pointer-down on a handle (`Some(direction)`) or the body (`None`).
    pub fn pointer_down(
        &mut self,
        point: Point,
        handle: Option<ResizeDirection>,
    ) -> InteractionTransition {
        self.pointer_down_on(point, PointerTarget::from(handle))
    }

    /// Pointer-down on an already classified target.
    pub fn pointer_down_on(&mut self, point: Point, target: PointerTarget) -> InteractionTransition {
        let kind = match target {
            PointerTarget::Body => SessionKind::Drag,
            PointerTarget::Handle(direction) => SessionKind::Resize(direction),
        };
        self.begin_session(kind, point)
    }

    /// Pointer-down classified against the current rectangle with the
    /// configured hit regions.
    pub fn pointer_down_at(&mut self, point: Point) -> InteractionTransition {
        match self.hit_regions.classify(self.store.current(), point) {
            Some(target) => self.pointer_down_on(point, target),
            // A live session rejects every down, inside the rect or not.
            None if self.active.is_some() => self.pointer_down_on(point, PointerTarget::Body),
            None => self.noop(NoopReason::OutsideRect),
        }
    }

    /// Pointer-move; recomputes geometry from the session start snapshot.
    pub fn pointer_move(&mut self, point: Point) -> InteractionTransition {
        let Some(active) = self.active else {
            return self.noop(NoopReason::IdleWithoutSession);
        };
        let delta = active.session.delta(point);
        let rect = active.session.apply(&mut self.store, point);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            dx = delta.dx,
            dy = delta.dy,
            width = rect.width,
            height = rect.height,
            top = rect.top,
            left = rect.left,
            "rectgrip geometry committed"
        );
        let state = self.state();
        self.transition(
            state,
            state,
            InteractionEffect::GeometryCommitted { rect, delta },
        )
    }

    /// Pointer-up; closes the live session without touching geometry.
    pub fn pointer_up(&mut self) -> InteractionTransition {
        self.end_session(EndReason::PointerUp)
    }

    /// Focus left the window mid-gesture.
    pub fn blur(&mut self) -> InteractionTransition {
        self.cancel(CancelReason::Blur)
    }

    /// The host's pointer subscription was taken away.
    pub fn pointer_lost(&mut self) -> InteractionTransition {
        self.cancel(CancelReason::PointerLost)
    }

    /// Force the controller back to idle.
    pub fn cancel(&mut self, reason: CancelReason) -> InteractionTransition {
        self.end_session(EndReason::Cancelled(reason))
    }

    fn begin_session(&mut self, kind: SessionKind, point: Point) -> InteractionTransition {
        if let Some(_active) = self.active {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                active = ?_active.session.kind(),
                ignored = ?kind,
                "rectgrip pointer-down ignored: session already active"
            );
            return self.noop(NoopReason::SessionAlreadyActive);
        }

        let start_rect = self.store.current();
        let capture = self.host.acquire(kind);
        let session = Session::begin(kind, point, start_rect);
        self.active = Some(ActiveSession { session, capture });
        #[cfg(feature = "tracing")]
        tracing::debug!(
            kind = ?kind,
            x = point.x,
            y = point.y,
            capture = capture.get(),
            "rectgrip session started"
        );
        self.transition(
            InteractionState::Idle,
            kind.into(),
            InteractionEffect::SessionStarted {
                kind,
                origin: point,
                start_rect,
                capture,
            },
        )
    }

    /// Sole exit path for a live session: releases the capture handle and
    /// applies the cancel policy.
    fn end_session(&mut self, reason: EndReason) -> InteractionTransition {
        let Some(active) = self.active.take() else {
            return self.noop(NoopReason::IdleWithoutSession);
        };
        self.host.release(active.capture);
        if self.revert_on_cancel && matches!(reason, EndReason::Cancelled(_)) {
            self.store.restore(active.session.start_rect());
        }
        let kind = active.session.kind();
        let rect = self.store.current();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            kind = ?kind,
            reason = ?reason,
            capture = active.capture.get(),
            "rectgrip session ended"
        );
        self.transition(
            kind.into(),
            InteractionState::Idle,
            InteractionEffect::SessionEnded {
                kind,
                reason,
                rect,
                released: active.capture,
            },
        )
    }

    fn noop(&mut self, reason: NoopReason) -> InteractionTransition {
        let state = self.state();
        self.transition(state, state, InteractionEffect::Noop { reason })
    }

    fn transition(
        &mut self,
        from: InteractionState,
        to: InteractionState,
        effect: InteractionEffect,
    ) -> InteractionTransition {
        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);
        InteractionTransition {
            sequence,
            from,
            to,
            effect,
        }
    }
}

impl<H: PointerCaptureHost> Drop for InteractionController<H> {
    fn drop(&mut self) {
        if self.active.is_some() {
            let _ = self.end_session(EndReason::Cancelled(CancelReason::Programmatic));
        }
    }
}

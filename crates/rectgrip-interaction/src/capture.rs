#![forbid(unsafe_code)]

//! Host seam for the global pointer move/up subscription.
//!
//! While a session is live the host must deliver pointer moves and the final
//! pointer-up even when the pointer leaves the rectangle (DOM
//! `setPointerCapture()`, window-level listeners, an X11 grab...). The
//! controller asks for that subscription once per session through
//! [`PointerCaptureHost::acquire`] and hands the [`CaptureHandle`] back through
//! [`PointerCaptureHost::release`] when the session ends, on every exit path.

use serde::{Deserialize, Serialize};

use crate::session::SessionKind;

/// Opaque token for one acquired move/up subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptureHandle(u64);

impl CaptureHandle {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Acquires and releases the pointer subscription backing a session.
pub trait PointerCaptureHost {
    /// Start routing pointer move/up to the controller for a new session.
    fn acquire(&mut self, kind: SessionKind) -> CaptureHandle;

    /// Stop routing for the session that owned `handle`.
    fn release(&mut self, handle: CaptureHandle);
}

/// Host that already routes every pointer event to the controller.
///
/// Hands out increasing handles and releases nothing.
#[derive(Debug, Clone, Default)]
pub struct DetachedHost {
    next: u64,
}

impl PointerCaptureHost for DetachedHost {
    fn acquire(&mut self, _kind: SessionKind) -> CaptureHandle {
        self.next = self.next.saturating_add(1);
        CaptureHandle::new(self.next)
    }

    fn release(&mut self, _handle: CaptureHandle) {}
}

impl<H: PointerCaptureHost + ?Sized> PointerCaptureHost for Box<H> {
    fn acquire(&mut self, kind: SessionKind) -> CaptureHandle {
        (**self).acquire(kind)
    }

    fn release(&mut self, handle: CaptureHandle) {
        (**self).release(handle);
    }
}

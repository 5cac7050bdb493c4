#![forbid(unsafe_code)]

//! Single source of truth for the rectangle a host renders.

use crate::config::{ConfigError, GeometryConfig};
use crate::direction::ResizeDirection;
use crate::geometry::{MinConstraints, PointerDelta, Rect};
use crate::transform::{AnchorPolicy, resize_rect, translate_rect};

/// Holds the current rectangle and the immutable constraints it obeys.
///
/// Every mutation goes through [`apply_resize`](Self::apply_resize) or
/// [`apply_drag`](Self::apply_drag), which compute the new rectangle from a
/// session start snapshot and commit it. After any commit `current()`
/// satisfies the configured minimums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryStore {
    current: Rect,
    min: MinConstraints,
    anchor_policy: AnchorPolicy,
}

impl GeometryStore {
    /// Build a store from a validated configuration.
    pub fn new(config: GeometryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            current: config.initial,
            min: config.min,
            anchor_policy: config.anchor_policy,
        })
    }

    /// Rectangle to render.
    #[must_use]
    pub const fn current(&self) -> Rect {
        self.current
    }

    #[must_use]
    pub const fn constraints(&self) -> MinConstraints {
        self.min
    }

    #[must_use]
    pub const fn anchor_policy(&self) -> AnchorPolicy {
        self.anchor_policy
    }

    /// Resize from `start` by the session delta `(dx, dy)` and commit.
    pub fn apply_resize(
        &mut self,
        direction: ResizeDirection,
        dx: i32,
        dy: i32,
        start: Rect,
    ) -> Rect {
        self.current = resize_rect(
            start,
            direction,
            PointerDelta::new(dx, dy),
            self.min,
            self.anchor_policy,
        );
        self.current
    }

    /// Translate `start` by the session delta `(dx, dy)` and commit.
    pub fn apply_drag(&mut self, dx: i32, dy: i32, start: Rect) -> Rect {
        self.current = translate_rect(start, PointerDelta::new(dx, dy));
        self.current
    }

    /// Put back a snapshot taken from this store (cancel-with-revert).
    ///
    /// Dimensions below the minimums are raised to them; offsets are kept.
    pub fn restore(&mut self, snapshot: Rect) -> Rect {
        self.current = Rect::new(
            snapshot.width.max(self.min.min_width),
            snapshot.height.max(self.min.min_height),
            snapshot.top,
            snapshot.left,
        );
        self.current
    }
}

impl Default for GeometryStore {
    fn default() -> Self {
        let config = GeometryConfig::default();
        Self {
            current: config.initial,
            min: config.min,
            anchor_policy: config.anchor_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_matches_default_config() {
        let store = GeometryStore::default();
        assert_eq!(store.current(), Rect::new(300, 200, 100, 100));
        assert_eq!(store.constraints(), MinConstraints::new(50, 50));
        assert_eq!(store.anchor_policy(), AnchorPolicy::Drift);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = GeometryConfig {
            initial: Rect::new(10, 200, 0, 0),
            ..GeometryConfig::default()
        };
        assert!(matches!(
            GeometryStore::new(config),
            Err(ConfigError::InitialBelowMinimum { .. })
        ));
    }

    #[test]
    fn apply_commits_result() {
        let mut store = GeometryStore::default();
        let start = store.current();
        let r = store.apply_resize(ResizeDirection::Right, 40, 0, start);
        assert_eq!(r, Rect::new(340, 200, 100, 100));
        assert_eq!(store.current(), r);

        let r = store.apply_drag(20, 15, start);
        assert_eq!(r, Rect::new(300, 200, 115, 120));
        assert_eq!(store.current(), r);
    }

    #[test]
    fn reapplying_same_inputs_is_stable() {
        let mut store = GeometryStore::default();
        let start = store.current();
        let first = store.apply_resize(ResizeDirection::BottomLeft, 17, 23, start);
        let second = store.apply_resize(ResizeDirection::BottomLeft, 17, 23, start);
        assert_eq!(first, second);
    }

    #[test]
    fn pinned_store_uses_pinned_policy() {
        let mut store = GeometryStore::new(GeometryConfig {
            anchor_policy: AnchorPolicy::Pinned,
            ..GeometryConfig::default()
        })
        .expect("default geometry with pinned policy is valid");
        let start = store.current();
        let r = store.apply_resize(ResizeDirection::Left, 280, 0, start);
        assert_eq!(r.right(), start.right());
    }

    #[test]
    fn restore_puts_snapshot_back() {
        let mut store = GeometryStore::default();
        let start = store.current();
        store.apply_drag(-500, -500, start);
        store.restore(start);
        assert_eq!(store.current(), start);
    }

    #[test]
    fn restore_clamps_undersized_snapshot() {
        let mut store = GeometryStore::default();
        let r = store.restore(Rect::new(1, 70, -4, 9));
        assert_eq!(r, Rect::new(50, 70, -4, 9));
        assert_eq!(store.current(), r);
        assert!(store.current().satisfies(store.constraints()));
    }
}

//! Property suite for the resize/drag transforms.
//!
//! Random start rectangles (always satisfying their minimums), random
//! deltas, and every direction under both anchor policies.

use proptest::prelude::*;
use rectgrip_core::{
    AnchorPolicy, AxisEdge, MinConstraints, PointerDelta, Rect, ResizeDirection, resize_rect,
    translate_rect,
};

const SPAN: i32 = 1_000_000;

fn direction() -> impl Strategy<Value = ResizeDirection> {
    prop::sample::select(ResizeDirection::ALL.to_vec())
}

fn policy() -> impl Strategy<Value = AnchorPolicy> {
    prop_oneof![Just(AnchorPolicy::Drift), Just(AnchorPolicy::Pinned)]
}

fn constrained_start() -> impl Strategy<Value = (Rect, MinConstraints)> {
    (0..500i32, 0..500i32, 0..2_000i32, 0..2_000i32, -SPAN..SPAN, -SPAN..SPAN).prop_map(
        |(min_w, min_h, extra_w, extra_h, top, left)| {
            let min = MinConstraints::new(min_w, min_h);
            (Rect::new(min_w + extra_w, min_h + extra_h, top, left), min)
        },
    )
}

fn delta() -> impl Strategy<Value = PointerDelta> {
    (-SPAN..SPAN, -SPAN..SPAN).prop_map(|(dx, dy)| PointerDelta::new(dx, dy))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn resize_never_breaks_minimums(
        (start, min) in constrained_start(),
        direction in direction(),
        delta in delta(),
        policy in policy(),
    ) {
        let r = resize_rect(start, direction, delta, min, policy);
        prop_assert!(r.width >= min.min_width, "{direction}: {r:?}");
        prop_assert!(r.height >= min.min_height, "{direction}: {r:?}");
    }

    #[test]
    fn zero_delta_is_identity(
        (start, min) in constrained_start(),
        direction in direction(),
        policy in policy(),
    ) {
        prop_assert_eq!(resize_rect(start, direction, PointerDelta::ZERO, min, policy), start);
        prop_assert_eq!(translate_rect(start, PointerDelta::ZERO), start);
    }

    #[test]
    fn drag_is_translation_only((start, _min) in constrained_start(), delta in delta()) {
        let r = translate_rect(start, delta);
        prop_assert_eq!(r.width, start.width);
        prop_assert_eq!(r.height, start.height);
        prop_assert_eq!(r.top, start.top + delta.dy);
        prop_assert_eq!(r.left, start.left + delta.dx);
    }

    #[test]
    fn untouched_axes_are_untouched(
        (start, min) in constrained_start(),
        direction in direction(),
        delta in delta(),
        policy in policy(),
    ) {
        let r = resize_rect(start, direction, delta, min, policy);
        match direction.horizontal_edge() {
            None => {
                prop_assert_eq!(r.width, start.width);
                prop_assert_eq!(r.left, start.left);
            }
            Some(AxisEdge::End) => prop_assert_eq!(r.left, start.left),
            Some(AxisEdge::Start) => {}
        }
        match direction.vertical_edge() {
            None => {
                prop_assert_eq!(r.height, start.height);
                prop_assert_eq!(r.top, start.top);
            }
            Some(AxisEdge::End) => prop_assert_eq!(r.top, start.top),
            Some(AxisEdge::Start) => {}
        }
    }

    #[test]
    fn drift_offsets_follow_pointer(
        (start, min) in constrained_start(),
        direction in direction(),
        delta in delta(),
    ) {
        let r = resize_rect(start, direction, delta, min, AnchorPolicy::Drift);
        if direction.horizontal_edge() == Some(AxisEdge::Start) {
            prop_assert_eq!(r.left, start.left + delta.dx);
        }
        if direction.vertical_edge() == Some(AxisEdge::Start) {
            prop_assert_eq!(r.top, start.top + delta.dy);
        }
    }

    #[test]
    fn pinned_keeps_far_edges(
        (start, min) in constrained_start(),
        direction in direction(),
        delta in delta(),
    ) {
        let r = resize_rect(start, direction, delta, min, AnchorPolicy::Pinned);
        if direction.horizontal_edge() == Some(AxisEdge::Start) {
            prop_assert_eq!(r.right(), start.right());
        }
        if direction.vertical_edge() == Some(AxisEdge::Start) {
            prop_assert_eq!(r.bottom(), start.bottom());
        }
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use rectgrip_interaction::{
    AnchorPolicy, CancelReason, GeometryConfig, InteractionConfig, InteractionController,
    InteractionState, MinConstraints, Point, Rect, ResizeDirection,
};

fuzz_target!(|data: &[u8]| {
    // First three bytes pick the minimums and the clamp/cancel policies.
    if data.len() < 3 {
        return;
    }
    let min = MinConstraints::new(i32::from(data[0]), i32::from(data[1]));
    let anchor_policy = if data[2] & 1 == 0 {
        AnchorPolicy::Drift
    } else {
        AnchorPolicy::Pinned
    };
    let config = InteractionConfig {
        geometry: GeometryConfig {
            initial: Rect::new(min.min_width + 300, min.min_height + 200, 100, 100),
            min,
            anchor_policy,
        },
        revert_on_cancel: data[2] & 2 != 0,
        ..InteractionConfig::default()
    };
    let mut controller = InteractionController::new(config).expect("fuzz config is valid");

    // Each remaining 5-byte chunk is one input: opcode, then x and y as i16.
    for chunk in data[3..].chunks_exact(5) {
        let point = Point::new(
            i32::from(i16::from_le_bytes([chunk[1], chunk[2]])),
            i32::from(i16::from_le_bytes([chunk[3], chunk[4]])),
        );
        let was_idle = controller.state().is_idle();
        let before = controller.rect();
        let transition = match chunk[0] % 8 {
            0 => controller.pointer_down(point, None),
            1 => {
                let direction = ResizeDirection::ALL[usize::from(chunk[0] / 8) % 8];
                controller.pointer_down(point, Some(direction))
            }
            2 => controller.pointer_down_at(point),
            3 | 4 => controller.pointer_move(point),
            5 => controller.pointer_up(),
            6 => controller.blur(),
            _ => controller.cancel(CancelReason::PointerLost),
        };

        // Post-conditions that must always hold:
        let rect = controller.rect();
        assert!(rect.width >= min.min_width, "width below minimum");
        assert!(rect.height >= min.min_height, "height below minimum");
        assert_eq!(transition.to, controller.state(), "reported state drifted");
        assert_eq!(
            controller.is_active(),
            controller.capture().is_some(),
            "session without capture"
        );
        if was_idle && matches!(chunk[0] % 8, 3..=7) {
            assert_eq!(rect, before, "idle input mutated geometry");
        }
        if matches!(chunk[0] % 8, 5..=7) {
            assert_eq!(controller.state(), InteractionState::Idle, "end left a session");
        }
    }
});

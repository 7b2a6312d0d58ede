//! End-to-end gesture scenarios driven through the harness.

use proptest::prelude::*;
use tapswipe_core::{Gesture, GestureConfig, GestureKind, Point, SwipeDirection};
use tapswipe_test::{GestureHarness, TouchScript};

// =============================================================================
// Single touches
// =============================================================================

#[test]
fn test_quick_jitter_is_still_a_tap() {
    let mut harness = GestureHarness::new();
    let script = TouchScript::new()
        .down(50.0, 50.0)
        .wait(10)
        .move_by(3.0, -2.0)
        .wait(10)
        .move_by(-1.0, 4.0)
        .wait(10)
        .up();
    harness.run(&script);
    harness.assert_tap();
    assert_eq!(
        harness.gestures()[0],
        Gesture::Tap {
            delta: Point::ORIGIN
        }
    );
}

#[test]
fn test_diagonal_swipe_uses_dominant_axis() {
    let mut harness = GestureHarness::new();
    harness.run(&TouchScript::swipe((0.0, 0.0), (-30.0, 45.0), 48, 3));
    harness.assert_swipe(SwipeDirection::Up);
}

#[test]
fn test_swipe_after_threshold_time_is_long_tap() {
    let mut harness = GestureHarness::new();
    let script = TouchScript::new()
        .down(0.0, 0.0)
        .wait(300)
        .move_to(200.0, 0.0)
        .wait(16)
        .up();
    harness.run(&script);
    harness.assert_long_tap();
}

#[test]
fn test_cancelled_touch_reports_nothing() {
    let mut harness = GestureHarness::new();
    harness.run(&TouchScript::new().down(0.0, 0.0).wait(30).cancel());
    harness.idle(1_000);
    harness.assert_nothing();
}

// =============================================================================
// Multiple fingers
// =============================================================================

#[test]
fn test_second_finger_is_ignored() {
    let mut harness = GestureHarness::new();
    let script = TouchScript::new()
        .finger(0)
        .down(0.0, 0.0)
        .wait(5)
        .finger(1)
        .down(100.0, 100.0)
        .wait(5)
        .move_to(200.0, 100.0)
        .wait(5)
        .up()
        .finger(0)
        .up();
    harness.run(&script);

    assert_eq!(harness.claimed(), &[true, false]);
    harness.assert_tap();
}

#[test]
fn test_touches_in_sequence() {
    let mut harness = GestureHarness::new();
    let script = TouchScript::tap(0.0, 0.0)
        .wait(100)
        .then(&TouchScript::swipe((0.0, 0.0), (50.0, 0.0), 32, 2))
        .wait(100)
        .then(&TouchScript::hold(0.0, 0.0, 400));
    harness.run(&script);

    harness.assert_kinds(&[
        GestureKind::Tap,
        GestureKind::Swipe,
        GestureKind::LongTap,
        GestureKind::LongTap,
    ]);
}

// =============================================================================
// Thresholds
// =============================================================================

#[test]
fn test_custom_swipe_threshold() {
    let config = GestureConfig::default()
        .with_swipe_threshold_distance(60.0)
        .expect("valid threshold");
    let mut harness = GestureHarness::with_config(config);
    harness.run(&TouchScript::swipe((0.0, 0.0), (50.0, 0.0), 48, 3));
    harness.assert_tap();
}

#[test]
fn test_custom_long_tap_threshold() {
    let config = GestureConfig::default()
        .with_long_tap_threshold_secs(2.0)
        .expect("valid threshold");
    let mut harness = GestureHarness::with_config(config);
    harness.run(&TouchScript::hold(0.0, 0.0, 1_500));
    harness.assert_tap();
}

proptest! {
    #[test]
    fn prop_short_still_touch_is_tap(hold_ms in 0u64..=100, x in -500.0f32..500.0, y in -500.0f32..500.0) {
        let mut harness = GestureHarness::new();
        harness.run(&TouchScript::hold(x, y, hold_ms));
        prop_assert_eq!(harness.gestures().len(), 1);
        prop_assert_eq!(harness.gestures()[0].kind(), GestureKind::Tap);
    }

    #[test]
    fn prop_long_still_touch_is_long_tap(hold_ms in 150u64..5_000) {
        let mut harness = GestureHarness::new();
        harness.run(&TouchScript::hold(0.0, 0.0, hold_ms));
        prop_assert_eq!(
            harness.log().kinds(),
            vec![GestureKind::LongTap, GestureKind::LongTap]
        );
    }

    #[test]
    fn prop_fast_long_drag_is_swipe(dx in 11.0f32..400.0, negative in any::<bool>()) {
        let dx = if negative { -dx } else { dx };
        let mut harness = GestureHarness::new();
        harness.run(&TouchScript::swipe((0.0, 0.0), (dx, 0.0), 16, 1));
        let expected = if negative { SwipeDirection::Left } else { SwipeDirection::Right };
        let is_expected_swipe = matches!(
            harness.gestures().as_slice(),
            [Gesture::Swipe { direction, .. }] if *direction == expected
        );
        prop_assert!(is_expected_swipe);
    }
}

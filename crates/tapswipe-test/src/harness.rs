//! Frame-by-frame driver for a [`GestureListener`].

use crate::log::GestureLog;
use crate::script::TouchScript;
use tapswipe_core::{
    Gesture, GestureConfig, GestureKind, GestureListener, SwipeDirection, TouchEvent,
};

/// Default frame step, roughly 60 fps.
const FRAME_MS: u64 = 16;

/// Test harness for a gesture listener.
///
/// [`Self::run`] walks the script's clock in frame steps, calling the
/// listener's `update` each frame and `handle` for each event as its time
/// comes up, the way a game loop would.
#[derive(Debug)]
pub struct GestureHarness {
    listener: GestureListener,
    log: GestureLog,
    frame_ms: u64,
    now_ms: u64,
    claimed: Vec<bool>,
}

impl Default for GestureHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureHarness {
    /// Harness with default thresholds.
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// Harness with custom thresholds.
    pub fn with_config(config: GestureConfig) -> Self {
        let log = GestureLog::new();
        let listener = log.attach(GestureListener::with_config(config));
        Self {
            listener,
            log,
            frame_ms: FRAME_MS,
            now_ms: 0,
            claimed: Vec::new(),
        }
    }

    /// Set the frame step.
    pub fn frame_ms(mut self, ms: u64) -> Self {
        self.frame_ms = ms.max(1);
        self
    }

    /// The listener under test.
    pub const fn listener(&self) -> &GestureListener {
        &self.listener
    }

    /// The recorded gestures.
    pub const fn log(&self) -> &GestureLog {
        &self.log
    }

    /// Claim results of every `Began` event handled so far.
    pub fn claimed(&self) -> &[bool] {
        &self.claimed
    }

    /// Play a script. Its timestamps are taken as absolute.
    pub fn run(&mut self, script: &TouchScript) -> &mut Self {
        for event in script.events() {
            let due = event.time_ms();
            while self.now_ms + self.frame_ms <= due {
                self.now_ms += self.frame_ms;
                self.listener.update(self.now_ms);
            }
            self.now_ms = self.now_ms.max(due);
            let handled = self.listener.handle(event);
            if matches!(event, TouchEvent::Began { .. }) {
                self.claimed.push(handled);
            }
        }
        self
    }

    /// Keep running frames with no input for `ms`.
    pub fn idle(&mut self, ms: u64) -> &mut Self {
        let until = self.now_ms + ms;
        while self.now_ms + self.frame_ms <= until {
            self.now_ms += self.frame_ms;
            self.listener.update(self.now_ms);
        }
        self.now_ms = until;
        self.listener.update(until);
        self
    }

    /// Everything dispatched so far.
    pub fn gestures(&self) -> Vec<Gesture> {
        self.log.entries()
    }

    // === Assertions ===

    /// Assert the exact sequence of dispatched kinds.
    ///
    /// # Panics
    ///
    /// Panics if the sequence differs.
    pub fn assert_kinds(&self, expected: &[GestureKind]) -> &Self {
        let actual = self.log.kinds();
        assert_eq!(
            actual, expected,
            "Expected gestures {expected:?} but got {actual:?}"
        );
        self
    }

    /// Assert that exactly one tap was dispatched.
    ///
    /// # Panics
    ///
    /// Panics otherwise.
    pub fn assert_tap(&self) -> &Self {
        self.assert_kinds(&[GestureKind::Tap])
    }

    /// Assert that a long-tap began and ended, and nothing else.
    ///
    /// # Panics
    ///
    /// Panics otherwise.
    pub fn assert_long_tap(&self) -> &Self {
        let gestures = self.gestures();
        assert!(
            matches!(
                gestures.as_slice(),
                [Gesture::LongTapBegan { .. }, Gesture::LongTapEnded { .. }]
            ),
            "Expected a complete long tap but got {gestures:?}"
        );
        self
    }

    /// Assert that exactly one swipe in `direction` was dispatched.
    ///
    /// # Panics
    ///
    /// Panics otherwise.
    pub fn assert_swipe(&self, direction: SwipeDirection) -> &Self {
        let gestures = self.gestures();
        assert!(
            matches!(gestures.as_slice(), [Gesture::Swipe { direction: d, .. }] if *d == direction),
            "Expected a single {direction} swipe but got {gestures:?}"
        );
        self
    }

    /// Assert that nothing was dispatched.
    ///
    /// # Panics
    ///
    /// Panics if anything was.
    pub fn assert_nothing(&self) -> &Self {
        self.assert_kinds(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_tap() {
        let mut harness = GestureHarness::new();
        harness.run(&TouchScript::tap(100.0, 100.0));
        harness.assert_tap();
        assert_eq!(harness.claimed(), &[true]);
    }

    #[test]
    fn test_harness_hold_is_long_tap() {
        let mut harness = GestureHarness::new();
        harness.run(&TouchScript::hold(0.0, 0.0, 500));
        harness.assert_long_tap();
    }

    #[test]
    fn test_harness_swipe() {
        let mut harness = GestureHarness::new();
        harness.run(&TouchScript::swipe((0.0, 0.0), (0.0, -80.0), 64, 4));
        harness.assert_swipe(SwipeDirection::Down);
    }

    #[test]
    fn test_harness_idle_fires_long_tap_began() {
        let mut harness = GestureHarness::new();
        harness.run(&TouchScript::new().down(3.0, 4.0));
        harness.assert_nothing();

        harness.idle(200);
        harness.assert_kinds(&[GestureKind::LongTap]);
    }

    #[test]
    fn test_harness_coarse_frames() {
        // polls only happen on frames, so a 400ms frame step still works
        let mut harness = GestureHarness::new().frame_ms(400);
        harness.run(&TouchScript::hold(0.0, 0.0, 1_000));
        harness.assert_long_tap();
    }

    #[test]
    #[should_panic(expected = "Expected gestures")]
    fn test_harness_assert_kinds_panics_on_mismatch() {
        let mut harness = GestureHarness::new();
        harness.run(&TouchScript::tap(0.0, 0.0));
        harness.assert_nothing();
    }
}

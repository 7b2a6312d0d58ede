//! Callback-driven gesture listener.
//!
//! [`GestureListener`] owns a [`GestureRecognizer`] and forwards each
//! recognized gesture to the matching user callback.

use crate::config::GestureConfig;
use crate::error::GestureError;
use crate::event::{Gesture, SwipeDirection, TouchEvent};
use crate::geometry::Point;
use crate::gesture::GestureRecognizer;
use std::fmt;
use std::sync::Arc;

/// Callback receiving a position or delta.
pub type PointCallback = Arc<dyn Fn(Point) + Send + Sync>;
/// Callback receiving a swipe direction and displacement.
pub type SwipeCallback = Arc<dyn Fn(SwipeDirection, Point) + Send + Sync>;

/// Gesture listener with optional per-gesture callbacks.
///
/// Cloning copies the callbacks and thresholds but not the touch in
/// progress.
#[derive(Default)]
pub struct GestureListener {
    recognizer: GestureRecognizer,
    on_tap: Option<PointCallback>,
    on_long_tap_began: Option<PointCallback>,
    on_long_tap_ended: Option<PointCallback>,
    on_swipe: Option<SwipeCallback>,
}

impl GestureListener {
    /// Create a listener with default thresholds and no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a listener with custom thresholds.
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            recognizer: GestureRecognizer::with_config(config),
            ..Self::default()
        }
    }

    /// Called with the last-sample delta when a tap ends.
    #[must_use]
    pub fn on_tap(mut self, f: impl Fn(Point) + Send + Sync + 'static) -> Self {
        self.on_tap = Some(Arc::new(f));
        self
    }

    /// Called with the touch position when a long-tap is recognized.
    #[must_use]
    pub fn on_long_tap_began(mut self, f: impl Fn(Point) + Send + Sync + 'static) -> Self {
        self.on_long_tap_began = Some(Arc::new(f));
        self
    }

    /// Called with the last-sample delta when a long-tap ends.
    #[must_use]
    pub fn on_long_tap_ended(mut self, f: impl Fn(Point) + Send + Sync + 'static) -> Self {
        self.on_long_tap_ended = Some(Arc::new(f));
        self
    }

    /// Called with direction and displacement when a swipe is recognized.
    #[must_use]
    pub fn on_swipe(mut self, f: impl Fn(SwipeDirection, Point) + Send + Sync + 'static) -> Self {
        self.on_swipe = Some(Arc::new(f));
        self
    }

    /// The wrapped recognizer.
    pub const fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    /// Current thresholds.
    pub const fn config(&self) -> &GestureConfig {
        self.recognizer.config()
    }

    /// Set the long-tap threshold, keeping the old one on error.
    pub fn set_long_tap_threshold_secs(&mut self, secs: f32) -> Result<(), GestureError> {
        self.recognizer.set_long_tap_threshold_secs(secs)
    }

    /// Set the swipe threshold, keeping the old one on error.
    pub fn set_swipe_threshold_distance(&mut self, distance: f32) -> Result<(), GestureError> {
        self.recognizer.set_swipe_threshold_distance(distance)
    }

    /// Check that the listener can be used.
    pub fn check_available(&self) -> Result<(), GestureError> {
        self.recognizer.config().validate()
    }

    /// Feed a touch event and dispatch any resulting gestures.
    ///
    /// For `Began` the return value says whether the touch was claimed;
    /// other phases always return `true`.
    pub fn handle(&mut self, event: &TouchEvent) -> bool {
        self.update(event.time_ms());

        match *event {
            TouchEvent::Began {
                id,
                position,
                time_ms,
            } => self.recognizer.touch_began(id, position, time_ms),
            TouchEvent::Moved {
                id,
                position,
                time_ms,
            } => {
                if let Some(gesture) = self.recognizer.touch_moved(id, position, time_ms) {
                    self.dispatch(&gesture);
                }
                true
            }
            TouchEvent::Ended {
                id,
                position,
                time_ms,
            } => {
                if let Some(gesture) = self.recognizer.touch_ended(id, position, time_ms) {
                    self.dispatch(&gesture);
                }
                true
            }
            TouchEvent::Cancelled { id, time_ms } => {
                self.recognizer.touch_cancelled(id, time_ms);
                true
            }
        }
    }

    /// Drive the long-tap poll up to `now_ms`. Call this from the frame loop.
    pub fn update(&mut self, now_ms: u64) {
        if let Some((_, gesture)) = self.recognizer.advance_to(now_ms) {
            self.dispatch(&gesture);
        }
    }

    /// Invoke the callback registered for `gesture`, if any.
    pub fn dispatch(&self, gesture: &Gesture) {
        match *gesture {
            Gesture::Tap { delta } => {
                if let Some(f) = &self.on_tap {
                    f(delta);
                }
            }
            Gesture::LongTapBegan { position } => {
                if let Some(f) = &self.on_long_tap_began {
                    f(position);
                }
            }
            Gesture::LongTapEnded { delta } => {
                if let Some(f) = &self.on_long_tap_ended {
                    f(delta);
                }
            }
            Gesture::Swipe { direction, delta } => {
                if let Some(f) = &self.on_swipe {
                    f(direction, delta);
                }
            }
        }
    }

    /// Drop the touch in progress.
    pub fn reset(&mut self) {
        self.recognizer.reset();
    }
}

impl Clone for GestureListener {
    fn clone(&self) -> Self {
        Self {
            recognizer: GestureRecognizer::with_config(self.config().clone()),
            on_tap: self.on_tap.clone(),
            on_long_tap_began: self.on_long_tap_began.clone(),
            on_long_tap_ended: self.on_long_tap_ended.clone(),
            on_swipe: self.on_swipe.clone(),
        }
    }
}

impl fmt::Debug for GestureListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureListener")
            .field("recognizer", &self.recognizer)
            .field("on_tap", &self.on_tap.is_some())
            .field("on_long_tap_began", &self.on_long_tap_began.is_some())
            .field("on_long_tap_ended", &self.on_long_tap_ended.is_some())
            .field("on_swipe", &self.on_swipe.is_some())
            .finish()
    }
}

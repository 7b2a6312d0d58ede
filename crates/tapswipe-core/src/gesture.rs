//! Tap, long-tap and swipe recognition for a single touch.
//!
//! The recognizer claims one touch at a time and classifies it into exactly
//! one [`GestureKind`]:
//!
//! - moving further than the swipe threshold along the dominant axis makes
//!   it a swipe;
//! - holding it past the long-tap threshold (checked by a periodic poll)
//!   makes it a long-tap;
//! - releasing it before either happens makes it a tap.
//!
//! Whichever classification is reached first wins; later samples cannot
//! reclassify the touch.

use crate::config::GestureConfig;
use crate::error::GestureError;
use crate::event::{Gesture, GestureKind, SwipeDirection, TouchEvent, TouchId};
use crate::geometry::Point;
use crate::schedule::PollSchedule;
use tracing::{debug, trace};

/// The touch currently claimed by a recognizer.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchPoint {
    /// Touch ID.
    pub id: TouchId,
    /// Starting position.
    pub start_position: Point,
    /// Current position.
    pub current_position: Point,
    /// Previous position.
    pub previous_position: Point,
    /// When the touch started (milliseconds).
    pub start_time_ms: u64,
}

impl TouchPoint {
    /// Create a new touch point.
    pub const fn new(id: TouchId, position: Point, time_ms: u64) -> Self {
        Self {
            id,
            start_position: position,
            current_position: position,
            previous_position: position,
            start_time_ms: time_ms,
        }
    }

    /// Update the touch point position.
    pub fn update(&mut self, position: Point) {
        self.previous_position = self.current_position;
        self.current_position = position;
    }

    /// Get the delta from previous position.
    pub fn delta(&self) -> Point {
        self.current_position - self.previous_position
    }

    /// Get the displacement from the start position.
    pub fn displacement(&self) -> Point {
        self.current_position - self.start_position
    }

    /// Time held at `now_ms`.
    pub const fn held_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.start_time_ms)
    }
}

/// Classify a displacement from the touch start as a swipe.
///
/// Each component is truncated toward zero to whole units. The horizontal
/// axis wins ties. A swipe needs the dominant component to be strictly
/// greater than `threshold`.
pub fn classify_swipe(displacement: Point, threshold: f32) -> Option<SwipeDirection> {
    let x_abs = displacement.x.trunc().abs();
    let y_abs = displacement.y.trunc().abs();

    if x_abs >= y_abs {
        if x_abs > threshold {
            return Some(if displacement.x >= 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            });
        }
    } else if y_abs > threshold {
        return Some(if displacement.y >= 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        });
    }

    None
}

/// Single-touch gesture recognizer.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    /// Configuration.
    config: GestureConfig,
    /// The claimed touch, if any.
    touch: Option<TouchPoint>,
    /// Classification of the claimed touch.
    kind: GestureKind,
    /// Long-tap poll.
    poll: PollSchedule,
}

impl GestureRecognizer {
    /// Create a new gesture recognizer with default config.
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    /// Create a new gesture recognizer with custom config.
    pub fn with_config(config: GestureConfig) -> Self {
        let poll = PollSchedule::new(config.poll_interval_ms);
        Self {
            config,
            touch: None,
            kind: GestureKind::None,
            poll,
        }
    }

    /// Get the current gesture configuration.
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Mutable access to the configuration. Changes to the poll interval
    /// apply from the next claimed touch.
    pub fn config_mut(&mut self) -> &mut GestureConfig {
        &mut self.config
    }

    /// Set the long-tap threshold, keeping the old one on error.
    pub fn set_long_tap_threshold_secs(&mut self, secs: f32) -> Result<(), GestureError> {
        self.config.set_long_tap_threshold_secs(secs)
    }

    /// Set the swipe threshold, keeping the old one on error.
    pub fn set_swipe_threshold_distance(&mut self, distance: f32) -> Result<(), GestureError> {
        self.config.set_swipe_threshold_distance(distance)
    }

    /// Classification of the touch in progress.
    pub const fn gesture_kind(&self) -> GestureKind {
        self.kind
    }

    /// Check if a touch is claimed.
    pub const fn is_touched(&self) -> bool {
        self.touch.is_some()
    }

    /// The claimed touch.
    pub const fn touch(&self) -> Option<&TouchPoint> {
        self.touch.as_ref()
    }

    /// The long-tap poll schedule.
    pub const fn poll_schedule(&self) -> &PollSchedule {
        &self.poll
    }

    /// Process an event and return the gestures it produced.
    ///
    /// Poll ticks due before the event's timestamp run first.
    pub fn process(&mut self, event: &TouchEvent) -> Vec<Gesture> {
        let mut gestures: Vec<Gesture> = self
            .advance_to(event.time_ms())
            .map(|(_, gesture)| gesture)
            .into_iter()
            .collect();
        match *event {
            TouchEvent::Began {
                id,
                position,
                time_ms,
            } => {
                self.touch_began(id, position, time_ms);
            }
            TouchEvent::Moved {
                id,
                position,
                time_ms,
            } => gestures.extend(self.touch_moved(id, position, time_ms)),
            TouchEvent::Ended {
                id,
                position,
                time_ms,
            } => gestures.extend(self.touch_ended(id, position, time_ms)),
            TouchEvent::Cancelled { id, time_ms } => self.touch_cancelled(id, time_ms),
        }
        gestures
    }

    /// Claim a new touch. Returns `false` if another touch is in progress.
    pub fn touch_began(&mut self, id: TouchId, position: Point, time_ms: u64) -> bool {
        if let Some(active) = &self.touch {
            debug!(
                active = active.id.0,
                rejected = id.0,
                "touch already in progress, not claiming"
            );
            return false;
        }

        debug!(id = id.0, x = position.x, y = position.y, time_ms, "touch claimed");
        self.touch = Some(TouchPoint::new(id, position, time_ms));
        self.kind = GestureKind::None;
        self.poll = PollSchedule::new(self.config.poll_interval_ms);
        self.poll.schedule(time_ms);
        true
    }

    /// Track a move of the claimed touch; may classify it as a swipe.
    pub fn touch_moved(&mut self, id: TouchId, position: Point, time_ms: u64) -> Option<Gesture> {
        let touch = self.touch.as_mut().filter(|t| t.id == id)?;
        touch.update(position);
        trace!(id = id.0, x = position.x, y = position.y, time_ms, "touch moved");

        if self.kind != GestureKind::None {
            return None;
        }

        let delta = touch.displacement();
        let direction = classify_swipe(delta, self.config.swipe_threshold_distance)?;
        self.kind = GestureKind::Swipe;
        debug!(%direction, dx = delta.x, dy = delta.y, "swipe recognized");
        Some(Gesture::Swipe { direction, delta })
    }

    /// Long-tap check; normally driven by the poll schedule.
    pub fn poll(&mut self, time_ms: u64) -> Option<Gesture> {
        let Some(touch) = &self.touch else {
            self.poll.unschedule();
            return None;
        };

        if self.kind != GestureKind::None {
            self.poll.unschedule();
            return None;
        }

        if !self.held_past_threshold(touch, time_ms) {
            return None;
        }

        self.kind = GestureKind::LongTap;
        let position = touch.current_position;
        debug!(
            held_ms = touch.held_ms(time_ms),
            x = position.x,
            y = position.y,
            "long tap recognized"
        );
        Some(Gesture::LongTapBegan { position })
    }

    fn held_past_threshold(&self, touch: &TouchPoint, time_ms: u64) -> bool {
        touch.held_ms(time_ms) as f32 / 1000.0 > self.config.long_tap_threshold_secs
    }

    /// Bring the poll schedule up to `time_ms`.
    ///
    /// Returns the long-tap notification and the tick it fired at, if one of
    /// the due ticks classified the touch. The outcome matches running every
    /// due tick in order, but only the first tick past the threshold is
    /// evaluated, so a long gap between calls costs the same as a short one.
    pub fn advance_to(&mut self, time_ms: u64) -> Option<(u64, Gesture)> {
        let due = self.poll.next_due_ms().filter(|&due| due <= time_ms)?;

        let first_firing = match &self.touch {
            Some(touch) if self.kind == GestureKind::None => {
                let interval = self.poll.interval_ms();
                let last = (time_ms - due) / interval;
                // held time only grows, so the firing ticks form a suffix
                let (mut lo, mut hi) = (0, last + 1);
                while lo < hi {
                    let mid = lo + (hi - lo) / 2;
                    if self.held_past_threshold(touch, due + mid * interval) {
                        hi = mid;
                    } else {
                        lo = mid + 1;
                    }
                }
                if lo > last {
                    trace!(skipped = last + 1, time_ms, "no long tap yet");
                    self.poll.skip(last + 1);
                    return None;
                }
                lo
            }
            // the first due tick unschedules the poll
            _ => 0,
        };

        self.poll.skip(first_firing);
        let tick_ms = self.poll.take_due(time_ms)?;
        let gesture = self.poll(tick_ms);
        if let Some(next_ms) = self.poll.take_due(time_ms) {
            self.poll(next_ms);
        }
        gesture.map(|gesture| (tick_ms, gesture))
    }

    /// Release the claimed touch and report how it was classified.
    pub fn touch_ended(&mut self, id: TouchId, position: Point, time_ms: u64) -> Option<Gesture> {
        let mut touch = self.release(id)?;
        touch.update(position);
        let delta = touch.delta();

        let gesture = match self.kind {
            GestureKind::None | GestureKind::Tap => Some(Gesture::Tap { delta }),
            GestureKind::LongTap => Some(Gesture::LongTapEnded { delta }),
            GestureKind::Swipe => None,
        };
        debug!(
            id = id.0,
            kind = ?gesture.as_ref().map_or(GestureKind::Swipe, Gesture::kind),
            time_ms,
            "touch released"
        );

        self.poll.unschedule();
        self.kind = GestureKind::None;
        gesture
    }

    /// Drop the claimed touch without reporting anything.
    pub fn touch_cancelled(&mut self, id: TouchId, time_ms: u64) {
        if self.release(id).is_some() {
            debug!(id = id.0, time_ms, "touch cancelled");
            self.poll.unschedule();
            self.kind = GestureKind::None;
        }
    }

    fn release(&mut self, id: TouchId) -> Option<TouchPoint> {
        if self.touch.as_ref().is_some_and(|t| t.id == id) {
            self.touch.take()
        } else {
            None
        }
    }

    /// Reset the recognizer state.
    pub fn reset(&mut self) {
        self.touch = None;
        self.kind = GestureKind::None;
        self.poll.unschedule();
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

//! Recognizer thresholds.

use crate::error::GestureError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default hold time before a touch becomes a long-tap.
pub const DEFAULT_LONG_TAP_THRESHOLD_SECS: f32 = 0.1;
/// Default dominant-axis travel before a touch becomes a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_DISTANCE: f32 = 10.0;
/// Default interval of the long-tap poll.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Configuration for gesture recognition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureConfig {
    /// Hold time (seconds) that must be exceeded for a long-tap.
    pub long_tap_threshold_secs: f32,
    /// Dominant-axis distance that must be exceeded for a swipe.
    pub swipe_threshold_distance: f32,
    /// How often the long-tap poll runs while a touch is held.
    pub poll_interval_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_tap_threshold_secs: DEFAULT_LONG_TAP_THRESHOLD_SECS,
            swipe_threshold_distance: DEFAULT_SWIPE_THRESHOLD_DISTANCE,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl GestureConfig {
    /// Set the long-tap threshold.
    ///
    /// Non-positive values are rejected and the previous threshold is kept.
    pub fn set_long_tap_threshold_secs(&mut self, secs: f32) -> Result<(), GestureError> {
        check_threshold("long_tap_threshold_secs", secs)?;
        self.long_tap_threshold_secs = secs;
        Ok(())
    }

    /// Set the swipe threshold.
    ///
    /// Non-positive values are rejected and the previous threshold is kept.
    pub fn set_swipe_threshold_distance(&mut self, distance: f32) -> Result<(), GestureError> {
        check_threshold("swipe_threshold_distance", distance)?;
        self.swipe_threshold_distance = distance;
        Ok(())
    }

    /// Set the poll interval.
    pub fn set_poll_interval_ms(&mut self, interval_ms: u64) -> Result<(), GestureError> {
        if interval_ms == 0 {
            warn!("poll interval must be at least 1ms, keeping {}ms", self.poll_interval_ms);
            return Err(GestureError::InvalidInterval(interval_ms));
        }
        self.poll_interval_ms = interval_ms;
        Ok(())
    }

    /// Builder form of [`Self::set_long_tap_threshold_secs`].
    pub fn with_long_tap_threshold_secs(mut self, secs: f32) -> Result<Self, GestureError> {
        self.set_long_tap_threshold_secs(secs)?;
        Ok(self)
    }

    /// Builder form of [`Self::set_swipe_threshold_distance`].
    pub fn with_swipe_threshold_distance(mut self, distance: f32) -> Result<Self, GestureError> {
        self.set_swipe_threshold_distance(distance)?;
        Ok(self)
    }

    /// Check every field. Deserialized configs skip the setters, so loaders
    /// call this before handing a config to a recognizer.
    pub fn validate(&self) -> Result<(), GestureError> {
        check_threshold("long_tap_threshold_secs", self.long_tap_threshold_secs)?;
        check_threshold("swipe_threshold_distance", self.swipe_threshold_distance)?;
        if self.poll_interval_ms == 0 {
            return Err(GestureError::InvalidInterval(0));
        }
        Ok(())
    }

    /// Long-tap threshold in milliseconds.
    #[must_use]
    pub fn long_tap_threshold_ms(&self) -> f32 {
        self.long_tap_threshold_secs * 1000.0
    }
}

fn check_threshold(name: &'static str, value: f32) -> Result<(), GestureError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        warn!("{name} can only be set above 0.0 (got {value})");
        Err(GestureError::InvalidThreshold { name, value })
    }
}

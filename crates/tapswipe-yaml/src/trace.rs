//! Recorded touch traces.
//!
//! A trace is a time-ordered list of [`TouchEvent`]s, optionally with the
//! thresholds it was recorded under:
//!
//! ```yaml
//! config:
//!   swipe_threshold_distance: 12.0
//! events:
//!   - { phase: began, id: 0, position: { x: 10.0, y: 10.0 }, time_ms: 0 }
//!   - { phase: ended, id: 0, position: { x: 10.0, y: 10.0 }, time_ms: 60 }
//! ```

use crate::error::ParseError;
use crate::format::Format;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tapswipe_core::{Gesture, GestureConfig, GestureRecognizer, TouchEvent};
use tracing::debug;

/// A recorded touch sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TouchTrace {
    /// Thresholds the trace expects, if recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<GestureConfig>,
    /// Touch events in timestamp order
    pub events: Vec<TouchEvent>,
}

impl TouchTrace {
    /// Create a trace from events.
    #[must_use]
    pub const fn new(events: Vec<TouchEvent>) -> Self {
        Self {
            config: None,
            events,
        }
    }

    /// Parse and validate a trace from text.
    pub fn parse(text: &str, format: Format) -> Result<Self, ParseError> {
        let trace: Self = match format {
            Format::Yaml => serde_yaml_ng::from_str(text)?,
            Format::Json => serde_json::from_str(text)?,
            Format::Toml => return Err(ParseError::UnsupportedFormat(format.to_string())),
        };
        trace.validate()?;
        Ok(trace)
    }

    /// Check the embedded config and event ordering.
    pub fn validate(&self) -> Result<(), ParseError> {
        if let Some(config) = &self.config {
            config.validate()?;
        }

        for (i, pair) in self.events.windows(2).enumerate() {
            let (prev, next) = (pair[0].time_ms(), pair[1].time_ms());
            if next < prev {
                return Err(ParseError::InvalidTrace(format!(
                    "event {} at {next}ms is earlier than the previous event at {prev}ms",
                    i + 1
                )));
            }
        }
        Ok(())
    }

    /// Timestamp of the last event.
    #[must_use]
    pub fn end_time_ms(&self) -> Option<u64> {
        self.events.last().map(TouchEvent::time_ms)
    }

    /// Serialize the trace.
    pub fn to_text(&self, format: Format) -> Result<String, ParseError> {
        match format {
            Format::Yaml => Ok(serde_yaml_ng::to_string(self)?),
            Format::Json => Ok(serde_json::to_string_pretty(self)?),
            Format::Toml => Err(ParseError::UnsupportedFormat(format.to_string())),
        }
    }
}

/// A gesture with the time it was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedGesture {
    /// Recognition timestamp in milliseconds
    pub time_ms: u64,
    /// The gesture
    #[serde(flatten)]
    pub gesture: Gesture,
}

impl TouchTrace {
    /// Run the trace through a fresh recognizer.
    ///
    /// `config` overrides the embedded config; with neither, defaults apply.
    /// Long-tap polls are stamped with their own tick time.
    pub fn replay(&self, config: Option<&GestureConfig>) -> Vec<TimedGesture> {
        let config = config
            .or(self.config.as_ref())
            .cloned()
            .unwrap_or_default();
        let mut recognizer = GestureRecognizer::with_config(config);
        let mut out = Vec::new();

        for event in &self.events {
            let now = event.time_ms();
            if let Some((tick_ms, gesture)) = recognizer.advance_to(now) {
                out.push(TimedGesture {
                    time_ms: tick_ms,
                    gesture,
                });
            }
            out.extend(
                recognizer
                    .process(event)
                    .into_iter()
                    .map(|gesture| TimedGesture { time_ms: now, gesture }),
            );
        }
        out
    }
}

/// Load and validate a trace file, picking the format from its extension.
pub fn load_trace(path: &Path) -> Result<TouchTrace, ParseError> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let trace = TouchTrace::parse(&text, format)?;
    debug!(path = %path.display(), events = trace.events.len(), "loaded touch trace");
    Ok(trace)
}

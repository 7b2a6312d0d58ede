//! Touch input events and the gesture notifications derived from them.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Touch identifier for telling concurrent touches apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct TouchId(pub u32);

impl TouchId {
    /// Create a new touch id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// A raw touch sample.
///
/// `time_ms` is a caller-supplied monotonic timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum TouchEvent {
    /// Finger went down
    Began {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
        /// Timestamp in milliseconds
        time_ms: u64,
    },
    /// Finger moved
    Moved {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
        /// Timestamp in milliseconds
        time_ms: u64,
    },
    /// Finger lifted
    Ended {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
        /// Timestamp in milliseconds
        time_ms: u64,
    },
    /// Touch cancelled by the platform
    Cancelled {
        /// Touch identifier
        id: TouchId,
        /// Timestamp in milliseconds
        time_ms: u64,
    },
}

impl TouchEvent {
    /// Touch id this event belongs to.
    #[must_use]
    pub const fn id(&self) -> TouchId {
        match self {
            Self::Began { id, .. }
            | Self::Moved { id, .. }
            | Self::Ended { id, .. }
            | Self::Cancelled { id, .. } => *id,
        }
    }

    /// Timestamp of this event.
    #[must_use]
    pub const fn time_ms(&self) -> u64 {
        match self {
            Self::Began { time_ms, .. }
            | Self::Moved { time_ms, .. }
            | Self::Ended { time_ms, .. }
            | Self::Cancelled { time_ms, .. } => *time_ms,
        }
    }

    /// Position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::Began { position, .. }
            | Self::Moved { position, .. }
            | Self::Ended { position, .. } => Some(*position),
            Self::Cancelled { .. } => None,
        }
    }
}

/// Direction of a swipe, by the sign of the dominant-axis delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Positive y
    Up,
    /// Negative y
    Down,
    /// Negative x
    Left,
    /// Positive x
    Right,
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.pad(name)
    }
}

/// Classification reached by the touch in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    /// Not classified yet
    #[default]
    None,
    /// Released before any threshold was crossed
    Tap,
    /// Held past the long-tap duration
    LongTap,
    /// Moved past the swipe distance
    Swipe,
}

/// Gesture notification emitted by the recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gesture", rename_all = "snake_case")]
pub enum Gesture {
    /// Touch released while unclassified
    Tap {
        /// Motion between the last two samples of the touch
        delta: Point,
    },
    /// Touch held past the long-tap threshold
    LongTapBegan {
        /// Latest known touch position
        position: Point,
    },
    /// Touch released after a long-tap
    LongTapEnded {
        /// Motion between the last two samples of the touch
        delta: Point,
    },
    /// Touch moved past the swipe threshold
    Swipe {
        /// Swipe direction
        direction: SwipeDirection,
        /// Displacement from the start position
        delta: Point,
    },
}

impl Gesture {
    /// Classification this notification belongs to.
    #[must_use]
    pub const fn kind(&self) -> GestureKind {
        match self {
            Self::Tap { .. } => GestureKind::Tap,
            Self::LongTapBegan { .. } | Self::LongTapEnded { .. } => GestureKind::LongTap,
            Self::Swipe { .. } => GestureKind::Swipe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_event_accessors() {
        let event = TouchEvent::Moved {
            id: TouchId::new(3),
            position: Point::new(1.0, 2.0),
            time_ms: 40,
        };
        assert_eq!(event.id(), TouchId(3));
        assert_eq!(event.time_ms(), 40);
        assert_eq!(event.position(), Some(Point::new(1.0, 2.0)));

        let cancel = TouchEvent::Cancelled {
            id: TouchId::new(3),
            time_ms: 90,
        };
        assert_eq!(cancel.position(), None);
        assert_eq!(cancel.time_ms(), 90);
    }

    #[test]
    fn test_touch_event_json_is_phase_tagged() {
        let json = r#"{"phase":"began","id":1,"position":{"x":5.0,"y":6.0},"time_ms":0}"#;
        let event: TouchEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            TouchEvent::Began {
                id: TouchId(1),
                position: Point::new(5.0, 6.0),
                time_ms: 0,
            }
        );
    }

    #[test]
    fn test_gesture_kind() {
        assert_eq!(
            Gesture::Tap {
                delta: Point::ORIGIN
            }
            .kind(),
            GestureKind::Tap
        );
        assert_eq!(
            Gesture::LongTapEnded {
                delta: Point::ORIGIN
            }
            .kind(),
            GestureKind::LongTap
        );
        assert_eq!(
            Gesture::Swipe {
                direction: SwipeDirection::Left,
                delta: Point::new(-20.0, 0.0)
            }
            .kind(),
            GestureKind::Swipe
        );
    }

    #[test]
    fn test_gesture_kind_default_is_none() {
        assert_eq!(GestureKind::default(), GestureKind::None);
    }

    #[test]
    fn test_swipe_direction_display() {
        assert_eq!(SwipeDirection::Up.to_string(), "up");
        assert_eq!(SwipeDirection::Right.to_string(), "right");
        assert_eq!(format!("[{:<6}]", SwipeDirection::Up), "[up    ]");
    }

    #[test]
    fn test_gesture_json_shape() {
        let json = serde_json::to_string(&Gesture::Swipe {
            direction: SwipeDirection::Down,
            delta: Point::new(0.0, -12.0),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"gesture":"swipe","direction":"down","delta":{"x":0.0,"y":-12.0}}"#
        );
    }
}

//! Core types for tapswipe.
//!
//! This crate classifies a single continuous touch as a tap, a long-tap or a
//! swipe:
//! - Geometry: [`Point`]
//! - Input and output: [`TouchEvent`], [`Gesture`], [`GestureKind`]
//! - Thresholds: [`GestureConfig`]
//! - Recognition: [`GestureRecognizer`], driven by a [`PollSchedule`]
//! - Callbacks: [`GestureListener`]

mod config;
mod error;
mod event;
mod geometry;
pub mod gesture;
mod listener;
mod schedule;

pub use config::{
    GestureConfig, DEFAULT_LONG_TAP_THRESHOLD_SECS, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_SWIPE_THRESHOLD_DISTANCE,
};
pub use error::GestureError;
pub use event::{Gesture, GestureKind, SwipeDirection, TouchEvent, TouchId};
pub use geometry::Point;
pub use gesture::{classify_swipe, GestureRecognizer, TouchPoint};
pub use listener::{GestureListener, PointCallback, SwipeCallback};
pub use schedule::PollSchedule;

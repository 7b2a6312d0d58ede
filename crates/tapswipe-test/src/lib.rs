#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
//! Test tooling for tapswipe.
//!
//! - [`TouchScript`]: build touch sequences against a virtual clock
//! - [`GestureLog`]: record what a [`GestureListener`] dispatched
//! - [`GestureHarness`]: run scripts through a listener frame by frame and
//!   assert on the outcome
//!
//! ```
//! use tapswipe_core::SwipeDirection;
//! use tapswipe_test::{GestureHarness, TouchScript};
//!
//! let mut harness = GestureHarness::new();
//! harness.run(&TouchScript::swipe((0.0, 0.0), (60.0, 0.0), 80, 4));
//! harness.assert_swipe(SwipeDirection::Right);
//! ```
//!
//! [`GestureListener`]: tapswipe_core::GestureListener

mod harness;
mod log;
mod script;

pub use harness::GestureHarness;
pub use log::GestureLog;
pub use script::TouchScript;

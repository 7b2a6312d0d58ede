//! Config and touch trace loading for tapswipe.
//!
//! Gesture thresholds load from YAML, JSON or TOML; recorded touch traces
//! load from YAML or JSON. Every loaded config is validated before use.

mod config;
mod error;
mod format;
mod trace;

pub use config::{config_to_string, load_config, parse_config};
pub use error::ParseError;
pub use format::Format;
pub use trace::{load_trace, TimedGesture, TouchTrace};

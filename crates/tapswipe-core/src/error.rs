//! Error types for tapswipe-core.

use thiserror::Error;

/// Errors raised when configuring a recognizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GestureError {
    /// A threshold must be a finite value above zero.
    #[error("{name} must be greater than 0 (got {value})")]
    InvalidThreshold {
        /// Name of the rejected setting
        name: &'static str,
        /// Rejected value
        value: f32,
    },

    /// The poll interval must be at least one millisecond.
    #[error("poll interval must be at least 1ms (got {0}ms)")]
    InvalidInterval(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_threshold_display() {
        let err = GestureError::InvalidThreshold {
            name: "swipe_threshold_distance",
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "swipe_threshold_distance must be greater than 0 (got -1)"
        );
    }

    #[test]
    fn test_invalid_interval_display() {
        assert_eq!(
            GestureError::InvalidInterval(0).to_string(),
            "poll interval must be at least 1ms (got 0ms)"
        );
    }
}

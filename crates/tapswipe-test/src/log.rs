//! Recording of dispatched gestures.

use std::sync::{Arc, Mutex, MutexGuard};
use tapswipe_core::{Gesture, GestureKind, GestureListener};

/// Shared record of the gestures a listener dispatched, in order.
#[derive(Debug, Clone, Default)]
pub struct GestureLog {
    entries: Arc<Mutex<Vec<Gesture>>>,
}

impl GestureLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install recording callbacks on `listener`, replacing any it had.
    pub fn attach(&self, listener: GestureListener) -> GestureListener {
        let (tap, began, ended, swipe) = (self.clone(), self.clone(), self.clone(), self.clone());
        listener
            .on_tap(move |delta| tap.push(Gesture::Tap { delta }))
            .on_long_tap_began(move |position| began.push(Gesture::LongTapBegan { position }))
            .on_long_tap_ended(move |delta| ended.push(Gesture::LongTapEnded { delta }))
            .on_swipe(move |direction, delta| swipe.push(Gesture::Swipe { direction, delta }))
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Gesture>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Append a gesture.
    pub fn push(&self, gesture: Gesture) {
        self.lock().push(gesture);
    }

    /// Copy of everything recorded.
    pub fn entries(&self) -> Vec<Gesture> {
        self.lock().clone()
    }

    /// Kinds of everything recorded.
    pub fn kinds(&self) -> Vec<GestureKind> {
        self.lock().iter().map(Gesture::kind).collect()
    }

    /// Number of recorded gestures.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forget everything recorded.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapswipe_core::{Point, SwipeDirection};

    #[test]
    fn test_log_push_and_kinds() {
        let log = GestureLog::new();
        assert!(log.is_empty());

        log.push(Gesture::Tap {
            delta: Point::ORIGIN,
        });
        log.push(Gesture::Swipe {
            direction: SwipeDirection::Up,
            delta: Point::new(0.0, 20.0),
        });

        assert_eq!(log.len(), 2);
        assert_eq!(log.kinds(), vec![GestureKind::Tap, GestureKind::Swipe]);

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_clones_share_entries() {
        let log = GestureLog::new();
        let other = log.clone();
        other.push(Gesture::LongTapBegan {
            position: Point::ORIGIN,
        });
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_attach_records_dispatch() {
        let log = GestureLog::new();
        let listener = log.attach(GestureListener::new());
        let gesture = Gesture::LongTapEnded {
            delta: Point::new(1.0, 2.0),
        };
        listener.dispatch(&gesture);
        assert_eq!(log.entries(), vec![gesture]);
    }
}

//! Repeating poll schedule driven by caller timestamps.

/// A repeating schedule that fires at regular intervals once started.
///
/// The recognizer schedules its long-tap poll when a touch begins and
/// unschedules it when the touch ends. Time only moves when the caller
/// asks whether a tick is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSchedule {
    /// Interval in milliseconds
    interval_ms: u64,
    /// Timestamp of the next tick while scheduled
    next_due_ms: Option<u64>,
    /// Number of ticks passed since the last `schedule`
    tick_count: u64,
}

impl PollSchedule {
    /// Create an unscheduled poll with the given interval.
    ///
    /// An interval of zero is clamped to one millisecond.
    #[must_use]
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: if interval_ms == 0 { 1 } else { interval_ms },
            next_due_ms: None,
            tick_count: 0,
        }
    }

    /// Interval between ticks.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Start ticking; the first tick is due one interval after `now_ms`.
    pub fn schedule(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
        self.tick_count = 0;
    }

    /// Stop ticking.
    pub fn unschedule(&mut self) {
        self.next_due_ms = None;
    }

    /// Check if the schedule is running.
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        self.next_due_ms.is_some()
    }

    /// Timestamp of the next tick, if scheduled.
    #[must_use]
    pub const fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Ticks taken or skipped since the last `schedule`.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Take the next tick if it is due at or before `now_ms`.
    ///
    /// Returns the tick's own timestamp and advances by one interval, so a
    /// caller that falls behind gets every missed tick on repeated calls.
    pub fn take_due(&mut self, now_ms: u64) -> Option<u64> {
        let due = self.next_due_ms?;
        if due > now_ms {
            return None;
        }
        self.next_due_ms = Some(due.saturating_add(self.interval_ms));
        self.tick_count += 1;
        Some(due)
    }

    /// Pass over the next `ticks` ticks without taking them.
    pub fn skip(&mut self, ticks: u64) {
        if let Some(due) = self.next_due_ms {
            self.next_due_ms = Some(due.saturating_add(ticks.saturating_mul(self.interval_ms)));
            self.tick_count = self.tick_count.saturating_add(ticks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_new_is_idle() {
        let mut poll = PollSchedule::new(50);
        assert!(!poll.is_scheduled());
        assert_eq!(poll.next_due_ms(), None);
        assert_eq!(poll.take_due(10_000), None);
    }

    #[test]
    fn test_schedule_zero_interval_clamped() {
        assert_eq!(PollSchedule::new(0).interval_ms(), 1);
    }

    #[test]
    fn test_schedule_ticks_at_interval() {
        let mut poll = PollSchedule::new(50);
        poll.schedule(100);
        assert_eq!(poll.next_due_ms(), Some(150));

        assert_eq!(poll.take_due(149), None);
        assert_eq!(poll.take_due(150), Some(150));
        assert_eq!(poll.take_due(150), None);
        assert_eq!(poll.next_due_ms(), Some(200));
        assert_eq!(poll.tick_count(), 1);
    }

    #[test]
    fn test_schedule_catches_up_missed_ticks() {
        let mut poll = PollSchedule::new(50);
        poll.schedule(0);

        let ticks: Vec<u64> = std::iter::from_fn(|| poll.take_due(180)).collect();
        assert_eq!(ticks, vec![50, 100, 150]);
        assert_eq!(poll.tick_count(), 3);
    }

    #[test]
    fn test_unschedule_stops_ticks() {
        let mut poll = PollSchedule::new(50);
        poll.schedule(0);
        poll.unschedule();
        assert!(!poll.is_scheduled());
        assert_eq!(poll.take_due(1_000), None);
    }

    #[test]
    fn test_skip_moves_due_time() {
        let mut poll = PollSchedule::new(50);
        poll.schedule(0);
        poll.skip(3);
        assert_eq!(poll.next_due_ms(), Some(200));
        assert_eq!(poll.tick_count(), 3);
        assert_eq!(poll.take_due(200), Some(200));

        poll.unschedule();
        poll.skip(10);
        assert_eq!(poll.next_due_ms(), None);
    }

    #[test]
    fn test_reschedule_resets_count() {
        let mut poll = PollSchedule::new(10);
        poll.schedule(0);
        poll.take_due(10);
        poll.take_due(20);
        assert_eq!(poll.tick_count(), 2);

        poll.schedule(500);
        assert_eq!(poll.tick_count(), 0);
        assert_eq!(poll.next_due_ms(), Some(510));
    }
}

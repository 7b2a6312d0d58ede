//! Scripted touch sequences.

use tapswipe_core::{Point, TouchEvent, TouchId};

/// Builder for a touch sequence on a virtual millisecond clock.
///
/// Each step is stamped with the clock; [`Self::wait`] advances it.
#[derive(Debug, Clone, Default)]
pub struct TouchScript {
    events: Vec<TouchEvent>,
    now_ms: u64,
    finger: TouchId,
    position: Point,
}

impl TouchScript {
    /// Start an empty script at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an empty script at `ms`.
    pub fn starting_at(ms: u64) -> Self {
        Self {
            now_ms: ms,
            ..Self::default()
        }
    }

    /// A touch that goes down and up in place after `16ms`.
    pub fn tap(x: f32, y: f32) -> Self {
        Self::new().down(x, y).wait(16).up()
    }

    /// A touch held in place for `hold_ms`.
    pub fn hold(x: f32, y: f32, hold_ms: u64) -> Self {
        Self::new().down(x, y).wait(hold_ms).up()
    }

    /// A straight drag from `from` to `to` over `duration_ms`, in `steps`
    /// equal moves.
    pub fn swipe(from: (f32, f32), to: (f32, f32), duration_ms: u64, steps: u32) -> Self {
        let steps = steps.max(1);
        let step_ms = duration_ms / u64::from(steps);
        let mut script = Self::new().down(from.0, from.1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            script = script
                .wait(step_ms)
                .move_to(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
        }
        script.up()
    }

    /// Use `id` for the following steps.
    pub fn finger(mut self, id: u32) -> Self {
        self.finger = TouchId(id);
        self
    }

    /// Advance the clock.
    pub fn wait(mut self, ms: u64) -> Self {
        self.now_ms += ms;
        self
    }

    /// Put the current finger down.
    pub fn down(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self.events.push(TouchEvent::Began {
            id: self.finger,
            position: self.position,
            time_ms: self.now_ms,
        });
        self
    }

    /// Move the current finger to an absolute position.
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.position = Point::new(x, y);
        self.events.push(TouchEvent::Moved {
            id: self.finger,
            position: self.position,
            time_ms: self.now_ms,
        });
        self
    }

    /// Move the current finger relative to its last position.
    pub fn move_by(self, dx: f32, dy: f32) -> Self {
        let (x, y) = (self.position.x + dx, self.position.y + dy);
        self.move_to(x, y)
    }

    /// Lift the current finger where it is.
    pub fn up(mut self) -> Self {
        self.events.push(TouchEvent::Ended {
            id: self.finger,
            position: self.position,
            time_ms: self.now_ms,
        });
        self
    }

    /// Cancel the current finger.
    pub fn cancel(mut self) -> Self {
        self.events.push(TouchEvent::Cancelled {
            id: self.finger,
            time_ms: self.now_ms,
        });
        self
    }

    /// Append another script, shifted to start at the current clock.
    pub fn then(mut self, other: &Self) -> Self {
        let offset = self.now_ms;
        self.events
            .extend(other.events.iter().map(|e| shift(e, offset)));
        self.now_ms += other.now_ms;
        self.position = other.position;
        self
    }

    /// Events in order.
    pub fn events(&self) -> &[TouchEvent] {
        &self.events
    }

    /// Current clock.
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

fn shift(event: &TouchEvent, offset: u64) -> TouchEvent {
    match *event {
        TouchEvent::Began {
            id,
            position,
            time_ms,
        } => TouchEvent::Began {
            id,
            position,
            time_ms: time_ms + offset,
        },
        TouchEvent::Moved {
            id,
            position,
            time_ms,
        } => TouchEvent::Moved {
            id,
            position,
            time_ms: time_ms + offset,
        },
        TouchEvent::Ended {
            id,
            position,
            time_ms,
        } => TouchEvent::Ended {
            id,
            position,
            time_ms: time_ms + offset,
        },
        TouchEvent::Cancelled { id, time_ms } => TouchEvent::Cancelled {
            id,
            time_ms: time_ms + offset,
        },
    }
}

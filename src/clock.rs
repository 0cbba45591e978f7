//! Millisecond clocks driving think deadlines and animations
//!
//! Time is counted in milliseconds since the clock was created and stored as
//! `u64`, so deadline comparisons never wrap during a session.

use std::cell::Cell;
use std::time::Instant;

/// Milliseconds since engine start
pub type Millis = u64;

/// A monotonic millisecond source
pub trait Clock {
    fn now_millis(&self) -> Millis;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> Millis {
        self.start.elapsed().as_millis() as Millis
    }
}

/// A clock that only moves when told to.
///
/// Used by tests and by tools that step the engine frame by frame.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }

    pub fn advance(&self, delta: Millis) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> Millis {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now_millis(&self) -> Millis {
        (**self).now_millis()
    }
}

//! # Frame Clock
//!
//! The shared "current time" every timer is measured against.
//!
//! The owning loop writes the clock once per frame and then hands it out by
//! shared reference to every timer it polls. Because timers only ever see
//! `&FrameClock`, all of them advance in lockstep with the one writer and
//! none can sample time on its own.

use hal::TimerDevice;
use poll_types::Ticks;

/// The current tick value for one scheduling frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameClock {
    now: Ticks,
}

impl FrameClock {
    /// Creates a clock reading zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock already set to `now`
    pub fn at(now: Ticks) -> Self {
        Self { now }
    }

    /// Overwrites the current tick value
    ///
    /// Call once per frame, before polling any timer. Values are expected
    /// to increase monotonically modulo wraparound.
    pub fn set(&mut self, now: Ticks) {
        self.now = now;
    }

    /// Reads the host tick source once and stores the reading
    pub fn sample<D: TimerDevice + ?Sized>(&mut self, device: &mut D) -> Ticks {
        self.now = Ticks::from_wide(device.poll_ticks());
        self.now
    }

    /// The current tick value
    pub fn now(&self) -> Ticks {
        self.now
    }
}

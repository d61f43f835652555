//! Timer that runs a closure each time it fires

use crate::clock::FrameClock;
use crate::pollable::Pollable;
use crate::timer::PollTimer;
use poll_types::Ticks;

/// Wraps a [`PollTimer`] and calls `action` with the firing tick
///
/// # Examples
///
/// ```
/// use poll_timer::{ActionTimer, FrameClock, Pollable, PollTimer};
/// use poll_types::Ticks;
///
/// let mut blinks = 0;
/// let mut led = ActionTimer::new(PollTimer::with_start(Ticks(500), Ticks(0)), |_| blinks += 1);
///
/// led.update(&FrameClock::at(Ticks(500)));
/// led.update(&FrameClock::at(Ticks(600)));
/// drop(led);
/// assert_eq!(blinks, 1);
/// ```
pub struct ActionTimer<F> {
    timer: PollTimer,
    action: F,
}

impl<F: FnMut(Ticks)> ActionTimer<F> {
    pub fn new(timer: PollTimer, action: F) -> Self {
        Self { timer, action }
    }

    /// Drops the action and returns the timer
    pub fn into_inner(self) -> PollTimer {
        self.timer
    }
}

impl<F: FnMut(Ticks)> Pollable for ActionTimer<F> {
    fn timer(&self) -> &PollTimer {
        &self.timer
    }

    fn timer_mut(&mut self) -> &mut PollTimer {
        &mut self.timer
    }

    fn update(&mut self, clock: &FrameClock) -> bool {
        let fired = self.timer.update(clock);
        if fired {
            (self.action)(clock.now());
        }
        fired
    }
}

impl<F> core::fmt::Debug for ActionTimer<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionTimer")
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

//! # Pollable
//!
//! The one behavior a specialized timer may change is what happens on
//! `update`. Everything else is the fixed [`PollTimer`] primitive, reached
//! through [`Pollable::timer`].

use crate::clock::FrameClock;
use crate::timer::PollTimer;
use poll_types::Ticks;

/// Something that can be asked, once per frame, whether it is due
///
/// The provided [`update`](Pollable::update) consumes an elapsed period on
/// the inner timer. Implementors override it to attach extra behavior or to
/// reset on a different condition, building on `has_elapsed`/`reset`.
pub trait Pollable {
    /// The timer this pollable is built around
    fn timer(&self) -> &PollTimer;

    fn timer_mut(&mut self) -> &mut PollTimer;

    /// Polls once; `true` means the period elapsed and was consumed
    fn update(&mut self, clock: &FrameClock) -> bool {
        self.timer_mut().update(clock)
    }

    fn period(&self) -> Ticks {
        self.timer().period()
    }
}

impl Pollable for PollTimer {
    fn timer(&self) -> &PollTimer {
        self
    }

    fn timer_mut(&mut self) -> &mut PollTimer {
        self
    }
}

//! # Poll Timer
//!
//! Decides, on each inquiry, whether a tick interval has elapsed.
//!
//! A timer stores two numbers: the tick at which it was last reset and its
//! period. Everything else is computed against the [`FrameClock`] passed in
//! by the caller, with wrapping subtraction so that counter overflow is
//! harmless.
//!
//! ## Period values
//!
//! | period | meaning |
//! |--------|---------|
//! | `0`    | disabled, never fires |
//! | `1`    | fires on every inquiry, even if the clock has not moved |
//! | `n > 1`| fires once `n` ticks have elapsed since the last reset |
//!
//! The `1` sentinel is long-standing behavior: a one-tick interval and
//! "every frame" are the same setting.

use crate::clock::FrameClock;
use crate::phase::{EntropyPhase, PhaseSource};
use poll_types::Ticks;

/// Typed view of what a period value means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodMode {
    /// Period 0: never fires
    Disabled,
    /// Period 1: fires on every inquiry
    EveryInquiry,
    /// Period > 1: fires once per interval
    Interval(Ticks),
}

impl PeriodMode {
    /// Classifies a raw period value
    pub fn of(period: Ticks) -> Self {
        match period.get() {
            0 => PeriodMode::Disabled,
            1 => PeriodMode::EveryInquiry,
            _ => PeriodMode::Interval(period),
        }
    }
}

/// A polled interval timer
///
/// # Examples
///
/// ```
/// use poll_timer::{FrameClock, PollTimer};
/// use poll_types::Ticks;
///
/// let mut clock = FrameClock::new();
/// let mut timer = PollTimer::with_start(Ticks(100), Ticks(0));
///
/// clock.set(Ticks(99));
/// assert!(!timer.update(&clock));
///
/// clock.set(Ticks(100));
/// assert!(timer.update(&clock));
/// assert!(!timer.update(&clock));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollTimer {
    start: Ticks,
    period: Ticks,
}

impl PollTimer {
    /// Creates a timer whose start point is a random offset in `[0, period)`
    pub fn new(period: Ticks) -> Self {
        Self::with_phase_source(period, &mut EntropyPhase)
    }

    /// Creates a timer whose start point is drawn from `source`
    pub fn with_phase_source<S: PhaseSource + ?Sized>(period: Ticks, source: &mut S) -> Self {
        Self {
            start: source.phase(period),
            period,
        }
    }

    /// Creates a timer with an exact start point
    pub fn with_start(period: Ticks, start: Ticks) -> Self {
        Self { start, period }
    }

    /// Consumes an elapsed period
    ///
    /// Returns `false` without touching any state if the period has not
    /// elapsed. Otherwise resets the start point to the current clock and
    /// returns `true`, so a tight loop sees at most one `true` per period.
    pub fn update(&mut self, clock: &FrameClock) -> bool {
        if !self.has_elapsed(clock) {
            return false;
        }
        self.reset(clock);
        true
    }

    /// Whether the period has elapsed, without consuming it
    pub fn has_elapsed(&self, clock: &FrameClock) -> bool {
        (self.period.get() > 0 && self.elapsed_since(clock) >= self.period)
            || self.period.get() == 1
    }

    /// Moves the start point to the current clock
    pub fn reset(&mut self, clock: &FrameClock) {
        self.start = clock.now();
    }

    /// Ticks since the last reset, modulo the counter width
    pub fn elapsed_since(&self, clock: &FrameClock) -> Ticks {
        clock.now().wrapping_sub(self.start)
    }

    /// Ticks left until the period elapses
    ///
    /// Only meaningful while [`has_elapsed`](Self::has_elapsed) is false.
    /// Once the period has passed the subtraction wraps and the result is
    /// a very large value; treat that as "already due".
    pub fn remaining(&self, clock: &FrameClock) -> Ticks {
        self.period.wrapping_sub(self.elapsed_since(clock))
    }

    /// Whether the timer can fire at all (period > 0)
    pub fn is_active(&self) -> bool {
        self.period.get() > 0
    }

    pub fn period(&self) -> Ticks {
        self.period
    }

    pub fn mode(&self) -> PeriodMode {
        PeriodMode::of(self.period)
    }

    /// The tick of the last reset
    pub fn start(&self) -> Ticks {
        self.start
    }

    /// Changes the period without moving the start point
    ///
    /// Shortening the period can make the timer due on the next poll.
    pub fn set_period(&mut self, period: Ticks) {
        self.period = period;
    }
}

//! Polling Test Utilities
//!
//! Shared helpers for the cross-crate polling tests.
//!
//! ## Test Philosophy
//!
//! - **Simulated time only**: Every clock value comes from a sim device or
//!   an explicit tick, never from the host
//! - **Reproducible sequences**: "Random" clock walks are seeded

use hal::TimerDevice;
use poll_timer::{FrameClock, PhaseSource, Pollable, SeededPhase};
use poll_types::Ticks;

/// Polls `pollable` once per reading of `device`, returning the clock
/// values at which it fired
pub fn fire_times<P, D>(pollable: &mut P, device: &mut D, frames: usize) -> Vec<Ticks>
where
    P: Pollable + ?Sized,
    D: TimerDevice + ?Sized,
{
    let mut clock = FrameClock::new();
    let mut fired = Vec::new();
    for _ in 0..frames {
        clock.sample(device);
        if pollable.update(&clock) {
            fired.push(clock.now());
        }
    }
    fired
}

/// A reproducible sequence of clock steps in `[0, max_step)`
pub fn seeded_steps(seed: u32, max_step: u32, count: usize) -> Vec<u64> {
    let mut source = SeededPhase::new(seed);
    (0..count)
        .map(|_| source.phase(Ticks(max_step)).get() as u64)
        .collect()
}

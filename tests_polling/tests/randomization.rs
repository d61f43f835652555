//! Start Phase Randomization Tests
//!
//! Timers built together with the same period should not all fire on the
//! same frame.

use poll_timer::{FrameClock, PhaseConfig, PollTimer, SeededPhase, TimerConfig};
use poll_types::Ticks;
use std::collections::HashSet;

#[test]
fn test_default_offsets_span_period() {
    let period = 10;
    let offsets: HashSet<u32> = (0..1000)
        .map(|_| PollTimer::new(Ticks(period)).start().get())
        .collect();

    assert!(offsets.iter().all(|&o| o < period));
    // 1000 uniform draws over 10 buckets miss one with negligible probability.
    assert_eq!(offsets.len(), period as usize);
}

#[test]
fn test_default_offsets_not_constant_for_large_period() {
    let offsets: HashSet<u32> = (0..64)
        .map(|_| PollTimer::new(Ticks(1_000_000)).start().get())
        .collect();
    assert!(offsets.len() > 1);
}

#[test]
fn test_staggered_first_fires() {
    let mut source = SeededPhase::new(2024);
    let mut timers: Vec<PollTimer> = (0..20)
        .map(|_| PollTimer::with_phase_source(Ticks(100), &mut source))
        .collect();
    let initial: Vec<u32> = timers.iter().map(|t| t.start().get()).collect();

    // Start polling once the clock is past every offset.
    let mut first_fire = vec![None; timers.len()];
    let mut clock = FrameClock::new();
    for now in 100..300u32 {
        clock.set(Ticks(now));
        for (i, timer) in timers.iter_mut().enumerate() {
            if timer.update(&clock) && first_fire[i].is_none() {
                first_fire[i] = Some(now);
            }
        }
    }

    for (start, fire) in initial.iter().zip(&first_fire) {
        assert_eq!(*fire, Some(start + 100));
    }
    let distinct: HashSet<_> = first_fire.iter().flatten().collect();
    assert!(distinct.len() > 1);
}

#[test]
fn test_offset_ahead_of_clock_fires_immediately() {
    // A start point ahead of the clock reads as a huge wrapped elapsed time.
    let mut timer = PollTimer::with_start(Ticks(100), Ticks(60));
    assert!(timer.update(&FrameClock::at(Ticks(10))));
    assert_eq!(timer.start(), Ticks(10));
}

#[test]
fn test_seeded_config_reproducible_across_builds() {
    let config = TimerConfig::new(Ticks(5000)).with_phase(PhaseConfig::Seeded { seed: 77 });
    let starts: HashSet<_> = (0..10).map(|_| config.build().start()).collect();
    assert_eq!(starts.len(), 1);
}

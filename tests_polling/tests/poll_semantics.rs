//! Poll Timer Semantics Integration Tests
//!
//! Fire-once-per-period, disabled and every-inquiry behavior, driven by
//! simulated tick sources.

use hal::TimerDevice;
use poll_timer::{FrameClock, PollTimer, Pollable};
use poll_types::Ticks;
use sim_timer::{ScriptedTimerDevice, SimTimerDevice};
use tests_polling::{fire_times, seeded_steps};

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_period_100_scenario() {
    let mut timer = PollTimer::with_start(Ticks(100), Ticks(0));
    let mut device = ScriptedTimerDevice::new([100u64, 150, 200, 201]);
    let mut clock = FrameClock::new();

    clock.sample(&mut device);
    assert!(timer.update(&clock));
    assert_eq!(timer.start(), Ticks(100));

    clock.sample(&mut device);
    assert!(!timer.update(&clock));

    clock.sample(&mut device);
    assert!(timer.update(&clock));
    assert_eq!(timer.start(), Ticks(200));

    clock.sample(&mut device);
    assert!(!timer.update(&clock));
}

#[test]
fn test_period_1_fires_on_frozen_clock() {
    let mut timer = PollTimer::new(Ticks(1));
    let mut device = ScriptedTimerDevice::new([5u64, 5, 5]);
    let fired = fire_times(&mut timer, &mut device, 3);
    assert_eq!(fired, vec![Ticks(5), Ticks(5), Ticks(5)]);
}

#[test]
fn test_period_0_never_fires() {
    let mut timer = PollTimer::new(Ticks(0));
    let mut device = ScriptedTimerDevice::new([0u64, 1000, 1_000_000]);
    assert!(fire_times(&mut timer, &mut device, 3).is_empty());
}

// ============================================================================
// Properties over seeded clock walks
// ============================================================================

#[test]
fn test_fires_once_per_elapsed_span() {
    for seed in 1..20 {
        let period = 37;
        let mut timer = PollTimer::with_start(Ticks(period), Ticks(0));
        let mut device = SimTimerDevice::new();
        let mut clock = FrameClock::new();
        let mut last_fire = 0u32;

        for step in seeded_steps(seed, 20, 500) {
            device.advance_ticks(step);
            clock.sample(&mut device);

            let due = clock.now().get() - last_fire >= period;
            let fired = timer.update(&clock);
            assert_eq!(fired, due, "seed {} at {}", seed, clock.now());
            if fired {
                last_fire = clock.now().get();
                assert_eq!(timer.start(), clock.now());
            }
        }
    }
}

#[test]
fn test_tight_loop_fires_at_most_once() {
    let mut timer = PollTimer::with_start(Ticks(10), Ticks(0));
    let clock = FrameClock::at(Ticks(1000));
    let fires = (0..100).filter(|_| timer.update(&clock)).count();
    assert_eq!(fires, 1);
}

#[test]
fn test_disabled_for_any_walk() {
    let mut timer = PollTimer::new(Ticks(0));
    let mut device = SimTimerDevice::new();
    for step in seeded_steps(3, 1_000_000, 200) {
        device.advance_ticks(step);
        let mut clock = FrameClock::new();
        clock.sample(&mut device);
        assert!(!timer.update(&clock));
    }
}

#[test]
fn test_every_inquiry_for_any_walk() {
    let mut timer = PollTimer::new(Ticks(1));
    let mut device = SimTimerDevice::new();
    let mut clock = FrameClock::new();
    for step in seeded_steps(4, 3, 200) {
        device.advance_ticks(step);
        clock.sample(&mut device);
        assert!(timer.update(&clock));
    }
}

#[test]
fn test_failed_polls_leave_state() {
    let mut timer = PollTimer::with_start(Ticks(500), Ticks(0));
    let clock = FrameClock::at(Ticks(499));
    for _ in 0..50 {
        assert!(!timer.update(&clock));
        assert_eq!(timer.start(), Ticks(0));
        assert_eq!(timer.remaining(&clock), Ticks(1));
    }
}

// ============================================================================
// Shared clock
// ============================================================================

#[test]
fn test_timers_share_one_reading() {
    let mut device = SimTimerDevice::with_initial_ticks(250);
    let mut clock = FrameClock::new();
    clock.sample(&mut device);

    let mut timers: Vec<Box<dyn Pollable>> = vec![
        Box::new(PollTimer::with_start(Ticks(100), Ticks(0))),
        Box::new(PollTimer::with_start(Ticks(100), Ticks(200))),
        Box::new(PollTimer::with_start(Ticks(1), Ticks(250))),
    ];
    let fired: Vec<bool> = timers.iter_mut().map(|t| t.update(&clock)).collect();

    assert_eq!(fired, vec![true, false, true]);
    assert_eq!(device.read_count(), 1);
    assert_eq!(timers[0].timer().start(), Ticks(250));
    assert_eq!(timers[1].timer().start(), Ticks(200));
    assert_eq!(timers[1].timer().elapsed_since(&clock), Ticks(50));
    assert_eq!(timers[2].timer().start(), Ticks(250));
}

#[test]
fn test_clock_device_as_trait_object() {
    let mut device = ScriptedTimerDevice::new([10u64, 20]);
    let dynamic: &mut dyn TimerDevice = &mut device;
    let mut timer = PollTimer::with_start(Ticks(10), Ticks(0));
    assert_eq!(fire_times(&mut timer, dynamic, 2), vec![Ticks(10), Ticks(20)]);
}

#![no_std]

//! # Poll Timer
//!
//! Interval timers for cooperative main loops.
//!
//! ## Philosophy
//!
//! - **Explicit time**: Timers never read a clock. The loop writes one
//!   [`FrameClock`] per frame and passes it to every timer it polls.
//! - **Consume on observe**: A timer's state only moves when a poll
//!   returns `true`.
//! - **Wraparound-safe**: Elapsed time is an unsigned wrapping difference.
//! - **No dispatch**: What happens when a timer fires is the caller's
//!   business; [`ActionTimer`] is one way to package it.
//!
//! ## Example
//!
//! ```
//! use poll_timer::{FrameClock, PollTimer};
//! use poll_types::Ticks;
//!
//! let mut clock = FrameClock::new();
//! let mut heartbeat = PollTimer::new(Ticks(1000));
//! let mut every_frame = PollTimer::new(Ticks(1));
//!
//! for millis in (0..5000).step_by(10) {
//!     clock.set(Ticks(millis));
//!     if heartbeat.update(&clock) {
//!         // toggle an LED
//!     }
//!     assert!(every_frame.update(&clock));
//! }
//! ```

pub mod action;
pub mod clock;
pub mod config;
pub mod phase;
pub mod pollable;
pub mod timer;

pub use action::ActionTimer;
pub use clock::FrameClock;
pub use config::{PhaseConfig, TimerConfig};
pub use phase::{EntropyPhase, FixedPhase, PhaseSource, SeededPhase};
pub use pollable::Pollable;
pub use timer::{PeriodMode, PollTimer};

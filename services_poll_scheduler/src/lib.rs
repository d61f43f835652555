//! # Poll Scheduler Service
//!
//! A per-frame driver for a set of polled timers.
//!
//! ## Philosophy
//!
//! - **One clock read per frame**: The tick source is sampled once, then
//!   every timer is polled against that same value
//! - **Cooperative**: Timers are polled in registration order on the
//!   caller's thread; nothing runs in the background
//! - **Deterministic**: Driven by an explicit [`TimerDevice`] or tick value,
//!   so tests control time completely
//! - **Observable**: Every registration change and every fire is recorded
//!   as a structured log entry
//!
//! ## Example
//!
//! ```
//! use poll_timer::PollTimer;
//! use poll_types::Ticks;
//! use services_poll_scheduler::PollScheduler;
//!
//! let mut scheduler = PollScheduler::new();
//! let blink = scheduler
//!     .register_timer("blink", PollTimer::with_start(Ticks(500), Ticks(0)))
//!     .unwrap();
//!
//! assert!(scheduler.tick_at(Ticks(250)).is_empty());
//! assert_eq!(scheduler.tick_at(Ticks(500)), vec![blink]);
//! ```

pub mod config;
pub mod error;

pub use config::{NamedTimerConfig, SchedulerConfig};
pub use error::SchedulerError;

use hal::TimerDevice;
use poll_timer::{FrameClock, PollTimer, Pollable};
use poll_types::{Ticks, TimerId};
use services_logger::{LogBuffer, LogEntry, LogLevel};

/// A pollable the scheduler can own
pub type BoxedPollable = Box<dyn Pollable + Send>;

/// Snapshot of a registered timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerInfo {
    pub id: TimerId,
    pub name: String,
    pub period: Ticks,
    pub fire_count: u64,
}

struct TimerEntry {
    id: TimerId,
    name: String,
    pollable: BoxedPollable,
    fire_count: u64,
}

/// Poll scheduler
pub struct PollScheduler {
    timers: Vec<TimerEntry>,
    clock: FrameClock,
    frame_count: u64,
    logs: LogBuffer,
}

impl PollScheduler {
    /// Creates an empty scheduler with the default log capacity
    pub fn new() -> Self {
        Self::with_log_capacity(LogBuffer::DEFAULT_CAPACITY)
    }

    pub fn with_log_capacity(capacity: usize) -> Self {
        Self {
            timers: Vec::new(),
            clock: FrameClock::new(),
            frame_count: 0,
            logs: LogBuffer::new(capacity),
        }
    }

    /// Builds a scheduler and registers every configured timer
    pub fn from_config(config: &SchedulerConfig) -> Result<Self, SchedulerError> {
        let mut scheduler = Self::with_log_capacity(config.log_capacity);
        for timer in &config.timers {
            scheduler.register_timer(timer.name.clone(), timer.timer_config().build())?;
        }
        Ok(scheduler)
    }

    /// Registers a pollable under a unique name
    pub fn register(
        &mut self,
        name: impl Into<String>,
        pollable: BoxedPollable,
    ) -> Result<TimerId, SchedulerError> {
        let name = name.into();
        if self.timers.iter().any(|t| t.name == name) {
            return Err(SchedulerError::DuplicateName(name));
        }

        let id = TimerId::new();
        self.logs.log(
            LogEntry::new(LogLevel::Info, "timer registered")
                .with_source(id)
                .with_field("name", &name)
                .with_field("period", pollable.period().get()),
        );
        self.timers.push(TimerEntry {
            id,
            name,
            pollable,
            fire_count: 0,
        });
        Ok(id)
    }

    /// Registers a plain [`PollTimer`]
    pub fn register_timer(
        &mut self,
        name: impl Into<String>,
        timer: PollTimer,
    ) -> Result<TimerId, SchedulerError> {
        self.register(name, Box::new(timer))
    }

    /// Unregisters a timer
    pub fn remove(&mut self, id: TimerId) -> Result<(), SchedulerError> {
        let pos = self.position(id)?;
        let entry = self.timers.remove(pos);
        self.logs.log(
            LogEntry::new(LogLevel::Info, "timer removed")
                .with_source(id)
                .with_field("name", &entry.name),
        );
        Ok(())
    }

    /// Changes a timer's period; its start point is left alone
    pub fn set_period(&mut self, id: TimerId, period: Ticks) -> Result<(), SchedulerError> {
        let pos = self.position(id)?;
        let timer = self.timers[pos].pollable.timer_mut();
        let old = timer.period();
        timer.set_period(period);
        self.logs.log(
            LogEntry::new(LogLevel::Info, "timer period changed")
                .with_source(id)
                .with_field("old", old.get())
                .with_field("new", period.get()),
        );
        Ok(())
    }

    /// Restarts a timer's interval from the current clock
    pub fn reset(&mut self, id: TimerId) -> Result<(), SchedulerError> {
        let pos = self.position(id)?;
        let clock = self.clock;
        self.timers[pos].pollable.timer_mut().reset(&clock);
        Ok(())
    }

    /// Runs one frame: samples `device` once, then polls every timer
    ///
    /// Returns the ids of the timers that fired, in registration order.
    pub fn tick<D: TimerDevice + ?Sized>(&mut self, device: &mut D) -> Vec<TimerId> {
        self.clock.sample(device);
        self.poll_all()
    }

    /// Runs one frame with an explicit clock value
    pub fn tick_at(&mut self, now: Ticks) -> Vec<TimerId> {
        self.clock.set(now);
        self.poll_all()
    }

    fn poll_all(&mut self) -> Vec<TimerId> {
        self.frame_count += 1;
        let clock = self.clock;
        let mut fired = Vec::new();

        for entry in &mut self.timers {
            if entry.pollable.update(&clock) {
                entry.fire_count += 1;
                fired.push(entry.id);
                self.logs.log(
                    LogEntry::new(LogLevel::Debug, "timer fired")
                        .with_source(entry.id)
                        .with_field("name", &entry.name)
                        .with_field("clock", clock.now().get()),
                );
            }
        }

        fired
    }

    fn position(&self, id: TimerId) -> Result<usize, SchedulerError> {
        self.timers
            .iter()
            .position(|t| t.id == id)
            .ok_or(SchedulerError::TimerNotFound(id))
    }

    /// The clock value of the most recent frame
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Number of frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn timer_count(&self) -> usize {
        self.timers.len()
    }

    /// How many times a timer has fired
    pub fn fire_count(&self, id: TimerId) -> Option<u64> {
        self.timers
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.fire_count)
    }

    /// Read access to a registered timer's state
    pub fn timer(&self, id: TimerId) -> Option<&PollTimer> {
        self.timers
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.pollable.timer())
    }

    pub fn find_by_name(&self, name: &str) -> Option<TimerId> {
        self.timers.iter().find(|t| t.name == name).map(|t| t.id)
    }

    /// Returns a snapshot of every registered timer
    pub fn list_timers(&self) -> Vec<TimerInfo> {
        self.timers
            .iter()
            .map(|t| TimerInfo {
                id: t.id,
                name: t.name.clone(),
                period: t.pollable.period(),
                fire_count: t.fire_count,
            })
            .collect()
    }

    pub fn logs(&self) -> &LogBuffer {
        &self.logs
    }

    pub fn logs_mut(&mut self) -> &mut LogBuffer {
        &mut self.logs
    }
}

impl Default for PollScheduler {
    fn default() -> Self {
        Self::new()
    }
}

//! Advanceable simulated timer

use hal::TimerDevice;

/// Simulated timer device with controllable time progression
///
/// # Examples
///
/// ```
/// use sim_timer::SimTimerDevice;
/// use hal::TimerDevice;
///
/// let mut timer = SimTimerDevice::new();
/// assert_eq!(timer.poll_ticks(), 0);
///
/// timer.advance_ticks(100);
/// assert_eq!(timer.poll_ticks(), 100);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimTimerDevice {
    ticks: u64,
    reads: u64,
}

impl SimTimerDevice {
    /// Creates a new simulated timer starting at tick 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new simulated timer starting at a specific tick count
    ///
    /// Starting just below `u32::MAX` is the usual way to exercise
    /// 32-bit tick wraparound.
    pub fn with_initial_ticks(ticks: u64) -> Self {
        Self { ticks, reads: 0 }
    }

    /// Advances the timer by the specified number of ticks
    ///
    /// # Panics
    ///
    /// Panics if advancing would overflow u64.
    pub fn advance_ticks(&mut self, delta: u64) {
        self.ticks = self.ticks.checked_add(delta).expect("Timer tick overflow");
    }

    /// Sets the timer to a specific tick count
    ///
    /// # Panics
    ///
    /// Panics if `new_ticks < self.ticks` (would violate monotonicity).
    pub fn set_ticks(&mut self, new_ticks: u64) {
        assert!(
            new_ticks >= self.ticks,
            "Cannot set ticks backwards: {} < {}",
            new_ticks,
            self.ticks
        );
        self.ticks = new_ticks;
    }

    /// Returns the current tick count without counting as a read
    pub fn current_ticks(&self) -> u64 {
        self.ticks
    }

    /// Number of times `poll_ticks` has been called
    pub fn read_count(&self) -> u64 {
        self.reads
    }
}

impl TimerDevice for SimTimerDevice {
    fn poll_ticks(&mut self) -> u64 {
        self.reads += 1;
        self.ticks
    }
}

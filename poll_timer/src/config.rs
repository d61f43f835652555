//! Serializable timer settings

use crate::phase::{EntropyPhase, FixedPhase, SeededPhase};
use crate::timer::PollTimer;
use poll_types::Ticks;
use serde::{Deserialize, Serialize};

/// How a configured timer picks its initial start point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PhaseConfig {
    /// Uniform random offset in `[0, period)`
    #[default]
    Random,
    /// Reproducible offset from a seed
    Seeded { seed: u32 },
    /// Exact offset, clamped into `[0, period)`
    Fixed { offset: Ticks },
}

/// Settings for a single timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub period: Ticks,
    #[serde(default)]
    pub phase: PhaseConfig,
}

impl TimerConfig {
    pub fn new(period: Ticks) -> Self {
        Self {
            period,
            phase: PhaseConfig::Random,
        }
    }

    pub fn with_phase(mut self, phase: PhaseConfig) -> Self {
        self.phase = phase;
        self
    }

    /// Constructs the timer these settings describe
    pub fn build(&self) -> PollTimer {
        match self.phase {
            PhaseConfig::Random => PollTimer::with_phase_source(self.period, &mut EntropyPhase),
            PhaseConfig::Seeded { seed } => {
                PollTimer::with_phase_source(self.period, &mut SeededPhase::new(seed))
            }
            PhaseConfig::Fixed { offset } => {
                PollTimer::with_phase_source(self.period, &mut FixedPhase(offset))
            }
        }
    }
}

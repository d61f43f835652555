//! Scheduler configuration

use poll_timer::{PhaseConfig, TimerConfig};
use poll_types::Ticks;
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use services_logger::LogBuffer;

fn default_log_capacity() -> usize {
    LogBuffer::DEFAULT_CAPACITY
}

/// One named timer in a scheduler config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTimerConfig {
    pub name: String,
    pub period: Ticks,
    #[serde(default)]
    pub phase: PhaseConfig,
}

impl NamedTimerConfig {
    pub fn new(name: impl Into<String>, period: Ticks) -> Self {
        Self {
            name: name.into(),
            period,
            phase: PhaseConfig::Random,
        }
    }

    pub fn with_phase(mut self, phase: PhaseConfig) -> Self {
        self.phase = phase;
        self
    }

    pub fn timer_config(&self) -> TimerConfig {
        TimerConfig::new(self.period).with_phase(self.phase)
    }
}

/// Settings for a whole scheduler
///
/// ```json
/// {
///   "log_capacity": 64,
///   "timers": [
///     { "name": "blink", "period": 500 },
///     { "name": "sensor", "period": 100, "phase": { "kind": "seeded", "seed": 7 } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
    #[serde(default)]
    pub timers: Vec<NamedTimerConfig>,
}

impl SchedulerConfig {
    /// Parses a config from JSON
    pub fn from_json(json: &str) -> Result<Self, SchedulerError> {
        serde_json::from_str(json).map_err(|e| SchedulerError::InvalidConfig(e.to_string()))
    }

    /// Serializes the config to JSON
    pub fn to_json(&self) -> Result<String, SchedulerError> {
        serde_json::to_string(self).map_err(|e| SchedulerError::InvalidConfig(e.to_string()))
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            log_capacity: default_log_capacity(),
            timers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = SchedulerConfig::from_json(
            r#"{
                "log_capacity": 64,
                "timers": [
                    { "name": "blink", "period": 500 },
                    { "name": "sensor", "period": 100, "phase": { "kind": "seeded", "seed": 7 } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.log_capacity, 64);
        assert_eq!(config.timers.len(), 2);
        assert_eq!(config.timers[0], NamedTimerConfig::new("blink", Ticks(500)));
        assert_eq!(config.timers[1].phase, PhaseConfig::Seeded { seed: 7 });
    }

    #[test]
    fn test_defaults_applied() {
        let config = SchedulerConfig::from_json("{}").unwrap();
        assert_eq!(config, SchedulerConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let err = SchedulerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_period_rejected() {
        let err = SchedulerConfig::from_json(r#"{"timers": [{"name": "x"}]}"#).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidConfig(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SchedulerConfig {
            log_capacity: 8,
            timers: vec![NamedTimerConfig::new("a", Ticks(1))
                .with_phase(PhaseConfig::Fixed { offset: Ticks(0) })],
        };
        let json = config.to_json().unwrap();
        assert_eq!(SchedulerConfig::from_json(&json).unwrap(), config);
    }
}

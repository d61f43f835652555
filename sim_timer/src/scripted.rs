//! Timer that replays a fixed sequence of readings

use hal::TimerDevice;
use std::collections::VecDeque;

/// Replays a scripted list of tick readings, one per poll
///
/// Once the script runs out the last reading repeats. Unlike
/// [`SimTimerDevice`](crate::SimTimerDevice) the script may repeat values
/// or jump arbitrarily, which is what scenario tests need.
#[derive(Debug, Clone)]
pub struct ScriptedTimerDevice {
    script: VecDeque<u64>,
    last: u64,
}

impl ScriptedTimerDevice {
    /// Creates a device that will return `readings` in order
    pub fn new(readings: impl IntoIterator<Item = u64>) -> Self {
        Self {
            script: readings.into_iter().collect(),
            last: 0,
        }
    }

    /// Number of scripted readings not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl TimerDevice for ScriptedTimerDevice {
    fn poll_ticks(&mut self) -> u64 {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_in_order() {
        let mut device = ScriptedTimerDevice::new([5u64, 5, 9]);
        assert_eq!(device.poll_ticks(), 5);
        assert_eq!(device.poll_ticks(), 5);
        assert_eq!(device.poll_ticks(), 9);
        assert_eq!(device.remaining(), 0);
    }

    #[test]
    fn test_repeats_last_when_exhausted() {
        let mut device = ScriptedTimerDevice::new([3u64]);
        device.poll_ticks();
        assert_eq!(device.poll_ticks(), 3);
        assert_eq!(device.poll_ticks(), 3);
    }

    #[test]
    fn test_empty_script_reads_zero() {
        let mut device = ScriptedTimerDevice::new(Vec::new());
        assert_eq!(device.poll_ticks(), 0);
    }
}

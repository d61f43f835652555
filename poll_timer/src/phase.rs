//! # Phase Sources
//!
//! Where a new timer's initial start point comes from.
//!
//! Timers that share a period and are created together would otherwise all
//! fire on the same frame. A phase source spreads their start points over
//! `[0, period)`.

use poll_types::{new_uuid, Ticks};

/// Produces initial start offsets for new timers
pub trait PhaseSource {
    /// Returns a value in `[0, period)`, or zero when `period` is zero
    fn phase(&mut self, period: Ticks) -> Ticks;
}

/// Reduces raw random bits into `[0, period)`
fn reduce(bits: u32, period: Ticks) -> Ticks {
    match period.get() {
        0 => Ticks::zero(),
        p => Ticks(bits % p),
    }
}

/// Uniform offsets from the platform's UUID entropy
///
/// On hosted targets this is OS randomness. On bare metal the UUID helper
/// falls back to a counter, so offsets are distinct but predictable; use
/// [`SeededPhase`] with a hardware-derived seed there.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyPhase;

impl PhaseSource for EntropyPhase {
    fn phase(&mut self, period: Ticks) -> Ticks {
        let bytes = new_uuid().into_bytes();
        let bits = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        reduce(bits, period)
    }
}

/// Deterministic xorshift32 offsets
#[derive(Debug, Clone)]
pub struct SeededPhase {
    state: u32,
}

impl SeededPhase {
    /// xorshift32 has an all-zero fixed point; seed 0 is mapped here
    const ZERO_SEED_REPLACEMENT: u32 = 0x9E37_79B9;

    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 {
            Self::ZERO_SEED_REPLACEMENT
        } else {
            seed
        };
        Self { state }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl PhaseSource for SeededPhase {
    fn phase(&mut self, period: Ticks) -> Ticks {
        let bits = self.next_u32();
        reduce(bits, period)
    }
}

/// Always the same offset, clamped into `[0, period)`
#[derive(Debug, Clone, Copy)]
pub struct FixedPhase(pub Ticks);

impl PhaseSource for FixedPhase {
    fn phase(&mut self, period: Ticks) -> Ticks {
        if period.is_zero() {
            Ticks::zero()
        } else {
            self.0.min(Ticks(period.get() - 1))
        }
    }
}

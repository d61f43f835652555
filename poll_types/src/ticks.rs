//! Fixed-width tick counts with modular arithmetic

use core::fmt;
use serde::{Deserialize, Serialize};

/// A tick count or tick duration
///
/// Ticks are 32 bits wide, the width of a typical microcontroller
/// millisecond counter, and wrap at `u32::MAX`. The same type is used both
/// for points on the clock and for durations between them: a duration is
/// the wrapping difference of two points.
///
/// Ordering compares raw values. That is meaningful for durations, but not
/// for two clock points on either side of a wrap.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ticks(pub u32);

impl Ticks {
    /// The largest representable tick value
    pub const MAX: Ticks = Ticks(u32::MAX);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Modular subtraction
    ///
    /// `now.wrapping_sub(earlier)` is the true number of ticks between the
    /// two points, even if the counter wrapped in between, as long as less
    /// than one full counter range has passed.
    pub const fn wrapping_sub(self, other: Self) -> Self {
        Self(self.0.wrapping_sub(other.0))
    }

    pub const fn wrapping_add(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }

    /// Truncates a wide monotonic counter reading to tick width
    ///
    /// Dropping the high bits is the same as letting a 32-bit counter wrap.
    pub const fn from_wide(value: u64) -> Self {
        Self(value as u32)
    }
}

impl From<u32> for Ticks {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Ticks> for u32 {
    fn from(ticks: Ticks) -> Self {
        ticks.0
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ticks", self.0)
    }
}

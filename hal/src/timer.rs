//! # Timer Device
//!
//! Hardware abstraction for a monotonic tick counter.
//!
//! This trait provides access to a monotonic tick counter. It does NOT:
//! - Provide wall-clock time
//! - Block or sleep (polling only)
//! - Configure interrupts or hardware timers
//!
//! ## Design Principles
//!
//! 1. **Monotonic**: Ticks never go backwards
//! 2. **Non-blocking**: Always returns immediately
//! 3. **Frequency-agnostic**: No assumptions about tick rate at this layer
//!
//! A typical implementation wraps a millisecond counter such as the one
//! kept by a SysTick handler.

/// Hardware timer device trait
///
/// Readings are `u64` so that wide hardware counters can be passed through
/// unchanged. Consumers that work with narrower ticks truncate, which is
/// the same as the counter wrapping.
///
/// # Examples
///
/// ```
/// use hal::TimerDevice;
///
/// struct Millis(u64);
///
/// impl TimerDevice for Millis {
///     fn poll_ticks(&mut self) -> u64 {
///         self.0
///     }
/// }
///
/// fn frame_delta<T: TimerDevice>(timer: &mut T, last: u64) -> u64 {
///     timer.poll_ticks().wrapping_sub(last)
/// }
///
/// let mut millis = Millis(1500);
/// assert_eq!(frame_delta(&mut millis, 1000), 500);
/// ```
pub trait TimerDevice {
    /// Returns the current tick count
    ///
    /// This value is monotonic and non-blocking. The tick frequency is
    /// implementation-defined.
    fn poll_ticks(&mut self) -> u64;
}

impl<T: TimerDevice + ?Sized> TimerDevice for &mut T {
    fn poll_ticks(&mut self) -> u64 {
        (**self).poll_ticks()
    }
}

//! # Simulated Timer Devices
//!
//! Deterministic [`hal::TimerDevice`] implementations for testing.
//!
//! ## Philosophy
//!
//! **Determinism enables thorough testing.**
//!
//! Real tick sources advance on their own. These only advance when a test
//! tells them to, so every polling decision is reproducible.
//!
//! - [`SimTimerDevice`]: advances by explicit deltas
//! - [`ScriptedTimerDevice`]: replays a fixed list of readings

pub mod scripted;
pub mod timer;

pub use scripted::ScriptedTimerDevice;
pub use timer::SimTimerDevice;

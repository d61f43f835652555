#![no_std]

//! # Poll Types
//!
//! Fundamental value types shared by every polling crate.
//!
//! ## Philosophy
//!
//! - **Fixed width**: Tick counts have a fixed width and wrap, like the
//!   hardware counters they are sampled from.
//! - **No signed time**: Durations are differences of unsigned ticks.
//!
//! ## Key Types
//!
//! - [`Ticks`]: A tick count or tick duration with modular arithmetic
//! - [`TimerId`]: Unique identifier for a registered timer

pub mod ids;
pub mod ticks;
pub mod uuid_tools;

pub use ids::TimerId;
pub use ticks::Ticks;
pub use uuid_tools::new_uuid;

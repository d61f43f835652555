#![no_std]

//! # Hardware Abstraction Layer (HAL)
//!
//! This crate defines the hardware seam the polling crates sit on.
//!
//! ## Philosophy
//!
//! **The tick source belongs to the host.**
//!
//! Polling code never reads a hardware counter itself. The application
//! supplies a [`TimerDevice`] (or a plain tick value) once per frame, and
//! everything downstream is pure arithmetic over that reading.

pub mod timer;

pub use timer::TimerDevice;

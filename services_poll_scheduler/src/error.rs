//! Scheduler error types

use poll_types::TimerId;
use thiserror::Error;

/// Errors returned by [`PollScheduler`](crate::PollScheduler) operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    /// No timer with this id is registered
    #[error("Timer not found: {0}")]
    TimerNotFound(TimerId),

    /// A timer with this name is already registered
    #[error("Timer name already registered: {0}")]
    DuplicateName(String),

    /// Configuration could not be parsed
    #[error("Invalid scheduler config: {0}")]
    InvalidConfig(String),
}

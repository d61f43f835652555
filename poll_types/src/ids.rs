//! Unique identifiers for polling entities

use core::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::uuid_tools::new_uuid;

/// Unique identifier for a timer registered with a scheduler
///
/// Timers themselves are plain values and carry no identity. An id is
/// handed out when a timer is registered with something that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(Uuid);

impl TimerId {
    /// Creates a new unique timer ID
    pub fn new() -> Self {
        Self(new_uuid())
    }

    /// Creates a timer ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TimerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

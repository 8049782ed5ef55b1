//! Typed identifier newtypes backed by UUIDs.

use std::fmt;

/// Handle returned when a status listener is registered; used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(uuid::Uuid);

impl Default for ListenerId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl ListenerId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

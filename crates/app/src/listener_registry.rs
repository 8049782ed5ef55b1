//! In-process registry of status listeners.

use std::fmt;

use catpoint_domain::error::CatpointError;
use catpoint_domain::id::ListenerId;
use catpoint_domain::status::AlarmStatus;

use crate::ports::StatusListener;

/// Ordered collection of registered [`StatusListener`]s.
///
/// Callbacks run synchronously in registration order. The first listener
/// error aborts the fan-out and is returned to the caller.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<(ListenerId, Box<dyn StatusListener>)>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return the handle needed to remove it.
    pub fn add(&mut self, listener: Box<dyn StatusListener>) -> ListenerId {
        let id = ListenerId::new();
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` when `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Fan out an alarm-status change.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a listener.
    pub fn notify(&mut self, status: AlarmStatus) -> Result<(), CatpointError> {
        self.listeners
            .iter_mut()
            .try_for_each(|(_, listener)| listener.notify(status))
    }

    /// Fan out a cat-detection result.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a listener.
    pub fn cat_detected(&mut self, detected: bool) -> Result<(), CatpointError> {
        self.listeners
            .iter_mut()
            .try_for_each(|(_, listener)| listener.cat_detected(detected))
    }

    /// Fan out a sensor change.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a listener.
    pub fn sensor_status_changed(&mut self) -> Result<(), CatpointError> {
        self.listeners
            .iter_mut()
            .try_for_each(|(_, listener)| listener.sensor_status_changed())
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.listeners.iter().map(|(id, _)| id))
            .finish()
    }
}

//! Status listeners used by the simulator: a log sink and a transcript.

use std::cell::RefCell;
use std::rc::Rc;

use catpoint_app::ports::StatusListener;
use catpoint_domain::error::CatpointError;
use catpoint_domain::status::AlarmStatus;
use catpoint_domain::time::{Timestamp, now};
use serde::Serialize;

/// Emits a log line for every callback.
#[derive(Debug, Default)]
pub struct LoggingStatusListener;

impl StatusListener for LoggingStatusListener {
    fn notify(&mut self, status: AlarmStatus) -> Result<(), CatpointError> {
        if status == AlarmStatus::Alarm {
            tracing::warn!(alarm_status = %status, "{}", status.description());
        } else {
            tracing::info!(alarm_status = %status, "{}", status.description());
        }
        Ok(())
    }

    fn cat_detected(&mut self, detected: bool) -> Result<(), CatpointError> {
        if detected {
            tracing::info!("DANGER - CAT DETECTED");
        } else {
            tracing::info!("cat check: no cats");
        }
        Ok(())
    }

    fn sensor_status_changed(&mut self) -> Result<(), CatpointError> {
        tracing::debug!("sensor panel refresh");
        Ok(())
    }
}

/// What a listener was told.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TranscriptEvent {
    AlarmStatus { status: AlarmStatus },
    CatDetected { detected: bool },
    SensorsChanged,
}

/// A timestamped callback.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    pub at: Timestamp,
    #[serde(flatten)]
    pub event: TranscriptEvent,
}

/// Shared, append-only record of listener callbacks.
///
/// Clones share the same buffer, so one clone can be registered with the
/// service while another is kept to read the result.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    entries: Rc<RefCell<Vec<TranscriptEntry>>>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every entry recorded so far.
    #[must_use]
    pub fn entries(&self) -> Vec<TranscriptEntry> {
        self.entries.borrow().clone()
    }

    fn record(&self, event: TranscriptEvent) {
        self.entries
            .borrow_mut()
            .push(TranscriptEntry { at: now(), event });
    }
}

impl StatusListener for Transcript {
    fn notify(&mut self, status: AlarmStatus) -> Result<(), CatpointError> {
        self.record(TranscriptEvent::AlarmStatus { status });
        Ok(())
    }

    fn cat_detected(&mut self, detected: bool) -> Result<(), CatpointError> {
        self.record(TranscriptEvent::CatDetected { detected });
        Ok(())
    }

    fn sensor_status_changed(&mut self) -> Result<(), CatpointError> {
        self.record(TranscriptEvent::SensorsChanged);
        Ok(())
    }
}

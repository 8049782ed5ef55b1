//! End-of-run summary printed as JSON.

use catpoint_app::ports::{ImageClassifier, SecurityRepository};
use catpoint_app::services::security_service::SecurityService;
use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};
use serde::Serialize;

use crate::listener::{Transcript, TranscriptEntry};

/// Final state of the simulation plus everything the listeners saw.
#[derive(Debug, Serialize)]
pub struct Report {
    pub arming_status: ArmingStatus,
    pub alarm_status: AlarmStatus,
    pub last_cat_detected: bool,
    pub sensors: Vec<Sensor>,
    pub transcript: Vec<TranscriptEntry>,
}

impl Report {
    /// Snapshot the service and the transcript.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn capture<R, C>(
        service: &SecurityService<R, C>,
        transcript: &Transcript,
    ) -> Result<Self, CatpointError>
    where
        R: SecurityRepository,
        C: ImageClassifier,
    {
        Ok(Self {
            arming_status: service.arming_status()?,
            alarm_status: service.alarm_status()?,
            last_cat_detected: service.last_cat_detected(),
            sensors: service.sensors()?.into_iter().collect(),
            transcript: transcript.entries(),
        })
    }
}

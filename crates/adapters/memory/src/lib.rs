//! # catpoint-adapter-memory
//!
//! Volatile implementation of the [`SecurityRepository`] port. State lives
//! for the lifetime of the process: the simulator and the tests use it in
//! place of a persisted store.
//!
//! ## Dependency rule
//!
//! Depends on `catpoint-app` (port traits) and `catpoint-domain` only.

use std::collections::BTreeSet;

use catpoint_app::ports::SecurityRepository;
use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

/// In-memory security state. Starts disarmed, with no alarm and no sensors.
#[derive(Debug, Default, Clone)]
pub struct InMemorySecurityRepository {
    alarm_status: AlarmStatus,
    arming_status: ArmingStatus,
    sensors: BTreeSet<Sensor>,
}

impl InMemorySecurityRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with an initial sensor set.
    #[must_use]
    pub fn with_sensors(sensors: impl IntoIterator<Item = Sensor>) -> Self {
        Self {
            sensors: sensors.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl SecurityRepository for InMemorySecurityRepository {
    fn alarm_status(&self) -> Result<AlarmStatus, CatpointError> {
        Ok(self.alarm_status)
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<(), CatpointError> {
        self.alarm_status = status;
        Ok(())
    }

    fn arming_status(&self) -> Result<ArmingStatus, CatpointError> {
        Ok(self.arming_status)
    }

    fn set_arming_status(&mut self, status: ArmingStatus) -> Result<(), CatpointError> {
        self.arming_status = status;
        Ok(())
    }

    fn sensors(&self) -> Result<BTreeSet<Sensor>, CatpointError> {
        Ok(self.sensors.clone())
    }

    fn add_sensor(&mut self, sensor: Sensor) -> Result<(), CatpointError> {
        self.sensors.insert(sensor);
        Ok(())
    }

    fn remove_sensor(&mut self, sensor: &Sensor) -> Result<(), CatpointError> {
        self.sensors.remove(sensor);
        Ok(())
    }

    fn update_sensor(&mut self, sensor: &Sensor) -> Result<(), CatpointError> {
        // Sets compare on (name, type) only, so `replace` swaps in the new flag.
        if self.sensors.contains(sensor) {
            self.sensors.replace(sensor.clone());
        }
        Ok(())
    }
}

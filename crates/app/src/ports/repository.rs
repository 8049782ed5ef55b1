//! Storage port: the persisted security state.

use std::collections::BTreeSet;

use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

/// Holds the current alarm status, arming status, and tracked sensors.
///
/// Only the security service should call the setters; the alarm status in
/// particular must never be written from anywhere else.
pub trait SecurityRepository {
    fn alarm_status(&self) -> Result<AlarmStatus, CatpointError>;

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<(), CatpointError>;

    fn arming_status(&self) -> Result<ArmingStatus, CatpointError>;

    fn set_arming_status(&mut self, status: ArmingStatus) -> Result<(), CatpointError>;

    /// Snapshot of every tracked sensor.
    fn sensors(&self) -> Result<BTreeSet<Sensor>, CatpointError>;

    /// Start tracking a sensor. Adding a sensor that is already tracked
    /// leaves the stored one untouched.
    fn add_sensor(&mut self, sensor: Sensor) -> Result<(), CatpointError>;

    /// Stop tracking a sensor. Unknown sensors are ignored.
    fn remove_sensor(&mut self, sensor: &Sensor) -> Result<(), CatpointError>;

    /// Persist the `active` flag of a tracked sensor.
    fn update_sensor(&mut self, sensor: &Sensor) -> Result<(), CatpointError>;
}

impl<T: SecurityRepository + ?Sized> SecurityRepository for &mut T {
    fn alarm_status(&self) -> Result<AlarmStatus, CatpointError> {
        (**self).alarm_status()
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<(), CatpointError> {
        (**self).set_alarm_status(status)
    }

    fn arming_status(&self) -> Result<ArmingStatus, CatpointError> {
        (**self).arming_status()
    }

    fn set_arming_status(&mut self, status: ArmingStatus) -> Result<(), CatpointError> {
        (**self).set_arming_status(status)
    }

    fn sensors(&self) -> Result<BTreeSet<Sensor>, CatpointError> {
        (**self).sensors()
    }

    fn add_sensor(&mut self, sensor: Sensor) -> Result<(), CatpointError> {
        (**self).add_sensor(sensor)
    }

    fn remove_sensor(&mut self, sensor: &Sensor) -> Result<(), CatpointError> {
        (**self).remove_sensor(sensor)
    }

    fn update_sensor(&mut self, sensor: &Sensor) -> Result<(), CatpointError> {
        (**self).update_sensor(sensor)
    }
}

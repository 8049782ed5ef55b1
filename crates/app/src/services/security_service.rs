//! Security service: the alarm state machine.
//!
//! Alarm status is derived from three inputs: the arming status chosen by
//! the user, sensor activations, and the result of the latest cat check.
//!
//! | Input | Condition | Alarm status |
//! |-------|-----------|--------------|
//! | sensor activated | armed, no alarm | pending |
//! | sensor activated | armed, pending | alarm |
//! | active sensor deactivated | pending | no alarm |
//! | active sensor deactivated | alarm (even disarmed) | pending |
//! | cat seen | armed home | alarm |
//! | no cat | every sensor inactive | no alarm |
//! | disarm | any | no alarm |
//! | arm home | last image had a cat | alarm |
//!
//! Every other combination leaves the alarm status untouched.

use std::collections::BTreeSet;

use catpoint_domain::error::CatpointError;
use catpoint_domain::id::ListenerId;
use catpoint_domain::image::CameraImage;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

use crate::config::SecurityServiceConfig;
use crate::listener_registry::ListenerRegistry;
use crate::ports::{ImageClassifier, SecurityRepository, StatusListener};

/// Single authority for alarm-status transitions.
pub struct SecurityService<R, C> {
    repo: R,
    classifier: C,
    listeners: ListenerRegistry,
    config: SecurityServiceConfig,
    last_cat_detected: bool,
}

impl<R, C> SecurityService<R, C>
where
    R: SecurityRepository,
    C: ImageClassifier,
{
    /// Create a service with the default configuration.
    pub fn new(repo: R, classifier: C) -> Self {
        Self {
            repo,
            classifier,
            listeners: ListenerRegistry::new(),
            config: SecurityServiceConfig::default(),
            last_cat_detected: false,
        }
    }

    /// Create a service with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] if the configuration is invalid.
    pub fn with_config(
        repo: R,
        classifier: C,
        config: SecurityServiceConfig,
    ) -> Result<Self, CatpointError> {
        config.validate()?;
        let mut service = Self::new(repo, classifier);
        service.config = config;
        Ok(service)
    }

    /// Change the arming status.
    ///
    /// Disarming clears the alarm. Arming (either mode) resets every sensor
    /// to inactive without running the deactivation rules. Arming home while
    /// the last classified image showed a cat raises the alarm immediately.
    ///
    /// # Errors
    ///
    /// Propagates repository and listener errors.
    #[tracing::instrument(skip(self))]
    pub fn set_arming_status(&mut self, status: ArmingStatus) -> Result<(), CatpointError> {
        match status {
            ArmingStatus::Disarmed => self.set_alarm_status(AlarmStatus::NoAlarm)?,
            ArmingStatus::ArmedHome | ArmingStatus::ArmedAway => {
                self.reset_sensors()?;
                if status == ArmingStatus::ArmedHome && self.last_cat_detected {
                    self.set_alarm_status(AlarmStatus::Alarm)?;
                }
            }
        }
        self.repo.set_arming_status(status)?;
        tracing::info!(arming_status = %status, "arming status changed");
        Ok(())
    }

    /// Apply a sensor state change requested by the user or a detector.
    ///
    /// The caller's `sensor` is updated in place and persisted. Whether the
    /// sensor was active before comes from the tracked copy, so a handle that
    /// went stale across an arming reset cannot de-escalate the alarm.
    ///
    /// # Errors
    ///
    /// Propagates repository and listener errors.
    #[tracing::instrument(skip(self, sensor), fields(sensor_name = %sensor.name))]
    pub fn change_sensor_activation_status(
        &mut self,
        sensor: &mut Sensor,
        active: bool,
    ) -> Result<(), CatpointError> {
        let alarm = self.repo.alarm_status()?;
        let was_active = self
            .repo
            .sensors()?
            .get(&*sensor)
            .map_or(sensor.active, |tracked| tracked.active);
        if active {
            if self.repo.arming_status()?.is_armed() {
                self.handle_sensor_activated(alarm)?;
            }
        } else if was_active {
            self.handle_sensor_deactivated(alarm)?;
        }

        sensor.active = active;
        self.repo.update_sensor(sensor)?;
        self.listeners.sensor_status_changed()
    }

    /// Run the classifier on a camera frame and react to the result.
    ///
    /// Returns whether a cat was detected. The result is remembered so that
    /// a later switch to armed-home can raise the alarm without a new image.
    ///
    /// # Errors
    ///
    /// Propagates classifier, repository and listener errors.
    #[tracing::instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn process_image(&mut self, image: &CameraImage) -> Result<bool, CatpointError> {
        let detected = self
            .classifier
            .contains_cat(image, self.config.confidence_threshold)?;
        self.last_cat_detected = detected;
        tracing::info!(cat_detected = detected, "image processed");

        if detected {
            if self.repo.arming_status()? == ArmingStatus::ArmedHome {
                self.set_alarm_status(AlarmStatus::Alarm)?;
            }
        } else if self.all_sensors_inactive()? {
            self.set_alarm_status(AlarmStatus::NoAlarm)?;
        }

        self.listeners.cat_detected(detected)?;
        Ok(detected)
    }

    /// Track a new sensor.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] if the sensor name is empty, or
    /// propagates repository and listener errors.
    #[tracing::instrument(skip(self, sensor), fields(sensor_name = %sensor.name))]
    pub fn add_sensor(&mut self, sensor: Sensor) -> Result<(), CatpointError> {
        sensor.validate()?;
        self.repo.add_sensor(sensor)?;
        self.listeners.sensor_status_changed()
    }

    /// Stop tracking a sensor.
    ///
    /// # Errors
    ///
    /// Propagates repository and listener errors.
    #[tracing::instrument(skip(self, sensor), fields(sensor_name = %sensor.name))]
    pub fn remove_sensor(&mut self, sensor: &Sensor) -> Result<(), CatpointError> {
        self.repo.remove_sensor(sensor)?;
        self.listeners.sensor_status_changed()
    }

    /// Register a listener; keep the returned id to remove it later.
    pub fn add_status_listener(&mut self, listener: Box<dyn StatusListener>) -> ListenerId {
        let id = self.listeners.add(listener);
        tracing::debug!(
            listener_id = %id,
            listeners = self.listeners.len(),
            "status listener added"
        );
        id
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_status_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(id);
        tracing::debug!(
            listener_id = %id,
            removed,
            listeners = self.listeners.len(),
            "status listener removed"
        );
        removed
    }

    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn alarm_status(&self) -> Result<AlarmStatus, CatpointError> {
        self.repo.alarm_status()
    }

    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn arming_status(&self) -> Result<ArmingStatus, CatpointError> {
        self.repo.arming_status()
    }

    /// Every tracked sensor, ordered by name then type.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn sensors(&self) -> Result<BTreeSet<Sensor>, CatpointError> {
        self.repo.sensors()
    }

    /// Result of the most recent [`process_image`](Self::process_image) call.
    #[must_use]
    pub fn last_cat_detected(&self) -> bool {
        self.last_cat_detected
    }

    #[must_use]
    pub fn confidence_threshold(&self) -> f32 {
        self.config.confidence_threshold
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repo
    }

    #[must_use]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    fn handle_sensor_activated(&mut self, alarm: AlarmStatus) -> Result<(), CatpointError> {
        match alarm {
            AlarmStatus::NoAlarm => self.set_alarm_status(AlarmStatus::PendingAlarm),
            AlarmStatus::PendingAlarm => self.set_alarm_status(AlarmStatus::Alarm),
            AlarmStatus::Alarm => Ok(()),
        }
    }

    fn handle_sensor_deactivated(&mut self, alarm: AlarmStatus) -> Result<(), CatpointError> {
        match alarm {
            AlarmStatus::PendingAlarm => self.set_alarm_status(AlarmStatus::NoAlarm),
            AlarmStatus::Alarm => self.set_alarm_status(AlarmStatus::PendingAlarm),
            AlarmStatus::NoAlarm => Ok(()),
        }
    }

    fn reset_sensors(&mut self) -> Result<(), CatpointError> {
        let sensors = self.repo.sensors()?;
        for mut sensor in sensors {
            sensor.active = false;
            self.repo.update_sensor(&sensor)?;
        }
        tracing::debug!("all sensors reset to inactive");
        self.listeners.sensor_status_changed()
    }

    fn all_sensors_inactive(&self) -> Result<bool, CatpointError> {
        Ok(self.repo.sensors()?.iter().all(|sensor| !sensor.active))
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<(), CatpointError> {
        self.repo.set_alarm_status(status)?;
        if status == AlarmStatus::Alarm {
            tracing::warn!(alarm_status = %status, "alarm raised");
        } else {
            tracing::debug!(alarm_status = %status, "alarm status written");
        }
        self.listeners.notify(status)
    }
}

//! Property tests for the alarm state machine.
//!
//! Each property drives a fresh `SecurityService` from an arbitrary starting
//! arming status, alarm status and sensor set, then checks the resulting
//! alarm-status writes.

use std::collections::BTreeSet;

use catpoint_app::ports::{ImageClassifier, SecurityRepository};
use catpoint_app::services::security_service::SecurityService;
use catpoint_domain::error::CatpointError;
use catpoint_domain::image::CameraImage;
use catpoint_domain::sensor::{Sensor, SensorType};
use catpoint_domain::status::{AlarmStatus, ArmingStatus};
use proptest::prelude::*;

// ── Fakes ─────────────────────────────────────────────────────────

#[derive(Default)]
struct Repo {
    alarm: AlarmStatus,
    arming: ArmingStatus,
    sensors: BTreeSet<Sensor>,
    alarm_writes: Vec<AlarmStatus>,
}

impl SecurityRepository for Repo {
    fn alarm_status(&self) -> Result<AlarmStatus, CatpointError> {
        Ok(self.alarm)
    }

    fn set_alarm_status(&mut self, status: AlarmStatus) -> Result<(), CatpointError> {
        self.alarm = status;
        self.alarm_writes.push(status);
        Ok(())
    }

    fn arming_status(&self) -> Result<ArmingStatus, CatpointError> {
        Ok(self.arming)
    }

    fn set_arming_status(&mut self, status: ArmingStatus) -> Result<(), CatpointError> {
        self.arming = status;
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
        self.sensors.replace(sensor.clone());
        Ok(())
    }
}

struct Fixed(bool);

impl ImageClassifier for Fixed {
    fn contains_cat(&self, _image: &CameraImage, _threshold: f32) -> Result<bool, CatpointError> {
        Ok(self.0)
    }
}

// ── Strategies ────────────────────────────────────────────────────

fn arming() -> impl Strategy<Value = ArmingStatus> {
    prop::sample::select(ArmingStatus::ALL.to_vec())
}

fn armed() -> impl Strategy<Value = ArmingStatus> {
    prop::sample::select(vec![ArmingStatus::ArmedHome, ArmingStatus::ArmedAway])
}

fn alarm() -> impl Strategy<Value = AlarmStatus> {
    prop::sample::select(AlarmStatus::ALL.to_vec())
}

fn sensor_type() -> impl Strategy<Value = SensorType> {
    prop::sample::select(vec![SensorType::Door, SensorType::Window, SensorType::Motion])
}

fn sensor() -> impl Strategy<Value = Sensor> {
    ("[a-z]{1,8}", sensor_type(), any::<bool>()).prop_map(|(name, kind, active)| {
        let mut sensor = Sensor::new(name, kind);
        sensor.active = active;
        sensor
    })
}

fn sensors() -> impl Strategy<Value = Vec<Sensor>> {
    prop::collection::vec(sensor(), 0..8)
}

fn service(
    arming: ArmingStatus,
    alarm: AlarmStatus,
    sensors: Vec<Sensor>,
    cat: bool,
) -> SecurityService<Repo, Fixed> {
    let repo = Repo {
        alarm,
        arming,
        sensors: sensors.into_iter().collect(),
        alarm_writes: Vec::new(),
    };
    SecurityService::new(repo, Fixed(cat))
}

fn frame() -> CameraImage {
    CameraImage::filled(2, 2, 0).unwrap()
}

// ── Properties ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn activation_while_armed_escalates_one_step(
        arming in armed(),
        alarm in alarm(),
        mut sensor in sensor(),
    ) {
        let mut svc = service(arming, alarm, vec![sensor.clone()], false);

        svc.change_sensor_activation_status(&mut sensor, true).unwrap();

        let expected: &[AlarmStatus] = match alarm {
            AlarmStatus::NoAlarm => &[AlarmStatus::PendingAlarm],
            AlarmStatus::PendingAlarm => &[AlarmStatus::Alarm],
            AlarmStatus::Alarm => &[],
        };
        prop_assert_eq!(svc.repository().alarm_writes.as_slice(), expected);
        prop_assert!(sensor.active);
    }

    #[test]
    fn activation_while_disarmed_never_changes_alarm(
        alarm in alarm(),
        mut sensor in sensor(),
    ) {
        let mut svc = service(ArmingStatus::Disarmed, alarm, vec![sensor.clone()], false);

        svc.change_sensor_activation_status(&mut sensor, true).unwrap();

        prop_assert!(svc.repository().alarm_writes.is_empty());
        prop_assert_eq!(svc.alarm_status().unwrap(), alarm);
    }

    #[test]
    fn deactivating_inactive_sensor_never_changes_alarm(
        arming in arming(),
        alarm in alarm(),
        name in "[a-z]{1,8}",
        kind in sensor_type(),
    ) {
        let mut sensor = Sensor::new(name, kind);
        let mut svc = service(arming, alarm, vec![sensor.clone()], false);

        svc.change_sensor_activation_status(&mut sensor, false).unwrap();

        prop_assert!(svc.repository().alarm_writes.is_empty());
    }

    #[test]
    fn deactivating_active_sensor_de_escalates_one_step(
        arming in arming(),
        alarm in alarm(),
        name in "[a-z]{1,8}",
        kind in sensor_type(),
    ) {
        let mut sensor = Sensor::new(name, kind);
        sensor.active = true;
        let mut svc = service(arming, alarm, vec![sensor.clone()], false);

        svc.change_sensor_activation_status(&mut sensor, false).unwrap();

        let expected: &[AlarmStatus] = match alarm {
            AlarmStatus::NoAlarm => &[],
            AlarmStatus::PendingAlarm => &[AlarmStatus::NoAlarm],
            AlarmStatus::Alarm => &[AlarmStatus::PendingAlarm],
        };
        prop_assert_eq!(svc.repository().alarm_writes.as_slice(), expected);
        prop_assert!(!sensor.active);
    }

    #[test]
    fn stale_handle_after_arming_reset_never_changes_alarm(
        to in armed(),
        alarm in alarm(),
        name in "[a-z]{1,8}",
        kind in sensor_type(),
    ) {
        let mut stale = Sensor::new(name, kind);
        stale.active = true;
        let mut svc = service(ArmingStatus::Disarmed, alarm, vec![stale.clone()], false);
        svc.set_arming_status(to).unwrap();
        let before = svc.alarm_status().unwrap();

        svc.change_sensor_activation_status(&mut stale, false).unwrap();

        prop_assert_eq!(svc.alarm_status().unwrap(), before);
        prop_assert!(svc.repository().alarm_writes.is_empty());
    }

    #[test]
    fn disarming_always_clears_alarm(
        arming in arming(),
        alarm in alarm(),
        sensors in sensors(),
    ) {
        let mut svc = service(arming, alarm, sensors, false);

        svc.set_arming_status(ArmingStatus::Disarmed).unwrap();

        prop_assert_eq!(svc.alarm_status().unwrap(), AlarmStatus::NoAlarm);
        prop_assert_eq!(svc.arming_status().unwrap(), ArmingStatus::Disarmed);
    }

    #[test]
    fn arming_deactivates_every_sensor_without_touching_alarm(
        from in arming(),
        to in armed(),
        alarm in alarm(),
        sensors in sensors(),
    ) {
        let count = sensors.iter().collect::<BTreeSet<_>>().len();
        let mut svc = service(from, alarm, sensors, false);

        svc.set_arming_status(to).unwrap();

        let after = svc.sensors().unwrap();
        prop_assert_eq!(after.len(), count);
        prop_assert!(after.iter().all(|s| !s.active));
        prop_assert!(svc.repository().alarm_writes.is_empty());
    }

    #[test]
    fn cat_while_armed_home_always_raises_alarm(
        alarm in alarm(),
        sensors in sensors(),
    ) {
        let mut svc = service(ArmingStatus::ArmedHome, alarm, sensors, true);

        prop_assert!(svc.process_image(&frame()).unwrap());

        prop_assert_eq!(svc.repository().alarm_writes.as_slice(), &[AlarmStatus::Alarm]);
    }

    #[test]
    fn no_cat_clears_alarm_only_when_all_sensors_inactive(
        arming in arming(),
        alarm in alarm(),
        sensors in sensors(),
    ) {
        let any_active = sensors.iter().collect::<BTreeSet<_>>().iter().any(|s| s.active);
        let mut svc = service(arming, alarm, sensors, false);

        prop_assert!(!svc.process_image(&frame()).unwrap());

        if any_active {
            prop_assert!(svc.repository().alarm_writes.is_empty());
        } else {
            prop_assert_eq!(svc.repository().alarm_writes.as_slice(), &[AlarmStatus::NoAlarm]);
        }
    }

    #[test]
    fn arming_home_after_cat_raises_alarm(
        from in arming(),
        alarm in alarm(),
        sensors in sensors(),
    ) {
        let mut svc = service(from, alarm, sensors, true);
        svc.process_image(&frame()).unwrap();

        svc.set_arming_status(ArmingStatus::ArmedHome).unwrap();

        prop_assert_eq!(svc.alarm_status().unwrap(), AlarmStatus::Alarm);
    }
}

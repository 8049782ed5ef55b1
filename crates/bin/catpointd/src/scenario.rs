//! Scenario replay: a scripted sequence of user and camera actions.
//!
//! A scenario file is a list of `[[steps]]`, each tagged by `action`:
//!
//! ```toml
//! [[steps]]
//! action = "arm"
//! status = "armed_home"
//!
//! [[steps]]
//! action = "sensor"
//! name = "Front door"
//! active = true
//!
//! [[steps]]
//! action = "image"
//! fill = 220
//! ```

use std::path::Path;

use catpoint_app::ports::{ImageClassifier, SecurityRepository};
use catpoint_app::services::security_service::SecurityService;
use catpoint_domain::error::CatpointError;
use catpoint_domain::image::CameraImage;
use catpoint_domain::sensor::{Sensor, SensorType};
use catpoint_domain::status::ArmingStatus;
use serde::Deserialize;

const DEFAULT_FRAME_SIDE: u32 = 8;

/// Ordered list of steps to replay against the security service.
#[derive(Debug, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A single simulated action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Arm {
        status: ArmingStatus,
    },
    Sensor {
        name: String,
        active: bool,
    },
    Image {
        #[serde(default = "default_frame_side")]
        width: u32,
        #[serde(default = "default_frame_side")]
        height: u32,
        fill: u8,
    },
    AddSensor {
        name: String,
        #[serde(rename = "type")]
        sensor_type: SensorType,
    },
    RemoveSensor {
        name: String,
    },
}

fn default_frame_side() -> u32 {
    DEFAULT_FRAME_SIDE
}

impl Scenario {
    /// Read a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] if the file cannot be read or
    /// [`ScenarioError::Parse`] if it is not a valid scenario.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Parse`] on malformed input.
    pub fn parse(content: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(content)?)
    }

    /// Built-in walkthrough used when no scenario file is configured.
    ///
    /// Arms away, trips two sensors into a full alarm, disarms, then shows a
    /// cat to the camera and arms home.
    #[must_use]
    pub fn demo() -> Self {
        let sensor = |name: &str, active| Step::Sensor {
            name: name.to_string(),
            active,
        };
        let image = |fill| Step::Image {
            width: DEFAULT_FRAME_SIDE,
            height: DEFAULT_FRAME_SIDE,
            fill,
        };
        Self {
            steps: vec![
                Step::Arm {
                    status: ArmingStatus::ArmedAway,
                },
                sensor("Front door", true),
                sensor("Hallway", true),
                sensor("Front door", false),
                Step::Arm {
                    status: ArmingStatus::Disarmed,
                },
                image(230),
                Step::Arm {
                    status: ArmingStatus::ArmedHome,
                },
                image(10),
            ],
        }
    }

    /// Replay every step in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::UnknownSensor`] when a step names a sensor
    /// that is not tracked, or propagates service errors.
    pub fn run<R, C>(&self, service: &mut SecurityService<R, C>) -> Result<(), ScenarioError>
    where
        R: SecurityRepository,
        C: ImageClassifier,
    {
        for (index, step) in self.steps.iter().enumerate() {
            tracing::debug!(step = index, ?step, "replaying step");
            step.apply(service)?;
        }
        Ok(())
    }
}

impl Step {
    fn apply<R, C>(&self, service: &mut SecurityService<R, C>) -> Result<(), ScenarioError>
    where
        R: SecurityRepository,
        C: ImageClassifier,
    {
        match self {
            Self::Arm { status } => {
                tracing::info!(arming_status = %status, "panel: {}", status.description());
                service.set_arming_status(*status)?;
            }
            Self::Sensor { name, active } => {
                let mut sensor = find_sensor(service, name)?;
                service.change_sensor_activation_status(&mut sensor, *active)?;
            }
            Self::Image {
                width,
                height,
                fill,
            } => {
                let image = CameraImage::filled(*width, *height, *fill)?;
                service.process_image(&image)?;
            }
            Self::AddSensor { name, sensor_type } => {
                service.add_sensor(Sensor::new(name.clone(), *sensor_type))?;
            }
            Self::RemoveSensor { name } => {
                let sensor = find_sensor(service, name)?;
                service.remove_sensor(&sensor)?;
            }
        }
        Ok(())
    }
}

fn find_sensor<R, C>(
    service: &SecurityService<R, C>,
    name: &str,
) -> Result<Sensor, ScenarioError>
where
    R: SecurityRepository,
    C: ImageClassifier,
{
    service
        .sensors()?
        .into_iter()
        .find(|sensor| sensor.name == name)
        .ok_or_else(|| ScenarioError::UnknownSensor(name.to_string()))
}

/// Scenario loading and replay errors.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// TOML parse failure.
    #[error("failed to parse scenario")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read scenario file")]
    Io(#[from] std::io::Error),
    /// A step referenced a sensor that is not tracked.
    #[error("unknown sensor: {0}")]
    UnknownSensor(String),
    /// The security service rejected a step.
    #[error("security service error")]
    Service(#[from] CatpointError),
}

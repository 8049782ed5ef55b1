//! Sensor: a named door, window, or motion detector with a binary state.
//!
//! A sensor's identity is its `(name, sensor_type)` pair. The `active` flag
//! is mutable state and deliberately takes no part in equality, hashing or
//! ordering, so a sensor keeps its place in a set while it toggles.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{CatpointError, ValidationError};

/// Kind of physical detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorType {
    Door,
    Window,
    Motion,
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Door => f.write_str("door"),
            Self::Window => f.write_str("window"),
            Self::Motion => f.write_str("motion"),
        }
    }
}

/// A binary detector tracked by the security system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sensor {
    pub name: String,
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    #[serde(default)]
    pub active: bool,
}

impl Sensor {
    /// Create an inactive sensor.
    #[must_use]
    pub fn new(name: impl Into<String>, sensor_type: SensorType) -> Self {
        Self {
            name: name.into(),
            sensor_type,
            active: false,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] when `name` is empty or blank.
    pub fn validate(&self) -> Result<(), CatpointError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptySensorName.into());
        }
        Ok(())
    }
}

impl PartialEq for Sensor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.sensor_type == other.sensor_type
    }
}

impl Eq for Sensor {}

impl Hash for Sensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.sensor_type.hash(state);
    }
}

impl PartialOrd for Sensor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sensor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then(self.sensor_type.cmp(&other.sensor_type))
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.active { "active" } else { "inactive" };
        write!(f, "{} ({}, {state})", self.name, self.sensor_type)
    }
}

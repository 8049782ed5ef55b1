//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `catpoint.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use catpoint_app::config::SecurityServiceConfig;
use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::{Sensor, SensorType};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Security service tunables.
    pub service: SecurityServiceConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Scenario to replay.
    pub scenario: ScenarioConfig,
    /// Sensors tracked when the simulation starts.
    pub sensors: Vec<Sensor>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Scenario selection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Path to a scenario TOML file. The built-in demo runs when unset.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `catpoint.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if an
    /// override cannot be parsed, or if the resulting configuration is
    /// invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("catpoint.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("CATPOINT_CONFIDENCE_THRESHOLD") {
            self.service.confidence_threshold = val.trim().parse().map_err(|_| {
                ConfigError::Validation(format!(
                    "CATPOINT_CONFIDENCE_THRESHOLD is not a number: {val:?}"
                ))
            })?;
        }
        if let Some(val) = var("CATPOINT_SCENARIO") {
            self.scenario.path = Some(PathBuf::from(val));
        }
        if let Some(val) = var("CATPOINT_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.service.validate()?;
        let mut seen = BTreeSet::new();
        for sensor in &self.sensors {
            sensor.validate()?;
            if !seen.insert(sensor) {
                return Err(ConfigError::Validation(format!(
                    "duplicate sensor {} ({})",
                    sensor.name, sensor.sensor_type
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: SecurityServiceConfig::default(),
            logging: LoggingConfig::default(),
            scenario: ScenarioConfig::default(),
            sensors: vec![
                Sensor::new("Front door", SensorType::Door),
                Sensor::new("Living room window", SensorType::Window),
                Sensor::new("Hallway", SensorType::Motion),
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "catpointd=info,catpoint_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// A value rejected by the domain.
    #[error("invalid configuration")]
    Domain(#[from] CatpointError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

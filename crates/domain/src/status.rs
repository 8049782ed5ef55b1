//! Arming and alarm statuses.
//!
//! [`ArmingStatus`] is chosen by the user. [`AlarmStatus`] is derived by the
//! security service from sensor activity and cat detection; nothing else
//! should write it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether the system is disarmed or armed, and in which mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmingStatus {
    #[default]
    Disarmed,
    ArmedHome,
    ArmedAway,
}

impl ArmingStatus {
    /// Every variant, in display order.
    pub const ALL: [Self; 3] = [Self::Disarmed, Self::ArmedHome, Self::ArmedAway];

    /// Whether sensor activity should escalate the alarm.
    #[must_use]
    pub fn is_armed(self) -> bool {
        !matches!(self, Self::Disarmed)
    }

    /// Human-readable label for control panels.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Disarmed => "Disarmed",
            Self::ArmedHome => "Armed - At Home",
            Self::ArmedAway => "Armed - Away",
        }
    }
}

impl fmt::Display for ArmingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disarmed => f.write_str("disarmed"),
            Self::ArmedHome => f.write_str("armed_home"),
            Self::ArmedAway => f.write_str("armed_away"),
        }
    }
}

/// Escalation level of the alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmStatus {
    #[default]
    NoAlarm,
    PendingAlarm,
    Alarm,
}

impl AlarmStatus {
    /// Every variant, from calm to sounding.
    pub const ALL: [Self; 3] = [Self::NoAlarm, Self::PendingAlarm, Self::Alarm];

    /// Human-readable label for status displays.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::NoAlarm => "Cool and Good",
            Self::PendingAlarm => "I'm in Danger...",
            Self::Alarm => "Awooga!",
        }
    }
}

impl fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAlarm => f.write_str("no_alarm"),
            Self::PendingAlarm => f.write_str("pending_alarm"),
            Self::Alarm => f.write_str("alarm"),
        }
    }
}

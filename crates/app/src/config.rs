//! Security service configuration.

use serde::{Deserialize, Serialize};

use catpoint_domain::error::{CatpointError, ValidationError};

/// Confidence (percent) the classifier must reach before a cat counts as seen.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// Tunables owned by the security service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityServiceConfig {
    /// Minimum classifier confidence, in percent (`0.0..=100.0`).
    pub confidence_threshold: f32,
}

impl Default for SecurityServiceConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

impl SecurityServiceConfig {
    /// Check that the threshold is a finite percentage.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] when the threshold is NaN,
    /// infinite, or outside `0.0..=100.0`.
    pub fn validate(&self) -> Result<(), CatpointError> {
        let threshold = self.confidence_threshold;
        if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
            return Err(ValidationError::ConfidenceThreshold(threshold).into());
        }
        Ok(())
    }
}

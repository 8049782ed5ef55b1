//! # catpoint-adapter-virtual
//!
//! Virtual/demo image classifier used by the simulator in place of a real
//! vision model.
//!
//! ## Behaviour
//!
//! | Input | Confidence | Result |
//! |-------|------------|--------|
//! | any frame | mean brightness scaled to `0..=100` | cat when confidence >= threshold |
//!
//! A bright frame stands for "something furry in view", a dark one for an
//! empty room. This keeps scenarios deterministic and scriptable.
//!
//! ## Dependency rule
//!
//! Depends on `catpoint-app` (port traits) and `catpoint-domain` only.

use catpoint_app::ports::ImageClassifier;
use catpoint_domain::error::CatpointError;
use catpoint_domain::image::CameraImage;

/// Simulated cat detector driven by frame brightness.
#[derive(Debug, Default, Clone, Copy)]
pub struct VirtualCatDetector;

impl VirtualCatDetector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Confidence, in percent, that `image` shows a cat.
    #[must_use]
    pub fn confidence(image: &CameraImage) -> f32 {
        image.mean_brightness() / 255.0 * 100.0
    }
}

impl ImageClassifier for VirtualCatDetector {
    fn contains_cat(
        &self,
        image: &CameraImage,
        confidence_threshold: f32,
    ) -> Result<bool, CatpointError> {
        let confidence = Self::confidence(image);
        tracing::debug!(confidence, confidence_threshold, "virtual cat detector");
        Ok(confidence >= confidence_threshold)
    }
}

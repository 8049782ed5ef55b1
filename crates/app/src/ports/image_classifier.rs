//! Image classifier port: black-box cat detection.

use catpoint_domain::error::CatpointError;
use catpoint_domain::image::CameraImage;

/// Decides whether a camera frame shows a cat.
pub trait ImageClassifier {
    /// Return `true` when a cat is detected with at least
    /// `confidence_threshold` percent confidence (`0.0..=100.0`).
    fn contains_cat(
        &self,
        image: &CameraImage,
        confidence_threshold: f32,
    ) -> Result<bool, CatpointError>;
}

impl<T: ImageClassifier + ?Sized> ImageClassifier for &T {
    fn contains_cat(
        &self,
        image: &CameraImage,
        confidence_threshold: f32,
    ) -> Result<bool, CatpointError> {
        (**self).contains_cat(image, confidence_threshold)
    }
}

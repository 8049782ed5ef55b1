//! Camera image handed to the image classifier.

use serde::{Deserialize, Serialize};

use crate::error::{CatpointError, ValidationError};

/// An 8-bit grayscale frame, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl CameraImage {
    /// Wrap raw pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] when the frame has no pixels or
    /// when `pixels.len()` does not equal `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CatpointError> {
        let expected = pixel_count(width, height);
        if expected == 0 {
            return Err(ValidationError::EmptyImage.into());
        }
        if pixels.len() != expected {
            return Err(ValidationError::ImageSizeMismatch {
                expected,
                actual: pixels.len(),
            }
            .into());
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A frame where every pixel has the same value.
    ///
    /// # Errors
    ///
    /// Returns [`CatpointError::Validation`] when either dimension is zero.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self, CatpointError> {
        Self::new(width, height, vec![value; pixel_count(width, height)])
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Average pixel value in `0.0..=255.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn mean_brightness(&self) -> f32 {
        let sum: u64 = self.pixels.iter().map(|&p| u64::from(p)).sum();
        (sum as f64 / self.pixels.len() as f64) as f32
    }
}

fn pixel_count(width: u32, height: u32) -> usize {
    (width as usize).saturating_mul(height as usize)
}

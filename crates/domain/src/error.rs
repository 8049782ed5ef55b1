//! Common error types used across the workspace.
//!
//! Each layer converts its own failures into [`CatpointError`]. Adapter
//! errors are boxed so the domain never depends on adapter crates.

use std::error::Error as StdError;

/// Boxed error coming from an adapter (storage, classifier, listener).
pub type BoxedError = Box<dyn StdError + Send + Sync>;

/// Top-level error returned by ports and services.
#[derive(Debug, thiserror::Error)]
pub enum CatpointError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("storage error")]
    Storage(#[source] BoxedError),

    #[error("image classifier error")]
    Classifier(#[source] BoxedError),

    #[error("status listener error")]
    Listener(#[source] BoxedError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("sensor name must not be empty")]
    EmptySensorName,

    #[error("image must contain at least one pixel")]
    EmptyImage,

    #[error("image has {actual} pixels, expected {expected}")]
    ImageSizeMismatch { expected: usize, actual: usize },

    #[error("confidence threshold {0} must be within 0..=100")]
    ConfidenceThreshold(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_with_question_mark() {
        fn fails() -> Result<(), CatpointError> {
            let checked: Result<(), ValidationError> = Err(ValidationError::EmptySensorName);
            checked?;
            Ok(())
        }
        assert!(matches!(
            fails(),
            Err(CatpointError::Validation(ValidationError::EmptySensorName))
        ));
    }

    #[test]
    fn should_expose_boxed_source_for_storage_errors() {
        let io = std::io::Error::other("disk full");
        let err = CatpointError::Storage(Box::new(io));
        let source = StdError::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk full");
    }

    #[test]
    fn should_describe_size_mismatch() {
        let err = ValidationError::ImageSizeMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "image has 3 pixels, expected 4");
    }
}

// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the annotation library.

use std::fmt;

/// Result type alias for annotation operations.
pub type Result<T> = std::result::Result<T, AnnotateError>;

/// Main error type for the annotation library.
#[derive(Debug)]
pub enum AnnotateError {
    /// Malformed input (wrong buffer length, null pointer, invalid tag value).
    InvalidArgument(String),
    /// Pixel depth or format/depth combination not supported by an operation.
    UnsupportedFormat(String),
    /// Error constructing or mutating an image view.
    ImageError(String),
    /// Error loading the annotation font.
    FontError(String),
}

impl AnnotateError {
    /// Status code reported across the C ABI. Success is 0; errors are negative.
    #[must_use]
    pub const fn status_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => -1,
            Self::UnsupportedFormat(_) => -2,
            Self::ImageError(_) => -3,
            Self::FontError(_) => -4,
        }
    }
}

impl fmt::Display for AnnotateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::UnsupportedFormat(msg) => write!(f, "Unsupported format: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::FontError(msg) => write!(f, "Font error: {msg}"),
        }
    }
}

impl std::error::Error for AnnotateError {}

impl From<image::ImageError> for AnnotateError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnnotateError::InvalidArgument("test".to_string());
        assert_eq!(err.to_string(), "Invalid argument: test");

        let err = AnnotateError::UnsupportedFormat("test".to_string());
        assert_eq!(err.to_string(), "Unsupported format: test");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AnnotateError::InvalidArgument(String::new()).status_code(),
            -1
        );
        assert_eq!(
            AnnotateError::UnsupportedFormat(String::new()).status_code(),
            -2
        );
        assert_eq!(AnnotateError::ImageError(String::new()).status_code(), -3);
        assert_eq!(AnnotateError::FontError(String::new()).status_code(), -4);
    }
}

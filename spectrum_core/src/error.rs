//! Error types for spectrum analysis and artifact export
//!
//! Numerical entry points return [`SpectrumError`] when a precondition on the
//! input array or its parameters fails. Operations that touch the filesystem
//! (image decoding, GIF export) return [`ArtifactError`].

use std::fmt;

/// Result type alias for numerical spectrum operations
pub type SpectrumResult<T> = Result<T, SpectrumError>;

/// Precondition failures raised by the spectral routines
#[derive(Debug, Clone, PartialEq)]
pub enum SpectrumError {
    /// A parameter or input array violates a documented constraint
    InvalidInput {
        parameter: String,
        value: String,
        constraint: String,
    },

    /// Two arrays that must agree in shape do not
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
        context: String,
    },
}

impl fmt::Display for SpectrumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectrumError::InvalidInput {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid input '{}' = '{}': must satisfy {}",
                    parameter, value, constraint
                )
            }
            SpectrumError::ShapeMismatch {
                expected,
                got,
                context,
            } => {
                write!(
                    f,
                    "Shape mismatch in {}: expected {}x{}, got {}x{}",
                    context, expected.0, expected.1, got.0, got.1
                )
            }
        }
    }
}

impl std::error::Error for SpectrumError {}

impl SpectrumError {
    /// Create an invalid input error
    pub fn invalid_input(
        parameter: impl Into<String>,
        value: impl ToString,
        constraint: impl Into<String>,
    ) -> Self {
        SpectrumError::InvalidInput {
            parameter: parameter.into(),
            value: value.to_string(),
            constraint: constraint.into(),
        }
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(
        expected: (usize, usize),
        got: (usize, usize),
        context: impl Into<String>,
    ) -> Self {
        SpectrumError::ShapeMismatch {
            expected,
            got,
            context: context.into(),
        }
    }

    /// Error for an array that must have at least one row and one column.
    pub(crate) fn empty_array(parameter: &str, shape: (usize, usize)) -> Self {
        Self::invalid_input(
            parameter,
            format!("{}x{}", shape.0, shape.1),
            "a non-empty 2-D array",
        )
    }
}

/// Errors from operations that read or write files.
#[derive(Debug)]
pub enum ArtifactError {
    /// Underlying I/O failure
    Io(std::io::Error),
    /// Image decoding or encoding failure
    Image(image::ImageError),
    /// The drawing backend failed while rendering a frame
    Render(String),
    /// The numerical stage rejected its input
    Spectrum(SpectrumError),
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::Io(err) => write!(f, "I/O error: {err}"),
            ArtifactError::Image(err) => write!(f, "Image codec error: {err}"),
            ArtifactError::Render(msg) => write!(f, "Failed to render frame: {msg}"),
            ArtifactError::Spectrum(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArtifactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArtifactError::Io(err) => Some(err),
            ArtifactError::Image(err) => Some(err),
            ArtifactError::Render(_) => None,
            ArtifactError::Spectrum(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ArtifactError {
    fn from(err: std::io::Error) -> Self {
        ArtifactError::Io(err)
    }
}

impl From<image::ImageError> for ArtifactError {
    fn from(err: image::ImageError) -> Self {
        ArtifactError::Image(err)
    }
}

impl From<SpectrumError> for ArtifactError {
    fn from(err: SpectrumError) -> Self {
        ArtifactError::Spectrum(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = SpectrumError::invalid_input("window_size", 12, "an odd positive integer");
        let msg = err.to_string();
        assert!(msg.contains("window_size"));
        assert!(msg.contains("12"));
        assert!(msg.contains("odd positive"));
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = SpectrumError::shape_mismatch((4, 4), (4, 8), "mask");
        let msg = err.to_string();
        assert!(msg.contains("4x4"));
        assert!(msg.contains("4x8"));
        assert!(msg.contains("mask"));
    }

    #[test]
    fn test_empty_array_reports_shape() {
        let err = SpectrumError::empty_array("spectrum", (0, 3));
        assert!(err.to_string().contains("0x3"));
    }

    #[test]
    fn test_error_equality() {
        let a = SpectrumError::invalid_input("radius", -1, "non-negative");
        let b = SpectrumError::invalid_input("radius", -1, "non-negative");
        let c = SpectrumError::invalid_input("radius", -2, "non-negative");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_artifact_error_wraps_spectrum_error() {
        let err: ArtifactError = SpectrumError::invalid_input("fps", 0, "fps > 0").into();
        assert!(matches!(err, ArtifactError::Spectrum(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpectrumError>();
        assert_send_sync::<ArtifactError>();
    }
}

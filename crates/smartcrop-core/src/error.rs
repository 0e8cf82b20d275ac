//! Error types for crop analysis.

use thiserror::Error;

/// Errors returned by the crop analysis entry points.
///
/// Only argument validation can fail. Everything that happens after
/// validation (empty sources, impossible geometry, odd face boxes) is
/// handled by policy and never surfaces as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CropError {
    /// Both the requested width and height were zero.
    #[error("Expected a non-zero target width or height")]
    InvalidDimensions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_error_display() {
        assert_eq!(
            CropError::InvalidDimensions.to_string(),
            "Expected a non-zero target width or height"
        );
    }
}

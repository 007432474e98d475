//! Error types for m3d operations.
//!
//! Almost everything in m3d is a pure function that cannot fail. Numeric
//! edge cases that have a natural sentinel (normalizing a zero vector,
//! inverting a singular matrix) return that sentinel instead of an error.
//! The [`Error`] enum covers the remaining cases where no sensible value
//! exists:
//!
//! - Projection builders given a degenerate volume
//! - Axis selectors out of range
//! - Stream transforms over slices of different lengths
//!
//! # Usage
//!
//! ```rust
//! use m3d_core::{Error, Result};
//!
//! fn check_planes(near: f32, far: f32) -> Result<()> {
//!     if near == far {
//!         return Err(Error::degenerate_frustum("near and far planes coincide"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_planes(1.0, 1.0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in m3d operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The planes or angles of a projection do not enclose a volume.
    ///
    /// Returned by the perspective and orthographic builders when, for
    /// example, `near == far`, `left == right`, the aspect ratio is not
    /// positive, or the field of view is outside `(0, pi)`.
    #[error("degenerate frustum: {reason}")]
    DegenerateFrustum {
        /// What made the volume degenerate
        reason: String,
    },

    /// Axis index outside `0..=2`.
    #[error("invalid axis index {index} (expected 0, 1 or 2)")]
    InvalidAxis {
        /// The rejected index
        index: usize,
    },

    /// Input and output slices of a stream operation differ in length.
    #[error("length mismatch: input has {input} elements, output has {output}")]
    LengthMismatch {
        /// Input slice length
        input: usize,
        /// Output slice length
        output: usize,
    },
}

impl Error {
    /// Creates an [`Error::DegenerateFrustum`] error.
    #[inline]
    pub fn degenerate_frustum(reason: impl Into<String>) -> Self {
        Self::DegenerateFrustum {
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidAxis`] error.
    #[inline]
    pub fn invalid_axis(index: usize) -> Self {
        Self::InvalidAxis { index }
    }

    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(input: usize, output: usize) -> Self {
        Self::LengthMismatch { input, output }
    }

    /// Returns `true` if this is a projection error.
    #[inline]
    pub fn is_frustum_error(&self) -> bool {
        matches!(self, Self::DegenerateFrustum { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_frustum() {
        let err = Error::degenerate_frustum("near == far");
        assert!(err.to_string().contains("near == far"));
        assert!(err.is_frustum_error());
    }

    #[test]
    fn test_invalid_axis() {
        let err = Error::invalid_axis(7);
        assert!(err.to_string().contains('7'));
        assert!(!err.is_frustum_error());
    }

    #[test]
    fn test_length_mismatch() {
        let msg = Error::length_mismatch(16, 8).to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains('8'));
    }
}

//! Error types for shape construction and mutation.
//!
//! Queries never fail. Only constructors and setters that would break a
//! shape invariant return a [`ShapeError`], and they leave the shape
//! untouched when they do.

use thiserror::Error;

/// Errors raised when a shape invariant would be violated.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ShapeError {
    /// A size parameter (radius, extent, width, ...) was negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeValue {
        /// Name of the rejected parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An axis vector was not of unit length.
    #[error("axis ({x}, {y}) is not a unit vector")]
    NonUnitVector {
        /// X component of the rejected vector.
        x: f64,
        /// Y component of the rejected vector.
        y: f64,
    },

    /// A path command needs a current point but the path has none.
    #[error("path has no current point: call move_to first")]
    NoCurrentPoint,

    /// Not enough points were provided.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },

    /// An index was outside the collection.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Length of the collection.
        len: usize,
    },

    /// The input geometry cannot produce the requested shape.
    #[error("degenerate geometry: {reason}")]
    Degenerate {
        /// Description of the degeneracy.
        reason: String,
    },
}

impl ShapeError {
    /// Create a negative value error.
    #[must_use]
    pub const fn negative(name: &'static str, value: f64) -> Self {
        Self::NegativeValue { name, value }
    }

    /// Create a non-unit vector error.
    #[must_use]
    pub const fn non_unit(x: f64, y: f64) -> Self {
        Self::NonUnitVector { x, y }
    }

    /// Create an insufficient points error.
    #[must_use]
    pub const fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// Create a degenerate geometry error.
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::Degenerate {
            reason: reason.into(),
        }
    }

    /// Check if this is a negative value error.
    #[must_use]
    pub const fn is_negative_value(&self) -> bool {
        matches!(self, Self::NegativeValue { .. })
    }

    /// Check if this is a non-unit vector error.
    #[must_use]
    pub const fn is_non_unit_vector(&self) -> bool {
        matches!(self, Self::NonUnitVector { .. })
    }

    /// Check if this is a degenerate geometry error.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }
}

/// Reject negative sizes.
pub(crate) fn check_non_negative(name: &'static str, value: f64) -> crate::Result<f64> {
    if value < 0.0 || value.is_nan() {
        Err(ShapeError::negative(name, value))
    } else {
        Ok(value)
    }
}

/// Reject axis vectors that are not of unit length.
///
/// An accepted vector is returned renormalized, so stored axes are exact
/// unit vectors even when the input was only unit within tolerance.
pub(crate) fn check_unit(v: &nalgebra::Vector2<f64>) -> crate::Result<nalgebra::Vector2<f64>> {
    if crate::GeometryParams::default().is_unit_vector(v.x, v.y) {
        Ok(v.normalize())
    } else {
        Err(ShapeError::non_unit(v.x, v.y))
    }
}

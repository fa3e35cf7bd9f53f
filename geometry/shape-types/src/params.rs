//! Numeric tolerances shared by the kernels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default slack used to classify boundary contacts.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Control point offset (as a fraction of the radius) that approximates a
/// quarter circle with one cubic Bézier curve.
pub const CIRCLE_CTRL_FACTOR: f64 = 0.552_284_749_830_793_3;

/// Tolerances for geometric queries.
///
/// Every query in the crate uses [`GeometryParams::default`] unless a
/// `*_with` variant is called with explicit parameters.
///
/// # Example
///
/// ```
/// use shape_types::GeometryParams;
///
/// let params = GeometryParams::default().with_flatness(0.001);
/// assert!(params.flatness < GeometryParams::default().flatness);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometryParams {
    /// Slack for boundary contact in separating-axis and orientation tests.
    pub epsilon: f64,

    /// Accepted deviation of an axis vector's length from 1.
    pub unit_tolerance: f64,

    /// Maximum distance between a flattened curve and the true curve.
    pub flatness: f64,

    /// Maximum recursive subdivisions of a single curve while flattening.
    pub max_subdivision_depth: u32,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            unit_tolerance: 1e-6,
            flatness: 0.01,
            max_subdivision_depth: 10,
        }
    }
}

impl GeometryParams {
    /// Tight tolerances for small-scale geometry.
    #[must_use]
    pub fn precise() -> Self {
        Self {
            epsilon: 1e-12,
            flatness: 1e-4,
            max_subdivision_depth: 16,
            ..Default::default()
        }
    }

    /// Loose tolerances for interactive use where speed matters more than
    /// curve fidelity.
    #[must_use]
    pub fn coarse() -> Self {
        Self {
            epsilon: 1e-8,
            flatness: 0.1,
            max_subdivision_depth: 6,
            ..Default::default()
        }
    }

    /// Set the boundary epsilon.
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the flattening tolerance.
    #[must_use]
    pub const fn with_flatness(mut self, flatness: f64) -> Self {
        self.flatness = flatness;
        self
    }

    /// Set the maximum subdivision depth used when flattening curves.
    #[must_use]
    pub const fn with_max_subdivision_depth(mut self, depth: u32) -> Self {
        self.max_subdivision_depth = depth;
        self
    }

    /// Check whether `(x, y)` is a unit vector within [`Self::unit_tolerance`].
    #[must_use]
    pub fn is_unit_vector(&self, x: f64, y: f64) -> bool {
        (x.hypot(y) - 1.0).abs() <= self.unit_tolerance
    }
}

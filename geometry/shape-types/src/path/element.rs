//! Path elements and winding rules.

use nalgebra::{Affine2, Point2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convention deciding which regions a path encloses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindingRule {
    /// A point is inside when its crossing count is odd.
    EvenOdd,
    /// A point is inside when its signed crossing count is not zero.
    #[default]
    NonZero,
}

impl WindingRule {
    /// Classify a signed crossing count.
    ///
    /// # Example
    ///
    /// ```
    /// use shape_types::WindingRule;
    ///
    /// assert!(WindingRule::NonZero.is_inside(-2));
    /// assert!(!WindingRule::EvenOdd.is_inside(-2));
    /// assert!(WindingRule::EvenOdd.is_inside(3));
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_inside(self, crossings: i32) -> bool {
        match self {
            Self::EvenOdd => crossings & 1 != 0,
            Self::NonZero => crossings != 0,
        }
    }
}

/// Kind of a [`PathElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathElementType {
    /// Start of a subpath.
    MoveTo,
    /// Straight segment.
    LineTo,
    /// Cubic Bézier segment.
    CurveTo,
    /// Segment back to the start of the subpath.
    Close,
}

/// One element of a path, carrying its start point where it has one.
///
/// Quadratic curves are stored as their exact cubic elevation, so there is
/// no quadratic element.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathElement {
    /// Start a new subpath at `to`.
    MoveTo {
        /// Target point.
        to: Point2<f64>,
    },
    /// Straight segment.
    LineTo {
        /// Start point.
        from: Point2<f64>,
        /// End point.
        to: Point2<f64>,
    },
    /// Cubic Bézier segment.
    CurveTo {
        /// Start point.
        from: Point2<f64>,
        /// First control point.
        ctrl1: Point2<f64>,
        /// Second control point.
        ctrl2: Point2<f64>,
        /// End point.
        to: Point2<f64>,
    },
    /// Closing segment from the current point back to the subpath start.
    Close {
        /// Current point before closing.
        from: Point2<f64>,
        /// Start of the subpath.
        to: Point2<f64>,
    },
}

impl PathElement {
    /// The element kind.
    #[must_use]
    pub const fn kind(&self) -> PathElementType {
        match self {
            Self::MoveTo { .. } => PathElementType::MoveTo,
            Self::LineTo { .. } => PathElementType::LineTo,
            Self::CurveTo { .. } => PathElementType::CurveTo,
            Self::Close { .. } => PathElementType::Close,
        }
    }

    /// Start point, if the element is a segment.
    #[must_use]
    pub const fn from_point(&self) -> Option<Point2<f64>> {
        match self {
            Self::MoveTo { .. } => None,
            Self::LineTo { from, .. } | Self::CurveTo { from, .. } | Self::Close { from, .. } => {
                Some(*from)
            }
        }
    }

    /// End point.
    #[must_use]
    pub const fn to_point(&self) -> Point2<f64> {
        match self {
            Self::MoveTo { to }
            | Self::LineTo { to, .. }
            | Self::CurveTo { to, .. }
            | Self::Close { to, .. } => *to,
        }
    }

    /// Whether the element draws something (any element but a move).
    #[must_use]
    pub const fn is_drawable(&self) -> bool {
        !matches!(self, Self::MoveTo { .. })
    }

    /// Every point the element carries, start point first.
    #[must_use]
    pub fn points(&self) -> smallvec::SmallVec<[Point2<f64>; 4]> {
        match *self {
            Self::MoveTo { to } => smallvec::smallvec![to],
            Self::LineTo { from, to } | Self::Close { from, to } => smallvec::smallvec![from, to],
            Self::CurveTo {
                from,
                ctrl1,
                ctrl2,
                to,
            } => smallvec::smallvec![from, ctrl1, ctrl2, to],
        }
    }

    /// Apply `f` to every point of the element.
    #[must_use]
    pub fn map(&self, f: impl Fn(&Point2<f64>) -> Point2<f64>) -> Self {
        match self {
            Self::MoveTo { to } => Self::MoveTo { to: f(to) },
            Self::LineTo { from, to } => Self::LineTo {
                from: f(from),
                to: f(to),
            },
            Self::CurveTo {
                from,
                ctrl1,
                ctrl2,
                to,
            } => Self::CurveTo {
                from: f(from),
                ctrl1: f(ctrl1),
                ctrl2: f(ctrl2),
                to: f(to),
            },
            Self::Close { from, to } => Self::Close {
                from: f(from),
                to: f(to),
            },
        }
    }

    /// The element mapped through an affine transform.
    #[must_use]
    pub fn transformed(&self, transform: &Affine2<f64>) -> Self {
        self.map(|p| transform.transform_point(p))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use nalgebra::{Translation2, Vector2};

    #[test]
    fn test_winding_rules() {
        assert!(!WindingRule::NonZero.is_inside(0));
        assert!(WindingRule::NonZero.is_inside(1));
        assert!(WindingRule::NonZero.is_inside(-2));
        assert!(!WindingRule::EvenOdd.is_inside(0));
        assert!(WindingRule::EvenOdd.is_inside(-1));
        assert!(!WindingRule::EvenOdd.is_inside(2));
        assert_eq!(WindingRule::default(), WindingRule::NonZero);
    }

    #[test]
    fn test_element_accessors() {
        let e = PathElement::CurveTo {
            from: Point2::new(0.0, 0.0),
            ctrl1: Point2::new(1.0, 1.0),
            ctrl2: Point2::new(2.0, 1.0),
            to: Point2::new(3.0, 0.0),
        };
        assert_eq!(e.kind(), PathElementType::CurveTo);
        assert_eq!(e.from_point(), Some(Point2::new(0.0, 0.0)));
        assert_eq!(e.to_point(), Point2::new(3.0, 0.0));
        assert_eq!(e.points().len(), 4);
        assert!(e.is_drawable());

        let m = PathElement::MoveTo {
            to: Point2::new(1.0, 2.0),
        };
        assert_eq!(m.from_point(), None);
        assert!(!m.is_drawable());
    }

    #[test]
    fn test_transformed() {
        let t = nalgebra::convert::<_, Affine2<f64>>(Translation2::from(Vector2::new(1.0, -1.0)));
        let e = PathElement::LineTo {
            from: Point2::new(0.0, 0.0),
            to: Point2::new(2.0, 2.0),
        };
        assert_eq!(
            e.transformed(&t),
            PathElement::LineTo {
                from: Point2::new(1.0, -1.0),
                to: Point2::new(3.0, 1.0),
            }
        );
    }
}

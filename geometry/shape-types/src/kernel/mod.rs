//! Stateless geometric kernels.
//!
//! Every function here works on raw `f64` coordinates (or small
//! stack-allocated vertex slices for convex polygons) so that composite
//! algorithms can call each other without allocating or building shape
//! objects. The shape types in [`crate::shapes`] are thin facades over
//! these kernels.
//!
//! Boundaries are inclusive everywhere: a point on the edge of a shape is
//! contained, and two shapes that touch intersect.

pub mod circle;
pub mod ellipse;
pub mod oriented;
pub mod polygon;
pub mod rectangle;
pub mod round_rectangle;
pub mod segment;
pub mod triangle;

use nalgebra::Point2;

/// 2D cross product (z component of the 3D cross product).
#[inline]
#[must_use]
pub fn cross(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

/// Dot product.
#[inline]
#[must_use]
pub fn dot(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * bx + ay * by
}

/// Squared distance between two points.
#[inline]
#[must_use]
pub fn distance_squared(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}

/// L1 (Manhattan) distance between two points.
#[inline]
#[must_use]
pub fn distance_l1(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).abs() + (y2 - y1).abs()
}

/// L-infinity (Chebyshev) distance between two points.
#[inline]
#[must_use]
pub fn distance_linf(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).abs().max((y2 - y1).abs())
}

/// Pick whichever of `a` and `b` is nearer to `p`; `a` wins ties.
#[inline]
pub(crate) fn nearer(p: &Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> Point2<f64> {
    if nalgebra::distance_squared(p, &b) < nalgebra::distance_squared(p, &a) {
        b
    } else {
        a
    }
}

/// Pick whichever of `a` and `b` is farther from `p`; `a` wins ties.
#[inline]
pub(crate) fn farther(p: &Point2<f64>, a: Point2<f64>, b: Point2<f64>) -> Point2<f64> {
    if nalgebra::distance_squared(p, &b) > nalgebra::distance_squared(p, &a) {
        b
    } else {
        a
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross_and_dot() {
        assert_relative_eq!(cross(1.0, 0.0, 0.0, 1.0), 1.0);
        assert_relative_eq!(cross(0.0, 1.0, 1.0, 0.0), -1.0);
        assert_relative_eq!(dot(1.0, 2.0, 3.0, 4.0), 11.0);
    }

    #[test]
    fn test_metrics() {
        assert_relative_eq!(distance_squared(0.0, 0.0, 3.0, 4.0), 25.0);
        assert_relative_eq!(distance_l1(0.0, 0.0, 3.0, -4.0), 7.0);
        assert_relative_eq!(distance_linf(0.0, 0.0, 3.0, -4.0), 4.0);
    }

    #[test]
    fn test_nearer_farther_tie_keeps_first() {
        let p = Point2::origin();
        let a = Point2::new(1.0, 0.0);
        let b = Point2::new(0.0, 1.0);
        assert_eq!(nearer(&p, a, b), a);
        assert_eq!(farther(&p, a, b), a);
        assert_eq!(nearer(&p, a, Point2::new(0.5, 0.0)), Point2::new(0.5, 0.0));
    }
}

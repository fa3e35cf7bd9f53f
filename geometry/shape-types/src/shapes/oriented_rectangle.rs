//! Rectangle with arbitrary orientation.

use nalgebra::{Affine2, Matrix2, Point2, SymmetricEigen, Vector2};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Rectangle;
use crate::error::{ShapeError, check_non_negative, check_unit};
use crate::kernel::{oriented as ko, polygon};
use crate::params::DEFAULT_EPSILON;
use crate::path::BoxedPathIter;
use crate::path::iter::{PolygonPathIter, boxed};
use crate::shape::ShapeRef;
use crate::traits::Shape2d;

/// A rectangle given by its center, a unit first axis and two half-extents.
///
/// The second axis is always the counter-clockwise perpendicular of the
/// first one. Axes must be unit vectors; a non-unit axis is rejected, not
/// normalized.
///
/// # Example
///
/// ```
/// use shape_types::{OrientedRectangle, Point2, Shape2d, Vector2};
///
/// let r = OrientedRectangle::new(
///     Point2::new(6.0, 9.0),
///     Vector2::new(0.894_427, -0.447_214),
///     14.0,
///     13.0,
/// )
/// .unwrap();
/// assert!(r.contains_point(&Point2::new(0.0, 0.0)));
/// assert!(!r.contains_point(&Point2::new(-20.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientedRectangle {
    center: Point2<f64>,
    axis: Vector2<f64>,
    extent1: f64,
    extent2: f64,
}

impl Default for OrientedRectangle {
    fn default() -> Self {
        Self {
            center: Point2::origin(),
            axis: Vector2::x(),
            extent1: 0.0,
            extent2: 0.0,
        }
    }
}

impl OrientedRectangle {
    /// Create an oriented rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NonUnitVector`] if `axis` is not of unit length
    /// and [`ShapeError::NegativeValue`] for a negative extent.
    pub fn new(
        center: Point2<f64>,
        axis: Vector2<f64>,
        extent1: f64,
        extent2: f64,
    ) -> crate::Result<Self> {
        Ok(Self {
            center,
            axis: check_unit(&axis)?,
            extent1: check_non_negative("extent1", extent1)?,
            extent2: check_non_negative("extent2", extent2)?,
        })
    }

    /// Smallest rectangle aligned with the principal axes of a point cloud.
    ///
    /// The first axis follows the direction of largest variance.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InsufficientPoints`] for an empty slice and
    /// [`ShapeError::Degenerate`] when a coordinate is not finite.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_point_cloud(points: &[Point2<f64>]) -> crate::Result<Self> {
        if points.is_empty() {
            return Err(ShapeError::insufficient_points(1, 0));
        }
        if let Some(index) = points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(ShapeError::degenerate(format!(
                "point {index} of the cloud has a non-finite coordinate"
            )));
        }
        let count = points.len() as f64;
        let centroid = points
            .iter()
            .fold(Vector2::zeros(), |acc, p| acc + p.coords)
            / count;

        let mut covariance = Matrix2::zeros();
        for p in points {
            let d = p.coords - centroid;
            covariance += d * d.transpose();
        }
        covariance /= count;

        let eigen = SymmetricEigen::new(covariance);
        let primary = if eigen.eigenvalues[0] >= eigen.eigenvalues[1] {
            0
        } else {
            1
        };
        let axis = eigen
            .eigenvectors
            .column(primary)
            .into_owned()
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector2::x);
        let second = ko::perpendicular(&axis);

        let mut lo = Vector2::new(f64::INFINITY, f64::INFINITY);
        let mut hi = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in points {
            let d = p.coords - centroid;
            let u = d.dot(&axis);
            let v = d.dot(&second);
            lo = Vector2::new(lo.x.min(u), lo.y.min(v));
            hi = Vector2::new(hi.x.max(u), hi.y.max(v));
        }
        let mid = (lo + hi) * 0.5;
        let center = Point2::from(centroid + axis * mid.x + second * mid.y);
        let extent = (hi - lo) * 0.5;

        debug!(
            points = points.len(),
            extent1 = extent.x,
            extent2 = extent.y,
            "fitted oriented rectangle to point cloud"
        );

        Ok(Self {
            center,
            axis,
            extent1: extent.x,
            extent2: extent.y,
        })
    }

    /// Center.
    #[must_use]
    pub const fn center(&self) -> Point2<f64> {
        self.center
    }

    /// Move the center.
    pub fn set_center(&mut self, center: Point2<f64>) {
        self.center = center;
    }

    /// First axis.
    #[must_use]
    pub const fn first_axis(&self) -> Vector2<f64> {
        self.axis
    }

    /// Second axis: the counter-clockwise perpendicular of the first one.
    #[must_use]
    pub fn second_axis(&self) -> Vector2<f64> {
        ko::perpendicular(&self.axis)
    }

    /// Set the first axis.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NonUnitVector`] if `axis` is not of unit length.
    pub fn set_first_axis(&mut self, axis: Vector2<f64>) -> crate::Result<()> {
        self.axis = check_unit(&axis)?;
        Ok(())
    }

    /// Set the second axis; the first axis becomes its clockwise
    /// perpendicular.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NonUnitVector`] if `axis` is not of unit length.
    pub fn set_second_axis(&mut self, axis: Vector2<f64>) -> crate::Result<()> {
        let v = check_unit(&axis)?;
        self.axis = Vector2::new(v.y, -v.x);
        Ok(())
    }

    /// Half-extent along the first axis.
    #[must_use]
    pub const fn first_extent(&self) -> f64 {
        self.extent1
    }

    /// Half-extent along the second axis.
    #[must_use]
    pub const fn second_extent(&self) -> f64 {
        self.extent2
    }

    /// Set both half-extents.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`] for a negative extent; the
    /// rectangle is left unchanged.
    pub fn set_extents(&mut self, extent1: f64, extent2: f64) -> crate::Result<()> {
        let e1 = check_non_negative("extent1", extent1)?;
        let e2 = check_non_negative("extent2", extent2)?;
        self.extent1 = e1;
        self.extent2 = e2;
        Ok(())
    }

    /// Corners: `c + e1 u + e2 v`, `c - e1 u + e2 v`, `c - e1 u - e2 v`,
    /// `c + e1 u - e2 v`.
    #[must_use]
    pub fn corners(&self) -> [Point2<f64>; 4] {
        ko::corners(
            &self.center,
            &self.axis,
            self.extent1,
            &self.second_axis(),
            self.extent2,
        )
    }

    /// Closest and farthest points to `p`, computed together.
    #[must_use]
    pub fn closest_farthest_points(&self, p: &Point2<f64>) -> (Point2<f64>, Point2<f64>) {
        ko::closest_farthest_points(
            &self.center,
            &self.axis,
            self.extent1,
            self.extent2,
            p.x,
            p.y,
            DEFAULT_EPSILON,
        )
    }
}

impl Shape2d for OrientedRectangle {
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::OrientedRectangle(self)
    }

    fn is_empty(&self) -> bool {
        self.extent1 <= 0.0 || self.extent2 <= 0.0
    }

    fn bounding_box(&self) -> Rectangle {
        Rectangle::from_bounds(polygon::bounds(&self.corners()))
    }

    fn contains_point(&self, p: &Point2<f64>) -> bool {
        ko::contains_oriented_point(
            &self.center,
            &self.axis,
            self.extent1,
            self.extent2,
            p.x,
            p.y,
            DEFAULT_EPSILON,
        )
    }

    fn contains_rectangle(&self, r: &Rectangle) -> bool {
        r.corners().iter().all(|c| self.contains_point(c))
    }

    fn closest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        self.closest_farthest_points(p).0
    }

    fn farthest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        self.closest_farthest_points(p).1
    }

    fn path_iter(&self, transform: Option<&Affine2<f64>>) -> BoxedPathIter<'_> {
        boxed(PolygonPathIter::closed(&self.corners()), transform)
    }

    fn translate(&mut self, v: &Vector2<f64>) {
        self.center += v;
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn sample() -> OrientedRectangle {
        OrientedRectangle::new(
            Point2::new(6.0, 9.0),
            Vector2::new(0.894_427, -0.447_214),
            14.0,
            13.0,
        )
        .unwrap()
    }

    #[test]
    fn test_contains() {
        let r = sample();
        assert!(r.contains_point(&Point2::new(0.0, 0.0)));
        assert!(!r.contains_point(&Point2::new(-20.0, 0.0)));
        for c in r.corners() {
            assert!(r.contains_point(&c));
        }
    }

    #[test]
    fn test_nearly_unit_axis_is_renormalized() {
        let r = sample();
        assert_relative_eq!(r.first_axis().norm(), 1.0, epsilon = 1e-15);
        for c in r.corners() {
            assert!(r.contains_point(&c));
            assert_eq!(r.closest_point_to(&c), c);
            assert_eq!(r.distance(&c), 0.0);
        }

        let mut r = sample();
        r.set_second_axis(Vector2::new(0.600_000_1, 0.8)).unwrap();
        assert_relative_eq!(r.second_axis().norm(), 1.0, epsilon = 1e-15);
        for c in r.corners() {
            assert!(r.contains_point(&c));
        }
    }

    #[test]
    fn test_non_unit_axis_rejected() {
        let err = OrientedRectangle::new(Point2::origin(), Vector2::new(1.0, 1.0), 1.0, 1.0)
            .unwrap_err();
        assert!(err.is_non_unit_vector());
        let mut r = sample();
        assert!(r.set_first_axis(Vector2::new(2.0, 0.0)).is_err());
        assert_eq!(r, sample());
        assert!(r.set_extents(1.0, -1.0).is_err());
        assert_eq!(r, sample());
    }

    #[test]
    fn test_second_axis_drives_first() {
        let mut r = sample();
        r.set_second_axis(Vector2::new(0.0, 1.0)).unwrap();
        assert_eq!(r.first_axis(), Vector2::new(1.0, -0.0));
        assert_eq!(r.second_axis(), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_closest_farthest() {
        let r = OrientedRectangle::new(
            Point2::origin(),
            Vector2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            1.0,
            1.0,
        )
        .unwrap();
        let (near, far) = r.closest_farthest_points(&Point2::new(2.0, 2.0));
        assert_relative_eq!(near.x, FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(far.x, -2.0_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(r.closest_point_to(&Point2::new(0.1, 0.0)), Point2::new(0.1, 0.0));
        // (2, 2) lies 2√2 along the first axis, one extent past the edge.
        assert_relative_eq!(
            r.distance(&Point2::new(2.0, 2.0)),
            2.0 * 2.0_f64.sqrt() - 1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_bounding_box_of_diamond() {
        let r = OrientedRectangle::new(
            Point2::origin(),
            Vector2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            1.0,
            1.0,
        )
        .unwrap();
        let bb = r.bounding_box();
        assert_relative_eq!(bb.max().x, 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(bb.min().y, -(2.0_f64.sqrt()), epsilon = 1e-12);
    }

    #[test]
    fn test_from_point_cloud() {
        // A thin cloud along the diagonal.
        let points: Vec<_> = (0..=10)
            .flat_map(|i| {
                let t = f64::from(i);
                [Point2::new(t + 0.1, t - 0.1), Point2::new(t - 0.1, t + 0.1)]
            })
            .collect();
        let r = OrientedRectangle::from_point_cloud(&points).unwrap();
        assert_relative_eq!(r.first_axis().x.abs(), FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(r.first_axis().y.abs(), FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(r.center().x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(r.center().y, 5.0, epsilon = 1e-9);
        assert_relative_eq!(r.first_extent(), 50.0_f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(r.second_extent(), 0.02_f64.sqrt(), epsilon = 1e-9);
        for p in &points {
            assert!(r.contains_point(p));
        }
        assert!(OrientedRectangle::from_point_cloud(&[]).is_err());
    }

    #[test]
    fn test_point_cloud_rejects_non_finite() {
        let points = [Point2::new(0.0, 0.0), Point2::new(f64::NAN, 1.0), Point2::new(2.0, 2.0)];
        let err = OrientedRectangle::from_point_cloud(&points).unwrap_err();
        assert!(err.is_degenerate());
        assert!(err.to_string().contains("point 1"));

        let points = [Point2::new(f64::INFINITY, 0.0)];
        assert!(OrientedRectangle::from_point_cloud(&points).unwrap_err().is_degenerate());
    }
}

//! Parallelogram given by a center and two unit axes.

use nalgebra::{Affine2, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Rectangle;
use crate::error::{check_non_negative, check_unit};
use crate::kernel::{cross, oriented as ko, polygon};
use crate::params::DEFAULT_EPSILON;
use crate::path::BoxedPathIter;
use crate::path::iter::{PolygonPathIter, boxed};
use crate::shape::ShapeRef;
use crate::traits::Shape2d;

/// A parallelogram: center, two unit axes and a half-extent along each.
///
/// The axes are never collinear. Setting an axis collinear with the other
/// one replaces the other axis by the perpendicular of the new one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parallelogram {
    center: Point2<f64>,
    axis1: Vector2<f64>,
    extent1: f64,
    axis2: Vector2<f64>,
    extent2: f64,
}

impl Default for Parallelogram {
    fn default() -> Self {
        Self {
            center: Point2::origin(),
            axis1: Vector2::x(),
            extent1: 0.0,
            axis2: Vector2::y(),
            extent2: 0.0,
        }
    }
}

fn collinear(u: &Vector2<f64>, v: &Vector2<f64>) -> bool {
    cross(u.x, u.y, v.x, v.y).abs() <= DEFAULT_EPSILON
}

impl Parallelogram {
    /// Create a parallelogram.
    ///
    /// Collinear axes are resolved by replacing the second axis with the
    /// perpendicular of the first.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NonUnitVector`](crate::ShapeError::NonUnitVector)
    /// if an axis is not of unit length and
    /// [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue) for a
    /// negative extent.
    pub fn new(
        center: Point2<f64>,
        axis1: Vector2<f64>,
        extent1: f64,
        axis2: Vector2<f64>,
        extent2: f64,
    ) -> crate::Result<Self> {
        let axis1 = check_unit(&axis1)?;
        let mut axis2 = check_unit(&axis2)?;
        if collinear(&axis1, &axis2) {
            axis2 = ko::perpendicular(&axis1);
        }
        Ok(Self {
            center,
            axis1,
            extent1: check_non_negative("extent1", extent1)?,
            axis2,
            extent2: check_non_negative("extent2", extent2)?,
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
        self.axis1
    }

    /// Second axis.
    #[must_use]
    pub const fn second_axis(&self) -> Vector2<f64> {
        self.axis2
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

    /// Set the first axis.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NonUnitVector`](crate::ShapeError::NonUnitVector)
    /// if `axis` is not of unit length.
    pub fn set_first_axis(&mut self, axis: Vector2<f64>) -> crate::Result<()> {
        let u = check_unit(&axis)?;
        if collinear(&u, &self.axis2) {
            self.axis2 = ko::perpendicular(&u);
        }
        self.axis1 = u;
        Ok(())
    }

    /// Set the second axis.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NonUnitVector`](crate::ShapeError::NonUnitVector)
    /// if `axis` is not of unit length.
    pub fn set_second_axis(&mut self, axis: Vector2<f64>) -> crate::Result<()> {
        let v = check_unit(&axis)?;
        if collinear(&self.axis1, &v) {
            self.axis1 = Vector2::new(v.y, -v.x);
        }
        self.axis2 = v;
        Ok(())
    }

    /// Set both half-extents.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// for a negative extent; the parallelogram is left unchanged.
    pub fn set_extents(&mut self, extent1: f64, extent2: f64) -> crate::Result<()> {
        let e1 = check_non_negative("extent1", extent1)?;
        let e2 = check_non_negative("extent2", extent2)?;
        self.extent1 = e1;
        self.extent2 = e2;
        Ok(())
    }

    /// Corners in boundary order.
    #[must_use]
    pub fn corners(&self) -> [Point2<f64>; 4] {
        ko::corners(
            &self.center,
            &self.axis1,
            self.extent1,
            &self.axis2,
            self.extent2,
        )
    }

    /// Whether the axes are orthogonal.
    #[must_use]
    pub fn is_rectangle(&self) -> bool {
        self.axis1.dot(&self.axis2).abs() <= DEFAULT_EPSILON
    }

    /// Area.
    #[must_use]
    pub fn area(&self) -> f64 {
        4.0 * self.extent1
            * self.extent2
            * cross(self.axis1.x, self.axis1.y, self.axis2.x, self.axis2.y).abs()
    }
}

impl Shape2d for Parallelogram {
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Parallelogram(self)
    }

    fn is_empty(&self) -> bool {
        self.area() <= 0.0
    }

    fn bounding_box(&self) -> Rectangle {
        Rectangle::from_bounds(polygon::bounds(&self.corners()))
    }

    fn contains_point(&self, p: &Point2<f64>) -> bool {
        ko::contains_parallelogram_point(
            &self.center,
            &self.axis1,
            self.extent1,
            &self.axis2,
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
        ko::closest_point_parallelogram_point(
            &self.center,
            &self.axis1,
            self.extent1,
            &self.axis2,
            self.extent2,
            p.x,
            p.y,
            DEFAULT_EPSILON,
        )
    }

    fn farthest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        ko::farthest_point_parallelogram_point(
            &self.center,
            &self.axis1,
            self.extent1,
            &self.axis2,
            self.extent2,
            p.x,
            p.y,
        )
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

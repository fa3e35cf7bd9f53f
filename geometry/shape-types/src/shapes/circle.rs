//! Circle.

use std::f64::consts::PI;

use nalgebra::{Affine2, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Rectangle;
use crate::error::check_non_negative;
use crate::kernel::circle as kc;
use crate::path::BoxedPathIter;
use crate::path::iter::{EllipsePathIter, boxed};
use crate::shape::ShapeRef;
use crate::traits::Shape2d;

/// A closed disk given by its center and radius.
///
/// A zero radius is the empty circle, which contains only its center.
///
/// # Example
///
/// ```
/// use shape_types::{Circle, Point2, Shape2d};
///
/// let a = Circle::new(Point2::new(5.0, 8.0), 5.0).unwrap();
/// let b = Circle::new(Point2::new(10.0, 10.0), 1.0).unwrap();
/// let c = Circle::new(Point2::new(0.0, 0.0), 1.0).unwrap();
/// assert!(a.intersects(&b));
/// assert!(!a.intersects(&c));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    center: Point2<f64>,
    radius: f64,
}

impl Circle {
    /// Create a circle.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// for a negative radius.
    pub fn new(center: Point2<f64>, radius: f64) -> crate::Result<Self> {
        Ok(Self {
            center,
            radius: check_non_negative("radius", radius)?,
        })
    }

    /// Replace center and radius.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// for a negative radius; the circle is left unchanged.
    pub fn set(&mut self, center: Point2<f64>, radius: f64) -> crate::Result<()> {
        *self = Self::new(center, radius)?;
        Ok(())
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

    /// Radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the radius.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// for a negative radius.
    pub fn set_radius(&mut self, radius: f64) -> crate::Result<()> {
        self.radius = check_non_negative("radius", radius)?;
        Ok(())
    }

    /// Area.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Circumference.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Check whether this circle contains the whole other circle.
    #[must_use]
    pub fn contains_circle(&self, other: &Self) -> bool {
        kc::contains_circle_circle(
            self.center.x,
            self.center.y,
            self.radius,
            other.center.x,
            other.center.y,
            other.radius,
        )
    }
}

impl Shape2d for Circle {
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Circle(self)
    }

    fn is_empty(&self) -> bool {
        self.radius <= 0.0
    }

    fn bounding_box(&self) -> Rectangle {
        let r = Vector2::new(self.radius, self.radius);
        Rectangle::from_corners(self.center - r, self.center + r)
    }

    fn contains_point(&self, p: &Point2<f64>) -> bool {
        kc::contains_circle_point(self.center.x, self.center.y, self.radius, p.x, p.y)
    }

    fn contains_rectangle(&self, r: &Rectangle) -> bool {
        let (minx, miny, maxx, maxy) = r.bounds();
        kc::contains_circle_rectangle(
            self.center.x,
            self.center.y,
            self.radius,
            minx,
            miny,
            maxx,
            maxy,
        )
    }

    fn closest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        kc::closest_point_circle_point(self.center.x, self.center.y, self.radius, p.x, p.y)
    }

    fn farthest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        kc::farthest_point_circle_point(self.center.x, self.center.y, self.radius, p.x, p.y)
    }

    fn path_iter(&self, transform: Option<&Affine2<f64>>) -> BoxedPathIter<'_> {
        boxed(
            EllipsePathIter::new(self.center.x, self.center.y, self.radius, self.radius),
            transform,
        )
    }

    fn translate(&mut self, v: &Vector2<f64>) {
        self.center += v;
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

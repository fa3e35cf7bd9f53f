//! Axis-aligned ellipse.

use std::f64::consts::PI;

use nalgebra::{Affine2, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Rectangle;
use crate::error::check_non_negative;
use crate::kernel::ellipse as ke;
use crate::path::BoxedPathIter;
use crate::path::iter::{EllipsePathIter, boxed};
use crate::shape::ShapeRef;
use crate::traits::Shape2d;

/// An axis-aligned ellipse inscribed in a rectangle.
///
/// An ellipse with a zero-width or zero-height frame collapses to the
/// segment joining opposite frame corners and is empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipse {
    frame: Rectangle,
}

impl Ellipse {
    /// Ellipse inscribed in the rectangle spanned by two corners.
    #[must_use]
    pub fn from_corners(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self {
            frame: Rectangle::from_corners(a, b),
        }
    }

    /// Ellipse with the given minimum frame corner and size.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// for a negative width or height.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> crate::Result<Self> {
        Ok(Self {
            frame: Rectangle::from_xywh(x, y, width, height)?,
        })
    }

    /// Ellipse from its center and radii.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// for a negative radius.
    pub fn from_center(center: Point2<f64>, rx: f64, ry: f64) -> crate::Result<Self> {
        let rx = check_non_negative("rx", rx)?;
        let ry = check_non_negative("ry", ry)?;
        let r = Vector2::new(rx, ry);
        Ok(Self::from_corners(center - r, center + r))
    }

    /// The frame rectangle.
    #[must_use]
    pub const fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Replace the frame.
    pub fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
    }

    /// Center.
    #[must_use]
    pub fn center(&self) -> Point2<f64> {
        self.frame.center()
    }

    /// Horizontal and vertical radii.
    #[must_use]
    pub fn radii(&self) -> (f64, f64) {
        (self.frame.width() * 0.5, self.frame.height() * 0.5)
    }

    /// Area.
    #[must_use]
    pub fn area(&self) -> f64 {
        let (a, b) = self.radii();
        PI * a * b
    }

    fn params(&self) -> (f64, f64, f64, f64) {
        let c = self.center();
        let (a, b) = self.radii();
        (c.x, c.y, a, b)
    }
}

impl Shape2d for Ellipse {
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Ellipse(self)
    }

    fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    fn bounding_box(&self) -> Rectangle {
        self.frame
    }

    fn contains_point(&self, p: &Point2<f64>) -> bool {
        let (cx, cy, a, b) = self.params();
        ke::contains_ellipse_point(cx, cy, a, b, p.x, p.y)
    }

    fn contains_rectangle(&self, r: &Rectangle) -> bool {
        let (cx, cy, a, b) = self.params();
        let (minx, miny, maxx, maxy) = r.bounds();
        ke::contains_ellipse_rectangle(cx, cy, a, b, minx, miny, maxx, maxy)
    }

    fn closest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        let (cx, cy, a, b) = self.params();
        ke::closest_point_ellipse_point(cx, cy, a, b, p.x, p.y)
    }

    fn farthest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        let (cx, cy, a, b) = self.params();
        ke::farthest_point_ellipse_point(cx, cy, a, b, p.x, p.y)
    }

    fn path_iter(&self, transform: Option<&Affine2<f64>>) -> BoxedPathIter<'_> {
        let (cx, cy, a, b) = self.params();
        boxed(EllipsePathIter::new(cx, cy, a, b), transform)
    }

    fn translate(&mut self, v: &Vector2<f64>) {
        self.frame.translate(v);
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

    fn sample() -> Ellipse {
        Ellipse::from_center(Point2::new(1.0, 2.0), 4.0, 2.0).unwrap()
    }

    #[test]
    fn test_construction() {
        let e = sample();
        assert_eq!(e.center(), Point2::new(1.0, 2.0));
        assert_eq!(e.radii(), (4.0, 2.0));
        assert_eq!(e.bounding_box().min(), Point2::new(-3.0, 0.0));
        assert_relative_eq!(e.area(), 8.0 * PI);
        assert!(Ellipse::from_center(Point2::origin(), -1.0, 1.0).is_err());
        assert_eq!(
            Ellipse::from_corners(Point2::new(5.0, 4.0), Point2::new(-3.0, 0.0)),
            e
        );
    }

    #[test]
    fn test_contains() {
        let e = sample();
        assert!(e.contains_point(&Point2::new(5.0, 2.0)));
        assert!(e.contains_point(&Point2::new(1.0, 4.0)));
        assert!(!e.contains_point(&Point2::new(4.5, 3.5)));
        let inner = Rectangle::from_xywh(0.0, 1.0, 2.0, 2.0).unwrap();
        assert!(e.contains_rectangle(&inner));
        assert!(!e.contains_rectangle(&e.bounding_box()));
    }

    #[test]
    fn test_closest_and_farthest() {
        let e = sample();
        let c = e.closest_point_to(&Point2::new(10.0, 2.0));
        assert_relative_eq!(c.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(c.y, 2.0, epsilon = 1e-9);
        let inside = Point2::new(2.0, 2.5);
        assert_eq!(e.closest_point_to(&inside), inside);
        let f = e.farthest_point_to(&Point2::new(2.0, 2.0));
        assert_relative_eq!(f.x, -3.0, epsilon = 1e-9);
        assert_relative_eq!(f.y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_empty() {
        let mut e = sample();
        assert!(!e.is_empty());
        e.clear();
        assert!(e.is_empty());
        let flat = Ellipse::from_center(Point2::origin(), 3.0, 0.0).unwrap();
        assert!(flat.is_empty());
        assert!(flat.contains_point(&Point2::new(2.0, 0.0)));
    }
}

//! Axis-aligned rectangle.

use nalgebra::{Affine2, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::check_non_negative;
use crate::kernel::rectangle as kr;
use crate::path::BoxedPathIter;
use crate::path::iter::{PolygonPathIter, boxed};
use crate::shape::ShapeRef;
use crate::traits::Shape2d;

/// An axis-aligned rectangle given by its minimum and maximum corners.
///
/// The corners are kept ordered (`min <= max` on both axes); a rectangle
/// with zero width or height is empty.
///
/// # Example
///
/// ```
/// use shape_types::{Point2, Rectangle, Shape2d};
///
/// let r = Rectangle::from_xywh(5.0, 8.0, 5.0, 10.0).unwrap();
/// assert_eq!(r.max(), Point2::new(10.0, 18.0));
/// assert!((r.distance(&Point2::origin()) - 9.433_981).abs() < 1e-6);
/// assert_eq!(r.distance(&Point2::new(8.0, 18.0)), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rectangle {
    min: Point2<f64>,
    max: Point2<f64>,
}

impl Rectangle {
    /// Rectangle spanned by two opposite corners given in any order.
    #[must_use]
    pub fn from_corners(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Rectangle with the given minimum corner and size.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// if the width or height is negative.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> crate::Result<Self> {
        let width = check_non_negative("width", width)?;
        let height = check_non_negative("height", height)?;
        Ok(Self {
            min: Point2::new(x, y),
            max: Point2::new(x + width, y + height),
        })
    }

    /// Replace both corners (given in any order).
    pub fn set_from_corners(&mut self, a: Point2<f64>, b: Point2<f64>) {
        *self = Self::from_corners(a, b);
    }

    /// Minimum corner.
    #[must_use]
    pub const fn min(&self) -> Point2<f64> {
        self.min
    }

    /// Maximum corner.
    #[must_use]
    pub const fn max(&self) -> Point2<f64> {
        self.max
    }

    /// Width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Set the width, keeping the minimum corner.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// for a negative width.
    pub fn set_width(&mut self, width: f64) -> crate::Result<()> {
        self.max.x = self.min.x + check_non_negative("width", width)?;
        Ok(())
    }

    /// Set the height, keeping the minimum corner.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// for a negative height.
    pub fn set_height(&mut self, height: f64) -> crate::Result<()> {
        self.max.y = self.min.y + check_non_negative("height", height)?;
        Ok(())
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point2<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The four corners, counter-clockwise from the minimum corner.
    #[must_use]
    pub fn corners(&self) -> [Point2<f64>; 4] {
        kr::corners(self.min.x, self.min.y, self.max.x, self.max.y)
    }

    /// Smallest rectangle containing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Common part of both rectangles, if they intersect.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let min = Point2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Point2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        (min.x <= max.x && min.y <= max.y).then_some(Self { min, max })
    }

    /// Grow the rectangle to include `p`.
    pub fn add_point(&mut self, p: &Point2<f64>) {
        self.min = Point2::new(self.min.x.min(p.x), self.min.y.min(p.y));
        self.max = Point2::new(self.max.x.max(p.x), self.max.y.max(p.y));
    }

    /// Bounds as `(minx, miny, maxx, maxy)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.min.x, self.min.y, self.max.x, self.max.y)
    }

    /// Rectangle from `(minx, miny, maxx, maxy)` bounds.
    #[must_use]
    pub fn from_bounds((minx, miny, maxx, maxy): (f64, f64, f64, f64)) -> Self {
        Self::from_corners(Point2::new(minx, miny), Point2::new(maxx, maxy))
    }
}

impl Shape2d for Rectangle {
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Rectangle(self)
    }

    fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    fn bounding_box(&self) -> Rectangle {
        *self
    }

    fn contains_point(&self, p: &Point2<f64>) -> bool {
        kr::contains_rectangle_point(self.min.x, self.min.y, self.max.x, self.max.y, p.x, p.y)
    }

    fn contains_rectangle(&self, r: &Rectangle) -> bool {
        kr::contains_rectangle_rectangle(
            self.min.x, self.min.y, self.max.x, self.max.y, r.min.x, r.min.y, r.max.x, r.max.y,
        )
    }

    fn closest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        kr::closest_point_rectangle_point(self.min.x, self.min.y, self.max.x, self.max.y, p.x, p.y)
    }

    fn farthest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        kr::farthest_point_rectangle_point(self.min.x, self.min.y, self.max.x, self.max.y, p.x, p.y)
    }

    fn path_iter(&self, transform: Option<&Affine2<f64>>) -> BoxedPathIter<'_> {
        boxed(PolygonPathIter::closed(&self.corners()), transform)
    }

    fn translate(&mut self, v: &Vector2<f64>) {
        self.min += v;
        self.max += v;
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

    #[test]
    fn test_from_corners_normalizes() {
        let r = Rectangle::from_corners(Point2::new(10.0, 2.0), Point2::new(0.0, 8.0));
        assert_eq!(r.min(), Point2::new(0.0, 2.0));
        assert_eq!(r.max(), Point2::new(10.0, 8.0));
        assert_relative_eq!(r.width(), 10.0);
        assert_relative_eq!(r.height(), 6.0);
        assert_relative_eq!(r.area(), 60.0);
        assert_eq!(r.bounds(), (0.0, 2.0, 10.0, 8.0));
        assert_eq!(Rectangle::from_bounds(r.bounds()), r);
    }

    #[test]
    fn test_negative_size_rejected() {
        assert!(Rectangle::from_xywh(0.0, 0.0, -1.0, 1.0).is_err());
        let mut r = Rectangle::from_xywh(0.0, 0.0, 1.0, 1.0).unwrap();
        let err = r.set_height(-2.0).unwrap_err();
        assert!(err.is_negative_value());
        assert_relative_eq!(r.height(), 1.0);
    }

    #[test]
    fn test_distances() {
        let r = Rectangle::from_xywh(5.0, 8.0, 5.0, 10.0).unwrap();
        let o = Point2::origin();
        assert_relative_eq!(r.distance(&o), 9.433_981, epsilon = 1e-6);
        assert_relative_eq!(r.distance_squared(&o), 89.0);
        assert_relative_eq!(r.distance_l1(&o), 13.0);
        assert_relative_eq!(r.distance_linf(&o), 8.0);
        assert_eq!(r.distance(&Point2::new(8.0, 18.0)), 0.0);
        assert_eq!(r.farthest_point_to(&o), Point2::new(10.0, 18.0));
    }

    #[test]
    fn test_union_intersection_add_point() {
        let a = Rectangle::from_xywh(0.0, 0.0, 4.0, 4.0).unwrap();
        let b = Rectangle::from_xywh(2.0, 2.0, 4.0, 4.0).unwrap();
        assert_eq!(a.union(&b), Rectangle::from_xywh(0.0, 0.0, 6.0, 6.0).unwrap());
        assert_eq!(a.intersection(&b), Some(Rectangle::from_xywh(2.0, 2.0, 2.0, 2.0).unwrap()));
        let far = Rectangle::from_xywh(10.0, 10.0, 1.0, 1.0).unwrap();
        assert_eq!(a.intersection(&far), None);

        let mut c = a;
        c.add_point(&Point2::new(-1.0, 7.0));
        assert_eq!(c.min(), Point2::new(-1.0, 0.0));
        assert_eq!(c.max(), Point2::new(4.0, 7.0));
    }

    #[test]
    fn test_empty_and_clear() {
        let mut r = Rectangle::from_xywh(1.0, 1.0, 3.0, 0.0).unwrap();
        assert!(r.is_empty());
        r.set_height(2.0).unwrap();
        assert!(!r.is_empty());
        r.clear();
        assert!(r.is_empty());
        assert_eq!(r, Rectangle::default());
    }

    #[test]
    fn test_translate_and_path() {
        let r = Rectangle::from_xywh(0.0, 0.0, 2.0, 1.0).unwrap();
        let t = r.translated(&Vector2::new(1.0, 1.0));
        assert_eq!(t.min(), Point2::new(1.0, 1.0));
        assert_eq!(r.min(), Point2::new(0.0, 0.0));
        assert_eq!(r.path_iter(None).count(), 5);
        assert!(r.contains_rectangle(&Rectangle::from_xywh(0.5, 0.0, 1.0, 1.0).unwrap()));
    }
}

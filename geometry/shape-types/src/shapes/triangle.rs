//! Triangle.

use nalgebra::{Affine2, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Rectangle;
use crate::kernel::polygon;
use crate::kernel::triangle::{self as kt, TriangleFeature};
use crate::params::DEFAULT_EPSILON;
use crate::path::BoxedPathIter;
use crate::path::iter::{PolygonPathIter, boxed};
use crate::shape::ShapeRef;
use crate::traits::Shape2d;

/// A triangle given by three vertices in either orientation.
///
/// # Example
///
/// ```
/// use shape_types::{Point2, Triangle};
///
/// let t = Triangle::new(
///     Point2::new(5.0, 8.0),
///     Point2::new(-10.0, 1.0),
///     Point2::new(-1.0, -2.0),
/// );
/// assert!(t.is_ccw());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    p1: Point2<f64>,
    p2: Point2<f64>,
    p3: Point2<f64>,
}

impl Triangle {
    /// Create a triangle.
    #[must_use]
    pub const fn new(p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>) -> Self {
        Self { p1, p2, p3 }
    }

    /// Replace all vertices.
    pub fn set(&mut self, p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>) {
        *self = Self::new(p1, p2, p3);
    }

    /// First vertex.
    #[must_use]
    pub const fn p1(&self) -> Point2<f64> {
        self.p1
    }

    /// Second vertex.
    #[must_use]
    pub const fn p2(&self) -> Point2<f64> {
        self.p2
    }

    /// Third vertex.
    #[must_use]
    pub const fn p3(&self) -> Point2<f64> {
        self.p3
    }

    /// Move the first vertex.
    pub fn set_p1(&mut self, p: Point2<f64>) {
        self.p1 = p;
    }

    /// Move the second vertex.
    pub fn set_p2(&mut self, p: Point2<f64>) {
        self.p2 = p;
    }

    /// Move the third vertex.
    pub fn set_p3(&mut self, p: Point2<f64>) {
        self.p3 = p;
    }

    /// The vertices in order.
    #[must_use]
    pub const fn points(&self) -> [Point2<f64>; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Whether the vertices turn counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        kt::is_ccw(&self.p1, &self.p2, &self.p3)
    }

    /// Area.
    #[must_use]
    pub fn area(&self) -> f64 {
        kt::area(&self.p1, &self.p2, &self.p3)
    }

    /// Barycentric coordinates of `p`, or `None` for a degenerate triangle.
    #[must_use]
    pub fn barycentric(&self, p: &Point2<f64>) -> Option<(f64, f64, f64)> {
        kt::barycentric(&self.p1, &self.p2, &self.p3, p.x, p.y, DEFAULT_EPSILON)
    }

    /// Closest feature to `p` and the closest point on it.
    #[must_use]
    pub fn closest_feature(&self, p: &Point2<f64>) -> (TriangleFeature, Point2<f64>) {
        kt::closest_feature(&self.p1, &self.p2, &self.p3, p.x, p.y, DEFAULT_EPSILON)
    }
}

impl Shape2d for Triangle {
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Triangle(self)
    }

    fn is_empty(&self) -> bool {
        self.area() <= 0.0
    }

    fn bounding_box(&self) -> Rectangle {
        Rectangle::from_bounds(polygon::bounds(&self.points()))
    }

    fn contains_point(&self, p: &Point2<f64>) -> bool {
        kt::contains_triangle_point(&self.p1, &self.p2, &self.p3, p.x, p.y, DEFAULT_EPSILON)
    }

    fn contains_rectangle(&self, r: &Rectangle) -> bool {
        polygon::contains_convex_polygon_polygon(&self.points(), &r.corners(), DEFAULT_EPSILON)
    }

    fn closest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        kt::closest_point_triangle_point(&self.p1, &self.p2, &self.p3, p.x, p.y, DEFAULT_EPSILON)
    }

    fn farthest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        kt::farthest_point_triangle_point(&self.p1, &self.p2, &self.p3, p.x, p.y)
    }

    fn path_iter(&self, transform: Option<&Affine2<f64>>) -> BoxedPathIter<'_> {
        boxed(PolygonPathIter::closed(&self.points()), transform)
    }

    fn translate(&mut self, v: &Vector2<f64>) {
        self.p1 += v;
        self.p2 += v;
        self.p3 += v;
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

    fn sample() -> Triangle {
        Triangle::new(
            Point2::new(5.0, 8.0),
            Point2::new(-10.0, 1.0),
            Point2::new(-1.0, -2.0),
        )
    }

    #[test]
    fn test_orientation() {
        let t = sample();
        assert!(t.is_ccw());
        let mut r = t;
        r.set_p2(t.p3());
        r.set_p3(t.p2());
        assert!(!r.is_ccw());
        assert_relative_eq!(t.area(), r.area());
    }

    #[test]
    fn test_contains() {
        let t = sample();
        assert!(t.contains_point(&Point2::new(-1.0, 2.0)));
        assert!(t.contains_point(&Point2::new(5.0, 8.0)));
        assert!(!t.contains_point(&Point2::new(5.0, 0.0)));
        assert!(t.contains_rectangle(&Rectangle::from_xywh(-2.0, 1.0, 1.0, 1.0).unwrap()));
        assert!(!t.contains_rectangle(&t.bounding_box()));
    }

    #[test]
    fn test_closest_feature() {
        let t = sample();
        let (f, q) = t.closest_feature(&Point2::new(10.0, 10.0));
        assert_eq!(f, TriangleFeature::FirstCorner);
        assert_eq!(q, Point2::new(5.0, 8.0));
        let (f, _) = t.closest_feature(&Point2::new(-1.0, 2.0));
        assert_eq!(f, TriangleFeature::Inside);
    }

    #[test]
    fn test_bounding_box() {
        let bb = sample().bounding_box();
        assert_eq!(bb.min(), Point2::new(-10.0, -2.0));
        assert_eq!(bb.max(), Point2::new(5.0, 8.0));
    }

    #[test]
    fn test_tiny_triangle_contains_interior() {
        let t = Triangle::new(Point2::origin(), Point2::new(1e-5, 0.0), Point2::new(0.0, 1e-5));
        assert!(!t.is_empty());
        assert!(t.contains_point(&Point2::new(2e-6, 2e-6)));
        assert!(!t.contains_point(&Point2::new(8e-6, 8e-6)));
        assert_eq!(t.closest_feature(&Point2::new(2e-6, 2e-6)).0, TriangleFeature::Inside);
    }

    #[test]
    fn test_degenerate_triangle_is_empty() {
        let t = Triangle::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), Point2::new(2.0, 2.0));
        assert!(t.is_empty());
        assert!(t.barycentric(&Point2::new(1.0, 1.0)).is_none());
        assert_eq!(t.closest_point_to(&Point2::new(1.0, 1.0)), Point2::new(1.0, 1.0));
        assert!(!sample().is_empty());
    }
}

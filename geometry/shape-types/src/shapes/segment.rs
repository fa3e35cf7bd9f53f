//! Line segment.

use nalgebra::{Affine2, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Rectangle;
use crate::kernel::segment as ks;
use crate::params::DEFAULT_EPSILON;
use crate::path::BoxedPathIter;
use crate::path::iter::{PolygonPathIter, boxed};
use crate::shape::ShapeRef;
use crate::traits::Shape2d;

/// A closed segment between two points.
///
/// Containment tolerates [`DEFAULT_EPSILON`] of distance to the segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    p1: Point2<f64>,
    p2: Point2<f64>,
}

impl Segment {
    /// Create a segment.
    #[must_use]
    pub const fn new(p1: Point2<f64>, p2: Point2<f64>) -> Self {
        Self { p1, p2 }
    }

    /// Replace both endpoints.
    pub fn set(&mut self, p1: Point2<f64>, p2: Point2<f64>) {
        self.p1 = p1;
        self.p2 = p2;
    }

    /// First endpoint.
    #[must_use]
    pub const fn p1(&self) -> Point2<f64> {
        self.p1
    }

    /// Second endpoint.
    #[must_use]
    pub const fn p2(&self) -> Point2<f64> {
        self.p2
    }

    /// Length.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.p1, &self.p2)
    }

    /// Single intersection point with another segment, if any.
    ///
    /// Overlapping collinear segments have no single intersection point
    /// unless they only share an endpoint.
    #[must_use]
    pub fn intersection_point(&self, other: &Self) -> Option<Point2<f64>> {
        ks::intersection_point_segment_segment(
            self.p1.x,
            self.p1.y,
            self.p2.x,
            self.p2.y,
            other.p1.x,
            other.p1.y,
            other.p2.x,
            other.p2.y,
            DEFAULT_EPSILON,
        )
    }

    /// Side of the directed line `p1 -> p2` the point lies on: `1` to the
    /// left, `-1` to the right, `0` on the line.
    #[must_use]
    pub fn side_of_point(&self, p: &Point2<f64>) -> i32 {
        ks::side_of_line(
            self.p1.x,
            self.p1.y,
            self.p2.x,
            self.p2.y,
            p.x,
            p.y,
            DEFAULT_EPSILON,
        )
    }

    /// Check whether the infinite line through `a` and `b` touches the segment.
    #[must_use]
    pub fn intersects_line(&self, a: &Point2<f64>, b: &Point2<f64>) -> bool {
        ks::intersects_line_segment(
            a.x,
            a.y,
            b.x,
            b.y,
            self.p1.x,
            self.p1.y,
            self.p2.x,
            self.p2.y,
            DEFAULT_EPSILON,
        )
    }
}

impl Shape2d for Segment {
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Segment(self)
    }

    fn is_empty(&self) -> bool {
        self.p1 == self.p2
    }

    fn bounding_box(&self) -> Rectangle {
        Rectangle::from_corners(self.p1, self.p2)
    }

    fn contains_point(&self, p: &Point2<f64>) -> bool {
        ks::distance_squared_segment_point(self.p1.x, self.p1.y, self.p2.x, self.p2.y, p.x, p.y)
            <= DEFAULT_EPSILON * DEFAULT_EPSILON
    }

    fn contains_rectangle(&self, r: &Rectangle) -> bool {
        r.corners().iter().all(|c| self.contains_point(c))
    }

    fn closest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        if self.contains_point(p) {
            return *p;
        }
        ks::closest_point_segment_point(self.p1.x, self.p1.y, self.p2.x, self.p2.y, p.x, p.y)
    }

    fn farthest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        ks::farthest_point_segment_point(self.p1.x, self.p1.y, self.p2.x, self.p2.y, p.x, p.y)
    }

    fn path_iter(&self, transform: Option<&Affine2<f64>>) -> BoxedPathIter<'_> {
        boxed(PolygonPathIter::open(&[self.p1, self.p2]), transform)
    }

    fn translate(&mut self, v: &Vector2<f64>) {
        self.p1 += v;
        self.p2 += v;
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

    fn diagonal() -> Segment {
        Segment::new(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0))
    }

    #[test]
    fn test_contains_and_closest() {
        let s = diagonal();
        assert!(s.contains_point(&Point2::new(2.0, 2.0)));
        assert!(!s.contains_point(&Point2::new(2.0, 2.1)));
        assert_eq!(s.closest_point_to(&Point2::new(0.0, 4.0)), Point2::new(2.0, 2.0));
        assert_eq!(s.closest_point_to(&Point2::new(-3.0, -1.0)), Point2::new(0.0, 0.0));
        assert_relative_eq!(s.distance(&Point2::new(0.0, 4.0)), 8.0_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(s.farthest_point_to(&Point2::new(-1.0, 0.0)), Point2::new(4.0, 4.0));
    }

    #[test]
    fn test_intersection_point() {
        let s = diagonal();
        let t = Segment::new(Point2::new(0.0, 4.0), Point2::new(4.0, 0.0));
        let p = s.intersection_point(&t).unwrap();
        assert_relative_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
        let apart = Segment::new(Point2::new(5.0, 0.0), Point2::new(6.0, 0.0));
        assert_eq!(s.intersection_point(&apart), None);
    }

    #[test]
    fn test_intersects_line() {
        let s = Segment::new(Point2::new(2.0, 1.0), Point2::new(3.0, 5.0));
        assert!(s.intersects_line(&Point2::new(0.0, 2.0), &Point2::new(1.0, 2.0)));
        assert!(!s.intersects_line(&Point2::new(0.0, 6.0), &Point2::new(1.0, 6.0)));
    }

    #[test]
    fn test_side_of_point() {
        let s = diagonal();
        assert_eq!(s.side_of_point(&Point2::new(0.0, 1.0)), 1);
        assert_eq!(s.side_of_point(&Point2::new(1.0, 0.0)), -1);
        assert_eq!(s.side_of_point(&Point2::new(8.0, 8.0)), 0);
    }

    #[test]
    fn test_degenerate_rectangle_containment() {
        let s = Segment::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        assert!(s.contains_rectangle(&Rectangle::from_xywh(1.0, 0.0, 2.0, 0.0).unwrap()));
        assert!(!s.contains_rectangle(&Rectangle::from_xywh(1.0, 0.0, 2.0, 1.0).unwrap()));
    }

    #[test]
    fn test_length_and_empty() {
        let mut s = diagonal();
        assert_relative_eq!(s.length(), 32.0_f64.sqrt());
        assert_eq!(s.path_iter(None).count(), 2);
        s.clear();
        assert!(s.is_empty());
    }
}

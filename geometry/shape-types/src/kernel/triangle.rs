//! Triangle kernels.
//!
//! Triangles are passed as three vertices in either orientation.

use nalgebra::Point2;

use super::polygon::{contains_convex_polygon_point, farthest_point_convex_polygon_point};
use super::segment::closest_point_segment_point;
use super::{cross, dot};

/// Part of a triangle a query point projects onto.
///
/// Segments are named after their starting vertex: the first segment runs
/// from the first to the second vertex, the third one closes the loop back
/// to the first vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriangleFeature {
    /// The first vertex.
    FirstCorner,
    /// The second vertex.
    SecondCorner,
    /// The third vertex.
    ThirdCorner,
    /// The edge from the first to the second vertex.
    FirstSegment,
    /// The edge from the second to the third vertex.
    SecondSegment,
    /// The edge from the third back to the first vertex.
    ThirdSegment,
    /// The interior.
    Inside,
}

impl TriangleFeature {
    /// Whether the feature is a vertex.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(self, Self::FirstCorner | Self::SecondCorner | Self::ThirdCorner)
    }

    /// Whether the feature is an edge.
    #[must_use]
    pub const fn is_segment(self) -> bool {
        matches!(
            self,
            Self::FirstSegment | Self::SecondSegment | Self::ThirdSegment
        )
    }
}

/// Whether the vertices are in counter-clockwise order.
#[must_use]
pub fn is_ccw(p1: &Point2<f64>, p2: &Point2<f64>, p3: &Point2<f64>) -> bool {
    cross(p2.x - p1.x, p2.y - p1.y, p3.x - p1.x, p3.y - p1.y) > 0.0
}

/// Whether the triangle is flat: the sine of the angle at `p1` is within
/// `epsilon` of zero.
#[must_use]
pub fn is_degenerate(p1: &Point2<f64>, p2: &Point2<f64>, p3: &Point2<f64>, epsilon: f64) -> bool {
    let ab = p2 - p1;
    let ac = p3 - p1;
    cross(ab.x, ab.y, ac.x, ac.y).abs() <= epsilon * ab.norm() * ac.norm()
}

/// Unsigned area.
#[must_use]
pub fn area(p1: &Point2<f64>, p2: &Point2<f64>, p3: &Point2<f64>) -> f64 {
    cross(p2.x - p1.x, p2.y - p1.y, p3.x - p1.x, p3.y - p1.y).abs() * 0.5
}

/// Check whether a point lies in the closed triangle.
#[must_use]
pub fn contains_triangle_point(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    p3: &Point2<f64>,
    px: f64,
    py: f64,
    epsilon: f64,
) -> bool {
    contains_convex_polygon_point(&[*p1, *p2, *p3], px, py, epsilon)
}

/// Barycentric coordinates `(u, v, w)` of a point, with
/// `p = u * p1 + v * p2 + w * p3`.
///
/// Returns `None` for a degenerate triangle.
#[must_use]
pub fn barycentric(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    p3: &Point2<f64>,
    px: f64,
    py: f64,
    epsilon: f64,
) -> Option<(f64, f64, f64)> {
    let v0 = p2 - p1;
    let v1 = p3 - p1;
    if is_degenerate(p1, p2, p3, epsilon) {
        return None;
    }
    let denom = cross(v0.x, v0.y, v1.x, v1.y);
    let dx = px - p1.x;
    let dy = py - p1.y;
    let v = cross(dx, dy, v1.x, v1.y) / denom;
    let w = cross(v0.x, v0.y, dx, dy) / denom;
    Some((1.0 - v - w, v, w))
}

/// Closest feature of a degenerate triangle: the nearest of its edges,
/// reported as a corner when an endpoint is the nearest point.
fn closest_feature_degenerate(
    pts: [Point2<f64>; 3],
    p: Point2<f64>,
) -> (TriangleFeature, Point2<f64>) {
    const SEGMENTS: [TriangleFeature; 3] = [
        TriangleFeature::FirstSegment,
        TriangleFeature::SecondSegment,
        TriangleFeature::ThirdSegment,
    ];
    const CORNERS: [TriangleFeature; 3] = [
        TriangleFeature::FirstCorner,
        TriangleFeature::SecondCorner,
        TriangleFeature::ThirdCorner,
    ];
    let mut best = (SEGMENTS[0], pts[0]);
    let mut best_d = f64::INFINITY;
    for i in 0..3 {
        let a = pts[i];
        let b = pts[(i + 1) % 3];
        let q = closest_point_segment_point(a.x, a.y, b.x, b.y, p.x, p.y);
        let d = nalgebra::distance_squared(&q, &p);
        if d < best_d {
            best_d = d;
            let feature = if q == a {
                CORNERS[i]
            } else if q == b {
                CORNERS[(i + 1) % 3]
            } else {
                SEGMENTS[i]
            };
            best = (feature, q);
        }
    }
    best
}

/// Closest feature of the triangle to `(px, py)` and the closest point on it.
///
/// Classifies the point into the Voronoi regions of the vertices and edges.
/// A point inside the triangle is reported as [`TriangleFeature::Inside`]
/// and is its own closest point.
#[must_use]
pub fn closest_feature(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    p3: &Point2<f64>,
    px: f64,
    py: f64,
    epsilon: f64,
) -> (TriangleFeature, Point2<f64>) {
    let p = Point2::new(px, py);
    if is_degenerate(p1, p2, p3, epsilon) {
        return closest_feature_degenerate([*p1, *p2, *p3], p);
    }

    let (a, b, c) = (*p1, *p2, *p3);
    let ab = b - a;
    let ac = c - a;
    let ap = p - a;
    let d1 = dot(ab.x, ab.y, ap.x, ap.y);
    let d2 = dot(ac.x, ac.y, ap.x, ap.y);
    if d1 <= 0.0 && d2 <= 0.0 {
        return (TriangleFeature::FirstCorner, a);
    }

    let bp = p - b;
    let d3 = dot(ab.x, ab.y, bp.x, bp.y);
    let d4 = dot(ac.x, ac.y, bp.x, bp.y);
    if d3 >= 0.0 && d4 <= d3 {
        return (TriangleFeature::SecondCorner, b);
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let t = d1 / (d1 - d3);
        return (TriangleFeature::FirstSegment, a + ab * t);
    }

    let cp = p - c;
    let d5 = dot(ab.x, ab.y, cp.x, cp.y);
    let d6 = dot(ac.x, ac.y, cp.x, cp.y);
    if d6 >= 0.0 && d5 <= d6 {
        return (TriangleFeature::ThirdCorner, c);
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let t = d2 / (d2 - d6);
        return (TriangleFeature::ThirdSegment, a + ac * t);
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let t = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return (TriangleFeature::SecondSegment, b + (c - b) * t);
    }

    (TriangleFeature::Inside, p)
}

/// Point of the closed triangle nearest to `(px, py)`.
#[must_use]
pub fn closest_point_triangle_point(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    p3: &Point2<f64>,
    px: f64,
    py: f64,
    epsilon: f64,
) -> Point2<f64> {
    if contains_triangle_point(p1, p2, p3, px, py, epsilon) {
        return Point2::new(px, py);
    }
    closest_feature(p1, p2, p3, px, py, epsilon).1
}

/// Vertex of the triangle farthest from `(px, py)`.
#[must_use]
pub fn farthest_point_triangle_point(
    p1: &Point2<f64>,
    p2: &Point2<f64>,
    p3: &Point2<f64>,
    px: f64,
    py: f64,
) -> Point2<f64> {
    farthest_point_convex_polygon_point(&[*p1, *p2, *p3], px, py)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::params::DEFAULT_EPSILON as EPS;
    use approx::assert_relative_eq;

    fn tri() -> [Point2<f64>; 3] {
        [Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(0.0, 4.0)]
    }

    #[test]
    fn test_orientation_and_area() {
        let [a, b, c] = tri();
        assert!(is_ccw(&a, &b, &c));
        assert!(!is_ccw(&a, &c, &b));
        assert_relative_eq!(area(&a, &b, &c), 8.0);
        assert_relative_eq!(area(&a, &c, &b), 8.0);
    }

    #[test]
    fn test_contains_both_orientations() {
        let [a, b, c] = tri();
        assert!(contains_triangle_point(&a, &b, &c, 1.0, 1.0, EPS));
        assert!(contains_triangle_point(&a, &c, &b, 1.0, 1.0, EPS));
        assert!(contains_triangle_point(&a, &b, &c, 2.0, 2.0, EPS));
        assert!(!contains_triangle_point(&a, &b, &c, 2.5, 2.5, EPS));
    }

    #[test]
    fn test_barycentric() {
        let [a, b, c] = tri();
        let (u, v, w) = barycentric(&a, &b, &c, 1.0, 2.0, EPS).unwrap();
        assert_relative_eq!(u, 0.25);
        assert_relative_eq!(v, 0.25);
        assert_relative_eq!(w, 0.5);
        let flat = Point2::new(8.0, 0.0);
        assert!(barycentric(&a, &b, &flat, 1.0, 0.0, EPS).is_none());
    }

    #[test]
    fn test_closest_feature_regions() {
        let [a, b, c] = tri();
        let cases = [
            ((-1.0, -1.0), TriangleFeature::FirstCorner, (0.0, 0.0)),
            ((5.0, -1.0), TriangleFeature::SecondCorner, (4.0, 0.0)),
            ((-1.0, 5.0), TriangleFeature::ThirdCorner, (0.0, 4.0)),
            ((2.0, -3.0), TriangleFeature::FirstSegment, (2.0, 0.0)),
            ((3.0, 3.0), TriangleFeature::SecondSegment, (2.0, 2.0)),
            ((-3.0, 2.0), TriangleFeature::ThirdSegment, (0.0, 2.0)),
            ((1.0, 1.0), TriangleFeature::Inside, (1.0, 1.0)),
        ];
        for ((px, py), feature, (qx, qy)) in cases {
            let (f, q) = closest_feature(&a, &b, &c, px, py, EPS);
            assert_eq!(f, feature, "query ({px}, {py})");
            assert_relative_eq!(q.x, qx, epsilon = 1e-12);
            assert_relative_eq!(q.y, qy, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_closest_feature_clockwise() {
        let [a, b, c] = tri();
        let (f, q) = closest_feature(&a, &c, &b, 3.0, 3.0, EPS);
        assert_eq!(f, TriangleFeature::SecondSegment);
        assert_relative_eq!(q.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(q.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_triangle() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(2.0, 0.0);
        let c = Point2::new(4.0, 0.0);
        let (f, q) = closest_feature(&a, &b, &c, 1.0, 1.0, EPS);
        assert!(f.is_segment());
        assert_eq!(q, Point2::new(1.0, 0.0));
        let (f, q) = closest_feature(&a, &b, &c, -1.0, 0.0, EPS);
        assert!(f.is_corner());
        assert_eq!(q, a);
    }

    #[test]
    fn test_tiny_triangle_keeps_its_regions() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1e-5, 0.0);
        let c = Point2::new(0.0, 1e-5);
        assert!(!is_degenerate(&a, &b, &c, EPS));
        assert!(barycentric(&a, &b, &c, 2e-6, 2e-6, EPS).is_some());
        let (f, q) = closest_feature(&a, &b, &c, 2e-6, 2e-6, EPS);
        assert_eq!(f, TriangleFeature::Inside);
        assert_eq!(q, Point2::new(2e-6, 2e-6));

        // Huge but flat is still flat.
        let far = Point2::new(1e6, 1e-7);
        assert!(is_degenerate(&a, &Point2::new(2e6, 0.0), &far, EPS));
    }

    #[test]
    fn test_closest_and_farthest_point() {
        let [a, b, c] = tri();
        assert_eq!(
            closest_point_triangle_point(&a, &b, &c, 1.0, 1.0, EPS),
            Point2::new(1.0, 1.0)
        );
        assert_eq!(
            closest_point_triangle_point(&a, &b, &c, 5.0, -1.0, EPS),
            Point2::new(4.0, 0.0)
        );
        assert_eq!(farthest_point_triangle_point(&a, &b, &c, -1.0, -1.0), b);
    }
}

//! Convex polygon kernels shared by triangles, oriented rectangles,
//! parallelograms and segments.
//!
//! A polygon is a slice of at most a handful of vertices in boundary
//! order. One vertex is a point, two vertices a segment; three or more
//! form a closed loop whose orientation may be either way.

use nalgebra::Point2;

use super::segment::{closest_point_segment_point, distance_squared_segment_point};
use super::{cross, nearer};

/// Maximum vertex count of a [`ConvexPolygon`].
pub const MAX_VERTICES: usize = 4;

/// A convex polygon stored inline, without heap allocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvexPolygon {
    points: [Point2<f64>; MAX_VERTICES],
    len: usize,
}

impl ConvexPolygon {
    /// Build from up to [`MAX_VERTICES`] points; extra points are ignored.
    #[must_use]
    pub fn from_slice(points: &[Point2<f64>]) -> Self {
        let mut out = [Point2::origin(); MAX_VERTICES];
        let len = points.len().min(MAX_VERTICES);
        out[..len].copy_from_slice(&points[..len]);
        Self { points: out, len }
    }

    /// A segment polygon.
    #[must_use]
    pub fn segment(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self::from_slice(&[a, b])
    }

    /// The vertices.
    #[must_use]
    pub fn as_slice(&self) -> &[Point2<f64>] {
        &self.points[..self.len]
    }

    /// Apply `f` to every vertex.
    #[must_use]
    pub fn map(&self, f: impl Fn(&Point2<f64>) -> Point2<f64>) -> Self {
        let mut out = *self;
        for p in &mut out.points[..self.len] {
            *p = f(p);
        }
        out
    }
}

/// Iterate the edges of a polygon.
///
/// A single point yields one zero-length edge, a segment yields itself
/// once, and larger polygons yield the closed loop.
pub fn edges(points: &[Point2<f64>]) -> impl Iterator<Item = (Point2<f64>, Point2<f64>)> + '_ {
    let n = points.len();
    let count = match n {
        0 => 0,
        1 | 2 => 1,
        _ => n,
    };
    (0..count).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Signed area (positive for counter-clockwise order).
#[must_use]
pub fn signed_area(points: &[Point2<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (a, b) in edges(points) {
        sum += cross(a.x, a.y, b.x, b.y);
    }
    sum * 0.5
}

/// Whether a polygon with the given signed area is flat relative to its size.
///
/// Twice the area is compared against the squared length of the longest
/// edge, so the test does not depend on the scale of the coordinates.
fn is_degenerate(points: &[Point2<f64>], area: f64, epsilon: f64) -> bool {
    let longest_sq = edges(points)
        .map(|(a, b)| nalgebra::distance_squared(&a, &b))
        .fold(0.0, f64::max);
    2.0 * area.abs() <= epsilon * longest_sq
}

/// Axis-aligned bounds as `(minx, miny, maxx, maxy)`.
#[must_use]
pub fn bounds(points: &[Point2<f64>]) -> (f64, f64, f64, f64) {
    let mut minx = f64::INFINITY;
    let mut miny = f64::INFINITY;
    let mut maxx = f64::NEG_INFINITY;
    let mut maxy = f64::NEG_INFINITY;
    for p in points {
        minx = minx.min(p.x);
        miny = miny.min(p.y);
        maxx = maxx.max(p.x);
        maxy = maxy.max(p.y);
    }
    (minx, miny, maxx, maxy)
}

/// Check whether a point lies in the closed convex polygon.
///
/// Degenerate polygons (points, segments, collinear vertices) contain the
/// points within `epsilon` of their boundary.
#[must_use]
pub fn contains_convex_polygon_point(points: &[Point2<f64>], px: f64, py: f64, epsilon: f64) -> bool {
    if points.is_empty() {
        return false;
    }
    let area = signed_area(points);
    if is_degenerate(points, area, epsilon) {
        let eps_sq = epsilon * epsilon;
        return edges(points)
            .any(|(a, b)| distance_squared_segment_point(a.x, a.y, b.x, b.y, px, py) <= eps_sq);
    }
    let sign = area.signum();
    edges(points).all(|(a, b)| {
        let ex = b.x - a.x;
        let ey = b.y - a.y;
        let side = cross(ex, ey, px - a.x, py - a.y) * sign;
        side >= -epsilon * ex.hypot(ey)
    })
}

/// Check whether every vertex of `inner` lies in the convex polygon `outer`.
#[must_use]
pub fn contains_convex_polygon_polygon(
    outer: &[Point2<f64>],
    inner: &[Point2<f64>],
    epsilon: f64,
) -> bool {
    !inner.is_empty()
        && inner
            .iter()
            .all(|p| contains_convex_polygon_point(outer, p.x, p.y, epsilon))
}

/// Point of the closed convex polygon nearest to `(px, py)`.
#[must_use]
pub fn closest_point_convex_polygon_point(
    points: &[Point2<f64>],
    px: f64,
    py: f64,
    epsilon: f64,
) -> Point2<f64> {
    let p = Point2::new(px, py);
    if points.is_empty() || contains_convex_polygon_point(points, px, py, epsilon) {
        return p;
    }
    let mut edges = edges(points);
    let mut best = match edges.next() {
        Some((a, b)) => closest_point_segment_point(a.x, a.y, b.x, b.y, px, py),
        None => return p,
    };
    for (a, b) in edges {
        best = nearer(&p, best, closest_point_segment_point(a.x, a.y, b.x, b.y, px, py));
    }
    best
}

/// Vertex of the polygon farthest from `(px, py)`; the first wins ties.
#[must_use]
pub fn farthest_point_convex_polygon_point(points: &[Point2<f64>], px: f64, py: f64) -> Point2<f64> {
    let p = Point2::new(px, py);
    let mut it = points.iter();
    let Some(first) = it.next() else {
        return p;
    };
    it.fold(*first, |best, q| super::farther(&p, best, *q))
}

fn project(points: &[Point2<f64>], ax: f64, ay: f64) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for p in points {
        let d = p.x * ax + p.y * ay;
        lo = lo.min(d);
        hi = hi.max(d);
    }
    (lo, hi)
}

fn separated_on(a: &[Point2<f64>], b: &[Point2<f64>], ax: f64, ay: f64, epsilon: f64) -> bool {
    let (min_a, max_a) = project(a, ax, ay);
    let (min_b, max_b) = project(b, ax, ay);
    max_a < min_b - epsilon || max_b < min_a - epsilon
}

/// Separating axis test between two closed convex polygons.
///
/// Candidate axes are the unit normals of every non-degenerate edge plus
/// both coordinate axes, so points and collinear segments are handled.
/// Touching polygons intersect.
#[must_use]
pub fn intersects_convex_polygons(a: &[Point2<f64>], b: &[Point2<f64>], epsilon: f64) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if separated_on(a, b, 1.0, 0.0, epsilon) || separated_on(a, b, 0.0, 1.0, epsilon) {
        return false;
    }
    for poly in [a, b] {
        for (p, q) in edges(poly) {
            let ex = q.x - p.x;
            let ey = q.y - p.y;
            let len = ex.hypot(ey);
            if len <= 0.0 {
                continue;
            }
            if separated_on(a, b, -ey / len, ex / len, epsilon) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::params::DEFAULT_EPSILON as EPS;
    use approx::assert_relative_eq;

    fn square() -> [Point2<f64>; 4] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 4.0),
            Point2::new(0.0, 4.0),
        ]
    }

    #[test]
    fn test_edges_counts() {
        let sq = square();
        assert_eq!(edges(&sq).count(), 4);
        assert_eq!(edges(&sq[..2]).count(), 1);
        assert_eq!(edges(&sq[..1]).count(), 1);
        assert_eq!(edges(&sq[..0]).count(), 0);
    }

    #[test]
    fn test_signed_area_orientation() {
        let sq = square();
        assert_relative_eq!(signed_area(&sq), 16.0);
        let mut rev = sq;
        rev.reverse();
        assert_relative_eq!(signed_area(&rev), -16.0);
    }

    #[test]
    fn test_contains_either_orientation() {
        let sq = square();
        let mut rev = sq;
        rev.reverse();
        for poly in [&sq[..], &rev[..]] {
            assert!(contains_convex_polygon_point(poly, 2.0, 2.0, EPS));
            assert!(contains_convex_polygon_point(poly, 4.0, 2.0, EPS));
            assert!(!contains_convex_polygon_point(poly, 4.5, 2.0, EPS));
        }
    }

    #[test]
    fn test_degenerate_polygon_contains_its_segment() {
        let line = [Point2::new(0.0, 0.0), Point2::new(2.0, 2.0), Point2::new(4.0, 4.0)];
        assert!(contains_convex_polygon_point(&line, 1.0, 1.0, EPS));
        assert!(!contains_convex_polygon_point(&line, 1.0, 1.5, EPS));
    }

    #[test]
    fn test_small_polygon_is_not_degenerate() {
        let tiny = square().map(|p| Point2::from(p.coords * 1e-6));
        assert!(contains_convex_polygon_point(&tiny, 2e-6, 2e-6, EPS));
        assert!(!contains_convex_polygon_point(&tiny, 5e-6, 2e-6, EPS));
    }

    #[test]
    fn test_closest_and_farthest() {
        let sq = square();
        assert_eq!(
            closest_point_convex_polygon_point(&sq, 6.0, 2.0, EPS),
            Point2::new(4.0, 2.0)
        );
        assert_eq!(
            closest_point_convex_polygon_point(&sq, 1.0, 1.0, EPS),
            Point2::new(1.0, 1.0)
        );
        assert_eq!(
            farthest_point_convex_polygon_point(&sq, 1.0, 1.0),
            Point2::new(4.0, 4.0)
        );
    }

    #[test]
    fn test_sat() {
        let sq = square();
        let touching = [Point2::new(4.0, 4.0), Point2::new(6.0, 4.0), Point2::new(5.0, 6.0)];
        let apart = [Point2::new(5.0, 0.0), Point2::new(7.0, 0.0), Point2::new(6.0, 2.0)];
        assert!(intersects_convex_polygons(&sq, &touching, EPS));
        assert!(intersects_convex_polygons(&touching, &sq, EPS));
        assert!(!intersects_convex_polygons(&sq, &apart, EPS));
    }

    #[test]
    fn test_sat_diagonal_gap() {
        // Bounding boxes overlap but a diagonal edge separates them.
        let tri = [Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(0.0, 4.0)];
        let dot = [Point2::new(3.0, 3.0)];
        assert!(!intersects_convex_polygons(&tri, &dot, EPS));
        let on_edge = [Point2::new(2.0, 2.0)];
        assert!(intersects_convex_polygons(&tri, &on_edge, EPS));
    }

    #[test]
    fn test_fixed_polygon() {
        let poly = ConvexPolygon::from_slice(&square());
        assert_eq!(poly.as_slice().len(), 4);
        let moved = poly.map(|p| Point2::new(p.x + 1.0, p.y));
        assert_eq!(moved.as_slice()[0], Point2::new(1.0, 0.0));
        assert_eq!(ConvexPolygon::segment(Point2::origin(), Point2::new(1.0, 1.0)).as_slice().len(), 2);
    }
}

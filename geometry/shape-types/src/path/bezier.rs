//! Planar cubic Bézier helpers used by path flattening and bounds.

use nalgebra::Point2;
use tracing::trace;

/// A planar cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// Start point.
    pub p0: Point2<f64>,
    /// First control point.
    pub p1: Point2<f64>,
    /// Second control point.
    pub p2: Point2<f64>,
    /// End point.
    pub p3: Point2<f64>,
}

fn lerp(a: Point2<f64>, b: Point2<f64>, t: f64) -> Point2<f64> {
    Point2::from(a.coords * (1.0 - t) + b.coords * t)
}

impl CubicSegment {
    /// Create a segment from its four control points.
    #[must_use]
    pub const fn new(p0: Point2<f64>, p1: Point2<f64>, p2: Point2<f64>, p3: Point2<f64>) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Exact cubic form of a quadratic curve.
    #[must_use]
    pub fn from_quadratic(p0: Point2<f64>, ctrl: Point2<f64>, p2: Point2<f64>) -> Self {
        let q1 = Point2::from(p0.coords * (1.0 / 3.0) + ctrl.coords * (2.0 / 3.0));
        let q2 = Point2::from(ctrl.coords * (2.0 / 3.0) + p2.coords * (1.0 / 3.0));
        Self::new(p0, q1, q2, p2)
    }

    /// Evaluate the curve at `t ∈ [0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2<f64> {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point2::from(self.p0.coords * a + self.p1.coords * b + self.p2.coords * c + self.p3.coords * d)
    }

    /// Split at `t` with De Casteljau's algorithm.
    #[must_use]
    pub fn split(&self, t: f64) -> (Self, Self) {
        let p01 = lerp(self.p0, self.p1, t);
        let p12 = lerp(self.p1, self.p2, t);
        let p23 = lerp(self.p2, self.p3, t);
        let p012 = lerp(p01, p12, t);
        let p123 = lerp(p12, p23, t);
        let mid = lerp(p012, p123, t);
        (
            Self::new(self.p0, p01, p012, mid),
            Self::new(mid, p123, p23, self.p3),
        )
    }

    /// Whether both control points lie within `tolerance` of the chord.
    #[must_use]
    pub fn is_flat(&self, tolerance: f64) -> bool {
        let chord = self.p3 - self.p0;
        let chord_len = chord.norm();
        if chord_len < 1e-12 {
            return (self.p1 - self.p0).norm() <= tolerance
                && (self.p2 - self.p0).norm() <= tolerance;
        }
        let dir = chord / chord_len;
        let off = |p: Point2<f64>| {
            let v = p - self.p0;
            (v.x * dir.y - v.y * dir.x).abs()
        };
        off(self.p1) <= tolerance && off(self.p2) <= tolerance
    }

    /// Append the end points of a polyline approximating the curve.
    ///
    /// The start point is not pushed. Subdivision stops at `max_depth`
    /// even if the pieces are not yet flat.
    pub fn flatten_into(&self, tolerance: f64, max_depth: u32, out: &mut Vec<Point2<f64>>) {
        self.flatten_rec(tolerance, max_depth, out);
    }

    fn flatten_rec(&self, tolerance: f64, depth: u32, out: &mut Vec<Point2<f64>>) {
        if self.is_flat(tolerance) {
            out.push(self.p3);
        } else if depth == 0 {
            trace!(tolerance, "curve subdivision depth cap reached");
            out.push(self.p3);
        } else {
            let (left, right) = self.split(0.5);
            left.flatten_rec(tolerance, depth - 1, out);
            right.flatten_rec(tolerance, depth - 1, out);
        }
    }

    /// Parameters in `(0, 1)` where one coordinate derivative vanishes.
    fn extrema_parameters(&self) -> smallvec::SmallVec<[f64; 4]> {
        let mut out = smallvec::SmallVec::new();
        for (a, b, c, d) in [
            (self.p0.x, self.p1.x, self.p2.x, self.p3.x),
            (self.p0.y, self.p1.y, self.p2.y, self.p3.y),
        ] {
            // Derivative / 3 = qa t² + qb t + qc
            let qa = -a + 3.0 * b - 3.0 * c + d;
            let qb = 2.0 * (a - 2.0 * b + c);
            let qc = b - a;
            if qa.abs() < 1e-12 {
                if qb.abs() > 1e-12 {
                    out.push(-qc / qb);
                }
                continue;
            }
            let disc = qb * qb - 4.0 * qa * qc;
            if disc < 0.0 {
                continue;
            }
            let sq = disc.sqrt();
            out.push((-qb + sq) / (2.0 * qa));
            out.push((-qb - sq) / (2.0 * qa));
        }
        out.retain(|t| *t > 0.0 && *t < 1.0);
        out
    }

    /// Tight bounds as `(minx, miny, maxx, maxy)`, using the curve extrema
    /// rather than the control hull.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut minx = self.p0.x.min(self.p3.x);
        let mut miny = self.p0.y.min(self.p3.y);
        let mut maxx = self.p0.x.max(self.p3.x);
        let mut maxy = self.p0.y.max(self.p3.y);
        for t in self.extrema_parameters() {
            let p = self.point_at(t);
            minx = minx.min(p.x);
            miny = miny.min(p.y);
            maxx = maxx.max(p.x);
            maxy = maxy.max(p.y);
        }
        (minx, miny, maxx, maxy)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> CubicSegment {
        CubicSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 4.0),
            Point2::new(4.0, 4.0),
            Point2::new(4.0, 0.0),
        )
    }

    #[test]
    fn test_point_at_ends_and_middle() {
        let c = arch();
        assert_eq!(c.point_at(0.0), c.p0);
        assert_eq!(c.point_at(1.0), c.p3);
        let m = c.point_at(0.5);
        assert_relative_eq!(m.x, 2.0);
        assert_relative_eq!(m.y, 3.0);
    }

    #[test]
    fn test_split_matches_evaluation() {
        let c = arch();
        let (l, r) = c.split(0.5);
        assert_eq!(l.p3, r.p0);
        let q = l.point_at(0.5);
        let e = c.point_at(0.25);
        assert_relative_eq!(q.x, e.x, epsilon = 1e-12);
        assert_relative_eq!(q.y, e.y, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_elevation() {
        let c = CubicSegment::from_quadratic(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        );
        // Quadratic midpoint: 0.25 p0 + 0.5 ctrl + 0.25 p2
        let m = c.point_at(0.5);
        assert_relative_eq!(m.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(m.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounds_use_extrema() {
        let (minx, miny, maxx, maxy) = arch().bounds();
        assert_relative_eq!(minx, 0.0);
        assert_relative_eq!(maxx, 4.0);
        assert_relative_eq!(miny, 0.0);
        // The control hull reaches 4, the curve only 3.
        assert_relative_eq!(maxy, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flatten_respects_tolerance() {
        let c = arch();
        let mut pts = vec![c.p0];
        c.flatten_into(0.01, 10, &mut pts);
        assert!(pts.len() > 4);
        assert_eq!(*pts.last().unwrap(), c.p3);
        for w in pts.windows(2) {
            let mid = nalgebra::center(&w[0], &w[1]);
            // Every chord midpoint stays close to the arch.
            assert!(mid.y >= -1e-9 && mid.y <= 3.0 + 1e-9);
        }

        let line = CubicSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        );
        let mut pts = Vec::new();
        line.flatten_into(0.01, 10, &mut pts);
        assert_eq!(pts, vec![Point2::new(3.0, 0.0)]);
    }

    #[test]
    fn test_depth_cap() {
        let c = arch();
        let mut pts = Vec::new();
        c.flatten_into(1e-300, 3, &mut pts);
        assert_eq!(pts.len(), 8);
    }
}

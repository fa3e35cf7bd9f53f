//! Round rectangle kernels.
//!
//! A round rectangle is the Minkowski sum of an inner rectangle and an
//! axis-aligned ellipse whose radii are half the arc sizes. Every query
//! clamps the point onto the inner rectangle and then asks the ellipse
//! kernel about the ellipse centered there.

use nalgebra::Point2;

use super::{ellipse, farther, rectangle};

/// Corner radii for the given box and arc sizes.
///
/// Arcs larger than the box are clamped so the radii never exceed half
/// the box dimensions.
#[must_use]
pub fn corner_radii(
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
    arc_width: f64,
    arc_height: f64,
) -> (f64, f64) {
    let rx = (arc_width * 0.5).min((maxx - minx) * 0.5).max(0.0);
    let ry = (arc_height * 0.5).min((maxy - miny) * 0.5).max(0.0);
    (rx, ry)
}

/// Resolved round rectangle geometry: the inner rectangle and the corner radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRect {
    /// Inner rectangle minimum x.
    pub minx: f64,
    /// Inner rectangle minimum y.
    pub miny: f64,
    /// Inner rectangle maximum x.
    pub maxx: f64,
    /// Inner rectangle maximum y.
    pub maxy: f64,
    /// Horizontal corner radius.
    pub rx: f64,
    /// Vertical corner radius.
    pub ry: f64,
}

impl RoundRect {
    /// Resolve the geometry of the round rectangle bounded by the given box.
    #[must_use]
    pub fn new(
        minx: f64,
        miny: f64,
        maxx: f64,
        maxy: f64,
        arc_width: f64,
        arc_height: f64,
    ) -> Self {
        let (rx, ry) = corner_radii(minx, miny, maxx, maxy, arc_width, arc_height);
        // Fully rounded sides can cross by one ulp after subtraction.
        let (inner_minx, inner_miny) = (minx + rx, miny + ry);
        Self {
            minx: inner_minx,
            miny: inner_miny,
            maxx: (maxx - rx).max(inner_minx),
            maxy: (maxy - ry).max(inner_miny),
            rx,
            ry,
        }
    }

    fn clamp(&self, px: f64, py: f64) -> Point2<f64> {
        rectangle::closest_point_rectangle_point(self.minx, self.miny, self.maxx, self.maxy, px, py)
    }

    /// Centers of the corner ellipses, counter-clockwise from the lower left.
    #[must_use]
    pub fn corner_centers(&self) -> [Point2<f64>; 4] {
        rectangle::corners(self.minx, self.miny, self.maxx, self.maxy)
    }

    /// The horizontal and vertical bands, as `(minx, miny, maxx, maxy)`.
    ///
    /// Together with the four corner ellipses they cover the shape exactly.
    #[must_use]
    pub fn bands(&self) -> [(f64, f64, f64, f64); 2] {
        [
            (self.minx - self.rx, self.miny, self.maxx + self.rx, self.maxy),
            (self.minx, self.miny - self.ry, self.maxx, self.maxy + self.ry),
        ]
    }

    /// Check whether a point lies in the closed round rectangle.
    #[must_use]
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        let q = self.clamp(px, py);
        ellipse::contains_ellipse_point(q.x, q.y, self.rx, self.ry, px, py)
    }

    /// Check whether the round rectangle contains the whole closed rectangle.
    #[must_use]
    pub fn contains_rectangle(&self, minx: f64, miny: f64, maxx: f64, maxy: f64) -> bool {
        rectangle::corners(minx, miny, maxx, maxy)
            .iter()
            .all(|p| self.contains_point(p.x, p.y))
    }

    /// Point of the closed round rectangle nearest to `(px, py)`.
    #[must_use]
    pub fn closest_point(&self, px: f64, py: f64) -> Point2<f64> {
        let q = self.clamp(px, py);
        ellipse::closest_point_ellipse_point(q.x, q.y, self.rx, self.ry, px, py)
    }

    /// Point of the round rectangle farthest from `(px, py)`.
    #[must_use]
    pub fn farthest_point(&self, px: f64, py: f64) -> Point2<f64> {
        let p = Point2::new(px, py);
        let mut corners = self
            .corner_centers()
            .into_iter()
            .map(|c| ellipse::farthest_point_ellipse_point(c.x, c.y, self.rx, self.ry, px, py));
        let first = corners.next().unwrap_or(p);
        corners.fold(first, |best, q| farther(&p, best, q))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> RoundRect {
        // Box (0, 0)-(10, 6) with radius-2 corners.
        RoundRect::new(0.0, 0.0, 10.0, 6.0, 4.0, 4.0)
    }

    #[test]
    fn test_radii_are_clamped() {
        assert_eq!(corner_radii(0.0, 0.0, 10.0, 6.0, 4.0, 4.0), (2.0, 2.0));
        assert_eq!(corner_radii(0.0, 0.0, 10.0, 6.0, 40.0, 40.0), (5.0, 3.0));
        assert_eq!(corner_radii(0.0, 0.0, 10.0, 6.0, -1.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_contains_point() {
        let r = sample();
        assert!(r.contains_point(5.0, 3.0));
        assert!(r.contains_point(0.0, 3.0));
        assert!(r.contains_point(5.0, 6.0));
        // The corner of the box is cut off by the arc.
        assert!(!r.contains_point(0.1, 0.1));
        assert!(r.contains_point(0.6, 0.6));
    }

    #[test]
    fn test_sharp_corners_behave_like_rectangle() {
        let r = RoundRect::new(0.0, 0.0, 10.0, 6.0, 0.0, 0.0);
        assert!(r.contains_point(0.0, 0.0));
        assert!(r.contains_point(10.0, 6.0));
        assert!(!r.contains_point(10.1, 6.0));
        assert_eq!(r.closest_point(12.0, 8.0), Point2::new(10.0, 6.0));
    }

    #[test]
    fn test_closest_point() {
        let r = sample();
        assert_eq!(r.closest_point(5.0, 10.0), Point2::new(5.0, 6.0));
        assert_eq!(r.closest_point(5.0, 3.0), Point2::new(5.0, 3.0));
        let c = r.closest_point(-5.0, -5.0);
        let s = 2.0 - 2.0_f64.sqrt();
        assert_relative_eq!(c.x, s, epsilon = 1e-9);
        assert_relative_eq!(c.y, s, epsilon = 1e-9);
    }

    #[test]
    fn test_farthest_point() {
        let r = sample();
        let f = r.farthest_point(-5.0, 3.0);
        // The far corner arcs: the answer is on the right side.
        assert!(f.x > 9.0);
        let p = Point2::new(-5.0, 3.0);
        assert!(nalgebra::distance(&p, &f) >= nalgebra::distance(&p, &Point2::new(10.0, 3.0)));
    }

    #[test]
    fn test_bands_cover_the_inner_cross() {
        let r = sample();
        let [h, v] = r.bands();
        assert_eq!(h, (0.0, 2.0, 10.0, 4.0));
        assert_eq!(v, (2.0, 0.0, 8.0, 6.0));
    }
}

//! Axis-aligned ellipse kernels.
//!
//! An ellipse is `(cx, cy, a, b)`: center plus horizontal and vertical
//! radii. Intersection tests map the ellipse onto the unit circle with
//! `(x, y) -> ((x - cx) / a, (y - cy) / b)`; that map keeps rectangles
//! axis-aligned, polygons convex and ellipses axis-aligned, so each test
//! reduces to a circle kernel. An ellipse with a zero radius is the
//! segment between its extreme points.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Point2;

use super::distance_squared;
use super::polygon::{ConvexPolygon, intersects_convex_polygons};
use super::segment::{
    closest_point_segment_point, farthest_point_segment_point, intersects_segment_segment,
};
use super::{circle, rectangle};

/// Bisection cap; enough to exhaust the `f64` mantissa.
const MAX_BISECTIONS: usize = 1100;

/// Coarse samples per quadrant when searching the farthest point.
const FARTHEST_SAMPLES: usize = 16;

/// Golden-section refinement steps for the farthest point.
const FARTHEST_REFINEMENTS: usize = 80;

/// Whether the ellipse collapses to a segment or a point.
#[inline]
#[must_use]
pub fn is_degenerate(a: f64, b: f64) -> bool {
    a <= 0.0 || b <= 0.0
}

/// Endpoints of the segment a degenerate ellipse collapses to.
fn degenerate_segment(cx: f64, cy: f64, a: f64, b: f64) -> (f64, f64, f64, f64) {
    let a = a.max(0.0);
    let b = b.max(0.0);
    (cx - a, cy - b, cx + a, cy + b)
}

/// Check whether a point lies in the closed ellipse.
#[must_use]
pub fn contains_ellipse_point(cx: f64, cy: f64, a: f64, b: f64, px: f64, py: f64) -> bool {
    if is_degenerate(a, b) {
        let (x1, y1, x2, y2) = degenerate_segment(cx, cy, a, b);
        return rectangle::contains_rectangle_point(x1, y1, x2, y2, px, py);
    }
    let dx = (px - cx) / a;
    let dy = (py - cy) / b;
    dx * dx + dy * dy <= 1.0
}

/// Check whether the closed ellipse contains the whole rectangle.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn contains_ellipse_rectangle(
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
) -> bool {
    rectangle::corners(minx, miny, maxx, maxy)
        .iter()
        .all(|p| contains_ellipse_point(cx, cy, a, b, p.x, p.y))
}

fn robust_length(v0: f64, v1: f64) -> f64 {
    v0.hypot(v1)
}

fn get_root(r0: f64, z0: f64, z1: f64, g: f64) -> f64 {
    let n0 = r0 * z0;
    let mut s0 = z1 - 1.0;
    let mut s1 = if g < 0.0 {
        0.0
    } else {
        robust_length(n0, z1) - 1.0
    };
    let mut s = 0.0;
    for _ in 0..MAX_BISECTIONS {
        s = (s0 + s1) * 0.5;
        if s == s0 || s == s1 {
            break;
        }
        let ratio0 = n0 / (s + r0);
        let ratio1 = z1 / (s + 1.0);
        let g = ratio0 * ratio0 + ratio1 * ratio1 - 1.0;
        if g > 0.0 {
            s0 = s;
        } else if g < 0.0 {
            s1 = s;
        } else {
            break;
        }
    }
    s
}

/// Closest point on the boundary of an origin-centered ellipse with radii
/// `e0 >= e1 > 0`, for a query point in the first quadrant.
fn closest_on_boundary_first_quadrant(e0: f64, e1: f64, y0: f64, y1: f64) -> (f64, f64) {
    if y1 > 0.0 {
        if y0 > 0.0 {
            let z0 = y0 / e0;
            let z1 = y1 / e1;
            let g = z0 * z0 + z1 * z1 - 1.0;
            if g == 0.0 {
                (y0, y1)
            } else {
                let r0 = (e0 / e1) * (e0 / e1);
                let sbar = get_root(r0, z0, z1, g);
                (r0 * y0 / (sbar + r0), y1 / (sbar + 1.0))
            }
        } else {
            (0.0, e1)
        }
    } else {
        let numer0 = e0 * y0;
        let denom0 = e0 * e0 - e1 * e1;
        if numer0 < denom0 {
            let xde0 = numer0 / denom0;
            (e0 * xde0, e1 * (1.0 - xde0 * xde0).max(0.0).sqrt())
        } else {
            (e0, 0.0)
        }
    }
}

/// Point of the ellipse boundary nearest to `(px, py)`.
///
/// Uses a bisection on the Lagrange parameter, which converges for every
/// query position including points on the axes.
#[must_use]
pub fn closest_boundary_point_ellipse_point(
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    px: f64,
    py: f64,
) -> Point2<f64> {
    if is_degenerate(a, b) {
        let (x1, y1, x2, y2) = degenerate_segment(cx, cy, a, b);
        return closest_point_segment_point(x1, y1, x2, y2, px, py);
    }
    let dx = px - cx;
    let dy = py - cy;
    let (x0, x1) = if a >= b {
        closest_on_boundary_first_quadrant(a, b, dx.abs(), dy.abs())
    } else {
        let (v, u) = closest_on_boundary_first_quadrant(b, a, dy.abs(), dx.abs());
        (u, v)
    };
    Point2::new(cx + x0.copysign(dx), cy + x1.copysign(dy))
}

/// Point of the closed ellipse nearest to `(px, py)`.
///
/// A point inside the ellipse is its own closest point.
#[must_use]
pub fn closest_point_ellipse_point(
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    px: f64,
    py: f64,
) -> Point2<f64> {
    if contains_ellipse_point(cx, cy, a, b, px, py) {
        return Point2::new(px, py);
    }
    closest_boundary_point_ellipse_point(cx, cy, a, b, px, py)
}

/// Point of the ellipse farthest from `(px, py)`.
///
/// The farthest point always lies in the quadrant opposite to the query
/// point, so only that quarter arc is searched: a coarse sampling picks the
/// bracket, then a golden-section search refines it.
#[must_use]
pub fn farthest_point_ellipse_point(
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    px: f64,
    py: f64,
) -> Point2<f64> {
    if is_degenerate(a, b) {
        let (x1, y1, x2, y2) = degenerate_segment(cx, cy, a, b);
        return farthest_point_segment_point(x1, y1, x2, y2, px, py);
    }
    let sx = if px - cx > 0.0 { -1.0 } else { 1.0 };
    let sy = if py - cy > 0.0 { -1.0 } else { 1.0 };
    let at = |t: f64| Point2::new(cx + sx * a * t.cos(), cy + sy * b * t.sin());
    let f = |t: f64| {
        let q = at(t);
        distance_squared(q.x, q.y, px, py)
    };

    #[allow(clippy::cast_precision_loss)]
    let step = FRAC_PI_2 / FARTHEST_SAMPLES as f64;
    let mut best_i = 0_usize;
    let mut best_d = f(0.0);
    for i in 1..=FARTHEST_SAMPLES {
        #[allow(clippy::cast_precision_loss)]
        let d = f(step * i as f64);
        if d > best_d {
            best_d = d;
            best_i = i;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let mut lo = (step * (best_i as f64 - 1.0)).max(0.0);
    #[allow(clippy::cast_precision_loss)]
    let mut hi = (step * (best_i as f64 + 1.0)).min(FRAC_PI_2);
    let inv_phi = (5.0_f64.sqrt() - 1.0) * 0.5;
    let mut t1 = hi - inv_phi * (hi - lo);
    let mut t2 = lo + inv_phi * (hi - lo);
    let mut f1 = f(t1);
    let mut f2 = f(t2);
    for _ in 0..FARTHEST_REFINEMENTS {
        if f1 < f2 {
            lo = t1;
            t1 = t2;
            f1 = f2;
            t2 = lo + inv_phi * (hi - lo);
            f2 = f(t2);
        } else {
            hi = t2;
            t2 = t1;
            f2 = f1;
            t1 = hi - inv_phi * (hi - lo);
            f1 = f(t1);
        }
    }
    let t = (lo + hi) * 0.5;
    #[allow(clippy::cast_precision_loss)]
    let sampled = at(step * best_i as f64);
    let refined = at(t);
    super::farther(&Point2::new(px, py), sampled, refined)
}

/// Check whether two closed ellipses share at least one point.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_ellipse_ellipse(
    cx1: f64,
    cy1: f64,
    a1: f64,
    b1: f64,
    cx2: f64,
    cy2: f64,
    a2: f64,
    b2: f64,
    epsilon: f64,
) -> bool {
    if is_degenerate(a1, b1) {
        let (x1, y1, x2, y2) = degenerate_segment(cx1, cy1, a1, b1);
        return intersects_ellipse_segment(cx2, cy2, a2, b2, x1, y1, x2, y2, epsilon);
    }
    if is_degenerate(a2, b2) {
        let (x1, y1, x2, y2) = degenerate_segment(cx2, cy2, a2, b2);
        return intersects_ellipse_segment(cx1, cy1, a1, b1, x1, y1, x2, y2, epsilon);
    }
    // In the first ellipse's unit frame the first ellipse is the unit disk.
    let u = (cx2 - cx1) / a1;
    let v = (cy2 - cy1) / b1;
    let ra = a2 / a1;
    let rb = b2 / b1;
    if contains_ellipse_point(u, v, ra, rb, 0.0, 0.0) {
        return true;
    }
    let q = closest_boundary_point_ellipse_point(u, v, ra, rb, 0.0, 0.0);
    q.x * q.x + q.y * q.y <= 1.0 + epsilon
}

/// Check whether a closed segment touches the closed ellipse.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_ellipse_segment(
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    epsilon: f64,
) -> bool {
    if is_degenerate(a, b) {
        let (ex1, ey1, ex2, ey2) = degenerate_segment(cx, cy, a, b);
        return intersects_segment_segment(ex1, ey1, ex2, ey2, x1, y1, x2, y2, epsilon);
    }
    circle::intersects_circle_segment(
        0.0,
        0.0,
        1.0,
        (x1 - cx) / a,
        (y1 - cy) / b,
        (x2 - cx) / a,
        (y2 - cy) / b,
    )
}

/// Check whether the closed ellipse touches the closed rectangle.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_ellipse_rectangle(
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
) -> bool {
    if is_degenerate(a, b) {
        let (x1, y1, x2, y2) = degenerate_segment(cx, cy, a, b);
        return rectangle::intersects_rectangle_segment(minx, miny, maxx, maxy, x1, y1, x2, y2);
    }
    circle::intersects_circle_rectangle(
        0.0,
        0.0,
        1.0,
        (minx - cx) / a,
        (miny - cy) / b,
        (maxx - cx) / a,
        (maxy - cy) / b,
    )
}

/// Check whether the closed ellipse touches a closed convex polygon.
#[must_use]
pub fn intersects_ellipse_convex_polygon(
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    points: &[Point2<f64>],
    epsilon: f64,
) -> bool {
    if is_degenerate(a, b) {
        let (x1, y1, x2, y2) = degenerate_segment(cx, cy, a, b);
        let seg = [Point2::new(x1, y1), Point2::new(x2, y2)];
        return intersects_convex_polygons(&seg, points, epsilon);
    }
    let local = ConvexPolygon::from_slice(points)
        .map(|p| Point2::new((p.x - cx) / a, (p.y - cy) / b));
    circle::intersects_circle_convex_polygon(0.0, 0.0, 1.0, local.as_slice(), epsilon)
}

//! Circle kernels.

use nalgebra::Point2;

use super::distance_squared;
use super::polygon::{contains_convex_polygon_point, edges};
use super::segment::{distance_squared_line_point, distance_squared_segment_point};

/// Check whether a point lies in the closed disk.
#[must_use]
pub fn contains_circle_point(cx: f64, cy: f64, radius: f64, px: f64, py: f64) -> bool {
    distance_squared(cx, cy, px, py) <= radius * radius
}

/// Check whether the disk contains the whole closed rectangle.
#[must_use]
pub fn contains_circle_rectangle(
    cx: f64,
    cy: f64,
    radius: f64,
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
) -> bool {
    // The farthest corner decides.
    let fx = if cx <= (minx + maxx) * 0.5 { maxx } else { minx };
    let fy = if cy <= (miny + maxy) * 0.5 { maxy } else { miny };
    contains_circle_point(cx, cy, radius, fx, fy)
}

/// Check whether the first disk contains the second one.
#[must_use]
pub fn contains_circle_circle(cx1: f64, cy1: f64, r1: f64, cx2: f64, cy2: f64, r2: f64) -> bool {
    let slack = r1 - r2;
    slack >= 0.0 && distance_squared(cx1, cy1, cx2, cy2) <= slack * slack
}

/// Check whether two closed disks share at least one point.
#[must_use]
pub fn intersects_circle_circle(cx1: f64, cy1: f64, r1: f64, cx2: f64, cy2: f64, r2: f64) -> bool {
    let r = r1 + r2;
    distance_squared(cx1, cy1, cx2, cy2) <= r * r
}

/// Check whether a closed segment touches the closed disk.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_circle_segment(
    cx: f64,
    cy: f64,
    radius: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> bool {
    distance_squared_segment_point(x1, y1, x2, y2, cx, cy) <= radius * radius
}

/// Check whether the infinite line through two points touches the disk.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_circle_line(
    cx: f64,
    cy: f64,
    radius: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> bool {
    distance_squared_line_point(x1, y1, x2, y2, cx, cy) <= radius * radius
}

/// Check whether the disk touches the closed rectangle.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_circle_rectangle(
    cx: f64,
    cy: f64,
    radius: f64,
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
) -> bool {
    let qx = cx.clamp(minx, maxx);
    let qy = cy.clamp(miny, maxy);
    distance_squared(cx, cy, qx, qy) <= radius * radius
}

/// Check whether the disk touches a closed convex polygon.
#[must_use]
pub fn intersects_circle_convex_polygon(
    cx: f64,
    cy: f64,
    radius: f64,
    points: &[Point2<f64>],
    epsilon: f64,
) -> bool {
    if contains_convex_polygon_point(points, cx, cy, epsilon) {
        return true;
    }
    let r_sq = radius * radius;
    edges(points).any(|(a, b)| distance_squared_segment_point(a.x, a.y, b.x, b.y, cx, cy) <= r_sq)
}

/// Point of the closed disk nearest to `(px, py)`.
#[must_use]
pub fn closest_point_circle_point(cx: f64, cy: f64, radius: f64, px: f64, py: f64) -> Point2<f64> {
    let dx = px - cx;
    let dy = py - cy;
    let len = dx.hypot(dy);
    if len <= radius {
        return Point2::new(px, py);
    }
    let s = radius / len;
    Point2::new(cx + dx * s, cy + dy * s)
}

/// Point of the circle farthest from `(px, py)`.
///
/// When the query point is the center every boundary point is equally
/// far; the point at angle zero is returned.
#[must_use]
pub fn farthest_point_circle_point(cx: f64, cy: f64, radius: f64, px: f64, py: f64) -> Point2<f64> {
    let dx = px - cx;
    let dy = py - cy;
    let len = dx.hypot(dy);
    if len <= 0.0 {
        return Point2::new(cx + radius, cy);
    }
    let s = radius / len;
    Point2::new(cx - dx * s, cy - dy * s)
}

//! Segment kernels.

use nalgebra::Point2;

use super::{cross, distance_squared};

/// Parameter `t ∈ [0, 1]` of the point of segment `(ax, ay)-(bx, by)`
/// nearest to `(px, py)`.
#[must_use]
pub fn closest_parameter(ax: f64, ay: f64, bx: f64, by: f64, px: f64, py: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= 0.0 {
        return 0.0;
    }
    (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0)
}

/// Point of the segment nearest to `(px, py)`.
#[must_use]
pub fn closest_point_segment_point(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    px: f64,
    py: f64,
) -> Point2<f64> {
    let t = closest_parameter(ax, ay, bx, by, px, py);
    Point2::new(ax + t * (bx - ax), ay + t * (by - ay))
}

/// Endpoint of the segment farthest from `(px, py)`; the first endpoint
/// wins ties.
#[must_use]
pub fn farthest_point_segment_point(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    px: f64,
    py: f64,
) -> Point2<f64> {
    if distance_squared(px, py, bx, by) > distance_squared(px, py, ax, ay) {
        Point2::new(bx, by)
    } else {
        Point2::new(ax, ay)
    }
}

/// Squared distance from `(px, py)` to the segment.
#[must_use]
pub fn distance_squared_segment_point(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    px: f64,
    py: f64,
) -> f64 {
    let c = closest_point_segment_point(ax, ay, bx, by, px, py);
    distance_squared(c.x, c.y, px, py)
}

/// Squared distance from `(px, py)` to the infinite line through `a` and `b`.
///
/// A degenerate line (a == b) falls back to the distance to `a`.
#[must_use]
pub fn distance_squared_line_point(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    px: f64,
    py: f64,
) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= 0.0 {
        return distance_squared(ax, ay, px, py);
    }
    let c = cross(dx, dy, px - ax, py - ay);
    c * c / len_sq
}

/// Which side of the directed line `a -> b` the point lies on.
///
/// Returns `1` for the left (counter-clockwise) side, `-1` for the right
/// side, and `0` when the point is within `epsilon` of the line.
#[must_use]
pub fn side_of_line(ax: f64, ay: f64, bx: f64, by: f64, px: f64, py: f64, epsilon: f64) -> i32 {
    let dx = bx - ax;
    let dy = by - ay;
    let c = cross(dx, dy, px - ax, py - ay);
    // Scale the slack with the segment length so the test is unit-free.
    let slack = epsilon * dx.hypot(dy).max(1.0);
    if c > slack {
        1
    } else if c < -slack {
        -1
    } else {
        0
    }
}

/// Check whether `(px, py)`, known to be collinear with the segment, lies
/// within its bounding box.
fn within_segment_box(ax: f64, ay: f64, bx: f64, by: f64, px: f64, py: f64, epsilon: f64) -> bool {
    px >= ax.min(bx) - epsilon
        && px <= ax.max(bx) + epsilon
        && py >= ay.min(by) - epsilon
        && py <= ay.max(by) + epsilon
}

/// Check whether the infinite line through `a -> b` touches the closed
/// segment `(x1, y1)-(x2, y2)`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_line_segment(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    epsilon: f64,
) -> bool {
    side_of_line(ax, ay, bx, by, x1, y1, epsilon) * side_of_line(ax, ay, bx, by, x2, y2, epsilon) <= 0
}

/// Check whether two closed segments share at least one point.
///
/// Touching endpoints and collinear overlaps count as intersections.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_segment_segment(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
    epsilon: f64,
) -> bool {
    let d1 = side_of_line(x1, y1, x2, y2, x3, y3, epsilon);
    let d2 = side_of_line(x1, y1, x2, y2, x4, y4, epsilon);
    let d3 = side_of_line(x3, y3, x4, y4, x1, y1, epsilon);
    let d4 = side_of_line(x3, y3, x4, y4, x2, y2, epsilon);

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }

    (d1 == 0 && within_segment_box(x1, y1, x2, y2, x3, y3, epsilon))
        || (d2 == 0 && within_segment_box(x1, y1, x2, y2, x4, y4, epsilon))
        || (d3 == 0 && within_segment_box(x3, y3, x4, y4, x1, y1, epsilon))
        || (d4 == 0 && within_segment_box(x3, y3, x4, y4, x2, y2, epsilon))
}

/// Intersection point of two segments, if they cross at a single point.
///
/// Parallel segments (including collinear overlaps) yield `None` unless
/// they touch at exactly one endpoint.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersection_point_segment_segment(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
    epsilon: f64,
) -> Option<Point2<f64>> {
    let rx = x2 - x1;
    let ry = y2 - y1;
    let sx = x4 - x3;
    let sy = y4 - y3;
    let denom = cross(rx, ry, sx, sy);
    let qpx = x3 - x1;
    let qpy = y3 - y1;

    if denom.abs() <= epsilon * rx.hypot(ry) * sx.hypot(sy) {
        // Parallel: only a shared endpoint is a well-defined answer.
        for (px, py) in [(x3, y3), (x4, y4)] {
            if distance_squared(px, py, x1, y1) <= epsilon * epsilon
                || distance_squared(px, py, x2, y2) <= epsilon * epsilon
            {
                return Some(Point2::new(px, py));
            }
        }
        return None;
    }

    let t = cross(qpx, qpy, sx, sy) / denom;
    let u = cross(qpx, qpy, rx, ry) / denom;
    let lo = -epsilon;
    let hi = 1.0 + epsilon;
    if (lo..=hi).contains(&t) && (lo..=hi).contains(&u) {
        let t = t.clamp(0.0, 1.0);
        Some(Point2::new(x1 + t * rx, y1 + t * ry))
    } else {
        None
    }
}

/// Squared distance between two closed segments.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn distance_squared_segment_segment(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
    epsilon: f64,
) -> f64 {
    closest_points_segment_segment(x1, y1, x2, y2, x3, y3, x4, y4, epsilon).2
}

/// Closest pair of points between two segments, with their squared distance.
///
/// The first point lies on `(x1, y1)-(x2, y2)`, the second on
/// `(x3, y3)-(x4, y4)`. Crossing segments return their intersection twice.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn closest_points_segment_segment(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
    epsilon: f64,
) -> (Point2<f64>, Point2<f64>, f64) {
    if let Some(p) = intersection_point_segment_segment(x1, y1, x2, y2, x3, y3, x4, y4, epsilon) {
        return (p, p, 0.0);
    }

    // Disjoint segments: the minimum is reached at an endpoint of one of them.
    let candidates = [
        (
            Point2::new(x1, y1),
            closest_point_segment_point(x3, y3, x4, y4, x1, y1),
        ),
        (
            Point2::new(x2, y2),
            closest_point_segment_point(x3, y3, x4, y4, x2, y2),
        ),
        (
            closest_point_segment_point(x1, y1, x2, y2, x3, y3),
            Point2::new(x3, y3),
        ),
        (
            closest_point_segment_point(x1, y1, x2, y2, x4, y4),
            Point2::new(x4, y4),
        ),
    ];

    let mut best = candidates[0];
    let mut best_d = nalgebra::distance_squared(&best.0, &best.1);
    for &(a, b) in &candidates[1..] {
        let d = nalgebra::distance_squared(&a, &b);
        if d < best_d {
            best = (a, b);
            best_d = d;
        }
    }
    (best.0, best.1, best_d)
}

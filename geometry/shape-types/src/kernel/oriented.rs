//! Oriented rectangle and parallelogram kernels.
//!
//! Both shapes are a center plus two axes with a half-extent along each.
//! For an oriented rectangle the second axis is the counter-clockwise
//! perpendicular of the first, so only the first axis is passed. Corners
//! are always listed as `c + e1 u + e2 v`, `c - e1 u + e2 v`,
//! `c - e1 u - e2 v`, `c + e1 u - e2 v`.

use nalgebra::{Point2, Vector2};

use super::cross;
use super::polygon::{
    closest_point_convex_polygon_point, contains_convex_polygon_point,
    farthest_point_convex_polygon_point,
};

/// The counter-clockwise perpendicular of a unit axis.
#[inline]
#[must_use]
pub fn perpendicular(axis: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-axis.y, axis.x)
}

/// Corners of the box spanned by two axes around a center.
#[must_use]
pub fn corners(
    center: &Point2<f64>,
    u: &Vector2<f64>,
    e1: f64,
    v: &Vector2<f64>,
    e2: f64,
) -> [Point2<f64>; 4] {
    let a = u * e1;
    let b = v * e2;
    [
        center + a + b,
        center - a + b,
        center - a - b,
        center + a - b,
    ]
}

/// Check whether a point lies in the closed oriented rectangle.
#[must_use]
pub fn contains_oriented_point(
    center: &Point2<f64>,
    u: &Vector2<f64>,
    e1: f64,
    e2: f64,
    px: f64,
    py: f64,
    epsilon: f64,
) -> bool {
    let v = perpendicular(u);
    let d = Point2::new(px, py) - center;
    d.dot(u).abs() <= e1 + epsilon && d.dot(&v).abs() <= e2 + epsilon
}

/// Closest and farthest points of the oriented rectangle to `(px, py)`.
///
/// Both come out of one projection onto the axes: the closest point clamps
/// the projections, the farthest takes the extents of opposite sign.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn closest_farthest_points(
    center: &Point2<f64>,
    u: &Vector2<f64>,
    e1: f64,
    e2: f64,
    px: f64,
    py: f64,
    epsilon: f64,
) -> (Point2<f64>, Point2<f64>) {
    let v = perpendicular(u);
    let p = Point2::new(px, py);
    let d = p - center;
    let du = d.dot(u);
    let dv = d.dot(&v);

    let closest = if du.abs() <= e1 + epsilon && dv.abs() <= e2 + epsilon {
        p
    } else {
        center + u * du.clamp(-e1, e1) + v * dv.clamp(-e2, e2)
    };
    let fu = if du <= 0.0 { e1 } else { -e1 };
    let fv = if dv <= 0.0 { e2 } else { -e2 };
    let farthest = center + u * fu + v * fv;
    (closest, farthest)
}

/// Parallelogram coordinates `(a, b)` of a point with `p - c = a u + b v`.
///
/// Returns `None` when the axes are collinear.
#[must_use]
pub fn parallelogram_coordinates(
    center: &Point2<f64>,
    u: &Vector2<f64>,
    v: &Vector2<f64>,
    px: f64,
    py: f64,
    epsilon: f64,
) -> Option<(f64, f64)> {
    let denom = cross(u.x, u.y, v.x, v.y);
    if denom.abs() <= epsilon {
        return None;
    }
    let dx = px - center.x;
    let dy = py - center.y;
    Some((cross(dx, dy, v.x, v.y) / denom, cross(u.x, u.y, dx, dy) / denom))
}

/// Check whether a point lies in the closed parallelogram.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn contains_parallelogram_point(
    center: &Point2<f64>,
    u: &Vector2<f64>,
    e1: f64,
    v: &Vector2<f64>,
    e2: f64,
    px: f64,
    py: f64,
    epsilon: f64,
) -> bool {
    match parallelogram_coordinates(center, u, v, px, py, epsilon) {
        Some((a, b)) => a.abs() <= e1 + epsilon && b.abs() <= e2 + epsilon,
        None => contains_convex_polygon_point(&corners(center, u, e1, v, e2), px, py, epsilon),
    }
}

/// Point of the closed parallelogram nearest to `(px, py)`.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn closest_point_parallelogram_point(
    center: &Point2<f64>,
    u: &Vector2<f64>,
    e1: f64,
    v: &Vector2<f64>,
    e2: f64,
    px: f64,
    py: f64,
    epsilon: f64,
) -> Point2<f64> {
    if contains_parallelogram_point(center, u, e1, v, e2, px, py, epsilon) {
        return Point2::new(px, py);
    }
    closest_point_convex_polygon_point(&corners(center, u, e1, v, e2), px, py, epsilon)
}

/// Corner of the parallelogram farthest from `(px, py)`.
#[must_use]
pub fn farthest_point_parallelogram_point(
    center: &Point2<f64>,
    u: &Vector2<f64>,
    e1: f64,
    v: &Vector2<f64>,
    e2: f64,
    px: f64,
    py: f64,
) -> Point2<f64> {
    farthest_point_convex_polygon_point(&corners(center, u, e1, v, e2), px, py)
}

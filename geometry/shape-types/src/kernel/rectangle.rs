//! Axis-aligned rectangle kernels.
//!
//! Rectangles are passed as `(minx, miny, maxx, maxy)` with `min <= max`.

use nalgebra::Point2;

/// Check whether a point lies in the closed rectangle.
#[must_use]
pub fn contains_rectangle_point(
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
    px: f64,
    py: f64,
) -> bool {
    px >= minx && px <= maxx && py >= miny && py <= maxy
}

/// Check whether the first rectangle contains the second one entirely.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn contains_rectangle_rectangle(
    minx1: f64,
    miny1: f64,
    maxx1: f64,
    maxy1: f64,
    minx2: f64,
    miny2: f64,
    maxx2: f64,
    maxy2: f64,
) -> bool {
    minx2 >= minx1 && maxx2 <= maxx1 && miny2 >= miny1 && maxy2 <= maxy1
}

/// Check whether two closed rectangles share at least one point.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_rectangle_rectangle(
    minx1: f64,
    miny1: f64,
    maxx1: f64,
    maxy1: f64,
    minx2: f64,
    miny2: f64,
    maxx2: f64,
    maxy2: f64,
) -> bool {
    minx1 <= maxx2 && maxx1 >= minx2 && miny1 <= maxy2 && maxy1 >= miny2
}

/// Check whether a closed segment touches the closed rectangle.
///
/// Liang–Barsky clipping of the segment against the rectangle; a
/// zero-length segment degenerates into a point test.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_rectangle_segment(
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> bool {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, x1 - minx),
        (dx, maxx - x1),
        (-dy, y1 - miny),
        (dy, maxy - y1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return false;
            }
        }
    }
    true
}

/// Check whether a segment passes through the open interior of the
/// rectangle (touching the border only does not count).
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn intersects_open_rectangle_segment(
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> bool {
    if minx >= maxx || miny >= maxy {
        return false;
    }
    let dx = x2 - x1;
    let dy = y2 - y1;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, x1 - minx),
        (dx, maxx - x1),
        (-dy, y1 - miny),
        (dy, maxy - y1),
    ] {
        if p == 0.0 {
            if q <= 0.0 {
                return false;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 >= t1 {
                return false;
            }
        }
    }
    true
}

/// Point of the closed rectangle nearest to `(px, py)`.
///
/// A point inside the rectangle is its own closest point.
#[must_use]
pub fn closest_point_rectangle_point(
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
    px: f64,
    py: f64,
) -> Point2<f64> {
    Point2::new(px.clamp(minx, maxx), py.clamp(miny, maxy))
}

/// Corner of the rectangle farthest from `(px, py)`.
#[must_use]
pub fn farthest_point_rectangle_point(
    minx: f64,
    miny: f64,
    maxx: f64,
    maxy: f64,
    px: f64,
    py: f64,
) -> Point2<f64> {
    let x = if px <= (minx + maxx) * 0.5 { maxx } else { minx };
    let y = if py <= (miny + maxy) * 0.5 { maxy } else { miny };
    Point2::new(x, y)
}

/// The four corners, counter-clockwise from `(minx, miny)`.
#[must_use]
pub fn corners(minx: f64, miny: f64, maxx: f64, maxy: f64) -> [Point2<f64>; 4] {
    [
        Point2::new(minx, miny),
        Point2::new(maxx, miny),
        Point2::new(maxx, maxy),
        Point2::new(minx, maxy),
    ]
}

//! Crossing-count winding engine.
//!
//! A ray is cast from the query point towards +x. Every segment crossing
//! the ray adds `+1` when it goes up and `-1` when it goes down; the
//! winding rule then classifies the total. Curves are flattened first and
//! each open subpath is closed back to its start.

use nalgebra::Point2;

use super::element::{PathElement, WindingRule};
use super::iter::{FlatteningPathIter, PathIterator};
use crate::params::GeometryParams;

/// Signed crossing contribution of the segment `(x0, y0)-(x1, y1)` for a
/// ray cast from `(px, py)` towards +x.
///
/// A segment counts when `py` lies in the half-open span between its end
/// ordinates (the lower end included) and its crossing abscissa is
/// strictly greater than `px`. Horizontal segments never count.
#[must_use]
pub fn segment_point_crossings(px: f64, py: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> i32 {
    if py < y0 && py < y1 {
        return 0;
    }
    if py >= y0 && py >= y1 {
        return 0;
    }
    if px >= x0 && px >= x1 {
        return 0;
    }
    let dir = if y0 < y1 { 1 } else { -1 };
    if px < x0 && px < x1 {
        return dir;
    }
    let x_intercept = x0 + (py - y0) * (x1 - x0) / (y1 - y0);
    if px >= x_intercept { 0 } else { dir }
}

/// Straight segments of a path, with curves flattened.
///
/// With `auto_close` each subpath that does not end with an explicit close
/// gets a virtual closing segment back to its start; without it only the
/// explicit closes produce closing segments.
#[derive(Debug, Clone)]
pub struct Segments<I> {
    inner: FlatteningPathIter<I>,
    auto_close: bool,
    start: Option<Point2<f64>>,
    current: Option<Point2<f64>>,
    finished: bool,
}

impl<I: Iterator<Item = PathElement>> Segments<I> {
    /// Walk the segments of `iter`.
    #[must_use]
    pub fn new(iter: I, auto_close: bool, params: &GeometryParams) -> Self {
        Self {
            inner: FlatteningPathIter::with_params(iter, params),
            auto_close,
            start: None,
            current: None,
            finished: false,
        }
    }

    fn closing(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        if !self.auto_close {
            return None;
        }
        match (self.current, self.start) {
            (Some(c), Some(s)) if c != s => Some((c, s)),
            _ => None,
        }
    }
}

impl<I: Iterator<Item = PathElement>> Iterator for Segments<I> {
    type Item = (Point2<f64>, Point2<f64>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(element) = self.inner.next() else {
                if self.finished {
                    return None;
                }
                self.finished = true;
                return self.closing();
            };
            match element {
                PathElement::MoveTo { to } => {
                    let closing = self.closing();
                    self.start = Some(to);
                    self.current = Some(to);
                    if closing.is_some() {
                        return closing;
                    }
                }
                PathElement::LineTo { from, to } | PathElement::CurveTo { from, to, .. } => {
                    self.current = Some(to);
                    return Some((from, to));
                }
                PathElement::Close { from, to } => {
                    self.current = Some(to);
                    if from != to {
                        return Some((from, to));
                    }
                }
            }
        }
    }
}

/// Signed crossing count of the path boundary around `(px, py)`.
#[must_use]
pub fn point_crossings<I>(iter: I, px: f64, py: f64, params: &GeometryParams) -> i32
where
    I: Iterator<Item = PathElement>,
{
    Segments::new(iter, true, params)
        .map(|(a, b)| segment_point_crossings(px, py, a.x, a.y, b.x, b.y))
        .sum()
}

/// Check whether `(px, py)` lies inside the region described by the path,
/// using the iterator's own winding rule.
#[must_use]
pub fn contains_point<I: PathIterator>(iter: I, px: f64, py: f64) -> bool {
    contains_point_with(iter, px, py, &GeometryParams::default())
}

/// [`contains_point`] with explicit flattening parameters.
#[must_use]
pub fn contains_point_with<I: PathIterator>(
    iter: I,
    px: f64,
    py: f64,
    params: &GeometryParams,
) -> bool {
    let rule = iter.winding_rule();
    contains_point_with_rule(iter, rule, px, py, params)
}

/// Check containment under an explicit winding rule.
#[must_use]
pub fn contains_point_with_rule<I>(
    iter: I,
    rule: WindingRule,
    px: f64,
    py: f64,
    params: &GeometryParams,
) -> bool
where
    I: Iterator<Item = PathElement>,
{
    rule.is_inside(point_crossings(iter, px, py, params))
}

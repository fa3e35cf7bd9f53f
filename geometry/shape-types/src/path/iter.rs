//! Path iterators.
//!
//! Every shape describes its boundary through a [`PathIterator`]: a plain
//! [`Iterator`] over [`PathElement`]s that also knows the winding rule of
//! the region it encloses. Iterators are cheap cursors created on demand,
//! so calling `path_iter` twice yields two independent traversals.

use std::collections::VecDeque;

use nalgebra::{Affine2, Point2};
use smallvec::SmallVec;

use super::bezier::CubicSegment;
use super::element::{PathElement, WindingRule};
use crate::params::{CIRCLE_CTRL_FACTOR, GeometryParams};

/// An iterator over the elements of a shape boundary.
pub trait PathIterator: Iterator<Item = PathElement> {
    /// Winding rule of the region described by the elements.
    fn winding_rule(&self) -> WindingRule;
}

impl<I: PathIterator + ?Sized> PathIterator for Box<I> {
    fn winding_rule(&self) -> WindingRule {
        (**self).winding_rule()
    }
}

/// Boxed path iterator borrowed from a shape.
pub type BoxedPathIter<'a> = Box<dyn PathIterator + 'a>;

/// Box an iterator, applying `transform` when one is given.
pub(crate) fn boxed<'a, I>(iter: I, transform: Option<&Affine2<f64>>) -> BoxedPathIter<'a>
where
    I: PathIterator + 'a,
{
    match transform {
        Some(t) => Box::new(TransformedPathIter::new(iter, *t)),
        None => Box::new(iter),
    }
}

/// Axis-aligned ellipse boundary (circles included) as four cubic arcs.
///
/// Emits one move, four counter-clockwise quarter arcs starting at the
/// rightmost point, and a close.
#[derive(Debug, Clone)]
pub struct EllipsePathIter {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    index: u8,
}

impl EllipsePathIter {
    /// Iterate the ellipse centered at `(cx, cy)` with radii `rx`, `ry`.
    #[must_use]
    pub const fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self {
            cx,
            cy,
            rx,
            ry,
            index: 0,
        }
    }

    /// Quarter arc `q` (0..4), counter-clockwise from angle `q * 90°`.
    fn quarter(&self, q: u8) -> PathElement {
        let (cx, cy, rx, ry) = (self.cx, self.cy, self.rx, self.ry);
        let kx = rx * CIRCLE_CTRL_FACTOR;
        let ky = ry * CIRCLE_CTRL_FACTOR;
        let (from, ctrl1, ctrl2, to) = match q {
            0 => (
                (cx + rx, cy),
                (cx + rx, cy + ky),
                (cx + kx, cy + ry),
                (cx, cy + ry),
            ),
            1 => (
                (cx, cy + ry),
                (cx - kx, cy + ry),
                (cx - rx, cy + ky),
                (cx - rx, cy),
            ),
            2 => (
                (cx - rx, cy),
                (cx - rx, cy - ky),
                (cx - kx, cy - ry),
                (cx, cy - ry),
            ),
            _ => (
                (cx, cy - ry),
                (cx + kx, cy - ry),
                (cx + rx, cy - ky),
                (cx + rx, cy),
            ),
        };
        PathElement::CurveTo {
            from: Point2::new(from.0, from.1),
            ctrl1: Point2::new(ctrl1.0, ctrl1.1),
            ctrl2: Point2::new(ctrl2.0, ctrl2.1),
            to: Point2::new(to.0, to.1),
        }
    }
}

impl Iterator for EllipsePathIter {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        let start = Point2::new(self.cx + self.rx, self.cy);
        let element = match self.index {
            0 => PathElement::MoveTo { to: start },
            1..=4 => self.quarter(self.index - 1),
            5 => PathElement::Close {
                from: start,
                to: start,
            },
            _ => return None,
        };
        self.index += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = 6_usize.saturating_sub(usize::from(self.index));
        (left, Some(left))
    }
}

impl ExactSizeIterator for EllipsePathIter {}

impl PathIterator for EllipsePathIter {
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }
}

/// Polygon or polyline boundary.
///
/// Closed polygons end with a [`PathElement::Close`]; open ones (segments)
/// stop after their last line.
#[derive(Debug, Clone)]
pub struct PolygonPathIter {
    points: SmallVec<[Point2<f64>; 4]>,
    closed: bool,
    index: usize,
}

impl PolygonPathIter {
    /// Iterate a closed polygon.
    #[must_use]
    pub fn closed(points: &[Point2<f64>]) -> Self {
        Self {
            points: SmallVec::from_slice(points),
            closed: true,
            index: 0,
        }
    }

    /// Iterate an open polyline.
    #[must_use]
    pub fn open(points: &[Point2<f64>]) -> Self {
        Self {
            points: SmallVec::from_slice(points),
            closed: false,
            index: 0,
        }
    }
}

impl Iterator for PolygonPathIter {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        let n = self.points.len();
        let i = self.index;
        let element = if n == 0 {
            return None;
        } else if i == 0 {
            PathElement::MoveTo { to: self.points[0] }
        } else if i < n {
            PathElement::LineTo {
                from: self.points[i - 1],
                to: self.points[i],
            }
        } else if i == n && self.closed {
            PathElement::Close {
                from: self.points[n - 1],
                to: self.points[0],
            }
        } else {
            return None;
        };
        self.index += 1;
        Some(element)
    }
}

impl PathIterator for PolygonPathIter {
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }
}

/// Round rectangle boundary: four lines and four cubic corner arcs,
/// counter-clockwise from the bottom edge.
#[derive(Debug, Clone)]
pub struct RoundRectanglePathIter {
    elements: [PathElement; 10],
    index: usize,
}

impl RoundRectanglePathIter {
    /// Iterate the round rectangle bounded by `(minx, miny)-(maxx, maxy)`
    /// with corner radii `rx`, `ry`.
    #[must_use]
    pub fn new(minx: f64, miny: f64, maxx: f64, maxy: f64, rx: f64, ry: f64) -> Self {
        let kx = rx * (1.0 - CIRCLE_CTRL_FACTOR);
        let ky = ry * (1.0 - CIRCLE_CTRL_FACTOR);
        let p = Point2::new;
        let line = |from: Point2<f64>, to: Point2<f64>| PathElement::LineTo { from, to };
        let arc = |from: Point2<f64>, ctrl1: Point2<f64>, ctrl2: Point2<f64>, to: Point2<f64>| {
            PathElement::CurveTo {
                from,
                ctrl1,
                ctrl2,
                to,
            }
        };
        let start = p(minx + rx, miny);
        let b1 = p(maxx - rx, miny);
        let r0 = p(maxx, miny + ry);
        let r1 = p(maxx, maxy - ry);
        let t0 = p(maxx - rx, maxy);
        let t1 = p(minx + rx, maxy);
        let l0 = p(minx, maxy - ry);
        let l1 = p(minx, miny + ry);
        let elements = [
            PathElement::MoveTo { to: start },
            line(start, b1),
            arc(b1, p(maxx - kx, miny), p(maxx, miny + ky), r0),
            line(r0, r1),
            arc(r1, p(maxx, maxy - ky), p(maxx - kx, maxy), t0),
            line(t0, t1),
            arc(t1, p(minx + kx, maxy), p(minx, maxy - ky), l0),
            line(l0, l1),
            arc(l1, p(minx, miny + ky), p(minx + kx, miny), start),
            PathElement::Close {
                from: start,
                to: start,
            },
        ];
        Self { elements, index: 0 }
    }
}

impl Iterator for RoundRectanglePathIter {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        let e = self.elements.get(self.index).copied()?;
        self.index += 1;
        Some(e)
    }
}

impl PathIterator for RoundRectanglePathIter {
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }
}

/// Stored path elements.
#[derive(Debug, Clone)]
pub struct PathElements<'a> {
    inner: std::slice::Iter<'a, PathElement>,
    rule: WindingRule,
}

impl<'a> PathElements<'a> {
    /// Iterate stored elements under the given winding rule.
    #[must_use]
    pub fn new(elements: &'a [PathElement], rule: WindingRule) -> Self {
        Self {
            inner: elements.iter(),
            rule,
        }
    }
}

impl Iterator for PathElements<'_> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl PathIterator for PathElements<'_> {
    fn winding_rule(&self) -> WindingRule {
        self.rule
    }
}

/// Concatenation of several boundaries, as produced by a multishape.
pub struct ChainedPathIter<'a> {
    parts: std::vec::IntoIter<BoxedPathIter<'a>>,
    current: Option<BoxedPathIter<'a>>,
}

impl<'a> ChainedPathIter<'a> {
    /// Chain the given iterators in order.
    #[must_use]
    pub fn new(parts: Vec<BoxedPathIter<'a>>) -> Self {
        let mut parts = parts.into_iter();
        let current = parts.next();
        Self { parts, current }
    }
}

impl Iterator for ChainedPathIter<'_> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        loop {
            let current = self.current.as_mut()?;
            if let Some(e) = current.next() {
                return Some(e);
            }
            self.current = self.parts.next();
        }
    }
}

impl PathIterator for ChainedPathIter<'_> {
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }
}

/// Elements of another iterator mapped through an affine transform.
#[derive(Debug, Clone)]
pub struct TransformedPathIter<I> {
    inner: I,
    transform: Affine2<f64>,
}

impl<I> TransformedPathIter<I> {
    /// Wrap `inner`, transforming every element.
    #[must_use]
    pub const fn new(inner: I, transform: Affine2<f64>) -> Self {
        Self { inner, transform }
    }
}

impl<I: PathIterator> Iterator for TransformedPathIter<I> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        self.inner.next().map(|e| e.transformed(&self.transform))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: PathIterator> PathIterator for TransformedPathIter<I> {
    fn winding_rule(&self) -> WindingRule {
        self.inner.winding_rule()
    }
}

/// Elements of another iterator with every curve replaced by lines.
///
/// Curves are subdivided until each piece lies within the configured
/// flatness of its chord, or the subdivision depth cap is hit.
#[derive(Debug, Clone)]
pub struct FlatteningPathIter<I> {
    inner: I,
    flatness: f64,
    max_depth: u32,
    pending: VecDeque<PathElement>,
}

impl<I> FlatteningPathIter<I> {
    /// Flatten with the default parameters.
    #[must_use]
    pub fn new(inner: I) -> Self {
        Self::with_params(inner, &GeometryParams::default())
    }

    /// Flatten with explicit parameters.
    #[must_use]
    pub fn with_params(inner: I, params: &GeometryParams) -> Self {
        Self {
            inner,
            flatness: params.flatness,
            max_depth: params.max_subdivision_depth,
            pending: VecDeque::new(),
        }
    }
}

impl<I: Iterator<Item = PathElement>> Iterator for FlatteningPathIter<I> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        if let Some(e) = self.pending.pop_front() {
            return Some(e);
        }
        match self.inner.next()? {
            PathElement::CurveTo {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                let mut points = Vec::new();
                CubicSegment::new(from, ctrl1, ctrl2, to).flatten_into(
                    self.flatness,
                    self.max_depth,
                    &mut points,
                );
                let mut prev = from;
                for p in points {
                    self.pending.push_back(PathElement::LineTo { from: prev, to: p });
                    prev = p;
                }
                self.pending.pop_front()
            }
            other => Some(other),
        }
    }
}

impl<I: PathIterator> PathIterator for FlatteningPathIter<I> {
    fn winding_rule(&self) -> WindingRule {
        self.inner.winding_rule()
    }
}

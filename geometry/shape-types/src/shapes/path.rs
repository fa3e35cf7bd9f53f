//! General path made of lines and cubic curves.
//!
//! A path is built command by command, like a pen: [`Path::move_to`] starts
//! a subpath, [`Path::line_to`], [`Path::quad_to`] and [`Path::curve_to`]
//! extend it from the current point, and [`Path::close_path`] joins it back
//! to its start. Any number of subpaths may follow each other.
//!
//! # Region and boundary
//!
//! Point containment looks at the enclosed region: every open subpath is
//! virtually closed back to its start and the crossing count is classified
//! by the path's [`WindingRule`]. Boundary queries (intersection, closest
//! point, rectangle containment) only treat the path as a region once every
//! subpath is explicitly closed; until then it is a polyline.

use nalgebra::{Affine2, Point2, Vector2};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Rectangle;
use crate::error::ShapeError;
use crate::kernel::{farther, nearer, rectangle as kr, segment as ks};
use crate::params::GeometryParams;
use crate::path::bezier::CubicSegment;
use crate::path::crossing::{self, Segments};
use crate::path::iter::boxed;
use crate::path::{
    BoxedPathIter, FlatteningPathIter, PathElement, PathElementType, PathElements, PathIterator,
    WindingRule,
};
use crate::shape::ShapeRef;
use crate::traits::Shape2d;

/// An ordered list of path elements under a fixed winding rule.
///
/// # Example
///
/// ```
/// use shape_types::{Path, Point2, Shape2d, WindingRule};
///
/// let mut path = Path::with_winding_rule(WindingRule::EvenOdd);
/// path.move_to(Point2::new(0.0, 0.0));
/// path.line_to(Point2::new(4.0, 0.0)).unwrap();
/// path.line_to(Point2::new(4.0, 4.0)).unwrap();
/// path.line_to(Point2::new(0.0, 4.0)).unwrap();
/// path.close_path();
///
/// assert!(path.is_closed());
/// assert!(path.contains_point(&Point2::new(2.0, 2.0)));
/// assert!(!path.contains_point(&Point2::new(5.0, 2.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    elements: Vec<PathElement>,
    winding_rule: WindingRule,
}

impl Path {
    /// Empty path with the default [`WindingRule::NonZero`] rule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty path with the given winding rule.
    #[must_use]
    pub fn with_winding_rule(winding_rule: WindingRule) -> Self {
        Self {
            elements: Vec::new(),
            winding_rule,
        }
    }

    /// Path holding every element of `iter`, under its winding rule.
    ///
    /// Consecutive moves collapse and repeated closes are dropped, as with
    /// the builder methods.
    pub fn from_path_iter<I: PathIterator>(iter: I) -> Self {
        let mut path = Self::with_winding_rule(iter.winding_rule());
        for element in iter {
            path.push_element(element);
        }
        path
    }

    /// The winding rule.
    #[must_use]
    pub const fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    /// The stored elements.
    #[must_use]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Number of stored elements.
    #[must_use]
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Point the next segment would start from.
    #[must_use]
    pub fn current_point(&self) -> Option<Point2<f64>> {
        self.elements.last().map(PathElement::to_point)
    }

    /// Start of the first subpath.
    #[must_use]
    pub fn first_point(&self) -> Option<Point2<f64>> {
        self.elements.first().map(PathElement::to_point)
    }

    fn subpath_start(&self) -> Option<Point2<f64>> {
        self.elements.iter().rev().find_map(|e| match e {
            PathElement::MoveTo { to } => Some(*to),
            _ => None,
        })
    }

    fn require_current_point(&self) -> crate::Result<Point2<f64>> {
        self.current_point().ok_or_else(|| {
            debug!("path command issued without a current point");
            ShapeError::NoCurrentPoint
        })
    }

    fn push_element(&mut self, element: PathElement) {
        let last = self.elements.last().map(PathElement::kind);
        match (last, element.kind()) {
            (Some(PathElementType::MoveTo), PathElementType::MoveTo) => {
                if let Some(slot) = self.elements.last_mut() {
                    *slot = element;
                }
            }
            (Some(PathElementType::Close) | None, PathElementType::Close) => {}
            _ => self.elements.push(element),
        }
    }

    /// Start a new subpath at `p`.
    ///
    /// A move right after another move replaces it.
    pub fn move_to(&mut self, p: Point2<f64>) {
        self.push_element(PathElement::MoveTo { to: p });
    }

    /// Straight segment from the current point to `p`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NoCurrentPoint`] before the first
    /// [`move_to`](Self::move_to).
    pub fn line_to(&mut self, p: Point2<f64>) -> crate::Result<()> {
        let from = self.require_current_point()?;
        self.push_element(PathElement::LineTo { from, to: p });
        Ok(())
    }

    /// Quadratic curve from the current point to `p`, stored as its exact
    /// cubic elevation.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NoCurrentPoint`] before the first
    /// [`move_to`](Self::move_to).
    pub fn quad_to(&mut self, ctrl: Point2<f64>, p: Point2<f64>) -> crate::Result<()> {
        let from = self.require_current_point()?;
        let cubic = CubicSegment::from_quadratic(from, ctrl, p);
        self.push_element(PathElement::CurveTo {
            from,
            ctrl1: cubic.p1,
            ctrl2: cubic.p2,
            to: p,
        });
        Ok(())
    }

    /// Cubic curve from the current point to `p`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NoCurrentPoint`] before the first
    /// [`move_to`](Self::move_to).
    pub fn curve_to(
        &mut self,
        ctrl1: Point2<f64>,
        ctrl2: Point2<f64>,
        p: Point2<f64>,
    ) -> crate::Result<()> {
        let from = self.require_current_point()?;
        self.push_element(PathElement::CurveTo {
            from,
            ctrl1,
            ctrl2,
            to: p,
        });
        Ok(())
    }

    /// Close the current subpath. Closing twice, or closing a path that
    /// has nothing drawn since its last move, does nothing.
    pub fn close_path(&mut self) {
        if matches!(
            self.elements.last(),
            None | Some(PathElement::MoveTo { .. } | PathElement::Close { .. })
        ) {
            return;
        }
        if let (Some(from), Some(to)) = (self.current_point(), self.subpath_start()) {
            self.elements.push(PathElement::Close { from, to });
        }
    }

    /// Move the end point of the last drawing command (or the last move).
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NoCurrentPoint`] on an empty path.
    pub fn set_last_point(&mut self, p: Point2<f64>) -> crate::Result<()> {
        let index = self
            .elements
            .iter()
            .rposition(|e| !matches!(e, PathElement::Close { .. }))
            .ok_or(ShapeError::NoCurrentPoint)?;
        match &mut self.elements[index] {
            PathElement::MoveTo { to }
            | PathElement::LineTo { to, .. }
            | PathElement::CurveTo { to, .. } => *to = p,
            PathElement::Close { .. } => {}
        }
        if let Some(PathElement::Close { from, .. }) = self.elements.get_mut(index + 1) {
            *from = p;
        }
        Ok(())
    }

    /// Remove and return the last element.
    pub fn remove_last(&mut self) -> Option<PathElement> {
        self.elements.pop()
    }

    /// Every distinct point the elements carry: move and segment end
    /// points and curve control points, in order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2<f64>> {
        let mut out = Vec::with_capacity(self.elements.len() * 2);
        for e in &self.elements {
            match *e {
                PathElement::MoveTo { to } | PathElement::LineTo { to, .. } => out.push(to),
                PathElement::CurveTo {
                    ctrl1, ctrl2, to, ..
                } => out.extend([ctrl1, ctrl2, to]),
                PathElement::Close { .. } => {}
            }
        }
        out
    }

    /// Whether every subpath with something drawn ends with a close.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let mut drawn = false;
        let mut open = false;
        for e in &self.elements {
            match e {
                PathElement::MoveTo { .. } => {}
                PathElement::LineTo { .. } | PathElement::CurveTo { .. } => {
                    drawn = true;
                    open = true;
                }
                PathElement::Close { .. } => open = false,
            }
        }
        drawn && !open
    }

    /// Whether the path is a single open chain of straight segments.
    #[must_use]
    pub fn is_polyline(&self) -> bool {
        match self.elements.split_first() {
            Some((PathElement::MoveTo { .. }, rest)) => {
                !rest.is_empty() && rest.iter().all(|e| matches!(e, PathElement::LineTo { .. }))
            }
            _ => false,
        }
    }

    /// Whether the path holds at least one curve.
    #[must_use]
    pub fn is_curved(&self) -> bool {
        self.elements
            .iter()
            .any(|e| matches!(e, PathElement::CurveTo { .. }))
    }

    /// Length of the drawn boundary, curves flattened with the default
    /// parameters. Open subpaths are not closed.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.boundary_segments(&GeometryParams::default())
            .map(|(a, b)| nalgebra::distance(&a, &b))
            .sum()
    }

    /// Apply an affine transform to every point in place.
    pub fn transform(&mut self, transform: &Affine2<f64>) {
        for e in &mut self.elements {
            *e = e.transformed(transform);
        }
        debug!(elements = self.elements.len(), "transformed path");
    }

    /// Iterator over the stored elements.
    #[must_use]
    pub fn iter(&self) -> PathElements<'_> {
        PathElements::new(&self.elements, self.winding_rule)
    }

    /// Iterator over the elements with every curve flattened into lines.
    #[must_use]
    pub fn flattened_iter(&self) -> FlatteningPathIter<PathElements<'_>> {
        FlatteningPathIter::new(self.iter())
    }

    /// Point containment with explicit flattening parameters.
    #[must_use]
    pub fn contains_point_with(&self, p: &Point2<f64>, params: &GeometryParams) -> bool {
        crossing::contains_point_with(self.iter(), p.x, p.y, params)
    }

    /// Drawn segments; open subpaths stay open.
    pub(crate) fn boundary_segments(
        &self,
        params: &GeometryParams,
    ) -> Segments<PathElements<'_>> {
        Segments::new(self.iter(), false, params)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = PathElement;
    type IntoIter = PathElements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Shape2d for Path {
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Path(self)
    }

    fn is_empty(&self) -> bool {
        if !self.elements.iter().any(PathElement::is_drawable) {
            return true;
        }
        self.points().windows(2).all(|w| w[0] == w[1])
    }

    fn bounding_box(&self) -> Rectangle {
        let mut bounds: Option<Rectangle> = None;
        let mut grow = |minx: f64, miny: f64, maxx: f64, maxy: f64| {
            let r = Rectangle::from_bounds((minx, miny, maxx, maxy));
            bounds = Some(bounds.map_or(r, |b| b.union(&r)));
        };
        for e in &self.elements {
            match *e {
                PathElement::MoveTo { to } | PathElement::LineTo { to, .. } => {
                    grow(to.x, to.y, to.x, to.y);
                }
                PathElement::CurveTo {
                    from,
                    ctrl1,
                    ctrl2,
                    to,
                } => {
                    let (minx, miny, maxx, maxy) =
                        CubicSegment::new(from, ctrl1, ctrl2, to).bounds();
                    grow(minx, miny, maxx, maxy);
                }
                PathElement::Close { .. } => {}
            }
        }
        bounds.unwrap_or_default()
    }

    fn contains_point(&self, p: &Point2<f64>) -> bool {
        crossing::contains_point(self.iter(), p.x, p.y)
    }

    fn contains_rectangle(&self, r: &Rectangle) -> bool {
        if !self.is_closed() || !r.corners().iter().all(|c| self.contains_point(c)) {
            return false;
        }
        let (minx, miny, maxx, maxy) = r.bounds();
        !self
            .boundary_segments(&GeometryParams::default())
            .any(|(a, b)| {
                kr::intersects_open_rectangle_segment(minx, miny, maxx, maxy, a.x, a.y, b.x, b.y)
            })
    }

    fn closest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        if self.is_closed() && self.contains_point(p) {
            return *p;
        }
        self.boundary_segments(&GeometryParams::default())
            .map(|(a, b)| ks::closest_point_segment_point(a.x, a.y, b.x, b.y, p.x, p.y))
            .reduce(|best, q| nearer(p, best, q))
            .or_else(|| self.first_point())
            .unwrap_or_else(Point2::origin)
    }

    fn farthest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        self.boundary_segments(&GeometryParams::default())
            .map(|(a, b)| farther(p, a, b))
            .reduce(|best, q| farther(p, best, q))
            .or_else(|| self.first_point())
            .unwrap_or_else(Point2::origin)
    }

    fn path_iter(&self, transform: Option<&Affine2<f64>>) -> BoxedPathIter<'_> {
        boxed(self.iter(), transform)
    }

    fn translate(&mut self, v: &Vector2<f64>) {
        for e in &mut self.elements {
            *e = e.map(|p| p + v);
        }
    }

    fn clear(&mut self) {
        self.elements.clear();
    }
}

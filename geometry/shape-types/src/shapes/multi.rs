//! Union of heterogeneous shapes.

use nalgebra::{Affine2, Point2, Vector2};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Rectangle;
use crate::error::ShapeError;
use crate::kernel::{farther, nearer};
use crate::path::{BoxedPathIter, ChainedPathIter};
use crate::shape::{Shape, ShapeRef};
use crate::traits::Shape2d;

/// An ordered collection of shapes queried as their union.
///
/// A point is contained when any child contains it, and the multishape
/// intersects another shape when any child does. Closest and farthest
/// points come from the single best child, the first one winning ties, so
/// the whole distance family is evaluated against that child.
///
/// # Example
///
/// ```
/// use shape_types::{Circle, MultiShape, Point2, Rectangle, Shape2d};
///
/// let mut multi = MultiShape::new();
/// multi.push(Circle::new(Point2::new(0.0, 0.0), 1.0).unwrap());
/// multi.push(Rectangle::from_xywh(5.0, 0.0, 2.0, 2.0).unwrap());
///
/// assert!(multi.contains_point(&Point2::new(6.0, 1.0)));
/// assert!((multi.distance(&Point2::new(3.0, 0.0)) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiShape {
    shapes: Vec<Shape>,
}

impl MultiShape {
    /// Empty multishape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Multishape holding the given children in order.
    #[must_use]
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Append a child.
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Remove and return the child at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::IndexOutOfBounds`] when `index >= len`.
    pub fn remove(&mut self, index: usize) -> crate::Result<Shape> {
        if index >= self.shapes.len() {
            return Err(ShapeError::IndexOutOfBounds {
                index,
                len: self.shapes.len(),
            });
        }
        Ok(self.shapes.remove(index))
    }

    /// Child at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Mutable child at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// The children.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Iterate the children.
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Iterate the children mutably.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Shape> {
        self.shapes.iter_mut()
    }

    /// Number of children.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

impl FromIterator<Shape> for MultiShape {
    fn from_iter<T: IntoIterator<Item = Shape>>(iter: T) -> Self {
        Self::from_shapes(iter.into_iter().collect())
    }
}

impl Extend<Shape> for MultiShape {
    fn extend<T: IntoIterator<Item = Shape>>(&mut self, iter: T) {
        self.shapes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a MultiShape {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Shape2d for MultiShape {
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::Multi(self)
    }

    fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn bounding_box(&self) -> Rectangle {
        self.shapes
            .iter()
            .map(Shape2d::bounding_box)
            .reduce(|a, b| a.union(&b))
            .unwrap_or_default()
    }

    fn contains_point(&self, p: &Point2<f64>) -> bool {
        self.shapes.iter().any(|s| s.contains_point(p))
    }

    fn contains_rectangle(&self, r: &Rectangle) -> bool {
        self.shapes.iter().any(|s| s.contains_rectangle(r))
    }

    fn closest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        self.shapes
            .iter()
            .map(|s| s.closest_point_to(p))
            .reduce(|best, q| nearer(p, best, q))
            .unwrap_or_else(|| self.bounding_box().closest_point_to(p))
    }

    fn farthest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        self.shapes
            .iter()
            .map(|s| s.farthest_point_to(p))
            .reduce(|best, q| farther(p, best, q))
            .unwrap_or_else(|| self.bounding_box().farthest_point_to(p))
    }

    fn path_iter(&self, transform: Option<&Affine2<f64>>) -> BoxedPathIter<'_> {
        let parts = self.shapes.iter().map(|s| s.path_iter(transform)).collect();
        Box::new(ChainedPathIter::new(parts))
    }

    fn translate(&mut self, v: &Vector2<f64>) {
        for shape in &mut self.shapes {
            shape.translate(v);
        }
    }

    fn clear(&mut self) {
        debug!(children = self.shapes.len(), "clearing multishape");
        self.shapes.clear();
    }
}

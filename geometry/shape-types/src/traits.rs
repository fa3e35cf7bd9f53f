//! The common query contract of every shape.

use nalgebra::{Affine2, Point2, Vector2};

use crate::intersect;
use crate::kernel;
use crate::path::BoxedPathIter;
use crate::shape::ShapeRef;
use crate::shapes::{Path, Rectangle};

/// Queries shared by all 2D shapes.
///
/// The trait is object safe: shape-to-shape queries take `&dyn Shape2d`,
/// so any pair of shape kinds can be combined.
///
/// Distances are measured to the closest point found by
/// [`closest_point_to`](Shape2d::closest_point_to). The L1 and L∞
/// distances are evaluated at that Euclidean closest point, so they are not
/// necessarily the smallest L1 or L∞ distance to the shape.
///
/// # Example
///
/// ```
/// use shape_types::{Circle, Point2, Shape2d};
///
/// let circle = Circle::new(Point2::new(5.0, 8.0), 5.0).unwrap();
/// assert!(circle.contains_point(&Point2::new(9.0, 11.0)));
/// assert!(!circle.contains_point(&Point2::new(9.0, 12.0)));
/// assert!((circle.distance(&Point2::new(5.0, 0.0)) - 3.0).abs() < 1e-12);
/// ```
pub trait Shape2d {
    /// Borrowed view used for pairwise dispatch.
    fn shape_ref(&self) -> ShapeRef<'_>;

    /// Whether the shape is in its degenerate (empty) state.
    fn is_empty(&self) -> bool;

    /// Tight axis-aligned bounding box.
    fn bounding_box(&self) -> Rectangle;

    /// Check whether the point lies in the shape; boundaries are inclusive.
    fn contains_point(&self, p: &Point2<f64>) -> bool;

    /// Check whether the shape contains the whole rectangle.
    fn contains_rectangle(&self, r: &Rectangle) -> bool;

    /// Point of the shape nearest to `p`; `p` itself when it is contained.
    fn closest_point_to(&self, p: &Point2<f64>) -> Point2<f64>;

    /// Point of the shape farthest from `p`.
    fn farthest_point_to(&self, p: &Point2<f64>) -> Point2<f64>;

    /// Fresh iterator over the boundary, optionally transformed.
    fn path_iter(&self, transform: Option<&Affine2<f64>>) -> BoxedPathIter<'_>;

    /// Move the shape by `v`.
    fn translate(&mut self, v: &Vector2<f64>);

    /// Reset the shape to its empty state.
    fn clear(&mut self);

    /// Translated copy.
    fn translated(&self, v: &Vector2<f64>) -> Self
    where
        Self: Sized + Clone,
    {
        let mut out = self.clone();
        out.translate(v);
        out
    }

    /// Squared Euclidean distance to `p`.
    fn distance_squared(&self, p: &Point2<f64>) -> f64 {
        let c = self.closest_point_to(p);
        kernel::distance_squared(c.x, c.y, p.x, p.y)
    }

    /// Euclidean distance to `p`.
    fn distance(&self, p: &Point2<f64>) -> f64 {
        self.distance_squared(p).sqrt()
    }

    /// L1 distance to `p`, evaluated at the Euclidean closest point.
    fn distance_l1(&self, p: &Point2<f64>) -> f64 {
        let c = self.closest_point_to(p);
        kernel::distance_l1(c.x, c.y, p.x, p.y)
    }

    /// L∞ distance to `p`, evaluated at the Euclidean closest point.
    fn distance_linf(&self, p: &Point2<f64>) -> f64 {
        let c = self.closest_point_to(p);
        kernel::distance_linf(c.x, c.y, p.x, p.y)
    }

    /// Check whether the two shapes share at least one point.
    ///
    /// Symmetric for every pair of shape kinds.
    fn intersects(&self, other: &dyn Shape2d) -> bool {
        intersect::intersects(self.shape_ref(), other.shape_ref())
    }

    /// Euclidean distance to another shape; zero when they intersect.
    fn distance_to_shape(&self, other: &dyn Shape2d) -> f64 {
        intersect::closest_points(self.shape_ref(), other.shape_ref()).2
    }

    /// Point of this shape nearest to another shape.
    ///
    /// When the shapes intersect the point is common to both.
    fn closest_point_to_shape(&self, other: &dyn Shape2d) -> Point2<f64> {
        intersect::closest_points(self.shape_ref(), other.shape_ref()).0
    }

    /// The boundary as a standalone path, optionally transformed.
    fn to_path(&self, transform: Option<&Affine2<f64>>) -> Path {
        Path::from_path_iter(self.path_iter(transform))
    }
}

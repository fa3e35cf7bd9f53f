//! Rectangle with elliptical corners.

use nalgebra::{Affine2, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Rectangle;
use crate::error::check_non_negative;
use crate::kernel::round_rectangle::RoundRect;
use crate::path::BoxedPathIter;
use crate::path::iter::{RoundRectanglePathIter, boxed};
use crate::shape::ShapeRef;
use crate::traits::Shape2d;

/// An axis-aligned rectangle whose corners are quarter ellipses.
///
/// `arc_width` and `arc_height` are the full sizes of the corner ellipses.
/// The stored values are kept as given; the effective arcs never exceed the
/// frame size.
///
/// # Example
///
/// ```
/// use shape_types::{Point2, RoundRectangle, Shape2d};
///
/// let r = RoundRectangle::from_xywh(0.0, 0.0, 10.0, 6.0, 4.0, 4.0).unwrap();
/// assert!(r.contains_point(&Point2::new(5.0, 0.0)));
/// assert!(!r.contains_point(&Point2::new(0.1, 0.1)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundRectangle {
    frame: Rectangle,
    arc_width: f64,
    arc_height: f64,
}

impl RoundRectangle {
    /// Round rectangle with the given frame and arc sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// for a negative arc size.
    pub fn new(frame: Rectangle, arc_width: f64, arc_height: f64) -> crate::Result<Self> {
        Ok(Self {
            frame,
            arc_width: check_non_negative("arc_width", arc_width)?,
            arc_height: check_non_negative("arc_height", arc_height)?,
        })
    }

    /// Round rectangle with the given minimum corner, size and arc sizes.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// for a negative size or arc size.
    pub fn from_xywh(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        arc_width: f64,
        arc_height: f64,
    ) -> crate::Result<Self> {
        Self::new(Rectangle::from_xywh(x, y, width, height)?, arc_width, arc_height)
    }

    /// The frame rectangle.
    #[must_use]
    pub const fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Replace the frame.
    pub fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
    }

    /// Effective arc width, at most the frame width.
    #[must_use]
    pub fn arc_width(&self) -> f64 {
        self.arc_width.min(self.frame.width())
    }

    /// Effective arc height, at most the frame height.
    #[must_use]
    pub fn arc_height(&self) -> f64 {
        self.arc_height.min(self.frame.height())
    }

    /// Set the arc width.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// for a negative value.
    pub fn set_arc_width(&mut self, arc_width: f64) -> crate::Result<()> {
        self.arc_width = check_non_negative("arc_width", arc_width)?;
        Ok(())
    }

    /// Set the arc height.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NegativeValue`](crate::ShapeError::NegativeValue)
    /// for a negative value.
    pub fn set_arc_height(&mut self, arc_height: f64) -> crate::Result<()> {
        self.arc_height = check_non_negative("arc_height", arc_height)?;
        Ok(())
    }

    /// Resolved kernel geometry.
    #[must_use]
    pub fn geometry(&self) -> RoundRect {
        let (minx, miny, maxx, maxy) = self.frame.bounds();
        RoundRect::new(minx, miny, maxx, maxy, self.arc_width, self.arc_height)
    }
}

impl Shape2d for RoundRectangle {
    fn shape_ref(&self) -> ShapeRef<'_> {
        ShapeRef::RoundRectangle(self)
    }

    fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    fn bounding_box(&self) -> Rectangle {
        self.frame
    }

    fn contains_point(&self, p: &Point2<f64>) -> bool {
        self.geometry().contains_point(p.x, p.y)
    }

    fn contains_rectangle(&self, r: &Rectangle) -> bool {
        let (minx, miny, maxx, maxy) = r.bounds();
        self.geometry().contains_rectangle(minx, miny, maxx, maxy)
    }

    fn closest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        self.geometry().closest_point(p.x, p.y)
    }

    fn farthest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        self.geometry().farthest_point(p.x, p.y)
    }

    fn path_iter(&self, transform: Option<&Affine2<f64>>) -> BoxedPathIter<'_> {
        let (minx, miny, maxx, maxy) = self.frame.bounds();
        let g = self.geometry();
        boxed(
            RoundRectanglePathIter::new(minx, miny, maxx, maxy, g.rx, g.ry),
            transform,
        )
    }

    fn translate(&mut self, v: &Vector2<f64>) {
        self.frame.translate(v);
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

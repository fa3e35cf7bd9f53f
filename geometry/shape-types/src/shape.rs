//! Closed set of shape kinds.
//!
//! [`Shape`] owns any one shape and is what a [`MultiShape`] stores.
//! [`ShapeRef`] borrows one and is what pairwise queries dispatch on.

use nalgebra::{Affine2, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::path::BoxedPathIter;
use crate::shapes::{
    Circle, Ellipse, MultiShape, OrientedRectangle, Parallelogram, Path, Rectangle,
    RoundRectangle, Segment, Triangle,
};
use crate::traits::Shape2d;

/// Any shape, owned.
///
/// # Example
///
/// ```
/// use shape_types::{Circle, Point2, Segment, Shape, Shape2d};
///
/// let shapes: Vec<Shape> = vec![
///     Circle::new(Point2::new(0.0, 0.0), 1.0).unwrap().into(),
///     Segment::new(Point2::new(0.0, 2.0), Point2::new(3.0, 2.0)).into(),
/// ];
/// assert!(shapes[0].intersects(&shapes[0]));
/// assert!(!shapes[0].intersects(&shapes[1]));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Shape {
    /// Disk.
    Circle(Circle),
    /// Axis-aligned ellipse.
    Ellipse(Ellipse),
    /// Axis-aligned rectangle.
    Rectangle(Rectangle),
    /// Axis-aligned rectangle with elliptical corners.
    RoundRectangle(RoundRectangle),
    /// Line segment.
    Segment(Segment),
    /// Triangle.
    Triangle(Triangle),
    /// Rectangle with arbitrary orientation.
    OrientedRectangle(OrientedRectangle),
    /// Parallelogram.
    Parallelogram(Parallelogram),
    /// General path.
    Path(Path),
    /// Union of shapes.
    Multi(MultiShape),
}

/// Any shape, borrowed.
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    /// Disk.
    Circle(&'a Circle),
    /// Axis-aligned ellipse.
    Ellipse(&'a Ellipse),
    /// Axis-aligned rectangle.
    Rectangle(&'a Rectangle),
    /// Axis-aligned rectangle with elliptical corners.
    RoundRectangle(&'a RoundRectangle),
    /// Line segment.
    Segment(&'a Segment),
    /// Triangle.
    Triangle(&'a Triangle),
    /// Rectangle with arbitrary orientation.
    OrientedRectangle(&'a OrientedRectangle),
    /// Parallelogram.
    Parallelogram(&'a Parallelogram),
    /// General path.
    Path(&'a Path),
    /// Union of shapes.
    Multi(&'a MultiShape),
}

impl<'a> ShapeRef<'a> {
    /// The borrowed shape as a trait object.
    #[must_use]
    pub fn as_dyn(self) -> &'a dyn Shape2d {
        match self {
            Self::Circle(s) => s,
            Self::Ellipse(s) => s,
            Self::Rectangle(s) => s,
            Self::RoundRectangle(s) => s,
            Self::Segment(s) => s,
            Self::Triangle(s) => s,
            Self::OrientedRectangle(s) => s,
            Self::Parallelogram(s) => s,
            Self::Path(s) => s,
            Self::Multi(s) => s,
        }
    }

    /// Short name of the shape kind.
    #[must_use]
    pub const fn kind_name(self) -> &'static str {
        match self {
            Self::Circle(_) => "circle",
            Self::Ellipse(_) => "ellipse",
            Self::Rectangle(_) => "rectangle",
            Self::RoundRectangle(_) => "round rectangle",
            Self::Segment(_) => "segment",
            Self::Triangle(_) => "triangle",
            Self::OrientedRectangle(_) => "oriented rectangle",
            Self::Parallelogram(_) => "parallelogram",
            Self::Path(_) => "path",
            Self::Multi(_) => "multishape",
        }
    }

    /// Owned copy of the borrowed shape.
    #[must_use]
    pub fn to_shape(self) -> Shape {
        match self {
            Self::Circle(s) => Shape::Circle(*s),
            Self::Ellipse(s) => Shape::Ellipse(*s),
            Self::Rectangle(s) => Shape::Rectangle(*s),
            Self::RoundRectangle(s) => Shape::RoundRectangle(*s),
            Self::Segment(s) => Shape::Segment(*s),
            Self::Triangle(s) => Shape::Triangle(*s),
            Self::OrientedRectangle(s) => Shape::OrientedRectangle(*s),
            Self::Parallelogram(s) => Shape::Parallelogram(*s),
            Self::Path(s) => Shape::Path(s.clone()),
            Self::Multi(s) => Shape::Multi(s.clone()),
        }
    }
}

impl Shape {
    /// The shape as a trait object.
    #[must_use]
    pub fn as_dyn(&self) -> &dyn Shape2d {
        match self {
            Self::Circle(s) => s,
            Self::Ellipse(s) => s,
            Self::Rectangle(s) => s,
            Self::RoundRectangle(s) => s,
            Self::Segment(s) => s,
            Self::Triangle(s) => s,
            Self::OrientedRectangle(s) => s,
            Self::Parallelogram(s) => s,
            Self::Path(s) => s,
            Self::Multi(s) => s,
        }
    }

    /// The shape as a mutable trait object.
    pub fn as_dyn_mut(&mut self) -> &mut dyn Shape2d {
        match self {
            Self::Circle(s) => s,
            Self::Ellipse(s) => s,
            Self::Rectangle(s) => s,
            Self::RoundRectangle(s) => s,
            Self::Segment(s) => s,
            Self::Triangle(s) => s,
            Self::OrientedRectangle(s) => s,
            Self::Parallelogram(s) => s,
            Self::Path(s) => s,
            Self::Multi(s) => s,
        }
    }
}

macro_rules! impl_shape_conversions {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(shape: $ty) -> Self {
                    Self::$variant(shape)
                }
            }

            impl<'a> From<&'a $ty> for ShapeRef<'a> {
                fn from(shape: &'a $ty) -> Self {
                    Self::$variant(shape)
                }
            }
        )*
    };
}

impl_shape_conversions!(
    Circle(Circle),
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    RoundRectangle(RoundRectangle),
    Segment(Segment),
    Triangle(Triangle),
    OrientedRectangle(OrientedRectangle),
    Parallelogram(Parallelogram),
    Path(Path),
    Multi(MultiShape),
);

impl Shape2d for Shape {
    fn shape_ref(&self) -> ShapeRef<'_> {
        self.as_dyn().shape_ref()
    }

    fn is_empty(&self) -> bool {
        self.as_dyn().is_empty()
    }

    fn bounding_box(&self) -> Rectangle {
        self.as_dyn().bounding_box()
    }

    fn contains_point(&self, p: &Point2<f64>) -> bool {
        self.as_dyn().contains_point(p)
    }

    fn contains_rectangle(&self, r: &Rectangle) -> bool {
        self.as_dyn().contains_rectangle(r)
    }

    fn closest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        self.as_dyn().closest_point_to(p)
    }

    fn farthest_point_to(&self, p: &Point2<f64>) -> Point2<f64> {
        self.as_dyn().farthest_point_to(p)
    }

    fn path_iter(&self, transform: Option<&Affine2<f64>>) -> BoxedPathIter<'_> {
        self.as_dyn().path_iter(transform)
    }

    fn translate(&mut self, v: &Vector2<f64>) {
        self.as_dyn_mut().translate(v);
    }

    fn clear(&mut self) {
        self.as_dyn_mut().clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_ref() {
        let shapes: Vec<Shape> = vec![
            Circle::new(Point2::new(1.0, 2.0), 3.0).unwrap().into(),
            Triangle::new(Point2::origin(), Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)).into(),
            MultiShape::from_shapes(vec![Segment::default().into()]).into(),
        ];
        for s in &shapes {
            assert_eq!(&s.shape_ref().to_shape(), s);
        }
        assert_eq!(shapes[2].shape_ref().kind_name(), "multishape");
    }

    #[test]
    fn test_delegation() {
        let mut s = Shape::from(Rectangle::from_xywh(0.0, 0.0, 2.0, 2.0).unwrap());
        assert!(s.contains_point(&Point2::new(1.0, 1.0)));
        s.translate(&Vector2::new(10.0, 0.0));
        assert!(!s.contains_point(&Point2::new(1.0, 1.0)));
        assert_eq!(s.bounding_box().min(), Point2::new(10.0, 0.0));
        let moved = s.translated(&Vector2::new(-10.0, 0.0));
        assert_eq!(moved.bounding_box().min(), Point2::origin());
        s.clear();
        assert!(s.is_empty());
    }
}

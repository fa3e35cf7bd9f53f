//! Exact 2D shape primitives for geometry processing.
//!
//! This crate provides closed 2D shapes with a shared query contract:
//!
//! - [`Circle`] - Disk given by center and radius
//! - [`Ellipse`] - Axis-aligned ellipse inscribed in a frame rectangle
//! - [`Rectangle`] - Axis-aligned rectangle
//! - [`RoundRectangle`] - Axis-aligned rectangle with elliptical corners
//! - [`Segment`] - Line segment
//! - [`Triangle`] - Triangle in either orientation
//! - [`OrientedRectangle`] - Rectangle with an arbitrary unit axis
//! - [`Parallelogram`] - Center, two unit axes and two extents
//! - [`Path`] - Lines, quadratic and cubic curves under a winding rule
//! - [`MultiShape`] - Union of any of the above
//!
//! # Core Trait
//!
//! Every shape implements [`Shape2d`], which provides:
//!
//! - **Containment**: points and rectangles, boundaries inclusive
//! - **Proximity**: closest and farthest points, Euclidean, L1 and L∞ distances
//! - **Intersection**: symmetric shape-to-shape tests for every pair of kinds
//! - **Iteration**: a fresh, optionally transformed [`PathIterator`] over the boundary
//!
//! The algorithms live in [`kernel`] as free functions over raw `f64`
//! coordinates; the shape types are thin facades over them. Path winding
//! and curve flattening live in [`path`].
//!
//! # Example
//!
//! ```
//! use shape_types::{Circle, Path, Point2, Rectangle, Shape2d, WindingRule};
//!
//! let circle = Circle::new(Point2::new(5.0, 8.0), 5.0)?;
//! let rect = Rectangle::from_xywh(9.0, 0.0, 4.0, 4.0)?;
//! assert!(!circle.intersects(&rect));
//! assert!(circle.distance_to_shape(&rect) > 0.0);
//!
//! let mut path = Path::with_winding_rule(WindingRule::EvenOdd);
//! path.move_to(Point2::new(0.0, 0.0));
//! path.line_to(Point2::new(4.0, 0.0))?;
//! path.line_to(Point2::new(4.0, 4.0))?;
//! path.close_path();
//! assert!(path.contains_point(&Point2::new(3.0, 1.0)));
//! # Ok::<(), shape_types::ShapeError>(())
//! ```
//!
//! # Conventions
//!
//! - Coordinates are `f64`, y up, angles counter-clockwise.
//! - Sizes are never negative: constructors and setters reject negative
//!   widths, radii and extents with [`ShapeError::NegativeValue`].
//! - Tolerances come from [`GeometryParams`]; the shape methods use
//!   [`GeometryParams::default`].
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all types

#![doc(html_root_url = "https://docs.rs/shape-types/0.7.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::suboptimal_flops,
    clippy::missing_const_for_fn,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::option_if_let_else,
    clippy::items_after_statements,
    clippy::uninlined_format_args,
    clippy::float_cmp,
    clippy::cast_precision_loss,
    clippy::use_self,
    clippy::return_self_not_must_use
)]

mod error;
mod intersect;
pub mod kernel;
mod params;
pub mod path;
mod shape;
pub mod shapes;
mod traits;

// Re-export core types
pub use error::ShapeError;
pub use intersect::{closest_points, intersects};
pub use kernel::triangle::TriangleFeature;
pub use params::{CIRCLE_CTRL_FACTOR, DEFAULT_EPSILON, GeometryParams};
pub use path::{
    BoxedPathIter, CubicSegment, PathElement, PathElementType, PathIterator, WindingRule,
};
pub use shape::{Shape, ShapeRef};
pub use shapes::{
    Circle, Ellipse, MultiShape, OrientedRectangle, Parallelogram, Path, Rectangle,
    RoundRectangle, Segment, Triangle,
};
pub use traits::Shape2d;

// Re-export nalgebra types for convenience
pub use nalgebra::{Affine2, Point2, Vector2};

/// Result type for shape operations.
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Commonly used items.
pub mod prelude {
    pub use crate::error::ShapeError;
    pub use crate::params::GeometryParams;
    pub use crate::path::{PathElement, PathIterator, WindingRule};
    pub use crate::shape::{Shape, ShapeRef};
    pub use crate::shapes::{
        Circle, Ellipse, MultiShape, OrientedRectangle, Parallelogram, Path, Rectangle,
        RoundRectangle, Segment, Triangle,
    };
    pub use crate::traits::Shape2d;
    pub use nalgebra::{Point2, Vector2};
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod integration_tests {
    use super::*;
    use approx::assert_relative_eq;

    fn every_kind() -> Vec<Shape> {
        let mut path = Path::new();
        path.move_to(Point2::new(0.0, 0.0));
        path.quad_to(Point2::new(2.0, 4.0), Point2::new(4.0, 0.0)).unwrap();
        path.close_path();

        vec![
            Circle::new(Point2::new(1.0, 1.0), 1.0).unwrap().into(),
            Ellipse::from_xywh(0.0, 0.0, 4.0, 2.0).unwrap().into(),
            Rectangle::from_xywh(0.0, 0.0, 3.0, 2.0).unwrap().into(),
            RoundRectangle::from_xywh(0.0, 0.0, 4.0, 4.0, 1.0, 1.0)
                .unwrap()
                .into(),
            Segment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 1.0)).into(),
            Triangle::new(Point2::new(0.0, 0.0), Point2::new(3.0, 0.0), Point2::new(0.0, 3.0))
                .into(),
            OrientedRectangle::new(Point2::new(1.0, 1.0), Vector2::y(), 1.0, 0.5)
                .unwrap()
                .into(),
            Parallelogram::new(
                Point2::new(1.0, 1.0),
                Vector2::x(),
                1.0,
                Vector2::new(0.6, 0.8),
                0.5,
            )
            .unwrap()
            .into(),
            path.into(),
            MultiShape::from_shapes(vec![Circle::new(Point2::new(9.0, 9.0), 1.0).unwrap().into()])
                .into(),
        ]
    }

    /// Every shape kind honors the basic query contract.
    #[test]
    fn test_shape_contract_consistency() {
        let queries = [
            Point2::new(-3.0, 2.0),
            Point2::new(1.0, 0.5),
            Point2::new(12.0, -4.0),
        ];
        for shape in every_kind() {
            let name = shape.shape_ref().kind_name();
            let bb = shape.bounding_box();
            for p in &queries {
                let c = shape.closest_point_to(p);
                let (minx, miny, maxx, maxy) = bb.bounds();
                assert!(
                    c.x >= minx - 1e-9 && c.x <= maxx + 1e-9 && c.y >= miny - 1e-9 && c.y <= maxy + 1e-9,
                    "{name}: closest point {c:?} escapes bounding box"
                );
                if shape.contains_point(p) {
                    assert_eq!(c, *p, "{name}: contained point must be its own closest");
                }
                let f = shape.farthest_point_to(p);
                assert!(
                    nalgebra::distance(p, &f) + 1e-9 >= nalgebra::distance(p, &c),
                    "{name}: farthest nearer than closest"
                );
                assert_relative_eq!(
                    shape.distance(p),
                    nalgebra::distance(p, &c),
                    epsilon = 1e-12
                );
                assert!(shape.distance_linf(p) <= shape.distance(p) + 1e-12);
                assert!(shape.distance(p) <= shape.distance_l1(p) + 1e-12);
            }
            assert!(shape.path_iter(None).next().is_some(), "{name}: empty boundary");
        }
    }

    /// Boundary iteration reproduces the shape as a path.
    #[test]
    fn test_to_path_matches_shape() {
        for shape in every_kind() {
            let name = shape.shape_ref().kind_name();
            let path = shape.to_path(None);
            let bb = shape.bounding_box();
            let pb = path.bounding_box();
            assert_relative_eq!(pb.min().x, bb.min().x, epsilon = 1e-9);
            assert_relative_eq!(pb.max().y, bb.max().y, epsilon = 1e-9);
            if let Shape::Circle(c) = &shape {
                assert!(path.contains_point(&c.center()), "{name}");
            }
        }
    }
}

//! Regression scenarios for the shape query contract.
//!
//! Each test pins down a concrete configuration with a known answer, so a
//! change in boundary handling or winding shows up as a failing case here.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]

use approx::assert_relative_eq;
use shape_types::path::FlatteningPathIter;
use shape_types::prelude::*;

// =============================================================================
// Containment and intersection
// =============================================================================

#[test]
fn circle_contains_points() {
    let circle = Circle::new(Point2::new(5.0, 8.0), 5.0).unwrap();
    assert!(circle.contains_point(&Point2::new(9.0, 11.0)));
    assert!(!circle.contains_point(&Point2::new(9.0, 12.0)));
    assert!(!circle.contains_point(&Point2::new(0.0, 0.0)));
}

#[test]
fn circle_intersects_circles() {
    let circle = Circle::new(Point2::new(5.0, 8.0), 5.0).unwrap();
    let near = Circle::new(Point2::new(10.0, 10.0), 1.0).unwrap();
    let far = Circle::new(Point2::new(0.0, 0.0), 1.0).unwrap();
    assert!(circle.intersects(&near));
    assert!(near.intersects(&circle));
    assert!(!circle.intersects(&far));
    assert!(!far.intersects(&circle));
}

#[test]
fn rectangle_distances() {
    let rect = Rectangle::from_xywh(5.0, 8.0, 5.0, 10.0).unwrap();
    assert_relative_eq!(rect.distance(&Point2::new(0.0, 0.0)), 89.0_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(rect.distance(&Point2::new(0.0, 0.0)), 9.43398, epsilon = 1e-5);
    assert_eq!(rect.distance(&Point2::new(8.0, 18.0)), 0.0);
    assert_relative_eq!(rect.distance_l1(&Point2::new(0.0, 0.0)), 13.0, epsilon = 1e-12);
    assert_relative_eq!(rect.distance_linf(&Point2::new(0.0, 0.0)), 8.0, epsilon = 1e-12);
}

#[test]
fn triangle_orientation() {
    let a = Point2::new(5.0, 8.0);
    let b = Point2::new(-10.0, 1.0);
    let c = Point2::new(-1.0, -2.0);
    assert!(Triangle::new(a, b, c).is_ccw());
    assert!(!Triangle::new(b, a, c).is_ccw());
    assert!(!Triangle::new(a, c, b).is_ccw());
}

#[test]
fn oriented_rectangle_containment() {
    let rect = OrientedRectangle::new(
        Point2::new(6.0, 9.0),
        Vector2::new(0.894_427, -0.447_214),
        14.0,
        13.0,
    )
    .unwrap();
    assert!(rect.contains_point(&Point2::new(0.0, 0.0)));
    assert!(!rect.contains_point(&Point2::new(-20.0, 0.0)));
}

// =============================================================================
// Paths and winding
// =============================================================================

#[test]
fn quad_path_contains_interior_point() {
    let mut path = Path::with_winding_rule(WindingRule::NonZero);
    path.move_to(Point2::new(0.0, 0.0));
    path.quad_to(Point2::new(5.0, 10.0), Point2::new(10.0, 0.0)).unwrap();
    path.close_path();

    assert!(path.contains_point(&Point2::new(5.0, 2.0)));
    assert!(path.contains_point(&Point2::new(5.0, 4.9)));
    assert!(!path.contains_point(&Point2::new(5.0, 5.5)));
    assert!(!path.contains_point(&Point2::new(-1.0, 0.5)));
}

fn pentagram(rule: WindingRule) -> Path {
    let vertex = |k: usize| {
        let angle = std::f64::consts::FRAC_PI_2 + (k as f64) * 4.0 * std::f64::consts::PI / 5.0;
        Point2::new(10.0 * angle.cos(), 10.0 * angle.sin())
    };
    let mut path = Path::with_winding_rule(rule);
    path.move_to(vertex(0));
    for k in 1..5 {
        path.line_to(vertex(k)).unwrap();
    }
    path.close_path();
    path
}

#[test]
fn pentagram_center_depends_on_winding_rule() {
    let center = Point2::origin();
    assert!(pentagram(WindingRule::NonZero).contains_point(&center));
    assert!(!pentagram(WindingRule::EvenOdd).contains_point(&center));

    // A point inside one of the star's tips is covered once.
    let tip = Point2::new(0.0, 8.0);
    assert!(pentagram(WindingRule::NonZero).contains_point(&tip));
    assert!(pentagram(WindingRule::EvenOdd).contains_point(&tip));
}

#[test]
fn circle_boundary_flattens_near_radius() {
    let circle = Circle::new(Point2::new(1.0, -2.0), 5.0).unwrap();
    let elements: Vec<_> = circle.path_iter(None).collect();
    assert_eq!(elements.len(), 6);
    assert!(matches!(elements[0], PathElement::MoveTo { .. }));
    assert!(matches!(elements[5], PathElement::Close { .. }));

    let params = GeometryParams::default();
    let mut count = 0;
    for e in FlatteningPathIter::with_params(circle.path_iter(None), &params) {
        if let PathElement::LineTo { to, .. } = e {
            let r = nalgebra::distance(&to, &circle.center());
            assert!((r - 5.0).abs() < 0.01, "flattened point at radius {r}");
            count += 1;
        }
    }
    assert!(count > 4);
}

// =============================================================================
// Shape to shape
// =============================================================================

#[test]
fn shape_distances_are_symmetric() {
    let shapes: Vec<Shape> = vec![
        Circle::new(Point2::new(0.0, 0.0), 1.0).unwrap().into(),
        Rectangle::from_xywh(4.0, -1.0, 2.0, 2.0).unwrap().into(),
        Segment::new(Point2::new(0.0, 5.0), Point2::new(6.0, 5.0)).into(),
        Triangle::new(Point2::new(-6.0, 0.0), Point2::new(-4.0, 0.0), Point2::new(-5.0, 2.0)).into(),
    ];
    for a in &shapes {
        for b in &shapes {
            assert_relative_eq!(a.distance_to_shape(b), b.distance_to_shape(a), epsilon = 1e-9);
        }
    }
    assert_relative_eq!(shapes[0].distance_to_shape(&shapes[1]), 3.0, epsilon = 1e-12);
    assert_relative_eq!(shapes[0].distance_to_shape(&shapes[2]), 4.0, epsilon = 1e-12);
    assert_relative_eq!(shapes[0].distance_to_shape(&shapes[3]), 3.0, epsilon = 1e-12);
}

#[test]
fn multishape_behaves_as_union() {
    let multi: MultiShape = [
        Shape::from(Circle::new(Point2::new(0.0, 0.0), 1.0).unwrap()),
        Shape::from(Rectangle::from_xywh(5.0, 5.0, 1.0, 1.0).unwrap()),
    ]
    .into_iter()
    .collect();

    assert!(multi.contains_point(&Point2::new(5.5, 5.5)));
    assert!(!multi.contains_point(&Point2::new(3.0, 3.0)));
    assert!(multi.intersects(&Segment::new(Point2::new(-2.0, 0.0), Point2::new(2.0, 0.0))));
    assert_relative_eq!(multi.distance(&Point2::new(5.5, 8.0)), 2.0, epsilon = 1e-12);
    assert_eq!(multi.bounding_box().max(), Point2::new(6.0, 6.0));
}

#[test]
fn negative_sizes_are_rejected() {
    assert!(Circle::new(Point2::origin(), -1.0).unwrap_err().is_negative_value());
    assert!(Rectangle::from_xywh(0.0, 0.0, -1.0, 1.0).is_err());
    assert!(RoundRectangle::from_xywh(0.0, 0.0, 1.0, 1.0, -0.5, 0.5).is_err());

    let mut circle = Circle::new(Point2::origin(), 2.0).unwrap();
    assert!(circle.set_radius(-3.0).is_err());
    assert_eq!(circle.radius(), 2.0);

    let err = OrientedRectangle::new(Point2::origin(), Vector2::new(1.0, 1.0), 1.0, 1.0)
        .unwrap_err();
    assert!(err.is_non_unit_vector());
}

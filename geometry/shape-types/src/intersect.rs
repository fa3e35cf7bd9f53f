//! Pairwise shape queries.
//!
//! Every convex shape is decomposed into a few primitives (disks,
//! ellipses, axis-aligned boxes and small convex polygons) and each pair of
//! primitive kinds is answered by exactly one kernel, called with the same
//! argument order whichever shape comes first. `intersects(a, b)` and
//! `intersects(b, a)` therefore run the same arithmetic.
//!
//! Paths are handled through their flattened boundary segments plus a
//! winding test on a representative point. Multishapes recurse into their
//! children.

use nalgebra::Point2;
use smallvec::{SmallVec, smallvec};

use crate::kernel::polygon::{self as kp, ConvexPolygon};
use crate::kernel::{circle as kc, ellipse as ke, nearer, rectangle as kr, segment as ks};
use crate::params::GeometryParams;
use crate::path::{PathElement, Segments};
use crate::shape::ShapeRef;
use crate::shapes::{MultiShape, Path};
use crate::traits::Shape2d;

#[derive(Debug, Clone)]
enum Primitive {
    Disk {
        c: Point2<f64>,
        r: f64,
    },
    Ellipse {
        c: Point2<f64>,
        a: f64,
        b: f64,
    },
    Aabb {
        minx: f64,
        miny: f64,
        maxx: f64,
        maxy: f64,
    },
    Polygon(ConvexPolygon),
}

type Primitives = SmallVec<[Primitive; 6]>;

impl Primitive {
    fn aabb((minx, miny, maxx, maxy): (f64, f64, f64, f64)) -> Self {
        Self::Aabb {
            minx,
            miny,
            maxx,
            maxy,
        }
    }

    /// A point of the primitive.
    fn representative_point(&self) -> Point2<f64> {
        match self {
            Self::Disk { c, .. } | Self::Ellipse { c, .. } => *c,
            Self::Aabb { minx, miny, .. } => Point2::new(*minx, *miny),
            Self::Polygon(poly) => poly.as_slice().first().copied().unwrap_or_else(Point2::origin),
        }
    }

    fn intersects_segment(&self, s: &Point2<f64>, e: &Point2<f64>, epsilon: f64) -> bool {
        match *self {
            Self::Disk { c, r } => kc::intersects_circle_segment(c.x, c.y, r, s.x, s.y, e.x, e.y),
            Self::Ellipse { c, a, b } => {
                ke::intersects_ellipse_segment(c.x, c.y, a, b, s.x, s.y, e.x, e.y, epsilon)
            }
            Self::Aabb {
                minx,
                miny,
                maxx,
                maxy,
            } => kr::intersects_rectangle_segment(minx, miny, maxx, maxy, s.x, s.y, e.x, e.y),
            Self::Polygon(ref poly) => {
                kp::intersects_convex_polygons(poly.as_slice(), &[*s, *e], epsilon)
            }
        }
    }
}

/// The canonical kernel for an ordered pair of primitive kinds, or `None`
/// when the pair is only handled in the other order.
fn intersects_ordered(p: &Primitive, q: &Primitive, epsilon: f64) -> Option<bool> {
    use Primitive::{Aabb, Disk, Ellipse, Polygon};

    let hit = match (p, q) {
        (&Disk { c: c1, r: r1 }, &Disk { c: c2, r: r2 }) => {
            kc::intersects_circle_circle(c1.x, c1.y, r1, c2.x, c2.y, r2)
        }
        (&Disk { c, r }, &Ellipse { c: e, a, b }) => {
            ke::intersects_ellipse_ellipse(e.x, e.y, a, b, c.x, c.y, r, r, epsilon)
        }
        (
            &Disk { c, r },
            &Aabb {
                minx,
                miny,
                maxx,
                maxy,
            },
        ) => kc::intersects_circle_rectangle(c.x, c.y, r, minx, miny, maxx, maxy),
        (&Disk { c, r }, &Polygon(ref poly)) => {
            kc::intersects_circle_convex_polygon(c.x, c.y, r, poly.as_slice(), epsilon)
        }
        (
            &Ellipse {
                c: c1,
                a: a1,
                b: b1,
            },
            &Ellipse {
                c: c2,
                a: a2,
                b: b2,
            },
        ) => {
            ke::intersects_ellipse_ellipse(c1.x, c1.y, a1, b1, c2.x, c2.y, a2, b2, epsilon)
                || ke::intersects_ellipse_ellipse(c2.x, c2.y, a2, b2, c1.x, c1.y, a1, b1, epsilon)
        }
        (
            &Ellipse { c, a, b },
            &Aabb {
                minx,
                miny,
                maxx,
                maxy,
            },
        ) => ke::intersects_ellipse_rectangle(c.x, c.y, a, b, minx, miny, maxx, maxy),
        (&Ellipse { c, a, b }, &Polygon(ref poly)) => {
            ke::intersects_ellipse_convex_polygon(c.x, c.y, a, b, poly.as_slice(), epsilon)
        }
        (
            &Aabb {
                minx: ax0,
                miny: ay0,
                maxx: ax1,
                maxy: ay1,
            },
            &Aabb {
                minx: bx0,
                miny: by0,
                maxx: bx1,
                maxy: by1,
            },
        ) => kr::intersects_rectangle_rectangle(ax0, ay0, ax1, ay1, bx0, by0, bx1, by1),
        (
            &Aabb {
                minx,
                miny,
                maxx,
                maxy,
            },
            &Polygon(ref poly),
        ) => match poly.as_slice() {
            [] => false,
            [s] => kr::intersects_rectangle_segment(minx, miny, maxx, maxy, s.x, s.y, s.x, s.y),
            [s, e] => kr::intersects_rectangle_segment(minx, miny, maxx, maxy, s.x, s.y, e.x, e.y),
            points => kp::intersects_convex_polygons(
                &kr::corners(minx, miny, maxx, maxy),
                points,
                epsilon,
            ),
        },
        (&Polygon(ref a), &Polygon(ref b)) => {
            kp::intersects_convex_polygons(a.as_slice(), b.as_slice(), epsilon)
        }
        _ => return None,
    };
    Some(hit)
}

fn primitives_intersect(p: &Primitive, q: &Primitive, epsilon: f64) -> bool {
    intersects_ordered(p, q, epsilon)
        .or_else(|| intersects_ordered(q, p, epsilon))
        .unwrap_or(false)
}

/// How a shape takes part in a pairwise query.
enum Operand<'a> {
    Parts(Primitives),
    Path(&'a Path),
    Multi(&'a MultiShape),
}

fn operand(shape: ShapeRef<'_>) -> Operand<'_> {
    let parts: Primitives = match shape {
        ShapeRef::Circle(s) => smallvec![Primitive::Disk {
            c: s.center(),
            r: s.radius(),
        }],
        ShapeRef::Ellipse(s) => {
            let (a, b) = s.radii();
            smallvec![Primitive::Ellipse {
                c: s.center(),
                a,
                b,
            }]
        }
        ShapeRef::Rectangle(s) => smallvec![Primitive::aabb(s.bounds())],
        ShapeRef::RoundRectangle(s) => {
            let g = s.geometry();
            if g.rx <= 0.0 || g.ry <= 0.0 {
                smallvec![Primitive::aabb(s.frame().bounds())]
            } else {
                let [horizontal, vertical] = g.bands();
                let mut parts: Primitives =
                    smallvec![Primitive::aabb(horizontal), Primitive::aabb(vertical)];
                parts.extend(g.corner_centers().into_iter().map(|c| Primitive::Ellipse {
                    c,
                    a: g.rx,
                    b: g.ry,
                }));
                parts
            }
        }
        ShapeRef::Segment(s) => smallvec![Primitive::Polygon(ConvexPolygon::segment(s.p1(), s.p2()))],
        ShapeRef::Triangle(s) => smallvec![Primitive::Polygon(ConvexPolygon::from_slice(&s.points()))],
        ShapeRef::OrientedRectangle(s) => {
            smallvec![Primitive::Polygon(ConvexPolygon::from_slice(&s.corners()))]
        }
        ShapeRef::Parallelogram(s) => {
            smallvec![Primitive::Polygon(ConvexPolygon::from_slice(&s.corners()))]
        }
        ShapeRef::Path(p) => return Operand::Path(p),
        ShapeRef::Multi(m) => return Operand::Multi(m),
    };
    Operand::Parts(parts)
}

/// Start points of every subpath.
fn subpath_starts(path: &Path) -> impl Iterator<Item = Point2<f64>> + '_ {
    path.elements().iter().filter_map(|e| match e {
        PathElement::MoveTo { to } => Some(*to),
        _ => None,
    })
}

fn path_intersects_parts(path: &Path, parts: &[Primitive], params: &GeometryParams) -> bool {
    let crossing = path
        .boundary_segments(params)
        .any(|(s, e)| parts.iter().any(|q| q.intersects_segment(&s, &e, params.epsilon)));
    if crossing {
        return true;
    }
    // No boundary contact: the shape lies wholly inside or outside the region.
    path.is_closed()
        && parts
            .first()
            .is_some_and(|q| path.contains_point_with(&q.representative_point(), params))
}

fn path_intersects_path(p: &Path, q: &Path, params: &GeometryParams) -> bool {
    let eps = params.epsilon;
    let q_segments: Vec<_> = q.boundary_segments(params).collect();
    let crossing = p.boundary_segments(params).any(|(a, b)| {
        q_segments
            .iter()
            .any(|(c, d)| ks::intersects_segment_segment(a.x, a.y, b.x, b.y, c.x, c.y, d.x, d.y, eps))
    });
    if crossing {
        return true;
    }
    let inside = |outer: &Path, inner: &Path| {
        outer.is_closed() && subpath_starts(inner).any(|s| outer.contains_point_with(&s, params))
    };
    inside(q, p) || inside(p, q)
}

/// Check whether two shapes share at least one point.
///
/// Symmetric in its arguments.
#[must_use]
pub fn intersects(a: ShapeRef<'_>, b: ShapeRef<'_>) -> bool {
    let params = GeometryParams::default();
    match (operand(a), operand(b)) {
        (Operand::Multi(m), _) => m.iter().any(|s| intersects(s.shape_ref(), b)),
        (_, Operand::Multi(m)) => m.iter().any(|s| intersects(a, s.shape_ref())),
        (Operand::Path(p), Operand::Path(q)) => path_intersects_path(p, q, &params),
        (Operand::Path(p), Operand::Parts(parts)) | (Operand::Parts(parts), Operand::Path(p)) => {
            path_intersects_parts(p, &parts, &params)
        }
        (Operand::Parts(x), Operand::Parts(y)) => x
            .iter()
            .any(|p| y.iter().any(|q| primitives_intersect(p, q, params.epsilon))),
    }
}

/// Flattened boundary of any shape; open paths stay open.
fn boundary_segments(shape: &dyn Shape2d, params: &GeometryParams) -> Vec<(Point2<f64>, Point2<f64>)> {
    Segments::new(shape.path_iter(None), false, params).collect()
}

/// A point common to two intersecting shapes.
fn common_point(a: &dyn Shape2d, b: &dyn Shape2d, params: &GeometryParams) -> Point2<f64> {
    let a_segments = boundary_segments(a, params);
    let b_segments = boundary_segments(b, params);
    for (p, q) in &a_segments {
        for (r, s) in &b_segments {
            if let Some(x) = ks::intersection_point_segment_segment(
                p.x,
                p.y,
                q.x,
                q.y,
                r.x,
                r.y,
                s.x,
                s.y,
                params.epsilon,
            ) {
                return a.closest_point_to(&x);
            }
        }
    }
    // Boundaries do not cross: one shape lies inside the other.
    if let Some(&(x, _)) = b_segments.first() {
        if a.contains_point(&x) {
            return x;
        }
    }
    if let Some(&(x, _)) = a_segments.first() {
        if b.contains_point(&x) {
            return x;
        }
    }
    let q = b.closest_point_to(&a.closest_point_to(&Point2::origin()));
    a.closest_point_to(&q)
}

fn closest_on_circle_boundary(center: &Point2<f64>, radius: f64, toward: &Point2<f64>) -> Point2<f64> {
    let d = toward - center;
    let len = d.norm();
    if len <= 0.0 {
        return *center;
    }
    center + d * (radius / len)
}

fn closest_from_children<F>(m: &MultiShape, f: F) -> Option<(Point2<f64>, Point2<f64>, f64)>
where
    F: Fn(ShapeRef<'_>) -> (Point2<f64>, Point2<f64>, f64),
{
    m.iter()
        .map(|s| f(s.shape_ref()))
        .reduce(|best, next| if next.2 < best.2 { next } else { best })
}

/// Closest pair of points between two shapes and their distance.
///
/// The first point lies on `a`, the second on `b`. Intersecting shapes
/// return a common point twice and a zero distance.
#[must_use]
pub fn closest_points(a: ShapeRef<'_>, b: ShapeRef<'_>) -> (Point2<f64>, Point2<f64>, f64) {
    if let ShapeRef::Multi(m) = a {
        if let Some(best) = closest_from_children(m, |child| closest_points(child, b)) {
            return best;
        }
    }
    if let ShapeRef::Multi(m) = b {
        if let Some(best) = closest_from_children(m, |child| closest_points(a, child)) {
            return best;
        }
    }

    let params = GeometryParams::default();
    let (sa, sb) = (a.as_dyn(), b.as_dyn());
    if intersects(a, b) {
        let q = common_point(sa, sb, &params);
        return (q, q, 0.0);
    }

    // The distance from a disk to any closed set is the center distance
    // minus the radius.
    if let ShapeRef::Circle(c) = a {
        let center = c.center();
        let on_b = sb.closest_point_to(&center);
        let on_a = closest_on_circle_boundary(&center, c.radius(), &on_b);
        return (on_a, on_b, nalgebra::distance(&on_a, &on_b));
    }
    if let ShapeRef::Circle(c) = b {
        let center = c.center();
        let on_a = sa.closest_point_to(&center);
        let on_b = closest_on_circle_boundary(&center, c.radius(), &on_a);
        return (on_a, on_b, nalgebra::distance(&on_a, &on_b));
    }

    let a_segments = boundary_segments(sa, &params);
    let b_segments = boundary_segments(sb, &params);
    let mut best: Option<(Point2<f64>, Point2<f64>, f64)> = None;
    for (p, q) in &a_segments {
        for (r, s) in &b_segments {
            let candidate = ks::closest_points_segment_segment(
                p.x,
                p.y,
                q.x,
                q.y,
                r.x,
                r.y,
                s.x,
                s.y,
                params.epsilon,
            );
            if best.is_none_or(|b| candidate.2 < b.2) {
                best = Some(candidate);
            }
        }
    }

    // Flattened boundaries approximate curves; project back onto the shapes.
    let seed = best.map_or_else(|| sa.closest_point_to(&Point2::origin()), |(p, _, _)| p);
    let on_b = sb.closest_point_to(&seed);
    let on_a = nearer(&on_b, seed, sa.closest_point_to(&on_b));
    (on_a, on_b, nalgebra::distance(&on_a, &on_b))
}

//! Bounding rectangle computation for paths.

use crate::geom::{CubicBezierSegment, QuadraticBezierSegment, Segment};
use crate::math::{point, Box2D, Point};
use crate::path::PathEvent;

/// Computes a conservative axis-aligned rectangle that contains the path.
///
/// Control points are included as they are, so this is faster but less precise
/// than [`bounding_box`](fn.bounding_box.html).
pub fn fast_bounding_box<Iter>(path: Iter) -> Box2D
where
    Iter: IntoIterator<Item = PathEvent>,
{
    let mut min = point(f64::MAX, f64::MAX);
    let mut max = point(f64::MIN, f64::MIN);
    for evt in path {
        match evt {
            PathEvent::Begin { at } => {
                include(&mut min, &mut max, at);
            }
            PathEvent::Line { to, .. } => {
                include(&mut min, &mut max, to);
            }
            PathEvent::Quadratic { ctrl, to, .. } => {
                include(&mut min, &mut max, ctrl);
                include(&mut min, &mut max, to);
            }
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                include(&mut min, &mut max, ctrl1);
                include(&mut min, &mut max, ctrl2);
                include(&mut min, &mut max, to);
            }
            PathEvent::Close { .. } => {}
        }
    }

    finish(min, max)
}

/// Computes the smallest axis-aligned rectangle that contains the path.
pub fn bounding_box<Iter>(path: Iter) -> Box2D
where
    Iter: IntoIterator<Item = PathEvent>,
{
    let mut min = point(f64::MAX, f64::MAX);
    let mut max = point(f64::MIN, f64::MIN);

    for evt in path {
        match evt {
            PathEvent::Begin { at } => {
                include(&mut min, &mut max, at);
            }
            PathEvent::Line { to, .. } => {
                include(&mut min, &mut max, to);
            }
            PathEvent::Quadratic { from, ctrl, to } => {
                include_segment(&mut min, &mut max, QuadraticBezierSegment { from, ctrl, to });
            }
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                include_segment(
                    &mut min,
                    &mut max,
                    CubicBezierSegment {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    },
                );
            }
            PathEvent::Close { .. } => {}
        }
    }

    finish(min, max)
}

fn include(min: &mut Point, max: &mut Point, p: Point) {
    *min = Point::min(*min, p);
    *max = Point::max(*max, p);
}

fn include_segment<T: Segment<Scalar = f64>>(min: &mut Point, max: &mut Point, segment: T) {
    let r = segment.bounding_box();
    *min = Point::min(*min, r.min);
    *max = Point::max(*max, r.max);
}

fn finish(min: Point, max: Point) -> Box2D {
    // Return an empty rectangle by default if there was no event in the path.
    if min == point(f64::MAX, f64::MAX) {
        return Box2D::zero();
    }

    Box2D { min, max }
}

#[test]
fn simple_bounding_box() {
    use crate::path::{Path, PathBuilder};

    let mut builder = Path::builder();
    builder.move_to(point(-10.0, -3.0));
    builder.line_to(point(0.0, -12.0));
    builder.quadratic_bezier_to(point(3.0, 4.0), point(5.0, 3.0));
    builder.close();
    let path = builder.build();

    assert_eq!(
        fast_bounding_box(path.events()),
        Box2D {
            min: point(-10.0, -12.0),
            max: point(5.0, 4.0)
        },
    );

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.cubic_bezier_to(point(0.0, 10.0), point(10.0, 10.0), point(10.0, 0.0));
    let path = builder.build();

    assert_eq!(
        fast_bounding_box(path.events()),
        Box2D {
            min: point(0.0, 0.0),
            max: point(10.0, 10.0)
        },
    );

    let tight = bounding_box(path.events());
    assert_eq!(tight.min, point(0.0, 0.0));
    assert_eq!(tight.max.x, 10.0);
    assert!((tight.max.y - 7.5).abs() < 1e-9);
}

#[test]
fn arc_bounding_box() {
    use crate::path::Path;

    // Half circle above the x axis once the y axis is inverted.
    let path = Path::parse("M 0 0 A 50 50 0 0 1 100 0").unwrap();
    let aabb = bounding_box(path.events());

    assert!(aabb.min.x.abs() < 1e-9);
    assert!((aabb.max.x - 100.0).abs() < 1e-9);
    assert!(aabb.min.y.abs() < 1e-9);
    // The cubic approximation of a quarter circle stays within a small
    // distance of the circle.
    assert!((aabb.max.y - 50.0).abs() < 0.1);
}

#[test]
fn empty_path() {
    let path = crate::path::Path::default();
    assert_eq!(bounding_box(path.events()), Box2D::zero());
    assert_eq!(fast_bounding_box(path.events()), Box2D::zero());
}

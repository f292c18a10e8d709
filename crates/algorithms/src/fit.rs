//! Fit paths into rectangles.

use crate::aabb::bounding_box;
use crate::math::{vector, Box2D, Transform, Vector};
use crate::path::Path;

/// The strategy to use when fitting (stretching, overflow, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FitStyle {
    /// Stretch vertically and horizontally to fit the destination rectangle exactly.
    Stretch,
    /// Uniformly scale without overflow.
    Min,
    /// Uniformly scale with overflow.
    Max,
    /// Uniformly scale to fit horizontally.
    Horizontal,
    /// Uniformly scale to fit vertically.
    Vertical,
}

/// Computes a transform that fits a rectangle into another one.
///
/// The source rectangle is centered in the destination. An axis along which the
/// source has no extent does not constrain the scale; if neither axis has an extent
/// the source is only translated.
pub fn fit_box(src_rect: &Box2D, dst_rect: &Box2D, style: FitStyle) -> Transform {
    let sx = axis_scale(src_rect.width(), dst_rect.width());
    let sy = axis_scale(src_rect.height(), dst_rect.height());

    let scale = match (sx, sy) {
        (Some(x), Some(y)) => uniform_scale(x, y, style),
        (Some(s), None) | (None, Some(s)) => match style {
            FitStyle::Stretch => vector(sx.unwrap_or(1.0), sy.unwrap_or(1.0)),
            _ => vector(s, s),
        },
        (None, None) => vector(1.0, 1.0),
    };

    let src_center = src_rect.min.lerp(src_rect.max, 0.5);
    let dst_center = dst_rect.min.lerp(dst_rect.max, 0.5);

    Transform::translation(-src_center.x, -src_center.y)
        .then_scale(scale.x, scale.y)
        .then_translate(dst_center.to_vector())
}

fn axis_scale(src: f64, dst: f64) -> Option<f64> {
    if src > 0.0 {
        Some(dst / src)
    } else {
        None
    }
}

fn uniform_scale(x: f64, y: f64, style: FitStyle) -> Vector {
    match style {
        FitStyle::Stretch => vector(x, y),
        FitStyle::Min => {
            let s = f64::min(x, y);
            vector(s, s)
        }
        FitStyle::Max => {
            let s = f64::max(x, y);
            vector(s, s)
        }
        FitStyle::Horizontal => vector(x, x),
        FitStyle::Vertical => vector(y, y),
    }
}

/// Fits a path into a rectangle.
///
/// Arcs are approximated with cubic bézier curves in the output.
pub fn fit_path(path: &Path, output_rect: &Box2D, style: FitStyle) -> Path {
    let aabb = bounding_box(path.events());
    let transform = fit_box(&aabb, output_rect, style);

    Path::from_events(path.events().map(|evt| evt.transformed(&transform)))
}

#[cfg(test)]
fn approx_eq(a: &Box2D, b: &Box2D) -> bool {
    use crate::geom::euclid::approxeq::ApproxEq;
    let result = a.min.approx_eq(&b.min) && a.max.approx_eq(&b.max);
    if !result {
        println!("{:?} == {:?}", a, b);
    }
    result
}

#[test]
fn simple_fit() {
    use crate::math::point;

    let t = fit_box(
        &Box2D {
            min: point(0.0, 0.0),
            max: point(1.0, 1.0),
        },
        &Box2D {
            min: point(0.0, 0.0),
            max: point(2.0, 2.0),
        },
        FitStyle::Stretch,
    );

    assert!(approx_eq(
        &t.outer_transformed_box(&Box2D {
            min: point(0.0, 0.0),
            max: point(1.0, 1.0)
        }),
        &Box2D {
            min: point(0.0, 0.0),
            max: point(2.0, 2.0)
        },
    ));

    let t = fit_box(
        &Box2D {
            min: point(1.0, 2.0),
            max: point(3.0, 6.0),
        },
        &Box2D {
            min: point(0.0, 0.0),
            max: point(2.0, 2.0),
        },
        FitStyle::Horizontal,
    );

    assert!(approx_eq(
        &t.outer_transformed_box(&Box2D {
            min: point(1.0, 2.0),
            max: point(3.0, 6.0)
        }),
        &Box2D {
            min: point(0.0, -1.0),
            max: point(2.0, 3.0)
        },
    ));

    let t = fit_box(
        &Box2D {
            min: point(0.0, 0.0),
            max: point(20.0, 10.0),
        },
        &Box2D {
            min: point(0.0, 0.0),
            max: point(10.0, 10.0),
        },
        FitStyle::Min,
    );

    // Aspect ratio preserved and centered vertically.
    assert!(approx_eq(
        &t.outer_transformed_box(&Box2D {
            min: point(0.0, 0.0),
            max: point(20.0, 10.0)
        }),
        &Box2D {
            min: point(0.0, 2.5),
            max: point(10.0, 7.5)
        },
    ));
}

#[test]
fn degenerate_fit() {
    use crate::math::point;

    let dst = Box2D {
        min: point(0.0, 0.0),
        max: point(10.0, 10.0),
    };

    // A horizontal segment.
    let t = fit_box(
        &Box2D {
            min: point(0.0, 3.0),
            max: point(5.0, 3.0),
        },
        &dst,
        FitStyle::Min,
    );
    let b = t.outer_transformed_box(&Box2D {
        min: point(0.0, 3.0),
        max: point(5.0, 3.0),
    });
    assert!(approx_eq(
        &b,
        &Box2D {
            min: point(0.0, 5.0),
            max: point(10.0, 5.0)
        }
    ));

    // A vertical segment only stretches along y.
    let t = fit_box(
        &Box2D {
            min: point(2.0, 0.0),
            max: point(2.0, 4.0),
        },
        &dst,
        FitStyle::Stretch,
    );
    assert_eq!(t.transform_point(point(2.0, 0.0)), point(5.0, 0.0));
    assert_eq!(t.transform_point(point(2.0, 4.0)), point(5.0, 10.0));

    // A single point.
    let t = fit_box(
        &Box2D {
            min: point(3.0, 3.0),
            max: point(3.0, 3.0),
        },
        &dst,
        FitStyle::Stretch,
    );
    let p = t.transform_point(point(3.0, 3.0));
    assert_eq!(p, point(5.0, 5.0));
}

#[test]
fn fit_triangle() {
    use crate::math::point;

    let path = Path::parse("M 150 0 L 75 200 L 225 200 Z").unwrap();
    let dst = Box2D {
        min: point(0.0, 0.0),
        max: point(100.0, 100.0),
    };
    let fitted = fit_path(&path, &dst, FitStyle::Min);

    // 150 x 200 scaled by one half and centered horizontally.
    assert!(approx_eq(
        &bounding_box(fitted.events()),
        &Box2D {
            min: point(12.5, 0.0),
            max: point(87.5, 100.0)
        }
    ));
    assert_eq!(fitted.len(), path.len());
}

use crate::math::{Point, Transform};

/// A primitive drawing operation, as understood by host 2D path APIs.
///
/// Edges carry their start point so that they can be consumed without tracking
/// the current position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathEvent {
    Begin {
        at: Point,
    },
    Line {
        from: Point,
        to: Point,
    },
    Quadratic {
        from: Point,
        ctrl: Point,
        to: Point,
    },
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    Close {
        last: Point,
        first: Point,
    },
}

impl PathEvent {
    pub fn is_edge(&self) -> bool {
        !matches!(self, PathEvent::Begin { .. })
    }

    pub fn from(&self) -> Point {
        match *self {
            PathEvent::Line { from, .. }
            | PathEvent::Quadratic { from, .. }
            | PathEvent::Cubic { from, .. }
            | PathEvent::Begin { at: from }
            | PathEvent::Close { last: from, .. } => from,
        }
    }

    pub fn to(&self) -> Point {
        match *self {
            PathEvent::Line { to, .. }
            | PathEvent::Quadratic { to, .. }
            | PathEvent::Cubic { to, .. }
            | PathEvent::Begin { at: to }
            | PathEvent::Close { first: to, .. } => to,
        }
    }

    pub fn transformed(&self, mat: &Transform) -> Self {
        match *self {
            PathEvent::Begin { at } => PathEvent::Begin {
                at: mat.transform_point(at),
            },
            PathEvent::Line { from, to } => PathEvent::Line {
                from: mat.transform_point(from),
                to: mat.transform_point(to),
            },
            PathEvent::Quadratic { from, ctrl, to } => PathEvent::Quadratic {
                from: mat.transform_point(from),
                ctrl: mat.transform_point(ctrl),
                to: mat.transform_point(to),
            },
            PathEvent::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => PathEvent::Cubic {
                from: mat.transform_point(from),
                ctrl1: mat.transform_point(ctrl1),
                ctrl2: mat.transform_point(ctrl2),
                to: mat.transform_point(to),
            },
            PathEvent::Close { last, first } => PathEvent::Close {
                last: mat.transform_point(last),
                first: mat.transform_point(first),
            },
        }
    }
}

#[test]
fn transformed_event() {
    use crate::math::point;

    let evt = PathEvent::Quadratic {
        from: point(0.0, 0.0),
        ctrl: point(1.0, 2.0),
        to: point(3.0, 0.0),
    };
    let t = Transform::scale(2.0, -1.0).then_translate(crate::math::vector(1.0, 1.0));

    assert_eq!(
        evt.transformed(&t),
        PathEvent::Quadratic {
            from: point(1.0, 1.0),
            ctrl: point(3.0, -1.0),
            to: point(7.0, 1.0),
        }
    );
    assert!(evt.is_edge());
    assert_eq!(evt.from(), point(0.0, 0.0));
    assert_eq!(evt.to(), point(3.0, 0.0));
}

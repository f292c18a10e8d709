use crate::geom::{ArcFlags, SvgArc};
use crate::math::{Angle, Point, Vector};

/// A single drawing command with absolute coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Command {
    MoveTo(Point),
    LineTo(Point),
    QuadraticCurve {
        ctrl: Point,
        to: Point,
    },
    CubicCurve {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    Arc(ArcDescriptor),
    ClosePath,
}

/// An elliptic arc in endpoint parameterization.
///
/// The start of the arc is implicit: it is the current point when the arc is drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcDescriptor {
    pub radii: Vector,
    pub x_rotation: Angle,
    pub flags: ArcFlags,
    pub to: Point,
}

impl ArcDescriptor {
    /// The geometric arc drawn when the current point is `from`.
    pub fn to_svg_arc(&self, from: Point) -> SvgArc<f64> {
        SvgArc {
            from,
            to: self.to,
            radii: self.radii,
            x_rotation: self.x_rotation,
            flags: self.flags,
        }
    }
}

impl Command {
    /// Position of the pen after this command, `None` for `ClosePath`.
    pub fn endpoint(&self) -> Option<Point> {
        match *self {
            Command::MoveTo(to)
            | Command::LineTo(to)
            | Command::QuadraticCurve { to, .. }
            | Command::CubicCurve { to, .. }
            | Command::Arc(ArcDescriptor { to, .. }) => Some(to),
            Command::ClosePath => None,
        }
    }

    pub fn first_control(&self) -> Option<Point> {
        match *self {
            Command::QuadraticCurve { ctrl, .. } => Some(ctrl),
            Command::CubicCurve { ctrl1, .. } => Some(ctrl1),
            _ => None,
        }
    }

    pub fn last_control(&self) -> Option<Point> {
        match *self {
            Command::QuadraticCurve { ctrl, .. } => Some(ctrl),
            Command::CubicCurve { ctrl2, .. } => Some(ctrl2),
            _ => None,
        }
    }

    /// The absolute SVG command letter.
    pub fn letter(&self) -> char {
        match *self {
            Command::MoveTo(..) => 'M',
            Command::LineTo(..) => 'L',
            Command::QuadraticCurve { .. } => 'Q',
            Command::CubicCurve { .. } => 'C',
            Command::Arc(..) => 'A',
            Command::ClosePath => 'Z',
        }
    }

    /// Offsets every point of the command.
    ///
    /// Only the endpoint of an arc moves, its radii and rotation are frame-independent.
    pub fn translated(&self, v: Vector) -> Self {
        match *self {
            Command::MoveTo(to) => Command::MoveTo(to + v),
            Command::LineTo(to) => Command::LineTo(to + v),
            Command::QuadraticCurve { ctrl, to } => Command::QuadraticCurve {
                ctrl: ctrl + v,
                to: to + v,
            },
            Command::CubicCurve { ctrl1, ctrl2, to } => Command::CubicCurve {
                ctrl1: ctrl1 + v,
                ctrl2: ctrl2 + v,
                to: to + v,
            },
            Command::Arc(arc) => Command::Arc(ArcDescriptor {
                to: arc.to + v,
                ..arc
            }),
            Command::ClosePath => Command::ClosePath,
        }
    }
}

#[test]
fn command_accessors() {
    use crate::math::{point, vector};

    let cubic = Command::CubicCurve {
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, 2.0),
        to: point(3.0, 3.0),
    };
    assert_eq!(cubic.endpoint(), Some(point(3.0, 3.0)));
    assert_eq!(cubic.first_control(), Some(point(1.0, 1.0)));
    assert_eq!(cubic.last_control(), Some(point(2.0, 2.0)));
    assert_eq!(cubic.letter(), 'C');

    assert_eq!(Command::ClosePath.endpoint(), None);
    assert_eq!(Command::LineTo(point(1.0, 0.0)).last_control(), None);

    let arc = Command::Arc(ArcDescriptor {
        radii: vector(5.0, 5.0),
        x_rotation: Angle::radians(0.5),
        flags: ArcFlags::default(),
        to: point(10.0, 0.0),
    });
    let moved = arc.translated(vector(1.0, 2.0));
    match moved {
        Command::Arc(a) => {
            assert_eq!(a.to, point(11.0, 2.0));
            assert_eq!(a.radii, vector(5.0, 5.0));
            assert_eq!(a.x_rotation, Angle::radians(0.5));
        }
        _ => panic!("expected an arc"),
    }
}

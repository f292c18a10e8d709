//! Relative to absolute coordinate resolution.

use crate::command::Command;
use crate::math::{point, Point, Vector};

/// Tracks the current point and the previous command while commands are produced,
/// and turns relative commands into absolute ones.
///
/// The current point is the endpoint of the last resolved command. A `ClosePath`
/// leaves it untouched: returning to the start of the sub-path is up to the
/// consumer of the commands.
///
/// ```
/// use svgpath_path::{Command, Resolver};
/// use svgpath_path::math::point;
///
/// let mut resolver = Resolver::new();
/// resolver.resolve(Command::MoveTo(point(10.0, 10.0)), false);
/// let line = resolver.resolve(Command::LineTo(point(5.0, 0.0)), true);
///
/// assert_eq!(line, Command::LineTo(point(15.0, 10.0)));
/// assert_eq!(resolver.current_position(), point(15.0, 10.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolver {
    current: Point,
    previous: Option<Command>,
}

impl Resolver {
    pub fn new() -> Self {
        Resolver {
            current: point(0.0, 0.0),
            previous: None,
        }
    }

    pub fn current_position(&self) -> Point {
        self.current
    }

    /// The most recently resolved command.
    pub fn previous(&self) -> Option<&Command> {
        self.previous.as_ref()
    }

    /// The offset to add to the points of a command.
    pub fn origin(&self, is_relative: bool) -> Vector {
        if is_relative {
            self.current.to_vector()
        } else {
            Vector::zero()
        }
    }

    /// Makes `command` absolute and advances the current point.
    pub fn resolve(&mut self, command: Command, is_relative: bool) -> Command {
        let command = if is_relative {
            command.translated(self.current.to_vector())
        } else {
            command
        };

        if let Some(to) = command.endpoint() {
            self.current = to;
        }
        self.previous = Some(command);

        command
    }

    /// Reflection of the previous quadratic curve's control point about the current point.
    ///
    /// Falls back to the current point if the previous command is not a quadratic curve.
    pub fn mirrored_quadratic_ctrl(&self) -> Point {
        match self.previous {
            Some(Command::QuadraticCurve { ctrl, .. }) => self.mirror(ctrl),
            _ => self.current,
        }
    }

    /// Reflection of the previous cubic curve's second control point about the current point.
    ///
    /// Falls back to the current point if the previous command is not a cubic curve.
    pub fn mirrored_cubic_ctrl(&self) -> Point {
        match self.previous {
            Some(Command::CubicCurve { ctrl2, .. }) => self.mirror(ctrl2),
            _ => self.current,
        }
    }

    fn mirror(&self, ctrl: Point) -> Point {
        self.current + (self.current - ctrl)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::new()
    }
}

#[test]
fn close_path_keeps_current_position() {
    let mut resolver = Resolver::new();
    resolver.resolve(Command::MoveTo(point(1.0, 1.0)), false);
    resolver.resolve(Command::LineTo(point(4.0, 5.0)), false);
    resolver.resolve(Command::ClosePath, true);

    assert_eq!(resolver.current_position(), point(4.0, 5.0));
    assert_eq!(resolver.previous(), Some(&Command::ClosePath));

    let line = resolver.resolve(Command::LineTo(point(1.0, 0.0)), true);
    assert_eq!(line, Command::LineTo(point(5.0, 5.0)));
}

#[test]
fn resolving_absolute_commands_is_a_no_op() {
    let commands = [
        Command::MoveTo(point(1.5, -2.0)),
        Command::QuadraticCurve {
            ctrl: point(3.0, 4.0),
            to: point(5.0, 6.0),
        },
        Command::ClosePath,
        Command::CubicCurve {
            ctrl1: point(0.1, 0.2),
            ctrl2: point(0.3, 0.4),
            to: point(0.5, 0.6),
        },
    ];

    let mut resolver = Resolver::new();
    for cmd in &commands {
        assert_eq!(resolver.resolve(*cmd, false), *cmd);
    }
}

#[test]
fn mirrored_control_points() {
    let mut resolver = Resolver::new();
    resolver.resolve(Command::MoveTo(point(0.0, 0.0)), false);
    assert_eq!(resolver.mirrored_cubic_ctrl(), point(0.0, 0.0));

    resolver.resolve(
        Command::CubicCurve {
            ctrl1: point(1.0, 1.0),
            ctrl2: point(3.0, 2.0),
            to: point(4.0, 0.0),
        },
        false,
    );
    assert_eq!(resolver.mirrored_cubic_ctrl(), point(5.0, -2.0));
    // Not a quadratic curve.
    assert_eq!(resolver.mirrored_quadratic_ctrl(), point(4.0, 0.0));
}

//! The default path data structure.

use std::fmt;
use std::str::FromStr;

use crate::builder::PathBuilder;
use crate::command::{ArcDescriptor, Command};
use crate::events::PathEvent;
use crate::geom::{arrayvec::ArrayVec, ArcFlags, CubicBezierSegment};
use crate::math::{point, Angle, Point, Vector};
use crate::parser::{ParseError, ParserOptions, PathParser};
use crate::serializer::PathSerializer;

/// An ordered sequence of drawing commands with absolute coordinates.
///
/// Two paths are equal if their command sequences are equal.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    commands: Vec<Command>,
}

impl Path {
    pub fn new(commands: Vec<Command>) -> Self {
        Path { commands }
    }

    /// Creates a [Builder](struct.Builder.html) to build a path command by command.
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Parses SVG path data with the default options.
    pub fn parse(src: &str) -> Result<Self, ParseError> {
        Path::parse_with_options(src, &ParserOptions::DEFAULT)
    }

    pub fn parse_with_options(src: &str, options: &ParserOptions) -> Result<Self, ParseError> {
        PathParser::new().parse(options, src)
    }

    /// Rebuilds a path from host primitives, one command per event.
    pub fn from_events<Evts>(events: Evts) -> Self
    where
        Evts: IntoIterator<Item = PathEvent>,
    {
        let mut builder = Path::builder();
        builder.extend(events);

        builder.build()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// Iterates over the path as host primitives, approximating arcs with cubic
    /// bézier curves.
    pub fn events(&self) -> Events<'_> {
        Events::new(&self.commands)
    }

    /// Returns a copy of this path where each arc is replaced with its
    /// approximation by cubic bézier curves.
    pub fn with_flattened_arcs(&self) -> Path {
        let mut commands = Vec::with_capacity(self.commands.len());
        let mut current = point(0.0, 0.0);
        let mut first = current;

        for cmd in &self.commands {
            match *cmd {
                Command::Arc(arc) => {
                    arc.to_svg_arc(current)
                        .for_each_cubic_bezier(&mut |curve| {
                            commands.push(Command::CubicCurve {
                                ctrl1: curve.ctrl1,
                                ctrl2: curve.ctrl2,
                                to: curve.to,
                            });
                        });
                    current = arc.to;
                }
                Command::MoveTo(to) => {
                    first = to;
                    current = to;
                    commands.push(*cmd);
                }
                Command::ClosePath => {
                    current = first;
                    commands.push(*cmd);
                }
                Command::LineTo(to)
                | Command::QuadraticCurve { to, .. }
                | Command::CubicCurve { to, .. } => {
                    current = to;
                    commands.push(*cmd);
                }
            }
        }

        Path { commands }
    }
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<Self, ParseError> {
        Path::parse(src)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&PathSerializer::new().serialize(self))
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = &'l Command;
    type IntoIter = std::slice::Iter<'l, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Command>> for Path {
    fn from(commands: Vec<Command>) -> Self {
        Path::new(commands)
    }
}

/// Builds a `Path` command by command.
///
/// Implements [`PathBuilder`] so that host primitives can be converted back into
/// a path, and additionally supports elliptic arcs.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    commands: Vec<Command>,
}

impl Builder {
    pub fn new() -> Self {
        Builder::default()
    }

    pub fn with_capacity(commands: usize) -> Self {
        Builder {
            commands: Vec::with_capacity(commands),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn arc_to(&mut self, radii: Vector, x_rotation: Angle, flags: ArcFlags, to: Point) {
        self.commands.push(Command::Arc(ArcDescriptor {
            radii,
            x_rotation,
            flags,
            to,
        }));
    }

    pub fn build(self) -> Path {
        Path {
            commands: self.commands,
        }
    }
}

impl PathBuilder for Builder {
    fn move_to(&mut self, to: Point) {
        self.commands.push(Command::MoveTo(to));
    }

    fn line_to(&mut self, to: Point) {
        self.commands.push(Command::LineTo(to));
    }

    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.commands.push(Command::QuadraticCurve { ctrl, to });
    }

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.commands.push(Command::CubicCurve { ctrl1, ctrl2, to });
    }

    fn close(&mut self) {
        self.commands.push(Command::ClosePath);
    }
}

/// An iterator of `PathEvent` for `Path`.
///
/// Arcs are approximated with cubic bézier curves starting at the current point.
/// A drawing command that is not preceded by a move-to starts a sub-path at the
/// current point (the origin, or the start of the previous sub-path after a close).
/// After a close, the current point is the start of the closed sub-path.
#[derive(Clone)]
pub struct Events<'l> {
    commands: std::slice::Iter<'l, Command>,
    deferred: Option<&'l Command>,
    current: Point,
    first: Point,
    in_subpath: bool,
    arc: ArrayVec<CubicBezierSegment<f64>, 4>,
    arc_index: usize,
}

impl<'l> Events<'l> {
    fn new(commands: &'l [Command]) -> Self {
        Events {
            commands: commands.iter(),
            deferred: None,
            current: point(0.0, 0.0),
            first: point(0.0, 0.0),
            in_subpath: false,
            arc: ArrayVec::new(),
            arc_index: 0,
        }
    }
}

impl<'l> Iterator for Events<'l> {
    type Item = PathEvent;

    fn next(&mut self) -> Option<PathEvent> {
        loop {
            if let Some(&curve) = self.arc.get(self.arc_index) {
                self.arc_index += 1;
                self.current = curve.to;
                return Some(PathEvent::Cubic {
                    from: curve.from,
                    ctrl1: curve.ctrl1,
                    ctrl2: curve.ctrl2,
                    to: curve.to,
                });
            }

            let cmd = match self.deferred.take() {
                Some(cmd) => cmd,
                None => self.commands.next()?,
            };

            match *cmd {
                Command::MoveTo(at) => {
                    self.first = at;
                    self.current = at;
                    self.in_subpath = true;
                    return Some(PathEvent::Begin { at });
                }
                Command::ClosePath => {
                    if !self.in_subpath {
                        continue;
                    }
                    self.in_subpath = false;
                    let last = self.current;
                    self.current = self.first;
                    return Some(PathEvent::Close {
                        last,
                        first: self.first,
                    });
                }
                _ if !self.in_subpath => {
                    self.in_subpath = true;
                    self.first = self.current;
                    self.deferred = Some(cmd);
                    return Some(PathEvent::Begin { at: self.current });
                }
                Command::LineTo(to) => {
                    let from = self.current;
                    self.current = to;
                    return Some(PathEvent::Line { from, to });
                }
                Command::QuadraticCurve { ctrl, to } => {
                    let from = self.current;
                    self.current = to;
                    return Some(PathEvent::Quadratic { from, ctrl, to });
                }
                Command::CubicCurve { ctrl1, ctrl2, to } => {
                    let from = self.current;
                    self.current = to;
                    return Some(PathEvent::Cubic {
                        from,
                        ctrl1,
                        ctrl2,
                        to,
                    });
                }
                Command::Arc(arc) => {
                    self.arc = arc.to_svg_arc(self.current).to_cubic_beziers();
                    self.arc_index = 0;
                }
            }
        }
    }
}

#[test]
fn events_of_simple_path() {
    let path = Path::parse("M 0 0 L 10 0 Q 20 0 20 -10 Z L 0 5").unwrap();
    let events: Vec<PathEvent> = path.events().collect();

    assert_eq!(
        events,
        vec![
            PathEvent::Begin {
                at: point(0.0, 0.0)
            },
            PathEvent::Line {
                from: point(0.0, 0.0),
                to: point(10.0, 0.0)
            },
            PathEvent::Quadratic {
                from: point(10.0, 0.0),
                ctrl: point(20.0, 0.0),
                to: point(20.0, 10.0)
            },
            PathEvent::Close {
                last: point(20.0, 10.0),
                first: point(0.0, 0.0)
            },
            // A new sub-path starts where the previous one was closed.
            PathEvent::Begin {
                at: point(0.0, 0.0)
            },
            PathEvent::Line {
                from: point(0.0, 0.0),
                to: point(0.0, -5.0)
            },
        ]
    );
}

#[test]
fn events_without_move_to() {
    let path = Path::new(vec![
        Command::LineTo(point(1.0, 1.0)),
        Command::ClosePath,
        Command::ClosePath,
    ]);
    let events: Vec<PathEvent> = path.events().collect();

    assert_eq!(
        events,
        vec![
            PathEvent::Begin {
                at: point(0.0, 0.0)
            },
            PathEvent::Line {
                from: point(0.0, 0.0),
                to: point(1.0, 1.0)
            },
            PathEvent::Close {
                last: point(1.0, 1.0),
                first: point(0.0, 0.0)
            },
        ]
    );
}

#[test]
fn arcs_are_flattened_lazily() {
    let path = Path::parse("M 0 0 A 50 50 0 0 1 100 0 L 100 50 A 10 10 0 0 0 100 50").unwrap();
    let events: Vec<PathEvent> = path.events().collect();

    // Begin, two cubic curves, a line and nothing for the degenerate arc.
    assert_eq!(events.len(), 4);
    assert_eq!(events[1].from(), point(0.0, 0.0));
    assert_eq!(events[2].to(), point(100.0, 0.0));
    match events[1] {
        PathEvent::Cubic { to, .. } => {
            // The y axis is inverted, so the arc bulges upwards.
            assert!((to.x - 50.0).abs() < 1e-9);
            assert!((to.y - 50.0).abs() < 1e-9);
        }
        _ => panic!("expected a cubic bézier curve"),
    }

    let flattened = path.with_flattened_arcs();
    assert_eq!(flattened.len(), 4);
    assert!(flattened.iter().all(|cmd| cmd.letter() != 'A'));
    assert_eq!(flattened.events().collect::<Vec<_>>(), events);
}

#[test]
fn reverse_conversion() {
    let path = Path::parse("M 0 0 L 10 0 Q 20 0 20 10 C 20 20 10 20 0 10 Z M 5 5").unwrap();
    let rebuilt = Path::from_events(path.events());

    assert_eq!(rebuilt, path);
}

#[test]
fn builder_and_display() {
    use crate::math::vector;

    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    builder.arc_to(
        vector(5.0, 5.0),
        Angle::radians(0.0),
        ArcFlags::default(),
        point(20.0, 0.0),
    );
    builder.close();
    let path = builder.build();

    assert_eq!(path.len(), 4);
    assert_eq!(path.to_string(), "M 0 0 L 10 0 A 5 5 0 0 1 20 0 Z");
    assert_eq!(path.to_string().parse::<Path>().unwrap(), path);
}

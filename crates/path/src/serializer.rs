//! Write paths back as SVG path data.

use crate::command::Command;
use crate::math::{point, Point, Vector};
use crate::path::Path;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SerializerOptions {
    /// Write lowercase commands with coordinates relative to the current point.
    pub relative: bool,
    /// Undo the y axis inversion applied by the parser.
    pub invert_y_axis: bool,
}

impl SerializerOptions {
    pub const DEFAULT: SerializerOptions = SerializerOptions {
        relative: false,
        invert_y_axis: true,
    };
}

impl Default for SerializerOptions {
    fn default() -> Self {
        SerializerOptions::DEFAULT
    }
}

/// Builds a `String` representation of a path using the SVG syntax.
///
/// No effort is put into making the output compact. Parsing the output with
/// matching options gives back the same path, up to rounding errors for relative
/// coordinates and arc rotations.
#[derive(Clone, Debug)]
pub struct PathSerializer {
    options: SerializerOptions,
    output: String,
    current: Point,
}

impl PathSerializer {
    pub fn new() -> Self {
        PathSerializer::with_options(SerializerOptions::DEFAULT)
    }

    pub fn with_options(options: SerializerOptions) -> Self {
        PathSerializer {
            options,
            output: String::new(),
            current: point(0.0, 0.0),
        }
    }

    pub fn serialize(&mut self, path: &Path) -> String {
        self.output.clear();
        self.current = point(0.0, 0.0);

        for cmd in path {
            self.write_command(cmd);
        }

        std::mem::take(&mut self.output)
    }

    fn write_command(&mut self, cmd: &Command) {
        if !self.output.is_empty() {
            self.output.push(' ');
        }

        let relative = self.options.relative;
        let origin = if relative {
            self.current.to_vector()
        } else {
            Vector::zero()
        };

        let letter = cmd.letter();
        self.output
            .push(if relative { letter.to_ascii_lowercase() } else { letter });

        match *cmd {
            Command::MoveTo(to) | Command::LineTo(to) => {
                self.push_point(to - origin);
            }
            Command::QuadraticCurve { ctrl, to } => {
                self.push_point(ctrl - origin);
                self.push_point(to - origin);
            }
            Command::CubicCurve { ctrl1, ctrl2, to } => {
                self.push_point(ctrl1 - origin);
                self.push_point(ctrl2 - origin);
                self.push_point(to - origin);
            }
            Command::Arc(arc) => {
                let invert = self.options.invert_y_axis;
                let rotation = arc.x_rotation.to_degrees();
                self.push_number(arc.radii.x);
                self.push_number(arc.radii.y);
                self.push_number(if invert { -rotation } else { rotation });
                self.push_flag(arc.flags.large_arc);
                self.push_flag(arc.flags.sweep != invert);
                self.push_point(arc.to - origin);
            }
            Command::ClosePath => {}
        }

        if let Some(to) = cmd.endpoint() {
            self.current = to;
        }
    }

    fn push_point(&mut self, p: Point) {
        self.push_number(p.x);
        self.push_number(if self.options.invert_y_axis { -p.y } else { p.y });
    }

    fn push_flag(&mut self, flag: bool) {
        self.output.push_str(if flag { " 1" } else { " 0" });
    }

    fn push_number(&mut self, value: f64) {
        // Avoid writing "-0".
        let value = if value == 0.0 { 0.0 } else { value };
        self.output += &format!(" {}", value);
    }
}

impl Default for PathSerializer {
    fn default() -> Self {
        PathSerializer::new()
    }
}

#[test]
fn absolute_round_trip() {
    let src = "M 150 0 L 75 200 Q 1.5 -2.25 0.125 3 C 1 2 3 4 5 6 Z M 10 10";
    let path = Path::parse(src).unwrap();

    let serialized = PathSerializer::new().serialize(&path);
    assert_eq!(serialized, src);
    assert_eq!(Path::parse(&serialized).unwrap(), path);
}

#[test]
fn relative_output() {
    let path = Path::parse("M 10 10 L 20 20 Z L 5 5").unwrap();
    let mut serializer = PathSerializer::with_options(SerializerOptions {
        relative: true,
        invert_y_axis: true,
    });

    let serialized = serializer.serialize(&path);
    assert_eq!(serialized, "m 10 10 l 10 10 z l -15 -15");
    assert_eq!(Path::parse(&serialized).unwrap(), path);
}

#[test]
fn arc_output() {
    let options = crate::parser::ParserOptions {
        invert_y_axis: false,
        implicit_line_to: false,
    };
    let path = Path::parse_with_options("M 0 0 A 25 50 0 1 0 100 10", &options).unwrap();
    let mut serializer = PathSerializer::with_options(SerializerOptions {
        relative: false,
        invert_y_axis: false,
    });

    assert_eq!(serializer.serialize(&path), "M 0 0 A 25 50 0 1 0 100 10");

    // Inverted both ways.
    let path = Path::parse("M 0 0 A 25 50 0 1 0 100 10").unwrap();
    assert_eq!(path.to_string(), "M 0 0 A 25 50 0 1 0 100 10");

    // Rotations go through degrees.
    let path = Path::parse("M 0 0 a 25 50 30 1 0 100 10").unwrap();
    let reparsed = Path::parse(&path.to_string()).unwrap();
    match (path.commands()[1], reparsed.commands()[1]) {
        (Command::Arc(a), Command::Arc(b)) => {
            assert!((a.x_rotation.get() - b.x_rotation.get()).abs() < 1e-12);
            assert_eq!(a.flags, b.flags);
            assert_eq!(a.to, b.to);
        }
        _ => panic!("expected arcs"),
    }
}

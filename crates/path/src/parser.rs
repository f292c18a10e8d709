//! SVG path data parsing.
//!
//! The tokenizer and the command parser run as a single pass over the input.
//! Numbers are accumulated against the most recent command letter and turned into
//! commands as soon as the next letter (or the end of the input) is reached.

use crate::command::{ArcDescriptor, Command};
use crate::geom::ArcFlags;
use crate::math::{point, vector, Angle, Point};
use crate::path::Path;
use crate::resolve::Resolver;

use thiserror::Error;

/// A fatal error found while parsing path data.
///
/// Positions are offsets in characters (Unicode scalar values) from the start of
/// the input.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Position {position}: Unexpected token {text:?}.")]
    UnexpectedToken { text: String, position: usize },
    #[error("Position {position}: Command {command:?} expects {expected} arguments.")]
    MissingArgument {
        command: char,
        expected: usize,
        position: usize,
    },
    #[error("Position {position}: Command {command:?} expects a multiple of {expected} arguments.")]
    UnexpectedArgument {
        command: char,
        expected: usize,
        position: usize,
    },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match *self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::MissingArgument { position, .. }
            | ParseError::UnexpectedArgument { position, .. } => position,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ParserOptions {
    /// Negate the y coordinate of every decoded point, mapping SVG's downward y axis
    /// onto an upward one.
    pub invert_y_axis: bool,
    /// Treat the argument groups following the first one of a move-to command as
    /// line-to commands, as SVG does. When false they are repeated move-to commands.
    pub implicit_line_to: bool,
}

impl ParserOptions {
    pub const DEFAULT: ParserOptions = ParserOptions {
        invert_y_axis: true,
        implicit_line_to: false,
    };
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions::DEFAULT
    }
}

/// The command letters, independently of their relative or absolute form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Verb {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    QuadraticTo,
    SmoothQuadraticTo,
    CubicTo,
    SmoothCubicTo,
    ArcTo,
    Close,
}

impl Verb {
    fn from_letter(letter: char) -> Option<Verb> {
        Some(match letter.to_ascii_uppercase() {
            'M' => Verb::MoveTo,
            'L' => Verb::LineTo,
            'H' => Verb::HorizontalLineTo,
            'V' => Verb::VerticalLineTo,
            'Q' => Verb::QuadraticTo,
            'T' => Verb::SmoothQuadraticTo,
            'C' => Verb::CubicTo,
            'S' => Verb::SmoothCubicTo,
            'A' => Verb::ArcTo,
            'Z' => Verb::Close,
            _ => {
                return None;
            }
        })
    }

    /// Number of arguments consumed by one repetition of the command.
    fn arity(self) -> usize {
        match self {
            Verb::Close => 0,
            Verb::HorizontalLineTo | Verb::VerticalLineTo => 1,
            Verb::MoveTo | Verb::LineTo | Verb::SmoothQuadraticTo => 2,
            Verb::QuadraticTo | Verb::SmoothCubicTo => 4,
            Verb::CubicTo => 6,
            Verb::ArcTo => 7,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct PendingCommand {
    verb: Verb,
    letter: char,
    position: usize,
}

impl PendingCommand {
    fn is_relative(&self) -> bool {
        self.letter.is_ascii_lowercase()
    }
}

/// A context object for parsing SVG path data.
///
/// The parser keeps its buffers between calls to `parse`, so reusing it to parse
/// many paths avoids some allocations.
#[derive(Debug, Default)]
pub struct PathParser {
    float_buffer: String,
    literal_start: usize,
    arguments: Vec<f64>,
    pending: Option<PendingCommand>,
    resolver: Resolver,
    output: Vec<Command>,
    options: ParserOptions,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, options: &ParserOptions, src: &str) -> Result<Path, ParseError> {
        self.options = *options;
        self.float_buffer.clear();
        self.arguments.clear();
        self.pending = None;
        self.resolver = Resolver::new();
        self.output.clear();

        self.parse_path(src)?;

        Ok(Path::new(std::mem::take(&mut self.output)))
    }

    fn parse_path(&mut self, src: &str) -> Result<(), ParseError> {
        for (position, c) in src.chars().enumerate() {
            match c {
                '0'..='9' | '+' | 'e' | 'E' => {
                    self.push_char(c, position);
                }
                '.' => {
                    if self.float_buffer.contains('.') {
                        self.flush_number()?;
                    }
                    self.push_char(c, position);
                }
                '-' => {
                    if !self.float_buffer.ends_with(|c: char| c == 'e' || c == 'E') {
                        self.flush_number()?;
                    }
                    self.push_char(c, position);
                }
                ' ' | '\t' | '\r' | '\n' | ',' => {
                    self.flush_number()?;
                }
                c if c.is_ascii_alphabetic() => {
                    self.flush_number()?;
                    self.flush_command()?;

                    let verb = Verb::from_letter(c).ok_or_else(|| ParseError::UnexpectedToken {
                        text: c.to_string(),
                        position,
                    })?;

                    self.pending = Some(PendingCommand {
                        verb,
                        letter: c,
                        position,
                    });
                }
                _ => {
                    return Err(ParseError::UnexpectedToken {
                        text: c.to_string(),
                        position,
                    });
                }
            }
        }

        self.flush_number()?;
        self.flush_command()
    }

    fn push_char(&mut self, c: char, position: usize) {
        if self.float_buffer.is_empty() {
            self.literal_start = position;
        }
        self.float_buffer.push(c);
    }

    fn flush_number(&mut self) -> Result<(), ParseError> {
        if self.float_buffer.is_empty() {
            return Ok(());
        }

        let value = match (self.pending, self.float_buffer.parse::<f64>()) {
            (Some(_), Ok(value)) => value,
            _ => {
                return Err(ParseError::UnexpectedToken {
                    text: std::mem::take(&mut self.float_buffer),
                    position: self.literal_start,
                });
            }
        };

        self.arguments.push(value);
        self.float_buffer.clear();

        Ok(())
    }

    fn flush_command(&mut self) -> Result<(), ParseError> {
        let cmd = match self.pending.take() {
            Some(cmd) => cmd,
            None => {
                return Ok(());
            }
        };

        let arity = cmd.verb.arity();
        let count = self.arguments.len();

        if arity == 0 {
            if count > 0 {
                return Err(ParseError::UnexpectedArgument {
                    command: cmd.letter,
                    expected: 0,
                    position: cmd.position,
                });
            }
            let close = self.resolver.resolve(Command::ClosePath, cmd.is_relative());
            self.output.push(close);
            return Ok(());
        }

        if count < arity {
            return Err(ParseError::MissingArgument {
                command: cmd.letter,
                expected: arity,
                position: cmd.position,
            });
        }

        if count % arity != 0 {
            return Err(ParseError::UnexpectedArgument {
                command: cmd.letter,
                expected: arity,
                position: cmd.position,
            });
        }

        let arguments = std::mem::take(&mut self.arguments);
        let mut cursor = 0;
        while cursor < count {
            let group = &arguments[cursor..cursor + arity];
            let command = self.decode(cmd, cursor > 0, group);
            let command = self.resolver.resolve(command, cmd.is_relative());
            self.output.push(command);
            cursor += arity;
        }

        self.arguments = arguments;
        self.arguments.clear();

        Ok(())
    }

    /// Builds one command from an argument group, in the frame of the command
    /// (relative to the current point for lowercase letters).
    fn decode(&self, cmd: PendingCommand, repeated: bool, args: &[f64]) -> Command {
        let is_relative = cmd.is_relative();
        let origin = self.resolver.origin(is_relative);
        let current = self.resolver.current_position();

        match cmd.verb {
            Verb::MoveTo => {
                let to = self.point(args[0], args[1]);
                if repeated && self.options.implicit_line_to {
                    Command::LineTo(to)
                } else {
                    Command::MoveTo(to)
                }
            }
            Verb::LineTo => Command::LineTo(self.point(args[0], args[1])),
            Verb::HorizontalLineTo => {
                let y = if is_relative { 0.0 } else { current.y };
                Command::LineTo(point(args[0], y))
            }
            Verb::VerticalLineTo => {
                let x = if is_relative { 0.0 } else { current.x };
                Command::LineTo(point(x, self.y(args[0])))
            }
            Verb::QuadraticTo => Command::QuadraticCurve {
                ctrl: self.point(args[0], args[1]),
                to: self.point(args[2], args[3]),
            },
            Verb::SmoothQuadraticTo => Command::QuadraticCurve {
                ctrl: self.resolver.mirrored_quadratic_ctrl() - origin,
                to: self.point(args[0], args[1]),
            },
            Verb::CubicTo => Command::CubicCurve {
                ctrl1: self.point(args[0], args[1]),
                ctrl2: self.point(args[2], args[3]),
                to: self.point(args[4], args[5]),
            },
            Verb::SmoothCubicTo => Command::CubicCurve {
                ctrl1: self.resolver.mirrored_cubic_ctrl() - origin,
                ctrl2: self.point(args[0], args[1]),
                to: self.point(args[2], args[3]),
            },
            Verb::ArcTo => {
                // Mirroring the y axis also mirrors the arc: its rotation and
                // its direction are reversed.
                let invert = self.options.invert_y_axis;
                let rotation = args[2].to_radians();
                Command::Arc(ArcDescriptor {
                    radii: vector(args[0], args[1]),
                    x_rotation: Angle::radians(if invert { -rotation } else { rotation }),
                    flags: ArcFlags {
                        large_arc: args[3] != 0.0,
                        sweep: (args[4] != 0.0) != invert,
                    },
                    to: self.point(args[5], args[6]),
                })
            }
            Verb::Close => Command::ClosePath,
        }
    }

    fn y(&self, y: f64) -> f64 {
        if self.options.invert_y_axis {
            -y
        } else {
            y
        }
    }

    fn point(&self, x: f64, y: f64) -> Point {
        point(x, self.y(y))
    }
}

#[cfg(test)]
fn parse(src: &str) -> Result<Vec<Command>, ParseError> {
    Path::parse_with_options(
        src,
        &ParserOptions {
            invert_y_axis: false,
            implicit_line_to: false,
        },
    )
    .map(Path::into_commands)
}

#[test]
fn triangle() {
    let expected = vec![
        Command::MoveTo(point(150.0, 0.0)),
        Command::LineTo(point(75.0, 200.0)),
        Command::LineTo(point(225.0, 200.0)),
        Command::ClosePath,
    ];

    assert_eq!(parse("M150 0 L75 200 L225 200 Z").unwrap(), expected);
    assert_eq!(parse("M150 0 L75 200 225 200 Z").unwrap(), expected);
    assert_eq!(parse("M150,0L75,200,225,200Z").unwrap(), expected);
    assert_eq!(
        parse("M150 0e0 L75 200e-0 225E+0 200E-0 Z").unwrap(),
        expected
    );
}

#[test]
fn inverted_y_axis() {
    let path = Path::parse("M150 0 L75 200 225 200 Z").unwrap();
    assert_eq!(
        path.commands(),
        &[
            Command::MoveTo(point(150.0, 0.0)),
            Command::LineTo(point(75.0, -200.0)),
            Command::LineTo(point(225.0, -200.0)),
            Command::ClosePath,
        ]
    );

    let path = Path::parse("M 10 10 v 5 h 3").unwrap();
    assert_eq!(
        path.commands(),
        &[
            Command::MoveTo(point(10.0, -10.0)),
            Command::LineTo(point(10.0, -15.0)),
            Command::LineTo(point(13.0, -15.0)),
        ]
    );
}

#[test]
fn literal_disambiguation() {
    assert_eq!(parse("M0 0L-.57.13Z"), parse("M 0 0 L -0.57 0.13 Z"));
    assert_eq!(
        parse("M.5.5.5.5").unwrap(),
        vec![
            Command::MoveTo(point(0.5, 0.5)),
            Command::MoveTo(point(0.5, 0.5)),
        ]
    );
    assert_eq!(
        parse("M10-5 1e2-1.5e-1").unwrap(),
        vec![
            Command::MoveTo(point(10.0, -5.0)),
            Command::MoveTo(point(100.0, -0.15)),
        ]
    );
    // A plus sign does not start a new literal.
    assert_eq!(
        parse("M+1+2"),
        Err(ParseError::UnexpectedToken {
            text: "+1+2".to_string(),
            position: 1,
        })
    );
}

#[test]
fn implicit_repetition_arity() {
    let groups: [(char, usize); 9] = [
        ('M', 2),
        ('L', 2),
        ('H', 1),
        ('V', 1),
        ('Q', 4),
        ('T', 2),
        ('C', 6),
        ('S', 4),
        ('A', 7),
    ];

    for &(letter, arity) in &groups {
        for k in 1..4 {
            let args: Vec<String> = (0..arity * k).map(|i| (i + 1).to_string()).collect();
            let src = format!("M 0 0 {} {}", letter, args.join(" "));
            let commands = parse(&src).unwrap();
            assert_eq!(commands.len(), k + 1, "{}", src);
            for cmd in &commands[1..] {
                let expected = match letter {
                    'H' | 'V' => 'L',
                    'T' => 'Q',
                    'S' => 'C',
                    _ => letter,
                };
                assert_eq!(cmd.letter(), expected, "{}", src);
            }

            let src = format!("M 0 0 {} {} 1", letter, args.join(" "));
            let position = 6;
            if arity == 1 {
                // Any count is a multiple of one.
                assert!(parse(&src).is_ok());
            } else {
                assert_eq!(
                    parse(&src),
                    Err(ParseError::UnexpectedArgument {
                        command: letter,
                        expected: arity,
                        position,
                    }),
                    "{}",
                    src
                );
            }
        }

        let src = format!("M 0 0 {}", letter);
        assert_eq!(
            parse(&src),
            Err(ParseError::MissingArgument {
                command: letter,
                expected: arity,
                position: 6,
            })
        );
    }
}

#[test]
fn arity_errors() {
    assert_eq!(
        parse("M150 0 L75 200 L225 200 Z5"),
        Err(ParseError::UnexpectedArgument {
            command: 'Z',
            expected: 0,
            position: 24,
        })
    );
    assert_eq!(
        parse("M 0 0 c 1 2 3"),
        Err(ParseError::MissingArgument {
            command: 'c',
            expected: 6,
            position: 6,
        })
    );
    assert_eq!(
        parse("M 0 0 L 1 2 3 4 5 Z"),
        Err(ParseError::UnexpectedArgument {
            command: 'L',
            expected: 2,
            position: 6,
        })
    );
}

#[test]
fn unexpected_tokens() {
    assert_eq!(
        parse("10 20 L 5 5"),
        Err(ParseError::UnexpectedToken {
            text: "10".to_string(),
            position: 0,
        })
    );
    assert_eq!(
        parse("M 0 0 X 1"),
        Err(ParseError::UnexpectedToken {
            text: "X".to_string(),
            position: 6,
        })
    );
    assert_eq!(
        parse("M 0 0 # 1"),
        Err(ParseError::UnexpectedToken {
            text: "#".to_string(),
            position: 6,
        })
    );
    assert_eq!(
        parse("M 1e 2"),
        Err(ParseError::UnexpectedToken {
            text: "1e".to_string(),
            position: 2,
        })
    );
    assert_eq!(
        parse("M 0 0 L - 5"),
        Err(ParseError::UnexpectedToken {
            text: "-".to_string(),
            position: 8,
        })
    );

    // A decimal point after an exponent does not start a new number.
    assert_eq!(
        parse("M1e1.5 2"),
        Err(ParseError::UnexpectedToken {
            text: "1e1.5".to_string(),
            position: 1,
        })
    );

    let err = parse("M 0 0 Z 1").unwrap_err();
    assert_eq!(err.position(), 6);
    assert_eq!(
        err.to_string(),
        "Position 6: Command 'Z' expects a multiple of 0 arguments."
    );
}

#[test]
fn relative_commands() {
    assert_eq!(
        parse("m 10 10 l 5 5 h 5 v -5 z l 1 1").unwrap(),
        vec![
            Command::MoveTo(point(10.0, 10.0)),
            Command::LineTo(point(15.0, 15.0)),
            Command::LineTo(point(20.0, 15.0)),
            Command::LineTo(point(20.0, 10.0)),
            Command::ClosePath,
            Command::LineTo(point(21.0, 11.0)),
        ]
    );

    assert_eq!(
        parse("M 10 10 H 30 V 40").unwrap(),
        vec![
            Command::MoveTo(point(10.0, 10.0)),
            Command::LineTo(point(30.0, 10.0)),
            Command::LineTo(point(30.0, 40.0)),
        ]
    );
}

#[test]
fn relative_absolute_equivalence() {
    let absolute = "M 10 20 C 15 25 20 25 25 20 S 35 15 40 20 Q 45 25 50 20 T 60 20 \
                    A 5 5 0 0 1 70 20 L 80 30 H 90 V 40 Z";
    let relative = "m 10 20 c 5 5 10 5 15 0 s 10 -5 15 0 q 5 5 10 0 t 10 0 \
                    a 5 5 0 0 1 10 0 l 10 10 h 10 v 10 z";

    assert_eq!(Path::parse(absolute), Path::parse(relative));

    let options = ParserOptions {
        invert_y_axis: false,
        implicit_line_to: true,
    };
    assert_eq!(
        Path::parse_with_options(absolute, &options),
        Path::parse_with_options(relative, &options)
    );
}

#[test]
fn smooth_curves() {
    assert_eq!(
        parse("M 0 0 C 10 10 20 10 30 0 S 50 -10 60 0").unwrap()[2],
        Command::CubicCurve {
            ctrl1: point(40.0, -10.0),
            ctrl2: point(50.0, -10.0),
            to: point(60.0, 0.0),
        }
    );

    // No previous cubic curve: the control point is the current point.
    assert_eq!(
        parse("M 0 0 L 10 0 S 20 10 30 0").unwrap()[2],
        Command::CubicCurve {
            ctrl1: point(10.0, 0.0),
            ctrl2: point(20.0, 10.0),
            to: point(30.0, 0.0),
        }
    );
    assert_eq!(
        parse("M 0 0 C 1 1 2 2 3 3 T 10 0").unwrap()[2],
        Command::QuadraticCurve {
            ctrl: point(3.0, 3.0),
            to: point(10.0, 0.0),
        }
    );

    let commands = parse("M 0 0 Q 10 10 20 0 T 40 0 t 20 0").unwrap();
    assert_eq!(
        &commands[2..],
        &[
            Command::QuadraticCurve {
                ctrl: point(30.0, -10.0),
                to: point(40.0, 0.0),
            },
            Command::QuadraticCurve {
                ctrl: point(50.0, 10.0),
                to: point(60.0, 0.0),
            },
        ]
    );
}

#[test]
fn arcs() {
    let expected = Command::Arc(ArcDescriptor {
        radii: vector(25.0, 50.0),
        x_rotation: Angle::radians(30.0f64.to_radians()),
        flags: ArcFlags {
            large_arc: true,
            sweep: false,
        },
        to: point(100.0, 10.0),
    });
    assert_eq!(parse("M 0 0 A 25 50 30 1 0 100 10").unwrap()[1], expected);
    assert_eq!(parse("M 50 5 a 25 50 30 1 0 50 5").unwrap()[1], expected);

    // Inverting the y axis mirrors the arc.
    let path = Path::parse("M 0 0 A 25 50 30 1 0 100 10").unwrap();
    assert_eq!(
        path.commands()[1],
        Command::Arc(ArcDescriptor {
            radii: vector(25.0, 50.0),
            x_rotation: Angle::radians(-(30.0f64.to_radians())),
            flags: ArcFlags {
                large_arc: true,
                sweep: true,
            },
            to: point(100.0, -10.0),
        })
    );
}

#[test]
fn implicit_line_to() {
    let options = ParserOptions {
        invert_y_axis: false,
        implicit_line_to: true,
    };
    assert_eq!(
        Path::parse_with_options("M 1 2 3 4 m 1 1 2 2", &options)
            .unwrap()
            .into_commands(),
        vec![
            Command::MoveTo(point(1.0, 2.0)),
            Command::LineTo(point(3.0, 4.0)),
            Command::MoveTo(point(4.0, 5.0)),
            Command::LineTo(point(6.0, 7.0)),
        ]
    );
}

#[test]
fn parser_reuse() {
    let mut parser = PathParser::new();
    let options = ParserOptions::DEFAULT;

    assert!(parser.parse(&options, "M 0 0 L 1").is_err());
    let path = parser.parse(&options, "M 0 0 L 1 1").unwrap();
    assert_eq!(path.len(), 2);

    assert!(parser.parse(&options, "").unwrap().is_empty());
    assert!(parser.parse(&options, " ,\n\t").unwrap().is_empty());
}

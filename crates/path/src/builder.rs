//! The interface between parsed paths and host 2D path APIs.
//!
//! Host path objects usually expose move/line/quadratic/cubic/close primitives and
//! nothing else. Implementing [`PathBuilder`] for such an object is enough to replay
//! a [`Path`](crate::Path) into it:
//!
//! ```
//! use svgpath_path::{Path, PathBuilder};
//! use svgpath_path::math::Point;
//!
//! // A host path that only counts the primitives it receives.
//! #[derive(Default)]
//! struct Counter {
//!     curves: usize,
//!     closed: usize,
//! }
//!
//! impl PathBuilder for Counter {
//!     fn move_to(&mut self, _to: Point) {}
//!     fn line_to(&mut self, _to: Point) {}
//!     fn quadratic_bezier_to(&mut self, _ctrl: Point, _to: Point) {}
//!     fn cubic_bezier_to(&mut self, _ctrl1: Point, _ctrl2: Point, _to: Point) {
//!         self.curves += 1;
//!     }
//!     fn close(&mut self) {
//!         self.closed += 1;
//!     }
//! }
//!
//! let path = Path::parse("M 0 0 A 50 50 0 0 1 100 0 Z").unwrap();
//! let mut host = Counter::default();
//! host.extend(path.events());
//!
//! // The arc was approximated with two cubic bézier curves.
//! assert_eq!(host.curves, 2);
//! assert_eq!(host.closed, 1);
//! ```

use crate::events::PathEvent;
use crate::math::Point;

/// The primitives of a host path object.
pub trait PathBuilder {
    /// Starts a new sub-path at a given position.
    fn move_to(&mut self, to: Point);

    /// Adds a line segment to the current sub-path.
    fn line_to(&mut self, to: Point);

    /// Adds a quadratic bézier curve to the current sub-path.
    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point);

    /// Adds a cubic bézier curve to the current sub-path.
    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);

    /// Closes the current sub-path.
    fn close(&mut self);

    /// Applies the provided path event.
    ///
    /// By default this calls one of `move_to`, `line_to`, `quadratic_bezier_to`,
    /// `cubic_bezier_to` or `close` according to the path event.
    fn path_event(&mut self, event: PathEvent) {
        match event {
            PathEvent::Begin { at } => {
                self.move_to(at);
            }
            PathEvent::Line { to, .. } => {
                self.line_to(to);
            }
            PathEvent::Quadratic { ctrl, to, .. } => {
                self.quadratic_bezier_to(ctrl, to);
            }
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                self.cubic_bezier_to(ctrl1, ctrl2, to);
            }
            PathEvent::Close { .. } => {
                self.close();
            }
        }
    }

    /// Adds events from an iterator.
    fn extend<Evts>(&mut self, events: Evts)
    where
        Evts: IntoIterator<Item = PathEvent>,
        Self: Sized,
    {
        for evt in events.into_iter() {
            self.path_event(evt)
        }
    }
}

#[test]
fn path_event_dispatch() {
    use crate::math::point;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl PathBuilder for Recorder {
        fn move_to(&mut self, to: Point) {
            self.calls.push(format!("move {} {}", to.x, to.y));
        }
        fn line_to(&mut self, to: Point) {
            self.calls.push(format!("line {} {}", to.x, to.y));
        }
        fn quadratic_bezier_to(&mut self, _: Point, to: Point) {
            self.calls.push(format!("quad {} {}", to.x, to.y));
        }
        fn cubic_bezier_to(&mut self, _: Point, _: Point, to: Point) {
            self.calls.push(format!("cubic {} {}", to.x, to.y));
        }
        fn close(&mut self) {
            self.calls.push("close".to_string());
        }
    }

    let mut recorder = Recorder::default();
    recorder.extend(vec![
        PathEvent::Begin { at: point(0.0, 0.0) },
        PathEvent::Line {
            from: point(0.0, 0.0),
            to: point(1.0, 0.0),
        },
        PathEvent::Quadratic {
            from: point(1.0, 0.0),
            ctrl: point(2.0, 0.0),
            to: point(2.0, 1.0),
        },
        PathEvent::Cubic {
            from: point(2.0, 1.0),
            ctrl1: point(2.0, 2.0),
            ctrl2: point(1.0, 2.0),
            to: point(0.0, 1.0),
        },
        PathEvent::Close {
            last: point(0.0, 1.0),
            first: point(0.0, 0.0),
        },
    ]);

    assert_eq!(
        recorder.calls,
        vec!["move 0 0", "line 1 0", "quad 2 1", "cubic 0 1", "close"]
    );
}

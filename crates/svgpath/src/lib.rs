#![deny(bare_trait_objects)]

//! Parse SVG path data into typed drawing commands, and turn them into primitives
//! that host 2D path APIs understand.
//!
//! # Crates
//!
//! This meta-crate (`svgpath`) reexports the following sub-crates for convenience:
//!
//! * **svgpath_path** - Command model, parser, coordinate resolution, path events
//!   and serialization.
//! * **svgpath_algorithms** - Bounding boxes and fitting paths into rectangles.
//! * **svgpath_geom** - Bézier segments, elliptic arcs and the approximation of
//!   arcs with cubic bézier curves.
//!
//! Each `svgpath_<name>` crate is reexported as a `<name>` module in `svgpath`.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ```
//! use svgpath::algorithms::fit::{fit_path, FitStyle};
//! use svgpath::math::{point, Box2D};
//! use svgpath::path::Path;
//!
//! let heart = Path::parse(
//!     "M 10,30 A 20,20 0,0,1 50,30 A 20,20 0,0,1 90,30 Q 90,60 50,90 Q 10,60 10,30 z",
//! )
//! .unwrap();
//!
//! let fitted = fit_path(
//!     &heart,
//!     &Box2D { min: point(0.0, 0.0), max: point(1.0, 1.0) },
//!     FitStyle::Min,
//! );
//!
//! // The arcs were approximated with cubic bézier curves.
//! assert!(fitted.iter().all(|cmd| cmd.letter() != 'A'));
//! ```

pub extern crate svgpath_algorithms;

pub use svgpath_algorithms as algorithms;
pub use svgpath_algorithms::geom;
pub use svgpath_algorithms::math;
pub use svgpath_algorithms::path;

pub use path::{Command, ParseError, Path, PathEvent};

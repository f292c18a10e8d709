#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]

//! Parse SVG path data into a sequence of typed drawing commands.
//!
//! This crate is reexported in [svgpath](https://docs.rs/svgpath/).
//!
//! A [`Path`] is an ordered list of [`Command`]s with every coordinate resolved
//! to absolute values. Elliptic arcs are kept as they appear in the source and
//! flattened into cubic bézier segments only when a consumer asks for host
//! primitives (see [`Path::events`]).
//!
//! # Examples
//!
//! ```
//! use svgpath_path::{Command, Path};
//! use svgpath_path::math::point;
//!
//! let path: Path = "M150 0 L75 200 225 200 Z".parse().unwrap();
//!
//! // The y axis is inverted by default.
//! assert_eq!(
//!     path.commands(),
//!     &[
//!         Command::MoveTo(point(150.0, 0.0)),
//!         Command::LineTo(point(75.0, -200.0)),
//!         Command::LineTo(point(225.0, -200.0)),
//!         Command::ClosePath,
//!     ]
//! );
//!
//! for event in path.events() {
//!     println!("{:?}", event);
//! }
//! ```

pub use svgpath_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
mod command;
mod events;
pub mod parser;
mod path;
pub mod resolve;
pub mod serializer;

pub use crate::builder::PathBuilder;
pub use crate::command::{ArcDescriptor, Command};
pub use crate::events::PathEvent;
pub use crate::geom::ArcFlags;
#[doc(inline)]
pub use crate::parser::{ParseError, ParserOptions};
#[doc(inline)]
pub use crate::path::{Builder, Events, Path};
#[doc(inline)]
pub use crate::resolve::Resolver;
#[doc(inline)]
pub use crate::serializer::{PathSerializer, SerializerOptions};

pub mod math {
    //! f64 version of the svgpath_geom types used everywhere.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Alias for ```euclid::default::Box2D<f64>```
    pub type Box2D = euclid::default::Box2D<f64>;

    /// Alias for ```euclid::default::Transform2D<f64>```
    pub type Transform = euclid::default::Transform2D<f64>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
}

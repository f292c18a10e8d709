#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Path algorithms: bounding boxes and fitting paths into rectangles.
//!
//! This crate is reexported in [svgpath](https://docs.rs/svgpath/).

pub extern crate svgpath_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

pub mod aabb;
pub mod fit;

pub use crate::path::geom;
pub use crate::path::math;

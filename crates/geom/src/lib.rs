#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [svgpath](https://docs.rs/svgpath/).
//!
//! # Overview.
//!
//! This crate implements the maths needed to turn SVG path data into
//! primitives that common 2D path APIs understand:
//!
//! - quadratic and cubic bézier segments,
//! - elliptic arcs, both in SVG's endpoint parameterization ([`SvgArc`]) and
//!   in center parameterization ([`Arc`]),
//! - the approximation of elliptic arcs with sequences of cubic bézier segments.
//!
//! Most host 2D path APIs have no elliptic arc primitive, so arcs are
//! approximated with at most four cubic bézier segments, each spanning no more
//! than a quarter turn.
//!
//! ```
//! use svgpath_geom::{point, vector, Angle, ArcFlags, SvgArc};
//!
//! let arc = SvgArc {
//!     from: point(0.0, 0.0),
//!     to: point(100.0, 0.0),
//!     radii: vector(50.0, 50.0),
//!     x_rotation: Angle::radians(0.0),
//!     flags: ArcFlags { large_arc: false, sweep: true },
//! };
//!
//! let curves = arc.to_cubic_beziers();
//! assert_eq!(curves.len(), 2);
//! assert_eq!(curves[0].from, point(0.0, 0.0));
//! assert_eq!(curves[1].to, point(100.0, 0.0));
//! ```

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod segment;
pub mod arc;
pub mod cubic_bezier;
pub mod quadratic_bezier;

#[doc(inline)]
pub use crate::arc::{Arc, ArcFlags, SvgArc};
#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;
#[doc(inline)]
pub use crate::segment::Segment;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use euclid::Trig;
    pub(crate) use num_traits::cast::cast;
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use std::fmt::{Debug, Display};
    use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + Trig
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;
        const SIX: Self;

        const EPSILON: Self;

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;

        const EPSILON: Self = 1e-4;

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;

        const EPSILON: Self = 1e-8;

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }

    /// Number of steps `n` such that `n * step >= value`, clamped to `[min, max]`.
    pub(crate) fn clamped_steps<S: Scalar>(value: S, step: S, min: usize, max: usize) -> usize {
        let n = cast::<S, usize>((value / step).ceil()).unwrap_or(max);
        n.max(min).min(max)
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Alias for `euclid::default::Box2D`
pub use euclid::default::Box2D;

/// Alias for `euclid::default::Transform2D`
pub type Transform<S> = euclid::default::Transform2D<S>;

/// Alias for `euclid::default::Rotation2D`
pub type Rotation<S> = euclid::default::Rotation2D<S>;

/// An angle in radians.
pub use euclid::Angle;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::{point, Box2D, CubicBezierSegment, Point};

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> QuadraticBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * S::TWO * one_t * t + self.to.to_vector() * t2
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from.x * one_t2 + self.ctrl.x * S::TWO * one_t * t + self.to.x * t2
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from.y * one_t2 + self.ctrl.y * S::TWO * one_t * t + self.to.y * t2
    }

    /// Elevate this curve to a cubic bézier.
    pub fn to_cubic(&self) -> CubicBezierSegment<S> {
        CubicBezierSegment {
            from: self.from,
            ctrl1: (self.from + self.ctrl.to_vector() * S::TWO) / S::THREE,
            ctrl2: (self.to + self.ctrl.to_vector() * S::TWO) / S::THREE,
            to: self.to,
        }
    }

    /// Find the advancement of the x extremum, if any.
    pub fn local_x_extremum_t(&self) -> Option<S> {
        Self::local_extremum(self.from.x, self.ctrl.x, self.to.x)
    }

    /// Find the advancement of the y extremum, if any.
    pub fn local_y_extremum_t(&self) -> Option<S> {
        Self::local_extremum(self.from.y, self.ctrl.y, self.to.y)
    }

    fn local_extremum(p0: S, p1: S, p2: S) -> Option<S> {
        let div = p0 - S::TWO * p1 + p2;
        if div == S::ZERO {
            return None;
        }
        let t = (p0 - p1) / div;
        if t > S::ZERO && t < S::ONE {
            return Some(t);
        }

        None
    }

    /// Returns a conservative rectangle that contains the curve.
    pub fn fast_bounding_box(&self) -> Box2D<S> {
        let min_x = self.from.x.min(self.ctrl.x).min(self.to.x);
        let max_x = self.from.x.max(self.ctrl.x).max(self.to.x);
        let min_y = self.from.y.min(self.ctrl.y).min(self.to.y);
        let max_y = self.from.y.max(self.ctrl.y).max(self.to.y);

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }

    /// Returns the smallest rectangle the curve is contained in.
    pub fn bounding_box(&self) -> Box2D<S> {
        let (min_x, max_x) = self.bounding_range_x();
        let (min_y, max_y) = self.bounding_range_y();

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }

    /// Returns the smallest range of x that contains this curve.
    pub fn bounding_range_x(&self) -> (S, S) {
        let mut min_x = self.from.x.min(self.to.x);
        let mut max_x = self.from.x.max(self.to.x);
        if let Some(t) = self.local_x_extremum_t() {
            let x = self.x(t);
            min_x = min_x.min(x);
            max_x = max_x.max(x);
        }

        (min_x, max_x)
    }

    /// Returns the smallest range of y that contains this curve.
    pub fn bounding_range_y(&self) -> (S, S) {
        let mut min_y = self.from.y.min(self.to.y);
        let mut max_y = self.from.y.max(self.to.y);
        if let Some(t) = self.local_y_extremum_t() {
            let y = self.y(t);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        (min_y, max_y)
    }
}

impl<S: Scalar> Segment for QuadraticBezierSegment<S> {
    type Scalar = S;
    fn bounding_box(&self) -> Box2D<S> {
        self.bounding_box()
    }
}

#[test]
fn bounding_box_for_monotonic_quadratic_bezier_segment() {
    let a = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(0.0, 0.0),
        to: point(2.0, 0.0),
    };

    let expected_aabb = Box2D {
        min: point(0.0, 0.0),
        max: point(2.0, 0.0),
    };

    assert_eq!(a.bounding_box(), expected_aabb);
}

#[test]
fn bounding_box_for_quadratic_bezier_segment() {
    let a = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(2.0, 2.0),
        to: point(4.0, 0.0),
    };

    let expected_aabb = Box2D {
        min: point(0.0, 0.0),
        max: point(4.0, 1.0),
    };

    assert_eq!(a.bounding_box(), expected_aabb);
    assert_eq!(a.fast_bounding_box().max, point(4.0, 2.0));
}

#[test]
fn elevated_to_cubic() {
    let quadratic = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(3.0, 6.0),
        to: point(6.0, 0.0),
    };
    let cubic = quadratic.to_cubic();
    assert_eq!(cubic.ctrl1, point(2.0, 4.0));
    assert_eq!(cubic.ctrl2, point(4.0, 4.0));

    for i in 0..5 {
        let t = i as f64 / 4.0;
        assert!((quadratic.sample(t) - cubic.sample(t)).length() < 1e-9);
    }
}

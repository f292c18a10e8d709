//! Elliptic arc related maths and tools.

use arrayvec::ArrayVec;

use crate::scalar::{cast, Float, Scalar};
use crate::{point, vector, Angle, Box2D, CubicBezierSegment, Point, Rotation, Vector};

/// An elliptic arc curve segment using the SVG's end-point notation.
///
/// See Section 9.3.8 of the SVG specification.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgArc<S> {
    pub from: Point<S>,
    pub to: Point<S>,
    pub radii: Vector<S>,
    pub x_rotation: Angle<S>,
    pub flags: ArcFlags,
}

/// An elliptic arc curve segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc<S> {
    pub center: Point<S>,
    pub radii: Vector<S>,
    pub start_angle: Angle<S>,
    pub sweep_angle: Angle<S>,
    pub x_rotation: Angle<S>,
}

/// Flag parameters for arcs as described by the SVG specification.
///
/// For most situations using the SVG arc notation, there are four different arcs
/// (two different ellipses, each with two different arc sweeps) that satisfy the
/// arc parameter set. The `large_arc` and `sweep` flags indicate which one of the
/// four arcs are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    /// Of the four candidate arc sweeps, two will represent an arc sweep of greater
    /// than or equal to 180 degrees (the "large-arc"), and two will represent an arc
    /// sweep of less than or equal to 180 degrees (the "small arc"). If `large_arc`
    /// is true, then one of the two larger arc sweeps will be chosen.
    pub large_arc: bool,
    /// If `sweep` is true, then the arc will be drawn in a "positive-angle" direction
    /// (the ellipse formula `x=cx+rx*cos(theta)` and `y=cy+ry*sin(theta)` is evaluated
    /// such that theta starts at an angle corresponding to the current point and
    /// increases positively until the arc reaches the destination position).
    pub sweep: bool,
}

impl<S: Scalar> Arc<S> {
    /// Create an arc in center parameterization from an SVG arc.
    ///
    /// Radii are taken by absolute value and scaled up when they are too small to
    /// span the distance between the endpoints. The SVG arc must not be degenerate
    /// (see `SvgArc::is_straight_line`) and its endpoints must be distinct.
    pub fn from_svg_arc(arc: &SvgArc<S>) -> Arc<S> {
        debug_assert!(!arc.from.x.is_nan());
        debug_assert!(!arc.from.y.is_nan());
        debug_assert!(!arc.to.x.is_nan());
        debug_assert!(!arc.to.y.is_nan());
        debug_assert!(!arc.radii.x.is_nan());
        debug_assert!(!arc.radii.y.is_nan());
        debug_assert!(!arc.x_rotation.get().is_nan());
        debug_assert!(arc.from != arc.to);
        debug_assert!(!arc.is_straight_line());

        let mut rx = arc.radii.x.abs();
        let mut ry = arc.radii.y.abs();

        let xr = arc.x_rotation.get() % (S::TWO * S::PI());
        let (sin_phi, cos_phi) = Float::sin_cos(xr);
        let hd_x = (arc.from.x - arc.to.x) / S::TWO;
        let hd_y = (arc.from.y - arc.to.y) / S::TWO;
        let hs_x = (arc.from.x + arc.to.x) / S::TWO;
        let hs_y = (arc.from.y + arc.to.y) / S::TWO;

        // F6.5.1
        let p = point(
            cos_phi * hd_x + sin_phi * hd_y,
            -sin_phi * hd_x + cos_phi * hd_y,
        );

        // F6.6.2
        let lambda = (p.x * p.x) / (rx * rx) + (p.y * p.y) / (ry * ry);
        if lambda > S::ONE {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        // F6.5.2
        let rxry = rx * ry;
        let rxpy = rx * p.y;
        let rypx = ry * p.x;
        let sum_of_sq = rxpy * rxpy + rypx * rypx;

        let radicand = ((rxry * rxry - sum_of_sq) / sum_of_sq).max(S::ZERO);
        let sign = if arc.flags.large_arc == arc.flags.sweep {
            -S::ONE
        } else {
            S::ONE
        };
        let coe = sign * radicand.sqrt();

        let transformed_cx = coe * rxpy / ry;
        let transformed_cy = -coe * rypx / rx;

        // F6.5.3
        let center = point(
            cos_phi * transformed_cx - sin_phi * transformed_cy + hs_x,
            sin_phi * transformed_cx + cos_phi * transformed_cy + hs_y,
        );

        // F6.5.5 and F6.5.6
        let a = vector((p.x - transformed_cx) / rx, (p.y - transformed_cy) / ry);
        let b = vector((-p.x - transformed_cx) / rx, (-p.y - transformed_cy) / ry);

        let start_angle = signed_angle(vector(S::ONE, S::ZERO), a);
        let mut sweep_angle = signed_angle(a, b);
        if arc.flags.sweep && sweep_angle < S::ZERO {
            sweep_angle += S::TWO * S::PI();
        } else if !arc.flags.sweep && sweep_angle > S::ZERO {
            sweep_angle -= S::TWO * S::PI();
        }

        Arc {
            center,
            radii: vector(rx, ry),
            start_angle: Angle::radians(start_angle),
            sweep_angle: Angle::radians(sweep_angle),
            x_rotation: Angle::radians(xr),
        }
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.sample_angle(self.get_angle(t))
    }

    /// Sample the curve's angle at t (expecting t between 0 and 1).
    #[inline]
    pub fn get_angle(&self, t: S) -> Angle<S> {
        self.start_angle + Angle::radians(self.sweep_angle.get() * t)
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.sample(S::ZERO)
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.sample(S::ONE)
    }

    /// Returns the smallest rectangle that contains the curve.
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
        let (sin_phi, cos_phi) = Float::sin_cos(self.x_rotation.get());
        let extremum = Float::atan2(-self.radii.y * sin_phi, self.radii.x * cos_phi);

        self.bounding_range(extremum, |p| p.x)
    }

    /// Returns the smallest range of y that contains this curve.
    pub fn bounding_range_y(&self) -> (S, S) {
        let (sin_phi, cos_phi) = Float::sin_cos(self.x_rotation.get());
        let extremum = Float::atan2(self.radii.y * cos_phi, self.radii.x * sin_phi);

        self.bounding_range(extremum, |p| p.y)
    }

    fn bounding_range(&self, extremum: S, coord: impl Fn(Point<S>) -> S) -> (S, S) {
        let from = coord(self.from());
        let to = coord(self.to());
        let mut min = from.min(to);
        let mut max = from.max(to);

        for &angle in &[extremum, extremum + S::PI()] {
            if self.contains_angle(angle) {
                let v = coord(self.sample_angle(Angle::radians(angle)));
                min = min.min(v);
                max = max.max(v);
            }
        }

        (min, max)
    }

    fn contains_angle(&self, angle: S) -> bool {
        let two_pi = S::TWO * S::PI();
        let sweep = self.sweep_angle.get();
        let start = self.start_angle.get();
        let delta = if sweep >= S::ZERO {
            angle - start
        } else {
            start - angle
        };
        let mut delta = delta % two_pi;
        if delta < S::ZERO {
            delta += two_pi;
        }

        delta <= sweep.abs()
    }

    #[inline]
    fn sample_angle(&self, angle: Angle<S>) -> Point<S> {
        let (sin, cos) = Float::sin_cos(angle.get());
        self.map_unit_circle(vector(cos, sin))
    }

    /// Maps a point of the unit circle onto the ellipse.
    #[inline]
    fn map_unit_circle(&self, v: Vector<S>) -> Point<S> {
        self.center
            + Rotation::new(self.x_rotation)
                .transform_vector(vector(v.x * self.radii.x, v.y * self.radii.y))
    }
}

impl<S: Scalar> SvgArc<S> {
    /// Converts this arc from endpoint to center parameterization.
    pub fn to_arc(&self) -> Arc<S> {
        Arc::from_svg_arc(self)
    }

    /// An SVG arc with a zero radius is a straight line between its endpoints.
    pub fn is_straight_line(&self) -> bool {
        self.radii.x.abs() <= S::EPSILON || self.radii.y.abs() <= S::EPSILON
    }

    /// Approximates the arc with a sequence of cubic bézier segments.
    ///
    /// The first segment starts exactly at `from` and the last one ends exactly
    /// at `to`. An arc with coincident endpoints produces nothing and an arc with
    /// a zero radius produces a single straight segment.
    pub fn for_each_cubic_bezier<F>(&self, cb: &mut F)
    where
        F: FnMut(&CubicBezierSegment<S>),
    {
        if self.from == self.to {
            return;
        }

        if self.is_straight_line() {
            cb(&CubicBezierSegment::straight_line(self.from, self.to));
            return;
        }

        arc_to_cubic_beziers(&self.to_arc(), self.from, self.to, cb);
    }

    /// Approximates the arc with a sequence of cubic bézier segments.
    pub fn to_cubic_beziers(&self) -> ArrayVec<CubicBezierSegment<S>, 4> {
        let mut curves = ArrayVec::new();
        self.for_each_cubic_bezier(&mut |curve| curves.push(*curve));

        curves
    }
}

impl<S: Scalar> From<SvgArc<S>> for Arc<S> {
    fn from(svg: SvgArc<S>) -> Self {
        svg.to_arc()
    }
}

/// Angle from `u` to `v`, in `[-π, π]`.
fn signed_angle<S: Scalar>(u: Vector<S>, v: Vector<S>) -> S {
    let ratio = u.dot(v) / (u.length() * v.length());
    let angle = ratio.max(-S::ONE).min(S::ONE).acos();
    if u.cross(v) < S::ZERO {
        -angle
    } else {
        angle
    }
}

fn arc_to_cubic_beziers<S, F>(arc: &Arc<S>, from: Point<S>, to: Point<S>, cb: &mut F)
where
    S: Scalar,
    F: FnMut(&CubicBezierSegment<S>),
{
    let sweep_angle = arc.sweep_angle.get();
    let n_steps = crate::scalar::clamped_steps(
        sweep_angle.abs() - S::EPSILON,
        S::FRAC_PI_2(),
        1,
        4,
    );
    let step = sweep_angle / cast::<usize, S>(n_steps).unwrap_or(S::ONE);
    let k = S::FOUR / S::THREE * Float::tan(step / S::FOUR);

    let start = arc.start_angle.get();
    for i in 0..n_steps {
        let a1 = start + step * cast::<usize, S>(i).unwrap_or(S::ZERO);
        let a2 = start + step * cast::<usize, S>(i + 1).unwrap_or(S::ONE);

        let (sin1, cos1) = Float::sin_cos(a1);
        let (sin2, cos2) = Float::sin_cos(a2);

        let p1 = vector(cos1, sin1);
        let p2 = vector(cos2, sin2);
        let ctrl1 = p1 + vector(-sin1, cos1) * k;
        let ctrl2 = p2 - vector(-sin2, cos2) * k;

        let curve = CubicBezierSegment {
            from: if i == 0 { from } else { arc.map_unit_circle(p1) },
            ctrl1: arc.map_unit_circle(ctrl1),
            ctrl2: arc.map_unit_circle(ctrl2),
            to: if i + 1 == n_steps { to } else { arc.map_unit_circle(p2) },
        };

        cb(&curve);
    }
}

#[cfg(test)]
fn assert_approx_eq(a: Point<f64>, b: Point<f64>, tolerance: f64) {
    if (a - b).length() > tolerance {
        panic!("{:?} != {:?}", a, b);
    }
}

#[test]
fn half_circle() {
    let arc = SvgArc {
        from: point(0.0, 0.0),
        to: point(100.0, 0.0),
        radii: vector(50.0, 50.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags { large_arc: false, sweep: true },
    };

    let center = arc.to_arc();
    assert_approx_eq(center.center, point(50.0, 0.0), 1e-9);
    assert!((center.sweep_angle.get() - std::f64::consts::PI).abs() < 1e-9);

    let curves = arc.to_cubic_beziers();
    assert_eq!(curves.len(), 2);
    assert_eq!(curves[0].from, point(0.0, 0.0));
    assert_eq!(curves[0].to, curves[1].from);
    assert_eq!(curves[1].to, point(100.0, 0.0));
    assert_approx_eq(curves[0].to, point(50.0, -50.0), 1e-9);

    let aabb = center.bounding_box();
    assert_approx_eq(aabb.min, point(0.0, -50.0), 1e-9);
    assert_approx_eq(aabb.max, point(100.0, 0.0), 1e-9);
}

#[test]
fn radii_scaled_up_to_span_the_chord() {
    let arc = SvgArc {
        from: point(0.0, 0.0),
        to: point(100.0, 0.0),
        radii: vector(10.0, -10.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags { large_arc: false, sweep: true },
    }
    .to_arc();

    assert_approx_eq(arc.center, point(50.0, 0.0), 1e-9);
    assert!((arc.radii.x - 50.0).abs() < 1e-9);
    assert!((arc.radii.y - 50.0).abs() < 1e-9);
}

#[test]
fn small_and_large_arcs() {
    let small = SvgArc {
        from: point(0.0, 0.0),
        to: point(100.0, 0.0),
        radii: vector(100.0, 100.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags { large_arc: false, sweep: true },
    };
    let arc = small.to_arc();
    assert_approx_eq(arc.center, point(50.0, 86.60254037844386), 1e-9);
    assert_approx_eq(arc.sample(0.5), point(50.0, -13.397459621556135), 1e-9);
    let curves = small.to_cubic_beziers();
    assert_eq!(curves.len(), 1);
    assert_approx_eq(curves[0].sample(0.5), point(50.0, -13.397459621556135), 0.01);

    let large = SvgArc {
        flags: ArcFlags { large_arc: true, sweep: true },
        ..small
    };
    let arc = large.to_arc();
    assert_approx_eq(arc.center, point(50.0, -86.60254037844386), 1e-9);
    assert_approx_eq(arc.sample(0.5), point(50.0, -186.60254037844386), 1e-9);
    let curves = large.to_cubic_beziers();
    assert_eq!(curves.len(), 4);
    for pair in curves.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }
    assert_eq!(curves[0].from, large.from);
    assert_eq!(curves[3].to, large.to);
}

#[test]
fn sweep_direction() {
    let arc = SvgArc {
        from: point(0.0, 0.0),
        to: point(100.0, 0.0),
        radii: vector(50.0, 50.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags { large_arc: false, sweep: false },
    };

    let center = arc.to_arc();
    assert!(center.sweep_angle.get() < 0.0);
    assert_approx_eq(center.sample(0.5), point(50.0, 50.0), 1e-9);
    assert_approx_eq(center.from(), arc.from, 1e-9);
    assert_approx_eq(center.to(), arc.to, 1e-9);
}

#[test]
fn rotated_ellipse_endpoints() {
    let arc = SvgArc {
        from: point(10.0, 20.0),
        to: point(80.0, -35.0),
        radii: vector(60.0, 25.0),
        x_rotation: Angle::degrees(30.0),
        flags: ArcFlags { large_arc: true, sweep: false },
    };

    let center = arc.to_arc();
    assert_approx_eq(center.from(), arc.from, 1e-6);
    assert_approx_eq(center.to(), arc.to, 1e-6);

    let curves = arc.to_cubic_beziers();
    assert!(!curves.is_empty() && curves.len() <= 4);
    assert_eq!(curves[0].from, arc.from);
    assert_eq!(curves[curves.len() - 1].to, arc.to);
}

#[test]
fn degenerate_arcs() {
    let mut arc = SvgArc {
        from: point(5.0, 5.0),
        to: point(5.0, 5.0),
        radii: vector(10.0, 10.0),
        x_rotation: Angle::radians(0.0),
        flags: ArcFlags::default(),
    };
    assert!(arc.to_cubic_beziers().is_empty());

    arc.to = point(20.0, 5.0);
    arc.radii = vector(0.0, 10.0);
    let curves = arc.to_cubic_beziers();
    assert_eq!(curves.len(), 1);
    assert_eq!(curves[0].from, point(5.0, 5.0));
    assert_eq!(curves[0].to, point(20.0, 5.0));
    assert_eq!(curves[0].ctrl1.y, 5.0);
    assert_eq!(curves[0].ctrl2.y, 5.0);
}

#[test]
fn interior_samples_stay_on_the_ellipse() {
    let flags = [
        ArcFlags { large_arc: false, sweep: false },
        ArcFlags { large_arc: false, sweep: true },
        ArcFlags { large_arc: true, sweep: false },
        ArcFlags { large_arc: true, sweep: true },
    ];

    for &degrees in &[30.0, 75.0, -120.0] {
        for &flags in &flags {
            let svg_arc = SvgArc {
                from: point(-20.0, 15.0),
                to: point(35.0, -10.0),
                radii: vector(40.0, 18.0),
                x_rotation: Angle::degrees(degrees),
                flags,
            };
            let arc = svg_arc.to_arc();
            let unrotate = Rotation::new(-arc.x_rotation);

            for curve in &svg_arc.to_cubic_beziers() {
                for i in 1..10 {
                    let p = curve.sample(i as f64 / 10.0);
                    let v = unrotate.transform_vector(p - arc.center);
                    let radius = ((v.x / arc.radii.x).powi(2) + (v.y / arc.radii.y).powi(2)).sqrt();
                    assert!(
                        (radius - 1.0).abs() < 1e-3,
                        "{:?} {:?}: {}",
                        degrees,
                        flags,
                        radius
                    );
                }
            }
        }
    }
}

use log::{debug, warn};
use tinyvec::ArrayVec;

use crate::arc_length::ArcLengthTable;
use crate::error::{check_parameter, CurveError};
use crate::point::Point;
use crate::spline::Spline;
use crate::vector2::Vector2;
use crate::{NativeFloat, DEFAULT_CURVE_PRECISION};

/// Degree of a Bézier curve, fixed by its number of control points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Degree {
    /// 2 control points
    Linear,
    /// 3 control points
    Quadratic,
    /// 4 control points
    Cubic,
}

impl Degree {
    pub fn from_point_count(count: usize) -> Result<Self, CurveError> {
        match count {
            2 => Ok(Degree::Linear),
            3 => Ok(Degree::Quadratic),
            4 => Ok(Degree::Cubic),
            _ => Err(CurveError::InvalidControlPointCount { count }),
        }
    }

    pub fn point_count(self) -> usize {
        match self {
            Degree::Linear => 2,
            Degree::Quadratic => 3,
            Degree::Cubic => 4,
        }
    }
}

/// A linear, quadratic or cubic Bézier curve with a precomputed arc-length table.
///
/// The curve is defined by 2 to 4 `control_points`; the first is the start
/// and the last the end of the curve. Points can be evaluated two ways:
/// - [`eval_native`](Self::eval_native) at the curve's own parameter, whose
///   speed along the curve varies,
/// - [`get_point`](Self::get_point) at an arc-length parameter, where equal
///   steps in `t` cover (approximately) equal distances.
///
/// The table is built once in the constructor. There are no mutating methods,
/// so a constructed curve can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve<P = Vector2>
where
    P: Point,
{
    control_points: ArrayVec<[P; 4]>,
    degree: Degree,
    arc_lengths: ArcLengthTable,
}

impl<P> BezierCurve<P>
where
    P: Point,
{
    /// Create a curve from 2 to 4 control points, sampling its arc length
    /// `precision` times.
    pub fn new(control_points: &[P], precision: usize) -> Result<Self, CurveError> {
        let degree = Degree::from_point_count(control_points.len())?;
        let mut points: ArrayVec<[P; 4]> = ArrayVec::new();
        points.extend_from_slice(control_points);

        let arc_lengths = ArcLengthTable::build(precision, |t| eval_casteljau(&points, t))?;
        debug!(
            "built {:?} curve from {:?}: precision {}, length {:.6}",
            degree,
            points.as_slice(),
            precision,
            arc_lengths.total()
        );
        if arc_lengths.total() == 0.0 {
            warn!(
                "degenerate {:?} curve: all samples coincide at {:?}",
                degree, points[0]
            );
        }

        Ok(BezierCurve {
            control_points: points,
            degree,
            arc_lengths,
        })
    }

    /// Create a curve sampled [`DEFAULT_CURVE_PRECISION`] times.
    pub fn with_default_precision(control_points: &[P]) -> Result<Self, CurveError> {
        Self::new(control_points, DEFAULT_CURVE_PRECISION)
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    pub fn start(&self) -> P {
        self.control_points[0]
    }

    pub fn end(&self) -> P {
        self.control_points[self.control_points.len() - 1]
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    pub fn precision(&self) -> usize {
        self.arc_lengths.precision()
    }

    /// Cumulative lengths at native parameters `i / precision`.
    pub fn arc_lengths(&self) -> &[NativeFloat] {
        self.arc_lengths.as_slice()
    }

    /// Approximate length of the curve (the last arc-length table entry).
    pub fn length(&self) -> NativeFloat {
        self.arc_lengths.total()
    }

    /// Evaluate the curve at native parameter `t` in `[0, 1]`.
    pub fn eval_native(&self, t: NativeFloat) -> Result<P, CurveError> {
        let t = check_parameter(t)?;
        Ok(eval_casteljau(&self.control_points, t))
    }

    /// Evaluate the curve at arc-length parameter `t` in `[0, 1]`.
    ///
    /// `t = 0` and `t = 1` return the exact end points; anything in between is
    /// mapped to a native parameter through the arc-length table first.
    pub fn get_point(&self, t: NativeFloat) -> Result<P, CurveError> {
        let t = check_parameter(t)?;
        Ok(self.point_at(t))
    }

    /// Yield `steps + 1` points spaced evenly by arc length, from start to end.
    /// Zero steps are treated as one.
    pub fn samples(&self, steps: usize) -> impl Iterator<Item = P> + '_ {
        let steps = steps.max(1);
        (0..=steps).map(move |i| self.point_at(i as NativeFloat / steps as NativeFloat))
    }

    // expects t already checked to lie in [0, 1]
    fn point_at(&self, t: NativeFloat) -> P {
        if t == 0.0 {
            return self.start();
        }
        if t == 1.0 {
            return self.end();
        }
        let native = self.arc_lengths.invert(t);
        eval_casteljau(&self.control_points, native)
    }
}

impl BezierCurve<Vector2> {
    /// Create a curve directly from coordinate pairs.
    pub fn from_coordinates(
        coordinates: &[(NativeFloat, NativeFloat)],
        precision: usize,
    ) -> Result<Self, CurveError> {
        let points: Vec<Vector2> = coordinates.iter().copied().map(Vector2::from).collect();
        Self::new(&points, precision)
    }
}

impl<P> Spline<P> for BezierCurve<P>
where
    P: Point,
{
    fn get_point(&self, t: NativeFloat) -> Result<P, CurveError> {
        BezierCurve::get_point(self, t)
    }

    fn length(&self) -> NativeFloat {
        BezierCurve::length(self)
    }
}

/// Evaluate the curve with De Casteljau's algorithm over a copy of the control points.
/// Equal control points stay exactly equal through every level, and t = 0 / t = 1
/// yield the first / last point exactly.
fn eval_casteljau<P: Point>(control_points: &[P], t: NativeFloat) -> P {
    let mut p: ArrayVec<[P; 4]> = ArrayVec::new();
    p.extend_from_slice(control_points);
    // one point less each level until only the point on the curve is left
    for level in 1..p.len() {
        for j in 0..p.len() - level {
            p[j] = lerp(p[j], p[j + 1], t);
        }
    }
    p[0]
}

// interpolates from the nearer end so both ends are exact
fn lerp<P: Point>(a: P, b: P, t: NativeFloat) -> P {
    if t <= 0.5 {
        a + (b - a) * t
    } else {
        b - (b - a) * (1.0 - t)
    }
}

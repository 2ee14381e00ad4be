//! Discretized arc length of a parametric curve.
//!
//! The table stores the cumulative chord length of the curve sampled at
//! `precision + 1` uniform native parameters `i / precision`. Inverting this
//! piecewise linear length function gives the native parameter at which a
//! given fraction of the total length has been travelled. The error of that
//! inverse shrinks as `precision` grows.

use log::trace;

use crate::error::{check_parameter, CurveError};
use crate::point::Point;
use crate::NativeFloat;

/// Cumulative arc lengths of a curve at uniform native parameter steps.
///
/// `lengths[0] == 0`, `lengths` is non-decreasing and holds `precision + 1`
/// entries. The last entry is the approximate total length.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    lengths: Vec<NativeFloat>,
}

impl ArcLengthTable {
    /// Sample `eval` at `t_i = i / precision` for `i = 0..=precision` and
    /// accumulate the distances between consecutive samples.
    pub fn build<P, F>(precision: usize, eval: F) -> Result<Self, CurveError>
    where
        P: Point,
        F: Fn(NativeFloat) -> P,
    {
        if precision < 1 {
            return Err(CurveError::InvalidPrecision { precision });
        }
        let step = |i: usize| i as NativeFloat / precision as NativeFloat;

        let mut lengths = Vec::with_capacity(precision + 1);
        lengths.push(0.0);
        let mut total = 0.0;
        let mut prev = eval(0.0);
        for i in 1..=precision {
            let next = eval(step(i));
            total += prev.distance(next);
            lengths.push(total);
            prev = next;
        }

        Ok(ArcLengthTable { lengths })
    }

    /// Number of sample intervals in the table.
    pub fn precision(&self) -> usize {
        self.lengths.len() - 1
    }

    /// Approximate length of the whole curve.
    pub fn total(&self) -> NativeFloat {
        self.lengths[self.lengths.len() - 1]
    }

    pub fn as_slice(&self) -> &[NativeFloat] {
        &self.lengths
    }

    /// Map an arc-length fraction `t` in `[0, 1]` to the native parameter
    /// reaching `t * total()` along the curve.
    ///
    /// The bracketing interval is `lengths[i] <= u < lengths[i + 1]`. A target
    /// at or past the last entry (rounding, or a zero-length curve) uses the
    /// last interval, and a zero-length interval contributes no fraction.
    /// The result always lies in `[0, 1]`; `t` outside `[0, 1]` (NaN included)
    /// is a [`CurveError::ParameterOutOfRange`].
    pub fn native_parameter(&self, t: NativeFloat) -> Result<NativeFloat, CurveError> {
        let t = check_parameter(t)?;
        Ok(self.invert(t))
    }

    // t must already be checked
    pub(crate) fn invert(&self, t: NativeFloat) -> NativeFloat {
        let precision = self.precision();
        let u = t * self.total();

        // lengths[0] == 0 <= u, so at least one entry is counted
        let below = self.lengths.partition_point(|&len| len <= u);
        let index = below.saturating_sub(1).min(precision - 1);

        let start = self.lengths[index];
        let span = self.lengths[index + 1] - start;
        let fraction = if span > 0.0 {
            ((u - start) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let native = (index as NativeFloat + fraction) / precision as NativeFloat;
        trace!(
            "arc fraction {} -> interval {} (+{:.6}) -> native {}",
            t,
            index,
            fraction,
            native
        );
        native
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector2;
    use approx::assert_relative_eq;

    fn line(t: NativeFloat) -> Vector2 {
        Vector2::new(3.0 * t, 4.0 * t)
    }

    #[test]
    fn rejects_zero_precision() {
        assert_eq!(
            ArcLengthTable::build(0, line),
            Err(CurveError::InvalidPrecision { precision: 0 })
        );
    }

    #[test]
    fn table_shape() {
        let table = ArcLengthTable::build(8, line).unwrap();
        assert_eq!(table.precision(), 8);
        assert_eq!(table.as_slice().len(), 9);
        assert_eq!(table.as_slice()[0], 0.0);
        assert_relative_eq!(table.total(), 5.0, epsilon = 1e-12);
        for pair in table.as_slice().windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 5.0 / 8.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn single_interval_is_linear_map() {
        let table = ArcLengthTable::build(1, line).unwrap();
        assert_eq!(table.as_slice(), &[0.0, 5.0]);
        assert_relative_eq!(table.native_parameter(0.3).unwrap(), 0.3, epsilon = 1e-12);
    }

    #[test]
    fn inversion_on_uniform_speed_is_identity() {
        let table = ArcLengthTable::build(10, line).unwrap();
        for i in 0..=20 {
            let t = i as NativeFloat / 20.0;
            assert_relative_eq!(table.native_parameter(t).unwrap(), t, epsilon = 1e-12);
        }
    }

    #[test]
    fn inversion_follows_uneven_speed() {
        // x = t^2 covers the first half of its length at t = sqrt(0.5)
        let table = ArcLengthTable::build(1000, |t| Vector2::new(t * t, 0.0)).unwrap();
        let native = table.native_parameter(0.5).unwrap();
        assert_relative_eq!(native, 0.5f64.sqrt(), epsilon = 1e-3);
    }

    #[test]
    fn target_past_the_end_clamps_to_last_interval() {
        let table = ArcLengthTable::build(4, line).unwrap();
        assert_eq!(table.native_parameter(1.0), Ok(1.0));
        // rounding may push u over the last entry
        assert_eq!(table.invert(1.0 + 1e-12), 1.0);
    }

    #[test]
    fn zero_length_curve_does_not_divide_by_zero() {
        let table = ArcLengthTable::build(5, |_| Vector2::new(1.0, 1.0)).unwrap();
        assert_eq!(table.total(), 0.0);
        let native = table.native_parameter(0.5).unwrap();
        assert!(native.is_finite());
        assert!((0.0..=1.0).contains(&native));
    }

    #[test]
    fn plateaus_are_skipped() {
        // stands still on the middle interval
        let table = ArcLengthTable::build(3, |t| {
            let x = if t < 0.4 {
                t
            } else if t < 0.7 {
                1.0 / 3.0
            } else {
                t - 1.0 / 3.0
            };
            Vector2::new(x, 0.0)
        })
        .unwrap();
        let lengths = table.as_slice();
        assert_relative_eq!(lengths[1], lengths[2]);
        // halfway along the last interval by length
        assert_relative_eq!(table.native_parameter(0.75).unwrap(), 2.5 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn fractions_outside_unit_interval_are_rejected() {
        let table = ArcLengthTable::build(4, line).unwrap();
        for t in [NativeFloat::NAN, -0.25, 1.5, NativeFloat::INFINITY] {
            assert!(matches!(
                table.native_parameter(t),
                Err(CurveError::ParameterOutOfRange { .. })
            ));
        }
    }
}

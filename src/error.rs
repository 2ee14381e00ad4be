//! Error type shared by curve and track construction and evaluation.

use thiserror::Error;

use crate::NativeFloat;

/// Errors reported by curve construction, evaluation and tile decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A Bézier curve needs 2 (linear), 3 (quadratic) or 4 (cubic) control points.
    #[error("expected 2 to 4 control points, got {count}")]
    InvalidControlPointCount {
        /// Number of points that were supplied.
        count: usize,
    },

    /// The arc-length table needs at least one sample interval.
    #[error("precision must be at least 1, got {precision}")]
    InvalidPrecision {
        /// Requested number of samples.
        precision: usize,
    },

    /// Curve parameters are only defined on `[0, 1]`. NaN is rejected as well.
    #[error("parameter {t} is outside [0, 1]")]
    ParameterOutOfRange {
        /// Offending parameter.
        t: NativeFloat,
    },

    /// A tile shape or rotation that has no entry in the tile table.
    #[error("invalid tile configuration: {reason}")]
    InvalidTileConfiguration {
        /// What could not be decoded.
        reason: String,
    },
}

impl CurveError {
    pub(crate) fn tile(reason: impl Into<String>) -> Self {
        CurveError::InvalidTileConfiguration {
            reason: reason.into(),
        }
    }
}

/// Reject `t` outside `[0, 1]` instead of clamping it, so runaway progress
/// counters in the caller surface as errors.
pub(crate) fn check_parameter(t: NativeFloat) -> Result<NativeFloat, CurveError> {
    if (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        Err(CurveError::ParameterOutOfRange { t })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_bounds_are_inclusive() {
        assert_eq!(check_parameter(0.0), Ok(0.0));
        assert_eq!(check_parameter(1.0), Ok(1.0));
        assert_eq!(
            check_parameter(-0.0001),
            Err(CurveError::ParameterOutOfRange { t: -0.0001 })
        );
        assert!(check_parameter(1.0001).is_err());
    }

    #[test]
    fn nan_is_out_of_range() {
        assert!(matches!(
            check_parameter(NativeFloat::NAN),
            Err(CurveError::ParameterOutOfRange { .. })
        ));
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = CurveError::InvalidControlPointCount { count: 5 };
        assert_eq!(err.to_string(), "expected 2 to 4 control points, got 5");
        let err = CurveError::tile("unknown shape `loop`");
        assert_eq!(
            err.to_string(),
            "invalid tile configuration: unknown shape `loop`"
        );
    }
}

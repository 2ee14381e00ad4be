//! What a moving object needs from anything it travels along
//! (raw curves and tile segments): a point per progress fraction and a length.

use crate::error::CurveError;
use crate::point::Point;
use crate::NativeFloat;

pub trait Spline<P: Point> {
    /// Point reached after travelling the fraction `t` in `[0, 1]` of the length.
    fn get_point(&self, t: NativeFloat) -> Result<P, CurveError>;

    /// Approximate length travelled between `t = 0` and `t = 1`.
    fn length(&self) -> NativeFloat;
}

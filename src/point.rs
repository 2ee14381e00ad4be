use core::ops::{Add, Mul, Sub};

use crate::NativeFloat;

/// Trait defined over the points a curve is built from.
/// The curve code only ever adds, subtracts, scales and measures points, so
/// anything offering these operations can be used instead of [`Vector2`](crate::Vector2).
/// `Default` is needed for the inline control point storage.
pub trait Point:
    Add<Output = Self>
    + Sub<Output = Self>
    + Mul<NativeFloat, Output = Self>
    + Copy
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// Returns the dot product of self and other interpreted as vectors
    fn dot(&self, other: Self) -> NativeFloat;

    /// Returns the L2 norm of the point interpreted as a vector
    fn magnitude(&self) -> NativeFloat {
        self.dot(*self).sqrt()
    }

    /// Returns the euclidean distance between self and other
    fn distance(&self, other: Self) -> NativeFloat {
        (*self - other).magnitude()
    }
}

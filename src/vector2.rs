use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;

use crate::point::Point;
use crate::NativeFloat;

/// An immutable 2D point or vector. All arithmetic returns new values.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2 {
    pub(crate) x: NativeFloat,
    pub(crate) y: NativeFloat,
}

impl Vector2 {
    pub const fn new(x: NativeFloat, y: NativeFloat) -> Self {
        Vector2 { x, y }
    }

    pub fn x(&self) -> NativeFloat {
        self.x
    }

    pub fn y(&self) -> NativeFloat {
        self.y
    }

    pub fn add(self, other: Vector2) -> Vector2 {
        self + other
    }

    pub fn subtract(self, other: Vector2) -> Vector2 {
        self - other
    }

    pub fn scale(self, k: NativeFloat) -> Vector2 {
        self * k
    }

    /// Component-wise sum over any number of vectors, `(0, 0)` for none.
    pub fn sum<I: IntoIterator<Item = Vector2>>(vectors: I) -> Vector2 {
        vectors.into_iter().fold(Vector2::zero(), |acc, v| acc + v)
    }

    pub fn distance(&self, other: Vector2) -> NativeFloat {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn magnitude(&self) -> NativeFloat {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn dot(&self, other: Vector2) -> NativeFloat {
        self.x * other.x + self.y * other.y
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<NativeFloat> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: NativeFloat) -> Vector2 {
        Vector2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Zero for Vector2 {
    fn zero() -> Self {
        Vector2::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Sum for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Vector2 {
        Vector2::sum(iter)
    }
}

impl From<(NativeFloat, NativeFloat)> for Vector2 {
    fn from((x, y): (NativeFloat, NativeFloat)) -> Self {
        Vector2::new(x, y)
    }
}

/// Grid corners are integer pairs.
impl From<(i32, i32)> for Vector2 {
    fn from((x, y): (i32, i32)) -> Self {
        Vector2::new(x.into(), y.into())
    }
}

impl From<Vector2> for (NativeFloat, NativeFloat) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}

impl Point for Vector2 {
    fn dot(&self, other: Self) -> NativeFloat {
        Vector2::dot(self, other)
    }

    fn magnitude(&self) -> NativeFloat {
        Vector2::magnitude(self)
    }

    fn distance(&self, other: Self) -> NativeFloat {
        Vector2::distance(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Vector2::new(1.5, -2.0);
        let b = Vector2::new(0.5, 4.0);
        assert_eq!(a.add(b), Vector2::new(2.0, 2.0));
        assert_eq!(a.subtract(b), Vector2::new(1.0, -6.0));
        assert_eq!(a.scale(2.0), Vector2::new(3.0, -4.0));
        assert_eq!(-a, Vector2::new(-1.5, 2.0));
    }

    #[test]
    fn sum_of_nothing_is_origin() {
        assert_eq!(Vector2::sum(Vec::new()), Vector2::new(0.0, 0.0));
        assert!(Vector2::sum([]).is_zero());
    }

    #[test]
    fn sum_over_weighted_points() {
        let points = [
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(0.0, 3.0),
        ];
        assert_eq!(Vector2::sum(points), Vector2::new(3.0, 4.0));
        let iter_sum: Vector2 = points.iter().map(|p| *p * 0.5).sum();
        assert_eq!(iter_sum, Vector2::new(1.5, 2.0));
    }

    /// Check whether classic pythagorean equality holds for sides 3, 4 with hypothenuse 5
    #[test]
    fn distance_and_magnitude() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(4.0, 5.0);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_relative_eq!(b.distance(a), 5.0);
        assert_relative_eq!((b - a).magnitude(), 5.0);
        assert_relative_eq!(Vector2::new(0.0, -2.0).magnitude(), 2.0);
    }

    #[test]
    fn dot_product() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        assert_relative_eq!(a.dot(b), -5.0);
        // perpendicular
        assert_relative_eq!(Vector2::new(1.0, 0.0).dot(Vector2::new(0.0, 7.0)), 0.0);
    }

    #[test]
    fn point_trait_matches_inherent_methods() {
        fn via_trait<P: Point>(a: P, b: P) -> (NativeFloat, NativeFloat) {
            (a.distance(b), a.magnitude())
        }
        let a = Vector2::new(-3.0, 4.0);
        let b = Vector2::new(0.0, 0.0);
        assert_eq!(via_trait(a, b), (a.distance(b), a.magnitude()));
    }

    #[test]
    fn conversions() {
        assert_eq!(Vector2::from((2, 4)), Vector2::new(2.0, 4.0));
        assert_eq!(Vector2::from((0.5, -1.0)), Vector2::new(0.5, -1.0));
        let (x, y): (NativeFloat, NativeFloat) = Vector2::new(7.0, 8.0).into();
        assert_eq!((x, y), (7.0, 8.0));
    }
}

//! 2D points over a generic scalar.
//!
//! - `Coord`: the scalar contract (integers and floats).
//! - `Point<T>`: plain `{x, y}` pair with exact, field-wise equality.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub};
use std::str::FromStr;

use nalgebra::{Point2, Scalar, Vector2};

/// Numeric scalar usable as a point coordinate.
///
/// Arithmetic stays in `Self`. `to_f64` is the promotion used for tolerance
/// checks and areas; `from_f64` narrows back (truncating for integers).
/// The `checked_*` operations return `None` on integer overflow and never fail
/// for floats.
pub trait Coord:
    Scalar
    + Copy
    + Default
    + PartialOrd
    + fmt::Display
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
{
    fn to_f64(self) -> f64;
    fn from_f64(v: f64) -> Self;
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Square root evaluated in `f64` and narrowed back into `Self`.
    #[inline]
    fn sqrt(self) -> Self {
        Self::from_f64(self.to_f64().sqrt())
    }
}

macro_rules! impl_coord_int {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }
            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                <$t>::checked_sub(self, rhs)
            }
            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$t>::checked_mul(self, rhs)
            }
        }
    )*};
}

macro_rules! impl_coord_float {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }
            #[inline]
            fn checked_sub(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }
            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
        }
    )*};
}

impl_coord_int!(i32, i64);
impl_coord_float!(f32, f64);

/// A point in the plane. Defaults to the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T: Coord> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Position vector of this point.
    #[inline]
    pub fn to_vector(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Vector from `self` to `other`, computed in `T`.
    #[inline]
    pub fn to(self, other: Point<T>) -> Vector2<T> {
        Vector2::new(other.x - self.x, other.y - self.y)
    }
}

impl<T: Coord> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Coord> From<Point<T>> for Point2<T> {
    #[inline]
    fn from(p: Point<T>) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl<T: Coord> From<Point2<T>> for Point<T> {
    #[inline]
    fn from(p: Point2<T>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl<T: Coord> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_origin() {
        let p: Point<i32> = Point::default();
        assert_eq!(p, Point::new(0, 0));
        let q: Point<f64> = Point::default();
        assert_eq!(q, Point::new(0.0, 0.0));
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(Point::new(1.5, -2.0), Point::new(1.5, -2.0));
        assert_ne!(Point::new(1.0, 0.0), Point::new(1.0 + 1e-15, 0.0));
        assert_ne!(Point::new(1, 2), Point::new(2, 1));
    }

    #[test]
    fn integer_sqrt_truncates() {
        assert_eq!(Coord::sqrt(8_i32), 2);
        assert_eq!(Coord::sqrt(9_i64), 3);
        assert!((Coord::sqrt(2.0_f64) - std::f64::consts::SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn checked_ops_flag_integer_overflow_only() {
        assert_eq!(Coord::checked_mul(50_000_i32, 50_000), None);
        assert_eq!(Coord::checked_add(i32::MAX, 1), None);
        assert_eq!(Coord::checked_sub(i64::MIN, 1), None);
        assert_eq!(Coord::checked_mul(50_000_i64, 50_000), Some(2_500_000_000));
        assert_eq!(Coord::checked_mul(1e200_f64, 1e200), Some(f64::INFINITY));
    }

    #[test]
    fn display_and_nalgebra_roundtrip() {
        let p = Point::new(3, -4);
        assert_eq!(p.to_string(), "(3,-4)");
        assert_eq!(Point::new(0.5, 2.0).to_string(), "(0.5,2)");
        let q: Point2<i32> = p.into();
        assert_eq!(Point::from(q), p);
        let v = Point::new(1, 1).to(p);
        assert_eq!((v.x, v.y), (2, -5));
    }
}

//! Comparison of floating point quantities up to a tolerance.
//!
//! Two quantities are nearly equal when every pair of corresponding
//! components differs by strictly less than the tolerance. The default
//! tolerance is [`Float::SMALL_NUMBER`].

use crate::num::Float;

/// Approximate equality with an absolute tolerance.
///
/// Unlike [`approx::AbsDiffEq`] this does not require [`PartialEq`], so it
/// can be implemented for floating point vectors and matrices, which
/// deliberately do not offer exact equality.
pub trait NearlyEqual<Rhs: ?Sized = Self> {
    type Tolerance: Copy;

    fn default_tolerance() -> Self::Tolerance;

    fn is_nearly_equal_within(&self, other: &Rhs, tolerance: Self::Tolerance) -> bool;

    fn is_nearly_equal(&self, other: &Rhs) -> bool {
        self.is_nearly_equal_within(other, Self::default_tolerance())
    }
}

/// Approximate comparison against zero with an absolute tolerance.
pub trait NearlyZero {
    type Tolerance: Copy;

    fn is_nearly_zero_within(&self, tolerance: Self::Tolerance) -> bool;

    fn is_nearly_zero(&self) -> bool;
}

macro_rules! impl_for_float {
    ($f:ty) => {
        impl NearlyEqual for $f {
            type Tolerance = $f;

            #[inline]
            fn default_tolerance() -> $f {
                <$f as Float>::SMALL_NUMBER
            }

            #[inline]
            fn is_nearly_equal_within(&self, other: &$f, tolerance: $f) -> bool {
                (self - other).abs() < tolerance
            }
        }

        impl NearlyZero for $f {
            type Tolerance = $f;

            #[inline]
            fn is_nearly_zero_within(&self, tolerance: $f) -> bool {
                self.abs() < tolerance
            }

            #[inline]
            fn is_nearly_zero(&self) -> bool {
                self.is_nearly_zero_within(<$f as Float>::SMALL_NUMBER)
            }
        }
    };
}

impl_for_float!(f32);
impl_for_float!(f64);

/// Whether `a` and `b` are equal within the default tolerance.
#[inline]
pub fn is_nearly_equal<A: NearlyEqual<B> + ?Sized, B: ?Sized>(a: &A, b: &B) -> bool {
    a.is_nearly_equal(b)
}

/// Whether `a` and `b` are equal within `tolerance`.
#[inline]
pub fn is_nearly_equal_within<A: NearlyEqual<B> + ?Sized, B: ?Sized>(
    a: &A,
    b: &B,
    tolerance: A::Tolerance,
) -> bool {
    a.is_nearly_equal_within(b, tolerance)
}

/// Whether `value` is zero within the default tolerance.
#[inline]
pub fn is_nearly_zero<T: NearlyZero + ?Sized>(value: &T) -> bool {
    value.is_nearly_zero()
}

/// Whether `value` is zero within `tolerance`.
#[inline]
pub fn is_nearly_zero_within<T: NearlyZero + ?Sized>(value: &T, tolerance: T::Tolerance) -> bool {
    value.is_nearly_zero_within(tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_uses_strict_bound() {
        assert!(is_nearly_equal_within(&1.0_f64, &1.25, 0.5));
        assert!(!is_nearly_equal_within(&1.0_f64, &1.5, 0.5));
        assert!(is_nearly_equal(&0.1_f32, &(0.3 - 0.2)));
        assert!(!is_nearly_equal(&0.1_f32, &0.1001));
    }

    #[test]
    fn nearly_zero_works() {
        assert!(is_nearly_zero(&1e-7_f64));
        assert!(is_nearly_zero(&-1e-7_f32));
        assert!(!is_nearly_zero(&1e-6_f64));
        assert!(is_nearly_zero_within(&0.05_f64, 0.1));
    }
}

//! Numbers and numerics.

#![allow(clippy::excessive_precision)]

use crate::tolerance::{NearlyEqual, NearlyZero};
use num_traits as nt;
use rand::{Rng, distr::uniform::SampleUniform};
use rand_distr::StandardNormal;
use std::{fmt, hash::Hash, ops::Neg, str::FromStr};

/// Gathers the traits required of a vector or matrix component. Implemented
/// for the primitive integer and floating point types.
pub trait Scalar:
    Copy
    + Default
    + fmt::Debug
    + fmt::Display
    + FromStr
    + PartialOrd
    + nt::NumAssign
    + nt::NumCast
    + nt::AsPrimitive<Self>
    + SampleUniform
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Draws a uniformly distributed value between `min` and `max`. The upper
    /// bound is inclusive for integers and exclusive for floating point
    /// types. If the range is empty, `min` is returned.
    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self;
}

/// A [`Scalar`] that can be negated.
pub trait SignedScalar: Scalar + Neg<Output = Self> {
    const NEG_ONE: Self;
}

/// A [`Scalar`] for which exact equality is meaningful.
pub trait IntegerScalar: Scalar + Eq + Ord + Hash {}

/// Gathers traits useful for working with generic floating point types.
pub trait Float:
    SignedScalar
    + nt::Float
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
    + NearlyEqual<Tolerance = Self>
    + NearlyZero<Tolerance = Self>
{
    const TWO: Self;
    const FOUR: Self;
    const ONE_HALF: Self;
    const ONE_FOURTH: Self;
    const PI: Self;
    const TWO_PI: Self;
    const FRAC_PI_2: Self;
    const FRAC_1_PI: Self;
    const DEGREES_PER_RADIAN: Self;
    const RADIANS_PER_DEGREE: Self;

    /// The default tolerance below which differences are treated as zero.
    const SMALL_NUMBER: Self;

    /// Computes `num / den` in this type.
    fn from_ratio(num: i64, den: i64) -> Self;

    /// Draws a sample from the standard normal distribution.
    fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_integer_scalar {
    ($($i:ty),+) => {
        $(
            impl Scalar for $i {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                    if min >= max {
                        min
                    } else {
                        rng.random_range(min..=max)
                    }
                }
            }

            impl IntegerScalar for $i {}
        )+
    };
}

macro_rules! impl_signed {
    ($($t:ty => $neg_one:expr),+) => {
        $(
            impl SignedScalar for $t {
                const NEG_ONE: Self = $neg_one;
            }
        )+
    };
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Scalar for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, min: Self, max: Self) -> Self {
                if min < max {
                    rng.random_range(min..max)
                } else {
                    min
                }
            }
        }

        impl Float for $f {
            const TWO: Self = 2.0;
            const FOUR: Self = 4.0;
            const ONE_HALF: Self = 0.5;
            const ONE_FOURTH: Self = 0.25;
            const PI: Self = std::$f::consts::PI;
            const TWO_PI: Self = 2.0 * std::$f::consts::PI;
            const FRAC_PI_2: Self = std::$f::consts::FRAC_PI_2;
            const FRAC_1_PI: Self = std::$f::consts::FRAC_1_PI;
            const DEGREES_PER_RADIAN: Self = 180.0 * std::$f::consts::FRAC_1_PI;
            const RADIANS_PER_DEGREE: Self = std::$f::consts::PI / 180.0;
            const SMALL_NUMBER: Self = 1e-6;

            #[inline]
            fn from_ratio(num: i64, den: i64) -> Self {
                num as $f / den as $f
            }

            #[inline]
            fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self {
                rng.sample(StandardNormal)
            }
        }
    };
}

impl_integer_scalar!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl_signed!(
    i8 => -1,
    i16 => -1,
    i32 => -1,
    i64 => -1,
    f32 => -1.0,
    f64 => -1.0
);

impl_float!(f32);
impl_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random;
    use approx::assert_abs_diff_eq;

    #[test]
    fn float_angle_constants_are_reciprocal() {
        assert_abs_diff_eq!(f32::DEGREES_PER_RADIAN * f32::RADIANS_PER_DEGREE, 1.0);
        assert_abs_diff_eq!(f64::DEGREES_PER_RADIAN * f64::RADIANS_PER_DEGREE, 1.0);
    }

    #[test]
    fn float_ratio_is_computed_in_target_precision() {
        assert_abs_diff_eq!(f64::from_ratio(10, 9), 10.0 / 9.0);
        assert_abs_diff_eq!(f32::from_ratio(-1, 4), -0.25);
    }

    #[test]
    fn uniform_integer_samples_include_upper_bound() {
        let mut rng = random::seeded_rng(7);
        let mut saw_max = false;
        for _ in 0..1000 {
            let value = i32::sample_uniform(&mut rng, 0, 3);
            assert!((0..=3).contains(&value));
            saw_max |= value == 3;
        }
        assert!(saw_max);
    }

    #[test]
    fn uniform_samples_work_for_every_integer_width() {
        fn check<T: IntegerScalar>(min: T, max: T) {
            let mut rng = random::seeded_rng(3);
            for _ in 0..100 {
                let value = T::sample_uniform(&mut rng, min, max);
                assert!(min <= value && value <= max);
            }
        }
        check(-3_i8, 3);
        check(-3_i64, 3);
        check(0_u16, 9);
        check(0_usize, 9);
    }

    #[test]
    fn scalars_cast_to_their_own_type() {
        fn identity_cast<T: Scalar>(value: T) -> T {
            nt::AsPrimitive::<T>::as_(value)
        }
        assert_eq!(identity_cast(-7_i32), -7);
        assert_eq!(identity_cast(2.5_f64), 2.5);
    }

    #[test]
    fn uniform_float_samples_exclude_upper_bound() {
        let mut rng = random::seeded_rng(7);
        for _ in 0..1000 {
            let value = f32::sample_uniform(&mut rng, -1.0, 1.0);
            assert!((-1.0..1.0).contains(&value));
        }
    }

    #[test]
    fn sampling_empty_range_gives_lower_bound() {
        let mut rng = random::seeded_rng(0);
        assert_eq!(u8::sample_uniform(&mut rng, 5, 5), 5);
        assert_eq!(u8::sample_uniform(&mut rng, 6, 5), 6);
        assert_eq!(f64::sample_uniform(&mut rng, 2.0, 2.0), 2.0);
    }
}

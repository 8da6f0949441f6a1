//! Angles with the unit encoded in the type.

use crate::{
    num::Float,
    vector::{UnitVector2, Vector2},
};
use bytemuck::{Pod, Zeroable};
use rand::Rng;
use std::{any::TypeId, cmp::Ordering, fmt, marker::PhantomData};

/// A unit of angle, defined by how many of it make up one degree.
pub trait AngleUnit: Copy + Default + fmt::Debug + Send + Sync + 'static {
    const NAME: &'static str;

    /// The number of units in one degree.
    fn ratio<T: Float>() -> T;
}

/// Degrees, the reference unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Deg;

/// Radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rad;

/// A unit with `NUM / DEN` units per degree. Gradians, for example, are
/// `RatioUnit<10, 9>` and full turns are `RatioUnit<1, 360>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RatioUnit<const NUM: i64, const DEN: i64>;

/// An angle with value type `T`, measured in unit `U`.
///
/// Angles in different units can be added, subtracted and compared directly.
/// The right-hand side is converted to the unit of the left-hand side first.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default)]
pub struct Angle<U, T> {
    value: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    unit: PhantomData<U>,
}

/// An angle in degrees.
pub type Degrees<T> = Angle<Deg, T>;

/// An angle in radians.
pub type Radians<T> = Angle<Rad, T>;

impl AngleUnit for Deg {
    const NAME: &'static str = "Degrees";

    #[inline]
    fn ratio<T: Float>() -> T {
        T::ONE
    }
}

impl AngleUnit for Rad {
    const NAME: &'static str = "Radians";

    #[inline]
    fn ratio<T: Float>() -> T {
        T::RADIANS_PER_DEGREE
    }
}

impl<const NUM: i64, const DEN: i64> AngleUnit for RatioUnit<NUM, DEN> {
    const NAME: &'static str = "Angle";

    #[inline]
    fn ratio<T: Float>() -> T {
        T::from_ratio(NUM, DEN)
    }
}

/// Creates an angle in degrees.
#[inline]
pub const fn deg<T: Float>(value: T) -> Degrees<T> {
    Angle::new(value)
}

/// Creates an angle in radians.
#[inline]
pub const fn rad<T: Float>(value: T) -> Radians<T> {
    Angle::new(value)
}

impl<U: AngleUnit, T: Float> Angle<U, T> {
    /// Creates an angle with the given value in unit `U`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(T::ZERO)
    }

    /// The value of the angle in unit `U`.
    #[inline]
    pub const fn value(&self) -> T {
        self.value
    }

    /// The number of `U` in one degree.
    #[inline]
    pub fn ratio() -> T {
        U::ratio()
    }

    /// Converts the angle to unit `V`.
    #[inline]
    pub fn convert<V: AngleUnit>(self) -> Angle<V, T> {
        if TypeId::of::<U>() == TypeId::of::<V>() {
            Angle::new(self.value)
        } else {
            Angle::new(self.value / U::ratio::<T>() * V::ratio::<T>())
        }
    }

    #[inline]
    pub fn as_degrees(self) -> Degrees<T> {
        self.convert()
    }

    #[inline]
    pub fn as_radians(self) -> Radians<T> {
        self.convert()
    }

    /// The value of the angle in degrees.
    #[inline]
    pub fn degrees(self) -> T {
        self.as_degrees().value
    }

    /// The value of the angle in radians.
    #[inline]
    pub fn radians(self) -> T {
        self.as_radians().value
    }

    #[inline]
    pub fn sin(self) -> T {
        self.radians().sin()
    }

    #[inline]
    pub fn cos(self) -> T {
        self.radians().cos()
    }

    #[inline]
    pub fn tan(self) -> T {
        self.radians().tan()
    }

    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        self.radians().sin_cos()
    }

    /// The 2D unit vector `(cos θ, sin θ)` pointing in the direction of the
    /// angle.
    #[inline]
    pub fn to_vector(self) -> UnitVector2<T> {
        let (sin, cos) = self.sin_cos();
        UnitVector2::new_unchecked(Vector2::new(cos, sin))
    }

    /// Samples an angle uniformly from `[-π, π)` radians.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Radians::new(T::sample_uniform(rng, -T::PI, T::PI)).convert()
    }
}

/// Computes the horizontal field of view corresponding to the given vertical
/// field of view for a screen with the given width and height.
pub fn horizontal_fov<U: AngleUnit, T: Float>(
    vertical_fov: Angle<U, T>,
    screen: &Vector2<T>,
) -> Angle<U, T> {
    let aspect = screen.x() / screen.y();
    Radians::new(T::TWO * ((vertical_fov.radians() * T::ONE_HALF).tan() * aspect).atan()).convert()
}

/// Computes the vertical field of view corresponding to the given horizontal
/// field of view for a screen with the given width and height.
pub fn vertical_fov<U: AngleUnit, T: Float>(
    horizontal_fov: Angle<U, T>,
    screen: &Vector2<T>,
) -> Angle<U, T> {
    let inverse_aspect = screen.y() / screen.x();
    Radians::new(
        T::TWO * ((horizontal_fov.radians() * T::ONE_HALF).tan() * inverse_aspect).atan(),
    )
    .convert()
}

#[inline]
pub fn asin<T: Float>(value: T) -> Radians<T> {
    Radians::new(value.asin())
}

#[inline]
pub fn acos<T: Float>(value: T) -> Radians<T> {
    Radians::new(value.acos())
}

#[inline]
pub fn atan<T: Float>(value: T) -> Radians<T> {
    Radians::new(value.atan())
}

/// The four-quadrant arctangent of `y / x`.
#[inline]
pub fn atan2<T: Float>(y: T, x: T) -> Radians<T> {
    Radians::new(y.atan2(x))
}

impl<T: Float> From<Radians<T>> for Degrees<T> {
    #[inline]
    fn from(angle: Radians<T>) -> Self {
        angle.convert()
    }
}

impl<T: Float> From<Degrees<T>> for Radians<T> {
    #[inline]
    fn from(angle: Degrees<T>) -> Self {
        angle.convert()
    }
}

impl_binop!(Add, add, [U: AngleUnit, V: AngleUnit, T: Float], Angle<U, T>, Angle<V, T>, Angle<U, T>, |a, b| {
    Angle::new(a.value + b.convert::<U>().value)
});

impl_binop!(Sub, sub, [U: AngleUnit, V: AngleUnit, T: Float], Angle<U, T>, Angle<V, T>, Angle<U, T>, |a, b| {
    Angle::new(a.value - b.convert::<U>().value)
});

impl_binop!(Mul, mul, [U: AngleUnit, T: Float], Angle<U, T>, T, Angle<U, T>, |a, b| {
    Angle::new(a.value * *b)
});

impl_binop!(Div, div, [U: AngleUnit, T: Float], Angle<U, T>, T, Angle<U, T>, |a, b| {
    Angle::new(a.value / *b)
});

impl_binop!(Mul, mul, [U: AngleUnit], f32, Angle<U, f32>, Angle<U, f32>, |a, b| {
    Angle::new(*a * b.value)
});

impl_binop!(Mul, mul, [U: AngleUnit], f64, Angle<U, f64>, Angle<U, f64>, |a, b| {
    Angle::new(*a * b.value)
});

impl_unary_op!(Neg, neg, [U: AngleUnit, T: Float], Angle<U, T>, Angle<U, T>, |a| {
    Angle::new(-a.value)
});

impl_binop_assign!(AddAssign, add_assign, [U: AngleUnit, V: AngleUnit, T: Float], Angle<U, T>, Angle<V, T>, |a, b| {
    a.value += b.convert::<U>().value;
});

impl_binop_assign!(SubAssign, sub_assign, [U: AngleUnit, V: AngleUnit, T: Float], Angle<U, T>, Angle<V, T>, |a, b| {
    a.value -= b.convert::<U>().value;
});

impl_binop_assign!(MulAssign, mul_assign, [U: AngleUnit, T: Float], Angle<U, T>, T, |a, b| {
    a.value *= *b;
});

impl_binop_assign!(DivAssign, div_assign, [U: AngleUnit, T: Float], Angle<U, T>, T, |a, b| {
    a.value /= *b;
});

impl<U: AngleUnit, V: AngleUnit, T: Float> PartialEq<Angle<V, T>> for Angle<U, T> {
    #[inline]
    fn eq(&self, other: &Angle<V, T>) -> bool {
        self.value == other.convert::<U>().value
    }
}

impl<U: AngleUnit, V: AngleUnit, T: Float> PartialOrd<Angle<V, T>> for Angle<U, T> {
    #[inline]
    fn partial_cmp(&self, other: &Angle<V, T>) -> Option<Ordering> {
        self.value.partial_cmp(&other.convert::<U>().value)
    }
}

impl_abs_diff_eq!([U: AngleUnit, V: AngleUnit, T: Float], Angle<U, T>, Angle<V, T>, |a, b, epsilon| {
    a.value.abs_diff_eq(&b.convert::<U>().value, epsilon)
});

impl_relative_eq!([U: AngleUnit, V: AngleUnit, T: Float], Angle<U, T>, Angle<V, T>, |a, b, epsilon, max_relative| {
    a.value
        .relative_eq(&b.convert::<U>().value, epsilon, max_relative)
});

impl_nearly_equal!([U: AngleUnit, T: Float], Angle<U, T>, T, |a, b, tolerance| {
    crate::tolerance::is_nearly_equal_within(&a.value, &b.value, tolerance)
});

impl<U: AngleUnit, T: Float> fmt::Debug for Angle<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(U::NAME).field(&self.value).finish()
    }
}

// SAFETY: `Angle` is a transparent wrapper around a single `T`.
unsafe impl<U: AngleUnit> Zeroable for Angle<U, f32> {}
unsafe impl<U: AngleUnit> Pod for Angle<U, f32> {}
unsafe impl<U: AngleUnit> Zeroable for Angle<U, f64> {}
unsafe impl<U: AngleUnit> Pod for Angle<U, f64> {}

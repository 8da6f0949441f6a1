//! Vectors of unit length.

use super::Vector;
use crate::{num::Float, quaternion::Quaternion};
use bytemuck::{Pod, Zeroable};
use rand::Rng;
use std::{
    fmt,
    ops::{Deref, Index},
};

/// A vector of unit length.
///
/// Unit vectors are obtained by normalizing a [`Vector`] with
/// [`Vector::unit`], from the named directions, by rotating another unit
/// vector or by random sampling. The unit norm is trusted, never re-checked.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct UnitVector<T, const L: usize> {
    inner: Vector<T, L>,
}

/// A 2-dimensional vector of unit length.
pub type UnitVector2<T> = UnitVector<T, 2>;

/// A 3-dimensional vector of unit length.
pub type UnitVector3<T> = UnitVector<T, 3>;

/// A 4-dimensional vector of unit length.
pub type UnitVector4<T> = UnitVector<T, 4>;

impl<T: Float, const L: usize> UnitVector<T, L> {
    /// Wraps the given vector, which is assumed to be normalized.
    #[inline]
    pub(crate) const fn new_unchecked(inner: Vector<T, L>) -> Self {
        Self { inner }
    }

    /// Samples a direction uniformly from the unit sphere.
    ///
    /// Draws a standard normal value for each component and normalizes the
    /// result. The rare draws that are too short to normalize are retried.
    /// Only defined for `L > 0`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        const { assert!(L > 0, "random unit vectors need at least one component") };
        loop {
            let candidate = Vector::<T, L>::from_fn(|_| T::sample_standard_normal(rng));
            if let Some(unit) = candidate.unit() {
                return unit;
            }
            log::debug!("Rejected degenerate sample {candidate:?} for random unit vector");
        }
    }

    /// This unit vector as a [`Vector`].
    #[inline]
    pub const fn as_vector(&self) -> &Vector<T, L> {
        &self.inner
    }

    #[inline]
    pub const fn into_vector(self) -> Vector<T, L> {
        self.inner
    }
}

impl<T: Float> UnitVector<T, 3> {
    /// `(1, 0, 0)`.
    #[inline]
    pub const fn forward() -> Self {
        Self::new_unchecked(Vector::forward())
    }

    /// `(-1, 0, 0)`.
    #[inline]
    pub const fn backward() -> Self {
        Self::new_unchecked(Vector::backward())
    }

    /// `(0, 1, 0)`.
    #[inline]
    pub const fn right() -> Self {
        Self::new_unchecked(Vector::right())
    }

    /// `(0, -1, 0)`.
    #[inline]
    pub const fn left() -> Self {
        Self::new_unchecked(Vector::left())
    }

    /// `(0, 0, 1)`.
    #[inline]
    pub const fn up() -> Self {
        Self::new_unchecked(Vector::up())
    }

    /// `(0, 0, -1)`.
    #[inline]
    pub const fn down() -> Self {
        Self::new_unchecked(Vector::down())
    }

    /// Computes this unit vector rotated by the given unit quaternion.
    #[inline]
    pub fn rotated_by(&self, rotation: &Quaternion<T>) -> Self {
        Self::new_unchecked(self.inner.rotated_by(rotation))
    }

    /// Rotates this unit vector in place by the given unit quaternion.
    #[inline]
    pub fn rotate_by(&mut self, rotation: &Quaternion<T>) {
        self.inner.rotate_by(rotation);
    }
}

impl<T: Float, const L: usize> Deref for UnitVector<T, L> {
    type Target = Vector<T, L>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Float, const L: usize> From<UnitVector<T, L>> for Vector<T, L> {
    #[inline]
    fn from(unit: UnitVector<T, L>) -> Self {
        unit.inner
    }
}

impl<T: Float, const L: usize> Index<usize> for UnitVector<T, L> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl_binop!(Mul, mul, [T: Float, const L: usize], UnitVector<T, L>, T, Vector<T, L>, |a, b| {
    a.inner * *b
});

impl_binop!(Div, div, [T: Float, const L: usize], UnitVector<T, L>, T, Vector<T, L>, |a, b| {
    a.inner / *b
});

impl_binop!(Mul, mul, [const L: usize], f32, UnitVector<f32, L>, Vector<f32, L>, |a, b| {
    b.inner * *a
});

impl_binop!(Mul, mul, [const L: usize], f64, UnitVector<f64, L>, Vector<f64, L>, |a, b| {
    b.inner * *a
});

impl_unary_op!(Neg, neg, [T: Float, const L: usize], UnitVector<T, L>, UnitVector<T, L>, |val| {
    UnitVector::new_unchecked(-val.inner)
});

impl_nearly_equal!([T: Float, const L: usize], UnitVector<T, L>, T, |a, b, tolerance| {
    a.inner.is_nearly_equal_within(&b.inner, tolerance)
});

impl<T: Float, const L: usize> fmt::Debug for UnitVector<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("UnitVector");
        for component in self.inner.iter() {
            tuple.field(component);
        }
        tuple.finish()
    }
}

impl<T: Float, const L: usize> fmt::Display for UnitVector<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

// SAFETY: `UnitVector` is a transparent wrapper around a `Vector`. An
// all-zero unit vector breaks the norm invariant but not memory safety.
unsafe impl<T: Float + Zeroable, const L: usize> Zeroable for UnitVector<T, L> {}
unsafe impl<T: Float + Pod, const L: usize> Pod for UnitVector<T, L> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        angle::deg,
        random,
        tolerance::NearlyEqual,
        vector::{Vector2, Vector3},
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn random_unit_vectors_have_unit_norm() {
        let mut rng = random::seeded_rng(123);
        for _ in 0..100 {
            let u = UnitVector3::<f64>::random(&mut rng);
            assert_abs_diff_eq!(u.norm_squared(), 1.0, epsilon = 1e-12);
        }
        let u = random::with_thread_rng(|rng| UnitVector::<f32, 4>::random(rng));
        assert_abs_diff_eq!(u.norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn random_one_component_unit_vectors_are_signs() {
        let mut rng = random::seeded_rng(5);
        for _ in 0..20 {
            let u = UnitVector::<f64, 1>::random(&mut rng);
            assert_abs_diff_eq!(u[0].abs(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn negated_unit_vector_is_opposite_direction() {
        assert_nearly_equal!(-UnitVector3::<f32>::forward(), UnitVector3::backward());
        assert_nearly_equal!(-UnitVector3::<f32>::right(), UnitVector3::left());
        assert_nearly_equal!(-UnitVector3::<f32>::up(), UnitVector3::down());
    }

    #[test]
    fn scaling_unit_vector_gives_plain_vector() {
        let u = Vector2::new(3.0_f64, 4.0).unit().unwrap();
        let scaled: Vector2<f64> = u * 10.0;
        assert_nearly_equal!(scaled, Vector2::new(6.0, 8.0));
        assert_nearly_equal!(10.0 * u, Vector2::new(6.0, 8.0));
        assert_nearly_equal!(u / 0.5, Vector2::new(1.2, 1.6));
        assert_abs_diff_eq!(u[1], 0.8, epsilon = 1e-12);
    }

    #[test]
    fn rotating_forward_about_right_by_quarter_turn_gives_down() {
        let rotation = Quaternion::from_axis_angle(&UnitVector3::right(), deg(90.0_f64));
        let mut direction = UnitVector3::forward();
        assert_nearly_equal!(direction.rotated_by(&rotation), UnitVector3::down());

        direction.rotate_by(&rotation);
        assert_nearly_equal!(direction, UnitVector3::down());
        assert_abs_diff_eq!(direction.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn unit_vector_converts_to_vector() {
        let u = UnitVector3::<f64>::up();
        let v: Vector3<f64> = u.into();
        assert_nearly_equal!(v, *u.as_vector());
        assert_nearly_equal!(u.into_vector(), Vector3::up());
        assert!(u.is_nearly_equal(&UnitVector3::up()));
    }
}

//! Quaternions representing rotations.

use crate::{
    angle::{Angle, AngleUnit},
    matrix::{Matrix3, Matrix4},
    num::Float,
    tolerance::NearlyEqual,
    vector::{UnitVector, UnitVector3, Vector3},
};
use bytemuck::{Pod, Zeroable};
use rand::Rng;
use std::fmt;

/// A quaternion with imaginary part `v` and real part `s`.
///
/// A quaternion represents a rotation when it has unit norm, which the
/// rotation methods assume without checking. Composition with `*` applies
/// the right-hand rotation first, and `!` gives the inverse rotation.
///
/// `q` and `-q` represent the same rotation, so rotations should be compared
/// with [`is_equivalent`](Self::is_equivalent) rather than component-wise.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "T: Float + serde::Serialize + serde::de::DeserializeOwned")
)]
#[derive(Clone, Copy)]
pub struct Quaternion<T> {
    v: Vector3<T>,
    s: T,
}

impl<T: Float> Quaternion<T> {
    /// The quaternion representing no rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_parts(Vector3::zeros(), T::ONE)
    }

    /// Creates a quaternion with imaginary part `(x, y, z)` and real part
    /// `w`.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_parts(Vector3::new(x, y, z), w)
    }

    #[inline]
    pub const fn from_parts(imag: Vector3<T>, real: T) -> Self {
        Self { v: imag, s: real }
    }

    /// Creates the quaternion rotating by `angle` about `axis`, counter-clockwise
    /// when looking along the axis towards the origin.
    #[inline]
    pub fn from_axis_angle<U: AngleUnit>(axis: &UnitVector3<T>, angle: Angle<U, T>) -> Self {
        let (sin, cos) = (angle * T::ONE_HALF).sin_cos();
        Self::from_parts(axis * sin, cos)
    }

    /// Extracts the unit quaternion for the given rotation matrix, which
    /// must be orthonormal with determinant one.
    ///
    /// The extraction divides by the largest of the four possible pivots so
    /// that no branch divides by a term close to zero.
    pub fn from_rotation_matrix(m: &Matrix3<T>) -> Self {
        let e = |i, j| m.element(i, j);
        let trace = m.trace();

        if trace > T::ZERO {
            let s = T::TWO * (trace + T::ONE).sqrt();
            Self::new(
                (e(1, 2) - e(2, 1)) / s,
                (e(2, 0) - e(0, 2)) / s,
                (e(0, 1) - e(1, 0)) / s,
                T::ONE_FOURTH * s,
            )
        } else if e(0, 0) > e(1, 1) && e(0, 0) > e(2, 2) {
            let s = T::TWO * (T::ONE + e(0, 0) - e(1, 1) - e(2, 2)).sqrt();
            Self::new(
                T::ONE_FOURTH * s,
                (e(0, 1) + e(1, 0)) / s,
                (e(0, 2) + e(2, 0)) / s,
                (e(1, 2) - e(2, 1)) / s,
            )
        } else if e(1, 1) > e(2, 2) {
            let s = T::TWO * (T::ONE + e(1, 1) - e(0, 0) - e(2, 2)).sqrt();
            Self::new(
                (e(0, 1) + e(1, 0)) / s,
                T::ONE_FOURTH * s,
                (e(1, 2) + e(2, 1)) / s,
                (e(2, 0) - e(0, 2)) / s,
            )
        } else {
            let s = T::TWO * (T::ONE + e(2, 2) - e(0, 0) - e(1, 1)).sqrt();
            Self::new(
                (e(0, 2) + e(2, 0)) / s,
                (e(1, 2) + e(2, 1)) / s,
                T::ONE_FOURTH * s,
                (e(0, 1) - e(1, 0)) / s,
            )
        }
    }

    /// Extracts the unit quaternion for the rotation in the upper-left 3x3
    /// block of the given matrix.
    #[inline]
    pub fn from_homogeneous_matrix(m: &Matrix4<T>) -> Self {
        Self::from_rotation_matrix(&m.linear_part())
    }

    /// Samples a rotation uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let components = UnitVector::<T, 4>::random(rng);
        Self::new(components[0], components[1], components[2], components[3])
    }

    #[inline]
    pub const fn x(&self) -> T {
        self.v.x()
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.v.y()
    }

    #[inline]
    pub const fn z(&self) -> T {
        self.v.z()
    }

    #[inline]
    pub const fn w(&self) -> T {
        self.s
    }

    /// The imaginary part.
    #[inline]
    pub const fn imag(&self) -> &Vector3<T> {
        &self.v
    }

    /// The real part.
    #[inline]
    pub const fn real(&self) -> T {
        self.s
    }

    #[inline]
    pub fn norm_squared(&self) -> T {
        self.v.norm_squared() + self.s * self.s
    }

    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::from_parts(-self.v, self.s)
    }

    /// The inverse rotation. Only valid for unit quaternions, for which the
    /// inverse is the conjugate.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate()
    }

    /// Rotates the given vector.
    pub fn rotate_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        let uv = self.v.cross(vector);
        let uuv = self.v.cross(&uv);
        vector + uv * (T::TWO * self.s) + uuv * T::TWO
    }

    #[inline]
    pub fn to_rotation_matrix(&self) -> Matrix3<T> {
        Matrix3::rotation(self)
    }

    #[inline]
    pub fn to_homogeneous_matrix(&self) -> Matrix4<T> {
        Matrix4::rotation(self)
    }

    /// Whether this quaternion and `other` rotate vectors identically within
    /// the given tolerance, regardless of sign.
    pub fn is_equivalent(&self, other: &Self, tolerance: T) -> bool {
        [Vector3::forward(), Vector3::right()]
            .iter()
            .all(|reference| {
                self.rotate_vector(reference)
                    .is_nearly_equal_within(&other.rotate_vector(reference), tolerance)
            })
    }
}

impl<T: Float> Default for Quaternion<T> {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Mul, mul, [T: Float], Quaternion<T>, Quaternion<T>, Quaternion<T>, |a, b| {
    Quaternion::from_parts(
        b.v * a.s + a.v * b.s + a.v.cross(&b.v),
        a.s * b.s - a.v.dot(&b.v),
    )
});

impl_binop_assign!(MulAssign, mul_assign, [T: Float], Quaternion<T>, Quaternion<T>, |a, b| {
    *a = &*a * b;
});

impl_unary_op!(Not, not, [T: Float], Quaternion<T>, Quaternion<T>, |val| {
    val.conjugate()
});

impl_nearly_equal!([T: Float], Quaternion<T>, T, |a, b, tolerance| {
    a.v.is_nearly_equal_within(&b.v, tolerance) && a.s.is_nearly_equal_within(&b.s, tolerance)
});

impl<T: Float> fmt::Debug for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quaternion")
            .field("v", &self.v)
            .field("s", &self.s)
            .finish()
    }
}

// SAFETY: `Quaternion` is `repr(C)` with four fields of the same `Pod`
// scalar type and hence no padding.
unsafe impl<T: Float + Zeroable> Zeroable for Quaternion<T> {}
unsafe impl<T: Float + Pod> Pod for Quaternion<T> {}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use crate::{
        angle::{deg, rad},
        random,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_quaternion_is_identity() {
        let q = Quaternion::<f32>::default();
        assert_abs_diff_eq!(q.real(), 1.0);
        assert_nearly_equal!(*q.imag(), Vector3::zeros());
        assert_nearly_equal!(q, Quaternion::new(0.0, 0.0, 0.0, 1.0));

        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_nearly_equal!(q.rotate_vector(&v), v);
    }

    #[test]
    fn quaternion_from_axis_angle_matches_reference_values() {
        let axis = Vector3::new(0.369242_f64, -0.596525, -0.712614)
            .unit()
            .unwrap();
        let q = Quaternion::from_axis_angle(&axis, rad(0.622533));

        assert_nearly_equal!(
            q,
            Quaternion::new(0.1130857, -0.1826944, -0.2182483, 0.9519464),
            tolerance = 1e-5
        );
        assert_abs_diff_eq!(q.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn quarter_turns_rotate_named_directions() {
        let about_up = Quaternion::from_axis_angle(&UnitVector3::up(), deg(90.0_f64));
        assert_nearly_equal!(Vector3::forward().rotated_by(&about_up), Vector3::right());

        let about_right = Quaternion::from_axis_angle(&UnitVector3::right(), deg(90.0_f64));
        assert_nearly_equal!(Vector3::forward().rotated_by(&about_right), Vector3::down());
        assert_nearly_equal!(Vector3::up().rotated_by(&about_right), Vector3::forward());
    }

    #[test]
    fn composition_applies_right_rotation_first() {
        let mut rng = random::seeded_rng(3);
        for _ in 0..100 {
            let q1 = Quaternion::<f64>::random(&mut rng);
            let q2 = Quaternion::random(&mut rng);
            let v = Vector3::random_in(&mut rng, -1.0, 1.0);

            let composed = (&q1 * &q2).rotate_vector(&v);
            let sequential = q1.rotate_vector(&q2.rotate_vector(&v));
            assert_nearly_equal!(composed, sequential, tolerance = 1e-12);

            let mut q = q1;
            q *= q2;
            assert_nearly_equal!(q, q1 * q2);
        }
    }

    #[test]
    fn conjugate_undoes_rotation() {
        let q = Quaternion::from_axis_angle(
            &Vector3::new(1.0_f64, 1.0, 0.0).unit().unwrap(),
            deg(70.0),
        );
        let v = Vector3::new(0.3, -2.0, 5.0);
        assert_nearly_equal!((!q).rotate_vector(&q.rotate_vector(&v)), v);
        assert_nearly_equal!(q * q.inverse(), Quaternion::identity());
        assert_nearly_equal!(!q, q.conjugate());
    }

    #[test]
    fn negated_quaternion_is_equivalent() {
        let q = Quaternion::from_axis_angle(&UnitVector3::up(), deg(120.0_f64));
        let negated = Quaternion::from_parts(-*q.imag(), -q.real());
        assert!(!q.is_nearly_equal(&negated));
        assert!(q.is_equivalent(&negated, 1e-9));

        let about_forward = Quaternion::from_axis_angle(&UnitVector3::forward(), deg(120.0_f64));
        assert!(!q.is_equivalent(&about_forward, 1e-9));
        assert!(!q.is_equivalent(&Quaternion::identity(), 1e-9));
    }

    #[test]
    fn rotation_matrix_round_trip_gives_equivalent_quaternion() {
        let mut rng = random::seeded_rng(11);
        for _ in 0..1000 {
            let q = Quaternion::<f64>::random(&mut rng);
            let recovered = Quaternion::from_rotation_matrix(&q.to_rotation_matrix());
            assert!(q.is_equivalent(&recovered, 1e-9));
            assert_abs_diff_eq!(recovered.norm(), 1.0, epsilon = 1e-9);

            let recovered = Quaternion::from_homogeneous_matrix(&q.to_homogeneous_matrix());
            assert!(q.is_equivalent(&recovered, 1e-9));
        }
    }

    #[test]
    fn half_turns_use_every_extraction_branch() {
        for axis in [UnitVector3::forward(), UnitVector3::right(), UnitVector3::up()] {
            let q = Quaternion::from_axis_angle(&axis, deg(180.0_f64));
            let recovered = Quaternion::from_rotation_matrix(&q.to_rotation_matrix());
            assert!(q.is_equivalent(&recovered, 1e-9), "{axis:?}");
        }
    }

    #[test]
    fn random_quaternions_have_unit_norm() {
        let mut rng = random::seeded_rng(5);
        for _ in 0..100 {
            assert_abs_diff_eq!(Quaternion::<f32>::random(&mut rng).norm(), 1.0, epsilon = 1e-5);
        }
    }
}

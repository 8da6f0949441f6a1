//! Geometric transformation matrices. Points and directions are row vectors
//! multiplied from the left, so translations live in the last row.

use super::{Matrix3, Matrix4};
use crate::{
    angle::{Angle, AngleUnit},
    error::Result,
    num::{Float, Scalar},
    quaternion::Quaternion,
    vector::{Vector2, Vector3},
};

impl<T: Scalar> Matrix3<T> {
    /// Creates a matrix scaling each axis by the corresponding component of
    /// `scale`.
    #[inline]
    pub fn scaling(scale: &Vector3<T>) -> Self {
        Self::from_diagonal(scale)
    }
}

impl<T: Float> Matrix3<T> {
    /// Creates the rotation matrix corresponding to the given unit
    /// quaternion.
    pub fn rotation(rotation: &Quaternion<T>) -> Self {
        let (x, y, z, w) = (rotation.x(), rotation.y(), rotation.z(), rotation.w());
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        let two = T::TWO;

        Self::from([
            [T::ONE - two * (yy + zz), two * (xy + wz), two * (xz - wy)],
            [two * (xy - wz), T::ONE - two * (xx + zz), two * (yz + wx)],
            [two * (xz + wy), two * (yz - wx), T::ONE - two * (xx + yy)],
        ])
    }

    /// Creates a 2D projection mapping a screen of the given size centered
    /// on the origin to the range `[-1, 1]` on both axes.
    pub fn simple_view_projection(screen_size: &Vector2<T>) -> Self {
        Self::from_diagonal(&Vector3::new(
            T::TWO / screen_size.x(),
            T::TWO / screen_size.y(),
            T::ONE,
        ))
    }
}

impl<T: Scalar> Matrix4<T> {
    /// Creates a matrix translating points by `translation`.
    #[inline]
    pub fn translation(translation: &Vector3<T>) -> Self {
        Self::identity_with(&translation.to_row_matrix(), 3, 0)
    }

    /// Creates a matrix scaling each axis by the corresponding component of
    /// `scale`.
    #[inline]
    pub fn scaling(scale: &Vector3<T>) -> Self {
        Self::from_diagonal(&scale.extended(T::ONE))
    }

    /// The upper-left 3x3 block, holding the linear part of an affine
    /// transformation.
    #[inline]
    pub fn linear_part(&self) -> Matrix3<T> {
        Matrix3::from_fn(|i, j| self.rows[i][j])
    }

    /// Transforms the given point, including translation. No perspective
    /// division is performed.
    #[inline]
    pub fn transform_point(&self, point: &Vector3<T>) -> Vector3<T> {
        (point.extended(T::ONE) * self).xyz()
    }

    /// Transforms the given direction, ignoring translation.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        (vector.extended(T::ZERO) * self).xyz()
    }
}

impl<T: Float> Matrix4<T> {
    /// Creates the homogeneous rotation matrix corresponding to the given
    /// unit quaternion.
    #[inline]
    pub fn rotation(rotation: &Quaternion<T>) -> Self {
        Self::identity_with(&Matrix3::rotation(rotation), 0, 0)
    }

    /// Creates a view matrix for a camera at `eye` looking at `target`.
    ///
    /// In view space, the viewing direction is the third axis and `up` is
    /// projected onto the second axis.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`](crate::MathError::DivisionByZero)
    /// if `eye` and `target` coincide or `up` is parallel to the viewing
    /// direction.
    pub fn look_at(eye: &Vector3<T>, target: &Vector3<T>, up: &Vector3<T>) -> Result<Self> {
        let k = (target - eye).normalized()?;
        let i = up.cross(&k).normalized()?;
        let j = k.cross(&i).normalized()?;
        let translation = -Vector3::new(eye.dot(&i), eye.dot(&j), eye.dot(&k));

        Ok(Self::from([
            [i.x(), j.x(), k.x(), T::ZERO],
            [i.y(), j.y(), k.y(), T::ZERO],
            [i.z(), j.z(), k.z(), T::ZERO],
            [translation.x(), translation.y(), translation.z(), T::ONE],
        ]))
    }

    /// Creates a left-handed perspective projection mapping view space
    /// depths between `near` and `far` to `[0, 1]` after division by the
    /// fourth component.
    pub fn perspective<U: AngleUnit>(
        vertical_field_of_view: Angle<U, T>,
        aspect_ratio: T,
        near_distance: T,
        far_distance: T,
    ) -> Self {
        let height = T::ONE / (vertical_field_of_view * T::ONE_HALF).tan();
        let width = height / aspect_ratio;
        let depth_scale = far_distance / (far_distance - near_distance);

        Self::from([
            [width, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, height, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, depth_scale, T::ONE],
            [T::ZERO, T::ZERO, -near_distance * depth_scale, T::ZERO],
        ])
    }

    /// Creates a 2D projection mapping a screen of the given size centered
    /// on the origin to the range `[-1, 1]` on the first two axes.
    pub fn simple_view_projection(screen_size: &Vector2<T>) -> Self {
        let mut matrix = Self::identity();
        matrix[0][0] = T::TWO / screen_size.x();
        matrix[1][1] = T::TWO / screen_size.y();
        matrix
    }
}

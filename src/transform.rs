//! Transforms combining scaling, rotation and translation.

use crate::{
    error::{MathError, Result},
    matrix::{Matrix3, Matrix4},
    num::Float,
    quaternion::Quaternion,
    vector::Vector3,
};
use std::fmt;

/// A transform consisting of a per-axis scaling and a rotation followed by a
/// translation.
///
/// Composing transforms with non-uniform scaling and rotation can produce
/// shear, which this type cannot represent. In that case the composed
/// transform applies the combined scaling before the combined rotation.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(bound = "T: Float + serde::Serialize + serde::de::DeserializeOwned")
)]
#[derive(Clone, Copy)]
pub struct Transform<T> {
    position: Vector3<T>,
    rotation: Quaternion<T>,
    scale: Vector3<T>,
}

impl<T: Float> Transform<T> {
    /// Creates the identity transform.
    #[inline]
    pub const fn identity() -> Self {
        Self::new(Vector3::zeros(), Quaternion::identity(), Vector3::ones())
    }

    /// Creates the transform consisting of the given scaling, rotation and
    /// translation.
    #[inline]
    pub const fn new(position: Vector3<T>, rotation: Quaternion<T>, scale: Vector3<T>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Creates the transform consisting of the given translation and no
    /// rotation or scaling.
    #[inline]
    pub const fn from_position(position: Vector3<T>) -> Self {
        Self::new(position, Quaternion::identity(), Vector3::ones())
    }

    /// Creates the transform consisting of the given rotation and no
    /// translation or scaling.
    #[inline]
    pub const fn from_rotation(rotation: Quaternion<T>) -> Self {
        Self::new(Vector3::zeros(), rotation, Vector3::ones())
    }

    /// Creates the transform consisting of the given scaling and no
    /// translation or rotation.
    #[inline]
    pub const fn from_scale(scale: Vector3<T>) -> Self {
        Self::new(Vector3::zeros(), Quaternion::identity(), scale)
    }

    /// Decomposes the given affine matrix into a transform.
    ///
    /// The scale along each axis is the length of the corresponding row of
    /// the linear part. A linear part with negative determinant gets a
    /// negative scale along the first axis.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] if any row of the linear part is
    /// too short to normalize.
    pub fn from_matrix(matrix: &Matrix4<T>) -> Result<Self> {
        let linear = matrix.linear_part();
        let mut scale = Vector3::zeros();
        let mut rotation = Matrix3::zeros();

        for (i, row) in linear.iter().enumerate() {
            let norm = row.norm();
            if norm <= T::SMALL_NUMBER {
                log::debug!("Cannot decompose matrix with degenerate row {i}: {row:?}");
                return Err(MathError::DivisionByZero);
            }
            scale[i] = norm;
            rotation.set_row(i, row / norm);
        }

        if rotation.determinant() < T::ZERO {
            scale[0] = -scale[0];
            rotation[0].negate();
        }

        Ok(Self::new(
            matrix.row(3).xyz(),
            Quaternion::from_rotation_matrix(&rotation),
            scale,
        ))
    }

    /// The translational part of the transform.
    #[inline]
    pub const fn position(&self) -> &Vector3<T> {
        &self.position
    }

    /// The rotational part of the transform.
    #[inline]
    pub const fn rotation(&self) -> &Quaternion<T> {
        &self.rotation
    }

    /// The scaling part of the transform.
    #[inline]
    pub const fn scale(&self) -> &Vector3<T> {
        &self.scale
    }

    #[inline]
    pub fn set_position(&mut self, position: Vector3<T>) {
        self.position = position;
    }

    #[inline]
    pub fn set_rotation(&mut self, rotation: Quaternion<T>) {
        self.rotation = rotation;
    }

    #[inline]
    pub fn set_scale(&mut self, scale: Vector3<T>) {
        self.scale = scale;
    }

    /// Computes the homogeneous matrix applying the scaling, then the
    /// rotation and then the translation.
    pub fn to_matrix(&self) -> Matrix4<T> {
        Matrix4::scaling(&self.scale)
            * Matrix4::rotation(&self.rotation)
            * Matrix4::translation(&self.position)
    }

    /// Applies the transform to the given point.
    #[inline]
    pub fn transform_point(&self, point: &Vector3<T>) -> Vector3<T> {
        self.transform_vector(point) + self.position
    }

    /// Applies the scaling and rotation to the given vector.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3<T>) -> Vector3<T> {
        self.rotation.rotate_vector(&(vector * &self.scale))
    }
}

impl<T: Float> Default for Transform<T> {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl_binop!(Mul, mul, [T: Float], Transform<T>, Transform<T>, Transform<T>, |a, b| {
    Transform::new(
        b.rotation.rotate_vector(&(a.position * b.scale)) + b.position,
        b.rotation * a.rotation,
        a.scale * b.scale,
    )
});

impl_binop_assign!(MulAssign, mul_assign, [T: Float], Transform<T>, Transform<T>, |a, b| {
    *a = &*a * b;
});

impl<T: Float> fmt::Debug for Transform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("position", &self.position)
            .field("rotation", &self.rotation)
            .field("scale", &self.scale)
            .finish()
    }
}

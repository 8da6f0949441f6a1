//! Fixed-size linear algebra: vectors, matrices, quaternions, transforms and
//! unit-safe angles, generic over the component type.
//!
//! Vectors are row vectors, so a point `p` is transformed by a matrix `m` as
//! `p * m`, and the translation of a 4x4 matrix lives in its last row.

#[macro_use]
mod macros;

pub mod angle;
pub mod error;
pub mod matrix;
pub mod num;
pub mod quaternion;
pub mod random;
pub mod tolerance;
pub mod transform;
pub mod vector;

#[cfg(feature = "serde")]
mod serialization;

pub use angle::{Angle, Degrees, Radians, deg, rad};
pub use error::{MathError, Result};
pub use matrix::{Matrix, Matrix2, Matrix3, Matrix4};
pub use num::{Float, IntegerScalar, Scalar, SignedScalar};
pub use quaternion::Quaternion;
pub use tolerance::{NearlyEqual, NearlyZero};
pub use transform::Transform;
pub use vector::{UnitVector, UnitVector2, UnitVector3, Vector, Vector2, Vector3, Vector4};

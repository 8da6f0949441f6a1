//! Serialization of vectors and matrices as fixed-length tuples.

use crate::{
    matrix::Matrix,
    num::{Float, Scalar},
    vector::{UnitVector, Vector},
};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, SeqAccess, Visitor},
    ser::SerializeTuple,
};
use std::{any, fmt, marker::PhantomData};

impl<T: Scalar + Serialize, const L: usize> Serialize for Vector<T, L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(L)?;
        for component in self {
            tuple.serialize_element(component)?;
        }
        tuple.end()
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const L: usize> Deserialize<'de> for Vector<T, L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(L, VectorVisitor(PhantomData))
    }
}

struct VectorVisitor<T, const L: usize>(PhantomData<T>);

impl<'de, T: Scalar + Deserialize<'de>, const L: usize> Visitor<'de> for VectorVisitor<T, L> {
    type Value = Vector<T, L>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a tuple of {L} {}", any::type_name::<T>())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut vector = Vector::zeros();
        for i in 0..L {
            vector[i] = seq
                .next_element()?
                .ok_or_else(|| A::Error::invalid_length(i, &self))?;
        }
        Ok(vector)
    }
}

impl<T: Float + Serialize, const L: usize> Serialize for UnitVector<T, L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_vector().serialize(serializer)
    }
}

/// Deserialized unit vectors are renormalized, since the stored components
/// may have lost precision.
impl<'de, T: Float + Deserialize<'de>, const L: usize> Deserialize<'de> for UnitVector<T, L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vector::<T, L>::deserialize(deserializer)?
            .normalized_to_unit()
            .map_err(D::Error::custom)
    }
}

impl<T: Scalar + Serialize, const R: usize, const C: usize> Serialize for Matrix<T, R, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(R)?;
        for row in self {
            tuple.serialize_element(row)?;
        }
        tuple.end()
    }
}

impl<'de, T: Scalar + Deserialize<'de>, const R: usize, const C: usize> Deserialize<'de>
    for Matrix<T, R, C>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(R, MatrixVisitor(PhantomData))
    }
}

struct MatrixVisitor<T, const R: usize, const C: usize>(PhantomData<T>);

impl<'de, T: Scalar + Deserialize<'de>, const R: usize, const C: usize> Visitor<'de>
    for MatrixVisitor<T, R, C>
{
    type Value = Matrix<T, R, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "a tuple of {R} rows of {C} {}",
            any::type_name::<T>()
        )
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut matrix = Matrix::zeros();
        for i in 0..R {
            let row: Vector<T, C> = seq
                .next_element()?
                .ok_or_else(|| A::Error::invalid_length(i, &self))?;
            matrix.set_row(i, row);
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        angle::{Degrees, deg},
        matrix::Matrix,
        quaternion::Quaternion,
        transform::Transform,
        vector::{UnitVector3, Vector3},
    };

    #[test]
    fn vectors_serialize_as_arrays() {
        let v = Vector3::new(1, -2, 3);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1,-2,3]");
        assert_eq!(serde_json::from_str::<Vector3<i32>>(&json).unwrap(), v);
        assert!(serde_json::from_str::<Vector3<i32>>("[1,2]").is_err());
    }

    #[test]
    fn matrices_serialize_as_nested_arrays() {
        let m = Matrix::<u8, 2, 3>::from([[1, 2, 3], [4, 5, 6]]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1,2,3],[4,5,6]]");
        assert_eq!(serde_json::from_str::<Matrix<u8, 2, 3>>(&json).unwrap(), m);
    }

    #[test]
    fn unit_vectors_reject_zero_length() {
        let u: UnitVector3<f64> = serde_json::from_str("[0.0,2.0,0.0]").unwrap();
        assert_nearly_equal!(u, UnitVector3::right());
        assert!(serde_json::from_str::<UnitVector3<f64>>("[0.0,0.0,0.0]").is_err());
    }

    #[test]
    fn composite_types_round_trip() {
        let angle = deg(45.0_f32);
        let json = serde_json::to_string(&angle).unwrap();
        assert_eq!(json, "45.0");
        assert_nearly_equal!(serde_json::from_str::<Degrees<f32>>(&json).unwrap(), angle);

        let transform = Transform::new(
            Vector3::new(1.0_f64, 2.0, 3.0),
            Quaternion::from_axis_angle(&UnitVector3::up(), deg(30.0)),
            Vector3::same(2.0),
        );
        let json = serde_json::to_string(&transform).unwrap();
        let recovered: Transform<f64> = serde_json::from_str(&json).unwrap();
        assert_nearly_equal!(recovered.to_matrix(), transform.to_matrix());
    }
}

//! Vectors.

mod access;
mod unit;

pub use access::{ComponentReader, ComponentWriter};
pub use unit::{UnitVector, UnitVector2, UnitVector3, UnitVector4};

use crate::{
    angle::{self, Radians},
    error::{MathError, Result},
    matrix::Matrix,
    num::{Float, IntegerScalar, Scalar, SignedScalar},
    quaternion::Quaternion,
    tolerance::{self, NearlyZero},
};
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use rand::Rng;
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
    str::FromStr,
};

/// A row vector with `L` components of type `T`.
///
/// Exact equality is only implemented for integer components. Floating point
/// vectors are compared with [`NearlyEqual`](crate::tolerance::NearlyEqual).
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Vector<T, const L: usize> {
    data: [T; L],
}

/// A 2-dimensional vector.
pub type Vector2<T> = Vector<T, 2>;

/// A 3-dimensional vector.
pub type Vector3<T> = Vector<T, 3>;

/// A 4-dimensional vector.
pub type Vector4<T> = Vector<T, 4>;

impl<T: Scalar, const L: usize> Vector<T, L> {
    /// Creates a vector with the given components.
    #[inline]
    pub const fn from_array(data: [T; L]) -> Self {
        Self { data }
    }

    /// Creates a vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a vector with all ones.
    #[inline]
    pub const fn ones() -> Self {
        Self::same(T::ONE)
    }

    /// Creates a vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self { data: [value; L] }
    }

    /// Creates a vector whose `i`th component is `f(i)`.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: std::array::from_fn(f),
        }
    }

    /// Creates a vector from a vector of any length and component type by
    /// [`assign`](Self::assign)ing it to a zero vector at the given offset.
    #[inline]
    pub fn from_partial<T2, const L2: usize>(other: &Vector<T2, L2>, offset: isize) -> Self
    where
        T2: Scalar + AsPrimitive<T>,
    {
        let mut vector = Self::zeros();
        vector.assign(other, offset);
        vector
    }

    /// Converts the components to type `U` with the semantics of `as`.
    #[inline]
    pub fn cast<U>(&self) -> Vector<U, L>
    where
        T: AsPrimitive<U>,
        U: Scalar,
    {
        self.mapped(AsPrimitive::<U>::as_)
    }

    /// Samples each component uniformly between the corresponding components
    /// of `min` and `max`. The upper bound is inclusive for integers and
    /// exclusive for floating point types.
    pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: &Self, max: &Self) -> Self {
        Self::from_fn(|i| T::sample_uniform(rng, min.data[i], max.data[i]))
    }

    /// Samples each component uniformly between `min` and `max`.
    pub fn random_in<R: Rng + ?Sized>(rng: &mut R, min: T, max: T) -> Self {
        Self::from_fn(|_| T::sample_uniform(rng, min, max))
    }

    /// Copies components from `other` into this vector, starting at `offset`.
    ///
    /// With a non-negative offset, `other[i]` is written to
    /// `self[i + offset]`. With a negative offset, `other[i - offset]` is
    /// written to `self[i]`. Components of `self` not covered keep their
    /// value, and an offset that places `other` entirely out of range copies
    /// nothing. The returned writer is positioned right after the last
    /// assigned component.
    pub fn assign<T2, const L2: usize>(
        &mut self,
        other: &Vector<T2, L2>,
        offset: isize,
    ) -> ComponentWriter<'_, T, L>
    where
        T2: Scalar + AsPrimitive<T>,
    {
        let shift = offset.unsigned_abs();
        let end = if offset >= 0 {
            let size = L2.min(L - L.min(shift));
            for i in 0..size {
                self.data[i + shift] = AsPrimitive::<T>::as_(other.data[i]);
            }
            shift + size
        } else {
            let size = L.min(L2 - L2.min(shift));
            for i in 0..size {
                self.data[i] = AsPrimitive::<T>::as_(other.data[i + shift]);
            }
            size
        };
        ComponentWriter::new(self, end)
    }

    /// Returns a writer that fills the components in order, starting from
    /// the first one.
    #[inline]
    pub fn writer(&mut self) -> ComponentWriter<'_, T, L> {
        ComponentWriter::new(self, 0)
    }

    /// Returns a reader that yields the components in order.
    #[inline]
    pub fn reader(&self) -> ComponentReader<'_, T, L> {
        ComponentReader::new(self)
    }

    /// The number of components.
    #[inline]
    pub const fn len(&self) -> usize {
        L
    }

    /// Whether the vector has no components.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        L == 0
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; L] {
        &self.data
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if `index >= L`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        self.data
            .get(index)
            .ok_or(MathError::IndexOutOfRange { index, len: L })
    }

    /// Returns a mutable reference to the component at `index`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if `index >= L`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.data
            .get_mut(index)
            .ok_or(MathError::IndexOutOfRange { index, len: L })
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.data
            .iter()
            .zip(&other.data)
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Computes the square of the norm of the vector.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn distance_squared(&self, other: &Self) -> T {
        (other - self).norm_squared()
    }

    /// Applies `f` to each component in place.
    #[inline]
    pub fn transform(&mut self, mut f: impl FnMut(T) -> T) -> &mut Self {
        for value in &mut self.data {
            *value = f(*value);
        }
        self
    }

    /// Replaces each component `a` by `f(a, b)`, with `b` the corresponding
    /// component of `other`.
    #[inline]
    pub fn transform_with(&mut self, other: &Self, mut f: impl FnMut(T, T) -> T) -> &mut Self {
        for (value, &rhs) in self.data.iter_mut().zip(&other.data) {
            *value = f(*value, rhs);
        }
        self
    }

    /// Creates a new vector by applying `f` to each component.
    #[inline]
    pub fn mapped<U: Scalar>(&self, f: impl FnMut(T) -> U) -> Vector<U, L> {
        Vector {
            data: self.data.map(f),
        }
    }

    /// Clamps each component to the range `[min, max]` in place.
    #[inline]
    pub fn clamp(&mut self, min: T, max: T) {
        self.transform(|x| {
            if x < min {
                min
            } else if x > max {
                max
            } else {
                x
            }
        });
    }

    /// The smallest component, or zero for an empty vector.
    #[inline]
    pub fn min_component(&self) -> T {
        self.data
            .iter()
            .copied()
            .reduce(|a, b| if b < a { b } else { a })
            .unwrap_or(T::ZERO)
    }

    /// The largest component, or zero for an empty vector.
    #[inline]
    pub fn max_component(&self) -> T {
        self.data
            .iter()
            .copied()
            .reduce(|a, b| if b > a { b } else { a })
            .unwrap_or(T::ZERO)
    }

    /// Computes the vector of absolute values of the components.
    #[inline]
    pub fn component_abs(&self) -> Self {
        self.mapped(|x| if x < T::ZERO { T::ZERO - x } else { x })
    }

    /// Copies the vector into a single-row matrix.
    #[inline]
    pub fn to_row_matrix(&self) -> Matrix<T, 1, L> {
        Matrix::from_rows([*self])
    }

    /// Copies the vector into a single-column matrix.
    #[inline]
    pub fn to_column_matrix(&self) -> Matrix<T, L, 1> {
        Matrix::from_fn(|i, _| self.data[i])
    }
}

impl<T: SignedScalar, const L: usize> Vector<T, L> {
    /// Negates each component in place.
    #[inline]
    pub fn negate(&mut self) {
        self.transform(|x| -x);
    }
}

impl<T: Float, const L: usize> Vector<T, L> {
    /// Computes the norm (length) of the vector.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        self.distance_squared(other).sqrt()
    }

    /// Divides the vector by its norm.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] and leaves the vector untouched
    /// if the squared norm does not exceed [`Float::SMALL_NUMBER`].
    pub fn normalize(&mut self) -> Result<()> {
        let norm_squared = self.norm_squared();
        if norm_squared <= T::SMALL_NUMBER {
            return Err(MathError::DivisionByZero);
        }
        *self /= norm_squared.sqrt();
        Ok(())
    }

    /// Like [`normalize`](Self::normalize), but reports failure by returning
    /// `false`.
    #[inline]
    pub fn try_normalize(&mut self) -> bool {
        self.normalize().is_ok()
    }

    /// Computes the normalized version of the vector.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] if the squared norm does not
    /// exceed [`Float::SMALL_NUMBER`].
    #[inline]
    pub fn normalized(&self) -> Result<Self> {
        let mut vector = *self;
        vector.normalize()?;
        Ok(vector)
    }

    /// Computes the normalized version of the vector as a [`UnitVector`], or
    /// returns [`None`] if the squared norm does not exceed
    /// [`Float::SMALL_NUMBER`].
    #[inline]
    pub fn unit(&self) -> Option<UnitVector<T, L>> {
        self.normalized().ok().map(UnitVector::new_unchecked)
    }

    /// Like [`unit`](Self::unit), but reports failure as an error.
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] if the squared norm does not
    /// exceed [`Float::SMALL_NUMBER`].
    #[inline]
    pub fn normalized_to_unit(&self) -> Result<UnitVector<T, L>> {
        self.normalized().map(UnitVector::new_unchecked)
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }

    #[inline]
    pub const fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.data[1]
    }

    /// Converts the vector to 3D by appending the given z-component.
    #[inline]
    pub const fn extended(&self, z: T) -> Vector3<T> {
        Vector3::new(self.data[0], self.data[1], z)
    }
}

impl<T: Float> Vector<T, 2> {
    /// The angle of the vector measured counterclockwise from the x-axis.
    #[inline]
    pub fn to_angle(&self) -> Radians<T> {
        angle::atan2(self.y(), self.x())
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    #[inline]
    pub const fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.data[1]
    }

    #[inline]
    pub const fn z(&self) -> T {
        self.data[2]
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: T) -> Vector4<T> {
        Vector4::new(self.data[0], self.data[1], self.data[2], w)
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T: SignedScalar> Vector<T, 3> {
    /// `(1, 0, 0)`.
    #[inline]
    pub const fn forward() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// `(-1, 0, 0)`.
    #[inline]
    pub const fn backward() -> Self {
        Self::new(T::NEG_ONE, T::ZERO, T::ZERO)
    }

    /// `(0, 1, 0)`.
    #[inline]
    pub const fn right() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// `(0, -1, 0)`.
    #[inline]
    pub const fn left() -> Self {
        Self::new(T::ZERO, T::NEG_ONE, T::ZERO)
    }

    /// `(0, 0, 1)`.
    #[inline]
    pub const fn up() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// `(0, 0, -1)`.
    #[inline]
    pub const fn down() -> Self {
        Self::new(T::ZERO, T::ZERO, T::NEG_ONE)
    }
}

impl<T: Float> Vector<T, 3> {
    /// Computes this vector rotated by the given unit quaternion.
    #[inline]
    pub fn rotated_by(&self, rotation: &Quaternion<T>) -> Self {
        rotation.rotate_vector(self)
    }

    /// Rotates this vector in place by the given unit quaternion.
    #[inline]
    pub fn rotate_by(&mut self, rotation: &Quaternion<T>) {
        *self = self.rotated_by(rotation);
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            data: [x, y, z, w],
        }
    }

    #[inline]
    pub const fn x(&self) -> T {
        self.data[0]
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.data[1]
    }

    #[inline]
    pub const fn z(&self) -> T {
        self.data[2]
    }

    #[inline]
    pub const fn w(&self) -> T {
        self.data[3]
    }

    /// The first three components.
    #[inline]
    pub const fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.data[0], self.data[1], self.data[2])
    }
}

impl<T: Scalar, const L: usize> Default for Vector<T, L> {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const L: usize> From<[T; L]> for Vector<T, L> {
    #[inline]
    fn from(data: [T; L]) -> Self {
        Self { data }
    }
}

impl<T: Scalar, const L: usize> From<Vector<T, L>> for [T; L] {
    #[inline]
    fn from(vector: Vector<T, L>) -> Self {
        vector.data
    }
}

impl<T: Scalar, const L: usize> IntoIterator for Vector<T, L> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, L>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: Scalar, const L: usize> IntoIterator for &'a Vector<T, L> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T: Scalar, const L: usize> IntoIterator for &'a mut Vector<T, L> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl_binop!(Add, add, [T: Scalar, const L: usize], Vector<T, L>, Vector<T, L>, Vector<T, L>, |a, b| {
    Vector::from_fn(|i| a.data[i] + b.data[i])
});

impl_binop!(Sub, sub, [T: Scalar, const L: usize], Vector<T, L>, Vector<T, L>, Vector<T, L>, |a, b| {
    Vector::from_fn(|i| a.data[i] - b.data[i])
});

impl_binop!(Mul, mul, [T: Scalar, const L: usize], Vector<T, L>, Vector<T, L>, Vector<T, L>, |a, b| {
    Vector::from_fn(|i| a.data[i] * b.data[i])
});

impl_binop!(Div, div, [T: Scalar, const L: usize], Vector<T, L>, Vector<T, L>, Vector<T, L>, |a, b| {
    Vector::from_fn(|i| a.data[i] / b.data[i])
});

impl_binop!(Mul, mul, [T: Scalar, const L: usize], Vector<T, L>, T, Vector<T, L>, |a, b| {
    a.mapped(|x| x * *b)
});

impl_binop!(Div, div, [T: Scalar, const L: usize], Vector<T, L>, T, Vector<T, L>, |a, b| {
    a.mapped(|x| x / *b)
});

impl_left_scalar_mul!(
    [const L: usize],
    Vector<_, L>,
    [i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64]
);

impl_binop!(BitOr, bitor, [T: Scalar, const L: usize], Vector<T, L>, Vector<T, L>, T, |a, b| {
    a.dot(b)
});

impl_binop!(BitXor, bitxor, [T: Scalar], Vector<T, 3>, Vector<T, 3>, Vector<T, 3>, |a, b| {
    a.cross(b)
});

impl_binop_assign!(AddAssign, add_assign, [T: Scalar, const L: usize], Vector<T, L>, Vector<T, L>, |a, b| {
    a.transform_with(b, |x, y| x + y);
});

impl_binop_assign!(SubAssign, sub_assign, [T: Scalar, const L: usize], Vector<T, L>, Vector<T, L>, |a, b| {
    a.transform_with(b, |x, y| x - y);
});

impl_binop_assign!(MulAssign, mul_assign, [T: Scalar, const L: usize], Vector<T, L>, Vector<T, L>, |a, b| {
    a.transform_with(b, |x, y| x * y);
});

impl_binop_assign!(DivAssign, div_assign, [T: Scalar, const L: usize], Vector<T, L>, Vector<T, L>, |a, b| {
    a.transform_with(b, |x, y| x / y);
});

impl_binop_assign!(MulAssign, mul_assign, [T: Scalar, const L: usize], Vector<T, L>, T, |a, b| {
    a.transform(|x| x * *b);
});

impl_binop_assign!(DivAssign, div_assign, [T: Scalar, const L: usize], Vector<T, L>, T, |a, b| {
    a.transform(|x| x / *b);
});

impl_binop_assign!(BitXorAssign, bitxor_assign, [T: Scalar], Vector<T, 3>, Vector<T, 3>, |a, b| {
    *a = a.cross(b);
});

impl_unary_op!(Neg, neg, [T: SignedScalar, const L: usize], Vector<T, L>, Vector<T, L>, |val| {
    val.mapped(|x| -x)
});

impl<T: Scalar, const L: usize> Index<usize> for Vector<T, L> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: Scalar, const L: usize> IndexMut<usize> for Vector<T, L> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: IntegerScalar, const L: usize> PartialEq for Vector<T, L> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: IntegerScalar, const L: usize> Eq for Vector<T, L> {}

impl<T: IntegerScalar, const L: usize> Hash for Vector<T, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl_nearly_equal!([T: Float, const L: usize], Vector<T, L>, T, |a, b, tolerance| {
    a.data
        .iter()
        .zip(&b.data)
        .all(|(x, y)| tolerance::is_nearly_equal_within(x, y, tolerance))
});

impl<T: Float, const L: usize> NearlyZero for Vector<T, L> {
    type Tolerance = T;

    #[inline]
    fn is_nearly_zero_within(&self, tolerance: T) -> bool {
        self.data.iter().all(|x| x.abs() < tolerance)
    }

    #[inline]
    fn is_nearly_zero(&self) -> bool {
        self.is_nearly_zero_within(T::SMALL_NUMBER)
    }
}

impl<T: Scalar, const L: usize> fmt::Debug for Vector<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Vector");
        for component in &self.data {
            tuple.field(component);
        }
        tuple.finish()
    }
}

impl<T: Scalar, const L: usize> fmt::Display for Vector<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(component, f)?;
        }
        Ok(())
    }
}

impl<T: Scalar, const L: usize> FromStr for Vector<T, L>
where
    <T as FromStr>::Err: fmt::Display,
{
    type Err = MathError;

    /// Parses `L` whitespace-separated components.
    fn from_str(s: &str) -> Result<Self> {
        let mut vector = Self::zeros();
        let mut count = 0;
        for token in s.split_whitespace() {
            if count == L {
                return Err(MathError::parse(
                    "vector",
                    format!("expected {L} components, got more"),
                ));
            }
            vector.data[count] = token.parse().map_err(|err| {
                MathError::parse("vector", format!("invalid component `{token}`: {err}"))
            })?;
            count += 1;
        }
        if count < L {
            return Err(MathError::parse(
                "vector",
                format!("expected {L} components, got {count}"),
            ));
        }
        Ok(vector)
    }
}

// SAFETY: `Vector` is a transparent wrapper around `[T; L]`, which is `Pod`
// whenever `T` is.
unsafe impl<T: Scalar + Zeroable, const L: usize> Zeroable for Vector<T, L> {}
unsafe impl<T: Scalar + Pod, const L: usize> Pod for Vector<T, L> {}

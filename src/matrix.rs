//! Matrices.

mod geometry;
mod inversion;

use crate::{
    error::{MathError, Result},
    num::{Float, IntegerScalar, Scalar, SignedScalar},
    vector::Vector,
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

/// A matrix with `R` rows and `C` columns, stored as `R` row [`Vector`]s.
///
/// Since vectors are row vectors, a vector is transformed by a matrix as
/// `vector * matrix`. Exact equality is only implemented for integer
/// elements.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Matrix<T, const R: usize, const C: usize> {
    rows: [Vector<T, C>; R],
}

/// A 2x2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;

/// A 3x3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;

/// A 4x4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix with the given rows.
    #[inline]
    pub const fn from_rows(rows: [Vector<T, C>; R]) -> Self {
        Self { rows }
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a matrix with the same value for all elements.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self {
            rows: [Vector::same(value); R],
        }
    }

    /// Creates a matrix with ones on the leading diagonal and zeros
    /// elsewhere. For non-square shapes, the diagonal has `min(R, C)`
    /// elements.
    #[inline]
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::ONE } else { T::ZERO })
    }

    /// Creates the identity matrix and [`assign`](Self::assign)s `other`
    /// to it at the given offsets.
    #[inline]
    pub fn identity_with<T2, const R2: usize, const C2: usize>(
        other: &Matrix<T2, R2, C2>,
        row_offset: isize,
        column_offset: isize,
    ) -> Self
    where
        T2: Scalar + AsPrimitive<T>,
    {
        let mut matrix = Self::identity();
        matrix.assign(other, row_offset, column_offset);
        matrix
    }

    /// Creates a matrix whose element in row `i` and column `j` is
    /// `f(i, j)`.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            rows: std::array::from_fn(|i| Vector::from_fn(|j| f(i, j))),
        }
    }

    /// Creates a matrix by filling in the given elements in row-major order.
    /// Elements not covered are zero.
    ///
    /// # Panics
    /// If more than `R * C` elements are given.
    pub fn from_elements(elements: impl IntoIterator<Item = T>) -> Self {
        let mut matrix = Self::zeros();
        for (idx, element) in elements.into_iter().enumerate() {
            assert!(
                idx < R * C,
                "got more than {} elements for a {R}x{C} matrix",
                R * C
            );
            matrix.rows[idx / C][idx % C] = element;
        }
        matrix
    }

    /// Samples each element uniformly between `min` and `max`.
    pub fn random_in<G: Rng + ?Sized>(rng: &mut G, min: T, max: T) -> Self {
        Self::from_fn(|_, _| T::sample_uniform(rng, min, max))
    }

    /// Copies the elements of `other` into this matrix, shifted down by
    /// `row_offset` and right by `column_offset`.
    ///
    /// Each offset is applied like the offset of [`Vector::assign`]: a
    /// negative offset skips the leading rows or columns of `other`.
    /// Elements not covered keep their value.
    pub fn assign<T2, const R2: usize, const C2: usize>(
        &mut self,
        other: &Matrix<T2, R2, C2>,
        row_offset: isize,
        column_offset: isize,
    ) -> &mut Self
    where
        T2: Scalar + AsPrimitive<T>,
    {
        let shift = row_offset.unsigned_abs();
        if row_offset >= 0 {
            let size = R2.min(R - R.min(shift));
            for i in 0..size {
                self.rows[i + shift].assign(&other.rows[i], column_offset);
            }
        } else {
            let size = R.min(R2 - R2.min(shift));
            for i in 0..size {
                self.rows[i].assign(&other.rows[i + shift], column_offset);
            }
        }
        self
    }

    /// Converts the elements to type `U` with the semantics of `as`.
    #[inline]
    pub fn cast<U>(&self) -> Matrix<U, R, C>
    where
        T: AsPrimitive<U>,
        U: Scalar,
    {
        Matrix {
            rows: self.rows.map(|row| row.cast::<U>()),
        }
    }

    /// Creates a new matrix by applying `f` to each element.
    #[inline]
    pub fn mapped<U: Scalar>(&self, mut f: impl FnMut(T) -> U) -> Matrix<U, R, C> {
        Matrix {
            rows: self.rows.map(|row| row.mapped(&mut f)),
        }
    }

    #[inline]
    pub const fn rows(&self) -> &[Vector<T, C>; R] {
        &self.rows
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vector<T, C>> {
        self.rows.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Vector<T, C>> {
        self.rows.iter_mut()
    }

    #[inline]
    pub const fn row(&self, i: usize) -> &Vector<T, C> {
        &self.rows[i]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut Vector<T, C> {
        &mut self.rows[i]
    }

    #[inline]
    pub fn set_row(&mut self, i: usize, row: Vector<T, C>) {
        self.rows[i] = row;
    }

    /// Copies the `j`th column into a vector.
    #[inline]
    pub fn column(&self, j: usize) -> Vector<T, R> {
        Vector::from_fn(|i| self.rows[i][j])
    }

    #[inline]
    pub fn set_column(&mut self, j: usize, column: &Vector<T, R>) {
        for (row, &value) in self.rows.iter_mut().zip(column) {
            row[j] = value;
        }
    }

    /// The element in row `i` and column `j`.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> T {
        self.rows[i][j]
    }

    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.rows[i][j]
    }

    /// Returns the row at index `i`.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if `i >= R`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&Vector<T, C>> {
        self.rows
            .get(i)
            .ok_or(MathError::IndexOutOfRange { index: i, len: R })
    }

    /// Returns the row at index `i` mutably.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfRange`] if `i >= R`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut Vector<T, C>> {
        self.rows
            .get_mut(i)
            .ok_or(MathError::IndexOutOfRange { index: i, len: R })
    }

    /// Computes the transpose of the matrix.
    #[inline]
    pub fn transposed(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|i, j| self.rows[j][i])
    }

    /// The smallest element, or zero for an empty matrix.
    #[inline]
    pub fn min_element(&self) -> T {
        self.rows
            .iter()
            .filter(|row| !row.is_empty())
            .map(Vector::min_component)
            .reduce(|a, b| if b < a { b } else { a })
            .unwrap_or(T::ZERO)
    }

    /// The largest element, or zero for an empty matrix.
    #[inline]
    pub fn max_element(&self) -> T {
        self.rows
            .iter()
            .filter(|row| !row.is_empty())
            .map(Vector::max_component)
            .reduce(|a, b| if b > a { b } else { a })
            .unwrap_or(T::ZERO)
    }
}

impl<T: Scalar + Pod, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The elements in row-major order.
    #[inline]
    pub fn as_elements(&self) -> &[T] {
        bytemuck::cast_slice(&self.rows)
    }

    /// The elements in row-major order, mutably.
    #[inline]
    pub fn as_elements_mut(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(&mut self.rows)
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Creates a square matrix with the given diagonal and zeros elsewhere.
    #[inline]
    pub fn from_diagonal(diagonal: &Vector<T, N>) -> Self {
        Self::from_fn(|i, j| if i == j { diagonal[i] } else { T::ZERO })
    }

    /// The diagonal of the matrix.
    #[inline]
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.rows[i][i])
    }

    /// The sum of the diagonal elements.
    #[inline]
    pub fn trace(&self) -> T {
        (0..N).fold(T::ZERO, |acc, i| acc + self.rows[i][i])
    }

    /// Transposes the matrix in place.
    pub fn transpose(&mut self) {
        for i in 0..N {
            for j in (i + 1)..N {
                let upper = self.rows[i][j];
                self.rows[i][j] = self.rows[j][i];
                self.rows[j][i] = upper;
            }
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self {
            rows: rows.map(Vector::from_array),
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    #[inline]
    fn from(matrix: Matrix<T, R, C>) -> Self {
        matrix.rows.map(Into::into)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, C>;

    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}

impl<T: Scalar, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.rows[i]
    }
}

impl<'a, T: Scalar, const R: usize, const C: usize> IntoIterator for &'a Matrix<T, R, C> {
    type Item = &'a Vector<T, C>;
    type IntoIter = std::slice::Iter<'a, Vector<T, C>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl_binop!(Add, add, [T: Scalar, const R: usize, const C: usize], Matrix<T, R, C>, Matrix<T, R, C>, Matrix<T, R, C>, |a, b| {
    Matrix::from_rows(std::array::from_fn(|i| a.rows[i] + b.rows[i]))
});

impl_binop!(Sub, sub, [T: Scalar, const R: usize, const C: usize], Matrix<T, R, C>, Matrix<T, R, C>, Matrix<T, R, C>, |a, b| {
    Matrix::from_rows(std::array::from_fn(|i| a.rows[i] - b.rows[i]))
});

impl_binop!(Mul, mul, [T: Scalar, const R: usize, const C: usize, const C2: usize], Matrix<T, R, C>, Matrix<T, C, C2>, Matrix<T, R, C2>, |a, b| {
    Matrix::from_rows(std::array::from_fn(|i| &a.rows[i] * b))
});

impl_binop!(Mul, mul, [T: Scalar, const R: usize, const C: usize], Vector<T, R>, Matrix<T, R, C>, Vector<T, C>, |a, b| {
    b.rows
        .iter()
        .zip(a)
        .fold(Vector::zeros(), |acc, (row, &factor)| acc + row * factor)
});

impl_binop!(Mul, mul, [T: Scalar, const R: usize, const C: usize], Matrix<T, R, C>, Vector<T, C>, Vector<T, R>, |a, b| {
    Vector::from_fn(|i| a.rows[i].dot(b))
});

impl_binop!(Mul, mul, [T: Scalar, const R: usize, const C: usize], Matrix<T, R, C>, T, Matrix<T, R, C>, |a, b| {
    a.mapped(|x| x * *b)
});

impl_binop!(Div, div, [T: Scalar, const R: usize, const C: usize], Matrix<T, R, C>, T, Matrix<T, R, C>, |a, b| {
    a.mapped(|x| x / *b)
});

impl_left_scalar_mul!(
    [const R: usize, const C: usize],
    Matrix<_, R, C>,
    [i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64]
);

impl_binop_assign!(AddAssign, add_assign, [T: Scalar, const R: usize, const C: usize], Matrix<T, R, C>, Matrix<T, R, C>, |a, b| {
    for (row, rhs) in a.rows.iter_mut().zip(&b.rows) {
        *row += rhs;
    }
});

impl_binop_assign!(SubAssign, sub_assign, [T: Scalar, const R: usize, const C: usize], Matrix<T, R, C>, Matrix<T, R, C>, |a, b| {
    for (row, rhs) in a.rows.iter_mut().zip(&b.rows) {
        *row -= rhs;
    }
});

impl_binop_assign!(MulAssign, mul_assign, [T: Scalar, const R: usize, const C: usize], Matrix<T, R, C>, Matrix<T, C, C>, |a, b| {
    *a = &*a * b;
});

impl_binop_assign!(MulAssign, mul_assign, [T: Scalar, const R: usize, const C: usize], Matrix<T, R, C>, T, |a, b| {
    for row in &mut a.rows {
        *row *= *b;
    }
});

impl_binop_assign!(DivAssign, div_assign, [T: Scalar, const R: usize, const C: usize], Matrix<T, R, C>, T, |a, b| {
    for row in &mut a.rows {
        *row /= *b;
    }
});

impl_binop_assign!(MulAssign, mul_assign, [T: Scalar, const N: usize], Vector<T, N>, Matrix<T, N, N>, |a, b| {
    *a = &*a * b;
});

impl_unary_op!(Neg, neg, [T: SignedScalar, const R: usize, const C: usize], Matrix<T, R, C>, Matrix<T, R, C>, |val| {
    val.mapped(|x| -x)
});

impl<T: IntegerScalar, const R: usize, const C: usize> PartialEq for Matrix<T, R, C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<T: IntegerScalar, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T: IntegerScalar, const R: usize, const C: usize> Hash for Matrix<T, R, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
    }
}

impl_nearly_equal!([T: Float, const R: usize, const C: usize], Matrix<T, R, C>, T, |a, b, tolerance| {
    a.rows
        .iter()
        .zip(&b.rows)
        .all(|(x, y)| x.is_nearly_equal_within(y, tolerance))
});

impl<T: Scalar, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matrix")?;
        f.debug_list()
            .entries(self.rows.iter().map(Vector::as_slice))
            .finish()
    }
}

impl<T: Scalar, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            fmt::Display::fmt(row, f)?;
        }
        Ok(())
    }
}

impl<T: Scalar, const R: usize, const C: usize> FromStr for Matrix<T, R, C>
where
    <T as FromStr>::Err: fmt::Display,
{
    type Err = MathError;

    /// Parses `R * C` whitespace-separated elements in row-major order.
    fn from_str(s: &str) -> Result<Self> {
        let mut matrix = Self::zeros();
        let mut count = 0;
        for token in s.split_whitespace() {
            if count == R * C {
                return Err(MathError::parse(
                    "matrix",
                    format!("expected {} elements, got more", R * C),
                ));
            }
            matrix.rows[count / C][count % C] = token.parse().map_err(|err| {
                MathError::parse("matrix", format!("invalid element `{token}`: {err}"))
            })?;
            count += 1;
        }
        if count < R * C {
            return Err(MathError::parse(
                "matrix",
                format!("expected {} elements, got {count}", R * C),
            ));
        }
        Ok(matrix)
    }
}

// SAFETY: `Matrix` is a transparent wrapper around an array of `Pod` vectors.
unsafe impl<T: Scalar + Zeroable, const R: usize, const C: usize> Zeroable for Matrix<T, R, C> {}
unsafe impl<T: Scalar + Pod, const R: usize, const C: usize> Pod for Matrix<T, R, C> {}

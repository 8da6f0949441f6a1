//! Determinants and inverses of square matrices.

use super::Matrix;
use crate::{num::Float, vector::Vector};

impl<T: Float, const N: usize> Matrix<T, N, N> {
    /// Computes the determinant using Gaussian elimination with partial
    /// pivoting.
    pub fn determinant(&self) -> T {
        let mut rows = self.rows;
        let mut determinant = T::ONE;

        for k in 0..N {
            let pivot = pivot_row(&rows, k);
            if rows[pivot][k] == T::ZERO {
                return T::ZERO;
            }
            if pivot != k {
                rows.swap(pivot, k);
                determinant = -determinant;
            }

            let pivot_value = rows[k][k];
            determinant *= pivot_value;

            for i in (k + 1)..N {
                let factor = rows[i][k] / pivot_value;
                if factor != T::ZERO {
                    let eliminated = rows[k] * factor;
                    rows[i] -= eliminated;
                }
            }
        }
        determinant
    }

    /// Computes the inverse of the matrix, or returns [`None`] if the
    /// magnitude of the determinant does not exceed
    /// [`Float::SMALL_NUMBER`].
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.inverse_within(T::SMALL_NUMBER)
    }

    /// Computes the inverse of the matrix using Gauss-Jordan elimination, or
    /// returns [`None`] if the magnitude of the determinant does not exceed
    /// `tolerance` or the result would not be finite.
    pub fn inverse_within(&self, tolerance: T) -> Option<Self> {
        let mut rows = self.rows;
        let mut inverse = Self::identity();
        let mut determinant = T::ONE;

        for k in 0..N {
            let pivot = pivot_row(&rows, k);
            if pivot != k {
                rows.swap(pivot, k);
                inverse.rows.swap(pivot, k);
                determinant = -determinant;
            }

            let pivot_value = rows[k][k];
            determinant *= pivot_value;
            if pivot_value == T::ZERO {
                break;
            }

            rows[k] /= pivot_value;
            inverse.rows[k] /= pivot_value;

            for i in 0..N {
                if i == k {
                    continue;
                }
                let factor = rows[i][k];
                if factor != T::ZERO {
                    let eliminated = rows[k] * factor;
                    rows[i] -= eliminated;
                    let eliminated = inverse.rows[k] * factor;
                    inverse.rows[i] -= eliminated;
                }
            }
        }

        if determinant.abs() <= tolerance {
            log::trace!("Matrix with determinant {determinant} treated as singular");
            return None;
        }
        if !inverse.rows.iter().flatten().all(|x| x.is_finite()) {
            log::trace!("Inverse of matrix has non-finite elements");
            return None;
        }
        Some(inverse)
    }
}

/// Finds the row at or below `k` with the largest magnitude in column `k`.
fn pivot_row<T: Float, const N: usize>(rows: &[Vector<T, N>; N], k: usize) -> usize {
    let mut best = k;
    for i in (k + 1)..N {
        if rows[i][k].abs() > rows[best][k].abs() {
            best = i;
        }
    }
    best
}

//! Symmetric covariance matrices with packed lower-triangle storage.

use se23_core::layout::{packed_len, packed_lower_index};
use se23_core::{Matrix, Scalar};

/// A symmetric `N x N` covariance.
///
/// Only the lower triangle is authoritative: constructing from a full
/// matrix copies it over the upper triangle. Storage walks the lower
/// triangle row by row, `N (N + 1) / 2` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cov<T, const N: usize> {
    mat: Matrix<T, N, N>,
}

pub type Cov33<T> = Cov<T, 3>;
pub type Cov66<T> = Cov<T, 6>;
pub type Cov99<T> = Cov<T, 9>;

impl<T: Scalar, const N: usize> Cov<T, N> {
    /// Number of packed storage elements.
    pub const STORAGE_DIM: usize = packed_len(N);

    pub fn zeros() -> Self {
        Self {
            mat: Matrix::zeros(),
        }
    }

    /// Symmetrize `mat` from its lower triangle.
    pub fn from_matrix(mut mat: Matrix<T, N, N>) -> Self {
        for i in 0..N {
            for j in (i + 1)..N {
                mat[(i, j)] = mat[(j, i)];
            }
        }
        Self { mat }
    }

    pub fn diag(values: &[T; N]) -> Self {
        Self {
            mat: Matrix::from_diagonal(values),
        }
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix<T, N, N> {
        &self.mat
    }

    /// Read the packed lower triangle. `L` must equal `STORAGE_DIM`.
    pub fn from_storage<const L: usize>(s: &[T; L]) -> Self {
        assert_eq!(L, Self::STORAGE_DIM, "{}x{} covariance storage", N, N);
        let mut mat = Matrix::zeros();
        for i in 0..N {
            for j in 0..=i {
                let e = s[packed_lower_index(i, j)];
                mat[(i, j)] = e;
                mat[(j, i)] = e;
            }
        }
        Self { mat }
    }

    /// Packed lower triangle. `L` must equal `STORAGE_DIM`.
    pub fn to_storage<const L: usize>(&self) -> [T; L] {
        assert_eq!(L, Self::STORAGE_DIM, "{}x{} covariance storage", N, N);
        let mut out = [T::zero(); L];
        for i in 0..N {
            for j in 0..=i {
                out[packed_lower_index(i, j)] = self.mat[(i, j)];
            }
        }
        out
    }

    /// Information matrix, or `None` if the covariance is singular.
    pub fn inv(&self) -> Option<Self> {
        self.mat.try_inverse().map(Self::from_matrix)
    }
}

impl<T: Scalar, const N: usize> Default for Cov<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

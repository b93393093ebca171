//! Stack-allocated, const-generic matrices.
//!
//! Preintegration only ever touches a handful of small fixed shapes, so the
//! shape lives in the type and every product is checked at compile time.
//! Storage is row-major `[[T; C]; R]`; conversion to and from flat buffers
//! goes through [`Layout`].

use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::{Layout, Scalar};

/// An `R x C` matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

pub type Matrix33<T> = Matrix<T, 3, 3>;
pub type Matrix55<T> = Matrix<T, 5, 5>;
pub type Matrix66<T> = Matrix<T, 6, 6>;
pub type Matrix96<T> = Matrix<T, 9, 6>;
pub type Matrix99<T> = Matrix<T, 9, 9>;
pub type Vector3<T> = Matrix<T, 3, 1>;

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub fn from_rows(data: [[T; C]; R]) -> Self {
        Self { data }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); C]; R],
        }
    }

    /// Build from a closure over `(row, col)`.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut m = Self::zeros();
        for i in 0..R {
            for j in 0..C {
                m.data[i][j] = f(i, j);
            }
        }
        m
    }

    #[inline]
    pub fn rows(&self) -> &[[T; C]; R] {
        &self.data
    }

    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|i, j| self.data[j][i])
    }

    pub fn scale(&self, s: T) -> Self {
        self.map(|x| x * s)
    }

    pub fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self::from_fn(|i, j| f(self.data[i][j]))
    }

    /// Copy the `BR x BC` block whose top-left corner is `(row, col)`.
    pub fn block<const BR: usize, const BC: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Matrix<T, BR, BC> {
        debug_assert!(row + BR <= R && col + BC <= C);
        Matrix::from_fn(|i, j| self.data[row + i][col + j])
    }

    /// Overwrite the block whose top-left corner is `(row, col)`.
    pub fn set_block<const BR: usize, const BC: usize>(
        &mut self,
        row: usize,
        col: usize,
        block: &Matrix<T, BR, BC>,
    ) {
        debug_assert!(row + BR <= R && col + BC <= C);
        for i in 0..BR {
            for j in 0..BC {
                self.data[row + i][col + j] = block.data[i][j];
            }
        }
    }

    /// Flatten into `out` using `layout`. `L` must equal `R * C`.
    pub fn write_flat<const L: usize>(&self, layout: Layout, out: &mut [T; L]) {
        assert_eq!(L, R * C, "flat buffer must hold {}x{} elements", R, C);
        let ld = layout.leading_dim(R, C);
        for i in 0..R {
            for j in 0..C {
                out[layout.index(i, j, ld)] = self.data[i][j];
            }
        }
    }

    /// Read from a flat buffer stored with `layout`. `L` must equal `R * C`.
    pub fn from_flat<const L: usize>(layout: Layout, flat: &[T; L]) -> Self {
        assert_eq!(L, R * C, "flat buffer must hold {}x{} elements", R, C);
        let ld = layout.leading_dim(R, C);
        Self::from_fn(|i, j| flat[layout.index(i, j, ld)])
    }

    /// Largest absolute element-wise difference.
    pub fn max_abs_diff(&self, other: &Self) -> T {
        let mut worst = T::zero();
        for i in 0..R {
            for j in 0..C {
                worst = worst.max((self.data[i][j] - other.data[i][j]).abs());
            }
        }
        worst
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn from_diagonal(diag: &[T; N]) -> Self {
        Self::from_fn(|i, j| if i == j { diag[i] } else { T::zero() })
    }

    /// Inverse by Gauss-Jordan elimination with partial pivoting. Returns
    /// `None` when a pivot is exactly zero or not finite.
    pub fn try_inverse(&self) -> Option<Self> {
        let mut a = self.data;
        let mut inv = Self::identity().data;
        for col in 0..N {
            let mut max_row = col;
            let mut max_val = a[col][col].abs();
            for row in (col + 1)..N {
                let val = a[row][col].abs();
                if val > max_val {
                    max_val = val;
                    max_row = row;
                }
            }
            if max_val == T::zero() || !max_val.is_finite() {
                return None;
            }
            a.swap(col, max_row);
            inv.swap(col, max_row);

            let pivot = a[col][col];
            for j in 0..N {
                a[col][j] = a[col][j] / pivot;
                inv[col][j] = inv[col][j] / pivot;
            }
            for row in 0..N {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                for j in 0..N {
                    a[row][j] = a[row][j] - factor * a[col][j];
                    inv[row][j] = inv[row][j] - factor * inv[col][j];
                }
            }
        }
        Some(Self { data: inv })
    }

    pub fn is_symmetric(&self, tol: T) -> bool {
        for i in 0..N {
            for j in 0..i {
                if (self.data[i][j] - self.data[j][i]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

// Column vectors
impl<T: Scalar, const N: usize> Matrix<T, N, 1> {
    pub fn from_array(v: [T; N]) -> Self {
        Self::from_fn(|i, _| v[i])
    }

    pub fn to_array(&self) -> [T; N] {
        let mut out = [T::zero(); N];
        for i in 0..N {
            out[i] = self.data[i][0];
        }
        out
    }

    pub fn dot(&self, other: &Self) -> T {
        let mut acc = T::zero();
        for i in 0..N {
            acc = acc + self.data[i][0] * other.data[i][0];
        }
        acc
    }

    pub fn squared_norm(&self) -> T {
        self.dot(self)
    }

    pub fn norm(&self) -> T {
        self.squared_norm().sqrt()
    }
}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_rows([[x], [y], [z]])
    }

    #[inline]
    pub fn x(&self) -> T {
        self.data[0][0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.data[1][0]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.data[2][0]
    }

    /// Read three consecutive elements starting at `offset`.
    pub fn from_slice(s: &[T], offset: usize) -> Self {
        Self::new(s[offset], s[offset + 1], s[offset + 2])
    }

    /// Write three consecutive elements starting at `offset`.
    pub fn write_slice(&self, s: &mut [T], offset: usize) {
        s[offset] = self.x();
        s[offset + 1] = self.y();
        s[offset + 2] = self.z();
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i][j]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline(always)]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i][j]
    }
}

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|i, j| self.data[i][j] + rhs.data[i][j])
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|i, j| self.data[i][j] - rhs.data[i][j])
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<T: Scalar, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, K>;

    /// Naive i-k-j product; no zero skipping so NaN/inf propagate.
    fn mul(self, rhs: Matrix<T, C, K>) -> Matrix<T, R, K> {
        let mut out = Matrix::<T, R, K>::zeros();
        for i in 0..R {
            for k in 0..C {
                let a = self.data[i][k];
                for j in 0..K {
                    out.data[i][j] = out.data[i][j] + a * rhs.data[k][j];
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mul_shapes() {
        let a = Matrix::<f64, 2, 3>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::<f64, 3, 2>::from_rows([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let c = a * b;
        assert_eq!(c.rows(), &[[58.0, 64.0], [139.0, 154.0]]);
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = Matrix::<f64, 3, 3>::from_fn(|i, j| (i * 3 + j) as f64);
        assert_eq!(Matrix33::<f64>::identity() * a, a);
        assert_eq!(a * Matrix33::<f64>::identity(), a);
    }

    #[test]
    fn test_transpose() {
        let a = Matrix::<f64, 2, 3>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t.rows(), &[[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn test_blocks() {
        let mut m = Matrix99::<f64>::zeros();
        m.set_block(6, 3, &Matrix33::<f64>::identity().scale(0.5));
        assert_eq!(m[(6, 3)], 0.5);
        assert_eq!(m[(8, 5)], 0.5);
        assert_eq!(m[(6, 4)], 0.0);
        let b: Matrix33<f64> = m.block(6, 3);
        assert_eq!(b, Matrix33::<f64>::identity().scale(0.5));
    }

    #[test]
    fn test_flat_col_major() {
        let a = Matrix::<f64, 2, 3>::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let mut flat = [0.0; 6];
        a.write_flat(Layout::ColMajor, &mut flat);
        assert_eq!(flat, [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(Matrix::<f64, 2, 3>::from_flat(Layout::ColMajor, &flat), a);

        a.write_flat(Layout::RowMajor, &mut flat);
        assert_eq!(flat, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_vector3_norm() {
        let v = Vector3::new(3.0f64, 4.0, 12.0);
        assert_abs_diff_eq!(v.norm(), 13.0, epsilon = 1e-12);
        assert_eq!(v.to_array(), [3.0, 4.0, 12.0]);
    }

    #[test]
    fn test_nan_propagates_through_product() {
        let mut a = Matrix33::<f64>::zeros();
        a[(0, 0)] = f64::NAN;
        let c = Matrix33::<f64>::identity() * a;
        assert!(c[(0, 0)].is_nan());
    }

    #[test]
    fn test_inverse() {
        let a = Matrix::<f64, 3, 3>::from_rows([[0.0, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 4.0]]);
        let inv = a.try_inverse().unwrap();
        assert!((a * inv).max_abs_diff(&Matrix33::identity()) < 1e-12);
        assert!((inv * a).max_abs_diff(&Matrix33::identity()) < 1e-12);
    }

    #[test]
    fn test_inverse_of_tiny_diagonal() {
        // Covariance-scale entries must not be treated as singular.
        let a = Matrix::<f64, 3, 3>::from_diagonal(&[1e-15, 2e-12, 4e-9]);
        let inv = a.try_inverse().unwrap();
        assert_abs_diff_eq!(inv[(0, 0)] * 1e-15, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(inv[(2, 2)], 2.5e8, epsilon = 1e-3);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let a = Matrix::<f64, 3, 3>::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        assert!(a.try_inverse().is_none());
        assert!(Matrix33::<f64>::zeros().try_inverse().is_none());
    }

    #[test]
    #[should_panic(expected = "flat buffer must hold 2x3 elements")]
    fn test_flat_length_mismatch_panics() {
        let a = Matrix::<f64, 2, 3>::zeros();
        let mut flat = [0.0; 7];
        a.write_flat(Layout::RowMajor, &mut flat);
    }

    #[test]
    fn test_symmetry_check() {
        let mut m = Matrix33::<f64>::identity();
        assert!(m.is_symmetric(0.0));
        m[(2, 0)] = 1.0;
        assert!(!m.is_symmetric(1e-12));
    }
}

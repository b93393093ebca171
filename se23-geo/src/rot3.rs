//! SO(3) rotations stored as unit quaternions.
//!
//! Storage order is `[x, y, z, w]`. Composition is the Hamilton product and
//! the tangent space is the rotation vector (axis times angle).

use std::ops::Mul;

use se23_core::{Matrix33, Scalar, Vector3};

/// A 3D rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rot3<T> {
    q: [T; 4],
}

impl<T: Scalar> Rot3<T> {
    pub const STORAGE_DIM: usize = 4;
    pub const TANGENT_DIM: usize = 3;

    pub fn identity() -> Self {
        Self {
            q: [T::zero(), T::zero(), T::zero(), T::one()],
        }
    }

    /// Wrap a quaternion `[x, y, z, w]`. The caller keeps it normalized.
    #[inline]
    pub fn from_storage(q: &[T; 4]) -> Self {
        Self { q: *q }
    }

    #[inline]
    pub fn to_storage(&self) -> [T; 4] {
        self.q
    }

    /// Hamilton product `self * other`.
    pub fn compose(&self, other: &Self) -> Self {
        let [x1, y1, z1, w1] = self.q;
        let [x2, y2, z2, w2] = other.q;
        Self {
            q: [
                w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
                w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
                w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
                w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
            ],
        }
    }

    /// Conjugate quaternion.
    pub fn inverse(&self) -> Self {
        let [x, y, z, w] = self.q;
        Self { q: [-x, -y, -z, w] }
    }

    pub fn to_rotation_matrix(&self) -> Matrix33<T> {
        let [x, y, z, w] = self.q;
        let one = T::one();
        let two = T::lit(2.0);
        Matrix33::from_rows([
            [
                one - two * (y * y + z * z),
                two * (x * y - z * w),
                two * (x * z + y * w),
            ],
            [
                two * (x * y + z * w),
                one - two * (x * x + z * z),
                two * (y * z - x * w),
            ],
            [
                two * (x * z - y * w),
                two * (y * z + x * w),
                one - two * (x * x + y * y),
            ],
        ])
    }

    /// Quaternion of an orthonormal rotation matrix, branching on the largest
    /// diagonal term. The result is taken in the `w >= 0` hemisphere.
    pub fn from_rotation_matrix(m: &Matrix33<T>) -> Self {
        let one = T::one();
        let two = T::lit(2.0);
        let quarter = T::lit(0.25);
        let (m00, m11, m22) = (m[(0, 0)], m[(1, 1)], m[(2, 2)]);
        let trace = m00 + m11 + m22;
        let q = if trace > T::zero() {
            let s = (trace + one).sqrt() * two;
            [
                (m[(2, 1)] - m[(1, 2)]) / s,
                (m[(0, 2)] - m[(2, 0)]) / s,
                (m[(1, 0)] - m[(0, 1)]) / s,
                quarter * s,
            ]
        } else if m00 > m11 && m00 > m22 {
            let s = (one + m00 - m11 - m22).sqrt() * two;
            [
                quarter * s,
                (m[(0, 1)] + m[(1, 0)]) / s,
                (m[(0, 2)] + m[(2, 0)]) / s,
                (m[(2, 1)] - m[(1, 2)]) / s,
            ]
        } else if m11 > m22 {
            let s = (one + m11 - m00 - m22).sqrt() * two;
            [
                (m[(0, 1)] + m[(1, 0)]) / s,
                quarter * s,
                (m[(1, 2)] + m[(2, 1)]) / s,
                (m[(0, 2)] - m[(2, 0)]) / s,
            ]
        } else {
            let s = (one + m22 - m00 - m11).sqrt() * two;
            [
                (m[(0, 2)] + m[(2, 0)]) / s,
                (m[(1, 2)] + m[(2, 1)]) / s,
                quarter * s,
                (m[(1, 0)] - m[(0, 1)]) / s,
            ]
        };
        if q[3] < T::zero() {
            Self { q: q.map(|e| -e) }
        } else {
            Self { q }
        }
    }

    /// `R * v`.
    pub fn rotate(&self, v: &Vector3<T>) -> Vector3<T> {
        self.to_rotation_matrix() * *v
    }

    /// Exponential map. `epsilon` keeps the angle strictly positive so the
    /// zero rotation vector maps to identity without dividing by zero.
    pub fn from_tangent(w: &Vector3<T>, epsilon: T) -> Self {
        let theta = (w.squared_norm() + epsilon * epsilon).sqrt();
        let half = T::lit(0.5) * theta;
        let s = half.sin() / theta;
        Self {
            q: [s * w.x(), s * w.y(), s * w.z(), half.cos()],
        }
    }

    /// Logarithm map onto the rotation vector, taking the quaternion
    /// hemisphere with `w >= 0`.
    pub fn to_tangent(&self, epsilon: T) -> Vector3<T> {
        let [x, y, z, w] = self.q;
        let sign = if w < T::zero() { -T::one() } else { T::one() };
        let w_safe = (T::one() - epsilon).min(sign * w);
        let norm = (T::one() - w_safe * w_safe).max(T::zero()).sqrt();
        if norm == T::zero() {
            return Vector3::zeros();
        }
        let k = T::lit(2.0) * w_safe.acos() / norm * sign;
        Vector3::new(k * x, k * y, k * z)
    }

    /// Skew-symmetric matrix such that `hat(a) * b == a x b`.
    pub fn hat(v: &Vector3<T>) -> Matrix33<T> {
        let zero = T::zero();
        Matrix33::from_rows([
            [zero, -v.z(), v.y()],
            [v.z(), zero, -v.x()],
            [-v.y(), v.x(), zero],
        ])
    }
}

impl<T: Scalar> Default for Rot3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Mul for Rot3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Rot3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.rotate(&rhs)
    }
}

/// Inverse of the SO(3) left Jacobian at `phi`.
///
/// `theta = sqrt(|phi|^2 + epsilon)`; note `epsilon` enters unsquared.
pub fn so3_ljac_inv<T: Scalar>(phi: &Vector3<T>, epsilon: T) -> Matrix33<T> {
    let theta = (phi.squared_norm() + epsilon).sqrt();
    let h = Rot3::hat(phi);
    let half = T::lit(0.5);
    let half_theta = half * theta;
    let k = (T::one() - theta * half_theta.cos() / (T::lit(2.0) * half_theta.sin()))
        / (theta * theta);
    Matrix33::<T>::identity() - h.scale(half) + (h * h).scale(k)
}

//! SE_2(3) extended poses: rotation, velocity and position.
//!
//! Storage is `R (4) ++ v (3) ++ t (3)`. Tangent vectors are ordered
//! `[rotation, velocity, position]`, and the exponential map couples the
//! translational parts through the SO(3) left Jacobian.

use std::ops::Mul;

use se23_core::{Matrix33, Matrix55, Matrix99, Scalar, Vector3};

use crate::rot3::{so3_ljac_inv, Rot3};

/// An element of SE_2(3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose23<T> {
    /// Frame orientation.
    pub r: Rot3<T>,
    /// Velocity in the global frame.
    pub v: Vector3<T>,
    /// Position in the global frame.
    pub t: Vector3<T>,
}

impl<T: Scalar> Pose23<T> {
    pub const STORAGE_DIM: usize = 10;
    pub const TANGENT_DIM: usize = 9;

    pub fn new(r: Rot3<T>, v: Vector3<T>, t: Vector3<T>) -> Self {
        Self { r, v, t }
    }

    pub fn identity() -> Self {
        Self::new(Rot3::identity(), Vector3::zeros(), Vector3::zeros())
    }

    #[inline]
    pub fn rotation(&self) -> &Rot3<T> {
        &self.r
    }

    #[inline]
    pub fn velocity(&self) -> &Vector3<T> {
        &self.v
    }

    #[inline]
    pub fn position(&self) -> &Vector3<T> {
        &self.t
    }

    pub fn from_storage(s: &[T; 10]) -> Self {
        Self {
            r: Rot3::from_storage(&[s[0], s[1], s[2], s[3]]),
            v: Vector3::from_slice(s, 4),
            t: Vector3::from_slice(s, 7),
        }
    }

    pub fn to_storage(&self) -> [T; 10] {
        let mut out = [T::zero(); 10];
        out[..4].copy_from_slice(&self.r.to_storage());
        self.v.write_slice(&mut out, 4);
        self.t.write_slice(&mut out, 7);
        out
    }

    pub fn compose(&self, other: &Self) -> Self {
        Self {
            r: self.r * other.r,
            v: self.r * other.v + self.v,
            t: self.r * other.t + self.t,
        }
    }

    pub fn inverse(&self) -> Self {
        let r_inv = self.r.inverse();
        Self {
            r: r_inv,
            v: -(r_inv * self.v),
            t: -(r_inv * self.t),
        }
    }

    /// `R * p + t`.
    pub fn transform_point(&self, p: &Vector3<T>) -> Vector3<T> {
        self.r * *p + self.t
    }

    /// 9x9 adjoint acting on `[rotation, velocity, position]` tangents.
    pub fn adjoint(&self) -> Matrix99<T> {
        let rm = self.r.to_rotation_matrix();
        let mut adj = Matrix99::zeros();
        adj.set_block(0, 0, &rm);
        adj.set_block(3, 0, &(Rot3::hat(&self.v) * rm));
        adj.set_block(3, 3, &rm);
        adj.set_block(6, 0, &(Rot3::hat(&self.t) * rm));
        adj.set_block(6, 6, &rm);
        adj
    }

    /// 5x5 matrix `[[R, v, t], [0, I2]]`.
    pub fn to_homogeneous_matrix(&self) -> Matrix55<T> {
        let mut m = Matrix55::zeros();
        m.set_block(0, 0, &self.r.to_rotation_matrix());
        m.set_block(0, 3, &self.v);
        m.set_block(0, 4, &self.t);
        m[(3, 3)] = T::one();
        m[(4, 4)] = T::one();
        m
    }

    /// Inverse of [`to_homogeneous_matrix`](Self::to_homogeneous_matrix).
    /// Only the top three rows are read.
    pub fn from_homogeneous_matrix(m: &Matrix55<T>) -> Self {
        Self {
            r: Rot3::from_rotation_matrix(&m.block::<3, 3>(0, 0)),
            v: m.block::<3, 1>(0, 3),
            t: m.block::<3, 1>(0, 4),
        }
    }

    /// Lie algebra element of the tangent vector `xi`.
    pub fn hat(xi: &[T; 9]) -> Matrix55<T> {
        let mut m = Matrix55::zeros();
        m.set_block(0, 0, &Rot3::hat(&Vector3::from_slice(xi, 0)));
        m.set_block(0, 3, &Vector3::from_slice(xi, 3));
        m.set_block(0, 4, &Vector3::from_slice(xi, 6));
        m
    }

    /// Exponential map.
    pub fn from_tangent(xi: &[T; 9], epsilon: T) -> Self {
        let w = Vector3::from_slice(xi, 0);
        let h = Rot3::hat(&w);
        let theta = (w.squared_norm() + epsilon * epsilon).sqrt();
        let theta2 = theta * theta;
        let v_mat = Matrix33::<T>::identity()
            + h.scale((T::one() - theta.cos()) / theta2)
            + (h * h).scale((theta - theta.sin()) / (theta2 * theta));
        Self {
            r: Rot3::from_tangent(&w, epsilon),
            v: v_mat * Vector3::from_slice(xi, 3),
            t: v_mat * Vector3::from_slice(xi, 6),
        }
    }

    /// Logarithm map.
    pub fn to_tangent(&self, epsilon: T) -> [T; 9] {
        let w = self.r.to_tangent(epsilon);
        let v_inv = so3_ljac_inv(&w, epsilon);
        let mut out = [T::zero(); 9];
        w.write_slice(&mut out, 0);
        (v_inv * self.v).write_slice(&mut out, 3);
        (v_inv * self.t).write_slice(&mut out, 6);
        out
    }

    /// `self * exp(xi)`.
    pub fn retract(&self, xi: &[T; 9], epsilon: T) -> Self {
        self.compose(&Self::from_tangent(xi, epsilon))
    }

    /// `log(self^-1 * other)`.
    pub fn local_coordinates(&self, other: &Self, epsilon: T) -> [T; 9] {
        self.inverse().compose(other).to_tangent(epsilon)
    }
}

impl<T: Scalar> Default for Pose23<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Mul for Pose23<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Pose23<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.transform_point(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use se23_core::{Matrix, SplitMix64, DEFAULT_EPSILON};

    fn random_pose(rng: &mut SplitMix64) -> Pose23<f64> {
        Pose23::new(
            Rot3::from_storage(&rng.next_unit_quaternion()),
            rng.next_vector3(-2.0, 2.0),
            rng.next_vector3(-5.0, 5.0),
        )
    }

    fn max_diff(a: &Pose23<f64>, b: &Pose23<f64>) -> f64 {
        let (sa, sb) = (a.to_storage(), b.to_storage());
        sa.iter().zip(sb.iter()).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max)
    }

    #[test]
    fn test_storage_layout() {
        let s = [0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let p = Pose23::from_storage(&s);
        assert_eq!(p.velocity().to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(p.position().to_array(), [4.0, 5.0, 6.0]);
        assert_eq!(p.to_storage(), s);
    }

    #[test]
    fn test_inverse_compose_is_identity() {
        let mut rng = SplitMix64::new(21);
        for _ in 0..50 {
            let p = random_pose(&mut rng);
            let e = p * p.inverse();
            assert!(max_diff(&e, &Pose23::identity()) < 1e-12);
        }
    }

    #[test]
    fn test_compose_matches_homogeneous_product() {
        let mut rng = SplitMix64::new(8);
        let a = random_pose(&mut rng);
        let b = random_pose(&mut rng);
        let lhs = (a * b).to_homogeneous_matrix();
        let rhs = a.to_homogeneous_matrix() * b.to_homogeneous_matrix();
        assert!(lhs.max_abs_diff(&rhs) < 1e-12);
    }

    #[test]
    fn test_transform_point() {
        let p = Pose23::new(
            Rot3::from_tangent(&Vector3::new(0.0, 0.0, std::f64::consts::PI), 0.0),
            Vector3::zeros(),
            Vector3::new(1.0, 1.0, 1.0),
        );
        let q = p * Vector3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(q.x(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.y(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.z(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_adjoint_conjugates_hat() {
        // X hat(xi) X^-1 == hat(Ad_X xi)
        let mut rng = SplitMix64::new(99);
        let x = random_pose(&mut rng);
        let mut xi = [0.0; 9];
        for v in xi.iter_mut() {
            *v = rng.next_scalar(-1.0, 1.0);
        }
        let lhs = x.to_homogeneous_matrix()
            * Pose23::hat(&xi)
            * x.inverse().to_homogeneous_matrix();
        let ad_xi = (x.adjoint() * Matrix::<f64, 9, 1>::from_array(xi)).to_array();
        assert!(lhs.max_abs_diff(&Pose23::hat(&ad_xi)) < 1e-12);
    }

    #[test]
    fn test_tangent_round_trip() {
        let xi = [0.3, -0.2, 0.4, 1.0, -2.0, 0.5, 3.0, 0.1, -1.0];
        let back = Pose23::<f64>::from_tangent(&xi, DEFAULT_EPSILON).to_tangent(DEFAULT_EPSILON);
        for (a, b) in back.iter().zip(xi.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_retract_local_coordinates() {
        let mut rng = SplitMix64::new(1234);
        let a = random_pose(&mut rng);
        let xi = [0.1, 0.2, -0.3, 0.5, 0.0, -0.5, 1.0, 2.0, 3.0];
        let b = a.retract(&xi, DEFAULT_EPSILON);
        let back = a.local_coordinates(&b, DEFAULT_EPSILON);
        for (x, y) in back.iter().zip(xi.iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_homogeneous_round_trip() {
        let mut rng = SplitMix64::new(64);
        for _ in 0..50 {
            let p = random_pose(&mut rng);
            let back = Pose23::from_homogeneous_matrix(&p.to_homogeneous_matrix());
            assert!(max_diff(&back, &p) < 1e-12);
        }
    }

    #[test]
    fn test_exponential_matches_matrix_exponential() {
        // exp(hat(xi)) by truncated power series.
        let xi = [0.4, -0.7, 0.9, 1.0, -2.0, 0.5, 3.0, 0.1, -1.0];
        let a = Pose23::<f64>::hat(&xi);
        let mut term = Matrix55::<f64>::identity();
        let mut series = term;
        for k in 1..40 {
            term = (term * a).scale(1.0 / k as f64);
            series = series + term;
        }
        let expected = Pose23::from_tangent(&xi, 0.0).to_homogeneous_matrix();
        assert!(series.max_abs_diff(&expected) < 1e-9);
    }

    #[test]
    fn test_hat_layout() {
        let xi = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let m = Pose23::<f64>::hat(&xi);
        assert_eq!(m[(0, 3)], 4.0);
        assert_eq!(m[(2, 4)], 9.0);
        assert_eq!(m[(2, 1)], 1.0);
        assert_eq!(m[(4, 4)], 0.0);
    }
}

//! Deterministic PRNG for reproducible tests and benchmarks.
//!
//! `SplitMix64` generates the random poses, IMU samples and covariances the
//! property tests and criterion benches run over, so every run sees the same
//! inputs.

use crate::{Scalar, Vector3};

/// SplitMix64 PRNG: deterministic, fast, statistically strong.
///
/// Period: 2^64. Single u64 state.
///
/// # Example
/// ```
/// use se23_core::SplitMix64;
///
/// let mut rng = SplitMix64::new(42);
/// let gyro = rng.next_vector3::<f64>(-1.0, 1.0);
/// assert!(gyro.x().abs() <= 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SplitMix64(u64);

impl SplitMix64 {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform f64 in [0, 1), top 53 bits for a full mantissa.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Standard normal sample via Box-Muller transform.
    pub fn next_gaussian(&mut self) -> f64 {
        let u1 = self.next_f64().max(1e-15); // avoid log(0)
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Uniform scalar in [lo, hi).
    #[inline]
    pub fn next_scalar<T: Scalar>(&mut self, lo: f64, hi: f64) -> T {
        T::lit(lo + (hi - lo) * self.next_f64())
    }

    pub fn next_vector3<T: Scalar>(&mut self, lo: f64, hi: f64) -> Vector3<T> {
        Vector3::new(
            self.next_scalar(lo, hi),
            self.next_scalar(lo, hi),
            self.next_scalar(lo, hi),
        )
    }

    /// Uniformly distributed unit quaternion `[x, y, z, w]`.
    ///
    /// Normalized 4D Gaussian; the sign is chosen so that `w >= 0`.
    pub fn next_unit_quaternion<T: Scalar>(&mut self) -> [T; 4] {
        let mut q = [0.0f64; 4];
        let mut norm = 0.0;
        while norm < 1e-6 {
            for v in q.iter_mut() {
                *v = self.next_gaussian();
            }
            norm = q.iter().map(|v| v * v).sum::<f64>().sqrt();
        }
        let sign = if q[3] < 0.0 { -1.0 } else { 1.0 };
        q.map(|v| T::lit(sign * v / norm))
    }
}

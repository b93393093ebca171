//! Numerical configuration shared by the Lie group charts.

use crate::Scalar;

/// Epsilon used to keep the exponential and logarithm maps finite near the
/// identity. Matches the value the kernels were originally generated with.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Numerical settings for geometry and preintegration kernels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config<T: Scalar> {
    /// Regularizer added under square roots of squared rotation angles.
    pub epsilon: T,
}

impl<T: Scalar> Config<T> {
    /// Replace the epsilon.
    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }
}

impl<T: Scalar> Default for Config<T> {
    fn default() -> Self {
        Self {
            epsilon: T::lit(DEFAULT_EPSILON),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_epsilon() {
        let cfg = Config::<f64>::default();
        assert_eq!(cfg.epsilon, 1e-6);
        assert_eq!(cfg.with_epsilon(0.0).epsilon, 0.0);
    }
}

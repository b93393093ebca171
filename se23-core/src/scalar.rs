//! Floating-point element type.

use std::fmt::Debug;

use num_traits::Float;

/// Element type of every vector, matrix and buffer in se23.
///
/// Implemented for `f32` and `f64`. Any IEEE-754 type works: overflow and
/// NaN propagate through the kernels unchanged.
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
    /// Convert a literal constant into this scalar type.
    fn lit(x: f64) -> Self;
}

impl Scalar for f32 {
    #[inline(always)]
    fn lit(x: f64) -> Self {
        x as f32
    }
}

impl Scalar for f64 {
    #[inline(always)]
    fn lit(x: f64) -> Self {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half<T: Scalar>() -> T {
        T::lit(0.5)
    }

    #[test]
    fn test_lit_f32_f64() {
        assert_eq!(half::<f32>(), 0.5f32);
        assert_eq!(half::<f64>(), 0.5f64);
    }
}

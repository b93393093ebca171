//! Three-output arithmetic kernel.

use se23_core::Scalar;

/// `c = [a + b, a * b, a - b]` with `a = inputs[0]`, `b = inputs[1]`.
///
/// `inputs[2]` and `inputs[3]` are ignored. Nothing is written when `c` is
/// `None`. Plain IEEE-754 arithmetic: overflow and NaN propagate.
#[inline]
pub fn myfunction<T: Scalar>(inputs: &[T; 4], c: Option<&mut [T; 3]>) {
    // Total ops: 3
    if let Some(c) = c {
        c[0] = inputs[0] + inputs[1];
        c[1] = inputs[0] * inputs[1];
        c[2] = inputs[0] - inputs[1];
    }
}

//! Errors reported at the buffer boundary.

use thiserror::Error;

/// Errors that can occur when caller-provided buffers are adapted into
/// fixed-shape arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A buffer does not have the element count the routine requires.
    #[error("`{name}` must have {expected} elements, got {actual}")]
    ShapeMismatch {
        /// Argument name as seen by the caller.
        name: &'static str,
        /// Required element count.
        expected: usize,
        /// Element count that was passed.
        actual: usize,
    },
}

/// Result alias for boundary operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = Error::ShapeMismatch {
            name: "preint_prev",
            expected: 55,
            actual: 54,
        };
        assert_eq!(err.to_string(), "`preint_prev` must have 55 elements, got 54");
    }
}

//! Boundary adapters from caller slices to fixed-length arrays.
//!
//! Kernels take `&[T; N]` / `Option<&mut [T; N]>` so their arity is part of
//! the type. Callers holding untyped slices go through [`fixed`] and
//! [`fixed_mut`], which reject a wrong length with
//! [`Error::ShapeMismatch`] instead of reading out of bounds.

use tracing::warn;

use crate::{Error, Result};

fn mismatch(name: &'static str, expected: usize, actual: usize) -> Error {
    warn!(buffer = name, expected, actual, "rejected buffer with wrong length");
    Error::ShapeMismatch {
        name,
        expected,
        actual,
    }
}

/// View `buf` as an `N`-element array.
#[inline]
pub fn fixed<'a, T, const N: usize>(name: &'static str, buf: &'a [T]) -> Result<&'a [T; N]> {
    buf.try_into().map_err(|_| mismatch(name, N, buf.len()))
}

/// View `buf` as a mutable `N`-element array.
#[inline]
pub fn fixed_mut<'a, T, const N: usize>(
    name: &'static str,
    buf: &'a mut [T],
) -> Result<&'a mut [T; N]> {
    let actual = buf.len();
    buf.try_into().map_err(|_| mismatch(name, N, actual))
}

/// Validate an optional output slice. `None` stays `None` (no writes wanted).
#[inline]
pub fn write_optional<'a, T, const N: usize>(
    name: &'static str,
    buf: Option<&'a mut [T]>,
) -> Result<Option<&'a mut [T; N]>> {
    buf.map(|b| fixed_mut(name, b)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_accepts_exact_length() {
        let data = vec![1.0f64, 2.0, 3.0, 4.0];
        let arr: &[f64; 4] = fixed("inputs", &data).unwrap();
        assert_eq!(arr, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_fixed_rejects_wrong_length() {
        let data = vec![0.0f64; 5];
        let err = fixed::<f64, 4>("inputs", &data).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                name: "inputs",
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn test_fixed_mut_writes_through() {
        let mut data = vec![0.0f64; 3];
        {
            let arr: &mut [f64; 3] = fixed_mut("c", &mut data).unwrap();
            arr[1] = 7.0;
        }
        assert_eq!(data, vec![0.0, 7.0, 0.0]);
    }

    #[test]
    fn test_write_optional_none_passes() {
        let out = write_optional::<f64, 3>("c", None).unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn test_write_optional_checks_length() {
        let mut short = [0.0f64; 2];
        assert!(write_optional::<f64, 3>("c", Some(&mut short[..])).is_err());
    }
}

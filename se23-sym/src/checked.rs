//! Slice-based entry points for callers without compile-time shapes.
//!
//! Each function validates every buffer against its [`Signature`] length,
//! then forwards to the fixed-shape kernel. A wrong length is reported as
//! [`Error::ShapeMismatch`] before anything is written.
//!
//! [`Signature`]: crate::Signature
//! [`Error::ShapeMismatch`]: se23_core::Error::ShapeMismatch

use se23_core::{fixed, write_optional, Result, Scalar};

pub fn myfunction<T: Scalar>(inputs: &[T], c: Option<&mut [T]>) -> Result<()> {
    let inputs = fixed("inputs", inputs)?;
    let c = write_optional("c", c)?;
    crate::myfunction(inputs, c);
    Ok(())
}

pub fn myfunc<T: Scalar>(inputs: &[T], output: Option<&mut [T]>) -> Result<()> {
    let inputs = fixed("inputs", inputs)?;
    let output = write_optional("output", output)?;
    crate::myfunc(inputs, output);
    Ok(())
}

pub fn preintegrate<T: Scalar>(
    imu_noise: &[T],
    preint_prev: &[T],
    z_imu_est: &[T],
    dt: T,
    upsilon: Option<&mut [T]>,
    cov: Option<&mut [T]>,
) -> Result<()> {
    let imu_noise = fixed("imu_noise", imu_noise)?;
    let preint_prev = fixed("preint_prev", preint_prev)?;
    let z_imu_est = fixed("z_imu_est", z_imu_est)?;
    let upsilon = write_optional("upsilon", upsilon)?;
    let cov = write_optional("cov", cov)?;
    crate::preintegrate(imu_noise, preint_prev, z_imu_est, dt, upsilon, cov);
    Ok(())
}

//! Flat-buffer preintegration step.

use tracing::trace;

use se23_core::{Layout, Scalar};
use se23_geo::{ImuNoise, ImuPreint, ZImuEst};

/// One preintegration step over flat storage.
///
/// - `imu_noise`: gyro/accl noise densities (6)
/// - `preint_prev`: previous delta and packed covariance (55)
/// - `z_imu_est`: bias-corrected IMU sample (6)
/// - `dt`: step length
/// - `upsilon`: new delta, Pose23 storage (10)
/// - `cov`: new 9x9 covariance, column-major (81)
///
/// Absent outputs are skipped; with both absent nothing is computed.
pub fn preintegrate<T: Scalar>(
    imu_noise: &[T; 6],
    preint_prev: &[T; 55],
    z_imu_est: &[T; 6],
    dt: T,
    upsilon: Option<&mut [T; 10]>,
    cov: Option<&mut [T; 81]>,
) {
    if upsilon.is_none() && cov.is_none() {
        trace!("preintegrate called without outputs");
        return;
    }
    let next = se23_geo::preintegrate(
        &ImuNoise::from_storage(imu_noise),
        &ImuPreint::from_storage(preint_prev),
        &ZImuEst::from_storage(z_imu_est),
        dt,
    );
    if let Some(upsilon) = upsilon {
        *upsilon = next.upsilon.to_storage();
    }
    if let Some(cov) = cov {
        next.cov.matrix().write_flat(Layout::ColMajor, cov);
    }
}

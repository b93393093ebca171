//! IMU measurement, noise and preintegration state types.
//!
//! Every state has a flat storage form; these are the layouts the
//! fixed-shape function surface reads and writes.

use std::ops::Sub;

use se23_core::{Scalar, Vector3};

use crate::cov::{Cov66, Cov99};
use crate::pose23::Pose23;

/// Copy `L` elements of `s` starting at `at`.
fn segment<T: Scalar, const L: usize>(s: &[T], at: usize) -> [T; L] {
    let mut out = [T::zero(); L];
    out.copy_from_slice(&s[at..at + L]);
    out
}

// ===========================================================================
// Gyro/accelerometer pairs: storage is gyro (3) ++ accl (3).
// ===========================================================================

macro_rules! impl_gyro_accl_state {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name<T: Scalar> {
            pub gyro: Vector3<T>,
            pub accl: Vector3<T>,
        }

        impl<T: Scalar> $name<T> {
            pub const STORAGE_DIM: usize = 6;

            pub fn new(gyro: Vector3<T>, accl: Vector3<T>) -> Self {
                Self { gyro, accl }
            }

            pub fn from_storage(s: &[T; 6]) -> Self {
                Self {
                    gyro: Vector3::from_slice(s, 0),
                    accl: Vector3::from_slice(s, 3),
                }
            }

            pub fn to_storage(&self) -> [T; 6] {
                let mut out = [T::zero(); 6];
                self.gyro.write_slice(&mut out, 0);
                self.accl.write_slice(&mut out, 3);
                out
            }
        }
    };
}

impl_gyro_accl_state!(
    /// Continuous-time IMU noise densities (variances) per axis.
    ImuNoise
);
impl_gyro_accl_state!(
    /// Gyroscope and accelerometer biases.
    ImuBias
);
impl_gyro_accl_state!(
    /// Raw IMU measurement, bias not yet removed.
    ZImuRaw
);
impl_gyro_accl_state!(
    /// Bias-corrected IMU measurement.
    ZImuEst
);

impl<T: Scalar> ImuNoise<T> {
    /// Diagonal 6x6 noise covariance, gyro block first.
    pub fn cov(&self) -> Cov66<T> {
        Cov66::diag(&self.to_storage())
    }
}

impl<T: Scalar> Sub<ImuBias<T>> for ZImuRaw<T> {
    type Output = ZImuEst<T>;

    fn sub(self, bias: ImuBias<T>) -> ZImuEst<T> {
        ZImuEst::new(self.gyro - bias.gyro, self.accl - bias.accl)
    }
}

// ===========================================================================
// Preintegrated measurement: upsilon (10) ++ packed cov (45).
// ===========================================================================

/// Preintegrated IMU delta and its 9x9 covariance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImuPreint<T: Scalar> {
    pub upsilon: Pose23<T>,
    pub cov: Cov99<T>,
}

impl<T: Scalar> ImuPreint<T> {
    pub const STORAGE_DIM: usize = 55;

    pub fn new(upsilon: Pose23<T>, cov: Cov99<T>) -> Self {
        Self { upsilon, cov }
    }

    /// Identity delta with zero covariance; the start of a preintegration window.
    pub fn identity() -> Self {
        Self::new(Pose23::identity(), Cov99::zeros())
    }

    pub fn from_storage(s: &[T; 55]) -> Self {
        Self {
            upsilon: Pose23::from_storage(&segment(s, 0)),
            cov: Cov99::from_storage(&segment::<T, 45>(s, 10)),
        }
    }

    pub fn to_storage(&self) -> [T; 55] {
        let mut out = [T::zero(); 55];
        out[..10].copy_from_slice(&self.upsilon.to_storage());
        out[10..].copy_from_slice(&self.cov.to_storage::<45>());
        out
    }
}

impl<T: Scalar> Default for ImuPreint<T> {
    fn default() -> Self {
        Self::identity()
    }
}

// ===========================================================================
// Filter state: nominal pose (10) ++ packed error cov (45) ++ bias (6).
// ===========================================================================

/// Navigation state with error-state covariance and IMU bias.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<T: Scalar> {
    pub nom: Pose23<T>,
    pub err_cov: Cov99<T>,
    pub imu_bias: ImuBias<T>,
}

impl<T: Scalar> State<T> {
    pub const STORAGE_DIM: usize = 61;

    pub fn from_storage(s: &[T; 61]) -> Self {
        Self {
            nom: Pose23::from_storage(&segment(s, 0)),
            err_cov: Cov99::from_storage(&segment::<T, 45>(s, 10)),
            imu_bias: ImuBias::from_storage(&segment(s, 55)),
        }
    }

    pub fn to_storage(&self) -> [T; 61] {
        let mut out = [T::zero(); 61];
        out[..10].copy_from_slice(&self.nom.to_storage());
        out[10..55].copy_from_slice(&self.err_cov.to_storage::<45>());
        out[55..].copy_from_slice(&self.imu_bias.to_storage());
        out
    }
}

// Small fixed-size kernels use index loops where iterators hurt readability.
#![allow(clippy::needless_range_loop)]

//! # se23 Geo
//!
//! Lie groups and IMU preintegration on SE_2(3).
//!
//! - **Rot3**: unit-quaternion rotations with exponential/logarithm maps.
//! - **Pose23**: extended poses (rotation, velocity, position), their
//!   adjoint, homogeneous form and SE_2(3) charts.
//! - **Cov**: symmetric covariances with packed lower-triangle storage.
//! - **States**: IMU noise, bias, measurements and the preintegrated delta.
//! - **Integration**: the one-step preintegration update and covariance
//!   propagation.
//!
//! ```
//! use se23_core::Vector3;
//! use se23_geo::{preintegrate, ImuNoise, ImuPreint, ZImuEst};
//!
//! let noise = ImuNoise::new(Vector3::new(1e-4, 1e-4, 1e-4), Vector3::new(1e-2, 1e-2, 1e-2));
//! let z = ZImuEst::new(Vector3::new(0.0, 0.0, 0.1), Vector3::new(0.0, 0.0, 9.81));
//! let mut preint = ImuPreint::<f64>::identity();
//! for _ in 0..100 {
//!     preint = preintegrate(&noise, &preint, &z, 0.005);
//! }
//! assert!(preint.cov.matrix().is_symmetric(0.0));
//! ```

pub mod cov;
pub mod integration;
pub mod pose23;
pub mod rot3;
pub mod states;

pub use cov::{Cov, Cov33, Cov66, Cov99};
pub use integration::{gamma, phi, preintegrate, Preintegrator};
pub use pose23::Pose23;
pub use rot3::{so3_ljac_inv, Rot3};
pub use states::{ImuBias, ImuNoise, ImuPreint, State, ZImuEst, ZImuRaw};

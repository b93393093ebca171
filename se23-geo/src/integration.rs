//! One-step IMU preintegration on SE_2(3).
//!
//! Each step propagates the preintegrated delta `upsilon` with a bias
//! corrected IMU sample over `dt`, and propagates its 9x9 covariance:
//!
//! ```text
//! upsilon' = phi(upsilon, dt) * (dR, dv, dt)
//! cov'     = A cov A^T + G (Q dt) G^T,   A = Ad(upsilon^-1) F
//! ```
//!
//! Acceleration is interpolated linearly between the body-frame sample and
//! its rotated value at the end of the step.

use tracing::trace;

use se23_core::{Config, Matrix33, Matrix96, Matrix99, Scalar, Vector3};

use crate::cov::Cov99;
use crate::pose23::Pose23;
use crate::rot3::{so3_ljac_inv, Rot3};
use crate::states::{ImuNoise, ImuPreint, ZImuEst};

/// Free-fall motion model: advance position by velocity over `dt`.
pub fn phi<T: Scalar>(pose: &Pose23<T>, dt: T) -> Pose23<T> {
    Pose23::new(pose.r, pose.v, pose.t + pose.v.scale(dt))
}

/// Velocity and position increment of constant acceleration `g` over `dt`.
pub fn gamma<T: Scalar>(g: &Vector3<T>, dt: T) -> Pose23<T> {
    Pose23::new(
        Rot3::identity(),
        g.scale(dt),
        g.scale(dt * dt * T::lit(0.5)),
    )
}

/// Runs preintegration steps with a fixed numerical configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preintegrator<T: Scalar> {
    config: Config<T>,
}

impl<T: Scalar> Preintegrator<T> {
    pub fn new(config: Config<T>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config<T> {
        &self.config
    }

    /// Integrate one IMU sample `z` over `dt` onto `prev`.
    pub fn step(
        &self,
        noise: &ImuNoise<T>,
        prev: &ImuPreint<T>,
        z: &ZImuEst<T>,
        dt: T,
    ) -> ImuPreint<T> {
        trace!(dt = ?dt, "preintegration step");
        let eps = self.config.epsilon;
        let half = T::lit(0.5);
        let dt2 = dt * dt;
        let dt3 = dt2 * dt;

        // Mean propagation
        let omega_dt = z.gyro.scale(dt);
        let delta_r = Rot3::from_tangent(&omega_dt, eps);
        let a0 = z.accl;
        let a1 = delta_r * z.accl;
        let da = a1 - a0;
        let delta_v = a0.scale(dt) + da.scale(dt2 * half);
        let delta_t = a0.scale(dt2 * half) + da.scale(dt3 / T::lit(6.0));
        let upsilon = phi(&prev.upsilon, dt).compose(&Pose23::new(delta_r, delta_v, delta_t));

        // Noise injection
        let j_inv = so3_ljac_inv(&omega_dt, eps);
        let r_back = Rot3::from_tangent(&(-omega_dt), eps).to_rotation_matrix();
        let mut g = Matrix96::zeros();
        g.set_block(0, 0, &j_inv.scale(dt));
        g.set_block(3, 3, &r_back.scale(dt));
        g.set_block(6, 3, &r_back.scale(dt2 * half));
        let g = -g;
        let q = g * noise.cov().matrix().scale(dt) * g.transpose();

        // Covariance propagation
        let mut f = Matrix99::<T>::identity();
        f.set_block(6, 3, &Matrix33::<T>::identity().scale(dt));
        let a = prev.upsilon.inverse().adjoint() * f;
        let cov = a * *prev.cov.matrix() * a.transpose() + q;

        ImuPreint::new(upsilon, Cov99::from_matrix(cov))
    }
}

/// One preintegration step with the default configuration.
pub fn preintegrate<T: Scalar>(
    imu_noise: &ImuNoise<T>,
    preint_prev: &ImuPreint<T>,
    z_imu_est: &ZImuEst<T>,
    dt: T,
) -> ImuPreint<T> {
    Preintegrator::default().step(imu_noise, preint_prev, z_imu_est, dt)
}

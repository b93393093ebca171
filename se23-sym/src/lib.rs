//! # se23 Sym
//!
//! Flat-buffer function surface with the fixed arities of the generated
//! kernels. Every routine is generic over [`Scalar`](se23_core::Scalar),
//! reads fixed-length input arrays and writes optional fixed-length output
//! arrays; an absent output means the caller does not want that result and
//! nothing is written.
//!
//! | routine        | inputs                                   | outputs              |
//! |----------------|------------------------------------------|----------------------|
//! | `myfunction`   | `inputs[4]`                              | `c[3]`               |
//! | `myfunc`       | `inputs[10]` (Pose23 storage)            | `output[9]`          |
//! | `preintegrate` | `imu_noise[6]`, `preint_prev[55]`, `z_imu_est[6]`, `dt` | `upsilon[10]`, `cov[81]` |
//!
//! [`checked`] adapts untyped slices into these shapes and reports length
//! mismatches as errors; [`SIGNATURES`] lists the routines under their
//! external names.

pub mod checked;
pub mod myfunc;
pub mod myfunction;
pub mod preintegrate;
pub mod signature;

pub use myfunc::myfunc;
pub use myfunction::myfunction;
pub use preintegrate::preintegrate;
pub use signature::{Arg, Signature, SIGNATURES};

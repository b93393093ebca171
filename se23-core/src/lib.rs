// Small fixed-size kernels use index loops where iterators hurt readability.
#![allow(clippy::needless_range_loop)]

//! # se23 Core
//!
//! Shared building blocks for the se23 crates.
//!
//! This crate provides:
//! - **Scalar**: the floating-point element type every kernel is generic over.
//! - **Matrix**: stack-allocated, const-generic matrices for the small
//!   fixed shapes (3x3, 9x9, 9x6, ...) preintegration works with.
//! - **Layout**: row-major / column-major flattening of matrices into buffers.
//! - **Buffers**: boundary validation turning caller slices into fixed-length
//!   arrays, reporting mismatches as [`Error::ShapeMismatch`].
//! - **Config**: numerical epsilon shared by the Lie group charts.
//! - **SplitMix64**: deterministic PRNG for tests and benchmarks.

pub mod buffer;
pub mod config;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod rng;
pub mod scalar;

pub use buffer::{fixed, fixed_mut, write_optional};
pub use config::{Config, DEFAULT_EPSILON};
pub use error::{Error, Result};
pub use layout::Layout;
pub use matrix::{Matrix, Matrix33, Matrix55, Matrix66, Matrix96, Matrix99, Vector3};
pub use rng::SplitMix64;
pub use scalar::Scalar;

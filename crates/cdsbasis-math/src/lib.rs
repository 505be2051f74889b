//! # cdsbasis-math
//!
//! Numerical kernels for the cdsbasis analytics workspace.
//!
//! This crate provides:
//!
//! - **Solvers**: bracketed root-finding ([`solvers::brent`],
//!   [`solvers::bisection`]) with bounded iteration counts
//! - **Interpolation**: linear and log-linear interpolators behind the
//!   [`interpolation::Interpolator`] trait, with an explicit extrapolation
//!   switch
//!
//! Everything here is strictly CPU-bound and performs no I/O; all loops are
//! capped by [`solvers::SolverConfig::max_iterations`] so termination is
//! guaranteed even on pathological inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod interpolation;
pub mod solvers;

pub use error::{MathError, MathResult};

//! # cdsbasis-curves
//!
//! Term structures for the cdsbasis analytics workspace.
//!
//! This crate provides:
//!
//! - [`DiscountCurve`]: the risk-free zero curve with a configuration-fixed
//!   interpolation scheme, flat extrapolation and parallel-shift bumping
//! - [`SurvivalCurve`]: the bootstrapped hazard/survival term structure,
//!   piecewise-constant hazard between nodes, flat-forward beyond the last
//! - [`bootstrap::bootstrap`]: sequential calibration of a survival curve to
//!   a CDS term structure by equating the premium and protection legs tenor
//!   by tenor
//!
//! A survival curve is built once per market snapshot and is immutable
//! afterwards; everything downstream only queries it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bootstrap;
pub mod discount;
pub mod error;
pub mod survival;

pub use bootstrap::{bootstrap, cds_leg_pvs};
pub use discount::DiscountCurve;
pub use error::{CurveError, CurveResult};
pub use survival::{SurvivalCurve, SurvivalNode};

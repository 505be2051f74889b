//! # cdsbasis-core
//!
//! Plain immutable market data for the cdsbasis analytics workspace.
//!
//! This crate provides:
//!
//! - **Data model**: [`MarketSnapshot`], [`BondTerms`], [`CdsQuote`],
//!   [`RatePoint`]: the fixed input snapshot every analysis run is a pure
//!   function of
//! - **Cash flows**: coupon schedule generation and accrued interest
//!   ([`cashflow`])
//! - **Configuration**: [`AnalyticsConfig`], passed into each call by value
//! - **Snapshot sources**: the [`source::SnapshotSource`] capability trait
//!   with fixture and JSON-file implementations
//!
//! All types are owned values with no interior mutability; a snapshot is
//! built (or loaded) once, validated at pipeline entry, and only read from
//! afterwards.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod cashflow;
pub mod config;
pub mod error;
pub mod source;
pub mod types;

pub use cashflow::{accrued_interest, cash_flow_schedule, CashFlow};
pub use config::AnalyticsConfig;
pub use error::{SnapshotError, SourceError};
pub use types::{year_fraction, BondTerms, CdsQuote, MarketSnapshot, RatePoint};

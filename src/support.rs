//! Supporting utilities used by the calculators.
//!
//! Modules here are part of the public API because they're useful on their
//! own, but their APIs are not stable. Breaking changes may occur as needed.
//!
//! - [`constraint`]: Type-level numeric constraints with zero runtime cost.
//! - [`units`]: Extensions to [`uom`] (temperature differences, quantities
//!   `uom` doesn't define).
//! - [`hx`]: The heat-exchange analysis toolkit (LMTD, correction factor,
//!   effectiveness-NTU).

pub mod constraint;
pub mod hx;
pub mod units;

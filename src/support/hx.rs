//! Heat exchanger analysis toolkit.
//!
//! General-purpose pieces of the LMTD and effectiveness-NTU methods, shared
//! by the sizing pipeline in [`crate::models::thermal::exchanger`]:
//!
//! - **Core types**: [`CapacitanceRate`], [`CapacityRatio`],
//!   [`Effectiveness`], [`Ntu`]
//! - **Arrangements**: [`FlowArrangement`]
//! - **LMTD**: [`terminal_differences`], [`log_mean_temperature_difference`],
//!   with a temperature cross surfaced as a named error
//! - **Correction factor**: [`correction_factor`], the Bowman–Mueller–Nagle
//!   F factor applied on top of the counter-flow LMTD
//! - **ε-NTU**: [`effectiveness`], with the documented degenerate-case
//!   substitutions at `Cr = 0` and `Cr ≈ 1`
//!
//! The numeric fallbacks in this module (the 0.9 F-factor default, the
//! `[0.5, 1.0]` clamp, the near-equal ΔT branch) are deliberate engineering
//! approximations carried over from audited sizing practice. Changing them
//! changes audited results; they are preserved exactly.

pub mod arrangement;
mod capacitance_rate;
mod capacity_ratio;
mod correction_factor;
mod effectiveness_ntu;
mod lmtd;

pub use arrangement::FlowArrangement;
pub use capacitance_rate::CapacitanceRate;
pub use capacity_ratio::CapacityRatio;
pub use correction_factor::{F_FALLBACK, correction_factor};
pub use effectiveness_ntu::{Effectiveness, Ntu, effectiveness};
pub use lmtd::{
    TemperatureCross, TerminalDifferences, log_mean_temperature_difference, terminal_differences,
};

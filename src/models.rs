//! Public calculators.
//!
//! Calculators are the primary public interface of this crate, organized
//! into domain-specific submodules:
//!
//! - [`thermal`]: The shell-and-tube exchanger sizing pipeline (thermal
//!   performance, pressure drop, vibration risk, standards compliance).
//! - [`turbomachinery`]: The polytropic-compression sibling calculator.
//!
//! Each calculator is a pure function from an immutable input configuration
//! to a result record. Nothing is cached between calls; correctness rests on
//! outputs depending only on the current inputs.

pub mod thermal;
pub mod turbomachinery;

//! Thermal equipment calculators.

pub mod exchanger;

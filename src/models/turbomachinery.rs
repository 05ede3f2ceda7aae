//! Turbomachinery calculators.

pub mod compressor;

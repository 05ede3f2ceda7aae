//! # hx-sizing
//!
//! A thermal-hydraulic sizing and standards-compliance engine for
//! shell-and-tube heat exchangers, with a polytropic-compression sibling
//! calculator for centrifugal compressors.
//!
//! ## Crate layout
//!
//! - [`models`]: The calculators themselves — the exchanger sizing pipeline
//!   and the compressor calculator.
//! - [`support`]: Supporting utilities used by the calculators (constrained
//!   numeric types, unit extensions, the heat-exchange analysis toolkit).
//!
//! ## Design
//!
//! Every calculator is a pure, synchronous function of an immutable input
//! configuration: no hidden state, no I/O, no caching. The caller decides
//! when to recompute; a full recomputation is always performed, so results
//! depend only on the current inputs.
//!
//! Physical quantities are [`uom`] SI quantities throughout. The excluded
//! presentation layer is responsible for unit normalization on the way in
//! and label formatting on the way out.
//!
//! ## Error philosophy
//!
//! - Invalid configuration (zero flow, zero diameter, non-finite inputs)
//!   yields an error, never a partially-populated result.
//! - A temperature cross is a named error, never a clamped value.
//! - Numeric degeneracies (F-factor singularities, `Cr ≈ 1`, friction-factor
//!   regime boundaries) are expected inputs handled by documented
//!   closed-form substitutions, never errors.
//! - Standards-compliance violations are data, never errors: an invalid
//!   design is a normal, expected outcome communicated through
//!   [`ValidationRule`] entries.
//!
//! [`ValidationRule`]: models::thermal::exchanger::ValidationRule

pub mod models;
pub mod support;

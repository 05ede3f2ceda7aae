//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] SI quantities. This
//! module fills two gaps:
//!
//! - [`TemperatureDifference`]: subtracting two absolute temperatures into a
//!   [`TemperatureInterval`](uom::si::f64::TemperatureInterval), which `uom`
//!   cannot express directly.
//! - [`FoulingResistance`]: a quantity alias `uom` does not name directly.

mod quantities;
mod temperature_difference;

pub use quantities::{FoulingResistance, fouling_resistance};
pub use temperature_difference::TemperatureDifference;

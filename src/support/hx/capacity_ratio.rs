use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};
use uom::si::{f64::Ratio, ratio::ratio};

use super::CapacitanceRate;

/// Capacity ratio (`Cmin / Cmax`) for a pair of streams.
///
/// Always inside the closed interval [0, 1]. Because [`CapacitanceRate`] is
/// strictly positive by construction, the `Cmax = 0` case (which would call
/// for a guarded `Cr = 0`) is unrepresentable here; it is rejected upstream
/// as an invalid configuration.
#[derive(Debug, Clone, Copy)]
pub struct CapacityRatio(Constrained<Ratio, UnitInterval>);

impl CapacityRatio {
    /// Create a [`CapacityRatio`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(Ratio::new::<ratio>(value))?))
    }

    /// Create a [`CapacityRatio`] from the capacitance rates of the two
    /// streams.
    #[must_use]
    pub fn from_capacitance_rates(rates: [CapacitanceRate; 2]) -> Self {
        let [first, second] = rates;

        Self(
            UnitInterval::new(first.min(*second) / first.max(*second))
                .expect("positive capacitance rates always yield a ratio in [0, 1]"),
        )
    }
}

impl Deref for CapacityRatio {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

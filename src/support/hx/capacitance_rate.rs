use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::{MassRate, SpecificHeatCapacity, ThermalConductance};

/// Capacitance rate (`ṁ · cp`) of a stream flowing through the exchanger.
///
/// The value must be strictly positive: a stream with zero capacitance rate
/// is an invalid configuration, not a degenerate operating point, and is
/// rejected at construction so the `Cmin/Cmax` ratio downstream can never
/// divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a quantity with thermal-conductance
    /// units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`CapacitanceRate`] from a mass flow and specific heat.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is not strictly positive.
    pub fn from_mass_rate_and_specific_heat(
        mass_rate: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(mass_rate * specific_heat)
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        mass_rate::kilogram_per_second, specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductance::watt_per_kelvin,
    };

    use super::*;

    #[test]
    fn from_mass_rate_and_specific_heat() -> ConstraintResult<()> {
        // 50,000 kg/h of a hydrocarbon at cp = 2.1 kJ/kg·K.
        let mass_rate = MassRate::new::<kilogram_per_second>(50_000.0 / 3600.0);
        let specific_heat = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2100.0);

        let rate = CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate, specific_heat)?;

        assert_relative_eq!(rate.get::<watt_per_kelvin>(), 29_166.666_666, epsilon = 1e-3);
        Ok(())
    }

    #[test]
    fn rejects_zero_flow() {
        let mass_rate = MassRate::new::<kilogram_per_second>(0.0);
        let specific_heat = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0);

        assert!(CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate, specific_heat).is_err());
    }
}

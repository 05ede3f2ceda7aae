use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// `uom` deliberately distinguishes absolute temperatures
/// ([`ThermodynamicTemperature`]) from temperature differences
/// ([`TemperatureInterval`]) and does not implement `Sub` between two
/// absolute temperatures (see uom issues
/// [#380](https://github.com/iliekturtles/uom/issues/380) and
/// [#289](https://github.com/iliekturtles/uom/issues/289)). LMTD work is
/// nothing but such subtractions, so this trait provides the missing
/// [`minus`](Self::minus).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn signed_differences() {
        let hot = ThermodynamicTemperature::new::<degree_celsius>(150.0);
        let cold = ThermodynamicTemperature::new::<degree_celsius>(70.0);

        assert_relative_eq!(hot.minus(cold).get::<delta_kelvin>(), 80.0);
        assert_relative_eq!(cold.minus(hot).get::<delta_kelvin>(), -80.0);
    }
}

//! Polytropic compression of a real gas.
//!
//! Sizes a single centrifugal compression stage from inlet conditions, a
//! discharge pressure, and a polytropic efficiency. The gas model is
//! deliberately coarse: compressibility comes from a truncated virial
//! expansion on pseudo-critical properties estimated from the molecular
//! weight alone, which is adequate for screening-level power estimates but
//! not for performance guarantees.

use thiserror::Error;

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{AvailableEnergy, MassRate, MolarMass, Power, Pressure, Ratio, ThermodynamicTemperature},
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{ConstraintError, StrictlyPositive, UnitInterval};

/// Universal gas constant, J/(mol·K).
const UNIVERSAL_GAS_CONSTANT: f64 = 8.314_462_618;

/// Inlet conditions and stage definition for one compression stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorInput {
    pub molecular_weight: MolarMass,
    /// Ideal-gas `cp/cv` of the gas.
    pub heat_capacity_ratio: Ratio,
    pub inlet_temperature: ThermodynamicTemperature,
    pub inlet_pressure: Pressure,
    pub discharge_pressure: Pressure,
    pub mass_flow: MassRate,
    pub polytropic_efficiency: Ratio,
}

#[derive(Debug, Clone, Copy)]
pub struct CompressorResult {
    pub pressure_ratio: Ratio,
    /// Polytropic exponent `n`, from `(n-1)/n = (k-1)/(k·η_p)`.
    pub polytropic_exponent: Ratio,
    /// Average compressibility over the stage.
    pub compressibility: Ratio,
    pub discharge_temperature: ThermodynamicTemperature,
    /// Polytropic head, J/kg.
    pub polytropic_head: AvailableEnergy,
    /// Power absorbed by the gas path, head over efficiency times flow.
    pub gas_power: Power,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CompressorError {
    /// A field of the input is outside its physical domain.
    #[error("invalid compressor configuration: {field}: {source}")]
    InvalidConfiguration {
        field: &'static str,
        source: ConstraintError,
    },

    /// The discharge pressure does not exceed the inlet pressure.
    #[error("no compression: pressure ratio {pressure_ratio:.4} must exceed 1")]
    NoCompression { pressure_ratio: f64 },
}

impl CompressorInput {
    fn validate(&self) -> Result<(), CompressorError> {
        let invalid = |field: &'static str| {
            move |source: ConstraintError| CompressorError::InvalidConfiguration {
                field,
                source,
            }
        };

        StrictlyPositive::new(self.molecular_weight).map_err(invalid("molecular_weight"))?;
        StrictlyPositive::new(self.inlet_pressure).map_err(invalid("inlet_pressure"))?;
        StrictlyPositive::new(self.discharge_pressure)
            .map_err(invalid("discharge_pressure"))?;
        StrictlyPositive::new(self.mass_flow).map_err(invalid("mass_flow"))?;
        StrictlyPositive::new(self.inlet_temperature.value)
            .map_err(invalid("inlet_temperature"))?;

        // cp/cv of any gas exceeds one.
        StrictlyPositive::new(self.heat_capacity_ratio.get::<ratio>() - 1.0)
            .map_err(invalid("heat_capacity_ratio"))?;

        StrictlyPositive::new(self.polytropic_efficiency)
            .map_err(invalid("polytropic_efficiency"))?;
        UnitInterval::new(self.polytropic_efficiency.get::<ratio>())
            .map_err(invalid("polytropic_efficiency"))?;

        Ok(())
    }
}

/// Runs the polytropic stage calculation.
///
/// # Errors
///
/// - [`CompressorError::InvalidConfiguration`] for a non-physical input.
/// - [`CompressorError::NoCompression`] when the discharge pressure does not
///   exceed the inlet pressure.
pub fn evaluate(input: &CompressorInput) -> Result<CompressorResult, CompressorError> {
    input.validate()?;

    let pressure_ratio = (input.discharge_pressure / input.inlet_pressure).get::<ratio>();
    if pressure_ratio <= 1.0 {
        return Err(CompressorError::NoCompression { pressure_ratio });
    }

    let k = input.heat_capacity_ratio.get::<ratio>();
    let efficiency = input.polytropic_efficiency.get::<ratio>();

    // (n-1)/n, then n itself.
    let exponent = (k - 1.0) / (k * efficiency);
    let n = 1.0 / (1.0 - exponent);

    let t_inlet = input.inlet_temperature.get::<kelvin>();
    let t_discharge = t_inlet * pressure_ratio.powf(exponent);

    let molecular_weight = input.molecular_weight.get::<kilogram_per_mole>();
    let specific_gas_constant = UNIVERSAL_GAS_CONSTANT / molecular_weight;

    let z_inlet = compressibility(
        t_inlet,
        input.inlet_pressure.get::<pascal>(),
        molecular_weight,
    );
    let z_discharge = compressibility(
        t_discharge,
        input.discharge_pressure.get::<pascal>(),
        molecular_weight,
    );
    let z_average = 0.5 * (z_inlet + z_discharge);

    let head = z_average * specific_gas_constant * t_inlet / exponent
        * (pressure_ratio.powf(exponent) - 1.0);

    let polytropic_head = AvailableEnergy::new::<joule_per_kilogram>(head);
    let power = input.mass_flow * polytropic_head / input.polytropic_efficiency;

    Ok(CompressorResult {
        pressure_ratio: Ratio::new::<ratio>(pressure_ratio),
        polytropic_exponent: Ratio::new::<ratio>(n),
        compressibility: Ratio::new::<ratio>(z_average),
        discharge_temperature: ThermodynamicTemperature::new::<kelvin>(t_discharge),
        polytropic_head,
        gas_power: power,
    })
}

/// Compressibility from the truncated virial expansion `Z = 1 + B⁰·Pr/Tr`
/// with `B⁰ = 0.083 − 0.422/Tr^1.6`.
///
/// Pseudo-critical properties are estimated linearly from the molecular
/// weight. The estimate is coarse and floored where the expansion loses
/// validity at high reduced pressure.
fn compressibility(temperature: f64, pressure: f64, molecular_weight: f64) -> f64 {
    let grams_per_mole = molecular_weight * 1000.0;

    let critical_temperature = 170.0 + 1.9 * grams_per_mole;
    let critical_pressure = (48.0 - 0.155 * grams_per_mole).max(10.0) * 1.0e5;

    let reduced_temperature = temperature / critical_temperature;
    let reduced_pressure = pressure / critical_pressure;

    let b0 = 0.083 - 0.422 / reduced_temperature.powf(1.6);
    (1.0 + b0 * reduced_pressure / reduced_temperature).max(0.2)
}

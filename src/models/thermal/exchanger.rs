//! Shell-and-tube exchanger sizing and rating pipeline.
//!
//! [`evaluate`] runs the full calculation chain over a validated
//! [`ExchangerInput`]:
//!
//! 1. Thermal performance: duty, corrected LMTD, the overall-coefficient
//!    chain, and the design or rating solve.
//! 2. Pressure drop on both sides (Kern method).
//! 3. Flow-induced vibration screening of the tube bundle.
//! 4. Standards compliance against the rule sets applicable to the
//!    exchanger type.
//!
//! Each stage is a pure function of the input and the prior stages. The
//! compliance reports classify violations as data; only an infeasible
//! configuration or temperature profile is an error.
//!
//! ```
//! use hx_sizing::models::thermal::exchanger::{ExchangerInput, evaluate};
//! # fn demo(input: ExchangerInput) -> Result<(), Box<dyn std::error::Error>> {
//! let analysis = evaluate(&input)?;
//! println!(
//!     "required area: {:?}, valid: {}",
//!     analysis.thermal.required_area,
//!     analysis.compliance.iter().all(|report| report.is_valid()),
//! );
//! # Ok(())
//! # }
//! ```

mod compliance;
mod error;
mod input;
mod pressure;
mod thermal;
mod vibration;

pub use compliance::{
    RuleStatus, Severity, Standard, StandardReport, ValidationRule, validate_exchanger,
};
pub use error::ExchangerError;
pub use input::{
    AirCooledDuty, CalculationMode, ExchangerGeometry, ExchangerInput, ExchangerKind,
    FluidStream, Phase, ServiceType, TubePattern,
};
pub use pressure::{
    FlowRegime, PressureDropResult, ShellSideDrop, TubeSideDrop, pressure_drops,
};
pub use thermal::{ThermalResult, performance};
pub use vibration::{VibrationResult, VibrationStatus, assess};

/// Output of the full calculation chain.
#[derive(Debug, Clone)]
pub struct ExchangerAnalysis {
    pub thermal: ThermalResult,
    pub pressure_drop: PressureDropResult,
    pub vibration: VibrationResult,
    /// One report per applicable standard, in dispatch order.
    pub compliance: Vec<StandardReport>,
}

/// Validates the input and runs every calculation stage.
///
/// # Errors
///
/// Returns [`ExchangerError::InvalidConfiguration`] for a non-physical
/// input and [`ExchangerError::TemperatureCross`] for an infeasible
/// temperature profile. Standards violations are not errors; they are
/// reported through [`ExchangerAnalysis::compliance`].
pub fn evaluate(input: &ExchangerInput) -> Result<ExchangerAnalysis, ExchangerError> {
    input.validate()?;

    let thermal = thermal::performance(input)?;
    let pressure_drop = pressure::pressure_drops(input);
    let vibration = vibration::assess(input, &pressure_drop);
    let compliance =
        compliance::validate_exchanger(input, &thermal, &pressure_drop, &vibration);

    Ok(ExchangerAnalysis {
        thermal,
        pressure_drop,
        vibration,
        compliance,
    })
}

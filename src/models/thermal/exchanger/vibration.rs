//! Flow-induced vibration screening for the tube bundle.
//!
//! Checks the classic failure mechanisms against the shell-side crossflow:
//! vortex-shedding resonance, fluidelastic instability (Connors), turbulent
//! buffeting, and acoustic resonance in gas service.

use std::f64::consts::PI;

use uom::si::{
    f64::{Frequency, Ratio, Velocity},
    frequency::hertz,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use super::{
    input::{ExchangerInput, TubePattern},
    pressure::PressureDropResult,
};

/// Tube material properties assumed for the screening: carbon steel.
const ELASTIC_MODULUS: f64 = 200.0e9;
const TUBE_METAL_DENSITY: f64 = 7850.0;

/// Fluidelastic threshold on `V/V_crit`.
const FEI_LIMIT: f64 = 0.8;
/// Threshold on the damage number `(V/V_crit)²`.
const DAMAGE_LIMIT: f64 = 0.5;
/// Vortex-shedding lock-in band on `f_vs/f_n`.
const RESONANCE_BAND: (f64, f64) = (0.7, 1.3);
/// Fraction of each limit at which the verdict degrades to marginal.
const MARGINAL_FRACTION: f64 = 0.9;
/// Proximity band for acoustic coincidence.
const ACOUSTIC_PROXIMITY: f64 = 0.2;

/// Overall verdict of the vibration screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VibrationStatus {
    Safe,
    /// Within 90 % of at least one limit.
    Marginal,
    Unsafe,
}

#[derive(Debug, Clone)]
pub struct VibrationResult {
    /// First-mode natural frequency of a tube over the central baffle span.
    pub natural_frequency: Frequency,
    pub vortex_shedding_frequency: Frequency,
    pub turbulent_buffeting_frequency: Frequency,
    /// Standing-wave frequency across the shell. Gas service only.
    pub acoustic_resonance_frequency: Option<Frequency>,
    /// Connors critical crossflow velocity.
    pub critical_velocity: Velocity,
    /// Crossflow velocity over the critical velocity.
    pub velocity_ratio: Ratio,
    /// Vortex-shedding frequency over the natural frequency.
    pub frequency_ratio: Ratio,
    /// `V / (f_n · d_o)`.
    pub reduced_velocity: Ratio,
    /// Square of the velocity ratio.
    pub damage_number: Ratio,
    pub resonance_risk: bool,
    pub fei_risk: bool,
    pub acoustic_risk: bool,
    pub status: VibrationStatus,
    pub recommendations: Vec<String>,
}

/// Strouhal number for crossflow over the bundle.
fn strouhal(pattern: TubePattern) -> f64 {
    match pattern {
        TubePattern::Triangular30 | TubePattern::Triangular60 => 0.21,
        TubePattern::Square90 => 0.19,
        TubePattern::RotatedSquare45 => 0.25,
    }
}

/// Connors instability constant.
fn connors_constant(pattern: TubePattern) -> f64 {
    match pattern {
        TubePattern::Triangular30 => 3.2,
        TubePattern::Triangular60 => 3.5,
        TubePattern::Square90 => 4.0,
        TubePattern::RotatedSquare45 => 3.4,
    }
}

/// Runs the vibration screening against the shell-side crossflow state.
#[must_use]
pub fn assess(input: &ExchangerInput, pressure: &PressureDropResult) -> VibrationResult {
    let geometry = &input.geometry;

    let d_o = geometry.tube_outer_diameter.get::<meter>();
    let d_i = geometry.tube_inner_diameter().get::<meter>();
    let span = geometry.baffle_spacing.get::<meter>();

    let rho_shell = input.hot.density.get::<kilogram_per_cubic_meter>();
    let rho_tube = input.cold.density.get::<kilogram_per_cubic_meter>();

    // Effective mass per unit length: tube metal, the tube-side fill, and the
    // displaced shell-side fluid (added-mass approximation).
    let metal_area = PI * (d_o.powi(2) - d_i.powi(2)) / 4.0;
    let mass_per_length = TUBE_METAL_DENSITY * metal_area
        + rho_tube * PI * d_i.powi(2) / 4.0
        + rho_shell * PI * d_o.powi(2) / 4.0;

    // Simply-supported beam, first mode: f_n = (π/2)·√(EI/m)/L².
    let inertia = PI * (d_o.powi(4) - d_i.powi(4)) / 64.0;
    let natural = (PI / 2.0) * (ELASTIC_MODULUS * inertia / mass_per_length).sqrt()
        / span.powi(2);

    let velocity = pressure.shell.velocity.get::<meter_per_second>();

    let vortex_shedding = strouhal(geometry.tube_pattern) * velocity / d_o;

    // Owen's turbulent buffeting correlation on the transverse pitch ratio.
    let x_t = geometry.pitch_ratio().get::<ratio>();
    let buffeting =
        velocity / (x_t.powi(2) * d_o) * (3.05 * (1.0 - 1.0 / x_t).powi(2) + 0.28);

    // Connors: V_crit = K·f_n·d_o·√(m·δ/(ρ·d_o²)).
    let log_decrement = if input.hot.phase.is_gas() { 0.01 } else { 0.03 };
    let critical = connors_constant(geometry.tube_pattern)
        * natural
        * d_o
        * (mass_per_length * log_decrement / (rho_shell * d_o.powi(2))).sqrt();

    let velocity_ratio = if critical > 0.0 { velocity / critical } else { 0.0 };
    let damage_number = velocity_ratio.powi(2);
    let frequency_ratio = if natural > 0.0 { vortex_shedding / natural } else { 0.0 };
    let reduced_velocity = if natural > 0.0 { velocity / (natural * d_o) } else { 0.0 };

    let acoustic = input.hot.phase.is_gas().then(|| {
        let t_avg = (input.hot.inlet_temperature.get::<kelvin>()
            + input.hot.outlet_temperature.get::<kelvin>())
            / 2.0;
        let sonic = (1.3 * 287.0 * t_avg).sqrt();
        sonic / (2.0 * geometry.shell_inner_diameter.get::<meter>())
    });

    let fei_risk = velocity_ratio >= FEI_LIMIT;
    let damage_risk = damage_number >= DAMAGE_LIMIT;
    let resonance_risk =
        frequency_ratio >= RESONANCE_BAND.0 && frequency_ratio <= RESONANCE_BAND.1;
    let acoustic_risk = acoustic.is_some_and(|f_a| {
        let near = |f: f64| f_a > 0.0 && (f - f_a).abs() / f_a <= ACOUSTIC_PROXIMITY;
        near(vortex_shedding) || near(buffeting)
    });

    let marginal = velocity_ratio >= MARGINAL_FRACTION * FEI_LIMIT
        || damage_number >= MARGINAL_FRACTION * DAMAGE_LIMIT
        || (frequency_ratio >= MARGINAL_FRACTION * RESONANCE_BAND.0
            && frequency_ratio <= RESONANCE_BAND.1 / MARGINAL_FRACTION);

    let status = if fei_risk || damage_risk || resonance_risk || acoustic_risk {
        VibrationStatus::Unsafe
    } else if marginal {
        VibrationStatus::Marginal
    } else {
        VibrationStatus::Safe
    };

    let mut recommendations = Vec::new();
    if fei_risk {
        recommendations.push(
            "Crossflow velocity exceeds the fluidelastic stability threshold; \
             reduce shell-side flow or tighten baffle spacing."
                .to_string(),
        );
    }
    if damage_risk {
        recommendations.push(
            "Damage number exceeds its limit; add intermediate tube supports."
                .to_string(),
        );
    }
    if resonance_risk {
        recommendations.push(
            "Vortex shedding is locked in with the tube natural frequency; \
             change baffle spacing to shift the natural frequency."
                .to_string(),
        );
    }
    if acoustic_risk {
        recommendations.push(
            "Acoustic standing wave coincides with an excitation frequency; \
             fit a detuning baffle."
                .to_string(),
        );
    }

    VibrationResult {
        natural_frequency: Frequency::new::<hertz>(natural),
        vortex_shedding_frequency: Frequency::new::<hertz>(vortex_shedding),
        turbulent_buffeting_frequency: Frequency::new::<hertz>(buffeting),
        acoustic_resonance_frequency: acoustic.map(Frequency::new::<hertz>),
        critical_velocity: Velocity::new::<meter_per_second>(critical),
        velocity_ratio: Ratio::new::<ratio>(velocity_ratio),
        frequency_ratio: Ratio::new::<ratio>(frequency_ratio),
        reduced_velocity: Ratio::new::<ratio>(reduced_velocity),
        damage_number: Ratio::new::<ratio>(damage_number),
        resonance_risk,
        fei_risk,
        acoustic_risk,
        status,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::input::{Phase, test_support::*},
        super::pressure::pressure_drops,
        *,
    };

    #[test]
    fn typical_water_service_has_a_verdict_and_positive_frequencies() {
        let input = counter_flow_input();
        let pressure = pressure_drops(&input);
        let result = assess(&input, &pressure);

        assert!(result.natural_frequency.get::<hertz>() > 0.0);
        assert!(result.vortex_shedding_frequency.get::<hertz>() > 0.0);
        assert!(result.critical_velocity.get::<meter_per_second>() > 0.0);
        assert!(result.acoustic_resonance_frequency.is_none());
    }

    #[test]
    fn fluidelastic_exceedance_is_unsafe_with_a_recommendation() {
        let mut input = counter_flow_input();
        // Drive the crossflow velocity up with a heavy shell-side flow and a
        // tight crossflow window.
        input.hot.mass_flow = uom::si::f64::MassRate::new::<
            uom::si::mass_rate::kilogram_per_second,
        >(400.0);

        let pressure = pressure_drops(&input);
        let result = assess(&input, &pressure);

        assert!(result.velocity_ratio.get::<ratio>() > FEI_LIMIT);
        assert!(result.fei_risk);
        assert_eq!(result.status, VibrationStatus::Unsafe);
        assert!(
            result
                .recommendations
                .iter()
                .any(|r| r.contains("fluidelastic"))
        );
    }

    #[test]
    fn damage_number_is_the_squared_velocity_ratio() {
        let input = counter_flow_input();
        let pressure = pressure_drops(&input);
        let result = assess(&input, &pressure);

        approx::assert_relative_eq!(
            result.damage_number.get::<ratio>(),
            result.velocity_ratio.get::<ratio>().powi(2),
            max_relative = 1e-12
        );
    }

    #[test]
    fn gas_shell_service_reports_an_acoustic_frequency() {
        let mut input = counter_flow_input();
        input.hot.phase = Phase::Vapor;

        let pressure = pressure_drops(&input);
        let result = assess(&input, &pressure);

        let f_a = result.acoustic_resonance_frequency.unwrap();
        assert!(f_a.get::<hertz>() > 0.0);
    }
}
